//! Integration tests for mediacat
//!
//! These tests exercise the public API end to end: a library is opened on a
//! temporary directory, files are added, and the catalog is read back and
//! searched the way the CLI does it.

use mediacat::{
    Item, Library, MediaKind, Upload,
    catalog::Catalog,
    config::MediacatConfig,
    library::LibraryError,
    search::{self, Query, Selector},
    storage::{MediaStore, Quota},
};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Helper function to open a library rooted in a temporary directory
fn setup_library(dir: &TempDir, quota: u64) -> Library {
    let catalog = Catalog::open(dir.path().join("database").join("metadata.json")).unwrap();
    let store = MediaStore::open(dir.path().join("uploads")).unwrap();
    Library::new(catalog, store, Quota::new(quota))
}

/// Helper function to build a record without storing any file
fn record(id: u64, title: &str, kind: MediaKind, tags: &[&str]) -> Item {
    Item {
        id,
        title: title.into(),
        file: format!("{id}.bin"),
        kind,
        tags: tags.iter().map(|t| (*t).to_string()).collect(),
        description: String::new(),
        size: "1 B".into(),
        uploaded_at: "2024-03-01 10:00:00".into(),
    }
}

fn ids(items: &[Item]) -> Vec<u64> {
    items.iter().map(|i| i.id).collect()
}

#[test]
fn test_query_scenario() {
    let items = vec![
        record(1, "Logo Azul", MediaKind::Image, &["logo", "2024"]),
        record(2, "Evento", MediaKind::Video, &["video", "2023"]),
    ];

    assert_eq!(ids(&search::query(&items, Some("logo"), None, None)), vec![1]);
    assert_eq!(ids(&search::query(&items, None, Some("Vídeo"), None)), vec![2]);
    assert_eq!(ids(&search::query(&items, None, None, Some("2024"))), vec![1]);
    assert!(search::query(&items, Some("2023"), Some("Imagem"), None).is_empty());
    assert_eq!(ids(&search::query(&items, None, None, None)), vec![1, 2]);
}

#[test]
fn test_query_builder_matches_free_function() {
    let items = vec![
        record(1, "Logo Azul", MediaKind::Image, &["logo", "2024"]),
        record(2, "Evento", MediaKind::Video, &["video", "2023"]),
        record(3, "Banner", MediaKind::Image, &["2024"]),
    ];

    let query = Query::new()
        .with_text("20")
        .with_kind(Selector::only("Imagem"))
        .with_tag(Selector::only("2024"));

    assert_eq!(ids(&query.run(&items)), vec![1, 3]);
    assert_eq!(
        query.run(&items),
        search::query(&items, Some("20"), Some("Imagem"), Some("2024"))
    );
}

#[test]
fn test_add_list_and_reopen() {
    let dir = TempDir::new().unwrap();
    {
        let library = setup_library(&dir, Quota::default().limit());
        library
            .add_item("Logo Azul", "logo, 2024", Some("versão oficial"), &Upload::new("logo.png", vec![7; 2048]))
            .unwrap();
        library
            .add_item("Evento", "video,2023", None, &Upload::new("evento.mp4", vec![1; 10]))
            .unwrap();
    }

    let library = setup_library(&dir, Quota::default().limit());
    let items = library.list_items().unwrap();

    assert_eq!(ids(&items), vec![1, 2]);
    assert_eq!(items[0].title, "Logo Azul");
    assert_eq!(items[0].description, "versão oficial");
    assert_eq!(items[0].size, "2.0 KB");
    assert_eq!(items[1].kind, MediaKind::Video);
    assert_eq!(items[1].tags, vec!["video", "2023"]);
    assert_eq!(items[1].size, "10 B");
    assert_eq!(library.tags().unwrap(), vec!["2023", "2024", "logo", "video"]);
}

#[test]
fn test_catalog_round_trip_is_lossless() {
    let dir = TempDir::new().unwrap();
    let catalog = Catalog::open(dir.path().join("metadata.json")).unwrap();

    let mut item = record(1, "Café com \"aspas\"", MediaKind::Video, &["Tag", "tag", "Tag"]);
    item.description = "linha 1\nlinha 2".into();
    let items = vec![item, record(2, "Outro", MediaKind::Image, &["x"])];

    catalog.save(&items).unwrap();
    assert_eq!(catalog.load().unwrap(), items);
}

#[test]
fn test_catalog_file_uses_original_field_names() {
    let dir = TempDir::new().unwrap();
    let catalog = Catalog::open(dir.path().join("metadata.json")).unwrap();
    catalog.save(&[record(1, "Logo", MediaKind::Video, &["a"])]).unwrap();

    let text = fs::read_to_string(catalog.path()).unwrap();
    for field in ["\"titulo\"", "\"arquivo\"", "\"tipo\"", "\"descricao\"", "\"tamanho\"", "\"data_upload\""] {
        assert!(text.contains(field), "missing {field} in {text}");
    }
    assert!(text.contains("\"Vídeo\""));
}

#[test]
fn test_ids_are_sequential() {
    let dir = TempDir::new().unwrap();
    let library = setup_library(&dir, Quota::default().limit());

    for n in 1..=4 {
        let item = library
            .add_item(&format!("Item {n}"), "t", None, &Upload::new(format!("f{n}.gif"), vec![0; 4]))
            .unwrap();
        assert_eq!(item.id, n);
    }
    assert_eq!(library.catalog().count().unwrap(), 4);
}

#[test]
fn test_empty_catalog() {
    let dir = TempDir::new().unwrap();
    let library = setup_library(&dir, Quota::default().limit());

    assert!(library.list_items().unwrap().is_empty());
    assert!(library.search(Some("x"), None, None).unwrap().is_empty());
    assert!(library.tags().unwrap().is_empty());
    assert_eq!(library.stats().unwrap().total, 0);
    assert_eq!(fs::read_to_string(library.catalog().path()).unwrap().trim(), "[]");
}

#[test]
fn test_corrupt_catalog_strict_and_lenient() {
    let dir = TempDir::new().unwrap();
    let library = setup_library(&dir, Quota::default().limit());
    fs::write(library.catalog().path(), "{ definitely not json").unwrap();

    assert!(matches!(library.list_items(), Err(LibraryError::Catalog(_))));
    assert!(library.catalog().load_lenient().is_empty());

    let result = library.add_item("A", "a", None, &Upload::new("a.png", vec![1]));
    assert!(result.is_err());
    assert_eq!(
        fs::read_to_string(library.catalog().path()).unwrap(),
        "{ definitely not json"
    );
}

#[test]
fn test_quota_boundary() {
    let dir = TempDir::new().unwrap();
    let library = setup_library(&dir, 1000);

    library.add_item("A", "a", None, &Upload::new("a.png", vec![0; 600])).unwrap();

    let over = library.add_item("B", "b", None, &Upload::new("b.png", vec![0; 401]));
    assert!(matches!(
        over,
        Err(LibraryError::QuotaExceeded { requested: 401, available: 400 })
    ));

    library.add_item("C", "c", None, &Upload::new("c.png", vec![0; 400])).unwrap();

    let full = library.add_item("D", "d", None, &Upload::new("d.png", vec![0; 1]));
    assert!(matches!(full, Err(LibraryError::QuotaReached { limit: 1000 })));

    let stats = library.stats().unwrap();
    assert_eq!(stats.used_bytes, 1000);
    assert_eq!(stats.available_bytes(), 0);
    assert_eq!(ids(&library.list_items().unwrap()), vec![1, 2]);
}

#[test]
fn test_quota_boundary_scaled() {
    // 199 of 200 units used; 1 unit = 1 KiB
    const UNIT: usize = 1024;
    let dir = TempDir::new().unwrap();
    let library = setup_library(&dir, 200 * UNIT as u64);
    library.add_item("Base", "a", None, &Upload::new("base.mp4", vec![0; 199 * UNIT])).unwrap();

    let two = library.add_item("Two", "b", None, &Upload::new("two.png", vec![0; 2 * UNIT]));
    assert!(matches!(
        two,
        Err(LibraryError::QuotaExceeded { requested, available })
            if requested == 2 * UNIT as u64 && available == UNIT as u64
    ));
    assert!(!library.store().exists("two.png"));

    let half = library
        .add_item("Half", "c", None, &Upload::new("half.png", vec![0; UNIT / 2]))
        .unwrap();
    assert_eq!(half.id, 2);
    assert_eq!(library.stats().unwrap().used_bytes, (199 * UNIT + UNIT / 2) as u64);
}

#[test]
fn test_same_name_uploads_do_not_overwrite() {
    let dir = TempDir::new().unwrap();
    let library = setup_library(&dir, Quota::default().limit());

    let first = library.add_item("One", "a", None, &Upload::new("photo.jpg", vec![1; 3])).unwrap();
    let second = library.add_item("Two", "a", None, &Upload::new("photo.jpg", vec![2; 5])).unwrap();

    assert_ne!(first.file, second.file);
    assert_eq!(fs::read(library.store().path_of(&first.file)).unwrap(), vec![1; 3]);
    assert_eq!(fs::read(library.store().path_of(&second.file)).unwrap(), vec![2; 5]);
}

#[test]
fn test_prefixed_name_upload_is_not_overwritten() {
    let dir = TempDir::new().unwrap();
    let library = setup_library(&dir, Quota::default().limit());

    let a = library.add_item("A", "a", None, &Upload::new("photo.jpg", vec![1; 3])).unwrap();
    let b = library.add_item("B", "b", None, &Upload::new("3_photo.jpg", vec![2; 5])).unwrap();
    let c = library.add_item("C", "c", None, &Upload::new("photo.jpg", vec![3; 7])).unwrap();

    let keys = [&a.file, &b.file, &c.file];
    assert_ne!(keys[0], keys[1]);
    assert_ne!(keys[1], keys[2]);
    assert_ne!(keys[0], keys[2]);
    assert_eq!(fs::read(library.store().path_of(&a.file)).unwrap(), vec![1; 3]);
    assert_eq!(fs::read(library.store().path_of(&b.file)).unwrap(), vec![2; 5]);
    assert_eq!(fs::read(library.store().path_of(&c.file)).unwrap(), vec![3; 7]);
    assert_eq!(library.stats().unwrap().used_bytes, 15);
}

#[test]
fn test_upload_from_path_and_export() {
    let dir = TempDir::new().unwrap();
    let library = setup_library(&dir, Quota::default().limit());

    let source = dir.path().join("clip.mov");
    fs::write(&source, b"moving pictures").unwrap();
    let item = library
        .add_item("Clip", "video", None, &Upload::from_path(&source).unwrap())
        .unwrap();
    assert_eq!(item.kind, MediaKind::Video);
    assert_eq!(item.file, "clip.mov");

    let out = dir.path().join("out");
    fs::create_dir(&out).unwrap();
    let written = library.export(item.id, &out).unwrap();
    assert_eq!(written, out.join("clip.mov"));
    assert_eq!(fs::read(written).unwrap(), b"moving pictures");
}

#[test]
fn test_library_open_from_config() {
    let dir = TempDir::new().unwrap();
    let config = MediacatConfig {
        catalog_path: dir.path().join("db").join("metadata.json"),
        upload_dir: dir.path().join("files"),
        quota_bytes: 64,
        ..MediacatConfig::default()
    };

    let library = Library::open(&config).unwrap();
    assert!(Path::new(&config.catalog_path).exists());
    assert!(config.upload_dir.is_dir());
    assert_eq!(library.quota().limit(), 64);

    let result = library.add_item("Big", "b", None, &Upload::new("big.png", vec![0; 65]));
    assert!(matches!(result, Err(LibraryError::QuotaExceeded { .. })));
}
