//! Output formatting for CLI display
//!
//! This module provides the human-readable renderings used by the CLI and
//! stored in the catalog: size labels, item lines and tag summaries.

use crate::catalog::Item;
use byte_unit::{Byte, Unit, UnitType};
use colored::Colorize;

const KIB: u64 = 1024;
const MIB: u64 = 1024 * 1024;

/// Whether an item's stored file is still present
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileStatus {
    Present,
    Missing,
}

/// Size label stored in `tamanho`
///
/// Bytes below 1 KiB are printed exactly; larger sizes use one decimal in
/// KB or MB (binary multiples), e.g. `512 B`, `1.5 KB`, `3.2 MB`.
#[must_use]
pub fn format_size(bytes: u64) -> String {
    let byte = Byte::from_u64(bytes);
    if bytes < KIB {
        format!("{bytes} B")
    } else if bytes < MIB {
        format!("{:.1} KB", byte.get_adjusted_unit(Unit::KiB).get_value())
    } else {
        format!("{:.1} MB", byte.get_adjusted_unit(Unit::MiB).get_value())
    }
}

/// Size with the most appropriate binary unit, for summaries
#[must_use]
pub fn format_size_exact(bytes: u64) -> String {
    Byte::from_u64(bytes)
        .get_appropriate_unit(UnitType::Binary)
        .to_string()
}

/// Format an item for list and search output
#[must_use]
pub fn item_line(item: &Item, status: FileStatus, quiet: bool) -> String {
    if quiet {
        return format!("{}\t{}", item.id, item.file);
    }

    let mut line = format!(
        "  #{} {} ({}) [{}]  {} | {}",
        item.id,
        item.title.bold(),
        item.kind,
        item.tags.join(", "),
        item.uploaded_at,
        item.size,
    );
    if status == FileStatus::Missing {
        line.push_str(&format!("  {}", "file missing".red()));
    }
    line
}

/// Format an item description as an indented block, if it has one
#[must_use]
pub fn description_block(item: &Item) -> Option<String> {
    if item.description.is_empty() {
        return None;
    }
    Some(
        item.description
            .lines()
            .map(|line| format!("      {line}"))
            .collect::<Vec<_>>()
            .join("\n"),
    )
}

/// Format a tag with usage count
#[must_use]
pub fn tag_with_count(tag: &str, count: usize, quiet: bool) -> String {
    if quiet {
        tag.to_string()
    } else {
        format!("  {tag} (used by {count} item(s))")
    }
}
