//! Item predicates used by the query engine
//!
//! Each predicate covers one filter dimension. They are combined with AND by
//! [`Query`](super::Query), but can also be used on their own through the
//! [`ItemFilterExt`] iterator adapter:
//!
//! ```
//! use mediacat::search::{ItemFilterExt, Selector};
//! # let items: Vec<mediacat::catalog::Item> = Vec::new();
//!
//! let logos = items
//!     .iter()
//!     .keep_tag(&Selector::only("logo"))
//!     .into_iter()
//!     .keep_text(Some("azul"));
//! assert!(logos.is_empty());
//! ```

use super::Selector;
use crate::catalog::Item;

/// Kind predicate: the stored kind label equals the selected value exactly
#[must_use]
pub fn matches_kind(item: &Item, kind: &Selector) -> bool {
    kind.admits(item.kind.label())
}

/// Tag predicate: the tag sequence contains the selected tag verbatim
#[must_use]
pub fn matches_tag(item: &Item, tag: &Selector) -> bool {
    match tag {
        Selector::All => true,
        Selector::Only(wanted) => item.has_tag(wanted),
    }
}

/// Free-text predicate
///
/// `needle` must already be lowercased. Matches when it is a substring of the
/// lowercased title, description or any single tag.
#[must_use]
pub fn matches_text(item: &Item, needle: &str) -> bool {
    item.title.to_lowercase().contains(needle)
        || item.description.to_lowercase().contains(needle)
        || item.tags.iter().any(|tag| tag.to_lowercase().contains(needle))
}

/// Normalize free text into a needle, or `None` when it filters nothing
#[must_use]
pub fn text_needle(text: Option<&str>) -> Option<String> {
    text.filter(|t| !t.is_empty()).map(str::to_lowercase)
}

/// Iterator adapter adding per-dimension item filtering
///
/// Input order is preserved by every adapter.
pub trait ItemFilterExt<'a>: Iterator<Item = &'a Item> + Sized {
    /// Keep items whose kind is admitted by `kind`
    fn keep_kind(self, kind: &Selector) -> Vec<&'a Item> {
        self.filter(|item| matches_kind(item, kind)).collect()
    }

    /// Keep items carrying the tag selected by `tag`
    fn keep_tag(self, tag: &Selector) -> Vec<&'a Item> {
        self.filter(|item| matches_tag(item, tag)).collect()
    }

    /// Keep items matching the free text; absent or empty text keeps everything
    fn keep_text(self, text: Option<&str>) -> Vec<&'a Item> {
        match text_needle(text) {
            Some(needle) => self.filter(|item| matches_text(item, &needle)).collect(),
            None => self.collect(),
        }
    }
}

impl<'a, I> ItemFilterExt<'a> for I where I: Iterator<Item = &'a Item> {}
