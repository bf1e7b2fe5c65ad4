//! Query composition over an in-memory item collection
//!
//! A [`Query`] bundles the three independent filters (free text, kind, tag)
//! and applies them with AND semantics in a single linear pass. Results keep
//! the input order; there is no ranking.

use super::filter::{matches_kind, matches_tag, matches_text, text_needle};
use crate::catalog::Item;
use std::collections::BTreeSet;

/// Filter value meaning "do not filter on this dimension"
pub const ALL: &str = "all";

/// Selection on a single filter dimension
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selector {
    /// Do not filter
    #[default]
    All,
    /// Keep only items whose value equals this exactly
    Only(String),
}

impl Selector {
    /// Select a single value
    pub fn only(value: impl Into<String>) -> Self {
        Self::Only(value.into())
    }

    /// Build a selector from an optional filter value
    ///
    /// `None` and the sentinel [`ALL`] both mean "no filter". Any other value,
    /// including the empty string, selects that value exactly.
    #[must_use]
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            None | Some(ALL) => Self::All,
            Some(v) => Self::Only(v.to_string()),
        }
    }

    /// Check whether `candidate` passes this selector (case-sensitive)
    #[must_use]
    pub fn admits(&self, candidate: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(value) => value == candidate,
        }
    }
}

impl From<Option<&str>> for Selector {
    fn from(value: Option<&str>) -> Self {
        Self::parse(value)
    }
}

/// Search parameters for the query engine
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    /// Case-insensitive substring matched against title, description and tags
    pub text: Option<String>,
    /// Kind filter, compared against the stored kind label
    pub kind: Selector,
    /// Tag filter, compared against each tag verbatim
    pub tag: Selector,
}

impl Query {
    /// An empty query that matches every item
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a query from raw optional filter values
    #[must_use]
    pub fn from_parts(text: Option<&str>, kind: Option<&str>, tag: Option<&str>) -> Self {
        Self {
            text: text.map(str::to_string),
            kind: Selector::parse(kind),
            tag: Selector::parse(tag),
        }
    }

    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    #[must_use]
    pub fn with_kind(mut self, kind: Selector) -> Self {
        self.kind = kind;
        self
    }

    #[must_use]
    pub fn with_tag(mut self, tag: Selector) -> Self {
        self.tag = tag;
        self
    }

    /// Check a single item against all three filters
    #[must_use]
    pub fn matches(&self, item: &Item) -> bool {
        let needle = text_needle(self.text.as_deref());
        self.matches_with(item, needle.as_deref())
    }

    /// Borrow the matching items, in input order
    #[must_use]
    pub fn apply<'a>(&self, items: &'a [Item]) -> Vec<&'a Item> {
        let needle = text_needle(self.text.as_deref());
        items
            .iter()
            .filter(|item| self.matches_with(item, needle.as_deref()))
            .collect()
    }

    /// Clone out the matching items, in input order
    #[must_use]
    pub fn run(&self, items: &[Item]) -> Vec<Item> {
        self.apply(items).into_iter().cloned().collect()
    }

    fn matches_with(&self, item: &Item, needle: Option<&str>) -> bool {
        matches_kind(item, &self.kind)
            && matches_tag(item, &self.tag)
            && needle.is_none_or(|n| matches_text(item, n))
    }
}

/// Filter `items` by free text, kind and tag
///
/// Shorthand for [`Query::from_parts`] followed by [`Query::run`].
///
/// # Examples
/// ```
/// use mediacat::search::query;
/// let found = query(&[], Some("logo"), Some("all"), None);
/// assert!(found.is_empty());
/// ```
#[must_use]
pub fn query(
    items: &[Item],
    free_text: Option<&str>,
    kind: Option<&str>,
    tag: Option<&str>,
) -> Vec<Item> {
    Query::from_parts(free_text, kind, tag).run(items)
}

/// Every distinct tag across `items`, sorted
#[must_use]
pub fn all_tags(items: &[Item]) -> Vec<String> {
    items
        .iter()
        .flat_map(|item| item.tags.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
