//! Query engine for the media catalog
//!
//! Stateless filtering of an item collection by free text, media kind and tag.
//! Filters combine with AND; results keep the order of the input collection.
//! Nothing here touches the disk, so none of it can fail.

pub mod filter;
pub mod query;

pub use filter::ItemFilterExt;
pub use query::{ALL, Query, Selector, all_tags, query};
