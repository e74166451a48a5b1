//! Global search entry points.
//!
//! # Responsibility
//! - Expose the cross-collection substring search used by the header bar.
//! - Keep result shaping (context labels, snippets, grouping) inside core.

pub mod aggregator;

pub use aggregator::{
    build_snippet, group_results, search, SearchGroup, SearchItem, SearchResult,
    SearchResultKind,
};
