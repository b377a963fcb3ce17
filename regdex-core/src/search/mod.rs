//! Fuzzy search over the catalog.
//!
//! The index is built once alongside the catalog and never rebuilt. Queries
//! use an extended syntax (see [`extended`]) where plain words are fuzzy
//! matched with a skim/fzf-like scorer and prefixed words add exact, prefix,
//! suffix, and negated constraints.
//!
//! An empty or whitespace-only keyword returns no hits.

pub mod extended;
pub mod index;
mod ranking;

pub use index::SearchIndex;

use regdex_model::CatalogItem;
use serde::{Deserialize, Serialize};

/// Catalog fields the index can search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchField {
    Title,
    Authors,
    Description,
    Tags,
}

impl SearchField {
    pub fn all() -> &'static [SearchField] {
        use SearchField::*;
        &[Title, Authors, Description, Tags]
    }

    /// Multiplier applied to a field's match score. Titles dominate so that a
    /// title hit outranks the same word buried in a description.
    pub fn weight(&self) -> i64 {
        match self {
            SearchField::Title => 4,
            SearchField::Authors => 2,
            SearchField::Tags => 2,
            SearchField::Description => 1,
        }
    }
}

/// Index configuration, fixed at catalog build time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Fields included in the index. Must not be empty.
    pub fields: Vec<SearchField>,
    /// Optional cap on returned hits; `None` returns every match.
    pub max_results: Option<usize>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            fields: SearchField::all().to_vec(),
            max_results: None,
        }
    }
}

/// A ranked search result referencing its position in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchHit<'a> {
    pub item: &'a CatalogItem,
    pub ref_index: usize,
    /// Higher is better.
    pub score: i64,
}
