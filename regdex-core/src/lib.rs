//! # Regdex Core
//!
//! In-memory query engine for a small, static catalog of registry items.
//!
//! ## Overview
//!
//! `regdex-core` loads a fixed list of items once and answers read-only
//! queries against it:
//!
//! - **Lookup**: fetch an item by slug, list everything, or show the most
//!   recently added entries
//! - **Filtering and pagination**: tag intersection plus an inclusive
//!   creation-date window, sliced into 1-based pages
//! - **Fuzzy search**: weighted ranking across title, authors, description
//!   and tags, with an extended operator syntax
//! - **Recommendations**: uniform random sampling without replacement
//! - **Dates**: relative "N units ago" strings and named date-range presets
//!
//! ## Architecture
//!
//! - [`catalog`]: the [`Catalog`] store, its loader and the process-wide
//!   instance
//! - [`query`]: filters, page requests and the query builder
//! - [`search`]: the precomputed fuzzy search index
//! - [`recommend`]: random sampling
//! - [`dates`]: relative time formatting and preset resolution
//! - [`config`]: settings loaded from files or the environment
//! - [`format`]: JSON/TOML detection shared by the two loaders
//!
//! ## Examples
//!
//! ```no_run
//! use regdex_core::{Catalog, CatalogConfig, CatalogItem};
//!
//! fn show() -> regdex_core::Result<()> {
//!     let items = vec![
//!         CatalogItem::new("react", "React").with_tags(["ui", "web"]),
//!         CatalogItem::new("tokio", "Tokio").with_tags(["async"]),
//!     ];
//!     let catalog = Catalog::from_items(items, CatalogConfig::default())?;
//!
//!     let page = catalog.get_page("1", Some("10"), &["web"], None)?;
//!     println!("{} of {} items", page.data.len(), page.total_items);
//!
//!     for hit in catalog.search("recat") {
//!         println!("{} ({})", hit.item.title, hit.score);
//!     }
//!     Ok(())
//! }
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(missing_docs)]

/// Catalog store, data file loading and the process-wide instance
pub mod catalog;

/// Settings loaded from files or the environment
pub mod config;

/// Relative time formatting and named date-range presets
pub mod dates;

/// Error types and error handling utilities
pub mod error;

/// JSON/TOML detection for data and config files
pub mod format;

/// Tag and date filtering with pagination
pub mod query;

/// Random recommendations
pub mod recommend;

/// Fuzzy search index and extended query syntax
pub mod search;

/// Query helper exports grouped for presentation layers
pub use query::prelude as query_prelude;

pub use catalog::{Catalog, global, install};
pub use config::{CatalogConfig, ConfigSource};
pub use error::{CatalogError, Result};
pub use format::DataFormat;
pub use recommend::Recommendation;
pub use search::{SearchConfig, SearchField, SearchHit};

pub use regdex_model::{
    Author, CatalogItem, DateRange, DateRangePreset, PRESETS, PageResult,
    PresetName,
};
