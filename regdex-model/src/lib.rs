//! Core data model definitions shared across regdex crates.
#![allow(missing_docs)]

pub use ::chrono;

pub mod error;
pub mod item;
pub mod page;
pub mod preset;
pub mod timestamp;

pub use error::{ModelError, Result as ModelResult};
pub use item::{Author, CatalogItem};
pub use page::PageResult;
pub use preset::{DateRange, DateRangePreset, PRESETS, PresetName};
pub use timestamp::parse_instant;
