//! Date helpers for presentation layers.
//!
//! Independent of the catalog: relative "time ago" strings, named date-range
//! presets for pickers, and long-form date formatting.

mod format;
mod presets;
mod relative;

pub use format::{format_long_date, format_long_date_str};
pub use presets::{preset_label, presets, resolve_preset, resolve_preset_at};
pub use relative::{relative_time, relative_time_from_now};
