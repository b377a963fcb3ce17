//! Intentional query crate surface consumed by presentation layers.

pub use super::builder::CatalogQueryBuilder;
pub use super::filtering::filter_items;
pub use super::pagination::paginate;
pub use super::types::{
    CatalogFilters, DEFAULT_PAGE_LIMIT, DateRangeFilter, DateRangeParams,
    PageQuery, PageRequest, TagFilter,
};
pub use regdex_model::PageResult;
