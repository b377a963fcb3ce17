pub mod builder;
pub mod filtering;
pub mod pagination;
pub mod prelude;
pub mod types;

pub use builder::CatalogQueryBuilder;
pub use filtering::filter_items;
pub use pagination::paginate;
pub use types::*;
