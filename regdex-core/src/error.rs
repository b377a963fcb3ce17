use regdex_model::ModelError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Catalog item not found: {0}")]
    NotFound(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Invalid {field}: {source}")]
    Parse {
        field: &'static str,
        #[source]
        source: ModelError,
    },

    #[error("Unknown date range preset: {0}")]
    UnknownPreset(String),

    #[error(
        "Cannot draw {requested} distinct items from a catalog of {available}"
    )]
    InsufficientItems { requested: usize, available: usize },

    #[error("Invalid catalog item: {0}")]
    InvalidItem(#[source] ModelError),

    #[error("Duplicate catalog slug: {0}")]
    DuplicateSlug(String),

    #[error("Invalid search configuration: {0}")]
    InvalidSearchConfig(String),

    #[error("Catalog already initialized")]
    AlreadyInitialized,
}

pub type Result<T> = std::result::Result<T, CatalogError>;
