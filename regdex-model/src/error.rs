use std::fmt::{self, Display};

/// Errors produced by model constructors and validation routines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// A date or date-time string that could not be read as an instant.
    InvalidTimestamp { input: String, reason: String },
    InvalidItem(String),
}

impl ModelError {
    pub(crate) fn invalid_timestamp(
        input: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        ModelError::InvalidTimestamp {
            input: input.into(),
            reason: reason.into(),
        }
    }
}

impl Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::InvalidTimestamp { input, reason } => {
                write!(f, "invalid timestamp {input:?}: {reason}")
            }
            ModelError::InvalidItem(msg) => write!(f, "invalid item: {msg}"),
        }
    }
}

impl std::error::Error for ModelError {}

pub type Result<T> = std::result::Result<T, ModelError>;
