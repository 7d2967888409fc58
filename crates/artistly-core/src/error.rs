use thiserror::Error;

use crate::validation::FieldErrors;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("validation failed: {0}")]
    Validation(FieldErrors),

    #[error("access denied: {0}")]
    AccessDenied(String),
}

pub type Result<T> = std::result::Result<T, Error>;
