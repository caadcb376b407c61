//! Error types for the MindOS diagnosis engine.
//!
//! The scoring pipeline itself is infallible: unresolved references and
//! unrecognized axis keys are dropped, not surfaced. Errors only arise at
//! the boundary where catalog content is loaded and validated.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("Duplicate episode id: {id}")]
    DuplicateEpisode { id: String },

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}
