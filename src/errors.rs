//! Unified error type for the tracker core.
//!
//! Persistence errors are absorbed at the adapter boundary: a failed initial
//! load becomes the store's load-error flag, and a failed durable write is
//! logged by the background write task. Derivation functions never fail.

use std::time::Duration;
use thiserror::Error;

/// All errors the crate can produce.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid caller-supplied input, e.g. an empty name or negative amount.
    #[error("validation error: {message}")]
    Validation {
        /// What was wrong with the input
        message: String,
    },

    /// Configuration error, e.g. an unreadable seed file.
    #[error("configuration error: {message}")]
    Config {
        /// What went wrong while loading configuration
        message: String,
    },

    /// Error from the remote database backend.
    #[error("database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// I/O error from the local durable store.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A persisted row held a value the domain model cannot represent.
    #[error("malformed row in {table}: {message}")]
    MalformedRow {
        /// Table the row came from
        table: &'static str,
        /// What failed to translate
        message: String,
    },

    /// The initial remote load exceeded its time budget.
    #[error("timed out loading remote data after {0:?}")]
    LoadTimeout(Duration),

    /// A mutation referenced an entity that is not in the store.
    #[error("{entity} not found: {id}")]
    NotFound {
        /// Kind of entity looked up
        entity: &'static str,
        /// Identity that missed
        id: i64,
    },

    /// A background write task panicked or was cancelled before finishing.
    #[error("background write did not complete: {message}")]
    WriteTask {
        /// Join error description
        message: String,
    },
}

// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
