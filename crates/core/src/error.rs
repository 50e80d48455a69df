//! Error types for docfinder
//!
//! This module defines the error taxonomy shared by the store and the
//! search engine. We use `thiserror` for automatic `Display` and `Error`
//! trait implementations.

use std::io;
use thiserror::Error;

/// Result type alias for docfinder operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for docfinder
#[derive(Debug, Error)]
pub enum Error {
    /// Requested document has no stored content
    #[error("doc {name} not found")]
    NotFound {
        /// Name of the missing document
        name: String,
    },

    /// Malformed caller input
    #[error("bad input: {0}")]
    BadInput(String),

    /// I/O error from a storage backend
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Data corruption detected
    #[error("Data corruption: {0}")]
    Corruption(String),

    /// Storage layer error
    #[error("Storage error: {0}")]
    Storage(String),
}

impl Error {
    /// Create a `NotFound` error for a document name
    pub fn not_found(name: impl Into<String>) -> Self {
        Error::NotFound { name: name.into() }
    }

    /// Create a `BadInput` error
    pub fn bad_input(msg: impl Into<String>) -> Self {
        Error::BadInput(msg.into())
    }

    /// Stable machine-readable code for this error.
    ///
    /// Surrounding layers map these to status codes without inspecting
    /// the message.
    pub fn code(&self) -> &'static str {
        match self {
            Error::NotFound { .. } => "NOT_FOUND",
            Error::BadInput(_) => "BAD_INPUT",
            Error::Io(_) => "IO",
            Error::Serialization(_) => "SERIALIZATION",
            Error::Corruption(_) => "CORRUPTION",
            Error::Storage(_) => "STORAGE",
        }
    }

    /// Check if this is a `NotFound` error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }
}

impl From<rmp_serde::encode::Error> for Error {
    fn from(e: rmp_serde::encode::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

impl From<rmp_serde::decode::Error> for Error {
    fn from(e: rmp_serde::decode::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}
