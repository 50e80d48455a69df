//! Core types and traits for docfinder
//!
//! This crate defines the foundational types used throughout the system:
//! - Posting: per-document word occurrence record
//! - SearchHit: merged search result
//! - Error: Error type hierarchy
//! - DocumentStore: storage trait implemented by memory and disk backings

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod traits;
pub mod types;

pub use error::{Error, Result};
pub use traits::DocumentStore;
pub use types::{Posting, SearchHit};
