//! Storage trait for the document index
//!
//! This module defines the DocumentStore trait that lets the search
//! engine run unchanged over an in-memory backing or a persistent one.

use std::collections::{BTreeSet, HashSet};

use crate::error::Result;
use crate::types::Posting;

/// Storage abstraction for documents, postings and word sets
///
/// Each method is a discrete get/put/upsert operation. Callers must not
/// assume atomicity across calls.
///
/// Thread safety: All methods must be safe to call concurrently from
/// multiple threads (requires Send + Sync).
pub trait DocumentStore: Send + Sync {
    /// Get the raw content of a document
    ///
    /// Returns None if no document with this name was stored.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage operation fails.
    fn get_document(&self, name: &str) -> Result<Option<String>>;

    /// Store the raw content of a document, replacing any previous content
    ///
    /// # Errors
    ///
    /// Returns an error if the storage operation fails.
    fn put_document(&self, name: &str, content: &str) -> Result<()>;

    /// Get the posting for `word` in document `name`
    ///
    /// # Errors
    ///
    /// Returns an error if the storage operation fails.
    fn get_posting(&self, name: &str, word: &str) -> Result<Option<Posting>>;

    /// Upsert the posting for `word` in document `name`
    ///
    /// # Errors
    ///
    /// Returns an error if the storage operation fails.
    fn put_posting(&self, name: &str, word: &str, posting: Posting) -> Result<()>;

    /// Drop every posting of document `name`
    ///
    /// # Errors
    ///
    /// Returns an error if the storage operation fails.
    fn remove_postings(&self, name: &str) -> Result<()>;

    /// Names of all stored documents in ascending order
    ///
    /// # Errors
    ///
    /// Returns an error if the storage operation fails.
    fn list_document_names(&self) -> Result<Vec<String>>;

    /// Every word ever indexed, across all documents
    ///
    /// # Errors
    ///
    /// Returns an error if the storage operation fails.
    fn list_indexed_words(&self) -> Result<BTreeSet<String>>;

    /// Add words to the indexed-word set
    ///
    /// # Errors
    ///
    /// Returns an error if the storage operation fails.
    fn add_indexed_words(&self, words: &[String]) -> Result<()>;

    /// The stored noise-word set
    ///
    /// # Errors
    ///
    /// Returns an error if the storage operation fails.
    fn noise_words(&self) -> Result<HashSet<String>>;

    /// Add words to the noise-word set; duplicates are ignored
    ///
    /// # Errors
    ///
    /// Returns an error if the storage operation fails.
    fn add_noise_words(&self, words: &[String]) -> Result<()>;

    /// Remove all documents, postings, indexed words and noise words
    ///
    /// # Errors
    ///
    /// Returns an error if the storage operation fails.
    fn clear(&self) -> Result<()>;
}
