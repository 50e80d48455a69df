//! MemoryStore: in-process storage backend
//!
//! Documents, postings and word sets live in hash maps behind a single
//! `parking_lot::RwLock`. The same `MemoryState` is the replay target of
//! the disk backend, so both backings share one set of mutation rules.

use std::collections::{BTreeSet, HashSet};

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use docfinder_core::{DocumentStore, Posting, Result};

use crate::record::LogRecord;

/// Plain, unsynchronized index state
#[derive(Debug, Default, Clone)]
pub(crate) struct MemoryState {
    /// Document name -> raw content
    documents: FxHashMap<String, String>,
    /// Document name -> (word -> posting)
    postings: FxHashMap<String, FxHashMap<String, Posting>>,
    /// Every word ever indexed
    indexed_words: BTreeSet<String>,
    /// Words excluded from indexing
    noise_words: HashSet<String>,
}

impl MemoryState {
    pub(crate) fn get_document(&self, name: &str) -> Option<String> {
        self.documents.get(name).cloned()
    }

    pub(crate) fn put_document(&mut self, name: &str, content: &str) {
        self.documents.insert(name.to_string(), content.to_string());
    }

    pub(crate) fn get_posting(&self, name: &str, word: &str) -> Option<Posting> {
        self.postings.get(name).and_then(|p| p.get(word)).copied()
    }

    pub(crate) fn put_posting(&mut self, name: &str, word: &str, posting: Posting) {
        self.postings
            .entry(name.to_string())
            .or_default()
            .insert(word.to_string(), posting);
    }

    pub(crate) fn remove_postings(&mut self, name: &str) {
        self.postings.remove(name);
    }

    pub(crate) fn document_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.documents.keys().cloned().collect();
        names.sort();
        names
    }

    pub(crate) fn indexed_words(&self) -> BTreeSet<String> {
        self.indexed_words.clone()
    }

    pub(crate) fn add_indexed_words(&mut self, words: &[String]) {
        self.indexed_words.extend(words.iter().cloned());
    }

    /// Words of `words` not yet in the indexed-word set, deduplicated
    pub(crate) fn new_indexed_words(&self, words: &[String]) -> Vec<String> {
        let fresh: BTreeSet<&String> = words
            .iter()
            .filter(|w| !self.indexed_words.contains(*w))
            .collect();
        fresh.into_iter().cloned().collect()
    }

    pub(crate) fn noise_words(&self) -> HashSet<String> {
        self.noise_words.clone()
    }

    pub(crate) fn add_noise_words(&mut self, words: &[String]) {
        self.noise_words.extend(words.iter().cloned());
    }

    /// Words of `words` not yet in the noise-word set, deduplicated
    pub(crate) fn new_noise_words(&self, words: &[String]) -> Vec<String> {
        let fresh: BTreeSet<&String> = words
            .iter()
            .filter(|w| !self.noise_words.contains(*w))
            .collect();
        fresh.into_iter().cloned().collect()
    }

    pub(crate) fn has_document(&self, name: &str, content: &str) -> bool {
        self.documents.get(name).map(String::as_str) == Some(content)
    }

    pub(crate) fn clear(&mut self) {
        *self = MemoryState::default();
    }

    /// Apply a logged mutation
    pub(crate) fn apply(&mut self, record: &LogRecord) {
        match record {
            LogRecord::PutDocument { name, content } => self.put_document(name, content),
            LogRecord::PutPosting {
                name,
                word,
                posting,
            } => self.put_posting(name, word, *posting),
            LogRecord::RemovePostings { name } => self.remove_postings(name),
            LogRecord::AddIndexedWords { words } => self.add_indexed_words(words),
            LogRecord::AddNoiseWords { words } => self.add_noise_words(words),
        }
    }
}

/// In-memory storage backend
///
/// Thread-safe through `parking_lot::RwLock`. Contents are lost when the
/// store is dropped.
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: RwLock<MemoryState>,
}

impl MemoryStore {
    /// Create a new empty MemoryStore
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored documents
    pub fn document_count(&self) -> usize {
        self.state.read().documents.len()
    }
}

impl DocumentStore for MemoryStore {
    fn get_document(&self, name: &str) -> Result<Option<String>> {
        Ok(self.state.read().get_document(name))
    }

    fn put_document(&self, name: &str, content: &str) -> Result<()> {
        self.state.write().put_document(name, content);
        Ok(())
    }

    fn get_posting(&self, name: &str, word: &str) -> Result<Option<Posting>> {
        Ok(self.state.read().get_posting(name, word))
    }

    fn put_posting(&self, name: &str, word: &str, posting: Posting) -> Result<()> {
        self.state.write().put_posting(name, word, posting);
        Ok(())
    }

    fn remove_postings(&self, name: &str) -> Result<()> {
        self.state.write().remove_postings(name);
        Ok(())
    }

    fn list_document_names(&self) -> Result<Vec<String>> {
        Ok(self.state.read().document_names())
    }

    fn list_indexed_words(&self) -> Result<BTreeSet<String>> {
        Ok(self.state.read().indexed_words())
    }

    fn add_indexed_words(&self, words: &[String]) -> Result<()> {
        self.state.write().add_indexed_words(words);
        Ok(())
    }

    fn noise_words(&self) -> Result<HashSet<String>> {
        Ok(self.state.read().noise_words())
    }

    fn add_noise_words(&self, words: &[String]) -> Result<()> {
        self.state.write().add_noise_words(words);
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        self.state.write().clear();
        Ok(())
    }
}
