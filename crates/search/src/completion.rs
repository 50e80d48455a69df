//! Prefix completion over indexed words
//!
//! Words are kept in an ordered set, so a lookup is a range scan starting
//! at the prefix and new words are inserted once, never re-sorted.

use std::collections::BTreeSet;
use std::ops::Bound;

/// Ordered set of every indexed word
#[derive(Debug, Clone, Default)]
pub struct CompletionIndex {
    words: BTreeSet<String>,
}

impl CompletionIndex {
    /// Create an empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Add words; already present words are ignored
    pub fn extend<I: IntoIterator<Item = String>>(&mut self, words: I) {
        self.words.extend(words);
    }

    /// All words starting with `prefix`, in ascending order
    ///
    /// The prefix is matched literally; it is not normalized.
    ///
    /// # Example
    ///
    /// ```
    /// use docfinder_search::completion::CompletionIndex;
    ///
    /// let mut index = CompletionIndex::new();
    /// index.extend(["cat", "dog", "car"].map(String::from));
    /// assert_eq!(index.complete("ca"), vec!["car", "cat"]);
    /// assert!(index.complete("z").is_empty());
    /// ```
    pub fn complete(&self, prefix: &str) -> Vec<String> {
        self.words
            .range::<str, _>((Bound::Included(prefix), Bound::Unbounded))
            .take_while(|w| w.starts_with(prefix))
            .cloned()
            .collect()
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the index is empty
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl From<BTreeSet<String>> for CompletionIndex {
    fn from(words: BTreeSet<String>) -> Self {
        CompletionIndex { words }
    }
}
