//! Noise-word set
//!
//! Noise words are excluded from indexing and search. They are taken
//! verbatim from the lines of a noise-word text, without normalization.

use std::collections::{BTreeSet, HashSet};

/// Split a noise-word text into its distinct lines
///
/// Lines end at `\n` with an optional preceding `\r`. A trailing line
/// break yields the empty string as a word, which in turn suppresses
/// tokens that normalize to nothing.
///
/// # Example
///
/// ```
/// use docfinder_search::noise::parse_lines;
///
/// assert_eq!(parse_lines("the\r\na\nthe"), vec!["a", "the"]);
/// ```
pub fn parse_lines(text: &str) -> Vec<String> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .map(String::from)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Set of words excluded from indexing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoiseWords {
    words: HashSet<String>,
}

impl NoiseWords {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from an iterator of words
    pub fn from_words<I: IntoIterator<Item = String>>(words: I) -> Self {
        NoiseWords {
            words: words.into_iter().collect(),
        }
    }

    /// Add words; already present words are ignored
    pub fn extend<I: IntoIterator<Item = String>>(&mut self, words: I) {
        self.words.extend(words);
    }

    /// Check whether `word` is a noise word
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of noise words
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the set is empty
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl From<HashSet<String>> for NoiseWords {
    fn from(words: HashSet<String>) -> Self {
        NoiseWords { words }
    }
}
