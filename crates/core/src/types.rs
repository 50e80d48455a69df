//! Index and search result types
//!
//! - Posting: per (document, word) occurrence record
//! - SearchHit: one merged, ranked search result

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Posting
// ============================================================================

/// Occurrence record for one normalized word in one document
///
/// `offset` is the byte offset of the first occurrence. Later occurrences
/// only bump `count`; snippet selection depends on this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Posting {
    /// Total occurrences of the word in the document (always >= 1)
    pub count: u32,
    /// Byte offset of the first occurrence
    pub offset: usize,
}

impl Posting {
    /// Posting for a first occurrence at `offset`
    pub fn first(offset: usize) -> Self {
        Posting { count: 1, offset }
    }

    /// Record a later occurrence
    pub fn bump(&mut self) {
        self.count += 1;
    }
}

// ============================================================================
// SearchHit
// ============================================================================

/// A ranked document match returned by `find`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    /// Document name
    pub name: String,
    /// Sum of occurrence counts of all matched terms
    pub score: u64,
    /// Lines holding the first occurrence of each matched term, in
    /// document order, each line at most once
    pub lines: String,
}

impl SearchHit {
    /// Create a new SearchHit
    pub fn new(name: impl Into<String>, score: u64, lines: impl Into<String>) -> Self {
        SearchHit {
            name: name.into(),
            score,
            lines: lines.into(),
        }
    }
}

impl fmt::Display for SearchHit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}\n{}", self.name, self.score, self.lines)
    }
}
