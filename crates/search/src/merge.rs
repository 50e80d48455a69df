//! Merging per-term matches into ranked search hits
//!
//! `find` produces one [`PartialHit`] per (term, document) match. Merging
//! groups partials by document, orders each group by the offset of the
//! matched word, and only then concatenates lines and sums scores. The
//! output therefore does not depend on the order partials arrive in.

use std::collections::BTreeMap;

use docfinder_core::SearchHit;

/// One term's match in one document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartialHit {
    /// Document name
    pub name: String,
    /// Occurrence count of the term in the document
    pub score: u64,
    /// Line holding the term's first occurrence
    pub line: String,
    /// Byte offset of the term's first occurrence
    pub offset: usize,
}

impl PartialHit {
    /// Create a new PartialHit
    pub fn new(name: impl Into<String>, score: u64, line: impl Into<String>, offset: usize) -> Self {
        PartialHit {
            name: name.into(),
            score,
            line: line.into(),
            offset,
        }
    }
}

/// Combine partials of the same document into one hit
///
/// Lines are emitted in ascending offset order; a line identical to one
/// already emitted is skipped.
fn merge_group(name: String, mut group: Vec<PartialHit>) -> SearchHit {
    group.sort_by(|a, b| a.offset.cmp(&b.offset).then_with(|| a.line.cmp(&b.line)));

    let score = group.iter().map(|p| p.score).sum();
    let mut emitted: Vec<&str> = Vec::with_capacity(group.len());
    for partial in &group {
        if !emitted.contains(&partial.line.as_str()) {
            emitted.push(&partial.line);
        }
    }

    SearchHit::new(name, score, emitted.concat())
}

/// Sort hits by descending score, ties by ascending name
pub fn sort_hits(hits: &mut [SearchHit]) {
    hits.sort_by(|a, b| b.score.cmp(&a.score).then_with(|| a.name.cmp(&b.name)));
}

/// Merge partials into ranked hits
pub fn merge(partials: Vec<PartialHit>) -> Vec<SearchHit> {
    let mut groups: BTreeMap<String, Vec<PartialHit>> = BTreeMap::new();
    for partial in partials {
        groups.entry(partial.name.clone()).or_default().push(partial);
    }

    let mut hits: Vec<SearchHit> = groups
        .into_iter()
        .map(|(name, group)| merge_group(name, group))
        .collect();
    sort_hits(&mut hits);
    hits
}
