//! Shared helpers for the finder comprehensive suite

#![allow(dead_code)]

use docfinder::{DocFinder, FinderConfig, SyncMode};
use tempfile::TempDir;

/// A finder plus the directory that keeps its disk store alive
pub struct TestFinder {
    pub finder: DocFinder,
    pub dir: Option<TempDir>,
}

impl TestFinder {
    /// In-memory finder
    pub fn memory() -> Self {
        TestFinder {
            finder: DocFinder::in_memory(),
            dir: None,
        }
    }

    /// Disk-backed finder in a fresh temp directory
    pub fn disk() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let config = FinderConfig::disk(dir.path().join("data")).with_sync(SyncMode::Always);
        let finder = DocFinder::open(&config).expect("Failed to open disk finder");
        TestFinder {
            finder,
            dir: Some(dir),
        }
    }

    /// Drop the finder and open a new one over the same directory
    pub fn reopen(self) -> Self {
        let dir = self.dir.expect("Only disk finders can be reopened");
        drop(self.finder);
        let config = FinderConfig::disk(dir.path().join("data")).with_sync(SyncMode::Always);
        let finder = DocFinder::open(&config).expect("Failed to reopen disk finder");
        TestFinder {
            finder,
            dir: Some(dir),
        }
    }
}

/// One finder per backing, labelled for assertion messages
pub fn all_backends() -> Vec<(&'static str, TestFinder)> {
    vec![("memory", TestFinder::memory()), ("disk", TestFinder::disk())]
}

/// Names of hits in ranked order
pub fn names(hits: &[docfinder::SearchHit]) -> Vec<String> {
    hits.iter().map(|h| h.name.clone()).collect()
}
