//! Tier 2: Indexing
//!
//! Postings keep the first occurrence offset, re-adding a document is an
//! idempotent replace, and missing documents report NOT_FOUND.

use super::test_utils::*;
use docfinder::{DocumentStore, Posting};

#[test]
fn test_tier2_first_offset_frozen() {
    for (backend, t) in all_backends() {
        t.finder
            .add_content("d", "alpha beta\nbeta alpha alpha\n")
            .unwrap();

        let store = t.finder.store();
        assert_eq!(
            store.get_posting("d", "alpha").unwrap(),
            Some(Posting { count: 3, offset: 0 }),
            "{}",
            backend
        );
        assert_eq!(
            store.get_posting("d", "beta").unwrap(),
            Some(Posting { count: 2, offset: 6 }),
            "{}",
            backend
        );
    }
}

#[test]
fn test_tier2_add_content_idempotent() {
    for (backend, t) in all_backends() {
        let content = "cat sat\ndog ran\ncat again\n";
        t.finder.add_content("d", content).unwrap();
        let hits = t.finder.find(&["cat", "dog"]).unwrap();
        let posting = t.finder.store().get_posting("d", "cat").unwrap();

        t.finder.add_content("d", content).unwrap();

        assert_eq!(t.finder.find(&["cat", "dog"]).unwrap(), hits, "{}", backend);
        assert_eq!(t.finder.store().get_posting("d", "cat").unwrap(), posting);
        assert_eq!(t.finder.doc_content("d").unwrap(), content);
        assert_eq!(t.finder.documents().unwrap(), vec!["d"]);
    }
}

#[test]
fn test_tier2_readd_drops_stale_postings() {
    for (backend, t) in all_backends() {
        t.finder.add_content("d", "old words\n").unwrap();
        t.finder.add_content("d", "new words\n").unwrap();

        assert!(t.finder.find(&["old"]).unwrap().is_empty(), "{}", backend);
        assert_eq!(t.finder.find(&["new"]).unwrap().len(), 1);
    }
}

#[test]
fn test_tier2_doc_content_not_found() {
    for (backend, t) in all_backends() {
        t.finder.add_content("present", "x").unwrap();
        let err = t.finder.doc_content("missing").unwrap_err();
        assert_eq!(err.code(), "NOT_FOUND", "{}", backend);
        assert!(err.to_string().contains("missing"));
    }
}

#[test]
fn test_tier2_noise_words_not_indexed() {
    for (backend, t) in all_backends() {
        t.finder.add_noise_words("the").unwrap();
        t.finder.add_content("d", "the cat").unwrap();
        assert!(
            t.finder.store().get_posting("d", "the").unwrap().is_none(),
            "{}",
            backend
        );
    }
}
