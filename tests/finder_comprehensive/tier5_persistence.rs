//! Tier 5: Persistence
//!
//! A disk-backed finder reopened over the same directory answers exactly
//! as before, including noise words loaded lazily from the store.

use super::test_utils::*;
use docfinder::{DocFinder, FinderConfig};

#[test]
fn test_tier5_search_survives_reopen() {
    let t = TestFinder::disk();
    t.finder.add_noise_words("the\n").unwrap();
    t.finder.add_content("a", "the cat sat\nthe dog ran\n").unwrap();
    t.finder.add_content("b", "dog\n").unwrap();
    let before = t.finder.find(&["dog", "cat"]).unwrap();

    let t = t.reopen();

    assert_eq!(t.finder.find(&["dog", "cat"]).unwrap(), before);
    assert_eq!(t.finder.documents().unwrap(), vec!["a", "b"]);
    assert_eq!(t.finder.complete("").unwrap(), vec!["cat", "dog", "ran", "sat"]);
}

#[test]
fn test_tier5_noise_words_reloaded() {
    let t = TestFinder::disk();
    t.finder.add_noise_words("the").unwrap();

    let t = t.reopen();

    t.finder.add_content("d", "the cat").unwrap();
    assert!(t.finder.find(&["the"]).unwrap().is_empty());
    assert_eq!(t.finder.words("the cat").unwrap(), vec!["cat"]);
}

#[test]
fn test_tier5_clear_survives_reopen() {
    let t = TestFinder::disk();
    t.finder.add_content("d", "cat").unwrap();
    t.finder.clear().unwrap();

    let t = t.reopen();
    assert!(t.finder.documents().unwrap().is_empty());
    assert!(matches!(
        t.finder.doc_content("d"),
        Err(docfinder::Error::NotFound { .. })
    ));
}

#[test]
fn test_tier5_open_loads_noise_file() {
    let dir = tempfile::TempDir::new().unwrap();
    let noise_path = dir.path().join("noise.txt");
    std::fs::write(&noise_path, "the\nand\n").unwrap();

    let config = FinderConfig::memory().with_noise_words(&noise_path);
    let finder = DocFinder::open(&config).unwrap();
    assert_eq!(finder.words("the cat and dog").unwrap(), vec!["cat", "dog"]);
}

#[test]
fn test_tier5_open_rejects_missing_noise_file() {
    let dir = tempfile::TempDir::new().unwrap();
    let config = FinderConfig::memory().with_noise_words(dir.path().join("absent.txt"));
    let err = DocFinder::open(&config).unwrap_err();
    assert_eq!(err.code(), "BAD_INPUT");
}
