//! Tier 1: Normalization
//!
//! Tokenizing, the possessive-stripping placeholder stemmer, and noise
//! filtering as seen through `DocFinder::words`.

use super::test_utils::*;
use docfinder::DocumentStore;

#[test]
fn test_tier1_noise_words_excluded() {
    for (backend, t) in all_backends() {
        t.finder.add_noise_words("the").unwrap();
        assert_eq!(
            t.finder.words("the cat the dog").unwrap(),
            vec!["cat", "dog"],
            "{}",
            backend
        );
    }
}

#[test]
fn test_tier1_noise_words_idempotent() {
    for (backend, t) in all_backends() {
        t.finder.add_noise_words("the\na\n").unwrap();
        t.finder.add_noise_words("the\na\n").unwrap();
        let noise = t.finder.store().noise_words().unwrap();
        assert_eq!(noise.len(), 3, "{}: the, a and the empty line", backend);
    }
}

#[test]
fn test_tier1_noise_lines_not_normalized() {
    let t = TestFinder::memory();
    t.finder.add_noise_words("The\r\n").unwrap();
    // "The" is stored verbatim, so the normalized "the" still passes
    assert_eq!(t.finder.words("The cat").unwrap(), vec!["the", "cat"]);
}

#[test]
fn test_tier1_empty_words_kept_without_noise() {
    let t = TestFinder::memory();
    assert_eq!(t.finder.words("cat 1984 dog").unwrap(), vec!["cat", "", "dog"]);

    // A trailing newline in the noise text makes "" a noise word
    t.finder.add_noise_words("the\n").unwrap();
    assert_eq!(t.finder.words("cat 1984 dog").unwrap(), vec!["cat", "dog"]);
}

#[test]
fn test_tier1_normalization_rules() {
    let t = TestFinder::memory();
    assert_eq!(
        t.finder.words("Dog's DOGS e-mail (x)").unwrap(),
        vec!["dog", "dogs", "email", "x"]
    );
}

#[test]
fn test_tier1_completion_fragment() {
    assert_eq!(docfinder::completion_fragment("find the ca"), Some("ca"));
    assert_eq!(docfinder::completion_fragment("find the ca "), None);
    assert_eq!(docfinder::completion_fragment("find 42"), None);
}
