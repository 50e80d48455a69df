//! Tier 4: Completion

use super::test_utils::*;

#[test]
fn test_tier4_prefix_sorted() {
    for (backend, t) in all_backends() {
        t.finder.add_content("d1", "cat dog").unwrap();
        t.finder.add_content("d2", "car").unwrap();

        assert_eq!(t.finder.complete("ca").unwrap(), vec!["car", "cat"], "{}", backend);
        assert!(t.finder.complete("z").unwrap().is_empty(), "{}", backend);
    }
}

#[test]
fn test_tier4_grows_after_first_query() {
    for (backend, t) in all_backends() {
        t.finder.add_content("d1", "cat").unwrap();
        assert_eq!(t.finder.complete("c").unwrap(), vec!["cat"], "{}", backend);

        t.finder.add_content("d2", "cow cat").unwrap();
        assert_eq!(t.finder.complete("c").unwrap(), vec!["cat", "cow"], "{}", backend);
    }
}

#[test]
fn test_tier4_noise_words_never_completed() {
    let t = TestFinder::memory();
    t.finder.add_noise_words("then").unwrap();
    t.finder.add_content("d", "then there").unwrap();
    assert_eq!(t.finder.complete("the").unwrap(), vec!["there"]);
}

#[test]
fn test_tier4_clear_empties_completions() {
    for (backend, t) in all_backends() {
        t.finder.add_content("d", "cat").unwrap();
        assert!(!t.finder.complete("c").unwrap().is_empty());

        t.finder.clear().unwrap();
        assert!(t.finder.complete("c").unwrap().is_empty(), "{}", backend);
        assert!(t.finder.documents().unwrap().is_empty(), "{}", backend);
    }
}
