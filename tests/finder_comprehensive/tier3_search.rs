//! Tier 3: Search
//!
//! Scoring, snippet merging and result ordering.

use super::test_utils::*;
use docfinder::SearchHit;

#[test]
fn test_tier3_score_additivity() {
    for (backend, t) in all_backends() {
        t.finder.add_content("d", "cat dog cat\ndog cat\n").unwrap();
        let hits = t.finder.find(&["cat", "dog"]).unwrap();
        assert_eq!(hits.len(), 1, "{}", backend);
        assert_eq!(hits[0].score, 5, "{}", backend);
    }
}

#[test]
fn test_tier3_ties_break_by_name() {
    for (backend, t) in all_backends() {
        t.finder.add_content("b", "cat cat cat").unwrap();
        t.finder.add_content("a", "cat cat cat").unwrap();
        t.finder.add_content("c", "cat cat cat cat cat").unwrap();

        let hits = t.finder.find(&["cat"]).unwrap();
        assert_eq!(names(&hits), vec!["c", "a", "b"], "{}", backend);
    }
}

#[test]
fn test_tier3_snippet_lines_in_document_order() {
    for (backend, t) in all_backends() {
        t.finder.add_content("d", "cat sat\ndog ran\n").unwrap();

        let hits = t.finder.find(&["dog", "cat"]).unwrap();
        assert_eq!(
            hits,
            vec![SearchHit::new("d", 2, "cat sat\ndog ran\n")],
            "{}",
            backend
        );

        // Term order does not matter
        assert_eq!(t.finder.find(&["cat", "dog"]).unwrap(), hits, "{}", backend);
    }
}

#[test]
fn test_tier3_shared_line_emitted_once() {
    for (backend, t) in all_backends() {
        t.finder.add_content("d", "intro\ncat and dog\n").unwrap();
        let hits = t.finder.find(&["dog", "cat"]).unwrap();
        assert_eq!(hits[0].lines, "cat and dog\n", "{}", backend);
        assert_eq!(hits[0].score, 2);
    }
}

#[test]
fn test_tier3_snippet_uses_first_occurrence() {
    for (backend, t) in all_backends() {
        t.finder.add_content("d", "one cat\ntwo\nthree cat\n").unwrap();
        let hits = t.finder.find(&["cat"]).unwrap();
        assert_eq!(hits[0].lines, "one cat\n", "{}", backend);
        assert_eq!(hits[0].score, 2);
    }
}

#[test]
fn test_tier3_last_line_without_newline() {
    let t = TestFinder::memory();
    t.finder.add_content("d", "first\nlast cat").unwrap();
    assert_eq!(t.finder.find(&["cat"]).unwrap()[0].lines, "last cat\n");
}

#[test]
fn test_tier3_three_terms_across_documents() {
    for (backend, t) in all_backends() {
        t.finder.add_content("x", "bird\ncat\n").unwrap();
        t.finder.add_content("y", "dog dog\nbird cat\n").unwrap();

        let hits = t.finder.find(&["cat", "dog", "bird"]).unwrap();
        assert_eq!(
            hits,
            vec![
                SearchHit::new("y", 4, "dog dog\nbird cat\n"),
                SearchHit::new("x", 2, "bird\ncat\n"),
            ],
            "{}",
            backend
        );
    }
}

#[test]
fn test_tier3_unknown_terms_return_empty() {
    for (backend, t) in all_backends() {
        t.finder.add_content("d", "cat").unwrap();
        assert!(t.finder.find(&["zzz"]).unwrap().is_empty(), "{}", backend);

        let none: [&str; 0] = [];
        assert!(t.finder.find(&none).unwrap().is_empty(), "{}", backend);
    }
}

#[test]
fn test_tier3_find_query_text() {
    let t = TestFinder::memory();
    t.finder.add_noise_words("the").unwrap();
    t.finder.add_content("d", "The Cat's toy\n").unwrap();

    let hits = t.finder.find_query("the CATS's").unwrap();
    assert!(hits.is_empty());

    let hits = t.finder.find_query("the CAT's toy").unwrap();
    assert_eq!(hits, vec![SearchHit::new("d", 2, "The Cat's toy\n")]);
}

#[test]
fn test_tier3_hits_serialize_as_json() {
    let t = TestFinder::memory();
    t.finder.add_content("d", "cat\n").unwrap();
    let hits = t.finder.find(&["cat"]).unwrap();

    let json = serde_json::to_value(&hits).unwrap();
    assert_eq!(
        json,
        serde_json::json!([{ "name": "d", "score": 1, "lines": "cat\n" }])
    );
}
