//! End-to-end tests for automaton construction, matching, and
//! serialization round-trips.

use kwx::{Automaton, Builder, KwxError};

fn build(keywords: &[&str]) -> Automaton {
    let mut builder = Builder::new();
    for &keyword in keywords {
        builder.add(keyword);
    }
    builder.build()
}

#[test]
fn matches_keywords_in_text() {
    let automaton = build(&["b", "ab", "ba", "nan"]);
    assert_eq!(automaton.search("banana"), vec!["b", "ba", "nan"]);
}

#[test]
fn matches_nothing_without_occurrences() {
    let automaton = build(&["b", "ab", "ba", "nan"]);
    assert_eq!(automaton.search("hello!"), Vec::<String>::new());
}

#[test]
fn matches_every_overlapping_keyword() {
    let keywords = ["234", "23456", "3456", "67", "6789", "789", "8", "89"];
    let automaton = build(&keywords);
    assert_eq!(automaton.search("0123456789"), keywords.to_vec());
}

#[test]
fn follows_suffix_links() {
    let automaton = build(&["at", "art", "oars", "soar"]);
    assert_eq!(automaton.search("soars"), vec!["oars", "soar"]);
}

#[test]
fn repeated_occurrences_report_once() {
    let automaton = build(&["at", "art", "oars", "soar"]);
    assert_eq!(automaton.search("soarsoars"), vec!["oars", "soar"]);
}

#[test]
fn reports_nested_keywords_via_output_links() {
    let automaton = build(&["i", "in", "sting", "tin"]);
    assert_eq!(automaton.search("sting"), vec!["i", "in", "sting", "tin"]);
}

#[test]
fn search_is_deterministic() {
    let automaton = build(&["at", "art", "oars", "soar"]);
    let first = automaton.search("soars and soars");
    for _ in 0..10 {
        assert_eq!(automaton.search("soars and soars"), first);
    }
}

#[test]
fn every_added_keyword_is_found_in_containing_text() {
    let keywords = ["alpha", "beta", "gamma", "alphabet", "bet", "am"];
    let automaton = build(&keywords);
    for keyword in keywords {
        let padded = format!("xx{keyword}yy");
        assert!(
            automaton.search(&padded).iter().any(|m| m == keyword),
            "{keyword} not found in {padded}"
        );
    }
}

#[test]
fn reported_matches_are_substrings_of_the_text() {
    let automaton = build(&["an", "ana", "nan", "banana", "band"]);
    let text = "bananas in bandanas";
    for matched in automaton.search(text) {
        assert!(text.contains(&matched), "{matched} is no substring");
    }
}

#[test]
fn keywords_sharing_a_long_prefix() {
    let automaton = build(&["interest", "interesting", "interests", "inter"]);
    assert_eq!(
        automaton.search("interesting rates"),
        vec!["inter", "interest", "interesting"]
    );
}

#[test]
fn multibyte_keywords_match_on_raw_bytes() {
    let automaton = build(&["世界", "界中"]);
    assert_eq!(automaton.search("全世界中に"), vec!["世界", "界中"]);
}

#[test]
fn empty_keyword_set_matches_nothing() {
    let automaton = build(&[]);
    assert!(automaton.search("anything at all").is_empty());
}

#[test]
fn rebuild_without_new_keywords_is_identical() {
    let builder = Builder::with_keywords(["b", "ab", "ba", "nan"]);
    let first = builder.build();
    let second = builder.build();
    assert_eq!(first, second);
    assert_eq!(first.search("banana"), second.search("banana"));
}

#[test]
fn export_import_preserves_search_results() {
    let automaton = build(&["at", "art", "oars", "soar", "sting", "tin"]);
    let restored = Automaton::import(&automaton.export()).unwrap();
    assert_eq!(restored, automaton);
    for text in ["soars", "sting", "artists resting", ""] {
        assert_eq!(restored.search(text), automaton.search(text));
    }
}

#[test]
fn import_rejects_mismatched_block_lengths() {
    let mut record = build(&["ab", "ba"]).export();
    record.failurelink.truncate(record.failurelink.len() - 8);
    assert!(matches!(
        Automaton::import(&record).unwrap_err(),
        KwxError::Format {
            field: "failurelink",
            ..
        }
    ));
}

#[test]
fn import_rejects_malformed_hex() {
    let mut record = build(&["ab"]).export();
    record.codemap.replace_range(0..2, "xy");
    assert!(matches!(
        Automaton::import(&record).unwrap_err(),
        KwxError::Format { field: "codemap", .. }
    ));
}

#[test]
fn import_rejects_invariant_violations() {
    let automaton = build(&["ab", "ba"]);
    let mut record = automaton.export();
    // Zero out the check block: every state loses its parent while the
    // other arrays still carry data.
    record.check = "0".repeat(record.check.len());
    assert!(matches!(
        Automaton::import(&record).unwrap_err(),
        KwxError::Corrupt(_)
    ));
}

#[test]
fn save_load_round_trips_through_a_file() {
    let automaton = build(&["b", "ab", "ba", "nan"]);
    let path = std::env::temp_dir().join(format!("kwx_matching_{}.json", std::process::id()));

    automaton.save(&path).unwrap();
    let restored = Automaton::load(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(restored.search("banana"), vec!["b", "ba", "nan"]);
}

#[test]
fn one_automaton_serves_many_threads() {
    let automaton = build(&["at", "art", "oars", "soar"]);
    let expected = automaton.search("soarsoars");

    std::thread::scope(|scope| {
        for _ in 0..8 {
            scope.spawn(|| {
                for _ in 0..100 {
                    assert_eq!(automaton.search("soarsoars"), expected);
                }
            });
        }
    });
}

#[test]
fn large_keyword_set_stays_consistent() {
    let keywords: Vec<String> = (0..500).map(|i| format!("kw{i:03}x")).collect();
    let automaton = Builder::with_keywords(keywords.iter().cloned()).build();

    let text: String = keywords.iter().rev().cloned().collect();
    let matches = automaton.search(&text);
    for keyword in &keywords {
        assert!(matches.iter().any(|m| m == keyword));
    }

    let restored = Automaton::import(&automaton.export()).unwrap();
    assert_eq!(restored.search(&text), matches);
}
