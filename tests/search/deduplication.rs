//! Each (kind, id) pair appears at most once in the output.

use super::common::run_search;
use clauseref::testing::{part_candidate, section_candidate, video_candidate};
use clauseref::search;
use std::collections::HashSet;

#[test]
fn duplicate_candidates_collapse_to_one() {
    let sections = vec![
        section_candidate("s1", "5", "Trust Account Requirements", None),
        section_candidate("s1", "5", "Trust Account Requirements", None),
    ];
    let results = search("trust", &[], &sections, &[]);
    assert_eq!(results.len(), 1);
}

#[test]
fn first_occurrence_after_sorting_wins() {
    // Same id, different content richness: the higher-scoring copy sorts
    // first and survives dedup.
    let sections = vec![
        section_candidate("s1", "5", "Trust Account Requirements", None),
        section_candidate(
            "s1",
            "5",
            "Trust Account Requirements",
            Some("A bookkeeper shall maintain a trust account at all times."),
        ),
    ];
    let results = search("trust account", &[], &sections, &[]);
    assert_eq!(results.len(), 1);
    let survivor = &results[0];
    // The content-bearing copy scores strictly higher, so it must be the
    // one kept.
    assert!(survivor.relevance > 450.0);
}

#[test]
fn same_id_in_different_collections_is_not_a_duplicate() {
    let videos = vec![video_candidate("x", "Trust Accounts", None)];
    let parts = vec![part_candidate("x", 2, "Trust Accounts", None)];
    let results = search("trust", &videos, &[], &parts);
    assert_eq!(results.len(), 2);
}

#[test]
fn fixture_corpus_yields_unique_results() {
    let results = run_search("trust");
    let mut seen = HashSet::new();
    for result in &results {
        assert!(
            seen.insert((result.candidate.kind(), result.candidate.id().to_string())),
            "duplicate result {:?}",
            result.candidate.id()
        );
    }
}
