//! Ranking order: weighted scores decide, kind precedence breaks ties.

use super::common::run_search;
use clauseref::testing::{part_candidate, section_candidate, video_candidate};
use clauseref::{search, ResultKind};
use pretty_assertions::assert_eq;

#[test]
fn section_title_match_outranks_part_title_match() {
    // Worked example: both titles contain the exact query, so both title
    // scores land at 200+. The section multiplies by 3 (600+), the part by
    // 2 (400+); the section must rank first on numbers alone.
    let sections = vec![section_candidate(
        "s1",
        "5",
        "Trust Account Requirements",
        None,
    )];
    let parts = vec![part_candidate("p1", 2, "Trust Accounts", None)];

    let results = search("trust account", &[], &sections, &parts);

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].candidate.kind(), ResultKind::Section);
    assert_eq!(results[1].candidate.kind(), ResultKind::Part);
    assert!(results[0].relevance >= 450.0);
    assert!(results[1].relevance >= 300.0);
    assert!(results[0].relevance > results[1].relevance);
}

#[test]
fn exact_title_match_ranks_above_content_mention() {
    let results = run_search("trust account");
    assert!(!results.is_empty());
    // "Trust Account Requirements" carries the exact phrase in its title;
    // "Definitions" only mentions trust in content.
    let requirements = results
        .iter()
        .position(|r| r.candidate.title() == "Trust Account Requirements")
        .expect("requirements section found");
    let definitions = results
        .iter()
        .position(|r| r.candidate.title() == "Definitions");
    if let Some(definitions) = definitions {
        assert!(requirements < definitions);
    }
}

#[test]
fn section_number_is_a_scoring_field() {
    let results = run_search("15");
    let retention = results
        .iter()
        .find(|r| r.candidate.title() == "Retention of Records")
        .expect("section 15 found by number");
    assert!(retention.relevance > 0.0);
}

#[test]
fn video_wins_equal_score_ties() {
    // Same title on a video (title ×2) and a part (title ×2): scores tie
    // exactly, and kind precedence puts the video first.
    let videos = vec![video_candidate("v1", "Trust Accounts", None)];
    let parts = vec![part_candidate("p1", 2, "Trust Accounts", None)];

    let results = search("trust accounts", &videos, &[], &parts);

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].relevance, results[1].relevance);
    assert_eq!(results[0].candidate.kind(), ResultKind::Video);
}

#[test]
fn scores_never_increase_down_the_list() {
    let results = run_search("trust");
    for window in results.windows(2) {
        assert!(window[0].relevance >= window[1].relevance);
    }
}

#[test]
fn results_are_deterministic_across_invocations() {
    let first: Vec<String> = run_search("record keeping")
        .iter()
        .map(|r| r.candidate.id().to_string())
        .collect();
    let second: Vec<String> = run_search("record keeping")
        .iter()
        .map(|r| r.candidate.id().to_string())
        .collect();
    assert_eq!(first, second);
}
