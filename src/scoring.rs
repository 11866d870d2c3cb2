//! Relevance scoring for search candidates.
//!
//! Every text field is scored against the token list and the exact query
//! with a fixed bonus ladder, then the per-field scores are combined with
//! per-type weights into one candidate relevance value.
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! ## DETERMINISM
//! `relevance` is a pure function of (field text, tokens, exact query).
//! No randomness, no caching, no clock. Identical inputs rank identically.
//!
//! ## RANGE
//! Every bonus is non-negative and finite, so scores are non-negative and
//! finite. There is no normalization and no cap: a long content field can
//! out-score a short title, which is why title fields carry weight
//! multipliers at the candidate level.
//!
//! ## WEIGHTS
//! - Video:   title × 2 + description
//! - Section: title × 3 + content + section number × 2
//! - Part:    title × 2 + description
//!
//! The section title weight (3) is deliberately the largest: section titles
//! are the tightest summaries in the corpus, and an exact title hit at
//! weight 3 (450+) must out-rank the same hit on a part title at weight 2
//! (300). Tests pin this worked example.

use crate::types::{Candidate, PartCandidate, SectionCandidate, VideoCandidate};
use regex::Regex;

/// Bonus for the exact query appearing anywhere in the field.
pub const EXACT_SUBSTRING_BONUS: f64 = 100.0;
/// Additional bonus when the field starts with the exact query.
pub const EXACT_PREFIX_BONUS: f64 = 50.0;
/// Per-token bonus for a substring hit.
pub const TOKEN_SUBSTRING_BONUS: f64 = 10.0;
/// Additional per-token bonus when the field starts with the token.
pub const TOKEN_PREFIX_BONUS: f64 = 5.0;
/// Additional per-token bonus for a whole-word hit.
pub const TOKEN_WORD_BONUS: f64 = 5.0;
/// Scale of the coverage bonus (fraction of tokens present anywhere).
pub const COVERAGE_BONUS: f64 = 20.0;

/// Per-type field weights.
pub const VIDEO_TITLE_WEIGHT: f64 = 2.0;
pub const SECTION_TITLE_WEIGHT: f64 = 3.0;
pub const SECTION_NUMBER_WEIGHT: f64 = 2.0;
pub const PART_TITLE_WEIGHT: f64 = 2.0;

/// Score one text field against the token list and the exact query.
///
/// Empty fields score 0. The exact-query bonuses and the per-token substring
/// and prefix checks run case-insensitively over the lowercased field; the
/// whole-word check runs a case-insensitive word-boundary match over the
/// original text. The coverage bonus rewards queries whose tokens all
/// appear somewhere, even scattered.
pub fn relevance(field_text: &str, tokens: &[String], exact_query: &str) -> f64 {
    if field_text.is_empty() {
        return 0.0;
    }

    let lower = field_text.to_lowercase();
    let lower_query = exact_query.to_lowercase();
    let mut score = 0.0;

    if lower.contains(&lower_query) {
        score += EXACT_SUBSTRING_BONUS;
    }
    if lower.starts_with(&lower_query) {
        score += EXACT_PREFIX_BONUS;
    }

    for token in tokens {
        if lower.contains(token.as_str()) {
            score += TOKEN_SUBSTRING_BONUS;

            if lower.starts_with(token.as_str()) {
                score += TOKEN_PREFIX_BONUS;
            }
            if whole_word_match(field_text, token) {
                score += TOKEN_WORD_BONUS;
            }
        }
    }

    if !tokens.is_empty() {
        let matched = tokens
            .iter()
            .filter(|token| lower.contains(token.as_str()))
            .count();
        score += COVERAGE_BONUS * (matched as f64 / tokens.len() as f64);
    }

    score
}

/// Case-insensitive word-boundary match of `token` in `text`.
///
/// Tokens are word characters only by construction, but they are escaped
/// anyway so the pattern always compiles.
fn whole_word_match(text: &str, token: &str) -> bool {
    Regex::new(&format!(r"(?i)\b{}\b", regex::escape(token)))
        .map(|pattern| pattern.is_match(text))
        .unwrap_or(false)
}

/// Combined relevance of a video: title dominates, description supports.
pub fn video_relevance(candidate: &VideoCandidate, tokens: &[String], exact_query: &str) -> f64 {
    let title = relevance(&candidate.video.title, tokens, exact_query);
    let description = relevance(
        candidate.video.description.as_deref().unwrap_or(""),
        tokens,
        exact_query,
    );
    title * VIDEO_TITLE_WEIGHT + description
}

/// Combined relevance of a section: title, content, and the section number
/// itself (so "15" finds section 15 even when the prose never says so).
pub fn section_relevance(
    candidate: &SectionCandidate,
    tokens: &[String],
    exact_query: &str,
) -> f64 {
    let title = relevance(&candidate.section.title, tokens, exact_query);
    let content = relevance(
        candidate.section.content.as_deref().unwrap_or(""),
        tokens,
        exact_query,
    );
    let number = relevance(&candidate.section.section_number, tokens, exact_query);
    title * SECTION_TITLE_WEIGHT + content + number * SECTION_NUMBER_WEIGHT
}

/// Combined relevance of a part.
pub fn part_relevance(candidate: &PartCandidate, tokens: &[String], exact_query: &str) -> f64 {
    let title = relevance(&candidate.part.title, tokens, exact_query);
    let description = relevance(
        candidate.part.description.as_deref().unwrap_or(""),
        tokens,
        exact_query,
    );
    title * PART_TITLE_WEIGHT + description
}

/// Combined relevance for any candidate kind.
pub fn candidate_relevance(candidate: &Candidate, tokens: &[String], exact_query: &str) -> f64 {
    match candidate {
        Candidate::Video(v) => video_relevance(v, tokens, exact_query),
        Candidate::Section(s) => section_relevance(s, tokens, exact_query),
        Candidate::Part(p) => part_relevance(p, tokens, exact_query),
    }
}
