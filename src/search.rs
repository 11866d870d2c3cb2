//! The search entry point: pool candidates, rank, deduplicate.
//!
//! Candidates arrive as three already-fetched collections (videos, sections,
//! parts). Ranking is computed entirely from candidate text, never from
//! fetch completion order, so callers are free to load the three sources in
//! any order or in parallel. A source that failed upstream simply shows up
//! here as an empty slice; the other sources are still scored and returned.
//!
//! **Invariant**: each (kind, id) pair appears at most once in the output,
//! and scores are non-increasing down the result list.

use std::cmp::Ordering;
use std::collections::HashSet;

use crate::query::tokenize;
use crate::scoring::{part_relevance, section_relevance, video_relevance};
use crate::types::{
    Candidate, PartCandidate, RankedResult, ResultKind, SectionCandidate, VideoCandidate,
};

/// Trimmed queries shorter than this are a defined no-op.
pub const MIN_QUERY_LEN: usize = 2;

/// Search the three candidate collections for a free-text query.
///
/// Returns ranked results, best first. Degenerate queries (shorter than
/// [`MIN_QUERY_LEN`] after trimming, or reducing to zero tokens) return an
/// empty list rather than an error.
pub fn search(
    query: &str,
    videos: &[VideoCandidate],
    sections: &[SectionCandidate],
    parts: &[PartCandidate],
) -> Vec<RankedResult> {
    let term = query.trim();
    if term.chars().count() < MIN_QUERY_LEN {
        return Vec::new();
    }
    let tokens = tokenize(term);
    if tokens.is_empty() {
        return Vec::new();
    }

    let mut pooled: Vec<RankedResult> = Vec::new();

    for video in videos {
        let relevance = video_relevance(video, &tokens, term);
        if relevance > 0.0 {
            pooled.push(RankedResult {
                candidate: Candidate::Video(video.clone()),
                relevance,
            });
        }
    }
    for section in sections {
        let relevance = section_relevance(section, &tokens, term);
        if relevance > 0.0 {
            pooled.push(RankedResult {
                candidate: Candidate::Section(section.clone()),
                relevance,
            });
        }
    }
    for part in parts {
        let relevance = part_relevance(part, &tokens, term);
        if relevance > 0.0 {
            pooled.push(RankedResult {
                candidate: Candidate::Part(part.clone()),
                relevance,
            });
        }
    }

    // Stable sort: equal-score candidates of the same kind keep pool order.
    pooled.sort_by(compare_results);
    dedupe_first(pooled)
}

/// Ranking comparator.
///
/// Sort order:
/// 1. **Relevance** - descending, higher scores first
/// 2. **Kind** - at equal score, Video before Section before Part
///
/// Scores are finite by construction; a `partial_cmp` failure is treated as
/// a tie rather than poisoning the sort.
pub fn compare_results(a: &RankedResult, b: &RankedResult) -> Ordering {
    match b.relevance.partial_cmp(&a.relevance) {
        Some(Ordering::Equal) | None => a.candidate.kind().cmp(&b.candidate.kind()),
        Some(ordering) => ordering,
    }
}

/// Keep the first occurrence of each (kind, id) pair, preserving order.
///
/// Keyed on kind AND id: ids are only unique within their own collection,
/// so a video and a section may legitimately share an id.
fn dedupe_first(results: Vec<RankedResult>) -> Vec<RankedResult> {
    let mut seen: HashSet<(ResultKind, String)> = HashSet::new();
    results
        .into_iter()
        .filter(|result| {
            seen.insert((result.candidate.kind(), result.candidate.id().to_string()))
        })
        .collect()
}
