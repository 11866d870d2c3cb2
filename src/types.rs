// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a search result.
//!
//! Three record types mirror the hosted collections (parts, sections, video
//! resources). Candidates wrap a record together with the denormalized parent
//! context a result row needs for display and navigation, so scoring and
//! rendering never go back to the store.
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **RankedResult**: `relevance` is finite and strictly positive. Candidates
//!   that score zero are dropped before a `RankedResult` is ever built.
//! - **ResultKind**: declaration order is ranking precedence at equal score
//!   (Video before Section before Part). `compare_results` relies on the
//!   derived `Ord`, so reordering the variants reorders search results.
//! - **Candidate joins**: a `VideoCandidate` always carries its section's
//!   number and title; a `SectionCandidate` always carries its part. The
//!   store enforces this with inner-join semantics at fetch time.

use serde::{Deserialize, Serialize};

// =============================================================================
// RECORD TYPES
// =============================================================================

/// A part: the top-level grouping of the by-law, e.g. "Part 2: Trust Accounts".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    pub id: String,
    pub part_number: u32,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// A section of the by-law, owned by a part.
///
/// `section_number` is a display string, not a number: it can be a plain
/// integer ("7"), dotted ("2.3"), or a range covering several provisions
/// ("2.1-2.4"). Range forms matter to page-coverage expansion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub id: String,
    pub part_id: String,
    pub section_number: String,
    pub title: String,
    #[serde(default)]
    pub content: Option<String>,
}

/// A video resource attached to a section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    pub id: String,
    pub section_id: String,
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub description: Option<String>,
}

// =============================================================================
// CANDIDATE TYPES
// =============================================================================

/// A video eligible for ranking, joined to its parent section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoCandidate {
    #[serde(flatten)]
    pub video: Video,
    pub section_number: String,
    pub section_title: String,
}

/// A section eligible for ranking, joined to its parent part.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionCandidate {
    #[serde(flatten)]
    pub section: Section,
    pub part: Part,
}

/// A part eligible for ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartCandidate {
    #[serde(flatten)]
    pub part: Part,
}

/// Which collection a candidate came from.
///
/// **Gotcha**: the derived `Ord` is the equal-score tie-break order, not an
/// arbitrary serialization order. Video sorts before Section sorts before
/// Part when relevance ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultKind {
    Video,
    Section,
    Part,
}

impl ResultKind {
    /// Lowercase tag, matching the serde `rename_all = "lowercase"` convention.
    pub fn as_str(self) -> &'static str {
        match self {
            ResultKind::Video => "video",
            ResultKind::Section => "section",
            ResultKind::Part => "part",
        }
    }
}

/// A record from any of the three searchable collections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Candidate {
    Video(VideoCandidate),
    Section(SectionCandidate),
    Part(PartCandidate),
}

impl Candidate {
    pub fn kind(&self) -> ResultKind {
        match self {
            Candidate::Video(_) => ResultKind::Video,
            Candidate::Section(_) => ResultKind::Section,
            Candidate::Part(_) => ResultKind::Part,
        }
    }

    /// Identifier within the candidate's own collection.
    ///
    /// Only unique per kind; deduplication keys on `(kind, id)`, never on
    /// `id` alone.
    pub fn id(&self) -> &str {
        match self {
            Candidate::Video(v) => &v.video.id,
            Candidate::Section(s) => &s.section.id,
            Candidate::Part(p) => &p.part.id,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Candidate::Video(v) => &v.video.title,
            Candidate::Section(s) => &s.section.title,
            Candidate::Part(p) => &p.part.title,
        }
    }
}

/// What users see when they get a search result: a candidate plus its
/// combined relevance.
///
/// `relevance` is deterministic in (candidate text, token list, exact query)
/// and carries no arrival-order or wall-clock component, so identical
/// searches always rank identically.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedResult {
    #[serde(flatten)]
    pub candidate: Candidate,
    pub relevance: f64,
}
