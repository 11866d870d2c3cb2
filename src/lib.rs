//! Relevance search and cross-reference annotation for legal text.
//!
//! Two pure, synchronous engines over already-fetched records:
//!
//! ```text
//! ┌────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  query.rs  │────▶│ scoring.rs  │────▶│  search.rs  │
//! │ (tokenize) │     │ (relevance) │     │ (rank+dedup)│
//! └────────────┘     └─────────────┘     └─────────────┘
//!        │                                      │
//!        ▼                                      ▼
//! ┌────────────┐     ┌─────────────┐     ┌─────────────┐
//! │highlight.rs│     │ coverage.rs │────▶│ annotate.rs │
//! │  (marks)   │     │ (page set)  │     │ (cross-refs)│
//! └────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! The search engine tokenizes a free-text query, scores video, section,
//! and part candidates, and merges them into one ranked, deduplicated list.
//! The annotator scans legal prose for references like "section 5" or
//! "subsections 10, 11 and 12" and turns the off-page ones into navigable
//! links while leaving on-page ones as inert emphasis.
//!
//! Both engines own no state beyond their inputs: identical inputs produce
//! identical outputs, and the surrounding data layer is free to fetch its
//! three collections in any order.
//!
//! # Usage
//!
//! ```
//! use clauseref::{search, annotate, Segment};
//! use clauseref::testing::section_candidate;
//!
//! let sections = vec![section_candidate(
//!     "s1", "5", "Trust Account Requirements", None,
//! )];
//! let results = search("trust account", &[], &sections, &[]);
//! assert_eq!(results[0].candidate.id(), "s1");
//!
//! let segments = annotate("See section 7.", Some("9"), true);
//! assert!(segments.iter().any(|s| matches!(s, Segment::Link { .. })));
//! ```

// Module declarations
pub mod annotate;
pub mod coverage;
pub mod highlight;
pub mod layout;
pub mod query;
pub mod scoring;
pub mod search;
pub mod store;
pub mod testing;
pub mod types;

// Re-exports for public API
pub use annotate::{annotate, annotate_with_coverage, Segment};
pub use coverage::on_page_set;
pub use highlight::{highlight, HighlightSpan};
pub use layout::{classify_line, LineClass, Treatment, LAYOUT_RULES};
pub use query::{tokenize, STOP_WORDS};
pub use scoring::{
    candidate_relevance, part_relevance, relevance, section_relevance, video_relevance,
};
pub use search::{compare_results, search, MIN_QUERY_LEN};
pub use store::{
    part_candidates, section_by_number, section_candidates, video_candidates, Dataset, StoreError,
};
pub use types::{
    Candidate, Part, PartCandidate, RankedResult, ResultKind, Section, SectionCandidate, Video,
    VideoCandidate,
};
