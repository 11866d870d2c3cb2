// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Cross-reference detection in legal prose.
//!
//! Scans a block of text for references like "section 5" or
//! "subsections 10, 11 and 12" and classifies each referenced provision:
//! already visible on the current page (inert emphasis) or somewhere else
//! (a link carrying the canonical provision id for whatever navigation
//! collaborator the caller wires up).
//!
//! Detection is best-effort by construction. A mention that doesn't match
//! the fixed patterns stays plain text; that is expected behavior, never an
//! error.
//!
//! **Invariant**: detected reference spans never overlap, and concatenating
//! the segment texts reproduces the input exactly. Prose between and around
//! references - keywords, commas, "and"/"or", whitespace - passes through
//! unchanged.

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use std::collections::HashSet;

use crate::coverage::on_page_set;

lazy_static! {
    /// "section"/"subsection" (optionally pluralized) followed by a loosely
    /// bounded reference list of digits, dots, parens, commas, whitespace,
    /// and the words "and"/"or".
    static ref REFERENCE_LIST: Regex =
        Regex::new(r"(?i)(section|subsection)s?\s+([\d.()\s,]+(?:and|or)?\s*[\d.()\s,]*)").unwrap();
    /// One reference inside a list: a dotted id with an optional
    /// parenthesized subsection ("2.3", "2.4 (1)"), or a standalone
    /// parenthesized subsection ("(2)").
    static ref REFERENCE_TOKEN: Regex =
        Regex::new(r"\d+(?:\.\d+)*(?:\s*\(\d+\))?|\(\d+\)").unwrap();
    /// A bare parenthesized subsection like "(2)".
    static ref BARE_SUBSECTION: Regex = Regex::new(r"^\(\d+\)$").unwrap();
    /// The leading base id of a reference, e.g. "2.4" in "2.4 (1)".
    static ref BASE_SECTION: Regex = Regex::new(r"^(\d+(?:\.\d+)*)").unwrap();
}

/// One run of annotated prose.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Segment {
    /// Prose outside any detected reference, byte-for-byte as written.
    Text { text: String },
    /// A reference already visible on the current page; rendered emphasized
    /// but inert.
    Emphasis { text: String },
    /// An off-page reference. `provision` is the canonical whitespace-free
    /// id ("7", "2.4(1)") to hand to the navigation collaborator when the
    /// link is activated.
    Link { text: String, provision: String },
}

impl Segment {
    fn text(text: &str) -> Self {
        Segment::Text {
            text: text.to_string(),
        }
    }

    /// The display text of this segment, whatever its kind.
    pub fn display(&self) -> &str {
        match self {
            Segment::Text { text } | Segment::Emphasis { text } | Segment::Link { text, .. } => {
                text
            }
        }
    }
}

/// Annotate a block of legal prose.
///
/// The page-coverage set is derived from `current_section_number` and the
/// block itself, then every detected reference is classified against it.
/// When `interactive` is false - no navigation collaborator exists - the
/// block comes back as a single plain segment and no detection runs at
/// all; that is the deliberate fast path, not a degraded mode.
pub fn annotate(
    text: &str,
    current_section_number: Option<&str>,
    interactive: bool,
) -> Vec<Segment> {
    if !interactive {
        return vec![Segment::text(text)];
    }
    let on_page = on_page_set(current_section_number.unwrap_or(""), text);
    annotate_with_coverage(text, &on_page)
}

/// Annotate a block against a precomputed page-coverage set.
///
/// Useful when one page renders many blocks: compute the set once from the
/// full page content, then annotate line by line.
pub fn annotate_with_coverage(text: &str, on_page: &HashSet<String>) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut last = 0;

    for reference in REFERENCE_LIST.captures_iter(text) {
        let (Some(whole), Some(list)) = (reference.get(0), reference.get(2)) else {
            continue;
        };

        if whole.start() > last {
            segments.push(Segment::text(&text[last..whole.start()]));
        }
        // Keyword and the whitespace after it pass through verbatim.
        segments.push(Segment::text(&text[whole.start()..list.start()]));
        scan_reference_list(list.as_str(), on_page, &mut segments);
        last = whole.end();
    }

    if last < text.len() {
        segments.push(Segment::text(&text[last..]));
    }
    segments
}

/// Walk the individual references inside one detected list.
///
/// A standalone "(2)" inherits the most recently seen base section number
/// within the same list; the fold carries that base explicitly so a scan
/// has no state beyond its own accumulator.
fn scan_reference_list(list: &str, on_page: &HashSet<String>, segments: &mut Vec<Segment>) {
    let mut last = 0;
    let mut current_base = String::new();

    for token in REFERENCE_TOKEN.find_iter(list) {
        if token.start() > last {
            segments.push(Segment::text(&list[last..token.start()]));
        }

        let display = token.as_str().trim();
        let provision = if BARE_SUBSECTION.is_match(display) {
            format!("{current_base}{display}")
        } else {
            if let Some(base) = BASE_SECTION.captures(display) {
                current_base = base[1].to_string();
            }
            display.split_whitespace().collect::<String>()
        };

        if is_on_page(&provision, on_page) {
            segments.push(Segment::Emphasis {
                text: display.to_string(),
            });
        } else {
            segments.push(Segment::Link {
                text: display.to_string(),
                provision,
            });
        }
        last = token.end();
    }

    if last < list.len() {
        segments.push(Segment::text(&list[last..]));
    }
}

/// Is this provision already shown on the current page?
///
/// Exact set membership for full ids. Standalone "(n)" ids additionally
/// fall back to substring containment over the set, so "(2)" counts as
/// on-page when "5(2)" is. The two checks are deliberately asymmetric;
/// callers depend on the loose behavior for bare subsections, so keep them
/// distinct.
fn is_on_page(provision: &str, on_page: &HashSet<String>) -> bool {
    let clean: String = provision.split_whitespace().collect();
    if on_page.contains(&clean) {
        return true;
    }
    if BARE_SUBSECTION.is_match(&clean) {
        return on_page.iter().any(|section| section.contains(&clean));
    }
    false
}
