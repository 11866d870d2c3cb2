// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Which provisions are already visible on the current page.
//!
//! A cross-reference only becomes a link when its target is somewhere else.
//! This module computes the set of provision ids the current page already
//! shows: the page's own section number (expanded when it names a range)
//! plus every subsection marker found in the page's prose.
//!
//! Ids are plain strings ("7", "2.3", "5(1)") with all whitespace removed,
//! the same canonical form the annotator produces when it extracts a
//! reference.

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;

lazy_static! {
    /// A range section number like "3-6" or "2.1-2.4".
    static ref SECTION_RANGE: Regex = Regex::new(r"^([\d.]+)-([\d.]+)$").unwrap();
    /// A line-leading subsection marker like "5 (1)" or "2.3(2)".
    static ref SUBSECTION_MARKER: Regex = Regex::new(r"(?m)^([\d.]+)\s*\((\d+)\)").unwrap();
}

/// Compute the provision ids considered on-page.
///
/// An empty `current_section_number` yields an empty set: with no section
/// context, no reference is ever treated as already shown.
///
/// Range forms expand inclusively. "3-6" enumerates 3, 4, 5, 6; "2.1-2.4"
/// enumerates the integer suffixes under the shared prefix, giving 2.1
/// through 2.4. Endpoints that fail to parse expand to nothing, leaving
/// only the subsection scan's contribution.
///
/// The scan over `page_content` adds both the base id and the composed
/// `base(subsection)` id for every line that opens with a marker like
/// "5 (1)".
pub fn on_page_set(current_section_number: &str, page_content: &str) -> HashSet<String> {
    let mut on_page = HashSet::new();
    if current_section_number.is_empty() {
        return on_page;
    }

    if let Some(range) = SECTION_RANGE.captures(current_section_number) {
        let start = &range[1];
        let end = &range[2];
        if start.contains('.') {
            expand_dotted_range(start, end, &mut on_page);
        } else if let (Ok(from), Ok(to)) = (start.parse::<u32>(), end.parse::<u32>()) {
            for section in from..=to {
                on_page.insert(section.to_string());
            }
        }
    } else {
        on_page.insert(current_section_number.to_string());
    }

    for marker in SUBSECTION_MARKER.captures_iter(page_content) {
        on_page.insert(marker[1].to_string());
        on_page.insert(format!("{}({})", &marker[1], &marker[2]));
    }

    on_page
}

/// Expand "2.1-2.4" into 2.1, 2.2, 2.3, 2.4.
///
/// Both endpoints contribute only their first suffix component; the start's
/// prefix wins, so "2.1-3.4" still enumerates under "2.".
fn expand_dotted_range(start: &str, end: &str, on_page: &mut HashSet<String>) {
    let mut start_components = start.split('.');
    let prefix = start_components.next().unwrap_or(start);
    let start_suffix = start_components.next().and_then(|s| s.parse::<u32>().ok());
    let end_suffix = end.split('.').nth(1).and_then(|s| s.parse::<u32>().ok());

    if let (Some(from), Some(to)) = (start_suffix, end_suffix) {
        for suffix in from..=to {
            on_page.insert(format!("{prefix}.{suffix}"));
        }
    }
}
