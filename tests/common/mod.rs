//! Shared test fixtures: a small but realistic by-law corpus.

#![allow(dead_code)]

use clauseref::store;
use clauseref::{search, tokenize, Part, RankedResult, Section, Video};
use clauseref::{PartCandidate, SectionCandidate, VideoCandidate};

/// Three parts, five sections, three videos - enough to exercise every
/// ranking path without drowning failures in fixture noise.
pub fn dataset() -> (Vec<Part>, Vec<Section>, Vec<Video>) {
    let parts = vec![
        part("p1", 1, "Definitions and Interpretation", None),
        part(
            "p2",
            2,
            "Trust Accounts",
            Some("Receiving, holding and withdrawing client money"),
        ),
        part(
            "p3",
            3,
            "Record Keeping",
            Some("Books, records and monthly reconciliation"),
        ),
    ];

    let sections = vec![
        section(
            "s1",
            "p1",
            "1",
            "Definitions",
            Some("1 (1) In this By-Law, \"client money\" means money received in trust."),
        ),
        section(
            "s2",
            "p2",
            "5",
            "Trust Account Requirements",
            Some(
                "5 (1) A bookkeeper shall deposit client funds into a trust account.\n5 (2) Money held under subsection (1) shall be withdrawn only as permitted by section 9.",
            ),
        ),
        section(
            "s3",
            "p2",
            "9",
            "Withdrawals from Trust",
            Some(
                "9 (1) A withdrawal shall be made only by cheque or electronic transfer.\nSubject to sections 10, 11 and 12, cash withdrawals are prohibited.",
            ),
        ),
        section(
            "s4",
            "p3",
            "2.1-2.4",
            "Monthly Reconciliation",
            Some("2.1 A bookkeeper shall reconcile the trust account monthly."),
        ),
        section(
            "s5",
            "p3",
            "15",
            "Retention of Records",
            Some("15 (1) Records shall be retained for six years."),
        ),
    ];

    let videos = vec![
        video(
            "v1",
            "s2",
            "Opening a Trust Account",
            Some("Walkthrough of the paperwork for a new trust account"),
        ),
        video(
            "v2",
            "s3",
            "Withdrawal Methods Explained",
            Some("Cheque and electronic transfer rules"),
        ),
        video("v3", "s5", "Record Keeping Basics", None),
    ];

    (parts, sections, videos)
}

/// Tokenize the query and run the store-side filters, exactly the way the
/// CLI wires candidates into the engine.
pub fn candidates_for(
    query: &str,
) -> (
    Vec<VideoCandidate>,
    Vec<SectionCandidate>,
    Vec<PartCandidate>,
) {
    let (parts, sections, videos) = dataset();
    let tokens = tokenize(query.trim());
    (
        store::video_candidates(&videos, &sections, &tokens),
        store::section_candidates(&sections, &parts, &tokens),
        store::part_candidates(&parts, &tokens),
    )
}

/// End-to-end search over the fixture corpus.
pub fn run_search(query: &str) -> Vec<RankedResult> {
    let (videos, sections, parts) = candidates_for(query);
    search(query, &videos, &sections, &parts)
}

fn part(id: &str, number: u32, title: &str, description: Option<&str>) -> Part {
    Part {
        id: id.to_string(),
        part_number: number,
        title: title.to_string(),
        description: description.map(str::to_string),
    }
}

fn section(id: &str, part_id: &str, number: &str, title: &str, content: Option<&str>) -> Section {
    Section {
        id: id.to_string(),
        part_id: part_id.to_string(),
        section_number: number.to_string(),
        title: title.to_string(),
        content: content.map(str::to_string),
    }
}

fn video(id: &str, section_id: &str, title: &str, description: Option<&str>) -> Video {
    Video {
        id: id.to_string(),
        section_id: section_id.to_string(),
        title: title.to_string(),
        url: format!("https://www.youtube.com/watch?v={id}"),
        description: description.map(str::to_string),
    }
}
