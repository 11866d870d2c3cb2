//! Canonical fixture constructors shared by unit, integration, and
//! property tests.
//!
//! Kept in the library (rather than duplicated under `tests/`) so every
//! suite builds candidates the same way.

use crate::types::{
    Part, PartCandidate, Section, SectionCandidate, Video, VideoCandidate,
};

pub fn make_part(id: &str, number: u32, title: &str, description: Option<&str>) -> Part {
    Part {
        id: id.to_string(),
        part_number: number,
        title: title.to_string(),
        description: description.map(str::to_string),
    }
}

pub fn make_section(
    id: &str,
    part_id: &str,
    number: &str,
    title: &str,
    content: Option<&str>,
) -> Section {
    Section {
        id: id.to_string(),
        part_id: part_id.to_string(),
        section_number: number.to_string(),
        title: title.to_string(),
        content: content.map(str::to_string),
    }
}

pub fn make_video(id: &str, section_id: &str, title: &str, description: Option<&str>) -> Video {
    Video {
        id: id.to_string(),
        section_id: section_id.to_string(),
        title: title.to_string(),
        url: format!("https://www.youtube.com/watch?v={id}"),
        description: description.map(str::to_string),
    }
}

pub fn part_candidate(id: &str, number: u32, title: &str, description: Option<&str>) -> PartCandidate {
    PartCandidate {
        part: make_part(id, number, title, description),
    }
}

pub fn section_candidate(
    id: &str,
    number: &str,
    title: &str,
    content: Option<&str>,
) -> SectionCandidate {
    SectionCandidate {
        section: make_section(id, "p1", number, title, content),
        part: make_part("p1", 1, "Part One", None),
    }
}

pub fn video_candidate(id: &str, title: &str, description: Option<&str>) -> VideoCandidate {
    VideoCandidate {
        video: make_video(id, "s1", title, description),
        section_number: "5".to_string(),
        section_title: "Trust Accounts".to_string(),
    }
}
