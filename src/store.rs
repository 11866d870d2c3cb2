//! JSON-backed document store.
//!
//! The searchable corpus lives in one JSON document with three collections
//! (parts, sections, videos). The collections deserialize independently:
//! a malformed videos array fails only the videos source, and a search can
//! still run over the other two. That mirrors how the engines treat their
//! inputs - each candidate source degrades to empty on failure instead of
//! aborting the whole operation.
//!
//! Candidate fetches apply the same per-token case-insensitive contains
//! filter over the same fields the scorer reads, and denormalize parent
//! records with inner-join semantics: a record whose parent is missing is
//! skipped, not surfaced half-joined.

use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::types::{Part, PartCandidate, Section, SectionCandidate, Video, VideoCandidate};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read dataset: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed dataset: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawDataset {
    #[serde(default)]
    parts: Value,
    #[serde(default)]
    sections: Value,
    #[serde(default)]
    videos: Value,
}

/// A loaded dataset whose collections decode lazily and independently.
#[derive(Debug, Default)]
pub struct Dataset {
    raw: RawDataset,
}

impl Dataset {
    /// Load a dataset file. Fails only on I/O errors or JSON that isn't an
    /// object at the top level; per-collection problems surface from the
    /// collection accessors instead.
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        let raw = fs::read_to_string(path)?;
        Ok(Dataset {
            raw: serde_json::from_str(&raw)?,
        })
    }

    pub fn parts(&self) -> Result<Vec<Part>, StoreError> {
        decode_collection(&self.raw.parts)
    }

    pub fn sections(&self) -> Result<Vec<Section>, StoreError> {
        decode_collection(&self.raw.sections)
    }

    pub fn videos(&self) -> Result<Vec<Video>, StoreError> {
        decode_collection(&self.raw.videos)
    }
}

/// Missing collections are empty, not an error.
fn decode_collection<T: serde::de::DeserializeOwned>(value: &Value) -> Result<Vec<T>, StoreError> {
    if value.is_null() {
        return Ok(Vec::new());
    }
    Ok(serde_json::from_value(value.clone())?)
}

/// Does any token appear (case-insensitively) in any of the fields?
///
/// The store-side analog of a per-token `ilike` filter: it prunes obvious
/// non-matches cheaply and leaves ranking entirely to the scorer.
fn matches_any_token(tokens: &[String], fields: &[Option<&str>]) -> bool {
    tokens.iter().any(|token| {
        fields
            .iter()
            .flatten()
            .any(|field| field.to_lowercase().contains(token.as_str()))
    })
}

/// Videos matching any token on title or description, joined to their
/// section. Videos whose section is missing are skipped.
pub fn video_candidates(
    videos: &[Video],
    sections: &[Section],
    tokens: &[String],
) -> Vec<VideoCandidate> {
    videos
        .iter()
        .filter(|video| {
            matches_any_token(
                tokens,
                &[Some(video.title.as_str()), video.description.as_deref()],
            )
        })
        .filter_map(|video| {
            let section = sections.iter().find(|s| s.id == video.section_id)?;
            Some(VideoCandidate {
                video: video.clone(),
                section_number: section.section_number.clone(),
                section_title: section.title.clone(),
            })
        })
        .collect()
}

/// Sections matching any token on title, content, or section number,
/// joined to their part. Sections whose part is missing are skipped.
pub fn section_candidates(
    sections: &[Section],
    parts: &[Part],
    tokens: &[String],
) -> Vec<SectionCandidate> {
    sections
        .iter()
        .filter(|section| {
            matches_any_token(
                tokens,
                &[
                    Some(section.title.as_str()),
                    section.content.as_deref(),
                    Some(section.section_number.as_str()),
                ],
            )
        })
        .filter_map(|section| {
            let part = parts.iter().find(|p| p.id == section.part_id)?;
            Some(SectionCandidate {
                section: section.clone(),
                part: part.clone(),
            })
        })
        .collect()
}

/// Parts matching any token on title or description.
pub fn part_candidates(parts: &[Part], tokens: &[String]) -> Vec<PartCandidate> {
    parts
        .iter()
        .filter(|part| {
            matches_any_token(
                tokens,
                &[Some(part.title.as_str()), part.description.as_deref()],
            )
        })
        .map(|part| PartCandidate { part: part.clone() })
        .collect()
}

/// Find a section by its display number.
pub fn section_by_number<'a>(sections: &'a [Section], number: &str) -> Option<&'a Section> {
    sections.iter().find(|s| s.section_number == number)
}
