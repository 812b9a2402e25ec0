//! Parsing and ordering of the release set.

use std::collections::HashMap;

use crate::domain::{Release, TaggedVersion};
use crate::error::{ReleaseGapError, Result};

/// Release note bodies keyed by original tag
pub type NoteIndex = HashMap<String, String>;

/// Ascending sequence of parsed release versions.
///
/// Built once per comparison and immutable afterwards. Strictly sorted by
/// semantic version with the original tag string as tie-break, so ordering
/// is total and deterministic; the oldest release sits at position 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionSequence {
    versions: Vec<TaggedVersion>,
}

impl VersionSequence {
    /// Number of releases in the sequence
    pub fn len(&self) -> usize {
        self.versions.len()
    }

    /// True when the sequence holds no releases
    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }

    /// The newest (highest) version in the sequence
    pub fn newest(&self) -> Option<&TaggedVersion> {
        self.versions.last()
    }

    /// Position of a tag by exact string match, oldest release at 0
    pub fn position_of(&self, tag: &str) -> Option<usize> {
        self.versions.iter().position(|version| version.tag == tag)
    }

    /// All versions in ascending order
    pub fn versions(&self) -> &[TaggedVersion] {
        &self.versions
    }
}

/// Parse every release tag and sort the set ascending.
///
/// All unparsable tags are collected and reported together; a partial
/// sequence is never produced. The note index is built from the same pass,
/// with missing note bodies normalized to the empty string.
pub fn parse_and_sort(releases: &[Release]) -> Result<(VersionSequence, NoteIndex)> {
    if releases.is_empty() {
        return Err(ReleaseGapError::empty_set("the filtered release set"));
    }

    let mut versions = Vec::with_capacity(releases.len());
    let mut failed = Vec::new();
    let mut notes = NoteIndex::with_capacity(releases.len());

    for release in releases {
        match TaggedVersion::parse(&release.tag_name) {
            Ok(version) => {
                notes.insert(release.tag_name.clone(), release.note_body().to_string());
                versions.push(version);
            }
            Err(_) => failed.push(release.tag_name.clone()),
        }
    }

    if !failed.is_empty() {
        return Err(ReleaseGapError::VersionParse(failed));
    }

    versions.sort();

    Ok((VersionSequence { versions }, notes))
}
