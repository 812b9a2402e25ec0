//! Ordinal distance and intervening notes between two releases.

use crate::domain::ReleaseNote;
use crate::error::{ReleaseGapError, Result};
use crate::sequence::{NoteIndex, VersionSequence};

/// Distance between two tags in the sequence, with the release notes
/// strictly between them.
///
/// Both tags are resolved by exact original-tag match over the whole
/// sequence; a tag absent from the sequence is an error even when both
/// arguments are equal. The distance is the absolute index difference,
/// with no correction applied at either end of the sequence. Notes are
/// returned newest first and exclude both endpoints.
pub fn between(
    sequence: &VersionSequence,
    notes: &NoteIndex,
    tag_a: &str,
    tag_b: &str,
) -> Result<(usize, Vec<ReleaseNote>)> {
    let pos_a = sequence
        .position_of(tag_a)
        .ok_or_else(|| ReleaseGapError::tag_not_found(tag_a))?;
    let pos_b = sequence
        .position_of(tag_b)
        .ok_or_else(|| ReleaseGapError::tag_not_found(tag_b))?;

    let (lo, hi) = if pos_a <= pos_b {
        (pos_a, pos_b)
    } else {
        (pos_b, pos_a)
    };
    let distance = hi - lo;

    let between_notes = if distance == 0 {
        Vec::new()
    } else {
        sequence.versions()[lo + 1..hi]
            .iter()
            .rev()
            .map(|version| {
                let body = notes.get(&version.tag).cloned().unwrap_or_default();
                ReleaseNote::new(version.tag.clone(), body)
            })
            .collect()
    };

    Ok((distance, between_notes))
}
