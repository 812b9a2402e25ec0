//! Comparison session orchestration.
//!
//! A session resolves the full release set once (fetch, filter, verify,
//! parse, sort) and then answers distance queries over that snapshot. The
//! lister is only borrowed during resolution, so independent sessions can
//! run on independent threads.

use crate::distance;
use crate::domain::{RateInfo, ReleaseNote};
use crate::error::{ReleaseGapError, Result};
use crate::fetch::fetch_all;
use crate::filter::ReleaseFilter;
use crate::listing::ReleaseLister;
use crate::sequence::{parse_and_sort, NoteIndex, VersionSequence};

/// Options controlling how a comparison session resolves its release set
#[derive(Debug, Clone, Default)]
pub struct CompareOptions {
    /// Tag to compare against; unset or empty means the newest release
    pub target_tag: Option<String>,
    /// Regular expression a tag must match (unanchored semantics)
    pub filter_pattern: Option<String>,
    /// Keep releases flagged as pre-releases
    pub include_prereleases: bool,
    /// Keep releases flagged as drafts
    pub include_drafts: bool,
    /// Confirm both endpoints exist as releases before comparing
    pub verify_release: bool,
}

/// Result of a release comparison
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    /// Number of ordinal steps between the two releases
    pub distance: usize,
    /// Release notes strictly between the endpoints, newest first
    pub notes: Vec<ReleaseNote>,
    /// The primary release tag as requested
    pub primary_tag: String,
    /// The target tag that was compared against
    pub target_tag: String,
    /// Rate info from the last listing response, if the API provided it
    pub rate: Option<RateInfo>,
}

/// A resolved comparison session.
///
/// Holds the sorted version sequence and note index for one repository
/// snapshot. Nothing is shared or cached between sessions.
#[derive(Debug)]
pub struct Session {
    owner: String,
    repo: String,
    primary_tag: String,
    target_tag: String,
    sequence: VersionSequence,
    notes: NoteIndex,
    rate: Option<RateInfo>,
}

impl Session {
    /// Resolve a session against a release lister.
    ///
    /// Validates the identifying fields, compiles the filter, fetches and
    /// filters the full release set, optionally verifies both endpoints
    /// exist as releases, then parses and sorts. An unset target tag
    /// defaults to the newest release of the filtered sequence.
    ///
    /// # Arguments
    /// * `lister` - Release listing transport; borrowed only during resolution
    /// * `owner` - Repository owner (user or organization)
    /// * `repo` - Repository name
    /// * `primary_tag` - Release tag to measure from
    /// * `options` - Filtering, verification and target selection
    ///
    /// # Returns
    /// * `Ok(Session)` - A resolved snapshot ready to compare
    /// * `Err` - On the first failed step; no partial session is returned
    pub fn open<L: ReleaseLister>(
        lister: &L,
        owner: &str,
        repo: &str,
        primary_tag: &str,
        options: &CompareOptions,
    ) -> Result<Session> {
        validate_required(owner, repo, primary_tag)?;

        let filter = ReleaseFilter::new(
            options.filter_pattern.as_deref(),
            options.include_prereleases,
            options.include_drafts,
        )?;

        let (releases, rate) = fetch_all(lister, owner, repo)?;
        let releases = filter.apply(releases);
        if releases.is_empty() {
            return Err(ReleaseGapError::empty_set(format!("{}/{}", owner, repo)));
        }

        let explicit_target = options
            .target_tag
            .as_deref()
            .filter(|tag| !tag.is_empty());

        if options.verify_release {
            verify_exists(lister, owner, repo, primary_tag)?;
            if let Some(target) = explicit_target {
                verify_exists(lister, owner, repo, target)?;
            }
        }

        let (sequence, notes) = parse_and_sort(&releases)?;

        // A defaulted target comes straight out of the sequence, so it
        // needs no verification round-trip.
        let target_tag = match explicit_target {
            Some(tag) => tag.to_string(),
            None => sequence
                .newest()
                .map(|newest| newest.tag.clone())
                .ok_or_else(|| ReleaseGapError::empty_set(format!("{}/{}", owner, repo)))?,
        };

        Ok(Session {
            owner: owner.to_string(),
            repo: repo.to_string(),
            primary_tag: primary_tag.to_string(),
            target_tag,
            sequence,
            notes,
            rate,
        })
    }

    /// Compute the comparison for this session's endpoints.
    ///
    /// Pure over the resolved snapshot; calling it repeatedly returns the
    /// same result.
    pub fn compare(&self) -> Result<Comparison> {
        let (gap, notes) = distance::between(
            &self.sequence,
            &self.notes,
            &self.primary_tag,
            &self.target_tag,
        )?;

        Ok(Comparison {
            distance: gap,
            notes,
            primary_tag: self.primary_tag.clone(),
            target_tag: self.target_tag.clone(),
            rate: self.rate,
        })
    }

    /// Repository owner this session was resolved for
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Repository name this session was resolved for
    pub fn repo(&self) -> &str {
        &self.repo
    }

    /// Number of releases in the resolved sequence
    pub fn release_count(&self) -> usize {
        self.sequence.len()
    }

    /// The resolved version sequence, oldest first
    pub fn sequence(&self) -> &VersionSequence {
        &self.sequence
    }
}

/// Open a session and run a single comparison
pub fn compare<L: ReleaseLister>(
    lister: &L,
    owner: &str,
    repo: &str,
    primary_tag: &str,
    options: &CompareOptions,
) -> Result<Comparison> {
    Session::open(lister, owner, repo, primary_tag, options)?.compare()
}

fn validate_required(owner: &str, repo: &str, primary_tag: &str) -> Result<()> {
    let mut missing = Vec::new();
    if owner.is_empty() {
        missing.push("owner".to_string());
    }
    if repo.is_empty() {
        missing.push("repo".to_string());
    }
    if primary_tag.is_empty() {
        missing.push("release".to_string());
    }

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ReleaseGapError::Validation(missing))
    }
}

fn verify_exists<L: ReleaseLister>(
    lister: &L,
    owner: &str,
    repo: &str,
    tag: &str,
) -> Result<()> {
    match lister.get_by_tag(owner, repo, tag)? {
        Some(_) => Ok(()),
        None => Err(ReleaseGapError::NotARelease {
            owner: owner.to_string(),
            repo: repo.to_string(),
            tag: tag.to_string(),
        }),
    }
}
