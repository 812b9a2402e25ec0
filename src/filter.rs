//! Release filtering by tag pattern and release flags.

use regex::Regex;

use crate::domain::Release;
use crate::error::{ReleaseGapError, Result};

/// Compiled release filter.
///
/// Combines an optional tag pattern with the pre-release and draft gates;
/// a release must pass every predicate to survive. The pattern uses
/// unanchored regex semantics, so "controller" matches anywhere in the tag
/// unless the pattern anchors itself.
#[derive(Debug)]
pub struct ReleaseFilter {
    pattern: Option<Regex>,
    include_prereleases: bool,
    include_drafts: bool,
}

impl ReleaseFilter {
    /// Compile a filter.
    ///
    /// An invalid pattern fails here, before any fetching, rather than
    /// being treated as matching nothing.
    pub fn new(
        pattern: Option<&str>,
        include_prereleases: bool,
        include_drafts: bool,
    ) -> Result<Self> {
        let pattern = match pattern {
            Some(p) if !p.is_empty() => {
                Some(Regex::new(p).map_err(|source| ReleaseGapError::Pattern {
                    pattern: p.to_string(),
                    source,
                })?)
            }
            _ => None,
        };

        Ok(ReleaseFilter {
            pattern,
            include_prereleases,
            include_drafts,
        })
    }

    /// True when the release passes every predicate
    pub fn matches(&self, release: &Release) -> bool {
        if let Some(pattern) = &self.pattern {
            if !pattern.is_match(&release.tag_name) {
                return false;
            }
        }
        if release.prerelease && !self.include_prereleases {
            return false;
        }
        if release.draft && !self.include_drafts {
            return false;
        }
        true
    }

    /// Filter a release list, preserving input order
    pub fn apply(&self, releases: Vec<Release>) -> Vec<Release> {
        releases
            .into_iter()
            .filter(|release| self.matches(release))
            .collect()
    }
}
