use std::sync::Mutex;

use crate::domain::{RateInfo, Release};
use crate::error::{ReleaseGapError, Result};
use crate::listing::{ReleaseLister, ReleasePage};

/// Mock lister for testing without network access.
///
/// Serves its release list through real pagination math and records every
/// page requested, so tests can assert on paging behavior.
pub struct MockLister {
    releases: Vec<Release>,
    rate: Option<RateInfo>,
    failing_page: Option<u32>,
    requested_pages: Mutex<Vec<u32>>,
}

impl MockLister {
    /// Create a new empty mock lister
    pub fn new() -> Self {
        MockLister {
            releases: Vec::new(),
            rate: None,
            failing_page: None,
            requested_pages: Mutex::new(Vec::new()),
        }
    }

    /// Add a release in listing order (the API lists newest first)
    pub fn add_release(&mut self, release: Release) {
        self.releases.push(release);
    }

    /// Add a plain release by tag, with a body derived from the tag
    pub fn add_tag(&mut self, tag: impl Into<String>) {
        let tag = tag.into();
        let body = format!("Notes for {}", tag);
        self.releases.push(Release::new(tag, body));
    }

    /// Attach rate info to every page served
    pub fn set_rate(&mut self, rate: RateInfo) {
        self.rate = Some(rate);
    }

    /// Make the given page fail with a transport error
    pub fn fail_on_page(&mut self, page: u32) {
        self.failing_page = Some(page);
    }

    /// Pages requested so far, in request order
    pub fn requested_pages(&self) -> Vec<u32> {
        self.requested_pages
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl Default for MockLister {
    fn default() -> Self {
        Self::new()
    }
}

impl ReleaseLister for MockLister {
    fn list(&self, _owner: &str, _repo: &str, page: u32, per_page: u32) -> Result<ReleasePage> {
        self.requested_pages
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(page);

        if self.failing_page == Some(page) {
            return Err(ReleaseGapError::transport(format!(
                "Injected failure on page {}",
                page
            )));
        }

        if page == 0 || per_page == 0 {
            return Err(ReleaseGapError::transport(
                "Pages and page sizes start at 1",
            ));
        }

        let start = (page as usize - 1) * per_page as usize;
        let end = (start + per_page as usize).min(self.releases.len());
        let releases = if start < self.releases.len() {
            self.releases[start..end].to_vec()
        } else {
            Vec::new()
        };
        let has_next = end < self.releases.len();

        Ok(ReleasePage {
            releases,
            has_next,
            rate: self.rate,
        })
    }

    fn get_by_tag(&self, _owner: &str, _repo: &str, tag: &str) -> Result<Option<Release>> {
        Ok(self
            .releases
            .iter()
            .find(|release| release.tag_name == tag)
            .cloned())
    }
}
