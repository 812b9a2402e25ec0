//! Release listing abstraction layer
//!
//! This module provides a trait-based abstraction over the remote release
//! listing API, allowing for multiple implementations including the real
//! GitHub-backed client and an in-memory implementation for testing.
//!
//! # Overview
//!
//! The primary abstraction is the [ReleaseLister] trait, which covers the
//! two calls a comparison needs. The concrete implementations include:
//!
//! - [github::GithubLister]: A real implementation over the GitHub releases API
//! - [mock::MockLister]: An in-memory implementation for testing
//!
//! # Usage
//!
//! Most code should depend on the [ReleaseLister] trait rather than concrete
//! implementations to enable easy testing and flexibility.
//!
//! ```rust
//! # use release_gap::listing::ReleaseLister;
//! # fn example<L: ReleaseLister>(lister: &L) -> Result<(), Box<dyn std::error::Error>> {
//! let page = lister.list("goharbor", "harbor", 1, 100)?;
//! for release in &page.releases {
//!     println!("{}", release.tag_name);
//! }
//! # Ok(())
//! # }
//! ```

pub mod github;
pub mod mock;

pub use github::GithubLister;
pub use mock::MockLister;

use crate::domain::{RateInfo, Release};
use crate::error::Result;

/// One page of a release listing
#[derive(Debug, Clone)]
pub struct ReleasePage {
    /// Releases in the order the API returned them
    pub releases: Vec<Release>,
    /// Whether the API reports another page after this one
    pub has_next: bool,
    /// Rate-limit state observed on this response, if the API sent it
    pub rate: Option<RateInfo>,
}

/// Paged access to a repository's releases
///
/// This trait abstracts the release listing API to allow for multiple
/// implementations including the real GitHub client and an in-memory
/// implementation for testing.
///
/// ## Thread Safety
///
/// All implementors must be `Send + Sync` to allow safe sharing across threads.
///
/// ## Ordering
///
/// Pages preserve the API's native listing order (GitHub lists newest
/// first). Callers must not assume semantic-version order; sorting is the
/// caller's concern.
pub trait ReleaseLister: Send + Sync {
    /// Fetch one page of releases
    ///
    /// # Arguments
    /// * `owner` - Repository owner (user or organization)
    /// * `repo` - Repository name
    /// * `page` - Page number, starting at 1
    /// * `per_page` - Page size to request
    ///
    /// # Returns
    /// * `Ok(ReleasePage)` - The page content in API order
    /// * `Err` - If the request fails or the API reports an error status
    fn list(&self, owner: &str, repo: &str, page: u32, per_page: u32) -> Result<ReleasePage>;

    /// Look up a single release by its tag
    ///
    /// # Arguments
    /// * `owner` - Repository owner (user or organization)
    /// * `repo` - Repository name
    /// * `tag` - Exact tag name of the release
    ///
    /// # Returns
    /// * `Ok(Some(Release))` - The release if it exists
    /// * `Ok(None)` - If no release carries that tag
    /// * `Err` - If the request fails for any other reason
    ///
    /// # Example
    /// ```rust
    /// # use release_gap::listing::ReleaseLister;
    /// # fn example<L: ReleaseLister>(lister: &L) -> Result<(), Box<dyn std::error::Error>> {
    /// match lister.get_by_tag("goharbor", "harbor", "v2.0.2")? {
    ///     Some(release) => println!("found {}", release.tag_name),
    ///     None => println!("not a release"),
    /// }
    /// # Ok(())
    /// # }
    /// ```
    fn get_by_tag(&self, owner: &str, repo: &str, tag: &str) -> Result<Option<Release>>;
}
