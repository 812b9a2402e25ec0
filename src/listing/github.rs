use std::time::Duration;

use reqwest::blocking::{Client, Response};
use reqwest::header::{HeaderMap, ACCEPT, AUTHORIZATION, LINK};
use reqwest::StatusCode;
use serde::Deserialize;

use crate::domain::{RateInfo, Release};
use crate::error::{ReleaseGapError, Result};
use crate::listing::{ReleaseLister, ReleasePage};

/// Default per-request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Error body shape returned by the API on non-success statuses
#[derive(Debug, Deserialize)]
struct ApiError {
    message: String,
}

/// Release lister backed by the GitHub releases API.
///
/// Uses a blocking HTTP client with a per-request timeout. The token, when
/// present, is sent as a bearer token; unauthenticated use works but gets
/// the much lower anonymous rate limit.
pub struct GithubLister {
    base_url: String,
    token: Option<String>,
    client: Client,
}

impl GithubLister {
    /// Create a lister against the public GitHub API
    pub fn new(token: Option<String>) -> Result<Self> {
        Self::with_base_url(
            "https://api.github.com",
            token,
            Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        )
    }

    /// Create a lister against a custom API root (GitHub Enterprise, test servers)
    ///
    /// # Arguments
    /// * `base_url` - API root, with or without a trailing slash
    /// * `token` - Optional bearer token
    /// * `timeout` - Per-request timeout
    pub fn with_base_url(
        base_url: impl Into<String>,
        token: Option<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("release-gap/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(|e| ReleaseGapError::transport(format!("Failed to build HTTP client: {}", e)))?;

        Ok(GithubLister {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token,
            client,
        })
    }

    fn get(&self, url: &str) -> Result<Response> {
        let mut request = self
            .client
            .get(url)
            .header(ACCEPT, "application/vnd.github+json");
        if let Some(token) = &self.token {
            request = request.header(AUTHORIZATION, format!("Bearer {}", token));
        }
        request
            .send()
            .map_err(|e| ReleaseGapError::transport(format!("Request to {} failed: {}", url, e)))
    }

    /// Read the API error message from a non-success response body
    fn error_detail(status: StatusCode, response: Response) -> String {
        response
            .bytes()
            .ok()
            .and_then(|body| serde_json::from_slice::<ApiError>(&body).ok())
            .map(|err| err.message)
            .unwrap_or_else(|| status.to_string())
    }
}

impl ReleaseLister for GithubLister {
    fn list(&self, owner: &str, repo: &str, page: u32, per_page: u32) -> Result<ReleasePage> {
        let url = format!(
            "{}/repos/{}/{}/releases?per_page={}&page={}",
            self.base_url, owner, repo, per_page, page
        );
        let response = self.get(&url)?;
        let status = response.status();
        let rate = parse_rate(response.headers());
        let has_next = has_next_page(response.headers());

        if !status.is_success() {
            let detail = Self::error_detail(status, response);
            return Err(ReleaseGapError::transport(format!(
                "Listing releases for {}/{} (page {}) failed: {}",
                owner, repo, page, detail
            )));
        }

        let releases: Vec<Release> = response.json().map_err(|e| {
            ReleaseGapError::transport(format!(
                "Decoding releases for {}/{} (page {}) failed: {}",
                owner, repo, page, e
            ))
        })?;

        Ok(ReleasePage {
            releases,
            has_next,
            rate,
        })
    }

    fn get_by_tag(&self, owner: &str, repo: &str, tag: &str) -> Result<Option<Release>> {
        let url = format!(
            "{}/repos/{}/{}/releases/tags/{}",
            self.base_url, owner, repo, tag
        );
        let response = self.get(&url)?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            let detail = Self::error_detail(status, response);
            return Err(ReleaseGapError::transport(format!(
                "Looking up release '{}' on {}/{} failed: {}",
                tag, owner, repo, detail
            )));
        }

        let release: Release = response.json().map_err(|e| {
            ReleaseGapError::transport(format!(
                "Decoding release '{}' on {}/{} failed: {}",
                tag, owner, repo, e
            ))
        })?;
        Ok(Some(release))
    }
}

/// True when the Link header advertises a rel="next" page
fn has_next_page(headers: &HeaderMap) -> bool {
    headers
        .get(LINK)
        .and_then(|value| value.to_str().ok())
        .map(|link| link.split(',').any(|part| part.contains("rel=\"next\"")))
        .unwrap_or(false)
}

/// Read the X-RateLimit-* headers, if the API sent all three
fn parse_rate(headers: &HeaderMap) -> Option<RateInfo> {
    let limit: u32 = header_number(headers, "x-ratelimit-limit")?;
    let remaining: u32 = header_number(headers, "x-ratelimit-remaining")?;
    let reset: u64 = header_number(headers, "x-ratelimit-reset")?;
    Some(RateInfo::new(limit, remaining, reset))
}

fn header_number<T: std::str::FromStr>(headers: &HeaderMap, name: &str) -> Option<T> {
    headers.get(name)?.to_str().ok()?.parse().ok()
}
