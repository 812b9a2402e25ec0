//! Paged retrieval of the complete release set.

use crate::domain::{RateInfo, Release};
use crate::error::Result;
use crate::listing::ReleaseLister;

/// Page size requested from the listing API
pub const PER_PAGE: u32 = 100;

/// Fetch every page of releases for a repository.
///
/// Pages are requested sequentially starting at 1 and concatenated in the
/// order the API returns them; no version ordering is assumed here. Each
/// next page is only requested after the previous response said one exists,
/// so pagination is never speculative. Any page failure aborts the whole
/// fetch; a partial set is never returned.
///
/// Returns the releases plus the rate info from the last page observed,
/// which is the freshest quota reading.
pub fn fetch_all<L: ReleaseLister>(
    lister: &L,
    owner: &str,
    repo: &str,
) -> Result<(Vec<Release>, Option<RateInfo>)> {
    let mut releases = Vec::new();
    let mut rate = None;
    let mut page = 1;

    loop {
        let mut current = lister.list(owner, repo, page, PER_PAGE)?;
        releases.append(&mut current.releases);
        if current.rate.is_some() {
            rate = current.rate;
        }
        if !current.has_next {
            break;
        }
        page += 1;
    }

    Ok((releases, rate))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::MockLister;

    fn lister_with_count(count: usize) -> (MockLister, Vec<String>) {
        let mut lister = MockLister::new();
        let mut tags = Vec::with_capacity(count);
        for i in (0..count).rev() {
            let tag = format!("v1.0.{}", i);
            lister.add_tag(tag.clone());
            tags.push(tag);
        }
        (lister, tags)
    }

    #[test]
    fn test_fetch_single_page() {
        let (lister, tags) = lister_with_count(3);

        let (releases, _) = fetch_all(&lister, "acme", "widget").unwrap();
        assert_eq!(releases.len(), 3);
        assert_eq!(releases[0].tag_name, tags[0]);
        assert_eq!(lister.requested_pages(), vec![1]);
    }

    #[test]
    fn test_fetch_three_pages_in_listing_order() {
        let (lister, tags) = lister_with_count(207);

        let (releases, _) = fetch_all(&lister, "acme", "widget").unwrap();
        assert_eq!(releases.len(), 207);
        assert_eq!(lister.requested_pages(), vec![1, 2, 3]);

        let fetched: Vec<String> = releases.into_iter().map(|r| r.tag_name).collect();
        assert_eq!(fetched, tags, "page order must match the listing order");
    }

    #[test]
    fn test_fetch_exact_page_boundary() {
        // 200 releases fill pages 1 and 2 exactly; no third request happens
        let (lister, _) = lister_with_count(200);

        let (releases, _) = fetch_all(&lister, "acme", "widget").unwrap();
        assert_eq!(releases.len(), 200);
        assert_eq!(lister.requested_pages(), vec![1, 2]);
    }

    #[test]
    fn test_fetch_empty_repository() {
        let lister = MockLister::new();

        let (releases, rate) = fetch_all(&lister, "acme", "widget").unwrap();
        assert!(releases.is_empty());
        assert_eq!(rate, None);
    }

    #[test]
    fn test_fetch_aborts_on_page_error() {
        let (mut lister, _) = lister_with_count(250);
        lister.fail_on_page(2);

        let result = fetch_all(&lister, "acme", "widget");
        assert!(result.is_err(), "a failed page must fail the whole fetch");
        assert_eq!(lister.requested_pages(), vec![1, 2]);
    }

    #[test]
    fn test_fetch_keeps_rate_info() {
        let (mut lister, _) = lister_with_count(5);
        lister.set_rate(crate::domain::RateInfo::new(60, 58, 1717000000));

        let (_, rate) = fetch_all(&lister, "acme", "widget").unwrap();
        assert_eq!(rate, Some(crate::domain::RateInfo::new(60, 58, 1717000000)));
    }
}
