use crate::error::{ReleaseGapError, Result};
use semver::Version;
use std::cmp::Ordering;
use std::fmt;

/// A release tag paired with its parsed semantic version.
///
/// Keeps the original tag string (e.g. "v1.2.3", "controller-0.30.0") so
/// lookups and output always use the tag exactly as the API returned it,
/// while ordering is driven by the parsed version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedVersion {
    pub tag: String,
    pub version: Version,
}

impl TaggedVersion {
    /// Parse a tag string into a tagged version.
    ///
    /// The version is read from the first ASCII digit onward, so prefixes
    /// like "v", "V" or "controller-" are skipped. The remainder must be a
    /// full semantic version.
    ///
    /// # Arguments
    /// * `tag` - The tag as listed by the API
    ///
    /// # Returns
    /// * `Ok(TaggedVersion)` - Tag with its parsed ordering key
    /// * `Err` - If the tag holds no version (e.g. "latest")
    pub fn parse(tag: &str) -> Result<Self> {
        let start = tag
            .find(|c: char| c.is_ascii_digit())
            .ok_or_else(|| ReleaseGapError::VersionParse(vec![tag.to_string()]))?;

        let version = Version::parse(&tag[start..])
            .map_err(|_| ReleaseGapError::VersionParse(vec![tag.to_string()]))?;

        Ok(TaggedVersion {
            tag: tag.to_string(),
            version,
        })
    }
}

impl Ord for TaggedVersion {
    // Tag string as tie-break keeps the order total when two tags carry
    // the same version (e.g. "1.0.0" and "v1.0.0").
    fn cmp(&self, other: &Self) -> Ordering {
        self.version
            .cmp(&other.version)
            .then_with(|| self.tag.cmp(&other.tag))
    }
}

impl PartialOrd for TaggedVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for TaggedVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_v_prefix() {
        let v = TaggedVersion::parse("v1.2.3").unwrap();
        assert_eq!(v.tag, "v1.2.3");
        assert_eq!(v.version, Version::new(1, 2, 3));
    }

    #[test]
    fn test_parse_without_prefix() {
        let v = TaggedVersion::parse("1.2.3").unwrap();
        assert_eq!(v.version, Version::new(1, 2, 3));
    }

    #[test]
    fn test_parse_uppercase_prefix() {
        let v = TaggedVersion::parse("V1.2.3").unwrap();
        assert_eq!(v.version, Version::new(1, 2, 3));
    }

    #[test]
    fn test_parse_component_prefix() {
        let v = TaggedVersion::parse("controller-0.30.0").unwrap();
        assert_eq!(v.tag, "controller-0.30.0");
        assert_eq!(v.version, Version::new(0, 30, 0));
    }

    #[test]
    fn test_parse_prerelease_tag() {
        let v = TaggedVersion::parse("v1.0.0-rc.1").unwrap();
        assert_eq!(v.version.to_string(), "1.0.0-rc.1");
    }

    #[test]
    fn test_parse_invalid() {
        assert!(TaggedVersion::parse("latest").is_err());
        assert!(TaggedVersion::parse("").is_err());
        assert!(TaggedVersion::parse("v1.2").is_err());
        assert!(TaggedVersion::parse("release-notes").is_err());
    }

    #[test]
    fn test_parse_error_names_the_tag() {
        let err = TaggedVersion::parse("latest").unwrap_err();
        assert!(err.to_string().contains("latest"));
    }

    #[test]
    fn test_ordering_by_version() {
        let older = TaggedVersion::parse("v1.9.0").unwrap();
        let newer = TaggedVersion::parse("v1.10.0").unwrap();
        assert!(older < newer, "1.10 should order above 1.9");
    }

    #[test]
    fn test_prerelease_orders_before_release() {
        let rc = TaggedVersion::parse("v1.0.0-rc.1").unwrap();
        let release = TaggedVersion::parse("v1.0.0").unwrap();
        assert!(rc < release);
    }

    #[test]
    fn test_equal_versions_tie_break_on_tag() {
        let bare = TaggedVersion::parse("1.0.0").unwrap();
        let prefixed = TaggedVersion::parse("v1.0.0").unwrap();
        assert!(bare < prefixed);
    }

    #[test]
    fn test_display_uses_original_tag() {
        let v = TaggedVersion::parse("controller-0.30.0").unwrap();
        assert_eq!(v.to_string(), "controller-0.30.0");
    }
}
