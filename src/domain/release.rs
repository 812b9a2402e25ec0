use serde::Deserialize;

/// A single release record as returned by the listing API.
///
/// Decoded straight off the wire; unknown payload fields are ignored and
/// nothing here is interpreted beyond the declared fields.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Release {
    pub tag_name: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub prerelease: bool,
    #[serde(default)]
    pub draft: bool,
}

impl Release {
    /// Create a release record by hand (fixtures and tests)
    pub fn new(tag_name: impl Into<String>, body: impl Into<String>) -> Self {
        Release {
            tag_name: tag_name.into(),
            name: None,
            body: Some(body.into()),
            prerelease: false,
            draft: false,
        }
    }

    /// Flag this release as a pre-release
    pub fn as_prerelease(mut self) -> Self {
        self.prerelease = true;
        self
    }

    /// Flag this release as a draft
    pub fn as_draft(mut self) -> Self {
        self.draft = true;
        self
    }

    /// Note body with a missing body normalized to the empty string
    pub fn note_body(&self) -> &str {
        self.body.as_deref().unwrap_or("")
    }
}

/// A tag/body pair surfaced in comparison results
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseNote {
    pub tag: String,
    pub body: String,
}

impl ReleaseNote {
    /// Create a release note
    pub fn new(tag: impl Into<String>, body: impl Into<String>) -> Self {
        ReleaseNote {
            tag: tag.into(),
            body: body.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_release_new() {
        let release = Release::new("v1.2.0", "Bug fixes");
        assert_eq!(release.tag_name, "v1.2.0");
        assert_eq!(release.note_body(), "Bug fixes");
        assert!(!release.prerelease);
        assert!(!release.draft);
    }

    #[test]
    fn test_release_flags() {
        let release = Release::new("v2.0.0-rc.1", "").as_prerelease();
        assert!(release.prerelease);

        let draft = Release::new("v3.0.0", "").as_draft();
        assert!(draft.draft);
    }

    #[test]
    fn test_release_decodes_listing_payload() {
        let json = r#"{
            "id": 42,
            "tag_name": "v1.2.0",
            "name": "Release 1.2.0",
            "body": "Fixed pagination",
            "prerelease": false,
            "draft": false,
            "html_url": "https://example.invalid/releases/v1.2.0"
        }"#;

        let release: Release = serde_json::from_str(json).unwrap();
        assert_eq!(release.tag_name, "v1.2.0");
        assert_eq!(release.name, Some("Release 1.2.0".to_string()));
        assert_eq!(release.note_body(), "Fixed pagination");
    }

    #[test]
    fn test_release_decodes_null_body() {
        let json = r#"{"tag_name": "v0.1.0", "name": null, "body": null}"#;

        let release: Release = serde_json::from_str(json).unwrap();
        assert_eq!(release.body, None);
        assert_eq!(release.note_body(), "");
        assert!(!release.prerelease, "missing flags should default to false");
    }

    #[test]
    fn test_release_note_new() {
        let note = ReleaseNote::new("v1.1.0", "Added things");
        assert_eq!(note.tag, "v1.1.0");
        assert_eq!(note.body, "Added things");
    }
}
