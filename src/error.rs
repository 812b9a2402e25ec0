use thiserror::Error;

/// Unified error type for release-gap operations
#[derive(Error, Debug)]
pub enum ReleaseGapError {
    #[error("Missing required field(s): {}", .0.join(", "))]
    Validation(Vec<String>),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Invalid filter pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        source: regex::Error,
    },

    #[error("Unparsable version tag(s): {}", .0.join(", "))]
    VersionParse(Vec<String>),

    #[error("No releases found for {0}")]
    EmptySet(String),

    #[error("'{tag}' is not a release on {owner}/{repo}")]
    NotARelease {
        owner: String,
        repo: String,
        tag: String,
    },

    #[error("Tag not found in release set: {0}")]
    TagNotFound(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in release-gap
pub type Result<T> = std::result::Result<T, ReleaseGapError>;

impl ReleaseGapError {
    /// Create a transport error with context
    pub fn transport(msg: impl Into<String>) -> Self {
        ReleaseGapError::Transport(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        ReleaseGapError::Config(msg.into())
    }

    /// Create an empty-set error naming the release source
    pub fn empty_set(source: impl Into<String>) -> Self {
        ReleaseGapError::EmptySet(source.into())
    }

    /// Create a tag-not-found error
    pub fn tag_not_found(tag: impl Into<String>) -> Self {
        ReleaseGapError::TagNotFound(tag.into())
    }
}
