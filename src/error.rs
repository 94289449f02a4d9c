//! Error types for repotree

/// Result type for repotree operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while listing repository contents
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The listing source could not produce a listing (not found, unreadable,
    /// unauthorized). Never retried here.
    #[error("failed to fetch listing for {repo}: {message}")]
    UpstreamFetch { repo: String, message: String },

    #[error("invalid pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn upstream(repo: impl std::fmt::Display, message: impl std::fmt::Display) -> Self {
        Self::UpstreamFetch {
            repo: repo.to_string(),
            message: message.to_string(),
        }
    }

    pub fn invalid_pattern(pattern: impl Into<String>, err: glob::PatternError) -> Self {
        Self::InvalidPattern {
            pattern: pattern.into(),
            message: err.to_string(),
        }
    }
}
