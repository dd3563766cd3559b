//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

/// Portal error type
///
/// The `Display` text of every variant is what the user sees in the result
/// area, so transport failures carry the underlying message verbatim.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum PortalError {
    /// No domain left after splitting and trimming
    #[error("Please enter at least 1 domain")]
    NoDomains,

    /// Entries that failed the domain pattern, in input order
    #[error("Invalid domain(s): {}", .0.join(", "))]
    InvalidDomains(Vec<String>),

    /// Blank order identifier
    #[error("Please enter an ID")]
    MissingId,

    /// Identifier that cannot be addressed as a single path segment
    #[error("Invalid ID: {0}")]
    InvalidId(String),

    /// Missing or malformed configuration (API URL, ...)
    #[error("{0}")]
    Config(String),

    /// Network failure or unreadable response body
    #[error("{0}")]
    Transport(String),

    /// Response body is not the JSON we expect
    #[error("{0}")]
    Parse(String),

    /// Filesystem failure while exporting
    #[error("Storage error: {0}")]
    Storage(String),
}

impl PortalError {
    /// Whether it is expected behavior (user input, remote outage) used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::NoDomains
            | Self::InvalidDomains(_)
            | Self::MissingId
            | Self::InvalidId(_)
            | Self::Config(_)
            | Self::Transport(_) => true,
            Self::Parse(_) | Self::Storage(_) => false,
        }
    }
}

/// Portal Result type alias
pub type PortalResult<T> = std::result::Result<T, PortalError>;
