//! Error types for mal-scraper.
//!
//! Only structural problems are errors. A label missing from the information
//! panel is reported as `None` by the accessors, never through this type.

/// Error type for extraction operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The information panel contains no image candidate at all.
    #[error("No poster image candidate found in the information panel")]
    MissingImage,

    /// The information panel could not be located in the document.
    #[error("Malformed document: information panel not found")]
    MalformedDocument,

    /// The source URL could not be parsed.
    #[error("Invalid source URL: {0}")]
    InvalidUrl(String),

    /// The source URL has no `anime/` or `manga/` path segment.
    #[error("Source URL has no anime or manga path segment: {0}")]
    UnknownFamily(String),
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;
