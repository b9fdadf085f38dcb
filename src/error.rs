//! Error types for html-blocks.
//!
//! Only configuration problems and serialization can fail a conversion.
//! Missing structure (no `<head>`, no `<body>`, no headings, no bullets) is
//! never an error: the affected stage becomes a no-op.

/// Error type for conversion operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The document declares a charset that `encoding_rs` does not know.
    #[error("Unsupported document encoding: {0}")]
    UnsupportedEncoding(String),

    /// A configured codepage has no known encoding.
    #[error("Unsupported codepage: {0}")]
    UnsupportedCodepage(u16),

    /// Block document could not be written as JSON.
    #[error("Block serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for conversion operations.
pub type Result<T> = std::result::Result<T, Error>;
