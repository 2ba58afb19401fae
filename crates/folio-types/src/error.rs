//! Error types for folio.

use std::io;

/// Errors produced by the folio framework.
#[derive(Debug, thiserror::Error)]
pub enum FolioError {
    /// A section id was requested that is not in the registry. This is a
    /// content-authoring bug and is always surfaced to the caller.
    #[error("unknown section: {0}")]
    UnknownSection(String),

    #[error("registry error: {0}")]
    Registry(String),

    #[error("backend error: {0}")]
    Backend(String),

    #[error("content error: {0}")]
    Content(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, FolioError>;
