//! Error Types

use thiserror::Error;

/// Ways an AJAX delete can end without success
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeleteError {
    /// The user declined the confirm prompt. Not a failure, the flow just stops.
    #[error("delete cancelled by user")]
    Cancelled,

    /// Server answered with a non-2xx status
    #[error("server rejected delete: {status} {status_text}")]
    Http { status: u16, status_text: String },

    /// The request never produced a response
    #[error("request failed: {0}")]
    Transport(String),
}

/// Browser globals the page handle needs
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PageError {
    #[error("no global `window` available")]
    NoWindow,
    #[error("window has no `document`")]
    NoDocument,
    #[error("document has no `body`")]
    NoBody,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid delete-confirm config: {0}")]
    Json(#[from] serde_json::Error),
}
