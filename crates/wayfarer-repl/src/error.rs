//! Wayfarer REPL — error types.

use thiserror::Error;
use wayfarer_core::error::CampaignError;

/// Startup and runtime errors for the REPL.
#[derive(Debug, Error)]
pub enum ReplError {
    /// An environment variable is present but invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// No dialog is registered under the requested name.
    #[error("unknown dialog: {0} (expected one of: greet, guess)")]
    UnknownDialog(String),

    /// The campaign failed in a way the REPL cannot recover from.
    #[error("dialog error: {0}")]
    Campaign(#[from] CampaignError),

    /// Terminal I/O error.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// Status rendering error.
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
