//! Error types for the Omi tool façade.

use thiserror::Error;

/// Coarse classification of an [`OmiError`], as seen by a tool caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Caller input was malformed; no request was sent.
    Validation,
    /// The Omi API answered with a non-success status.
    Remote,
    /// Transport fault, undecodable response, or broken local state.
    Internal,
}

/// Errors returned by validation, request construction, and the Omi client.
#[derive(Debug, Error)]
pub enum OmiError {
    /// A caller-supplied parameter failed validation.
    #[error("invalid {field}: {message}")]
    Validation { field: String, message: String },
    /// The Omi API returned a non-2xx status.
    #[error("Omi API returned {}: {body}", status_line(.status, .status_text))]
    Remote {
        status: u16,
        status_text: String,
        body: String,
    },
    /// The HTTP exchange itself failed (connect, timeout, body read).
    #[error("request to Omi API failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The Omi API answered 2xx with a body that could not be decoded.
    #[error("malformed response from Omi API: {0}")]
    Decode(String),
    /// Anything else that went wrong locally.
    #[error("internal error: {0}")]
    Internal(String),
}

/// `404 Not Found`, or just `599` when the status has no reason phrase.
fn status_line(status: &u16, status_text: &str) -> String {
    if status_text.is_empty() {
        status.to_string()
    } else {
        format!("{status} {status_text}")
    }
}

impl OmiError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation { .. } => ErrorKind::Validation,
            Self::Remote { .. } => ErrorKind::Remote,
            Self::Transport(_) | Self::Decode(_) | Self::Internal(_) => ErrorKind::Internal,
        }
    }
}
