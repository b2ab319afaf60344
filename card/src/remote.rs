//! Submission contract for sending a message to the remote collection.
//!
//! DESIGN
//! ======
//! The browser never talks to the remote collection directly; it posts to the
//! card server, which holds the connection parameters. Both sides share
//! [`ErrorBody`] so a failure keeps its kind across the hop: a server without
//! connection parameters answers `E_NOT_CONFIGURED`, which the browser turns
//! back into [`SubmitError::NotConfigured`].
//!
//! There is no retry and no idempotency key. Sending twice stores two rows.

#[cfg(test)]
#[path = "remote_test.rs"]
mod remote_test;

use serde::{Deserialize, Serialize};

use crate::message::MessagePayload;

pub const CODE_NOT_CONFIGURED: &str = "E_NOT_CONFIGURED";
pub const CODE_UNREACHABLE: &str = "E_REMOTE_UNREACHABLE";
pub const CODE_REJECTED: &str = "E_REMOTE_REJECTED";
pub const CODE_INCOMPLETE: &str = "E_INCOMPLETE";

/// Why a submission did not reach the remote collection.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    /// Connection parameters are missing; no request was attempted.
    #[error("remote store is not configured")]
    NotConfigured,

    /// The request never got an answer.
    #[error("remote store unreachable: {0}")]
    Unreachable(String),

    /// The remote side answered with a failure.
    #[error("remote store rejected the message ({status}): {message}")]
    Rejected { status: u16, message: String },
}

impl SubmitError {
    /// Stable machine-readable code.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotConfigured => CODE_NOT_CONFIGURED,
            Self::Unreachable(_) => CODE_UNREACHABLE,
            Self::Rejected { .. } => CODE_REJECTED,
        }
    }

    /// Rebuild the typed error from a non-success HTTP answer.
    ///
    /// `body` is parsed as [`ErrorBody`]; anything else becomes the message
    /// of a [`SubmitError::Rejected`] verbatim.
    #[must_use]
    pub fn from_response(status: u16, body: &str) -> Self {
        match serde_json::from_str::<ErrorBody>(body) {
            Ok(parsed) => match parsed.code.as_str() {
                CODE_NOT_CONFIGURED => Self::NotConfigured,
                CODE_UNREACHABLE => Self::Unreachable(parsed.error),
                _ => Self::Rejected { status, message: parsed.error },
            },
            Err(_) if body.trim().is_empty() => Self::Rejected { status, message: format!("HTTP {status}") },
            Err(_) => Self::Rejected { status, message: body.trim().to_owned() },
        }
    }
}

/// JSON error body of `/api/messages`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub error: String,
}

impl ErrorBody {
    #[must_use]
    pub fn new(code: &str, error: impl Into<String>) -> Self {
        Self { code: code.to_owned(), error: error.into() }
    }
}

/// Sends one message to the remote collection.
#[async_trait::async_trait(?Send)]
pub trait Submitter {
    /// Append `payload` to the remote collection.
    ///
    /// # Errors
    ///
    /// Returns a [`SubmitError`] describing why the message was not stored.
    async fn submit(&self, payload: &MessagePayload) -> Result<(), SubmitError>;
}
