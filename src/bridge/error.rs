//! Error types for Bridge lookups.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur while looking up a Bridge resource.
///
/// Every variant aborts the lookup; none of them carry a partial result.
/// Underlying causes are displayed unchanged so the host shows the network
/// error, status line or decode error verbatim.
#[derive(Debug, Error)]
pub enum LookupError {
    /// Input rejected before any request was made (empty name, empty
    /// endpoint, malformed host meta).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The GET did not complete (DNS, connection refused, body read failure).
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// The remote answered with anything other than 200.
    #[error("Error fetching resource: {status}")]
    RemoteStatus {
        /// Status returned by the remote.
        status: StatusCode,
    },

    /// The body was not JSON or did not match the resource shape.
    #[error(transparent)]
    Decode(#[from] serde_json::Error),

    /// An output attribute could not be recorded on the caller's state.
    #[error("failed to set attribute {attribute:?}: {reason}")]
    FieldAssignment {
        /// Attribute that was being written.
        attribute: String,
        /// Why the write was refused.
        reason: String,
    },
}

impl LookupError {
    pub(crate) fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Returns `true` if the request never reached a response.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// Returns the remote status if this is a status error.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::RemoteStatus { status } => Some(*status),
            _ => None,
        }
    }

    /// Returns `true` if the response body could not be decoded.
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode(_))
    }
}
