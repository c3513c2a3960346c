//! Gateway error types.

use thiserror::Error;

/// Failure of a single request to the backend, before it is classified for
/// the caller.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum TransportError {
    /// Connection refused, DNS failure, timeout: no HTTP response at all.
    #[error("backend unreachable: {0}")]
    Unreachable(String),

    /// The backend answered with a non-success status.
    #[error("backend returned {status}: {message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// `detail` field of the error body, or the raw body.
        message: String,
    },

    /// A success response whose body did not have the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),

    /// The request could not be built locally.
    #[error("could not build request: {0}")]
    Request(String),
}

impl TransportError {
    /// Failures a sleeping backend produces while it boots: no response, a
    /// gateway status from the hosting proxy, or the proxy's placeholder page
    /// served in place of JSON.
    pub fn is_cold_start(&self) -> bool {
        match self {
            Self::Unreachable(_) | Self::Decode(_) => true,
            Self::Status { status, .. } => matches!(status, 502..=504),
            Self::Request(_) => false,
        }
    }
}

/// Errors surfaced to views. Each kind has its own user-facing copy.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum GatewayError {
    /// The credential was rejected. Not retried.
    #[error("credential rejected: {0}")]
    Auth(String),

    /// The backend stayed unreachable for the whole retry budget.
    #[error("backend unreachable after {attempts} attempts: {detail}")]
    Transient {
        /// Attempts made before giving up.
        attempts: u32,
        /// Last transport failure.
        detail: String,
    },

    /// A single-shot data fetch (grades, tasks) failed.
    #[error("fetch failed: {0}")]
    Fetch(String),

    /// One chat turn failed.
    #[error("chat failed: {0}")]
    Chat(String),

    /// The uploaded document could not be turned into a quiz.
    #[error("quiz generation failed: {0}")]
    Quiz(String),
}

impl GatewayError {
    /// Message suitable for showing inline or in an alert.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Auth(_) => {
                "Failed to validate your access token. Please check your API key and try again."
            }
            Self::Transient { .. } => {
                "The server is still waking up. Please try again in a moment."
            }
            Self::Fetch(_) => "Failed to load your data. Showing the last saved copy.",
            Self::Chat(_) => "Sorry, something went wrong. Please try again.",
            Self::Quiz(_) => {
                "We couldn't create a quiz from that file. Try a different .txt or .pdf document."
            }
        }
    }
}
