use reqwest::StatusCode;
use shared::protocol::Endpoint;
use thiserror::Error;

/// A backend round-trip that did not produce a usable body. Every variant is
/// handled the same way by callers; the split only sharpens the log line.
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("request to {} failed: {source}", .endpoint.path())]
    Transport {
        endpoint: Endpoint,
        #[source]
        source: reqwest::Error,
    },
    #[error("{} answered with status {status}", .endpoint.path())]
    Status {
        endpoint: Endpoint,
        status: StatusCode,
    },
    #[error("malformed response body from {}: {source}", .endpoint.path())]
    Decode {
        endpoint: Endpoint,
        #[source]
        source: reqwest::Error,
    },
    #[error("invalid backend url '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

impl RequestError {
    pub fn endpoint(&self) -> Option<Endpoint> {
        match self {
            Self::Transport { endpoint, .. }
            | Self::Status { endpoint, .. }
            | Self::Decode { endpoint, .. } => Some(*endpoint),
            Self::InvalidBaseUrl { .. } => None,
        }
    }
}
