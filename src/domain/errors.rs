use thiserror::Error;

/// Failures of a single backend call.
///
/// Every variant is caught at the component boundary: user-initiated
/// operations turn it into an error notification, passive loads only log it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// The request never completed (connection refused, timeout, DNS).
    #[error("Network error: {0}")]
    Network(String),
    /// The backend answered with a non-2xx status.
    #[error("Server rejected request with HTTP {status}: {body}")]
    ServerRejected { status: u16, body: String },
    #[error("Failed to decode response: {0}")]
    Decode(String),
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl ClientError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::ServerRejected { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Decode(err.to_string())
    }
}

pub type ClientResult<T> = Result<T, ClientError>;
