//! Uniform failure type for remote calls.

use thiserror::Error;

/// Why a remote call produced no usable value.
///
/// Every variant names the endpoint (`"GET /order/getAll"`) so a single log
/// line is enough for diagnosis.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// No response at all (connection refused, DNS failure, reset).
    #[error("no response received from {endpoint}: {reason}")]
    NetworkUnreachable { endpoint: String, reason: String },

    /// The bounded wait elapsed.
    #[error("{endpoint} timed out after {after_ms} ms")]
    Timeout { endpoint: String, after_ms: u64 },

    /// HTTP status outside 2xx.
    #[error("{endpoint}: {}", server_message(.status, .message))]
    Server {
        endpoint: String,
        status: u16,
        message: Option<String>,
    },

    /// The body did not parse as the expected shape.
    #[error("malformed response from {endpoint}: {reason}")]
    MalformedResponse { endpoint: String, reason: String },

    /// The request body could not be encoded.
    #[error("could not encode request for {endpoint}: {reason}")]
    Encode { endpoint: String, reason: String },
}

impl ClientError {
    pub fn endpoint(&self) -> &str {
        match self {
            ClientError::NetworkUnreachable { endpoint, .. }
            | ClientError::Timeout { endpoint, .. }
            | ClientError::Server { endpoint, .. }
            | ClientError::MalformedResponse { endpoint, .. }
            | ClientError::Encode { endpoint, .. } => endpoint,
        }
    }

    /// True when the backend could not be reached at all.
    pub fn is_connectivity(&self) -> bool {
        matches!(
            self,
            ClientError::NetworkUnreachable { .. } | ClientError::Timeout { .. }
        )
    }
}

fn server_message(status: &u16, message: &Option<String>) -> String {
    match message.as_deref() {
        Some(message) if !message.trim().is_empty() => message.to_string(),
        _ => format!("Server responded with status: {status}"),
    }
}
