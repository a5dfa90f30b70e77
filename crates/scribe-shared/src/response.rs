//! The response envelope every endpoint answers with.

use serde::{Deserialize, Serialize};

/// Successful response: `{status: true, msg, data}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub status: bool,
    pub msg: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn ok(msg: impl Into<String>, data: T) -> Self {
        Self {
            status: true,
            msg: msg.into(),
            data: Some(data),
        }
    }
}

/// Failed response: `{status: false, msg, error?}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub status: bool,
    pub msg: String,
    /// Raw fault description, only set for unexpected failures.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ErrorResponse {
    /// A client-facing rejection (validation, not found, unauthorized).
    pub fn rejected(msg: impl Into<String>) -> Self {
        Self {
            status: false,
            msg: msg.into(),
            error: None,
        }
    }

    /// An unexpected failure. The raw message is passed through to the client.
    pub fn fault(error: impl Into<String>) -> Self {
        Self {
            status: false,
            msg: "Error".to_string(),
            error: Some(error.into()),
        }
    }
}
