//! Gate API type definitions

use serde::Serialize;

// === Error Response ===

/// API error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail
#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    #[serde(rename = "type")]
    pub error_type: String,
    pub message: String,
}

impl ErrorResponse {
    /// Create new error response
    fn new(error_type: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: ErrorDetail {
                error_type: error_type.into(),
                message: message.into(),
            },
        }
    }

    /// Create authentication error response
    pub fn authentication_error(message: impl Into<String>) -> Self {
        Self::new("authentication_error", message)
    }
}

// === Whoami Endpoint Types ===

/// Response for `GET /v1/whoami`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WhoamiResponse {
    pub authenticated: bool,
    /// Masked form of the presented key
    pub key_hint: String,
}
