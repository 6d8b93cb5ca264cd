//! API key extraction error definitions

use std::fmt;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};

use crate::gate::types::ErrorResponse;

/// Reasons an `Authorization` header can fail to yield an API key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    /// Header absent or empty
    NoAuthHeader,
    /// Header present but not `ApiKey <credential>`
    MalformedHeader,
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::NoAuthHeader => write!(f, "no authorization header included"),
            AuthError::MalformedHeader => write!(f, "malformed authorization header"),
        }
    }
}

impl std::error::Error for AuthError {}

impl AuthError {
    /// Get corresponding HTTP status code
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::NoAuthHeader => StatusCode::UNAUTHORIZED,
            AuthError::MalformedHeader => StatusCode::UNAUTHORIZED,
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let error = ErrorResponse::authentication_error(self.to_string());
        (self.status_code(), Json(error)).into_response()
    }
}
