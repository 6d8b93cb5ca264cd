//! API key extraction from the `Authorization` header
//!
//! Accepts exactly one scheme:
//!
//! ```text
//! Authorization: ApiKey <credential>
//! ```
//!
//! Only the shape of the header is checked here. Whether the credential is
//! known to anyone is the caller's problem.

mod error;

use http::{HeaderMap, header};

pub use error::AuthError;

/// Scheme token expected before the credential (case-sensitive)
pub const AUTHORIZATION_SCHEME: &str = "ApiKey";

/// Extract the API key from request headers
///
/// Header lookup is case-insensitive and only the first `Authorization`
/// value is considered. The value is split on runs of whitespace; the first
/// token must be exactly `ApiKey` and the second token is returned. Anything
/// after the second token is ignored.
///
/// # Errors
/// - [`AuthError::NoAuthHeader`] if the header is missing or empty
/// - [`AuthError::MalformedHeader`] for any other shape, including a value
///   that is not valid UTF-8
pub fn get_api_key(headers: &HeaderMap) -> Result<&str, AuthError> {
    let value = match headers.get(header::AUTHORIZATION) {
        Some(v) if !v.is_empty() => v,
        _ => return Err(AuthError::NoAuthHeader),
    };

    let value =
        std::str::from_utf8(value.as_bytes()).map_err(|_| AuthError::MalformedHeader)?;

    let mut tokens = value.split_whitespace();
    match (tokens.next(), tokens.next()) {
        (Some(AUTHORIZATION_SCHEME), Some(key)) => Ok(key),
        _ => Err(AuthError::MalformedHeader),
    }
}
