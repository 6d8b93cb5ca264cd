//! API key gate middleware

use axum::{
    body::Body,
    http::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::auth;

/// API key presented by the caller, inserted into request extensions
///
/// Presence only means the header was well formed. Nothing here has checked
/// the key against a credential store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiKey(pub String);

impl ApiKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Require an `Authorization: ApiKey <credential>` header
pub async fn require_api_key(mut request: Request<Body>, next: Next) -> Response {
    let key = match auth::get_api_key(request.headers()) {
        Ok(key) => ApiKey(key.to_string()),
        Err(e) => {
            tracing::debug!(
                method = %request.method(),
                path = %request.uri().path(),
                "Rejected request: {}",
                e
            );
            return e.into_response();
        }
    };

    request.extensions_mut().insert(key);
    next.run(request).await
}

/// CORS middleware layer
///
/// Allows any origin, method and header. Restrict this if the gate fronts a
/// browser-facing service.
pub fn cors_layer() -> tower_http::cors::CorsLayer {
    use tower_http::cors::{Any, CorsLayer};

    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}
