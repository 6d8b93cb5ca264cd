//! Gate API handler functions

use axum::{Extension, Json, response::IntoResponse};

use super::middleware::ApiKey;
use super::types::WhoamiResponse;

/// GET /health
pub async fn health() -> &'static str {
    "ok"
}

/// GET /v1/whoami
///
/// Echoes a masked form of the presented key
pub async fn whoami(Extension(key): Extension<ApiKey>) -> impl IntoResponse {
    tracing::info!("Received GET /v1/whoami request");

    Json(WhoamiResponse {
        authenticated: true,
        key_hint: mask_key(key.as_str()),
    })
}

/// Keep the first half of the key and hide the rest
pub fn mask_key(key: &str) -> String {
    let keep = key.chars().count() / 2;
    let visible: String = key.chars().take(keep).collect();
    format!("{}***", visible)
}
