//! Gate API router configuration

use axum::{Router, middleware, routing::get};

use super::{
    handlers::{health, whoami},
    middleware::{cors_layer, require_api_key},
};

/// Create the gate router
///
/// # Endpoints
/// - `GET /health` - Liveness probe, no key needed
/// - `GET /v1/whoami` - Reports the masked key presented by the caller
///
/// # Authentication
/// All `/v1` paths require `Authorization: ApiKey <credential>`
pub fn create_router() -> Router {
    let v1_routes = Router::new()
        .route("/whoami", get(whoami))
        .layer(middleware::from_fn(require_api_key));

    Router::new()
        .route("/health", get(health))
        .nest("/v1", v1_routes)
        .layer(cors_layer())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{Body, to_bytes},
        http::{Request, StatusCode, header},
    };
    use tower::ServiceExt;

    async fn send(authorization: Option<&str>, uri: &str) -> (StatusCode, serde_json::Value) {
        let mut builder = Request::builder().uri(uri);
        if let Some(value) = authorization {
            builder = builder.header(header::AUTHORIZATION, value);
        }
        let request = builder.body(Body::empty()).unwrap();

        let response = create_router().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
        (status, body)
    }

    #[tokio::test]
    async fn test_whoami_without_header() {
        let (status, body) = send(None, "/v1/whoami").await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"]["type"], "authentication_error");
        assert_eq!(body["error"]["message"], "no authorization header included");
    }

    #[tokio::test]
    async fn test_whoami_wrong_scheme() {
        let (status, body) = send(Some("Bearer abc123"), "/v1/whoami").await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        let message = body["error"]["message"].as_str().unwrap();
        assert!(message.contains("malformed authorization header"));
    }

    #[tokio::test]
    async fn test_whoami_missing_credential() {
        let (status, _) = send(Some("ApiKey"), "/v1/whoami").await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_whoami_valid_key() {
        let (status, body) = send(Some("ApiKey abc123"), "/v1/whoami").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["authenticated"], true);
        assert_eq!(body["keyHint"], "abc***");
    }

    #[tokio::test]
    async fn test_health_needs_no_key() {
        let request = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap();
        let response = create_router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"ok");
    }
}
