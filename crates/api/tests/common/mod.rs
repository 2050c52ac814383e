use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::Request;
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use promptpack_genai::{GenAiClient, GenAiConfig};
use sqlx::PgPool;
use tower::ServiceExt;

use promptpack_api::auth::jwt::JwtConfig;
use promptpack_api::config::ServerConfig;
use promptpack_api::router::build_app_router;
use promptpack_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
            access_token_expiry_mins: 15,
            refresh_token_expiry_days: 7,
        },
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
///
/// The generative provider is pointed at an unroutable address; tests that
/// exercise the provider path use [`build_test_app_with_genai`] with a mock
/// server instead.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with_genai(pool, "http://127.0.0.1:9".to_string())
}

/// Same as [`build_test_app`] but with an explicit provider base URL.
pub fn build_test_app_with_genai(pool: PgPool, genai_base_url: String) -> Router {
    let config = test_config();
    let genai = GenAiClient::new(GenAiConfig {
        base_url: genai_base_url,
        api_key: "test-key".to_string(),
        model: "test-model".to_string(),
    });

    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        genai,
    };

    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers (all consume the router via `oneshot`)
// ---------------------------------------------------------------------------

pub async fn get(app: Router, path: &str) -> Response {
    app.oneshot(
        Request::builder()
            .method("GET")
            .uri(path)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn get_auth(app: Router, path: &str, token: &str) -> Response {
    app.oneshot(
        Request::builder()
            .method("GET")
            .uri(path)
            .header(AUTHORIZATION, format!("Bearer {token}"))
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn post_json(app: Router, path: &str, body: serde_json::Value) -> Response {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(path)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn post_json_auth(
    app: Router,
    path: &str,
    token: &str,
    body: serde_json::Value,
) -> Response {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(path)
            .header(CONTENT_TYPE, "application/json")
            .header(AUTHORIZATION, format!("Bearer {token}"))
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// POST with no body (rating endpoints take only path parameters).
pub async fn post_auth(app: Router, path: &str, token: &str) -> Response {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(path)
            .header(AUTHORIZATION, format!("Bearer {token}"))
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn put_json_auth(
    app: Router,
    path: &str,
    token: &str,
    body: serde_json::Value,
) -> Response {
    app.oneshot(
        Request::builder()
            .method("PUT")
            .uri(path)
            .header(CONTENT_TYPE, "application/json")
            .header(AUTHORIZATION, format!("Bearer {token}"))
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn delete_auth(app: Router, path: &str, token: &str) -> Response {
    app.oneshot(
        Request::builder()
            .method("DELETE")
            .uri(path)
            .header(AUTHORIZATION, format!("Bearer {token}"))
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Collect a response body as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).expect("response body must be JSON")
}

/// Register and log a user in via the API, returning their access token.
pub async fn register_and_login(app: &Router, username: &str) -> String {
    let email = format!("{username}@test.com");
    let password = "test_password_123!";

    let response = post_json(
        app.clone(),
        "/api/v1/auth/register",
        serde_json::json!({ "username": username, "email": email, "password": password }),
    )
    .await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);

    let response = post_json(
        app.clone(),
        "/api/v1/auth/login",
        serde_json::json!({ "email": email, "password": password }),
    )
    .await;
    assert_eq!(response.status(), axum::http::StatusCode::OK);

    let json = body_json(response).await;
    json["access_token"]
        .as_str()
        .expect("login must return access_token")
        .to_string()
}
