//! Integration tests for the generative endpoints, driven against a local
//! mock provider speaking the chat-completions wire format.

mod common;

use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use common::{body_json, get_auth, post_auth, post_json_auth, register_and_login};
use serde_json::{json, Value};
use sqlx::PgPool;

/// A well-behaved provider: generation requests get expanded content,
/// rating requests get an in-range integer.
async fn well_behaved_provider(Json(req): Json<Value>) -> Json<Value> {
    let instruction = req["messages"][0]["content"].as_str().unwrap_or_default();
    let reply = if instruction.starts_with("Rate the following text") {
        json!({ "rating": 8 }).to_string()
    } else {
        json!({ "generated_content": "An expanded, more effective prompt." }).to_string()
    };
    Json(json!({ "choices": [{ "message": { "content": reply } }] }))
}

/// A misbehaving provider that returns an out-of-range rating.
async fn out_of_range_provider(Json(_req): Json<Value>) -> Json<Value> {
    let reply = json!({ "rating": 42 }).to_string();
    Json(json!({ "choices": [{ "message": { "content": reply } }] }))
}

/// Serve a mock provider on an ephemeral port, returning its base URL.
async fn spawn_provider(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind mock provider");
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

async fn setup_prompt(app: &Router, token: &str, content: &str) -> (String, String) {
    let body = json!({ "title": "Pack", "description": null });
    let response = post_json_auth(app.clone(), "/api/v1/packs", token, body).await;
    let pack_id = body_json(response).await["id"].as_str().unwrap().to_string();

    let body = json!({ "title": "Prompt", "content": content });
    let response = post_json_auth(
        app.clone(),
        &format!("/api/v1/packs/{pack_id}/prompts"),
        token,
        body,
    )
    .await;
    let prompt = body_json(response).await;
    (pack_id, prompt["id"].as_str().unwrap().to_string())
}

/// Generation with an empty content seed returns non-empty output, and
/// rating the result lands in [1,10].
#[sqlx::test(migrations = "../db/migrations")]
async fn test_generate_then_rate_flow(pool: PgPool) {
    let base_url = spawn_provider(Router::new().route("/chat/completions", post(well_behaved_provider))).await;
    let app = common::build_test_app_with_genai(pool, base_url);
    let token = register_and_login(&app, "writer").await;

    let body = json!({ "title": "Story starter", "content": "" });
    let response = post_json_auth(app.clone(), "/api/v1/ai/generate", &token, body).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let generated = json["generated_content"].as_str().unwrap();
    assert!(!generated.trim().is_empty(), "generated content must be non-empty");

    // Store the generated content as a prompt and rate it.
    let (_pack_id, prompt_id) = setup_prompt(&app, &token, generated).await;
    let response = post_auth(
        app,
        &format!("/api/v1/prompts/{prompt_id}/rate"),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let rated = body_json(response).await;
    let rating = rated["rating"].as_i64().unwrap();
    assert!((1..=10).contains(&rating));
}

/// Rating a version persists onto the version row, not the prompt.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_rate_version(pool: PgPool) {
    let base_url = spawn_provider(Router::new().route("/chat/completions", post(well_behaved_provider))).await;
    let app = common::build_test_app_with_genai(pool, base_url);
    let token = register_and_login(&app, "vrater").await;
    let (_pack_id, prompt_id) = setup_prompt(&app, &token, "some content").await;

    let response = get_auth(
        app.clone(),
        &format!("/api/v1/prompts/{prompt_id}/versions"),
        &token,
    )
    .await;
    let versions = body_json(response).await;
    let version_id = versions[0]["id"].as_str().unwrap();

    let response = post_auth(
        app.clone(),
        &format!("/api/v1/prompts/{prompt_id}/versions/{version_id}/rate"),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let version = body_json(response).await;
    assert_eq!(version["rating"], 8);

    // The prompt itself was not rated.
    let response = get_auth(app, &format!("/api/v1/prompts/{prompt_id}"), &token).await;
    let json = body_json(response).await;
    assert_eq!(json["prompt"]["rating"], Value::Null);
}

/// An out-of-range provider rating is a schema failure (502) and is never
/// persisted.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_out_of_range_rating_not_persisted(pool: PgPool) {
    let base_url = spawn_provider(Router::new().route("/chat/completions", post(out_of_range_provider))).await;
    let app = common::build_test_app_with_genai(pool, base_url);
    let token = register_and_login(&app, "skeptic").await;
    let (_pack_id, prompt_id) = setup_prompt(&app, &token, "content").await;

    let response = post_auth(
        app.clone(),
        &format!("/api/v1/prompts/{prompt_id}/rate"),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let json = body_json(response).await;
    assert_eq!(json["code"], "GENAI_ERROR");

    let response = get_auth(app, &format!("/api/v1/prompts/{prompt_id}"), &token).await;
    let json = body_json(response).await;
    assert_eq!(json["prompt"]["rating"], Value::Null, "bad rating must not be persisted");
}

/// An unreachable provider surfaces as a provider error, not a crash, and
/// there is no automatic retry.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_provider_unreachable(pool: PgPool) {
    // Default test app points the provider at an unroutable address.
    let app = common::build_test_app(pool);
    let token = register_and_login(&app, "offline").await;

    let body = json!({ "title": "t", "content": "c" });
    let response = post_json_auth(app, "/api/v1/ai/generate", &token, body).await;
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let json = body_json(response).await;
    assert_eq!(json["code"], "GENAI_ERROR");
    assert!(json["error"].as_str().unwrap().contains("request failed"));
}
