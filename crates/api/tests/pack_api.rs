//! HTTP-level integration tests for the `/packs` resource.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, delete_auth, get_auth, post_json_auth, put_json_auth, register_and_login,
};
use sqlx::PgPool;

async fn create_pack(app: &axum::Router, token: &str, title: &str) -> serde_json::Value {
    let body = serde_json::json!({ "title": title, "description": "test pack" });
    let response = post_json_auth(app.clone(), "/api/v1/packs", token, body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

/// Create then list: the new pack appears with a zero prompt counter.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_and_list_packs(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = register_and_login(&app, "packer").await;

    let pack = create_pack(&app, &token, "Story starters").await;
    assert_eq!(pack["title"], "Story starters");
    assert_eq!(pack["number_prompts"], 0);

    let response = get_auth(app, "/api/v1/packs", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 1);
    assert_eq!(json[0]["id"], pack["id"]);
}

/// Empty-title submission is rejected before any write, with the exact
/// field message.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_empty_title_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = register_and_login(&app, "sloppy").await;

    let body = serde_json::json!({ "title": "", "description": null });
    let response = post_json_auth(app.clone(), "/api/v1/packs", &token, body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["fields"]["title"][0], "Title is required");

    // Nothing was written.
    let response = get_auth(app, "/api/v1/packs", &token).await;
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 0);
}

/// Updating a pack stamps `updated_at` strictly forward and round-trips the
/// new fields.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_pack(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = register_and_login(&app, "updater").await;
    let pack = create_pack(&app, &token, "Before").await;
    let id = pack["id"].as_str().unwrap();

    let body = serde_json::json!({ "title": "After" });
    let response = put_json_auth(app.clone(), &format!("/api/v1/packs/{id}"), &token, body).await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;
    assert_eq!(updated["title"], "After");
    assert_eq!(updated["description"], "test pack", "unset fields keep their value");
    let before = chrono::DateTime::parse_from_rfc3339(pack["updated_at"].as_str().unwrap()).unwrap();
    let after = chrono::DateTime::parse_from_rfc3339(updated["updated_at"].as_str().unwrap()).unwrap();
    assert!(after > before, "updated_at must strictly advance");
}

/// Packs are invisible to anyone but their owner: read, write, and delete
/// all behave as 404.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_pack_ownership(pool: PgPool) {
    let app = common::build_test_app(pool);
    let owner = register_and_login(&app, "owner").await;
    let intruder = register_and_login(&app, "intruder").await;

    let pack = create_pack(&app, &owner, "Private").await;
    let id = pack["id"].as_str().unwrap();
    let path = format!("/api/v1/packs/{id}");

    let response = get_auth(app.clone(), &path, &intruder).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = serde_json::json!({ "title": "Hijacked" });
    let response = put_json_auth(app.clone(), &path, &intruder, body).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = delete_auth(app.clone(), &path, &intruder).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // The intruder's own listing stays empty.
    let response = get_auth(app.clone(), "/api/v1/packs", &intruder).await;
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 0);

    // The owner still sees the pack untouched.
    let response = get_auth(app, &path, &owner).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["title"], "Private");
}

/// Deleting a pack removes it and everything beneath it.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_pack_cascades(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = register_and_login(&app, "deleter").await;
    let pack = create_pack(&app, &token, "Doomed").await;
    let pack_id = pack["id"].as_str().unwrap();

    let body = serde_json::json!({ "title": "p", "content": "some content" });
    let response = post_json_auth(
        app.clone(),
        &format!("/api/v1/packs/{pack_id}/prompts"),
        &token,
        body,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let prompt = body_json(response).await;
    let prompt_id = prompt["id"].as_str().unwrap();

    let response = delete_auth(app.clone(), &format!("/api/v1/packs/{pack_id}"), &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // Pack, its prompts, and their versions are all unreachable.
    let response = get_auth(app.clone(), &format!("/api/v1/packs/{pack_id}"), &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let response = get_auth(
        app.clone(),
        &format!("/api/v1/packs/{pack_id}/prompts"),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let response = get_auth(app, &format!("/api/v1/prompts/{prompt_id}"), &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
