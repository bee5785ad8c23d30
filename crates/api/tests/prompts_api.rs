//! HTTP-level integration tests for the custom prompt endpoints.
//!
//! Tests cover create-or-update status codes, input validation, identity
//! enforcement, owner scoping, and idempotent deletes.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, create_user_with_token, delete, delete_auth, get, get_auth, post_json,
    post_json_auth, post_raw_auth,
};
use promptchat_core::user_types::UserType;
use promptchat_db::repositories::UserRepo;
use serde_json::json;
use sqlx::PgPool;

const PROMPTS: &str = "/api/v1/prompts";

// ---------------------------------------------------------------------------
// Create or update
// ---------------------------------------------------------------------------

/// First save creates the record (201) and echoes it back.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_save_new_prompt_returns_201(pool: PgPool) {
    let (user, token) = create_user_with_token(&pool, "u1@test.com", UserType::Regular).await;
    let app = common::build_test_app(pool);

    let body = json!({ "promptType": "lesson", "promptText": "Teach English basics" });
    let response = post_json_auth(app, PROMPTS, body, &token).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["userId"], user.id);
    assert_eq!(json["data"]["promptType"], "lesson");
    assert_eq!(json["data"]["promptText"], "Teach English basics");
    assert!(json["data"]["createdAt"].is_string());
    assert!(json["data"]["updatedAt"].is_string());
}

/// Saving the same type again updates in place (200), keeping `createdAt`.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_save_existing_prompt_returns_200(pool: PgPool) {
    let (_user, token) = create_user_with_token(&pool, "u1@test.com", UserType::Regular).await;

    let app = common::build_test_app(pool.clone());
    let first = body_json(
        post_json_auth(app, PROMPTS, json!({ "promptType": "lesson", "promptText": "one" }), &token)
            .await,
    )
    .await;

    let app = common::build_test_app(pool.clone());
    let response =
        post_json_auth(app, PROMPTS, json!({ "promptType": "lesson", "promptText": "two" }), &token)
            .await;
    assert_eq!(response.status(), StatusCode::OK);
    let second = body_json(response).await;

    assert_eq!(second["data"]["id"], first["data"]["id"]);
    assert_eq!(second["data"]["promptText"], "two");
    assert_eq!(second["data"]["createdAt"], first["data"]["createdAt"]);
    assert_ne!(second["data"]["updatedAt"], first["data"]["updatedAt"]);

    let app = common::build_test_app(pool);
    let list = body_json(get_auth(app, PROMPTS, &token).await).await;
    assert_eq!(list["data"].as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_save_missing_fields_returns_400(pool: PgPool) {
    let (_user, token) = create_user_with_token(&pool, "u1@test.com", UserType::Regular).await;

    for body in [
        json!({ "promptType": "lesson" }),
        json!({ "promptText": "text" }),
        json!({}),
    ] {
        let app = common::build_test_app(pool.clone());
        let response = post_json_auth(app, PROMPTS, body, &token).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["code"], "BAD_REQUEST");
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_save_empty_fields_returns_400(pool: PgPool) {
    let (_user, token) = create_user_with_token(&pool, "u1@test.com", UserType::Regular).await;

    for body in [
        json!({ "promptType": "", "promptText": "text" }),
        json!({ "promptType": "lesson", "promptText": "" }),
    ] {
        let app = common::build_test_app(pool.clone());
        let response = post_json_auth(app, PROMPTS, body, &token).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["code"], "VALIDATION_ERROR");
    }
}

/// Non-empty values are stored exactly as sent, whitespace included.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_save_stores_whitespace_verbatim(pool: PgPool) {
    let (_user, token) = create_user_with_token(&pool, "u1@test.com", UserType::Regular).await;

    for (prompt_type, prompt_text) in [("lesson", "   "), (" lesson", "x")] {
        let app = common::build_test_app(pool.clone());
        let body = json!({ "promptType": prompt_type, "promptText": prompt_text });
        let response = post_json_auth(app, PROMPTS, body, &token).await;

        assert_eq!(response.status(), StatusCode::CREATED, "{prompt_type:?}");
        let json = body_json(response).await;
        assert_eq!(json["data"]["promptType"], prompt_type);
        assert_eq!(json["data"]["promptText"], prompt_text);
    }

    let app = common::build_test_app(pool);
    let list = body_json(get_auth(app, PROMPTS, &token).await).await;
    assert_eq!(list["data"].as_array().unwrap().len(), 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_save_malformed_json_returns_400(pool: PgPool) {
    let (_user, token) = create_user_with_token(&pool, "u1@test.com", UserType::Regular).await;
    let app = common::build_test_app(pool);

    let response = post_raw_auth(app, PROMPTS, "{not json", &token).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// Missing identity is rejected before the body is looked at.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_save_without_token_returns_401(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post_json(app, PROMPTS, json!({})).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["code"], "UNAUTHORIZED");
}

/// A valid token for a removed account cannot create prompts.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_save_for_deleted_user_returns_401(pool: PgPool) {
    let (user, token) = create_user_with_token(&pool, "gone@test.com", UserType::Regular).await;
    UserRepo::delete(&pool, user.id).await.unwrap();
    let app = common::build_test_app(pool);

    let body = json!({ "promptType": "lesson", "promptText": "text" });
    let response = post_json_auth(app, PROMPTS, body, &token).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// ---------------------------------------------------------------------------
// Read
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_returns_only_callers_prompts(pool: PgPool) {
    let (alice, alice_token) =
        create_user_with_token(&pool, "alice@test.com", UserType::Regular).await;
    let (_bob, bob_token) = create_user_with_token(&pool, "bob@test.com", UserType::Regular).await;

    for (token, prompt_type) in [(&alice_token, "lesson"), (&alice_token, "story"), (&bob_token, "task")] {
        let app = common::build_test_app(pool.clone());
        let body = json!({ "promptType": prompt_type, "promptText": "text" });
        let response = post_json_auth(app, PROMPTS, body, token).await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let app = common::build_test_app(pool);
    let response = get_auth(app, PROMPTS, &alice_token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let prompts = json["data"].as_array().unwrap();
    assert_eq!(prompts.len(), 2);
    assert!(prompts.iter().all(|p| p["userId"] == alice.id));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_without_token_returns_401(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, PROMPTS).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_invalid_token_returns_401(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get_auth(app, PROMPTS, "not-a-jwt").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_single_prompt(pool: PgPool) {
    let (_user, token) = create_user_with_token(&pool, "u1@test.com", UserType::Regular).await;

    let app = common::build_test_app(pool.clone());
    let body = json!({ "promptType": "lesson", "promptText": "Teach English basics" });
    post_json_auth(app, PROMPTS, body, &token).await;

    let app = common::build_test_app(pool.clone());
    let response = get_auth(app, "/api/v1/prompts/lesson", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["promptText"], "Teach English basics");

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/prompts/story", &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_is_idempotent(pool: PgPool) {
    let (_user, token) = create_user_with_token(&pool, "u1@test.com", UserType::Regular).await;

    let app = common::build_test_app(pool.clone());
    let body = json!({ "promptType": "lesson", "promptText": "text" });
    post_json_auth(app, PROMPTS, body, &token).await;

    let app = common::build_test_app(pool.clone());
    let response = delete_auth(app, "/api/v1/prompts?promptType=lesson", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["deleted"], true);

    let app = common::build_test_app(pool.clone());
    let response = delete_auth(app, "/api/v1/prompts?promptType=lesson", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["deleted"], false);

    let app = common::build_test_app(pool);
    let list = body_json(get_auth(app, PROMPTS, &token).await).await;
    assert!(list["data"].as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_encoded_prompt_type(pool: PgPool) {
    let (_user, token) = create_user_with_token(&pool, "u1@test.com", UserType::Regular).await;

    let app = common::build_test_app(pool.clone());
    let body = json!({ "promptType": "my story", "promptText": "text" });
    post_json_auth(app, PROMPTS, body, &token).await;

    let app = common::build_test_app(pool);
    let response = delete_auth(app, "/api/v1/prompts?promptType=my%20story", &token).await;
    assert_eq!(body_json(response).await["data"]["deleted"], true);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_without_prompt_type_returns_400(pool: PgPool) {
    let (_user, token) = create_user_with_token(&pool, "u1@test.com", UserType::Regular).await;

    for uri in [PROMPTS, "/api/v1/prompts?promptType="] {
        let app = common::build_test_app(pool.clone());
        let response = delete_auth(app, uri, &token).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_without_token_returns_401(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = delete(app, "/api/v1/prompts?promptType=lesson").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
