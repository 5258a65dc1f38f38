//! Media ingestion ordering: decode, store, then record.
//!
//! The non-ignored tests run without a database. Storage outcomes are
//! observed through the test doubles in `common`.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use canjala_db::models::user::CreateUser;
use canjala_db::repositories::UserRepo;
use common::{
    admin_token, body_json, build_test_app_with_store, get, lazy_pool, post_json, token_for,
    FailingStore, MemoryStore,
};
use serde_json::json;
use sqlx::PgPool;

fn upload_body(data: &str) -> serde_json::Value {
    json!({
        "file_name": "Palco Principal.JPG",
        "data": data,
        "mime_type": "image/jpeg",
        "file_type": "image",
        "section": "gallery",
        "caption_pt": "Palco principal",
        "caption_en": "Main stage"
    })
}

#[tokio::test]
async fn storage_failure_returns_502() {
    let app = build_test_app_with_store(lazy_pool(), Arc::new(FailingStore));
    let token = admin_token();

    let response = post_json(app, "/api/v1/media", Some(&token), upload_body("aGVsbG8=")).await;

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let json = body_json(response).await;
    assert_eq!(json["code"], "UPSTREAM_FAILURE");
}

#[tokio::test]
async fn invalid_base64_is_rejected_before_storage() {
    let store = Arc::new(MemoryStore::default());
    let app = build_test_app_with_store(lazy_pool(), store.clone());
    let token = admin_token();

    let response = post_json(
        app,
        "/api/v1/media",
        Some(&token),
        upload_body("%%% not base64 %%%"),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(store.object_count(), 0);
}

#[tokio::test]
async fn empty_file_name_is_rejected() {
    let store = Arc::new(MemoryStore::default());
    let app = build_test_app_with_store(lazy_pool(), store.clone());
    let token = admin_token();

    let mut body = upload_body("aGVsbG8=");
    body["file_name"] = json!("   ");
    let response = post_json(app, "/api/v1/media", Some(&token), body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(store.object_count(), 0);
}

#[tokio::test]
async fn failed_metadata_insert_removes_stored_object() {
    let store = Arc::new(MemoryStore::default());
    let app = build_test_app_with_store(lazy_pool(), store.clone());
    let token = admin_token();

    let response = post_json(app, "/api/v1/media", Some(&token), upload_body("aGVsbG8=")).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(store.object_count(), 0);
    let deleted = store.deleted_keys();
    assert_eq!(deleted.len(), 1);
    assert!(deleted[0].starts_with("media/images/"));
    assert!(deleted[0].ends_with(".jpg"));
}

// ---------------------------------------------------------------------------
// Database-backed
// ---------------------------------------------------------------------------

async fn seed_admin(pool: &PgPool) -> i64 {
    UserRepo::create(
        pool,
        &CreateUser {
            open_id: "festival-admin".to_string(),
            name: Some("Festival Admin".to_string()),
            email: None,
            login_method: None,
            role: Some("admin".to_string()),
        },
    )
    .await
    .unwrap()
    .id
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires PostgreSQL (DATABASE_URL)"]
async fn upload_records_metadata_after_storing(pool: PgPool) {
    let admin_id = seed_admin(&pool).await;
    let token = token_for(admin_id, "admin");
    let store = Arc::new(MemoryStore::default());

    let app = build_test_app_with_store(pool.clone(), store.clone());
    let response = post_json(
        app,
        "/api/v1/media",
        Some(&token),
        upload_body("data:image/jpeg;base64,aGVsbG8="),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    let media = &json["data"];
    assert_eq!(media["file_type"], "image");
    assert_eq!(media["file_size"], 5);
    assert_eq!(media["uploaded_by"], admin_id);
    assert_eq!(media["section"], "gallery");
    assert_eq!(media["is_active"], true);
    let key = media["file_key"].as_str().unwrap();
    assert_eq!(media["url"], format!("https://cdn.test/{key}"));
    assert_eq!(store.object_count(), 1);

    let app = build_test_app_with_store(pool, store);
    let listed = body_json(get(app, "/api/v1/media?section=gallery").await).await;
    assert_eq!(listed["data"].as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires PostgreSQL (DATABASE_URL)"]
async fn storage_failure_writes_no_row(pool: PgPool) {
    let admin_id = seed_admin(&pool).await;
    let token = token_for(admin_id, "admin");

    let app = build_test_app_with_store(pool.clone(), Arc::new(FailingStore));
    let response = post_json(app, "/api/v1/media", Some(&token), upload_body("aGVsbG8=")).await;
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM media_files")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires PostgreSQL (DATABASE_URL)"]
async fn blank_section_filter_lists_all_media(pool: PgPool) {
    let admin_id = seed_admin(&pool).await;
    let token = token_for(admin_id, "admin");
    let store = Arc::new(MemoryStore::default());

    let app = build_test_app_with_store(pool.clone(), store.clone());
    let response = post_json(app, "/api/v1/media", Some(&token), upload_body("aGVsbG8=")).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let mut unsectioned = upload_body("aGVsbG8=");
    unsectioned["section"] = serde_json::Value::Null;
    let app = build_test_app_with_store(pool.clone(), store.clone());
    let response = post_json(app, "/api/v1/media", Some(&token), unsectioned).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    for (uri, expected) in [
        ("/api/v1/media", 2),
        ("/api/v1/media?section=", 2),
        ("/api/v1/media?section=gallery", 1),
    ] {
        let app = build_test_app_with_store(pool.clone(), store.clone());
        let listed = body_json(get(app, uri).await).await;
        assert_eq!(listed["data"].as_array().unwrap().len(), expected, "{uri}");
    }
}
