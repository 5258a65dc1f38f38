//! Image proxy against a throwaway upstream server on localhost.

mod common;

use axum::body::Body;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use common::{body_bytes, body_json, lazy_pool};

const PNG_BYTES: &[u8] = b"\x89PNG\r\n\x1a\nfake-image";

/// Serve a few fixed responses and return the base URL.
async fn spawn_upstream() -> String {
    let app = Router::new()
        .route(
            "/cat.png",
            get(|| async { ([(header::CONTENT_TYPE, "image/png")], PNG_BYTES) }),
        )
        .route(
            "/untyped",
            get(|| async { Response::new(Body::from("raw-bytes")) }),
        )
        .route(
            "/missing",
            get(|| async { StatusCode::NOT_FOUND.into_response() }),
        );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

fn proxy_uri(target: &str) -> String {
    format!("/api/v1/image-proxy?url={target}")
}

#[tokio::test]
async fn passes_through_content_type_and_sets_cache_header() {
    let upstream = spawn_upstream().await;
    let app = common::build_test_app(lazy_pool());

    let response = common::get(app, &proxy_uri(&format!("{upstream}/cat.png"))).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "image/png");
    assert_eq!(
        response.headers()[header::CACHE_CONTROL],
        "public, max-age=86400"
    );
    assert_eq!(body_bytes(response).await, PNG_BYTES);
}

#[tokio::test]
async fn missing_upstream_content_type_defaults_to_jpeg() {
    let upstream = spawn_upstream().await;
    let app = common::build_test_app(lazy_pool());

    let response = common::get(app, &proxy_uri(&format!("{upstream}/untyped"))).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "image/jpeg");
    assert_eq!(body_bytes(response).await, b"raw-bytes");
}

#[tokio::test]
async fn upstream_error_status_is_bad_gateway() {
    let upstream = spawn_upstream().await;
    let app = common::build_test_app(lazy_pool());

    let response = common::get(app, &proxy_uri(&format!("{upstream}/missing"))).await;

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let json = body_json(response).await;
    assert_eq!(json["code"], "UPSTREAM_FAILURE");
}

#[tokio::test]
async fn unreachable_upstream_is_bad_gateway() {
    // Bind then drop to get a port with nothing listening.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let app = common::build_test_app(lazy_pool());
    let response = common::get(app, &proxy_uri(&format!("http://{addr}/x.png"))).await;

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn missing_url_is_rejected() {
    let app = common::build_test_app(lazy_pool());
    let response = common::get(app, "/api/v1/image-proxy").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn non_http_schemes_are_rejected() {
    for target in ["ftp://example.com/a.png", "file:///etc/passwd", "not a url"] {
        let app = common::build_test_app(lazy_pool());
        let uri = format!(
            "/api/v1/image-proxy?url={}",
            target.replace(' ', "%20")
        );
        let response = common::get(app, &uri).await;

        assert_eq!(
            response.status(),
            StatusCode::BAD_REQUEST,
            "{target} should be rejected"
        );
    }
}
