//! Integration tests for the GameVerse Nexus API

use axum::{
    body::Body,
    http::{header, Method, Request, Response, StatusCode},
};
use gameverse_nexus::{config::AppConfig, create_router};
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;

fn test_app() -> axum::Router {
    create_router(&AppConfig::default())
}

async fn get(uri: &str) -> Response<Body> {
    test_app()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn body_bytes(response: Response<Body>) -> axum::body::Bytes {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
}

#[tokio::test]
async fn test_root_endpoint() {
    let response = get("/").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/json"
    );
    assert_eq!(
        response.headers()[header::CACHE_CONTROL],
        "public, max-age=60"
    );

    let json: Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(
        json,
        json!({
            "status": "online",
            "service": "GameVerse Nexus API",
            "version": "1.0.0",
            "message": "Welcome to GameVerse Nexus Backend! 🎮",
        })
    );
}

#[tokio::test]
async fn test_status_endpoint() {
    let response = get("/api/status").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CACHE_CONTROL], "no-store");

    let json: Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(
        json,
        json!({
            "status": "online",
            "message": "Backend is running smoothly.",
        })
    );
}

#[tokio::test]
async fn test_root_preserves_key_order() {
    let body = body_bytes(get("/").await).await;
    assert_eq!(
        std::str::from_utf8(&body).unwrap(),
        r#"{"status":"online","service":"GameVerse Nexus API","version":"1.0.0","message":"Welcome to GameVerse Nexus Backend! 🎮"}"#
    );
}

#[tokio::test]
async fn test_repeated_requests_are_identical() {
    for uri in ["/", "/api/status"] {
        let first = body_bytes(get(uri).await).await;
        for _ in 0..3 {
            assert_eq!(body_bytes(get(uri).await).await, first, "body changed for {uri}");
        }
    }
}

#[tokio::test]
async fn test_unknown_path_is_not_found() {
    let response = get("/unknown").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = get("/api/status/extra").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_post_is_not_allowed() {
    for uri in ["/", "/api/status"] {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(response.headers()[header::ALLOW], "GET,HEAD");
        assert!(body_bytes(response).await.is_empty());
    }
}

#[tokio::test]
async fn test_head_returns_ok_without_body() {
    for uri in ["/", "/api/status"] {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .method(Method::HEAD)
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK, "HEAD {uri}");
        assert!(body_bytes(response).await.is_empty());
    }
}

#[tokio::test]
async fn test_response_carries_request_id() {
    let response = get("/api/status").await;
    let id = response.headers()["x-request-id"].to_str().unwrap();
    let id = Uuid::parse_str(id).unwrap();
    assert_eq!(id.get_version_num(), 4);
}

#[tokio::test]
async fn test_client_request_id_is_echoed() {
    let id = "6f1c2f4e-8a1b-4c3d-9e2f-0a1b2c3d4e5f";
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/")
                .header("x-request-id", id)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.headers()["x-request-id"], id);
}

#[tokio::test]
async fn test_cors_preflight_any_origin() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .method(Method::OPTIONS)
                .uri("/api/status")
                .header(header::ORIGIN, "http://localhost:5173")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
}

#[tokio::test]
async fn test_cors_restricted_origins() {
    let config = AppConfig::from_toml(
        "[cors]\nallowed_origins = [\"https://gameverse.example\"]\n",
    )
    .unwrap();

    let request = |origin: &str| {
        Request::builder()
            .uri("/api/status")
            .header(header::ORIGIN, origin)
            .body(Body::empty())
            .unwrap()
    };

    let allowed = create_router(&config)
        .oneshot(request("https://gameverse.example"))
        .await
        .unwrap();
    assert_eq!(
        allowed.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "https://gameverse.example"
    );

    let denied = create_router(&config)
        .oneshot(request("https://elsewhere.example"))
        .await
        .unwrap();
    assert_eq!(denied.status(), StatusCode::OK);
    assert!(denied
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .is_none());
}
