use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tallyfolio_server::{api::app_router, build_state, config::Config};
use tempfile::{tempdir, TempDir};
use tower::ServiceExt;

async fn build_test_router() -> (Router, TempDir) {
    let tmp = tempdir().unwrap();
    let config = Config {
        db_path: tmp.path().join("test.db").to_string_lossy().to_string(),
        ..Config::default()
    };
    let state = build_state(&config).await.unwrap();
    (app_router(state, &config), tmp)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

#[tokio::test]
async fn healthz_returns_ok() {
    let (app, _tmp) = build_test_router().await;
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/healthz")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&bytes[..], b"ok");
}

#[tokio::test]
async fn tag_lifecycle() {
    let (app, _tmp) = build_test_router().await;

    let (status, body) = send(
        &app,
        Method::PUT,
        "/api/v1/tags",
        Some(json!({"name": "Inheritance", "description": "For the kids", "background_color": "FF0000"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["result"],
        json!([{
            "name": "Inheritance",
            "description": "For the kids",
            "background_color": "ff0000",
            "foreground_color": "000000"
        }])
    );

    let (status, body) = send(&app, Method::PUT, "/api/v1/tags", Some(json!({"name": "inheritance"}))).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["result"], Value::Null);

    let (status, _) = send(&app, Method::DELETE, "/api/v1/tags", Some(json!({"name": "ghost"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(&app, Method::DELETE, "/api/v1/tags", Some(json!({"name": "INHERITANCE"}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"], json!([]));
}

#[tokio::test]
async fn invalid_tag_payloads_are_bad_requests() {
    let (app, _tmp) = build_test_router().await;

    let (status, _) = send(&app, Method::PUT, "/api/v1/tags", Some(json!({"description": "no name"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(
        &app,
        Method::PUT,
        "/api/v1/tags",
        Some(json!({"name": "x", "foreground_color": "zzz"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
