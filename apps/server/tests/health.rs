mod common;

use axum::{
    body::{to_bytes, Body},
    http::Request,
};
use common::TestApp;
use tower::ServiceExt;

async fn get(app: &TestApp, uri: &str) -> (u16, Vec<u8>) {
    let response = app
        .router()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status().as_u16();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, bytes.to_vec())
}

#[tokio::test]
async fn healthz_works() {
    let app = TestApp::new().await;
    let (status, body) = get(&app, "/api/v1/healthz").await;
    assert_eq!(status, 200);
    assert_eq!(body, b"ok");
}

#[tokio::test]
async fn readyz_checks_the_database() {
    let app = TestApp::new().await;
    let (status, body) = get(&app, "/api/v1/readyz").await;
    assert_eq!(status, 200);
    assert_eq!(body, b"ok");
}

#[tokio::test]
async fn openapi_document_lists_submit_route() {
    let app = TestApp::new().await;
    let (status, body) = get(&app, "/openapi.json").await;
    assert_eq!(status, 200);

    let doc: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert!(doc["paths"]["/api/v1/fx-deals/submit"]["post"].is_object());
    assert!(doc["components"]["schemas"]["DealRequestBody"].is_object());
}
