#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use fxdeals_server::{api::app_router, build_state, config::Config, AppState};
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

pub struct TestApp {
    pub state: Arc<AppState>,
    pub config: Config,
    _tmp: TempDir,
}

impl TestApp {
    pub async fn new() -> Self {
        let tmp = tempfile::tempdir().unwrap();
        let config = Config::with_db_path(tmp.path().join("test.db").to_string_lossy());
        let state = build_state(&config).await.unwrap();
        Self {
            state,
            config,
            _tmp: tmp,
        }
    }

    pub fn router(&self) -> Router {
        app_router(self.state.clone(), &self.config)
    }

    pub async fn submit(&self, body: impl Into<Body>) -> (StatusCode, Value) {
        send_submit(self.router(), body).await
    }
}

pub async fn send_submit(router: Router, body: impl Into<Body>) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/fx-deals/submit")
                .header("content-type", "application/json")
                .body(body.into())
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

pub fn deal_json(unique_id: &str, from: &str, to: &str, amount: Value) -> String {
    serde_json::json!({
        "uniqueId": unique_id,
        "fromCurrency": from,
        "toCurrency": to,
        "amount": amount,
    })
    .to_string()
}
