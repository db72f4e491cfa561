//! Test helper utilities for inspection API integration tests

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header::CONTENT_TYPE},
};
use inspection_api::{DefectStore, InspectionServer};
use serde_json::{Value, json};
use tower::ServiceExt;

/// Build a router around the given store
pub fn router_with<S: DefectStore + 'static>(store: S) -> Router {
    InspectionServer::new(store).build_router()
}

/// Send a JSON POST and return status plus parsed body
pub async fn post_json(router: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(router, request).await
}

/// Send a GET and return status plus parsed body
pub async fn get(router: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(router, request).await
}

async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

pub fn record_body(defect_item: &str, total: u64, reproduced: u64, rate: f64) -> Value {
    json!({
        "factory_code": "SEV",
        "process_code": "TOP41",
        "product_model": "SM-S938U",
        "defect_item": defect_item,
        "reproducibility_rate": rate,
        "total_inspections": total,
        "reproduced_count": reproduced
    })
}

pub fn check_body(defect_item: &str, min_inspections: i64, min_rate: f64) -> Value {
    json!({
        "factory_code": "SEV",
        "analysis_criteria": "retest",
        "process_code": "TOP41",
        "product_model": "SM-S938U",
        "min_inspection_criteria": min_inspections,
        "reproducibility_criteria": min_rate,
        "analysis_period": 4,
        "defect_item": defect_item
    })
}
