//! Integration tests for the inspection HTTP API
//!
//! Drives the full router in-process against the in-memory store, and
//! against a mocked store for failure paths.

mod helpers;

use axum::http::StatusCode;
use inspection_api::{ApiError, InMemoryDefectStore, traits::MockDefectStore};
use serde_json::json;

use helpers::{check_body, get, post_json, record_body, router_with};

const SINGLE_CHECK: &str = "/api/v1/inspection/single/check";
const SINGLE_RECORD: &str = "/api/v1/inspection/single/record";
const BULK_CHECK: &str = "/api/v1/inspection/bulk/check";
const BULK_RECORDS: &str = "/api/v1/inspection/bulk/records";

#[tokio::test]
async fn test_health_check() {
    let router = router_with(InMemoryDefectStore::new());

    let (status, body) = get(&router, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Inspection API is running" }));
}

#[tokio::test]
async fn test_write_then_check_scenarios() {
    let router = router_with(InMemoryDefectStore::new());

    let (status, body) =
        post_json(&router, SINGLE_RECORD, record_body("NX_RX_SURAD", 100, 98, 0.98)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        body,
        json!({ "pk": "SEV:TOP41:SM-S938U:NX_RX_SURAD", "status": "created_or_updated" })
    );

    let (status, body) = post_json(&router, SINGLE_CHECK, check_body("NX_RX_SURAD", 5, 0.9)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["retest_needed"], json!(true));
    assert_eq!(body["reproducibility_rate"], json!(0.98));
    assert_eq!(body["alarm_history"], json!("98/100"));
    assert_eq!(body["request_data"], check_body("NX_RX_SURAD", 5, 0.9));

    let (_, body) = post_json(&router, SINGLE_CHECK, check_body("NX_RX_SURAD", 200, 0.9)).await;
    assert_eq!(body["retest_needed"], json!(false));
    assert_eq!(body["alarm_history"], json!("98/100"));
}

#[tokio::test]
async fn test_check_without_history() {
    let router = router_with(InMemoryDefectStore::new());

    let (status, body) = post_json(&router, SINGLE_CHECK, check_body("UNSEEN", 5, 0.9)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["retest_needed"], json!(true));
    assert_eq!(body["reproducibility_rate"], json!(0.0));
    assert_eq!(body["alarm_history"], json!("0/0"));
}

#[tokio::test]
async fn test_overwrite_replaces_record() {
    let router = router_with(InMemoryDefectStore::new());

    post_json(&router, SINGLE_RECORD, record_body("ITEM", 4, 1, 0.25)).await;
    post_json(&router, SINGLE_RECORD, record_body("ITEM", 40, 38, 0.95)).await;

    let (_, body) = post_json(&router, SINGLE_CHECK, check_body("ITEM", 10, 0.9)).await;
    assert_eq!(body["alarm_history"], json!("38/40"));
    assert_eq!(body["retest_needed"], json!(true));
}

#[tokio::test]
async fn test_check_accepts_negative_values() {
    let router = router_with(InMemoryDefectStore::new());
    post_json(&router, SINGLE_RECORD, record_body("ITEM", 3, 3, 1.0)).await;

    let mut body = check_body("ITEM", -1, 0.9);
    body["analysis_period"] = json!(-1);
    let (status, response) = post_json(&router, SINGLE_CHECK, body.clone()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["retest_needed"], json!(true));
    assert_eq!(response["alarm_history"], json!("3/3"));
    assert_eq!(response["request_data"], body);

    let (status, response) = post_json(&router, SINGLE_CHECK, check_body("ITEM", 5, 0.9)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["retest_needed"], json!(false));
}

#[tokio::test]
async fn test_single_check_store_failure_is_500() {
    let mut store = MockDefectStore::new();
    store
        .expect_get()
        .returning(|_| Err(ApiError::store_unavailable("connection refused")));
    let router = router_with(store);

    let (status, body) = post_json(&router, SINGLE_CHECK, check_body("NX_RX_SURAD", 5, 0.9)).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "detail": "Internal server error" }));
}

#[tokio::test]
async fn test_single_record_store_failure_is_500() {
    let mut store = MockDefectStore::new();
    store
        .expect_set()
        .returning(|_, _| Err(ApiError::store_unavailable("connection refused")));
    let router = router_with(store);

    let (status, _) = post_json(&router, SINGLE_RECORD, record_body("ITEM", 4, 1, 0.25)).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_single_record_rejects_invalid_counts() {
    let router = router_with(InMemoryDefectStore::new());

    let (status, body) = post_json(&router, SINGLE_RECORD, record_body("ITEM", 4, 5, 1.0)).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["detail"].as_str().unwrap().contains("reproduced_count"));
}

#[tokio::test]
async fn test_incomplete_record_is_rejected() {
    let router = router_with(InMemoryDefectStore::new());
    let mut body = record_body("ITEM", 4, 1, 0.25);
    body.as_object_mut().unwrap().remove("total_inspections");

    let (status, _) = post_json(&router, SINGLE_RECORD, body).await;

    assert!(status.is_client_error());
}

#[tokio::test]
async fn test_bulk_check_keeps_order() {
    let router = router_with(InMemoryDefectStore::new());
    post_json(&router, SINGLE_RECORD, record_body("KNOWN", 100, 98, 0.98)).await;

    let (status, body) = post_json(
        &router,
        BULK_CHECK,
        json!({ "requests": [
            check_body("UNKNOWN", 5, 0.9),
            check_body("KNOWN", 5, 0.9),
            check_body("KNOWN", 200, 0.9)
        ]}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let results = body["results"].as_array().unwrap();
    assert_eq!(results.len(), 3);
    assert_eq!(results[0]["request_data"]["defect_item"], json!("UNKNOWN"));
    assert_eq!(results[0]["alarm_history"], json!("0/0"));
    assert_eq!(results[1]["retest_needed"], json!(true));
    assert_eq!(results[2]["retest_needed"], json!(false));
    assert_eq!(results[2]["alarm_history"], json!("98/100"));
}

#[tokio::test]
async fn test_bulk_check_isolates_failures() {
    let mut store = MockDefectStore::new();
    store.expect_get().returning(|key| {
        if key.as_str().ends_with("FAILING") {
            Err(ApiError::store_unavailable("timeout"))
        } else {
            Ok(None)
        }
    });
    let router = router_with(store);

    let (status, body) = post_json(
        &router,
        BULK_CHECK,
        json!({ "requests": [check_body("A", 5, 0.9), check_body("FAILING", 5, 0.9)] }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let results = body["results"].as_array().unwrap();
    assert_eq!(results[0]["alarm_history"], json!("0/0"));
    assert_eq!(results[1]["alarm_history"], json!("error"));
    assert_eq!(results[1]["reproducibility_rate"], json!(0.0));
}

#[tokio::test]
async fn test_bulk_records_then_bulk_check() {
    let router = router_with(InMemoryDefectStore::new());

    let (status, body) = post_json(
        &router,
        BULK_RECORDS,
        json!({ "records": [
            record_body("ITEM_1", 10, 9, 0.9),
            record_body("ITEM_2", 10, 11, 0.9),
            record_body("ITEM_3", 3, 3, 1.0)
        ]}),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    let results = body.as_array().unwrap();
    assert_eq!(results.len(), 3);
    assert_eq!(results[0]["status"], json!("created_or_updated"));
    assert!(results[1]["status"].as_str().unwrap().starts_with("error: "));
    assert_eq!(results[2]["pk"], json!("SEV:TOP41:SM-S938U:ITEM_3"));

    let (_, body) = post_json(
        &router,
        BULK_CHECK,
        json!({ "requests": [check_body("ITEM_1", 5, 0.9), check_body("ITEM_2", 5, 0.9)] }),
    )
    .await;
    let results = body["results"].as_array().unwrap();
    assert_eq!(results[0]["alarm_history"], json!("9/10"));
    assert_eq!(results[1]["alarm_history"], json!("0/0"));
}
