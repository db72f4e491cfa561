//! Bulk endpoints

use axum::{Json, extract::State, http::StatusCode};
use shared::{
    BulkCreateRecordRequest, BulkInspectionRequest, BulkInspectionResponse, CreateResponse,
    service_info,
};

use crate::services::InspectionService;
use crate::traits::DefectStore;

/// Bulk retest lookup - `POST /api/v1/inspection/bulk/check`
pub async fn check_bulk_items<S>(
    State(service): State<InspectionService<S>>,
    Json(bulk_request): Json<BulkInspectionRequest>,
) -> Json<BulkInspectionResponse>
where
    S: DefectStore + 'static,
{
    service_info!(items = bulk_request.requests.len(), "Bulk check request received");

    let results = service.check_bulk(bulk_request.requests).await;
    let failed = results.iter().filter(|r| r.is_error()).count();

    service_info!(items = results.len(), failed, "Bulk check completed");
    Json(BulkInspectionResponse { results })
}

/// Bulk record write - `POST /api/v1/inspection/bulk/records`
pub async fn create_or_update_bulk_records<S>(
    State(service): State<InspectionService<S>>,
    Json(bulk_record): Json<BulkCreateRecordRequest>,
) -> (StatusCode, Json<Vec<CreateResponse>>)
where
    S: DefectStore + 'static,
{
    service_info!(items = bulk_record.records.len(), "Bulk record write received");

    let results = service.record_bulk(bulk_record.records).await;
    let succeeded = results.iter().filter(|r| r.is_success()).count();

    service_info!("Bulk record write completed. Succeeded: {}/{}", succeeded, results.len());
    (StatusCode::CREATED, Json(results))
}
