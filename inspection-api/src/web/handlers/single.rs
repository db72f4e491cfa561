//! Single item endpoints

use axum::{Json, extract::State, http::StatusCode};
use shared::{
    CreateRecordRequest, CreateResponse, InspectionRequest, InspectionResponse, Keyed,
    service_error, service_info,
};

use crate::error::ApiResult;
use crate::services::InspectionService;
use crate::traits::DefectStore;

/// Retest lookup - `POST /api/v1/inspection/single/check`
pub async fn check_single_item<S>(
    State(service): State<InspectionService<S>>,
    Json(request): Json<InspectionRequest>,
) -> ApiResult<Json<InspectionResponse>>
where
    S: DefectStore + 'static,
{
    let key = request.defect_key();
    service_info!(pk = %key, request = ?request, "Single check request received");

    match service.check(request).await {
        Ok(response) => {
            service_info!(pk = %key, retest_needed = response.retest_needed, "Single check completed");
            Ok(Json(response))
        }
        Err(e) => {
            service_error!(pk = %key, error = %e, "Single check failed");
            Err(e)
        }
    }
}

/// Record write - `POST /api/v1/inspection/single/record`
pub async fn create_or_update_record<S>(
    State(service): State<InspectionService<S>>,
    Json(record): Json<CreateRecordRequest>,
) -> ApiResult<(StatusCode, Json<CreateResponse>)>
where
    S: DefectStore + 'static,
{
    let key = record.defect_key();
    service_info!(pk = %key, record = ?record, "Single record write received");

    match service.record(record).await {
        Ok(response) => {
            service_info!(pk = %response.pk, "Record write completed");
            Ok((StatusCode::CREATED, Json(response)))
        }
        Err(e) => {
            service_error!(pk = %key, error = %e, "Record write failed");
            Err(e)
        }
    }
}
