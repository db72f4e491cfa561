//! Inspection service
//!
//! Composes keys, talks to the injected store and applies the retest
//! decision. Bulk operations fan out one independent store call per item and
//! join on all of them, keeping results in request order.

use std::sync::Arc;

use futures_util::future::join_all;
use shared::{
    CreateRecordRequest, CreateResponse, InspectionRequest, InspectionResponse, Keyed, Verdict,
};
use shared::{service_error, service_info, service_warn};

use crate::core::evaluate;
use crate::error::{ApiError, ApiResult};
use crate::traits::DefectStore;

pub struct InspectionService<S> {
    store: Arc<S>,
}

impl<S> Clone for InspectionService<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: DefectStore> InspectionService<S> {
    pub fn new(store: S) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Look up one defect and decide whether it needs a retest
    pub async fn check(&self, request: InspectionRequest) -> ApiResult<InspectionResponse> {
        let key = request.defect_key();
        let record = self.store.get(&key).await?;

        let verdict = evaluate(&request.criteria(), record.as_ref());
        match record {
            None => {
                service_warn!(pk = %key, "No stored history, treating as no inspection record");
            }
            Some(_) => {
                service_info!(
                    pk = %key,
                    retest_needed = verdict.retest_needed,
                    alarm_history = %verdict.alarm_history,
                    "Retest decision made"
                );
            }
        }

        Ok(InspectionResponse::new(verdict, request))
    }

    /// Create or overwrite one record at its composite key
    pub async fn record(&self, record: CreateRecordRequest) -> ApiResult<CreateResponse> {
        let key = record.defect_key();
        record.validate().map_err(|source| ApiError::InvalidRecord {
            key: key.to_string(),
            source,
        })?;

        self.store.set(&key, &record).await?;
        service_info!(pk = %key, "Record stored");
        Ok(CreateResponse::created(key.into_string()))
    }

    /// Look up every request independently; a failed item gets the error verdict
    pub async fn check_bulk(&self, requests: Vec<InspectionRequest>) -> Vec<InspectionResponse> {
        join_all(requests.into_iter().map(|request| self.check_isolated(request))).await
    }

    /// Write every record independently; a failed item reports its error in `status`
    pub async fn record_bulk(&self, records: Vec<CreateRecordRequest>) -> Vec<CreateResponse> {
        join_all(records.into_iter().map(|record| self.record_isolated(record))).await
    }

    async fn check_isolated(&self, request: InspectionRequest) -> InspectionResponse {
        let key = request.defect_key();
        match self.store.get(&key).await {
            Ok(record) => {
                let verdict = evaluate(&request.criteria(), record.as_ref());
                InspectionResponse::new(verdict, request)
            }
            Err(e) => {
                service_error!(pk = %key, error = %e, "Bulk lookup item failed");
                InspectionResponse::new(Verdict::store_error(), request)
            }
        }
    }

    async fn record_isolated(&self, record: CreateRecordRequest) -> CreateResponse {
        let key = record.defect_key();
        let outcome = match record.validate() {
            Ok(()) => self.store.set(&key, &record).await,
            Err(source) => Err(ApiError::InvalidRecord {
                key: key.to_string(),
                source,
            }),
        };

        match outcome {
            Ok(()) => CreateResponse::created(key.into_string()),
            Err(e) => {
                service_error!(pk = %key, error = %e, "Bulk write item failed");
                CreateResponse::failed(key.into_string(), &e)
            }
        }
    }
}
