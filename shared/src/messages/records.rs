//! Record write payloads

use serde::{Deserialize, Serialize};

use crate::types::DefectRecord;

/// A write carries the complete record; there is no partial update
pub type CreateRecordRequest = DefectRecord;

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct BulkCreateRecordRequest {
    pub records: Vec<CreateRecordRequest>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CreateResponse {
    pub pk: String,
    pub status: String,
}

impl CreateResponse {
    pub const CREATED_OR_UPDATED: &'static str = "created_or_updated";

    pub fn created(pk: impl Into<String>) -> Self {
        Self {
            pk: pk.into(),
            status: Self::CREATED_OR_UPDATED.to_string(),
        }
    }

    pub fn failed(pk: impl Into<String>, error: &dyn std::fmt::Display) -> Self {
        Self {
            pk: pk.into(),
            status: format!("error: {error}"),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == Self::CREATED_OR_UPDATED
    }
}
