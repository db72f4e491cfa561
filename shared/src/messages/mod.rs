//! HTTP payloads exchanged with inspection equipment
//!
//! This module organizes request/response bodies by operation:
//! - `inspection`: single and bulk retest lookups
//! - `records`: single and bulk record writes
//! - `service`: liveness and error bodies

pub mod inspection;
pub mod records;
pub mod service;

pub use inspection::{
    BulkInspectionRequest, BulkInspectionResponse, InspectionRequest, InspectionResponse,
};

pub use records::{BulkCreateRecordRequest, CreateRecordRequest, CreateResponse};

pub use service::{ErrorDetail, HealthResponse};
