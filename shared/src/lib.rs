//! Shared types for the retest decision service
//!
//! Contains the defect record model, composite key addressing, HTTP payloads
//! and logging setup used by the API crate and its tests.

pub mod errors;
pub mod logging;
pub mod messages;
pub mod types;

pub use errors::*;
pub use types::*;

pub use messages::{
    // Retest lookups
    BulkInspectionRequest, BulkInspectionResponse, InspectionRequest, InspectionResponse,

    // Record writes
    BulkCreateRecordRequest, CreateRecordRequest, CreateResponse,

    // Service bodies
    ErrorDetail, HealthResponse,
};
