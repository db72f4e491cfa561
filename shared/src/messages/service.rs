//! Liveness and error bodies

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct HealthResponse {
    pub message: String,
}

impl HealthResponse {
    pub fn running() -> Self {
        Self {
            message: "Inspection API is running".to_string(),
        }
    }
}

/// Error body returned with non-2xx statuses
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ErrorDetail {
    pub detail: String,
}

impl ErrorDetail {
    pub fn new(detail: impl Into<String>) -> Self {
        Self { detail: detail.into() }
    }
}
