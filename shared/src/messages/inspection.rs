//! Retest lookup payloads

use serde::{Deserialize, Serialize};

use crate::types::{DefectKey, EvaluationCriteria, Keyed, Verdict};

/// Lookup request sent by an inspection station
///
/// `analysis_criteria` and `analysis_period` are accepted and echoed back but
/// take no part in the decision. Thresholds are signed to accept any integer
/// a station sends.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct InspectionRequest {
    pub factory_code: String,
    pub analysis_criteria: String,
    pub process_code: String,
    pub product_model: String,
    pub min_inspection_criteria: i64,
    pub reproducibility_criteria: f64,
    pub analysis_period: i64,
    pub defect_item: String,
}

impl InspectionRequest {
    /// A negative inspection minimum is met by every count, so it maps to 0
    pub fn criteria(&self) -> EvaluationCriteria {
        EvaluationCriteria {
            min_inspection_count: u64::try_from(self.min_inspection_criteria).unwrap_or(0),
            min_reproducibility_rate: self.reproducibility_criteria,
        }
    }
}

impl Keyed for InspectionRequest {
    fn defect_key(&self) -> DefectKey {
        DefectKey::compose(
            &self.factory_code,
            &self.process_code,
            &self.product_model,
            &self.defect_item,
        )
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct BulkInspectionRequest {
    pub requests: Vec<InspectionRequest>,
}

/// Verdict plus the request it answers
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct InspectionResponse {
    /// `true` when no retest is required (both thresholds met)
    pub retest_needed: bool,
    pub reproducibility_rate: f64,
    /// `reproduced/total`, `0/0` without history, `error` on store failure
    pub alarm_history: String,
    pub request_data: InspectionRequest,
}

impl InspectionResponse {
    pub fn new(verdict: Verdict, request_data: InspectionRequest) -> Self {
        Self {
            retest_needed: verdict.retest_needed,
            reproducibility_rate: verdict.reproducibility_rate,
            alarm_history: verdict.alarm_history,
            request_data,
        }
    }

    /// Whether this answer stands in for a failed store lookup
    pub fn is_error(&self) -> bool {
        self.alarm_history == Verdict::ERROR_MARKER
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct BulkInspectionResponse {
    pub results: Vec<InspectionResponse>,
}
