//! Retest decision rule

use shared::{DefectRecord, EvaluationCriteria, Verdict};

/// Decide whether a defect needs a retest under the caller's thresholds
///
/// Without a stored record the defect has no history to flag. With one, the
/// reported `retest_needed` is `true` exactly when the record meets both the
/// inspection count and the reproducibility thresholds.
pub fn evaluate(criteria: &EvaluationCriteria, record: Option<&DefectRecord>) -> Verdict {
    let Some(record) = record else {
        return Verdict::no_history();
    };

    let has_enough_data = record.total_inspections >= criteria.min_inspection_count;
    let is_reproducible_enough = record.reproducibility_rate >= criteria.min_reproducibility_rate;
    let retest_flag = !(has_enough_data && is_reproducible_enough);

    Verdict {
        retest_needed: !retest_flag,
        reproducibility_rate: record.reproducibility_rate,
        alarm_history: record.alarm_history(),
    }
}
