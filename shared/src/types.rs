//! Core shared types for defect statistics and retest decisions

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::errors::{SharedError, SharedResult};

/// Delimiter joining the four business dimensions of a composite key
pub const KEY_DELIMITER: char = ':';

/// Stored hash field names
pub mod fields {
    pub const FACTORY_CODE: &str = "factory_code";
    pub const PROCESS_CODE: &str = "process_code";
    pub const PRODUCT_MODEL: &str = "product_model";
    pub const DEFECT_ITEM: &str = "defect_item";
    pub const REPRODUCIBILITY_RATE: &str = "reproducibility_rate";
    pub const TOTAL_INSPECTIONS: &str = "total_inspections";
    pub const REPRODUCED_COUNT: &str = "reproduced_count";
}

/// Composite business key addressing one defect record
///
/// Rendered as `factory:process:model:item`. Field values are not escaped,
/// so a value containing `:` can collide with a different tuple.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DefectKey(String);

impl DefectKey {
    pub fn compose(
        factory_code: &str,
        process_code: &str,
        product_model: &str,
        defect_item: &str,
    ) -> Self {
        Self(format!(
            "{factory_code}{d}{process_code}{d}{product_model}{d}{defect_item}",
            d = KEY_DELIMITER
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for DefectKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Anything identified by the four business dimensions
pub trait Keyed {
    fn defect_key(&self) -> DefectKey;
}

/// Accumulated reproduction evidence for one defect tuple
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DefectRecord {
    pub factory_code: String,
    pub process_code: String,
    pub product_model: String,
    pub defect_item: String,
    pub reproducibility_rate: f64,
    pub total_inspections: u64,
    pub reproduced_count: u64,
}

impl Keyed for DefectRecord {
    fn defect_key(&self) -> DefectKey {
        DefectKey::compose(
            &self.factory_code,
            &self.process_code,
            &self.product_model,
            &self.defect_item,
        )
    }
}

impl DefectRecord {
    /// Check the record invariants before it is written
    pub fn validate(&self) -> SharedResult<()> {
        if !self.reproducibility_rate.is_finite()
            || !(0.0..=1.0).contains(&self.reproducibility_rate)
        {
            return Err(SharedError::InvalidRecord {
                reason: format!(
                    "reproducibility_rate must be within [0.0, 1.0], got {}",
                    self.reproducibility_rate
                ),
            });
        }
        if self.reproduced_count > self.total_inspections {
            return Err(SharedError::InvalidRecord {
                reason: format!(
                    "reproduced_count ({}) exceeds total_inspections ({})",
                    self.reproduced_count, self.total_inspections
                ),
            });
        }
        Ok(())
    }

    /// `reproduced/total` evidence string
    pub fn alarm_history(&self) -> String {
        format!("{}/{}", self.reproduced_count, self.total_inspections)
    }

    /// Flatten into string hash fields, the layout kept in the store
    pub fn to_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            (fields::FACTORY_CODE, self.factory_code.clone()),
            (fields::PROCESS_CODE, self.process_code.clone()),
            (fields::PRODUCT_MODEL, self.product_model.clone()),
            (fields::DEFECT_ITEM, self.defect_item.clone()),
            (fields::REPRODUCIBILITY_RATE, self.reproducibility_rate.to_string()),
            (fields::TOTAL_INSPECTIONS, self.total_inspections.to_string()),
            (fields::REPRODUCED_COUNT, self.reproduced_count.to_string()),
        ]
    }

    /// Rebuild a record from stored hash fields
    ///
    /// Values pass through as stored: a rate outside [0, 1] is not clamped.
    pub fn from_fields(stored: &HashMap<String, String>) -> SharedResult<Self> {
        Ok(Self {
            factory_code: text_field(stored, fields::FACTORY_CODE)?,
            process_code: text_field(stored, fields::PROCESS_CODE)?,
            product_model: text_field(stored, fields::PRODUCT_MODEL)?,
            defect_item: text_field(stored, fields::DEFECT_ITEM)?,
            reproducibility_rate: parsed_field(stored, fields::REPRODUCIBILITY_RATE)?,
            total_inspections: parsed_field(stored, fields::TOTAL_INSPECTIONS)?,
            reproduced_count: parsed_field(stored, fields::REPRODUCED_COUNT)?,
        })
    }
}

fn text_field(stored: &HashMap<String, String>, name: &str) -> SharedResult<String> {
    stored
        .get(name)
        .cloned()
        .ok_or_else(|| SharedError::MissingField { field: name.to_string() })
}

fn parsed_field<T: std::str::FromStr>(
    stored: &HashMap<String, String>,
    name: &str,
) -> SharedResult<T> {
    let raw = stored
        .get(name)
        .ok_or_else(|| SharedError::MissingField { field: name.to_string() })?;
    raw.trim().parse().map_err(|_| SharedError::MalformedField {
        field: name.to_string(),
        value: raw.clone(),
    })
}

/// Caller-supplied thresholds for one lookup
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EvaluationCriteria {
    pub min_inspection_count: u64,
    pub min_reproducibility_rate: f64,
}

/// Outcome of one retest evaluation
///
/// `retest_needed` keeps the historical polarity consumers rely on: `true`
/// means both thresholds are already met and no further retest is required.
#[derive(Clone, Debug, PartialEq)]
pub struct Verdict {
    pub retest_needed: bool,
    pub reproducibility_rate: f64,
    pub alarm_history: String,
}

impl Verdict {
    /// Evidence marker for a lookup whose store access failed
    pub const ERROR_MARKER: &'static str = "error";

    /// Verdict for a key with no stored history
    pub fn no_history() -> Self {
        Self {
            retest_needed: true,
            reproducibility_rate: 0.0,
            alarm_history: "0/0".to_string(),
        }
    }

    /// Default verdict carrying the error marker, used for failed batch items
    pub fn store_error() -> Self {
        Self {
            alarm_history: Self::ERROR_MARKER.to_string(),
            ..Self::no_history()
        }
    }
}
