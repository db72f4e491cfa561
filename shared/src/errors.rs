//! Shared error types for the retest decision service

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SharedError {
    #[error("Stored record is missing field: {field}")]
    MissingField { field: String },

    #[error("Stored field {field} has malformed value: {value}")]
    MalformedField { field: String, value: String },

    #[error("Invalid defect record: {reason}")]
    InvalidRecord { reason: String },

    #[error("Invalid configuration: {field} = {value}")]
    InvalidConfig { field: String, value: String },
}

pub type SharedResult<T> = Result<T, SharedError>;
