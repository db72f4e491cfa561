//! Service tests for the inspection API
//!
//! Store behavior runs against the in-memory store; failure injection uses
//! the mockall-generated `MockDefectStore`.
