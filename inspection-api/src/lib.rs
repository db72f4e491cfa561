//! Retest decision API
//!
//! Looks up defect reproduction statistics by composite key, decides whether
//! a defect needs a retest under caller-supplied thresholds, and writes those
//! statistics back, one item at a time or in bulk.

pub mod config;
pub mod core;
pub mod error;
pub mod server_impl;
pub mod services;
pub mod traits;
pub mod web;

// Re-export main types
pub use config::{ServerConfig, StoreKind};
pub use error::{ApiError, ApiResult};
pub use server_impl::InspectionServer;

// Re-export trait definitions
pub use traits::DefectStore;

// Re-export service implementations
pub use services::{InMemoryDefectStore, InspectionService, RedisDefectStore};
