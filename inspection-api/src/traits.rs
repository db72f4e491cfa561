//! Service trait definitions for dependency injection
//!
//! Store access is abstracted behind this trait so handlers and batch logic
//! can run against Redis in production and in-memory or mocked stores in tests.

use async_trait::async_trait;
use shared::{DefectKey, DefectRecord};

use crate::error::ApiResult;

/// Key-value store holding one defect record per composite key
#[mockall::automock]
#[async_trait]
pub trait DefectStore: Send + Sync {
    /// Fetch the record stored at `key`, `None` when nothing is stored
    async fn get(&self, key: &DefectKey) -> ApiResult<Option<DefectRecord>>;

    /// Replace the record stored at `key` wholesale
    async fn set(&self, key: &DefectKey, record: &DefectRecord) -> ApiResult<()>;

    /// Check that the backend is reachable
    async fn ping(&self) -> ApiResult<()>;
}
