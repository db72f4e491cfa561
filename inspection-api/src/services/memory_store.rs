//! In-memory defect store for tests and local runs
//!
//! Keeps records in the same string-hash layout as the Redis store so the
//! decoding path is shared.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use shared::{DefectKey, DefectRecord};
use tokio::sync::RwLock;

use crate::error::{ApiError, ApiResult};
use crate::traits::DefectStore;

type StoredHash = HashMap<String, String>;

#[derive(Clone, Default)]
pub struct InMemoryDefectStore {
    entries: Arc<RwLock<HashMap<DefectKey, StoredHash>>>,
}

impl InMemoryDefectStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store raw hash fields as-is, bypassing record encoding
    pub async fn insert_raw(&self, key: DefectKey, fields: StoredHash) {
        self.entries.write().await.insert(key, fields);
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl DefectStore for InMemoryDefectStore {
    async fn get(&self, key: &DefectKey) -> ApiResult<Option<DefectRecord>> {
        let entries = self.entries.read().await;
        match entries.get(key) {
            None => Ok(None),
            Some(stored) => DefectRecord::from_fields(stored)
                .map(Some)
                .map_err(|source| ApiError::MalformedStoredRecord {
                    key: key.to_string(),
                    source,
                }),
        }
    }

    async fn set(&self, key: &DefectKey, record: &DefectRecord) -> ApiResult<()> {
        let stored = record
            .to_fields()
            .into_iter()
            .map(|(field, value)| (field.to_string(), value))
            .collect();
        self.entries.write().await.insert(key.clone(), stored);
        Ok(())
    }

    async fn ping(&self) -> ApiResult<()> {
        Ok(())
    }
}
