//! Redis-backed defect store
//!
//! Each record is a Redis hash of its seven fields, stored as strings under
//! `{namespace}:{composite key}`. The namespace matches the key prefix already
//! used by deployed data. Writes drop the old hash and set the new fields in
//! one MULTI/EXEC transaction, so no stale field survives an overwrite.

use std::collections::HashMap;

use async_trait::async_trait;
use redis::{AsyncCommands, Client, Pipeline, aio::ConnectionManager};
use shared::{DefectKey, DefectRecord};

use crate::error::{ApiError, ApiResult};
use crate::traits::DefectStore;

/// Key prefix of records written by earlier deployments
pub const DEFAULT_KEY_NAMESPACE: &str = "models.defect_model.Defect";

// Store errors surface to callers immediately; connection attempts are not retried.
const CONNECT_RETRIES: usize = 0;
const BACKOFF_BASE: u64 = 2;
const BACKOFF_FACTOR_MS: u64 = 100;

/// Redis store sharing one multiplexed connection across all requests
#[derive(Clone)]
pub struct RedisDefectStore {
    connection: ConnectionManager,
    namespace: String,
}

impl RedisDefectStore {
    /// Open a managed connection and verify the backend answers
    pub async fn connect(url: &str, namespace: impl Into<String>) -> ApiResult<Self> {
        let client = Client::open(url)?;
        let connection =
            ConnectionManager::new_with_backoff(client, BACKOFF_BASE, BACKOFF_FACTOR_MS, CONNECT_RETRIES)
                .await?;
        let store = Self {
            connection,
            namespace: namespace.into(),
        };
        store.ping().await?;
        Ok(store)
    }

    fn storage_key(&self, key: &DefectKey) -> String {
        namespaced_key(&self.namespace, key)
    }
}

/// Full Redis key for a composite key
pub fn namespaced_key(namespace: &str, key: &DefectKey) -> String {
    format!("{namespace}:{key}")
}

/// Atomic `DEL` + `HSET` replacing whatever hash lives at `storage_key`
fn replace_pipeline(storage_key: &str, record: &DefectRecord) -> Pipeline {
    let fields = record.to_fields();
    let mut pipe = redis::pipe();
    pipe.atomic()
        .del(storage_key)
        .ignore()
        .hset_multiple(storage_key, &fields)
        .ignore();
    pipe
}

#[async_trait]
impl DefectStore for RedisDefectStore {
    async fn get(&self, key: &DefectKey) -> ApiResult<Option<DefectRecord>> {
        let mut connection = self.connection.clone();
        let stored: HashMap<String, String> = connection.hgetall(self.storage_key(key)).await?;

        if stored.is_empty() {
            return Ok(None);
        }

        DefectRecord::from_fields(&stored)
            .map(Some)
            .map_err(|source| ApiError::MalformedStoredRecord {
                key: key.to_string(),
                source,
            })
    }

    async fn set(&self, key: &DefectKey, record: &DefectRecord) -> ApiResult<()> {
        let mut connection = self.connection.clone();
        let pipe = replace_pipeline(&self.storage_key(key), record);
        let _: () = pipe.query_async(&mut connection).await?;
        Ok(())
    }

    async fn ping(&self) -> ApiResult<()> {
        let mut connection = self.connection.clone();
        let _: String = redis::cmd("PING").query_async(&mut connection).await?;
        Ok(())
    }
}
