use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::Mutex;

use crate::errors::CacheError;
use crate::key::CacheKey;
use crate::model::MappingEntry;

/// Backing store contract. Implementations may fail on transport problems;
/// the accessor above them is what makes the layer best-effort.
#[async_trait]
pub trait MappingStore: Send + Sync {
    async fn get(&self, key: &CacheKey) -> Result<Option<MappingEntry>, CacheError>;
    async fn set(
        &self,
        key: &CacheKey,
        entry: MappingEntry,
        ttl_seconds: i64,
    ) -> Result<(), CacheError>;
}

#[derive(Clone, Debug)]
struct StoredEntry {
    entry: MappingEntry,
    expires_at_ms: i64,
}

impl StoredEntry {
    fn is_fresh(&self, now_ms: i64) -> bool {
        now_ms < self.expires_at_ms
    }
}

/// In-process store. Entries past their deadline read as absent, which keeps
/// an expired mapping indistinguishable from one that was never written.
#[derive(Clone, Default)]
pub struct MemoryMappingStore {
    inner: Arc<Mutex<HashMap<String, StoredEntry>>>,
}

impl MemoryMappingStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MappingStore for MemoryMappingStore {
    async fn get(&self, key: &CacheKey) -> Result<Option<MappingEntry>, CacheError> {
        let now_ms = Utc::now().timestamp_millis();
        let mut guard = self.inner.lock();
        match guard.get(key.as_str()) {
            Some(stored) if stored.is_fresh(now_ms) => Ok(Some(stored.entry.clone())),
            Some(_) => {
                guard.remove(key.as_str());
                Ok(None)
            }
            None => Ok(None),
        }
    }

    async fn set(
        &self,
        key: &CacheKey,
        entry: MappingEntry,
        ttl_seconds: i64,
    ) -> Result<(), CacheError> {
        let expires_at_ms = Utc::now()
            .timestamp_millis()
            .saturating_add(ttl_seconds.saturating_mul(1_000));
        self.inner.lock().insert(
            key.as_str().to_string(),
            StoredEntry {
                entry,
                expires_at_ms,
            },
        );
        Ok(())
    }
}
