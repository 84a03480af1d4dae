use std::sync::Arc;

use respgate_types::prelude::*;

use crate::key::CacheKey;
use crate::metrics::CacheStats;
use crate::model::MappingEntry;
use crate::store::MappingStore;

/// Mappings outlive any realistic continue/fetch/cancel window and then
/// expire passively; there is no explicit deletion path.
pub const RESPONSE_ID_MAPPING_TTL_SECONDS: i64 = 60 * 60 * 24;

/// Best-effort facade over a [`MappingStore`]. Store failures are counted,
/// logged at debug, and swallowed: a failed write loses nothing but the
/// fallback mapping, and a failed read is identical to a miss. Nothing here
/// may fail the request being served.
#[derive(Clone)]
pub struct MappingCacheAccessor {
    store: Arc<dyn MappingStore>,
    stats: CacheStats,
}

impl MappingCacheAccessor {
    pub fn new(store: Arc<dyn MappingStore>) -> Self {
        Self {
            store,
            stats: CacheStats::default(),
        }
    }

    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }

    pub async fn record(&self, token: &str, plaintext_id: &str, owner: &OwnerTag) {
        let key = CacheKey::for_response_token(token);
        let entry = MappingEntry::new(plaintext_id, owner);
        match self
            .store
            .set(&key, entry, RESPONSE_ID_MAPPING_TTL_SECONDS)
            .await
        {
            Ok(()) => self.stats.record_write(),
            Err(err) => {
                self.stats.record_error();
                tracing::debug!(
                    target = "respgate::cache",
                    "unable to record response id mapping: {err:?}"
                );
            }
        }
    }

    pub async fn lookup(&self, token: &str) -> Option<MappingEntry> {
        let key = CacheKey::for_response_token(token);
        match self.store.get(&key).await {
            Ok(Some(entry)) => {
                self.stats.record_hit();
                Some(entry)
            }
            Ok(None) => {
                self.stats.record_miss();
                None
            }
            Err(err) => {
                self.stats.record_error();
                tracing::debug!(
                    target = "respgate::cache",
                    "unable to fetch response id mapping, treating as absent: {err:?}"
                );
                None
            }
        }
    }
}
