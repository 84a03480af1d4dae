pub use crate::accessor::{MappingCacheAccessor, RESPONSE_ID_MAPPING_TTL_SECONDS};
pub use crate::errors::CacheError;
pub use crate::key::CacheKey;
pub use crate::metrics::{CacheStats, CacheStatsSnapshot};
pub use crate::model::MappingEntry;
pub use crate::store::{MappingStore, MemoryMappingStore};
