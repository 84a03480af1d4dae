/// Prefix isolating response-id mappings from unrelated cache usage sharing
/// the same store.
const RESPONSE_ID_MAPPING_PREFIX: &str = "respgate:responses_id_security:response_id:";

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CacheKey(String);

impl CacheKey {
    pub fn for_response_token(token: &str) -> Self {
        Self(format!("{RESPONSE_ID_MAPPING_PREFIX}{token}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
