use respgate_types::prelude::*;
use serde::{Deserialize, Serialize};

/// Mapping from an opaque token back to the plaintext identifier and its
/// owner, for tokens that cannot be decoded in-process.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingEntry {
    pub response_id: String,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub team_id: Option<String>,
}

impl MappingEntry {
    pub fn new(response_id: impl Into<String>, owner: &OwnerTag) -> Self {
        Self {
            response_id: response_id.into(),
            user_id: owner.user_id.clone(),
            team_id: owner.team_id.clone(),
        }
    }

    pub fn owner(&self) -> OwnerTag {
        OwnerTag::new(self.user_id.clone(), self.team_id.clone())
    }
}
