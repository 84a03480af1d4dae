use serde::{Deserialize, Serialize};

use crate::caller::CallerIdentity;

/// Who is entitled to reuse a response identifier. An absent field means the
/// identifier is unconstrained on that axis.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnerTag {
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub team_id: Option<String>,
}

impl OwnerTag {
    pub fn new(user_id: Option<String>, team_id: Option<String>) -> Self {
        Self { user_id, team_id }
    }

    /// Snapshot the calling identity as the owner of a freshly issued id.
    pub fn of_caller(caller: &CallerIdentity) -> Self {
        Self {
            user_id: Some(caller.user_id.clone()),
            team_id: caller.team_id.clone(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.user_id.is_none() && self.team_id.is_none()
    }
}
