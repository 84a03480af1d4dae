use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CallerRole {
    Admin,
    User,
    Service,
}

impl CallerRole {
    pub const fn is_admin(self) -> bool {
        matches!(self, CallerRole::Admin)
    }
}

/// Identity resolved by the authentication layer for a single request.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CallerIdentity {
    pub user_id: String,
    #[serde(default)]
    pub team_id: Option<String>,
    pub role: CallerRole,
}

impl CallerIdentity {
    pub fn user(user_id: impl Into<String>, team_id: Option<String>) -> Self {
        Self {
            user_id: user_id.into(),
            team_id,
            role: CallerRole::User,
        }
    }

    pub fn admin(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            team_id: None,
            role: CallerRole::Admin,
        }
    }
}
