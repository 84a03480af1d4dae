use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DenyReason {
    UserMismatch,
    TeamMismatch,
}

impl DenyReason {
    pub const fn as_str(self) -> &'static str {
        match self {
            DenyReason::UserMismatch => "user mismatch",
            DenyReason::TeamMismatch => "team mismatch",
        }
    }

    /// Caller-facing rejection text naming the scope of the mismatch and
    /// the configuration escape hatch.
    pub fn user_message(self) -> String {
        let scope = match self {
            DenyReason::UserMismatch => "user",
            DenyReason::TeamMismatch => "team",
        };
        format!(
            "Forbidden. The response id is not associated with the {scope} this key belongs to. \
             To disable this security feature, set security.security_disabled to true in the \
             gateway configuration."
        )
    }
}

/// Policy verdict. Transport translation (status code, body) happens in the
/// hooks layer; policy code never touches a protocol type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AccessDecision {
    Allow,
    Deny(DenyReason),
}

impl AccessDecision {
    pub fn is_allow(&self) -> bool {
        matches!(self, AccessDecision::Allow)
    }
}
