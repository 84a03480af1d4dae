use respgate_types::prelude::*;

use crate::model::{AccessDecision, DenyReason};

/// Decides whether a caller may use a response id recovered as belonging to
/// `owner`. Pure policy: no I/O, no transport types.
pub trait ResponseAccessPolicy: Send + Sync {
    fn authorize(
        &self,
        owner: &OwnerTag,
        caller: &CallerIdentity,
        settings: &SecuritySettings,
    ) -> AccessDecision;
}

/// Ownership policy for response identifiers.
///
/// Admins bypass ownership entirely. For everyone else the user axis is
/// checked strictly before the team axis and the first mismatch decides the
/// deny reason. An owner with no constraints allows anyone: ownership was
/// never established for that id.
#[derive(Clone, Copy, Debug, Default)]
pub struct OwnerAccessPolicy;

impl OwnerAccessPolicy {
    fn deny_or_bypass(
        reason: DenyReason,
        caller: &CallerIdentity,
        settings: &SecuritySettings,
    ) -> AccessDecision {
        if settings.security_disabled {
            tracing::debug!(
                target = "respgate::auth",
                caller_user = %caller.user_id,
                reason = reason.as_str(),
                "response id security disabled, allowing mismatched access"
            );
            return AccessDecision::Allow;
        }
        AccessDecision::Deny(reason)
    }
}

impl ResponseAccessPolicy for OwnerAccessPolicy {
    fn authorize(
        &self,
        owner: &OwnerTag,
        caller: &CallerIdentity,
        settings: &SecuritySettings,
    ) -> AccessDecision {
        if caller.role.is_admin() {
            return AccessDecision::Allow;
        }

        let user_mismatch = owner
            .user_id
            .as_deref()
            .is_some_and(|owner_user| owner_user != caller.user_id);
        if user_mismatch {
            return Self::deny_or_bypass(DenyReason::UserMismatch, caller, settings);
        }

        let team_mismatch = owner
            .team_id
            .as_deref()
            .is_some_and(|owner_team| caller.team_id.as_deref() != Some(owner_team));
        if team_mismatch {
            return Self::deny_or_bypass(DenyReason::TeamMismatch, caller, settings);
        }

        AccessDecision::Allow
    }
}
