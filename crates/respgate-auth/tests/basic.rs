use respgate_auth::prelude::*;
use respgate_errors::prelude::codes;
use respgate_types::prelude::*;

fn enabled() -> SecuritySettings {
    SecuritySettings::with_signing_key("sk-test")
}

fn disabled() -> SecuritySettings {
    SecuritySettings {
        signing_key: Some("sk-test".into()),
        security_disabled: true,
    }
}

fn owner(user: Option<&str>, team: Option<&str>) -> OwnerTag {
    OwnerTag::new(user.map(Into::into), team.map(Into::into))
}

#[test]
fn matching_user_is_allowed() {
    let policy = OwnerAccessPolicy;
    let caller = CallerIdentity::user("A", None);
    let decision = policy.authorize(&owner(Some("A"), None), &caller, &enabled());
    assert_eq!(decision, AccessDecision::Allow);
}

#[test]
fn mismatched_user_is_denied() {
    let policy = OwnerAccessPolicy;
    let caller = CallerIdentity::user("B", None);
    let decision = policy.authorize(&owner(Some("A"), None), &caller, &enabled());
    assert_eq!(decision, AccessDecision::Deny(DenyReason::UserMismatch));
}

#[test]
fn admin_overrides_any_mismatch() {
    let policy = OwnerAccessPolicy;
    let caller = CallerIdentity::admin("B");
    let decision = policy.authorize(&owner(Some("A"), Some("T")), &caller, &enabled());
    assert_eq!(decision, AccessDecision::Allow);
}

#[test]
fn disabled_security_converts_deny_to_allow() {
    let policy = OwnerAccessPolicy;
    let caller = CallerIdentity::user("B", None);
    let decision = policy.authorize(&owner(Some("A"), None), &caller, &disabled());
    assert_eq!(decision, AccessDecision::Allow);
}

#[test]
fn matching_user_still_checks_team() {
    let policy = OwnerAccessPolicy;
    let caller = CallerIdentity::user("A", Some("t2".into()));
    let decision = policy.authorize(&owner(Some("A"), Some("t1")), &caller, &enabled());
    assert_eq!(decision, AccessDecision::Deny(DenyReason::TeamMismatch));
}

#[test]
fn user_mismatch_wins_over_team_mismatch() {
    let policy = OwnerAccessPolicy;
    let caller = CallerIdentity::user("B", Some("t2".into()));
    let decision = policy.authorize(&owner(Some("A"), Some("t1")), &caller, &enabled());
    assert_eq!(decision, AccessDecision::Deny(DenyReason::UserMismatch));
}

#[test]
fn team_only_owner_requires_matching_team() {
    let policy = OwnerAccessPolicy;

    let member = CallerIdentity::user("B", Some("t1".into()));
    assert_eq!(
        policy.authorize(&owner(None, Some("t1")), &member, &enabled()),
        AccessDecision::Allow
    );

    let outsider = CallerIdentity::user("B", None);
    assert_eq!(
        policy.authorize(&owner(None, Some("t1")), &outsider, &enabled()),
        AccessDecision::Deny(DenyReason::TeamMismatch)
    );
}

#[test]
fn unconstrained_owner_allows_anyone() {
    let policy = OwnerAccessPolicy;
    let caller = CallerIdentity::user("anyone", None);
    let decision = policy.authorize(&OwnerTag::default(), &caller, &enabled());
    assert_eq!(decision, AccessDecision::Allow);
}

#[test]
fn deny_renders_to_scoped_forbidden_error() {
    let err = AuthError::forbidden(DenyReason::UserMismatch).into_inner();
    assert!(err.code_is(codes::AUTH_FORBIDDEN));
    assert_eq!(err.http_status, 403);
    assert!(err.user_msg.contains("user"));
    assert!(err.user_msg.contains("security_disabled"));

    let team = AuthError::forbidden(DenyReason::TeamMismatch).into_inner();
    assert!(team.user_msg.contains("team"));
}
