use respgate_types::prelude::*;

#[test]
fn owner_of_caller_snapshots_both_axes() {
    let caller = CallerIdentity::user("u1", Some("t1".into()));
    let owner = OwnerTag::of_caller(&caller);
    assert_eq!(owner.user_id.as_deref(), Some("u1"));
    assert_eq!(owner.team_id.as_deref(), Some("t1"));
    assert!(!owner.is_empty());
    assert!(OwnerTag::default().is_empty());
}

#[test]
fn settings_handle_reflects_replacement() {
    let handle = SettingsHandle::new(SecuritySettings::with_signing_key("k1"));
    assert_eq!(handle.snapshot().signing_key.as_deref(), Some("k1"));

    handle.replace(SecuritySettings {
        signing_key: None,
        security_disabled: true,
    });
    let snap = handle.snapshot();
    assert!(snap.signing_key.is_none());
    assert!(snap.security_disabled);
}

#[test]
fn settings_deserialize_with_defaults() {
    let settings: SecuritySettings = serde_json::from_str("{}").expect("empty settings");
    assert!(settings.signing_key.is_none());
    assert!(!settings.security_disabled);
}

#[test]
fn response_marker_helpers() {
    assert!(has_response_marker("resp_abc123"));
    assert!(!has_response_marker("chatcmpl_abc123"));
    assert_eq!(strip_response_marker("resp_abc123"), Some("abc123"));
    assert_eq!(strip_response_marker("abc123"), None);
}

#[test]
fn caller_role_round_trips_snake_case() {
    let role: CallerRole = serde_json::from_str("\"admin\"").expect("role");
    assert!(role.is_admin());
    assert_eq!(serde_json::to_string(&CallerRole::Service).unwrap(), "\"service\"");
}
