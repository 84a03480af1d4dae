use respgate_crypto::prelude::*;
use respgate_types::prelude::*;

fn codec_with_key(key: &str) -> ResponseIdCodec {
    ResponseIdCodec::new(SettingsHandle::new(SecuritySettings::with_signing_key(key)))
}

#[test]
fn tag_then_detag_round_trips_owner() {
    let codec = codec_with_key("sk-prod");
    let owner = OwnerTag::new(Some("u1".into()), Some("t1".into()));

    let TagOutcome::Tagged(token) = codec.tag("resp_abc123", &owner) else {
        panic!("expected tagged outcome");
    };
    assert!(token.starts_with(RESPONSE_ID_MARKER));
    assert_ne!(token, "resp_abc123");

    match codec.detag(&token) {
        DetagOutcome::Token { id, owner: decoded } => {
            assert_eq!(id, "resp_abc123");
            assert_eq!(decoded, owner);
        }
        DetagOutcome::Opaque => panic!("token should decode"),
    }
}

#[test]
fn tag_is_deterministic() {
    let codec = codec_with_key("sk-prod");
    let owner = OwnerTag::new(Some("u1".into()), None);
    assert_eq!(codec.tag("resp_x", &owner), codec.tag("resp_x", &owner));
}

#[test]
fn empty_owner_fields_decode_to_unconstrained() {
    let codec = codec_with_key("sk-prod");
    let TagOutcome::Tagged(token) = codec.tag("resp_x", &OwnerTag::default()) else {
        panic!("expected tagged outcome");
    };
    match codec.detag(&token) {
        DetagOutcome::Token { id, owner } => {
            assert_eq!(id, "resp_x");
            assert!(owner.is_empty());
        }
        DetagOutcome::Opaque => panic!("token should decode"),
    }
}

#[test]
fn missing_signing_key_skips_tagging() {
    let codec = ResponseIdCodec::new(SettingsHandle::default());
    let owner = OwnerTag::new(Some("u1".into()), None);
    assert_eq!(codec.tag("resp_abc", &owner), TagOutcome::Skipped);
    assert_eq!(codec.metrics().snapshot().tag_skipped, 1);
}

#[test]
fn detag_is_total_over_garbage() {
    let codec = codec_with_key("sk-prod");
    for input in ["", "resp_", "resp_%%%not-base64%%%", "resp_abc123", "chatcmpl_9", "resp_aGVsbG8"] {
        assert_eq!(codec.detag(input), DetagOutcome::Opaque, "input: {input:?}");
    }
}

#[test]
fn wrong_key_reads_as_opaque() {
    let codec = codec_with_key("sk-prod");
    let TagOutcome::Tagged(token) =
        codec.tag("resp_abc", &OwnerTag::new(Some("u1".into()), None))
    else {
        panic!("expected tagged outcome");
    };

    let other = codec_with_key("sk-staging");
    assert_eq!(other.detag(&token), DetagOutcome::Opaque);
}

#[test]
fn missing_key_reads_as_opaque() {
    let codec = codec_with_key("sk-prod");
    let TagOutcome::Tagged(token) =
        codec.tag("resp_abc", &OwnerTag::new(Some("u1".into()), None))
    else {
        panic!("expected tagged outcome");
    };

    let keyless = ResponseIdCodec::new(SettingsHandle::default());
    assert_eq!(keyless.detag(&token), DetagOutcome::Opaque);
}

#[test]
fn foreign_scheme_reads_as_opaque() {
    // Another managed-id scheme sharing the same sealer and marker.
    let sealer = DeterministicSealer::from_secret("sk-prod");
    let sealed = sealer
        .seal("respgate:files_api:file_id:file_123")
        .expect("seal");
    let alien = format!("{RESPONSE_ID_MARKER}{sealed}");

    let codec = codec_with_key("sk-prod");
    assert_eq!(codec.detag(&alien), DetagOutcome::Opaque);
}

#[test]
fn two_field_payload_leaves_team_unconstrained() {
    let sealer = DeterministicSealer::from_secret("sk-prod");
    let sealed = sealer
        .seal("respgate:responses_api:response_id:resp_abc;user_id:u1")
        .expect("seal");
    let token = format!("{RESPONSE_ID_MARKER}{sealed}");

    let codec = codec_with_key("sk-prod");
    match codec.detag(&token) {
        DetagOutcome::Token { id, owner } => {
            assert_eq!(id, "resp_abc");
            assert_eq!(owner.user_id.as_deref(), Some("u1"));
            assert_eq!(owner.team_id, None);
        }
        DetagOutcome::Opaque => panic!("token should decode"),
    }
}

#[test]
fn namespaced_but_underdelimited_payload_falls_back_to_original_token() {
    let sealer = DeterministicSealer::from_secret("sk-prod");
    let sealed = sealer
        .seal("respgate:responses_api:response_id:resp_abc")
        .expect("seal");
    let token = format!("{RESPONSE_ID_MARKER}{sealed}");

    let codec = codec_with_key("sk-prod");
    match codec.detag(&token) {
        DetagOutcome::Token { id, owner } => {
            assert_eq!(id, token);
            assert!(owner.is_empty());
        }
        DetagOutcome::Opaque => panic!("fallback should still count as a token"),
    }
    assert_eq!(codec.metrics().snapshot().detag_fallback, 1);
}
