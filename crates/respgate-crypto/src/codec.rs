use respgate_types::prelude::*;

use crate::metrics::CodecMetrics;
use crate::sealer::{DeterministicSealer, TokenSealer};

/// Namespace marker identifying payloads produced by this scheme. Other
/// managed-id schemes share the sealer but carry a different marker.
pub const MANAGED_ID_NAMESPACE: &str = "respgate:responses_api:";

const RESPONSE_ID_FIELD: &str = "response_id:";
const USER_ID_FIELD: &str = "user_id:";
const TEAM_ID_FIELD: &str = "team_id:";

/// Result of tagging a plaintext identifier.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TagOutcome {
    Tagged(String),
    /// No signing key configured (or sealing failed); the identifier must
    /// leave the gateway unchanged and no mapping should be recorded.
    Skipped,
}

/// Total decode of a presented identifier: either one of our tokens, or an
/// opaque value to be resolved some other way. Never an error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DetagOutcome {
    Token { id: String, owner: OwnerTag },
    Opaque,
}

#[derive(Clone)]
pub struct ResponseIdCodec {
    settings: SettingsHandle,
    metrics: CodecMetrics,
}

impl ResponseIdCodec {
    pub fn new(settings: SettingsHandle) -> Self {
        Self {
            settings,
            metrics: CodecMetrics::default(),
        }
    }

    pub fn metrics(&self) -> &CodecMetrics {
        &self.metrics
    }

    /// Wrap a plaintext identifier in an owner-tagged opaque token.
    ///
    /// The internal payload is
    /// `respgate:responses_api:response_id:{id};user_id:{uid};team_id:{tid}`
    /// with absent owner fields encoded as empty strings. The field order is
    /// a wire invariant; decode depends on it.
    pub fn tag(&self, plaintext_id: &str, owner: &OwnerTag) -> TagOutcome {
        let Some(signing_key) = self.settings.snapshot().signing_key else {
            tracing::debug!(
                target = "respgate::crypto",
                "no signing key configured, response id left untagged"
            );
            self.metrics.record_tag_skipped();
            return TagOutcome::Skipped;
        };

        let payload = format!(
            "{MANAGED_ID_NAMESPACE}{RESPONSE_ID_FIELD}{plaintext_id};\
             {USER_ID_FIELD}{};{TEAM_ID_FIELD}{}",
            owner.user_id.as_deref().unwrap_or(""),
            owner.team_id.as_deref().unwrap_or(""),
        );

        let sealer = DeterministicSealer::from_secret(&signing_key);
        match sealer.seal(&payload) {
            Ok(sealed) => {
                self.metrics.record_tag_ok();
                TagOutcome::Tagged(format!("{RESPONSE_ID_MARKER}{sealed}"))
            }
            Err(err) => {
                tracing::warn!(
                    target = "respgate::crypto",
                    "sealing response id failed, leaving it untagged: {err:?}"
                );
                self.metrics.record_tag_err();
                TagOutcome::Skipped
            }
        }
    }

    /// Decode a presented identifier.
    ///
    /// Anything that is not provably one of our tokens (missing marker,
    /// unopenable body from a wrong or missing key, corruption, a foreign
    /// producer, or a different managed-id scheme) comes back as
    /// `Opaque`. A payload that carries our namespace but fewer delimited
    /// fields than expected yields the original token with an empty owner
    /// rather than an error.
    pub fn detag(&self, token: &str) -> DetagOutcome {
        let Some(body) = strip_response_marker(token) else {
            self.metrics.record_detag_opaque();
            return DetagOutcome::Opaque;
        };

        let Some(signing_key) = self.settings.snapshot().signing_key else {
            self.metrics.record_detag_opaque();
            return DetagOutcome::Opaque;
        };

        let sealer = DeterministicSealer::from_secret(&signing_key);
        let Some(payload) = sealer.open(body) else {
            self.metrics.record_detag_opaque();
            return DetagOutcome::Opaque;
        };

        if !payload.starts_with(MANAGED_ID_NAMESPACE) {
            self.metrics.record_detag_opaque();
            return DetagOutcome::Opaque;
        }

        let parts: Vec<&str> = payload.split(';').collect();
        if parts.len() < 2 {
            self.metrics.record_detag_fallback();
            return DetagOutcome::Token {
                id: token.to_string(),
                owner: OwnerTag::default(),
            };
        }

        let id = field_value(parts[0], RESPONSE_ID_FIELD);
        let user_id = non_empty(field_value(parts[1], USER_ID_FIELD));
        // A two-field payload simply has no team constraint.
        let team_id = parts
            .get(2)
            .and_then(|part| non_empty(field_value(part, TEAM_ID_FIELD)));

        self.metrics.record_detag_token();
        DetagOutcome::Token {
            id: id.to_string(),
            owner: OwnerTag::new(user_id, team_id),
        }
    }
}

fn field_value<'a>(part: &'a str, field: &str) -> &'a str {
    match part.rsplit_once(field) {
        Some((_, value)) => value,
        None => part,
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
