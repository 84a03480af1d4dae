use std::sync::Arc;

use futures_core::Stream;
use futures_util::stream::BoxStream;
use futures_util::StreamExt;
use respgate_auth::prelude::*;
use respgate_cache::prelude::*;
use respgate_crypto::prelude::*;
use respgate_types::prelude::*;
use serde_json::Value;

use crate::errors::HookError;
use crate::payload::{self, ResponseCallKind};

/// Route served by the identifier-bearing API. Streamed chunks are only
/// rewritten when they belong to this route.
pub const RESPONSES_ROUTE: &str = "/v1/responses";

/// Orchestrates the token codec, mapping cache and ownership policy across
/// the three call shapes: inbound resolution, outbound tagging, and
/// streaming tagging.
///
/// Authorization denial is the only outcome that fails a request. Every
/// other anomaly (undecodable token, unavailable cache, missing signing
/// key) degrades to passing identifiers through untouched.
#[derive(Clone)]
pub struct ResponseIdGate {
    codec: ResponseIdCodec,
    cache: MappingCacheAccessor,
    policy: Arc<dyn ResponseAccessPolicy>,
    settings: SettingsHandle,
}

impl ResponseIdGate {
    pub fn new(settings: SettingsHandle, cache: MappingCacheAccessor) -> Self {
        Self {
            codec: ResponseIdCodec::new(settings.clone()),
            cache,
            policy: Arc::new(OwnerAccessPolicy),
            settings,
        }
    }

    pub fn with_policy(mut self, policy: Arc<dyn ResponseAccessPolicy>) -> Self {
        self.policy = policy;
        self
    }

    pub fn codec(&self) -> &ResponseIdCodec {
        &self.codec
    }

    fn enforce(&self, owner: &OwnerTag, caller: &CallerIdentity) -> Result<(), HookError> {
        let settings = self.settings.snapshot();
        match self.policy.authorize(owner, caller, &settings) {
            AccessDecision::Allow => Ok(()),
            AccessDecision::Deny(reason) => Err(AuthError::forbidden(reason).into()),
        }
    }

    /// Resolve a caller-supplied identifier to the plaintext one before the
    /// request is dispatched downstream.
    pub async fn resolve_inbound(
        &self,
        id: &str,
        caller: &CallerIdentity,
    ) -> Result<String, HookError> {
        match self.codec.detag(id) {
            DetagOutcome::Token { id: plaintext, owner } => {
                if owner.is_empty() {
                    return Ok(plaintext);
                }
                self.enforce(&owner, caller)?;
                Ok(plaintext)
            }
            DetagOutcome::Opaque => {
                let Some(entry) = self.cache.lookup(id).await else {
                    // Never tagged by this layer and no recorded mapping:
                    // pass through untouched.
                    return Ok(id.to_string());
                };
                self.enforce(&entry.owner(), caller)?;
                Ok(entry.response_id)
            }
        }
    }

    /// Rewrite the fields of a request body that may carry a previously
    /// issued identifier, per call shape. Absent fields are left untouched.
    pub async fn resolve_request(
        &self,
        data: &mut Value,
        kind: ResponseCallKind,
        caller: &CallerIdentity,
    ) -> Result<(), HookError> {
        let field = kind.inbound_id_field();
        let Some(current) = data.get(field).and_then(Value::as_str) else {
            return Ok(());
        };
        let current = current.to_string();
        let resolved = self.resolve_inbound(&current, caller).await?;
        if resolved != current {
            data[field] = Value::String(resolved);
        }
        Ok(())
    }

    /// Tag the identifier of a freshly produced response with the caller's
    /// owner info and record the fallback mapping. Payloads without a
    /// response-shaped identifier, and tag operations skipped for lack of a
    /// signing key, leave the payload unchanged and write nothing.
    pub async fn tag_response(&self, response: &mut Value, caller: &CallerIdentity) {
        let Some(original) = payload::primary_response_id(response) else {
            return;
        };
        let original = original.to_string();
        let owner = OwnerTag::of_caller(caller);
        match self.codec.tag(&original, &owner) {
            TagOutcome::Tagged(token) if token != original => {
                payload::set_primary_response_id(response, &token);
                self.cache.record(&token, &original, &owner).await;
            }
            _ => {}
        }
    }

    /// Post-dispatch hook: with the security feature disabled the response
    /// leaves the gateway exactly as the provider produced it.
    pub async fn tag_success(&self, response: &mut Value, caller: &CallerIdentity) {
        if self.settings.snapshot().security_disabled {
            return;
        }
        self.tag_response(response, caller).await;
    }

    /// Stream-relay hook: a transparent per-chunk rewrite preserving order
    /// and chunk boundaries. Pull-driven, so dropping the returned stream
    /// stops pulling from upstream. Settings are re-read per chunk so a
    /// reload takes effect mid-stream.
    pub fn tag_stream<S>(
        &self,
        upstream: S,
        caller: CallerIdentity,
        route: &str,
    ) -> BoxStream<'static, Value>
    where
        S: Stream<Item = Value> + Send + 'static,
    {
        let gate = self.clone();
        let on_responses_route = route == RESPONSES_ROUTE;
        Box::pin(async_stream::stream! {
            let mut upstream = Box::pin(upstream);
            while let Some(mut chunk) = upstream.next().await {
                if on_responses_route && !gate.settings.snapshot().security_disabled {
                    gate.tag_response(&mut chunk, &caller).await;
                }
                yield chunk;
            }
        })
    }
}
