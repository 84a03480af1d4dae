use respgate_types::prelude::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Responses-API call shapes that carry a previously issued identifier.
/// Calls outside the responses API never reach the pre-dispatch hook.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseCallKind {
    Create,
    Fetch,
    Cancel,
    Delete,
}

impl ResponseCallKind {
    /// Request field that may carry a previously issued identifier for this
    /// call shape.
    pub const fn inbound_id_field(self) -> &'static str {
        match self {
            ResponseCallKind::Create => "previous_response_id",
            ResponseCallKind::Fetch | ResponseCallKind::Cancel | ResponseCallKind::Delete => {
                "response_id"
            }
        }
    }
}

/// Locate the identifier a response payload carries: the top-level `id`
/// first, else `response.id` one level down. Only values shaped like a
/// response id count.
pub fn primary_response_id(payload: &Value) -> Option<&str> {
    if let Some(id) = payload.get("id").and_then(Value::as_str) {
        if has_response_marker(id) {
            return Some(id);
        }
    }
    if let Some(id) = payload
        .get("response")
        .and_then(|wrapped| wrapped.get("id"))
        .and_then(Value::as_str)
    {
        if has_response_marker(id) {
            return Some(id);
        }
    }
    None
}

/// Rewrite the slot [`primary_response_id`] matched. The top-level field
/// wins; the nested field is only touched when the top-level one did not
/// match — never both.
pub fn set_primary_response_id(payload: &mut Value, new_id: &str) {
    let top_matches = payload
        .get("id")
        .and_then(Value::as_str)
        .is_some_and(has_response_marker);
    if top_matches {
        payload["id"] = Value::String(new_id.to_string());
        return;
    }

    let nested_matches = payload
        .get("response")
        .and_then(|wrapped| wrapped.get("id"))
        .and_then(Value::as_str)
        .is_some_and(has_response_marker);
    if nested_matches {
        payload["response"]["id"] = Value::String(new_id.to_string());
    }
}
