/// Marker prefix carried by every responses-API identifier, tagged or not.
/// Downstream systems treat anything after the marker as opaque.
pub const RESPONSE_ID_MARKER: &str = "resp_";

pub fn has_response_marker(id: &str) -> bool {
    id.starts_with(RESPONSE_ID_MARKER)
}

pub fn strip_response_marker(id: &str) -> Option<&str> {
    id.strip_prefix(RESPONSE_ID_MARKER)
}
