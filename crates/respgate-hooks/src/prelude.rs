pub use crate::errors::HookError;
pub use crate::gate::{ResponseIdGate, RESPONSES_ROUTE};
pub use crate::payload::{primary_response_id, set_primary_response_id, ResponseCallKind};
