pub use crate::caller::{CallerIdentity, CallerRole};
pub use crate::owner::OwnerTag;
pub use crate::response_id::{has_response_marker, strip_response_marker, RESPONSE_ID_MARKER};
pub use crate::settings::{SecuritySettings, SettingsHandle};
