use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

/// Security settings for the response-identifier layer.
///
/// `signing_key` absent disables tagging (identifiers pass through
/// unmodified). `security_disabled` turns ownership mismatches into allowed,
/// traced bypasses without disabling ownership recovery itself.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SecuritySettings {
    #[serde(default)]
    pub signing_key: Option<String>,
    #[serde(default)]
    pub security_disabled: bool,
}

impl SecuritySettings {
    pub fn with_signing_key(key: impl Into<String>) -> Self {
        Self {
            signing_key: Some(key.into()),
            security_disabled: false,
        }
    }
}

/// Shared handle over the settings. Reads take a snapshot at call time so a
/// configuration reload (key rotation, disable toggle) is picked up by the
/// next request without restarting the process.
#[derive(Clone, Debug, Default)]
pub struct SettingsHandle {
    inner: Arc<RwLock<SecuritySettings>>,
}

impl SettingsHandle {
    pub fn new(settings: SecuritySettings) -> Self {
        Self {
            inner: Arc::new(RwLock::new(settings)),
        }
    }

    pub fn snapshot(&self) -> SecuritySettings {
        self.inner.read().clone()
    }

    pub fn replace(&self, settings: SecuritySettings) {
        *self.inner.write() = settings;
    }
}
