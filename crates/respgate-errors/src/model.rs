use serde::Serialize;

use crate::codes::ErrorCode;
use crate::retry::RetryClass;

/// Transport-agnostic error envelope. `user_msg` is safe to show to the
/// caller; `dev_msg` is for logs only and must never leave the process
/// boundary in a response body.
#[derive(Clone, Debug, Serialize)]
pub struct ErrorObj {
    pub code: &'static str,
    pub http_status: u16,
    pub retry: RetryClass,
    pub user_msg: String,
    #[serde(skip_serializing)]
    pub dev_msg: Option<String>,
}

impl ErrorObj {
    pub fn code_is(&self, code: ErrorCode) -> bool {
        self.code == code.code
    }
}

pub struct ErrorBuilder {
    code: ErrorCode,
    user_msg: Option<String>,
    dev_msg: Option<String>,
}

impl ErrorBuilder {
    pub fn new(code: ErrorCode) -> Self {
        Self {
            code,
            user_msg: None,
            dev_msg: None,
        }
    }

    pub fn user_msg(mut self, msg: impl Into<String>) -> Self {
        self.user_msg = Some(msg.into());
        self
    }

    pub fn dev_msg(mut self, msg: impl Into<String>) -> Self {
        self.dev_msg = Some(msg.into());
        self
    }

    pub fn build(self) -> ErrorObj {
        ErrorObj {
            code: self.code.code,
            http_status: self.code.http_status,
            retry: self.code.retry,
            user_msg: self
                .user_msg
                .unwrap_or_else(|| "Internal error.".to_string()),
            dev_msg: self.dev_msg,
        }
    }
}
