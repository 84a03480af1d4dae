use respgate_auth::prelude::AuthError;
use respgate_errors::prelude::*;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("{0:?}")]
pub struct HookError(pub ErrorObj);

impl HookError {
    pub fn into_inner(self) -> ErrorObj {
        self.0
    }

    pub fn from_public(code: ErrorCode, msg: &str) -> Self {
        HookError(ErrorBuilder::new(code).user_msg(msg).build())
    }

    pub fn schema(msg: &str) -> Self {
        HookError(
            ErrorBuilder::new(codes::SCHEMA_VALIDATION)
                .user_msg("Request body failed validation.")
                .dev_msg(msg)
                .build(),
        )
    }
}

impl From<AuthError> for HookError {
    fn from(err: AuthError) -> Self {
        HookError(err.into_inner())
    }
}

impl From<HookError> for ErrorObj {
    fn from(value: HookError) -> Self {
        value.0
    }
}
