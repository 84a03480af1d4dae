use respgate_errors::prelude::*;
use thiserror::Error;

use crate::model::DenyReason;

#[derive(Debug, Error)]
#[error("{0:?}")]
pub struct AuthError(pub ErrorObj);

impl AuthError {
    pub fn into_inner(self) -> ErrorObj {
        self.0
    }

    pub fn forbidden(reason: DenyReason) -> Self {
        AuthError(
            ErrorBuilder::new(codes::AUTH_FORBIDDEN)
                .user_msg(reason.user_message())
                .dev_msg(format!("response id ownership: {}", reason.as_str()))
                .build(),
        )
    }
}

impl From<AuthError> for ErrorObj {
    fn from(value: AuthError) -> Self {
        value.0
    }
}
