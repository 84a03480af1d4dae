use respgate_errors::prelude::*;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("{0:?}")]
pub struct CryptoError(pub ErrorObj);

impl CryptoError {
    pub fn into_inner(self) -> ErrorObj {
        self.0
    }

    pub fn seal(detail: &str) -> Self {
        CryptoError(
            ErrorBuilder::new(codes::CRYPTO_SEAL_FAILED)
                .user_msg("Identifier could not be protected.")
                .dev_msg(detail)
                .build(),
        )
    }
}

impl From<CryptoError> for ErrorObj {
    fn from(value: CryptoError) -> Self {
        value.0
    }
}
