use respgate_errors::prelude::*;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("{0:?}")]
pub struct CacheError(pub ErrorObj);

impl CacheError {
    pub fn into_inner(self) -> ErrorObj {
        self.0
    }

    pub fn unavailable(detail: &str) -> Self {
        CacheError(
            ErrorBuilder::new(codes::CACHE_UNAVAILABLE)
                .user_msg("Mapping cache is unavailable.")
                .dev_msg(detail)
                .build(),
        )
    }
}

impl From<CacheError> for ErrorObj {
    fn from(value: CacheError) -> Self {
        value.0
    }
}
