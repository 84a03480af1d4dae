use crate::retry::RetryClass;

/// Stable error code. The `code` string is part of the wire contract and
/// must never be reused for a different meaning.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ErrorCode {
    pub code: &'static str,
    pub http_status: u16,
    pub retry: RetryClass,
}

pub const AUTH_UNAUTHENTICATED: ErrorCode = ErrorCode {
    code: "auth.unauthenticated",
    http_status: 401,
    retry: RetryClass::None,
};

pub const AUTH_FORBIDDEN: ErrorCode = ErrorCode {
    code: "auth.forbidden",
    http_status: 403,
    retry: RetryClass::None,
};

pub const SCHEMA_VALIDATION: ErrorCode = ErrorCode {
    code: "schema.validation",
    http_status: 400,
    retry: RetryClass::Permanent,
};

pub const CACHE_UNAVAILABLE: ErrorCode = ErrorCode {
    code: "cache.unavailable",
    http_status: 503,
    retry: RetryClass::Transient,
};

pub const CRYPTO_SEAL_FAILED: ErrorCode = ErrorCode {
    code: "crypto.seal_failed",
    http_status: 500,
    retry: RetryClass::None,
};

pub const UNKNOWN_INTERNAL: ErrorCode = ErrorCode {
    code: "unknown.internal",
    http_status: 500,
    retry: RetryClass::Transient,
};
