use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

#[derive(Clone, Default)]
pub struct CodecMetrics {
    inner: Arc<Inner>,
}

#[derive(Default)]
struct Inner {
    tag_ok: AtomicU64,
    tag_skipped: AtomicU64,
    tag_err: AtomicU64,
    detag_token: AtomicU64,
    detag_fallback: AtomicU64,
    detag_opaque: AtomicU64,
}

impl CodecMetrics {
    pub fn record_tag_ok(&self) {
        self.inner.tag_ok.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_tag_skipped(&self) {
        self.inner.tag_skipped.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_tag_err(&self) {
        self.inner.tag_err.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_detag_token(&self) {
        self.inner.detag_token.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_detag_fallback(&self) {
        self.inner.detag_fallback.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_detag_opaque(&self) {
        self.inner.detag_opaque.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> CodecMetricsSnapshot {
        CodecMetricsSnapshot {
            tag_ok: self.inner.tag_ok.load(Ordering::Relaxed),
            tag_skipped: self.inner.tag_skipped.load(Ordering::Relaxed),
            tag_err: self.inner.tag_err.load(Ordering::Relaxed),
            detag_token: self.inner.detag_token.load(Ordering::Relaxed),
            detag_fallback: self.inner.detag_fallback.load(Ordering::Relaxed),
            detag_opaque: self.inner.detag_opaque.load(Ordering::Relaxed),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CodecMetricsSnapshot {
    pub tag_ok: u64,
    pub tag_skipped: u64,
    pub tag_err: u64,
    pub detag_token: u64,
    pub detag_fallback: u64,
    pub detag_opaque: u64,
}
