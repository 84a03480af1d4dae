pub use crate::codec::{DetagOutcome, ResponseIdCodec, TagOutcome, MANAGED_ID_NAMESPACE};
pub use crate::errors::CryptoError;
pub use crate::metrics::{CodecMetrics, CodecMetricsSnapshot};
pub use crate::sealer::{DeterministicSealer, TokenSealer};
