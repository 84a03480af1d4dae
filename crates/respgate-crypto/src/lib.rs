pub mod codec;
pub mod errors;
pub mod metrics;
pub mod prelude;
pub mod sealer;

pub use codec::{DetagOutcome, ResponseIdCodec, TagOutcome};
pub use sealer::{DeterministicSealer, TokenSealer};
