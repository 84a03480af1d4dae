pub mod errors;
pub mod gate;
pub mod payload;
pub mod prelude;

pub use gate::{ResponseIdGate, RESPONSES_ROUTE};
pub use payload::ResponseCallKind;
