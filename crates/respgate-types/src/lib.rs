pub mod caller;
pub mod owner;
pub mod prelude;
pub mod response_id;
pub mod settings;
