pub mod config;
pub mod forwarder;
pub mod handler;
pub mod lambda;

pub use {serde_json as json, tokio};
