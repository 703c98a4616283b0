pub mod config;
pub mod downstream;
pub(crate) mod error;
pub mod mcp;
pub mod tools;

pub use error::{BridgeError, Result};
