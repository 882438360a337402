//! The encode module turns a function signature and its arguments into ABI calldata.

/// Error types for the encode module
pub mod error;

mod core;
mod interfaces;

// re-export the public interface
pub use core::encode;
pub use error::Error;
pub use interfaces::{EncodeArgs, EncodeArgsBuilder, EncodeResult};
