//! The call module performs a single read-only `eth_call` against a contract, encoding the
//! arguments and decoding the return data with a human-readable function signature.

/// Error types for the call module
pub mod error;

mod core;
mod interfaces;

// re-export the public interface
pub use core::call;
pub use error::Error;
pub use interfaces::{CallArgs, CallArgsBuilder, CallResult};
