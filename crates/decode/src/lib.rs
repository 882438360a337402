//! The decode module unpacks calldata, or the return data of a call, into typed values using a
//! human-readable function signature.

/// Error types for the decode module
pub mod error;

mod core;
mod interfaces;

// re-export the public interface
pub use core::decode;
pub use error::Error;
pub use interfaces::{DecodeArgs, DecodeArgsBuilder, DecodeResult};
