//! The Core module serves as the central integration point for viewcall's functionality.
//!
//! It re-exports the signature parser and calldata framer together with the public interfaces
//! of the command crates, making it easier to use viewcall's capabilities in other projects.

// Re-export the shared building blocks
pub use viewcall_abi;
pub use viewcall_common;
pub use viewcall_config;

// Re-export all command modules
pub use viewcall_caller;
pub use viewcall_decoder;
pub use viewcall_encoder;
