//! Common utilities, constants, and resources used across the viewcall codebase.
//!
//! This crate provides shared functionality for the viewcall toolkit, including
//! RPC glue around `alloy`, value formatting, and general utility functions.

/// Error types for the common crate.
pub mod error;

/// Constants used throughout the viewcall codebase.
pub mod constants;

/// Utilities for interacting with Ethereum, including the RPC provider and
/// helpers for displaying ABI values.
pub mod ether;

/// General utility functions and types for common tasks.
pub mod utils;

pub use error::Error;
