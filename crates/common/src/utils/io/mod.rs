/// File system operations and utilities.
pub mod file;

/// Pretty-printing of decoded ABI values.
pub mod types;
