/// Input/output utilities for file manipulation and value display.
pub mod io;

/// String manipulation and hex encoding utilities.
pub mod strings;

/// Version handling utilities.
pub mod version;
