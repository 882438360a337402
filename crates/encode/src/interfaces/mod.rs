mod args;
mod result;

// re-export the public interface
pub use args::{EncodeArgs, EncodeArgsBuilder};
pub use result::EncodeResult;
