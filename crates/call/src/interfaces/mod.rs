mod args;
mod result;

// re-export the public interface
pub use args::{CallArgs, CallArgsBuilder};
pub use result::CallResult;
