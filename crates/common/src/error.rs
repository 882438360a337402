/// Errors produced by the common crate.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A generic error with a message.
    #[error("Error: {0}")]
    Generic(String),
    /// An error returned by, or while connecting to, an RPC provider.
    #[error("RPC error: {0}")]
    RpcError(String),
    /// The RPC provider did not answer within the allotted time.
    #[error("RPC request timed out after {0}s")]
    Timeout(u64),
    /// Internal error, propagated from helpers returning [`eyre::Result`].
    #[error("Internal error: {0}")]
    Eyre(#[from] eyre::Report),
}
