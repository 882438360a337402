use alloy::primitives::Address;

/// Errors raised while calling a contract
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The signature could not be parsed, or the arguments or return data do not fit it
    #[error("ABI error: {0}")]
    AbiError(#[from] viewcall_abi::Error),
    /// The RPC provider could not be reached or rejected the call
    #[error("RPC error: {0}")]
    RpcError(String),
    /// The RPC provider did not answer in time
    #[error("RPC request timed out after {0}s")]
    Timeout(u64),
    /// The address or block argument is malformed
    #[error("Parse error: {0}")]
    ParseError(String),
    /// The call returned nothing because there is no contract at the target
    #[error("no contract code at address {0}")]
    NoContractCode(Address),
    /// Generic internal error
    #[error("Internal error: {0}")]
    Eyre(#[from] eyre::Report),
}

impl From<viewcall_abi::ParseError> for Error {
    fn from(e: viewcall_abi::ParseError) -> Self {
        Error::AbiError(e.into())
    }
}

impl From<viewcall_common::Error> for Error {
    fn from(e: viewcall_common::Error) -> Self {
        match e {
            viewcall_common::Error::Timeout(secs) => Error::Timeout(secs),
            viewcall_common::Error::RpcError(message) => Error::RpcError(message),
            other => Error::RpcError(other.to_string()),
        }
    }
}
