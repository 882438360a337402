/// Errors raised while decoding calldata
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The signature could not be parsed or the data does not fit it
    #[error("ABI error: {0}")]
    AbiError(#[from] viewcall_abi::Error),
    /// Generic internal error
    #[error("Internal error: {0}")]
    Eyre(#[from] eyre::Report),
}

impl From<viewcall_abi::ParseError> for Error {
    fn from(e: viewcall_abi::ParseError) -> Self {
        Error::AbiError(e.into())
    }
}
