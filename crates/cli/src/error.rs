#[derive(Debug, thiserror::Error)]
pub(crate) enum Error {
    #[error("{0}")]
    Generic(String),
    #[error("IO error: {0}")]
    IOError(#[from] std::io::Error),
    #[error("Serde error: {0}")]
    SerdeError(#[from] serde_json::Error),
    #[error("{0}")]
    CallError(#[from] viewcall_core::viewcall_caller::Error),
    #[error("{0}")]
    EncodeError(#[from] viewcall_core::viewcall_encoder::Error),
    #[error("{0}")]
    DecodeError(#[from] viewcall_core::viewcall_decoder::Error),
    #[error("Config error: {0}")]
    ConfigError(#[from] viewcall_config::error::Error),
}
