use tracing::info;
use viewcall_common::utils::io::file::write_file;

use crate::error::Error;

/// Where a command's result goes, as chosen by `--output`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum OutputTarget {
    /// Human-readable output on stdout
    Print,
    /// Pretty-printed JSON on stdout
    Json,
    /// Pretty-printed JSON written to the given path
    File(String),
}

impl OutputTarget {
    pub(crate) fn parse(output: &str) -> Self {
        match output {
            "" | "print" => OutputTarget::Print,
            "json" => OutputTarget::Json,
            path => OutputTarget::File(path.to_string()),
        }
    }
}

/// Emits a command result to the target selected by `output`. `display` prints the
/// human-readable form, `to_json` renders the JSON document.
pub(crate) fn emit<E>(
    output: &str,
    display: impl FnOnce(),
    to_json: impl FnOnce() -> Result<String, E>,
) -> Result<(), Error>
where
    Error: From<E>,
{
    match OutputTarget::parse(output) {
        OutputTarget::Print => display(),
        OutputTarget::Json => println!("{}", to_json()?),
        OutputTarget::File(path) => {
            write_file(&path, &to_json()?)
                .map_err(|e| Error::Generic(format!("failed to write output: {e}")))?;
            info!("wrote output to '{}'", path);
        }
    }

    Ok(())
}
