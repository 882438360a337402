use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{filter::Directive, EnvFilter, Layer, Registry};

use crate::formatter::LogFormat;

/// A worker guard returned by the file layer.
///
/// When a guard is dropped, all events currently in-memory are flushed to the log file this guard
/// belongs to.
pub type FileWorkerGuard = WorkerGuard;

/// A boxed tracing [Layer].
pub(crate) type BoxedLayer<S> = Box<dyn Layer<S> + Send + Sync>;

/// Directives applied to every filter. The HTTP transport is far too chatty at debug level.
const DEFAULT_ENV_FILTER_DIRECTIVES: [&str; 2] = ["hyper::proto::h1=off", "hyper_util=off"];

/// Manages the collection of layers for a tracing subscriber.
pub(crate) struct Layers {
    inner: Vec<BoxedLayer<Registry>>,
}

impl std::fmt::Debug for Layers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Layers").field("len", &self.inner.len()).finish()
    }
}

impl Layers {
    pub(crate) fn new() -> Self {
        Self { inner: vec![] }
    }

    pub(crate) fn into_inner(self) -> Vec<BoxedLayer<Registry>> {
        self.inner
    }

    /// Adds a layer writing to stdout.
    pub(crate) fn stdout(
        &mut self,
        format: LogFormat,
        default_directive: Directive,
        filters: &str,
        color: Option<String>,
    ) -> eyre::Result<()> {
        let filter = build_env_filter(Some(default_directive), filters)?;
        self.inner.push(format.apply(filter, color, None));
        Ok(())
    }

    /// Adds a journald layer.
    pub(crate) fn journald(&mut self, filters: &str) -> eyre::Result<()> {
        let filter = build_env_filter(None, filters)?;
        self.inner.push(tracing_journald::layer()?.with_filter(filter).boxed());
        Ok(())
    }

    /// Adds a layer writing to a log file. The returned guard must be held for as long as events
    /// should reach the file.
    pub(crate) fn file(
        &mut self,
        format: LogFormat,
        filters: &str,
        file_info: &FileInfo,
    ) -> eyre::Result<FileWorkerGuard> {
        let (writer, guard) = file_info.create_log_writer()?;
        let filter = build_env_filter(None, filters)?;
        self.inner.push(format.apply(filter, None, Some(writer)));
        Ok(guard)
    }
}

/// Where a file layer writes to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileInfo {
    dir: PathBuf,
    file_name: String,
}

impl FileInfo {
    /// Splits a log file path into its directory and file name. A bare file name is placed in
    /// the current directory.
    pub fn new(path: impl AsRef<Path>) -> eyre::Result<Self> {
        let path = path.as_ref();
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| eyre::eyre!("log file path '{}' has no file name", path.display()))?
            .to_string();
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };

        Ok(Self { dir, file_name })
    }

    fn create_log_writer(&self) -> eyre::Result<(NonBlocking, WorkerGuard)> {
        std::fs::create_dir_all(&self.dir)?;
        let appender = tracing_appender::rolling::never(&self.dir, &self.file_name);
        Ok(tracing_appender::non_blocking(appender))
    }
}

/// Builds an [EnvFilter] from `RUST_LOG`, the default directives and a comma separated list of
/// extra directives.
fn build_env_filter(
    default_directive: Option<Directive>,
    directives: &str,
) -> eyre::Result<EnvFilter> {
    let env_filter = match default_directive {
        Some(directive) => EnvFilter::builder().with_default_directive(directive).from_env_lossy(),
        None => EnvFilter::builder().from_env_lossy(),
    };

    DEFAULT_ENV_FILTER_DIRECTIVES
        .into_iter()
        .chain(directives.split(',').map(str::trim).filter(|d| !d.is_empty()))
        .try_fold(env_filter, |env_filter, directive| {
            Ok(env_filter.add_directive(directive.parse()?))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_env_filter() {
        assert!(build_env_filter(None, "").is_ok());
        assert!(build_env_filter(Some("info".parse().expect("directive")), "viewcall=debug").is_ok());
        assert!(build_env_filter(None, "warn, viewcall_abi=trace").is_ok());
        assert!(build_env_filter(None, "viewcall=[").is_err());
    }

    #[test]
    fn test_file_info_splits_path() {
        let info = FileInfo::new("/tmp/viewcall/logs/run.log").expect("valid path");
        assert_eq!(info.dir, PathBuf::from("/tmp/viewcall/logs"));
        assert_eq!(info.file_name, "run.log");

        let bare = FileInfo::new("run.log").expect("valid path");
        assert_eq!(bare.dir, PathBuf::from("."));

        assert!(FileInfo::new("/").is_err());
    }
}
