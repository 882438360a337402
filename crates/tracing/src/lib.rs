//! The `tracing` module provides functionalities for setting up and configuring logging.
//!
//! It includes methods for initializing tracing with a stdout layer, an optional journald layer
//! and an optional file layer, each with its own format and filter.

use tracing_subscriber::{filter::Directive, prelude::*};

mod formatter;
mod layers;

pub use formatter::LogFormat;
pub use layers::{FileInfo, FileWorkerGuard};

use layers::Layers;

// Re-export tracing crates
pub use tracing;
pub use tracing_subscriber;

/// Tracer for application logging.
///
/// Manages the configuration and initialization of logging layers, including standard output,
/// journald and file logging.
#[derive(Debug, Clone)]
pub struct ViewcallTracer {
    stdout: LayerInfo,
    journald: Option<String>,
    file: Option<(LayerInfo, FileInfo)>,
}

impl ViewcallTracer {
    /// Constructs a new `ViewcallTracer` logging to stdout with the defaults of [LayerInfo].
    pub fn new() -> Self {
        Self { stdout: LayerInfo::default(), journald: None, file: None }
    }

    /// Sets the configuration for the stdout layer.
    pub fn with_stdout(mut self, config: LayerInfo) -> Self {
        self.stdout = config;
        self
    }

    /// Enables the journald layer with the given filter.
    pub fn with_journald(mut self, filter: String) -> Self {
        self.journald = Some(filter);
        self
    }

    /// Enables the file layer.
    pub fn with_file(mut self, config: LayerInfo, file: FileInfo) -> Self {
        self.file = Some((config, file));
        self
    }
}

impl Default for ViewcallTracer {
    fn default() -> Self {
        Self::new()
    }
}

/// Configuration of a single logging layer.
#[derive(Debug, Clone)]
pub struct LayerInfo {
    format: LogFormat,
    default_directive: String,
    filters: String,
    color: Option<String>,
}

impl LayerInfo {
    /// Constructs a new `LayerInfo`.
    ///
    /// * `format` - How log records are rendered.
    /// * `default_directive` - Directive used when `RUST_LOG` is unset, e.g. `warn`.
    /// * `filters` - Extra comma separated directives.
    /// * `color` - `always`, `auto` or `never`; `None` disables color.
    pub fn new(
        format: LogFormat,
        default_directive: String,
        filters: String,
        color: Option<String>,
    ) -> Self {
        Self { format, default_directive, filters, color }
    }
}

impl Default for LayerInfo {
    fn default() -> Self {
        Self {
            format: LogFormat::Terminal,
            default_directive: "warn".to_string(),
            filters: String::new(),
            color: Some("always".to_string()),
        }
    }
}

/// Trait defining a general interface for logging configuration.
pub trait Tracer {
    /// Initialize the logging configuration.
    ///
    /// Returns the guard of the file layer, if one was configured. Dropping it flushes and
    /// stops file logging.
    fn init(self) -> eyre::Result<Option<FileWorkerGuard>>;
}

impl Tracer for ViewcallTracer {
    fn init(self) -> eyre::Result<Option<FileWorkerGuard>> {
        let mut layers = Layers::new();

        layers.stdout(
            self.stdout.format,
            self.stdout.default_directive.parse::<Directive>()?,
            &self.stdout.filters,
            self.stdout.color,
        )?;

        if let Some(filter) = &self.journald {
            layers.journald(filter)?;
        }

        let file_guard = match &self.file {
            Some((config, file_info)) => {
                Some(layers.file(config.format, &config.filters, file_info)?)
            }
            None => None,
        };

        // a subscriber may already be installed, e.g. by a test harness
        let _ = tracing_subscriber::registry().with(layers.into_inner()).try_init();

        Ok(file_guard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_sets_layers() {
        let tracer = ViewcallTracer::new()
            .with_stdout(LayerInfo::new(
                LogFormat::Json,
                "debug".to_string(),
                String::new(),
                None,
            ))
            .with_journald("error".to_string());

        assert_eq!(tracer.stdout.format, LogFormat::Json);
        assert_eq!(tracer.journald.as_deref(), Some("error"));
        assert!(tracer.file.is_none());
    }

    #[test]
    fn test_default_layer_info() {
        let info = LayerInfo::default();
        assert_eq!(info.format, LogFormat::Terminal);
        assert_eq!(info.default_directive, "warn");
        assert!(info.default_directive.parse::<Directive>().is_ok());
    }
}
