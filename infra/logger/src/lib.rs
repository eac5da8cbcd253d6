//! # Logger
//!
//! Installs the global `tracing` subscriber for the workspace tooling.
//!
//! Console output goes to stderr in the compact format, leaving stdout to the command's
//! own results. A rolling log file can be added with [`LoggerBuilder::path`], optionally as
//! JSON. `RUST_LOG` directives are honoured on top of the configured level.
//!
//! ## Example
//!
//! ```rust
//! # use countries_logger::{Logger, LevelFilter};
//! let _logger = Logger::builder()
//!     .name("xtask")
//!     .level(LevelFilter::DEBUG)
//!     .init()
//!     .unwrap();
//! ```

mod error;

pub use crate::error::LoggerError;
pub use tracing::level_filters::LevelFilter;
pub use tracing_appender::rolling::Rotation;

use std::fs;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::fmt::layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

const DEFAULT_NAME: &str = "countries";
const DEFAULT_MAX_FILES: usize = 5;
const LOG_FILE_SUFFIX: &str = "log";

/// Configures and installs the global subscriber.
#[derive(Debug)]
#[must_use = "The builder does nothing until `init` is called."]
pub struct LoggerBuilder {
    name: String,
    level: LevelFilter,
    env_filter: Option<String>,
    console: bool,
    path: Option<PathBuf>,
    rotation: Rotation,
    max_files: usize,
    json: bool,
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_owned(),
            level: LevelFilter::INFO,
            env_filter: None,
            console: true,
            path: None,
            rotation: Rotation::NEVER,
            max_files: DEFAULT_MAX_FILES,
            json: false,
        }
    }
}

impl LoggerBuilder {
    /// Name used as the log file prefix (e.g. `xtask.log`).
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Minimum level emitted when no directive matches.
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }

    /// Extra filter directives, e.g. `xtask=debug,config=warn`.
    ///
    /// Invalid directives make [`LoggerBuilder::init`] fail.
    pub fn env_filter(mut self, filter: impl Into<String>) -> Self {
        self.env_filter = Some(filter.into());
        self
    }

    pub const fn console(mut self, enabled: bool) -> Self {
        self.console = enabled;
        self
    }

    /// Also writes logs into `path`, which is created if missing.
    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub const fn rotation(mut self, rotation: Rotation) -> Self {
        self.rotation = rotation;
        self
    }

    pub const fn max_files(mut self, max: usize) -> Self {
        self.max_files = max;
        self
    }

    /// Writes the log file as JSON lines. Has no effect on console output.
    pub const fn json(mut self, enabled: bool) -> Self {
        self.json = enabled;
        self
    }

    /// Installs the subscriber.
    ///
    /// # Result
    /// A [`Logger`] that must stay alive for file output to be flushed.
    ///
    /// # Errors
    /// * [`LoggerError::InvalidConfiguration`] for an empty name, a zero file limit, a bad
    ///   filter directive, or when neither console nor file output is enabled.
    /// * [`LoggerError::Io`] / [`LoggerError::Appender`] if the log file cannot be set up.
    /// * [`LoggerError::Subscriber`] if a global subscriber is already installed.
    pub fn init(self) -> Result<Logger, LoggerError> {
        self.validate()?;
        let filter = self.build_filter()?;

        let mut layers = Vec::new();

        if self.console {
            layers.push(
                layer().compact().with_target(false).with_writer(std::io::stderr).boxed(),
            );
        }

        let guard = match &self.path {
            Some(path) => {
                fs::create_dir_all(path).map_err(|source| LoggerError::Io {
                    source,
                    context: Some(format!("Failed to create {}", path.display()).into()),
                })?;

                let appender = RollingFileAppender::builder()
                    .rotation(self.rotation.clone())
                    .filename_prefix(&self.name)
                    .filename_suffix(LOG_FILE_SUFFIX)
                    .max_log_files(self.max_files)
                    .build(path)?;

                let (writer, guard) = tracing_appender::non_blocking(appender);
                let file_layer = layer().with_writer(writer).with_ansi(false);
                layers.push(if self.json { file_layer.json().boxed() } else { file_layer.boxed() });
                Some(guard)
            },
            None => None,
        };

        if layers.is_empty() {
            return Err(LoggerError::invalid("Neither console nor file output is enabled"));
        }

        tracing_subscriber::registry().with(filter).with(layers).try_init()?;

        Ok(Logger { guard })
    }

    fn validate(&self) -> Result<(), LoggerError> {
        if self.name.trim().is_empty() {
            return Err(LoggerError::invalid("Logger name cannot be empty"));
        }
        if self.max_files == 0 {
            return Err(LoggerError::invalid("max_files must be greater than zero"));
        }
        Ok(())
    }

    fn build_filter(&self) -> Result<EnvFilter, LoggerError> {
        let builder = EnvFilter::builder().with_default_directive(self.level.into());
        match &self.env_filter {
            Some(directives) => builder.parse(directives).map_err(|e| {
                LoggerError::invalid(format!("Invalid env filter '{directives}': {e}"))
            }),
            None => Ok(builder.from_env_lossy()),
        }
    }
}

/// Keeps the background file writer alive. Pending lines are flushed on drop.
#[must_use = "Dropping the logger stops file output."]
#[derive(Debug)]
pub struct Logger {
    guard: Option<WorkerGuard>,
}

impl Logger {
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::default()
    }

    /// Whether a log file is being written.
    #[must_use]
    pub const fn has_file_output(&self) -> bool {
        self.guard.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults() {
        let builder = Logger::builder();

        assert_eq!(builder.name, "countries");
        assert_eq!(builder.level, LevelFilter::INFO);
        assert!(builder.console);
        assert!(builder.path.is_none());
        assert!(!builder.json);
    }

    #[test]
    fn builder_records_settings() {
        let builder = Logger::builder()
            .name("xtask")
            .level(LevelFilter::DEBUG)
            .env_filter("xtask=trace")
            .path("logs")
            .max_files(2)
            .json(true);

        assert_eq!(builder.name, "xtask");
        assert_eq!(builder.level, LevelFilter::DEBUG);
        assert_eq!(builder.env_filter.as_deref(), Some("xtask=trace"));
        assert_eq!(builder.path, Some(PathBuf::from("logs")));
        assert_eq!(builder.max_files, 2);
        assert!(builder.json);
    }

    #[test]
    fn invalid_settings_fail_before_installing() {
        let empty_name = Logger::builder().name("  ").init().unwrap_err();
        let no_files = Logger::builder().max_files(0).init().unwrap_err();
        let no_output = Logger::builder().console(false).init().unwrap_err();
        let bad_filter = Logger::builder().env_filter("xtask=loud").init().unwrap_err();

        for err in [empty_name, no_files, no_output, bad_filter] {
            assert!(matches!(err, LoggerError::InvalidConfiguration { .. }), "{err}");
        }
    }
}
