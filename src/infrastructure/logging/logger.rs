use super::config::{LogConfig, LogFormat, RotationPolicy, LOG_FILE_NAME};
use anyhow::{Context, Result};
use std::io;
use std::path::{Path, PathBuf};
use tracing::level_filters::LevelFilter;
use tracing::{Dispatch, Level};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::Registry;
use tracing_subscriber::{EnvFilter, Layer};

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync + 'static>;

/// Process-wide logging facility.
///
/// Building a `Logger` does not touch global state. The owner decides whether
/// to [`install_global`](Self::install_global) it once at startup, and hands
/// [`dispatch`](Self::dispatch) to components that should log through it.
/// Components name their logger with a `tracing` target.
pub struct Logger {
    dispatch: Dispatch,
    log_file: Option<PathBuf>,
    _guard: Option<WorkerGuard>,
}

impl Logger {
    /// Build the logger described by `config`
    ///
    /// # Errors
    /// Returns an error if the level is invalid or the log file cannot be opened
    pub fn init(config: &LogConfig) -> Result<Self> {
        let default_level = parse_log_level(&config.level)?;
        let env_filter = || {
            EnvFilter::builder()
                .with_default_directive(LevelFilter::from_level(default_level).into())
                .from_env_lossy()
        };

        let mut layers: Vec<BoxedLayer> = Vec::new();
        let mut guard = None;
        let mut log_file = None;

        if let Some(ref log_dir) = config.log_dir {
            let file_appender = file_appender(log_dir, config.rotation)?;
            let (non_blocking_file, file_guard) = tracing_appender::non_blocking(file_appender);

            // File layer - always JSON for structured logging
            layers.push(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(non_blocking_file)
                    .with_ansi(false)
                    .with_current_span(true)
                    .with_span_list(true)
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_thread_names(true)
                    .with_file(true)
                    .with_line_number(true)
                    .with_filter(env_filter())
                    .boxed(),
            );

            guard = Some(file_guard);
            log_file = Some(log_dir.join(LOG_FILE_NAME));
        }

        if config.enable_console {
            let console_layer = match config.format {
                LogFormat::Json => tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(io::stderr)
                    .with_current_span(true)
                    .with_span_list(true)
                    .with_target(true)
                    .with_filter(env_filter())
                    .boxed(),
                LogFormat::Pretty => tracing_subscriber::fmt::layer()
                    .pretty()
                    .with_writer(io::stderr)
                    .with_target(true)
                    .with_file(false)
                    .with_span_events(FmtSpan::CLOSE)
                    .with_filter(env_filter())
                    .boxed(),
            };
            layers.push(console_layer);
        }

        let dispatch = Dispatch::new(tracing_subscriber::registry().with(layers));

        tracing::dispatcher::with_default(&dispatch, || {
            tracing::info!(
                level = %config.level,
                format = ?config.format,
                file_output = config.log_dir.is_some(),
                "logger initialized"
            );
        });

        Ok(Self {
            dispatch,
            log_file,
            _guard: guard,
        })
    }

    /// Handle to inject into components that log through this logger.
    pub const fn dispatch(&self) -> &Dispatch {
        &self.dispatch
    }

    /// Path of the log file, when file output is enabled. Rotated policies
    /// append a date suffix to this name.
    pub fn log_file(&self) -> Option<&Path> {
        self.log_file.as_deref()
    }

    /// Run `f` with this logger as the current thread's default.
    pub fn scope<T>(&self, f: impl FnOnce() -> T) -> T {
        tracing::dispatcher::with_default(&self.dispatch, f)
    }

    /// Make this logger the process-wide default. Succeeds at most once per process.
    ///
    /// # Errors
    /// Returns an error if a global default is already installed
    pub fn install_global(&self) -> Result<()> {
        tracing::dispatcher::set_global_default(self.dispatch.clone())
            .context("a global logger has already been installed")
    }
}

fn file_appender(log_dir: &Path, rotation: RotationPolicy) -> Result<RollingFileAppender> {
    let rotation = match rotation {
        RotationPolicy::Daily => Rotation::DAILY,
        RotationPolicy::Hourly => Rotation::HOURLY,
        RotationPolicy::Never => Rotation::NEVER,
    };
    RollingFileAppender::builder()
        .rotation(rotation)
        .filename_prefix(LOG_FILE_NAME)
        .build(log_dir)
        .with_context(|| format!("Failed to open log file in {}", log_dir.display()))
}

/// Parse log level string to Level
fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => anyhow::bail!("Invalid log level: {level}"),
    }
}
