//! Command-line interface
//!
//! Parses arguments, builds the logger and resolver the commands share, and
//! reports failures.

pub mod commands;
pub mod display;
pub mod types;

pub use types::{Cli, Commands};

use anyhow::Result;

use crate::domain::error::ConfigError;
use crate::infrastructure::config::{InstallDir, DEFAULT_ENV_PREFIX};
use crate::infrastructure::logging::{LogConfig, LogFormat, Logger, RotationPolicy};
use crate::services::ConfigResolver;
use display::action_failure;

impl Cli {
    /// Logging configuration requested on the command line.
    pub fn log_config(&self) -> LogConfig {
        LogConfig {
            level: self.log_level.clone(),
            format: if self.log_format == "json" {
                LogFormat::Json
            } else {
                LogFormat::Pretty
            },
            log_dir: (!self.no_log_file).then(|| self.log_dir.clone()),
            enable_console: self.verbose,
            rotation: RotationPolicy::Never,
        }
    }

    /// Resolver configured from the command line, logging through `logger`.
    pub fn resolver(&self, logger: &Logger) -> Result<ConfigResolver> {
        let resolver = match &self.install_dir {
            Some(dir) => ConfigResolver::with_install_dir(InstallDir::new(dir)?),
            None => ConfigResolver::new()?,
        };
        let resolver = if self.no_env {
            resolver
        } else {
            resolver.with_env_prefix(DEFAULT_ENV_PREFIX)
        };
        Ok(resolver.with_logger(logger))
    }
}

/// Run the parsed command.
pub fn run(cli: Cli, logger: &Logger) -> Result<()> {
    let resolver = cli.resolver(logger)?;
    let json = cli.json;
    logger.scope(|| match cli.command {
        Commands::Resolve(args) => commands::resolve::execute(args, &resolver, json),
        Commands::Check(args) => commands::check::execute(args, &resolver, json),
        Commands::Workspace(args) => commands::workspace::execute(args, &resolver, json),
    })
}

/// Report `err` and exit with status 1.
pub fn handle_error(err: &anyhow::Error, json_mode: bool) -> ! {
    let report = render_error(err, json_mode);
    if json_mode {
        println!("{report}");
    } else {
        eprintln!("{report}");
    }
    std::process::exit(1)
}

/// Failure report for `err`: a JSON object, or a failure line followed by the
/// offending key and error kind when `err` is a [`ConfigError`].
pub fn render_error(err: &anyhow::Error, json_mode: bool) -> String {
    let config_error = err.downcast_ref::<ConfigError>();
    let key = config_error.and_then(ConfigError::key);
    let kind = config_error.map(ConfigError::kind);

    if json_mode {
        let body = serde_json::json!({
            "success": false,
            "error": format!("{err:#}"),
            "kind": kind,
            "key": key,
        });
        return serde_json::to_string_pretty(&body).unwrap_or_default();
    }

    let mut lines = vec![action_failure(&format!("{err:#}"))];
    if let Some(key) = key {
        lines.push(format!("  offending key: {key}"));
    }
    if let Some(kind) = kind {
        lines.push(format!("  error kind: {kind}"));
    }
    lines.join("\n")
}
