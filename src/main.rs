//! dandere2x CLI entry point.

use clap::Parser;

use dandere2x::cli::{self, Cli};
use dandere2x::infrastructure::logging::Logger;

fn main() {
    let cli = Cli::parse();
    let json = cli.json;

    let logger = match Logger::init(&cli.log_config()) {
        Ok(logger) => logger,
        Err(err) => cli::handle_error(&err, json),
    };
    if let Err(err) = logger.install_global() {
        cli::handle_error(&err, json);
    }

    if let Err(err) = cli::run(cli, &logger) {
        tracing::error!(error = %format!("{err:#}"), "command failed");
        drop(logger);
        cli::handle_error(&err, json);
    }
}
