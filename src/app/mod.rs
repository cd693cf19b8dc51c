//! Application entry: logging, config and command dispatch.

pub mod commands;
pub mod repl;

use anyhow::{Context, Result};
use std::io::{self, IsTerminal};
use std::process::ExitCode;
use tracing::debug;

use crate::cli::{Cli, Commands};
use repl::ReplSession;

/// Initialize the tracing subscriber for logging.
///
/// Logs go to stderr so results on stdout stay machine-readable.
pub fn init_logging(default_filter: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    // Users can override with RUST_LOG environment variable
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(io::stderr)
                .with_target(false)
                .without_time(),
        )
        .with(filter)
        .init();
}

/// Run keycalc with parsed command line arguments.
pub fn run(cli: Cli) -> Result<ExitCode> {
    init_logging(if cli.is_interactive() {
        "keycalc=info"
    } else {
        "keycalc=warn"
    });
    debug!(version = env!("CARGO_PKG_VERSION"), "Starting keycalc");

    match &cli.config {
        Some(path) => crate::config::init_config_from(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => crate::config::init_config(),
    }

    let mut config = crate::config::config();
    if cli.strict {
        config.make_strict();
    }

    let mut stdout = io::stdout().lock();
    match cli.command() {
        Commands::Eval {
            expression,
            json,
            copy,
        } => commands::eval(&config, &expression.join(" "), *json, *copy, &mut stdout),
        Commands::Keys { sequence } => commands::keys(&config, sequence, &mut stdout),
        Commands::Repl => {
            let stdin = io::stdin();
            let prompt = stdin.is_terminal();
            let mut session = ReplSession::new(config, cli.config.is_none());
            repl::run(&mut session, stdin.lock(), &mut stdout, prompt)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
