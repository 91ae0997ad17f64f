//! # warden — container management CLI
//!
//! One process invocation performs at most one backend command: the legacy
//! short-flag dialect is normalized first, the long-flag parser runs second,
//! and the remaining positional tokens are resolved against the command
//! registry and dispatched. The handler's outcome becomes the exit code.

mod cli;
mod commands;
mod dispatch;
mod normalize;
mod output;
mod registry;
#[cfg(test)]
mod testing;

use std::time::Instant;

use clap::Parser;
use warden_common::config::CliConfig;
use warden_common::error::WardenError;
use warden_engine::LocalApiFactory;

use crate::dispatch::Dispatcher;
use crate::output::OutputStyle;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let raw: Vec<String> = std::env::args().collect();
    std::process::exit(run(&raw));
}

/// Executes one invocation and returns the process exit code.
fn run(raw: &[String]) -> i32 {
    let started = Instant::now();

    // First pass: the legacy short-flag dialect. A failure here (a trailing
    // `-c`) aborts before any further flag parsing.
    let mut config = CliConfig::default();
    let args = match normalize::parse_short_flags(raw, &mut config) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{e}");
            return e.exit_code();
        }
    };

    // Second pass: the general long-flag parser.
    let cli = match cli::Cli::try_parse_from(&args) {
        Ok(cli) => cli,
        Err(e) => {
            // clap prints its own diagnostic.
            let _ = e.print();
            return WardenError::invalid_argument("malformed flags").exit_code();
        }
    };
    cli.apply(&mut config);

    // An unknown output style refuses the whole invocation before dispatch.
    let style = match cli.output_style.parse::<OutputStyle>() {
        Ok(style) => style,
        Err(e) => {
            eprintln!("{e}");
            return e.exit_code();
        }
    };

    let registry = commands::register_all();
    let dispatcher = Dispatcher::new(&registry);
    let code = dispatcher.dispatch(
        &cli.args,
        style,
        &config,
        &LocalApiFactory::new(),
        &mut std::io::stdout().lock(),
        &mut std::io::stderr().lock(),
    );

    tracing::info!(elapsed = ?started.elapsed(), code, "command completed");
    code
}
