//! Command dispatch.
//!
//! One invocation ends in exactly one of five terminal outcomes: help, the
//! command tree, version info, execution of a single matched command, or a
//! usage error. The dispatcher owns that state machine and the translation
//! of a handler's outcome into a process exit code.

use std::io::Write;

use warden_api::ApiFactory;
use warden_common::config::CliConfig;
use warden_common::error::WardenError;

use crate::output::{OutputSink, OutputStyle};
use crate::registry::CommandRegistry;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Resolves positional tokens against the registry and runs the match.
pub struct Dispatcher<'r> {
    registry: &'r CommandRegistry,
}

impl<'r> Dispatcher<'r> {
    /// Creates a dispatcher over a fully built registry.
    #[must_use]
    pub const fn new(registry: &'r CommandRegistry) -> Self {
        Self { registry }
    }

    /// Executes one invocation and returns the process exit code.
    ///
    /// Success is 0; a failure maps 1:1 onto its kind's exit code via
    /// [`WardenError::exit_code`]. Failure kinds returned by backend calls
    /// arrive here verbatim, never rewrapped.
    pub fn dispatch(
        &self,
        tokens: &[String],
        style: OutputStyle,
        config: &CliConfig,
        factory: &dyn ApiFactory,
        out: &mut dyn Write,
        err: &mut dyn Write,
    ) -> i32 {
        if config.print_help {
            self.print_help(out);
            return 0;
        }

        if config.print_cmd_tree || config.print_cmd_tree_long {
            self.print_tree(out, config.print_cmd_tree_long);
            return 0;
        }

        if config.print_version {
            let _ = writeln!(out, "warden version {VERSION}");
            return 0;
        }
        if config.print_version_long {
            let _ = writeln!(
                out,
                "warden version {VERSION} (built for {} {})",
                std::env::consts::OS,
                std::env::consts::ARCH
            );
            return 0;
        }

        let Some((command, rest)) = self.registry.lookup(tokens) else {
            let usage = if tokens.is_empty() {
                WardenError::usage("no command specified; see --print-help")
            } else {
                WardenError::usage(format!("unknown command: {}", tokens.join(" ")))
            };
            let _ = writeln!(err, "{usage}");
            return usage.exit_code();
        };

        let api = match factory.create_api() {
            Ok(api) => api,
            Err(e) => {
                let _ = writeln!(err, "{e}");
                return e.exit_code();
            }
        };

        tracing::debug!(command = %command.path().join(" "), "dispatching");
        let mut sink = OutputSink::new(style, out);
        match (command.handler())(rest, api.as_ref(), config, &mut sink) {
            Ok(()) => 0,
            Err(e) => {
                let _ = writeln!(err, "{e}");
                e.exit_code()
            }
        }
    }

    fn print_help(&self, out: &mut dyn Write) {
        let _ = writeln!(out, "usage: warden [flags...] <command> [arguments...]");
        let _ = writeln!(out);
        for command in self.registry.iter() {
            let _ = writeln!(
                out,
                "  {:<18} {}",
                command.path().join(" "),
                command.short_help()
            );
        }
    }

    fn print_tree(&self, out: &mut dyn Write, long: bool) {
        for command in self.registry.iter() {
            let indent = "  ".repeat(command.path().len().saturating_sub(1));
            let _ = writeln!(out, "{indent}{}", command.path().join(" "));
            if long {
                let _ = writeln!(out, "{indent}    {}", command.long_help());
            }
        }
    }
}
