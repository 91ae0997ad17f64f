//! `warden run` — run a command inside a container.

use warden_api::ContainerApi;
use warden_common::config::CliConfig;
use warden_common::error::{Result, WardenError};

use crate::output::{OutputRecord, OutputSink};
use crate::registry::CommandRegistry;

/// Registers the `run` command.
pub fn register(registry: &mut CommandRegistry) {
    registry.register(
        &["run"],
        "Run a command inside a container",
        "Run the given command inside the named container, waiting for it \
         to exit unless no-wait is enabled. Prints the PID of the spawned \
         process.",
        run_in_container,
    );
}

/// Handler for `run <container-name> <command>...`.
pub fn run_in_container(
    args: &[String],
    api: &dyn ContainerApi,
    config: &CliConfig,
    sink: &mut OutputSink<'_>,
) -> Result<()> {
    let Some((name, command)) = args.split_first() else {
        return Err(WardenError::usage(
            "run requires a container name and a command",
        ));
    };
    if command.is_empty() {
        return Err(WardenError::usage("run requires a command"));
    }
    let container = api.get(name)?;
    let pid = container.run(command, config.no_wait)?;
    sink.record(&OutputRecord::new().field("pid", pid))
}
