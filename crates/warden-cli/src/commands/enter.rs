//! `warden enter` — move processes into a container.

use warden_api::ContainerApi;
use warden_common::config::CliConfig;
use warden_common::error::{Result, WardenError};

use crate::output::OutputSink;
use crate::registry::CommandRegistry;

/// Registers the `enter` command.
pub fn register(registry: &mut CommandRegistry) {
    registry.register(
        &["enter"],
        "Move processes into a container",
        "Move the given PIDs into the named container.",
        enter_container,
    );
}

/// Handler for `enter <container-name> <pid>...`.
pub fn enter_container(
    args: &[String],
    api: &dyn ContainerApi,
    _config: &CliConfig,
    _sink: &mut OutputSink<'_>,
) -> Result<()> {
    let Some((name, raw_pids)) = args.split_first() else {
        return Err(WardenError::usage(
            "enter requires a container name and at least one pid",
        ));
    };
    if raw_pids.is_empty() {
        return Err(WardenError::usage("enter requires at least one pid"));
    }
    let pids = raw_pids
        .iter()
        .map(|raw| {
            raw.parse::<u32>()
                .map_err(|_| WardenError::invalid_argument(format!("invalid pid: {raw}")))
        })
        .collect::<Result<Vec<u32>>>()?;
    api.get(name)?.enter(&pids)
}
