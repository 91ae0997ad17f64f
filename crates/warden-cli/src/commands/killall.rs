//! `warden killall` — kill every process in a container.

use warden_api::ContainerApi;
use warden_common::config::CliConfig;
use warden_common::error::{Result, WardenError};

use crate::output::OutputSink;
use crate::registry::CommandRegistry;

/// Registers the `killall` command.
pub fn register(registry: &mut CommandRegistry) {
    registry.register(
        &["killall"],
        "Kill all processes in a container",
        "Kill every process running in the named container. The container \
         itself is left in place.",
        killall_container,
    );
}

/// Handler for `killall <container-name>`.
pub fn killall_container(
    args: &[String],
    api: &dyn ContainerApi,
    _config: &CliConfig,
    _sink: &mut OutputSink<'_>,
) -> Result<()> {
    let [name] = args else {
        return Err(WardenError::usage(
            "killall requires exactly one container name",
        ));
    };
    api.get(name)?.kill_all()
}
