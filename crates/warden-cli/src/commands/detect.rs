//! `warden detect` — find which container a process runs in.

use warden_api::ContainerApi;
use warden_common::config::CliConfig;
use warden_common::error::{Result, WardenError};

use crate::output::{OutputRecord, OutputSink};
use crate::registry::CommandRegistry;

/// Registers the `detect` command.
pub fn register(registry: &mut CommandRegistry) {
    registry.register(
        &["detect"],
        "Detect which container a process is in",
        "Detect the container of the given PID. With no PID, the calling \
         process itself is used.",
        detect_container,
    );
}

/// Handler for `detect [pid]`.
pub fn detect_container(
    args: &[String],
    api: &dyn ContainerApi,
    _config: &CliConfig,
    sink: &mut OutputSink<'_>,
) -> Result<()> {
    if args.len() > 1 {
        return Err(WardenError::usage("detect takes at most one pid"));
    }
    let pid = match args.first() {
        Some(raw) => raw
            .parse::<u32>()
            .map_err(|_| WardenError::invalid_argument(format!("invalid pid: {raw}")))?,
        None => std::process::id(),
    };
    let name = api.detect(pid)?;
    sink.record(&OutputRecord::new().field("name", name))
}
