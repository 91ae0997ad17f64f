//! `warden list …` — enumerate subcontainers, processes, and threads.

use warden_api::{Container, ContainerApi, ListPolicy};
use warden_common::config::CliConfig;
use warden_common::error::{Result, WardenError};

use crate::output::{OutputRecord, OutputSink};
use crate::registry::CommandRegistry;

/// Registers the `list containers`, `list pids`, and `list threads` commands.
pub fn register(registry: &mut CommandRegistry) {
    registry.register(
        &["list", "containers"],
        "List subcontainers of a container",
        "List the subcontainers of the named container (the calling \
         process's own container if no name is given). Recursive mode lists \
         the whole subtree.",
        list_containers,
    );
    registry.register(
        &["list", "pids"],
        "List PIDs running in a container",
        "List the PIDs in the named container (the calling process's own \
         container if no name is given). Recursive mode includes \
         subcontainers.",
        list_pids,
    );
    registry.register(
        &["list", "threads"],
        "List TIDs running in a container",
        "List the TIDs in the named container (the calling process's own \
         container if no name is given). Recursive mode includes \
         subcontainers.",
        list_threads,
    );
}

/// Resolves the single optional `[container-name]` argument to a handle.
fn target(args: &[String], api: &dyn ContainerApi) -> Result<Box<dyn Container>> {
    if args.len() > 1 {
        return Err(WardenError::usage("list takes at most one container name"));
    }
    let name = super::self_or_named(args.first(), api)?;
    api.get(&name)
}

/// Handler for `list containers [container-name]`.
pub fn list_containers(
    args: &[String],
    api: &dyn ContainerApi,
    config: &CliConfig,
    sink: &mut OutputSink<'_>,
) -> Result<()> {
    let container = target(args, api)?;
    let policy = ListPolicy::from_recursive(config.recursive);
    for name in container.list_subcontainers(policy)? {
        sink.record(&OutputRecord::new().field("name", name))?;
    }
    Ok(())
}

/// Handler for `list pids [container-name]`.
pub fn list_pids(
    args: &[String],
    api: &dyn ContainerApi,
    config: &CliConfig,
    sink: &mut OutputSink<'_>,
) -> Result<()> {
    let container = target(args, api)?;
    let policy = ListPolicy::from_recursive(config.recursive);
    for pid in container.list_processes(policy)? {
        sink.record(&OutputRecord::new().field("pid", pid))?;
    }
    Ok(())
}

/// Handler for `list threads [container-name]`.
pub fn list_threads(
    args: &[String],
    api: &dyn ContainerApi,
    config: &CliConfig,
    sink: &mut OutputSink<'_>,
) -> Result<()> {
    let container = target(args, api)?;
    let policy = ListPolicy::from_recursive(config.recursive);
    for tid in container.list_threads(policy)? {
        sink.record(&OutputRecord::new().field("tid", tid))?;
    }
    Ok(())
}
