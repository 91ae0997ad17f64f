//! `warden spec` — show a container's resource specification.

use warden_api::{ContainerApi, ContainerSpec};
use warden_common::config::CliConfig;
use warden_common::error::{Result, WardenError};

use crate::output::{OutputRecord, OutputSink};
use crate::registry::CommandRegistry;

/// Registers the `spec` command.
pub fn register(registry: &mut CommandRegistry) {
    registry.register(
        &["spec"],
        "Show a container's resource specification",
        "Show the resource specification of the named container. With no \
         name, the calling process's own container is detected and used. \
         With binary output enabled, the serialized specification bytes are \
         dumped instead of text.",
        spec_container,
    );
}

/// Handler for `spec [container-name]`.
pub fn spec_container(
    args: &[String],
    api: &dyn ContainerApi,
    config: &CliConfig,
    sink: &mut OutputSink<'_>,
) -> Result<()> {
    if args.len() > 1 {
        return Err(WardenError::usage("spec takes at most one container name"));
    }
    let name = super::self_or_named(args.first(), api)?;
    let container = api.get(&name)?;
    let spec = container.spec()?;
    if config.binary {
        sink.raw(&serde_json::to_vec(&spec)?)
    } else {
        sink.record(&spec_record(&spec))
    }
}

/// Flattens a specification into an output record, skipping absent limits.
fn spec_record(spec: &ContainerSpec) -> OutputRecord {
    let mut record = OutputRecord::new();
    if let Some(memory) = &spec.memory {
        if let Some(limit) = memory.limit {
            record = record.field("memory_limit", limit);
        }
        if let Some(reservation) = memory.reservation {
            record = record.field("memory_reservation", reservation);
        }
    }
    if let Some(cpu) = &spec.cpu {
        if let Some(weight) = cpu.weight {
            record = record.field("cpu_weight", weight);
        }
        if let Some(max) = cpu.max {
            record = record.field("cpu_max", max);
        }
    }
    record
}
