//! `warden stats …` — show container resource usage.

use warden_api::{ContainerApi, ContainerStats};
use warden_common::config::CliConfig;
use warden_common::error::{Result, WardenError};

use crate::output::{OutputRecord, OutputSink};
use crate::registry::CommandRegistry;

/// How much of the stats model to render.
#[derive(Clone, Copy)]
enum Detail {
    Summary,
    Full,
}

/// Registers the `stats summary` and `stats full` commands.
pub fn register(registry: &mut CommandRegistry) {
    registry.register(
        &["stats", "summary"],
        "Show summary resource usage of a container",
        "Show the headline usage figures of the named container (the \
         calling process's own container if no name is given).",
        stats_summary,
    );
    registry.register(
        &["stats", "full"],
        "Show full resource usage of a container",
        "Show all usage figures of the named container (the calling \
         process's own container if no name is given).",
        stats_full,
    );
}

/// Handler for `stats summary [container-name]`.
pub fn stats_summary(
    args: &[String],
    api: &dyn ContainerApi,
    config: &CliConfig,
    sink: &mut OutputSink<'_>,
) -> Result<()> {
    print_stats(args, api, config, sink, Detail::Summary)
}

/// Handler for `stats full [container-name]`.
pub fn stats_full(
    args: &[String],
    api: &dyn ContainerApi,
    config: &CliConfig,
    sink: &mut OutputSink<'_>,
) -> Result<()> {
    print_stats(args, api, config, sink, Detail::Full)
}

fn print_stats(
    args: &[String],
    api: &dyn ContainerApi,
    _config: &CliConfig,
    sink: &mut OutputSink<'_>,
    detail: Detail,
) -> Result<()> {
    if args.len() > 1 {
        return Err(WardenError::usage("stats takes at most one container name"));
    }
    let name = super::self_or_named(args.first(), api)?;
    let container = api.get(&name)?;
    let stats = container.stats()?;
    let record = stats_record(&stats, detail);
    if record.is_empty() {
        return Ok(());
    }
    sink.record(&record)
}

fn stats_record(stats: &ContainerStats, detail: Detail) -> OutputRecord {
    let mut record = OutputRecord::new();
    if let Some(memory) = &stats.memory {
        record = record.field("memory_usage", memory.usage);
    }
    if let (Detail::Full, Some(cpu)) = (detail, &stats.cpu) {
        record = record.field("cpu_usage_usec", cpu.usage_usec);
    }
    record
}
