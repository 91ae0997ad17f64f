//! `warden create` — create a container from a specification.

use warden_api::{ContainerApi, ContainerSpec};
use warden_common::config::CliConfig;
use warden_common::error::{Result, WardenError};

use crate::output::{OutputRecord, OutputSink};
use crate::registry::CommandRegistry;

/// Registers the `create` command.
pub fn register(registry: &mut CommandRegistry) {
    registry.register(
        &["create"],
        "Create a container",
        "Create the named container. The specification is taken from the \
         inline JSON argument if given, else from the file named by the \
         config-file flag, else an empty specification is used.",
        create_container,
    );
}

/// Handler for `create <container-name> [spec-json]`.
pub fn create_container(
    args: &[String],
    api: &dyn ContainerApi,
    config: &CliConfig,
    sink: &mut OutputSink<'_>,
) -> Result<()> {
    let Some(name) = args.first() else {
        return Err(WardenError::usage("create requires a container name"));
    };
    if args.len() > 2 {
        return Err(WardenError::usage(
            "create takes a container name and an optional specification",
        ));
    }
    let spec = load_spec(args.get(1), config)?;
    let container = api.create(name, &spec)?;
    sink.record(&OutputRecord::new().field("name", container.name()))
}

/// Resolves the specification: inline JSON wins over the config file.
fn load_spec(inline: Option<&String>, config: &CliConfig) -> Result<ContainerSpec> {
    if let Some(raw) = inline {
        return Ok(serde_json::from_str(raw)?);
    }
    if let Some(path) = &config.config_file {
        let raw = std::fs::read_to_string(path).map_err(|e| WardenError::Io {
            path: path.clone(),
            source: e,
        })?;
        return Ok(serde_json::from_str(&raw)?);
    }
    Ok(ContainerSpec::default())
}
