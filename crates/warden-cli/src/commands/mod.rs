//! Command implementations and registration.

pub mod create;
pub mod destroy;
pub mod detect;
pub mod enter;
pub mod killall;
pub mod list;
pub mod run;
pub mod spec;
pub mod stats;

use warden_api::ContainerApi;
use warden_common::error::Result;

use crate::registry::CommandRegistry;

/// Builds the full command registry. Called exactly once per invocation,
/// before the dispatcher is constructed.
#[must_use]
pub fn register_all() -> CommandRegistry {
    let mut registry = CommandRegistry::new();
    create::register(&mut registry);
    destroy::register(&mut registry);
    detect::register(&mut registry);
    enter::register(&mut registry);
    killall::register(&mut registry);
    list::register(&mut registry);
    run::register(&mut registry);
    spec::register(&mut registry);
    stats::register(&mut registry);
    registry
}

/// Resolves an optional positional container name, falling back to
/// detecting the calling process's own container.
pub(crate) fn self_or_named(name: Option<&String>, api: &dyn ContainerApi) -> Result<String> {
    match name {
        Some(name) => Ok(name.clone()),
        None => api.detect(std::process::id()),
    }
}
