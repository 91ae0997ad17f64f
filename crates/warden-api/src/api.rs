//! Container backend traits.
//!
//! Implementors handle the actual container lifecycle; the CLI only ever
//! talks through these traits. All methods block until the backend answers
//! and report failures as [`WardenError`](warden_common::error::WardenError)
//! values, never panics.

use warden_common::error::Result;

use crate::spec::ContainerSpec;
use crate::stats::ContainerStats;

/// Whether a listing covers only a container's own children or its whole
/// subtree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListPolicy {
    /// Direct children / own processes only.
    Own,
    /// The full subtree.
    Recursive,
}

impl ListPolicy {
    /// Maps the `-r` flag onto a policy.
    #[must_use]
    pub const fn from_recursive(recursive: bool) -> Self {
        if recursive { Self::Recursive } else { Self::Own }
    }
}

/// Capability for constructing a backend handle.
///
/// Injected into the dispatcher so tests can substitute a scripted fake
/// without any global state.
pub trait ApiFactory {
    /// Creates a handle to the container-management backend.
    ///
    /// # Errors
    ///
    /// Returns an error if no backend is available on this host.
    fn create_api(&self) -> Result<Box<dyn ContainerApi>>;
}

/// Entry point into the container-management backend.
pub trait ContainerApi {
    /// Resolves the container that `pid` currently runs in.
    ///
    /// # Errors
    ///
    /// Returns an error if the process does not exist or its container
    /// cannot be determined.
    fn detect(&self, pid: u32) -> Result<String>;

    /// Resolves `name` to a handle on an existing container.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is malformed or no such container
    /// exists.
    fn get(&self, name: &str) -> Result<Box<dyn Container>>;

    /// Creates a container with the given specification.
    ///
    /// # Errors
    ///
    /// Returns an error if the container already exists or the
    /// specification cannot be applied.
    fn create(&self, name: &str, spec: &ContainerSpec) -> Result<Box<dyn Container>>;

    /// Destroys an existing container.
    ///
    /// # Errors
    ///
    /// Returns an error if the container does not exist or still has live
    /// processes or subcontainers.
    fn destroy(&self, name: &str) -> Result<()>;
}

/// A resolved reference to one managed container.
pub trait Container {
    /// The container's name (an absolute, slash-separated path).
    fn name(&self) -> &str;

    /// Returns the container's current resource specification.
    ///
    /// # Errors
    ///
    /// Returns an error if the specification cannot be read.
    fn spec(&self) -> Result<ContainerSpec>;

    /// Returns the container's current resource usage.
    ///
    /// # Errors
    ///
    /// Returns an error if usage cannot be read.
    fn stats(&self) -> Result<ContainerStats>;

    /// Lists subcontainer names.
    ///
    /// # Errors
    ///
    /// Returns an error if the hierarchy cannot be enumerated.
    fn list_subcontainers(&self, policy: ListPolicy) -> Result<Vec<String>>;

    /// Lists the PIDs running in this container.
    ///
    /// # Errors
    ///
    /// Returns an error if the process list cannot be read.
    fn list_processes(&self, policy: ListPolicy) -> Result<Vec<u32>>;

    /// Lists the TIDs running in this container.
    ///
    /// # Errors
    ///
    /// Returns an error if the thread list cannot be read.
    fn list_threads(&self, policy: ListPolicy) -> Result<Vec<u32>>;

    /// Runs `command` inside this container, returning its PID.
    ///
    /// Waits for the command to exit unless `no_wait` is set.
    ///
    /// # Errors
    ///
    /// Returns an error if the command cannot be spawned or moved into the
    /// container.
    fn run(&self, command: &[String], no_wait: bool) -> Result<u32>;

    /// Moves the given PIDs into this container.
    ///
    /// PIDs are moved in order, stopping at the first failure; PIDs moved
    /// before that point stay in the container.
    ///
    /// # Errors
    ///
    /// Returns an error if any PID cannot be moved.
    fn enter(&self, pids: &[u32]) -> Result<()>;

    /// Kills every process in this container.
    ///
    /// # Errors
    ///
    /// Returns an error if the kill cannot be delivered.
    fn kill_all(&self) -> Result<()>;
}
