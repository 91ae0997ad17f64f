//! # warden-api
//!
//! The boundary between the warden CLI and a container-management backend.
//!
//! The CLI never constructs a backend directly: it receives an
//! [`ApiFactory`](api::ApiFactory) and obtains at most one
//! [`ContainerApi`](api::ContainerApi) handle per invocation. Every call on
//! the boundary is synchronous and returns an explicit
//! [`Result`](warden_common::error::Result); failure kinds cross the
//! boundary untouched so the CLI can map them to exit codes.

pub mod api;
pub mod spec;
pub mod stats;

pub use api::{ApiFactory, Container, ContainerApi, ListPolicy};
pub use spec::{ContainerSpec, CpuSpec, MemorySpec};
pub use stats::{ContainerStats, CpuStats, MemoryStats};
