//! # warden-engine
//!
//! A minimal local implementation of the [`warden-api`](warden_api) backend
//! boundary over the cgroups v2 unified hierarchy.
//!
//! Container names are absolute slash-separated paths mapped onto cgroup
//! directories under a configurable root (`/sys/fs/cgroup` by default).
//! The engine persists nothing of its own: the hierarchy is the state.

mod cgroup;
pub mod local;

pub use local::{LocalApi, LocalApiFactory};
