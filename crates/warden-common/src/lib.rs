//! # warden-common
//!
//! Shared error definitions, the resolved CLI configuration model, and
//! constants used across the warden workspace.
//!
//! This crate is the leaf of the dependency graph: it depends on no other
//! internal crate.

pub mod config;
pub mod constants;
pub mod error;
