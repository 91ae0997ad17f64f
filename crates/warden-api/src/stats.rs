//! Container resource usage model.

use serde::{Deserialize, Serialize};

/// Point-in-time resource usage of a container.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerStats {
    /// Memory usage, if the backend tracks it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory: Option<MemoryStats>,
    /// CPU usage, if the backend tracks it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu: Option<CpuStats>,
}

/// Memory usage figures.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryStats {
    /// Current usage in bytes.
    pub usage: u64,
}

/// CPU usage figures.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CpuStats {
    /// Cumulative CPU time consumed, in microseconds.
    pub usage_usec: u64,
}
