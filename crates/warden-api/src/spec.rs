//! Container resource specification model.

use serde::{Deserialize, Serialize};

/// Resource specification for a container.
///
/// Absent sections mean "no limit configured", not "zero".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerSpec {
    /// Memory isolation parameters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory: Option<MemorySpec>,
    /// CPU isolation parameters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu: Option<CpuSpec>,
}

impl ContainerSpec {
    /// Returns a spec with only a memory limit set.
    #[must_use]
    pub const fn with_memory_limit(limit: u64) -> Self {
        Self {
            memory: Some(MemorySpec {
                limit: Some(limit),
                reservation: None,
            }),
            cpu: None,
        }
    }
}

/// Memory parameters of a [`ContainerSpec`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemorySpec {
    /// Hard memory limit in bytes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,
    /// Guaranteed memory reservation in bytes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reservation: Option<u64>,
}

/// CPU parameters of a [`ContainerSpec`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CpuSpec {
    /// Relative scheduling weight.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<u64>,
    /// Hard bandwidth limit in microseconds per period.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<u64>,
}
