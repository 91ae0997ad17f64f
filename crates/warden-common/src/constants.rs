//! System-wide constants.

/// Cgroups v2 unified hierarchy mount point, the default engine root.
pub const CGROUP_V2_PATH: &str = "/sys/fs/cgroup";

/// Default output style name when no `--output-style` flag is given.
pub const DEFAULT_OUTPUT_STYLE: &str = "pairs";

/// Root container name: the top of the container hierarchy.
pub const ROOT_CONTAINER: &str = "/";
