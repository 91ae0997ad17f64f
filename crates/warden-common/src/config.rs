//! Resolved CLI configuration for a single warden invocation.
//!
//! The struct is populated in exactly two passes before dispatch: the
//! short-flag normalizer first, then the long-flag parser (long flags win
//! for valued options). It is never mutated once dispatch begins; command
//! handlers receive it by reference instead of reading ambient state.

use std::path::PathBuf;

/// Flag state shared between the short-flag dialect and the long flags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliConfig {
    /// Print the command list with short help and exit (`-h`, `--print-help`).
    pub print_help: bool,
    /// Print the version string and exit (`-v`, `-V`, `--version`).
    pub print_version: bool,
    /// Print the version string with build metadata and exit (`--version-long`).
    pub print_version_long: bool,
    /// Print the registered command tree and exit (`--print-cmd-tree`).
    pub print_cmd_tree: bool,
    /// Print the command tree with help text and exit (`--print-cmd-tree-long`).
    pub print_cmd_tree_long: bool,
    /// Recurse into subcontainers where a command supports it (`-r`).
    pub recursive: bool,
    /// Force destructive operations (`-f`).
    pub force: bool,
    /// Do not wait for spawned processes to exit (`-n`).
    pub no_wait: bool,
    /// Render structured results as raw serialized bytes (`-b`, `--binary`).
    pub binary: bool,
    /// Path to a container specification file (`-c <path>`, `--config`).
    pub config_file: Option<PathBuf>,
}
