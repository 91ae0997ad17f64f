//! Long-flag surface, parsed with clap after short-flag normalization.

use std::path::PathBuf;

use clap::Parser;
use warden_common::config::CliConfig;

/// warden — command-line front end for a container management backend.
///
/// clap's built-in `--help`/`--version` are disabled: help, version, and the
/// command tree are terminal outcomes of the dispatcher, selected by the
/// flags below.
#[derive(Parser, Debug)]
#[command(
    name = "warden",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Cli {
    /// Data output style: values, pairs, long.
    #[arg(long, default_value = warden_common::constants::DEFAULT_OUTPUT_STYLE)]
    pub output_style: String,

    /// Print the command list with short help and exit.
    #[arg(long)]
    pub print_help: bool,

    /// Print the registered command tree and exit.
    #[arg(long)]
    pub print_cmd_tree: bool,

    /// Print the registered command tree with help text and exit.
    #[arg(long)]
    pub print_cmd_tree_long: bool,

    /// Print the warden version and exit.
    #[arg(long)]
    pub version: bool,

    /// Print the warden version with build metadata and exit.
    #[arg(long)]
    pub version_long: bool,

    /// Recurse into subcontainers where a command supports it.
    #[arg(long)]
    pub recursive: bool,

    /// Force destructive operations.
    #[arg(long)]
    pub force: bool,

    /// Do not wait for spawned processes to exit.
    #[arg(long)]
    pub no_wait: bool,

    /// Render structured results as raw serialized bytes.
    #[arg(long)]
    pub binary: bool,

    /// Path to a container specification file.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Command tokens followed by command-specific arguments.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

impl Cli {
    /// Merges the long-flag pass into the configuration produced by the
    /// short-flag pass. Booleans combine with OR; a valued long flag wins
    /// over its short spelling.
    pub fn apply(&self, config: &mut CliConfig) {
        config.print_help |= self.print_help;
        config.print_version |= self.version;
        config.print_version_long |= self.version_long;
        config.print_cmd_tree |= self.print_cmd_tree;
        config.print_cmd_tree_long |= self.print_cmd_tree_long;
        config.recursive |= self.recursive;
        config.force |= self.force;
        config.no_wait |= self.no_wait;
        config.binary |= self.binary;
        if let Some(path) = &self.config {
            config.config_file = Some(path.clone());
        }
    }
}
