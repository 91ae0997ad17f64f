//! Short-flag dialect normalization.
//!
//! warden inherits a legacy single-character flag dialect that does not fit
//! the general long-flag parser: each recognized short flag is a side effect
//! on the [`CliConfig`] and is removed from the vector, and `-c` consumes
//! the following token as its value. This pass must run before the long-flag
//! parser so that both spellings of a flag land in the same config cell.

use std::path::PathBuf;

use warden_common::config::CliConfig;
use warden_common::error::{Result, WardenError};

/// Translates recognized short flags into `config` cells and returns the
/// remaining argument vector.
///
/// The program name at index 0 and every unrecognized token (including long
/// flags and positionals) are preserved in their original relative order.
///
/// # Errors
///
/// Returns an error if `-c` appears as the final token, with no value to
/// consume. The caller must abort before any further flag parsing.
pub fn parse_short_flags(args: &[String], config: &mut CliConfig) -> Result<Vec<String>> {
    let mut out = Vec::with_capacity(args.len());
    if let Some(program) = args.first() {
        out.push(program.clone());
    }

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-v" | "-V" => config.print_version = true,
            "-r" => config.recursive = true,
            "-f" => config.force = true,
            "-h" => config.print_help = true,
            "-n" => config.no_wait = true,
            "-b" => config.binary = true,
            "-c" => {
                let Some(value) = args.get(i + 1) else {
                    return Err(WardenError::invalid_argument(
                        "config file not specified with -c flag",
                    ));
                };
                config.config_file = Some(PathBuf::from(value));
                i += 1;
            }
            _ => out.push(args[i].clone()),
        }
        i += 1;
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn boolean_short_flags_set_config_cells() {
        let mut config = CliConfig::default();
        let out = parse_short_flags(
            &args(&["warden", "-v", "-r", "-f", "-h", "-n", "-b"]),
            &mut config,
        )
        .expect("should normalize");
        assert_eq!(out, args(&["warden"]));
        assert!(config.print_version);
        assert!(config.recursive);
        assert!(config.force);
        assert!(config.print_help);
        assert!(config.no_wait);
        assert!(config.binary);
    }

    #[test]
    fn capital_v_also_selects_version() {
        let mut config = CliConfig::default();
        let _ = parse_short_flags(&args(&["warden", "-V"]), &mut config)
            .expect("should normalize");
        assert!(config.print_version);
    }

    #[test]
    fn config_flag_consumes_the_next_token() {
        let mut config = CliConfig::default();
        let out = parse_short_flags(
            &args(&["warden", "-c", "/etc/warden.json", "spec"]),
            &mut config,
        )
        .expect("should normalize");
        assert_eq!(out, args(&["warden", "spec"]));
        assert_eq!(
            config.config_file.as_deref(),
            Some(std::path::Path::new("/etc/warden.json"))
        );
    }

    #[test]
    fn trailing_config_flag_aborts_normalization() {
        let mut config = CliConfig::default();
        let err = parse_short_flags(&args(&["warden", "spec", "-c"]), &mut config)
            .expect_err("should fail");
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn unrecognized_tokens_keep_their_relative_order() {
        let mut config = CliConfig::default();
        let out = parse_short_flags(
            &args(&["warden", "spec", "-b", "-x", "mycontainer", "--binary"]),
            &mut config,
        )
        .expect("should normalize");
        assert_eq!(out, args(&["warden", "spec", "-x", "mycontainer", "--binary"]));
        assert!(config.binary);
    }

    #[test]
    fn normalization_is_idempotent() {
        let mut config = CliConfig::default();
        let once = parse_short_flags(
            &args(&["warden", "-r", "list", "containers", "/x"]),
            &mut config,
        )
        .expect("should normalize");
        let twice =
            parse_short_flags(&once, &mut config.clone()).expect("should normalize");
        assert_eq!(once, twice);
    }

    #[test]
    fn empty_vector_stays_empty() {
        let mut config = CliConfig::default();
        let out = parse_short_flags(&[], &mut config).expect("should normalize");
        assert!(out.is_empty());
        assert_eq!(config, CliConfig::default());
    }
}
