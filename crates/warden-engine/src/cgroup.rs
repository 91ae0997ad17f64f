//! Cgroups v2 path mapping and control-file helpers.

use std::path::{Path, PathBuf};

use warden_common::constants::ROOT_CONTAINER;
use warden_common::error::{Result, WardenError};

/// Validates a container name: absolute, slash-separated, no empty or
/// parent components.
pub(crate) fn validate_name(name: &str) -> Result<()> {
    if !name.starts_with('/') {
        return Err(WardenError::invalid_argument(format!(
            "container name must be absolute: {name}"
        )));
    }
    if name != "/" && name.ends_with('/') {
        return Err(WardenError::invalid_argument(format!(
            "container name must not end with '/': {name}"
        )));
    }
    for component in name.split('/').skip(1) {
        if name != "/" && component.is_empty() {
            return Err(WardenError::invalid_argument(format!(
                "container name has an empty component: {name}"
            )));
        }
        if component == "." || component == ".." {
            return Err(WardenError::invalid_argument(format!(
                "container name must not contain '.' or '..': {name}"
            )));
        }
    }
    Ok(())
}

/// Maps a container name onto its cgroup directory under `root`.
pub(crate) fn container_path(root: &Path, name: &str) -> Result<PathBuf> {
    validate_name(name)?;
    let relative = name.trim_start_matches('/');
    if relative.is_empty() {
        Ok(root.to_path_buf())
    } else {
        Ok(root.join(relative))
    }
}

/// Joins a subcontainer onto a container name.
pub(crate) fn child_name(parent: &str, child: &str) -> String {
    if parent == ROOT_CONTAINER {
        format!("/{child}")
    } else {
        format!("{parent}/{child}")
    }
}

/// Reads a control file inside a cgroup directory.
pub(crate) fn read_control(dir: &Path, file: &str) -> Result<String> {
    let path = dir.join(file);
    std::fs::read_to_string(&path).map_err(|e| WardenError::Io { path, source: e })
}

/// Writes a control file inside a cgroup directory.
pub(crate) fn write_control(dir: &Path, file: &str, value: &str) -> Result<()> {
    let path = dir.join(file);
    std::fs::write(&path, value).map_err(|e| WardenError::Io { path, source: e })
}

/// Parses a cgroup limit value: `max` means no limit.
pub(crate) fn parse_limit(raw: &str) -> Result<Option<u64>> {
    let raw = raw.trim();
    if raw == "max" {
        return Ok(None);
    }
    raw.parse::<u64>().map(Some).map_err(|_| WardenError::Unknown {
        message: format!("unparseable cgroup limit value: {raw}"),
    })
}

/// Parses a newline-separated PID/TID list (`cgroup.procs`, `cgroup.threads`).
pub(crate) fn parse_pid_list(raw: &str) -> Result<Vec<u32>> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| {
            line.parse::<u32>().map_err(|_| WardenError::Unknown {
                message: format!("unparseable pid in cgroup listing: {line}"),
            })
        })
        .collect()
}

/// Extracts the container name from `/proc/<pid>/cgroup` contents.
///
/// Only the cgroup v2 entry (`0::<path>`) is considered.
pub(crate) fn parse_proc_cgroup(contents: &str) -> Option<String> {
    contents
        .lines()
        .find_map(|line| line.strip_prefix("0::"))
        .map(|path| {
            let path = path.trim();
            if path.is_empty() {
                ROOT_CONTAINER.to_string()
            } else {
                path.to_string()
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_accepts_root_and_nested_names() {
        assert!(validate_name("/").is_ok());
        assert!(validate_name("/test").is_ok());
        assert!(validate_name("/jobs/batch/47").is_ok());
    }

    #[test]
    fn validate_rejects_relative_names() {
        assert!(validate_name("test").is_err());
        assert!(validate_name("").is_err());
    }

    #[test]
    fn validate_rejects_parent_components() {
        assert!(validate_name("/a/../b").is_err());
        assert!(validate_name("/a/.").is_err());
    }

    #[test]
    fn validate_rejects_empty_components() {
        assert!(validate_name("/a//b").is_err());
        assert!(validate_name("/a/").is_err());
    }

    #[test]
    fn container_path_maps_under_root() {
        let path = container_path(Path::new("/sys/fs/cgroup"), "/jobs/batch")
            .expect("valid name");
        assert_eq!(path, Path::new("/sys/fs/cgroup/jobs/batch"));
    }

    #[test]
    fn container_path_of_root_is_the_root() {
        let path = container_path(Path::new("/sys/fs/cgroup"), "/").expect("valid name");
        assert_eq!(path, Path::new("/sys/fs/cgroup"));
    }

    #[test]
    fn child_name_joins_without_double_slash() {
        assert_eq!(child_name("/", "a"), "/a");
        assert_eq!(child_name("/a", "b"), "/a/b");
    }

    #[test]
    fn parse_limit_reads_max_as_unlimited() {
        assert_eq!(parse_limit("max\n").expect("valid"), None);
        assert_eq!(parse_limit("10\n").expect("valid"), Some(10));
        assert!(parse_limit("banana").is_err());
    }

    #[test]
    fn parse_pid_list_skips_blank_lines() {
        let pids = parse_pid_list("12\n\n345\n").expect("valid");
        assert_eq!(pids, vec![12, 345]);
    }

    #[test]
    fn parse_proc_cgroup_finds_v2_entry() {
        let contents = "1:name=systemd:/init.scope\n0::/jobs/batch\n";
        assert_eq!(parse_proc_cgroup(contents).as_deref(), Some("/jobs/batch"));
    }

    #[test]
    fn parse_proc_cgroup_maps_empty_path_to_root() {
        assert_eq!(parse_proc_cgroup("0::\n").as_deref(), Some("/"));
        assert_eq!(parse_proc_cgroup("1:cpu:/x\n"), None);
    }
}
