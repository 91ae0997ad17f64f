//! Backend implementation over a local cgroups v2 hierarchy.

use std::path::{Path, PathBuf};

use warden_api::{ApiFactory, Container, ContainerApi, ContainerSpec, ContainerStats, ListPolicy};
use warden_api::spec::{CpuSpec, MemorySpec};
use warden_api::stats::{CpuStats, MemoryStats};
use warden_common::error::{Result, WardenError};

use crate::cgroup;

/// Default CPU bandwidth period in microseconds, used when writing `cpu.max`.
const CPU_PERIOD_USEC: u64 = 100_000;

/// Container API backed by cgroup directories under a fixed root.
#[derive(Debug)]
pub struct LocalApi {
    root: PathBuf,
    proc_root: PathBuf,
}

impl LocalApi {
    /// Creates an API over the system hierarchy (`/sys/fs/cgroup`, `/proc`).
    #[must_use]
    pub fn new() -> Self {
        Self::with_roots(
            PathBuf::from(warden_common::constants::CGROUP_V2_PATH),
            PathBuf::from("/proc"),
        )
    }

    /// Creates an API over arbitrary roots. Used by tests.
    #[must_use]
    pub const fn with_roots(root: PathBuf, proc_root: PathBuf) -> Self {
        Self { root, proc_root }
    }
}

impl Default for LocalApi {
    fn default() -> Self {
        Self::new()
    }
}

impl ContainerApi for LocalApi {
    fn detect(&self, pid: u32) -> Result<String> {
        let path = self.proc_root.join(pid.to_string()).join("cgroup");
        let contents =
            std::fs::read_to_string(&path).map_err(|e| WardenError::Io { path, source: e })?;
        cgroup::parse_proc_cgroup(&contents).ok_or(WardenError::NotFound {
            kind: "cgroup membership of process",
            id: pid.to_string(),
        })
    }

    fn get(&self, name: &str) -> Result<Box<dyn Container>> {
        let path = cgroup::container_path(&self.root, name)?;
        if !path.is_dir() {
            return Err(WardenError::NotFound {
                kind: "container",
                id: name.to_string(),
            });
        }
        Ok(Box::new(LocalContainer {
            name: name.to_string(),
            path,
        }))
    }

    fn create(&self, name: &str, spec: &ContainerSpec) -> Result<Box<dyn Container>> {
        let path = cgroup::container_path(&self.root, name)?;
        if path.is_dir() {
            return Err(WardenError::AlreadyExists {
                kind: "container",
                id: name.to_string(),
            });
        }
        std::fs::create_dir_all(&path).map_err(|e| WardenError::Io {
            path: path.clone(),
            source: e,
        })?;
        apply_spec(&path, spec)?;
        tracing::info!(name, path = %path.display(), "container created");
        Ok(Box::new(LocalContainer {
            name: name.to_string(),
            path,
        }))
    }

    fn destroy(&self, name: &str) -> Result<()> {
        let path = cgroup::container_path(&self.root, name)?;
        if !path.is_dir() {
            return Err(WardenError::NotFound {
                kind: "container",
                id: name.to_string(),
            });
        }
        std::fs::remove_dir(&path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::DirectoryNotEmpty {
                WardenError::FailedPrecondition {
                    message: format!("container still has subcontainers: {name}"),
                }
            } else {
                WardenError::Io { path, source: e }
            }
        })?;
        tracing::info!(name, "container destroyed");
        Ok(())
    }
}

/// Writes the spec's limits into the cgroup's control files.
fn apply_spec(path: &Path, spec: &ContainerSpec) -> Result<()> {
    if let Some(memory) = &spec.memory {
        if let Some(limit) = memory.limit {
            cgroup::write_control(path, "memory.max", &limit.to_string())?;
        }
        if let Some(reservation) = memory.reservation {
            cgroup::write_control(path, "memory.low", &reservation.to_string())?;
        }
    }
    if let Some(cpu) = &spec.cpu {
        if let Some(weight) = cpu.weight {
            cgroup::write_control(path, "cpu.weight", &weight.to_string())?;
        }
        if let Some(max) = cpu.max {
            cgroup::write_control(path, "cpu.max", &format!("{max} {CPU_PERIOD_USEC}"))?;
        }
    }
    Ok(())
}

/// Handle to one cgroup-backed container.
#[derive(Debug)]
pub struct LocalContainer {
    name: String,
    path: PathBuf,
}

impl LocalContainer {
    /// Reads a control file, treating a missing file as an absent setting.
    fn read_optional(&self, file: &str) -> Result<Option<String>> {
        if self.path.join(file).is_file() {
            cgroup::read_control(&self.path, file).map(Some)
        } else {
            Ok(None)
        }
    }
}

impl Container for LocalContainer {
    fn name(&self) -> &str {
        &self.name
    }

    fn spec(&self) -> Result<ContainerSpec> {
        let mut spec = ContainerSpec::default();

        let limit = match self.read_optional("memory.max")? {
            Some(raw) => cgroup::parse_limit(&raw)?,
            None => None,
        };
        let reservation = match self.read_optional("memory.low")? {
            Some(raw) => cgroup::parse_limit(&raw)?,
            None => None,
        };
        if limit.is_some() || reservation.is_some() {
            spec.memory = Some(MemorySpec { limit, reservation });
        }

        let weight = match self.read_optional("cpu.weight")? {
            Some(raw) => cgroup::parse_limit(&raw)?,
            None => None,
        };
        let max = match self.read_optional("cpu.max")? {
            // cpu.max holds "<quota> <period>"; the quota may be "max".
            Some(raw) => cgroup::parse_limit(raw.split_whitespace().next().unwrap_or("max"))?,
            None => None,
        };
        if weight.is_some() || max.is_some() {
            spec.cpu = Some(CpuSpec { weight, max });
        }

        Ok(spec)
    }

    fn stats(&self) -> Result<ContainerStats> {
        let mut stats = ContainerStats::default();

        if let Some(raw) = self.read_optional("memory.current")? {
            if let Some(usage) = cgroup::parse_limit(&raw)? {
                stats.memory = Some(MemoryStats { usage });
            }
        }
        if let Some(raw) = self.read_optional("cpu.stat")? {
            let usage_usec = raw
                .lines()
                .find_map(|line| line.strip_prefix("usage_usec "))
                .map(|v| cgroup::parse_limit(v))
                .transpose()?
                .flatten();
            if let Some(usage_usec) = usage_usec {
                stats.cpu = Some(CpuStats { usage_usec });
            }
        }

        Ok(stats)
    }

    fn list_subcontainers(&self, policy: ListPolicy) -> Result<Vec<String>> {
        let mut names = Vec::new();
        collect_subcontainers(&self.path, &self.name, policy, &mut names)?;
        names.sort();
        Ok(names)
    }

    fn list_processes(&self, policy: ListPolicy) -> Result<Vec<u32>> {
        collect_pids(&self.path, "cgroup.procs", policy)
    }

    fn list_threads(&self, policy: ListPolicy) -> Result<Vec<u32>> {
        collect_pids(&self.path, "cgroup.threads", policy)
    }

    fn run(&self, command: &[String], no_wait: bool) -> Result<u32> {
        let Some((program, args)) = command.split_first() else {
            return Err(WardenError::invalid_argument("no command to run"));
        };
        let mut child = std::process::Command::new(program)
            .args(args)
            .spawn()
            .map_err(|e| WardenError::Io {
                path: PathBuf::from(program),
                source: e,
            })?;
        let pid = child.id();
        // The child must not survive outside the container: if it cannot be
        // moved in, kill and reap it before reporting the failure.
        if let Err(e) = cgroup::write_control(&self.path, "cgroup.procs", &pid.to_string()) {
            let _ = child.kill();
            let _ = child.wait();
            return Err(e);
        }
        tracing::debug!(pid, container = %self.name, "command started");
        if !no_wait {
            let _status = child.wait().map_err(|e| WardenError::Io {
                path: PathBuf::from(program),
                source: e,
            })?;
        }
        Ok(pid)
    }

    fn enter(&self, pids: &[u32]) -> Result<()> {
        // In order, first failure wins; earlier pids stay moved.
        for pid in pids {
            cgroup::write_control(&self.path, "cgroup.procs", &pid.to_string())?;
        }
        tracing::debug!(count = pids.len(), container = %self.name, "processes entered");
        Ok(())
    }

    fn kill_all(&self) -> Result<()> {
        cgroup::write_control(&self.path, "cgroup.kill", "1")?;
        tracing::info!(container = %self.name, "killed all processes");
        Ok(())
    }
}

fn collect_subcontainers(
    path: &Path,
    name: &str,
    policy: ListPolicy,
    out: &mut Vec<String>,
) -> Result<()> {
    for entry in std::fs::read_dir(path).map_err(|e| WardenError::Io {
        path: path.to_path_buf(),
        source: e,
    })? {
        let entry = entry.map_err(|e| WardenError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        if !entry.path().is_dir() {
            continue;
        }
        let child = cgroup::child_name(name, &entry.file_name().to_string_lossy());
        if policy == ListPolicy::Recursive {
            collect_subcontainers(&entry.path(), &child, policy, out)?;
        }
        out.push(child);
    }
    Ok(())
}

fn collect_pids(path: &Path, file: &str, policy: ListPolicy) -> Result<Vec<u32>> {
    let mut pids = cgroup::parse_pid_list(&cgroup::read_control(path, file)?)?;
    if policy == ListPolicy::Recursive {
        for entry in std::fs::read_dir(path).map_err(|e| WardenError::Io {
            path: path.to_path_buf(),
            source: e,
        })? {
            let entry = entry.map_err(|e| WardenError::Io {
                path: path.to_path_buf(),
                source: e,
            })?;
            if entry.path().is_dir() {
                pids.extend(collect_pids(&entry.path(), file, policy)?);
            }
        }
    }
    Ok(pids)
}

/// Factory producing [`LocalApi`] handles, injected into the dispatcher.
#[derive(Debug)]
pub struct LocalApiFactory {
    root: PathBuf,
    proc_root: PathBuf,
}

impl LocalApiFactory {
    /// Factory over the system hierarchy.
    #[must_use]
    pub fn new() -> Self {
        Self::with_roots(
            PathBuf::from(warden_common::constants::CGROUP_V2_PATH),
            PathBuf::from("/proc"),
        )
    }

    /// Factory over arbitrary roots. Used by tests.
    #[must_use]
    pub const fn with_roots(root: PathBuf, proc_root: PathBuf) -> Self {
        Self { root, proc_root }
    }
}

impl Default for LocalApiFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiFactory for LocalApiFactory {
    fn create_api(&self) -> Result<Box<dyn ContainerApi>> {
        if !self.root.is_dir() {
            return Err(WardenError::Unavailable {
                message: format!("cgroup hierarchy not mounted at {}", self.root.display()),
            });
        }
        Ok(Box::new(LocalApi::with_roots(
            self.root.clone(),
            self.proc_root.clone(),
        )))
    }
}
