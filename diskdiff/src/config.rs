// src/config.rs
use anyhow::{Context as _, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Static configuration: walk roots, category rule lists and the report
/// log directory. Loaded once, never mutated afterwards.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub log_dir: PathBuf,
    pub dirs_to_check: Vec<PathBuf>,
    pub file_categories: FileRules,
    pub dir_categories: DirRules,
}

/// Exact file paths excluded from change detection entirely.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FileRules {
    pub ignored: Vec<PathBuf>,
}

/// Directory-prefix rule lists, one per category. Prefixes are canonical
/// absolute paths without trailing separators; matching is pure string
/// comparison on the parent directory.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DirRules {
    pub ignored: Vec<String>,
    pub unimportant: Vec<String>,
    pub notable: Vec<String>,
    pub key: Vec<String>,
}

impl Config {
    /// Loads configuration from a TOML file, or returns the built-in
    /// defaults when no path is given. Missing sections fall back to their
    /// defaults field by field.
    ///
    /// # Errors
    ///
    /// This function may return an error if:
    /// * The configuration file cannot be read
    /// * The file is not valid TOML for the expected shape
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_dir: PathBuf::from("/tmp/disk-diff"),
            dirs_to_check: vec![PathBuf::from("/")],
            file_categories: FileRules {
                ignored: vec![PathBuf::from("/var/lib/rsyslog/imjournal.state")],
            },
            dir_categories: DirRules {
                ignored: [
                    // Permissions hazards
                    "/mnt",
                    // Very large and rarely relevant
                    "/proc",
                    "/sys",
                    "/var/lib/docker",
                    // Cluttery
                    "/root/.vscode-server",
                    "/run/docker/runtime-runc",
                    "/run/log/journal",
                    // Everything unimportant is skipped outright for now
                    "/dev",
                    "/run",
                    "/usr/lib/.build-id",
                    "/var/cache",
                    "/var/run",
                ]
                .map(String::from)
                .to_vec(),
                unimportant: [
                    "/dev",
                    "/run",
                    "/usr/lib/.build-id",
                    "/var/cache",
                    "/var/run",
                ]
                .map(String::from)
                .to_vec(),
                notable: [
                    "/lib",
                    "/tmp",
                    "/usr/include",
                    "/usr/lib",
                    "/usr/share",
                    "/usr/src",
                ]
                .map(String::from)
                .to_vec(),
                key: [
                    "/usr/local",
                    "/var",
                    "/root",
                    "/home",
                    "/opt",
                    "/etc",
                    "/bin",
                    "/sbin",
                    "/usr/bin",
                    "/usr/sbin",
                    "/usr/local/bin",
                    "/usr/local/sbin",
                    "/usr/lib/systemd/system",
                ]
                .map(String::from)
                .to_vec(),
            },
        }
    }
}
