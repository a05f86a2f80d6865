//! Configuration management for branch mirroring
//!
//! Configuration is loaded with the following priority (highest to lowest):
//! 1. CLI flags
//! 2. Environment variables (MIRROR_*)
//! 3. Config file (~/.config/branch-mirror/config.toml)
//! 4. Default values

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Remote repository mirrored when nothing else is configured
pub const DEFAULT_REMOTE_URL: &str = "https://github.com/go-git/go-git";

/// Settings for a single mirror run
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct MirrorConfig {
    /// URL (or local path) of the repository to mirror
    pub remote_url: String,

    /// Root directory that receives every clone
    pub output_dir: PathBuf,

    /// Subdirectory of `output_dir` holding the full primary clone
    pub main_dir_name: String,

    /// Remote whose references are enumerated
    pub remote_name: String,

    /// Stream clone and fetch progress to stdout
    pub progress: bool,
}

impl Default for MirrorConfig {
    fn default() -> Self {
        Self {
            remote_url: DEFAULT_REMOTE_URL.to_string(),
            output_dir: PathBuf::from("./output"),
            main_dir_name: "mainRepository".to_string(),
            remote_name: "origin".to_string(),
            progress: true,
        }
    }
}

impl MirrorConfig {
    /// Path of the primary clone
    pub fn main_repo_path(&self) -> PathBuf {
        self.output_dir.join(&self.main_dir_name)
    }

    /// Path of the clone for a branch, given its short name
    ///
    /// Branch names containing `/` map to nested directories.
    pub fn branch_path(&self, short_name: &str) -> PathBuf {
        self.output_dir.join(short_name)
    }

    /// Check that the settings describe a runnable mirror
    pub fn validate(&self) -> Result<()> {
        let remote_url = self.remote_url.trim();
        if remote_url.is_empty() {
            return Err(Error::Config("remote_url must not be empty".to_string()));
        }

        // Only URL-shaped remotes are parsed; local paths and scp-like
        // `git@host:path` remotes are handed to git as-is.
        if remote_url.contains("://") {
            let parsed = url::Url::parse(remote_url).map_err(|e| {
                Error::Config(format!("Invalid remote URL '{}': {}", remote_url, e))
            })?;
            match parsed.scheme() {
                "http" | "https" | "ssh" | "git" | "file" => {}
                other => {
                    return Err(Error::Config(format!(
                        "Unsupported URL scheme '{}' in {}",
                        other, remote_url
                    )))
                }
            }
        }

        if self.output_dir.as_os_str().is_empty() {
            return Err(Error::Config("output_dir must not be empty".to_string()));
        }

        if self.main_dir_name.is_empty()
            || self.main_dir_name.contains('/')
            || self.main_dir_name.contains('\\')
        {
            return Err(Error::Config(format!(
                "main_dir_name must be a single path component, got '{}'",
                self.main_dir_name
            )));
        }

        if self.remote_name.is_empty() {
            return Err(Error::Config("remote_name must not be empty".to_string()));
        }

        Ok(())
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Mirror configuration
    pub mirror: MirrorConfig,
}

impl Config {
    /// Load configuration from the default config file location
    ///
    /// Returns default config if file doesn't exist
    pub fn load() -> Result<Self> {
        if let Some(path) = Self::default_config_path() {
            if path.exists() {
                return Self::load_from_file(&path);
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(Error::Io)?;
        toml::from_str(&contents)
            .map_err(|e| Error::Config(format!("Failed to parse config {}: {}", path.display(), e)))
    }

    /// Get the default config file path
    ///
    /// Returns `~/.config/branch-mirror/config.toml` on Unix
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("branch-mirror").join("config.toml"))
    }

    /// Apply environment variable overrides
    ///
    /// Supported variables:
    /// - MIRROR_URL: Repository to mirror
    /// - MIRROR_OUTPUT: Output root directory
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    fn with_overrides_from(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(url) = lookup("MIRROR_URL") {
            self.mirror.remote_url = url;
        }

        if let Some(output) = lookup("MIRROR_OUTPUT") {
            self.mirror.output_dir = PathBuf::from(output);
        }

        self
    }

    /// Apply CLI flag overrides
    pub fn with_cli_overrides(
        mut self,
        remote_url: Option<String>,
        output_dir: Option<PathBuf>,
        no_progress: bool,
    ) -> Self {
        if let Some(url) = remote_url {
            self.mirror.remote_url = url;
        }

        if let Some(dir) = output_dir {
            self.mirror.output_dir = dir;
        }

        if no_progress {
            self.mirror.progress = false;
        }

        self
    }

    /// Load configuration with all overrides applied
    ///
    /// Priority: CLI > env > config file > defaults. An explicit `config_file`
    /// must exist; the default location is optional.
    pub fn load_with_overrides(
        config_file: Option<&Path>,
        remote_url: Option<String>,
        output_dir: Option<PathBuf>,
        no_progress: bool,
    ) -> Result<Self> {
        let base = match config_file {
            Some(path) => Self::load_from_file(path)?,
            None => Self::load()?,
        };

        let config = base
            .with_env_overrides()
            .with_cli_overrides(remote_url, output_dir, no_progress);
        config.mirror.validate()?;

        Ok(config)
    }
}
