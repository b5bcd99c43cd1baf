//! Configuration loading and management

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use fs2::FileExt;
use serde::{Deserialize, Serialize};

use crate::progression::Seed;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Starting state for a freshly initialized ledger
    #[serde(default)]
    pub seed: Seed,

    /// Notification channel settings
    #[serde(default)]
    pub notifications: NotificationSettings,
}

/// Which notification channels the CLI drives
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationSettings {
    /// Print transient toast lines to the terminal
    pub toasts: bool,
    /// Record durable entries in the notification center
    pub center: bool,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            toasts: true,
            center: true,
        }
    }
}

impl Config {
    /// Get the data directory path (~/.kudos/)
    pub fn data_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".kudos")
    }

    /// Get the default config file path (~/.kudos/config.toml)
    pub fn config_path() -> PathBuf {
        Self::data_dir().join("config.toml")
    }

    /// Config file path inside a specific data directory
    pub fn config_path_in(dir: &Path) -> PathBuf {
        dir.join("config.toml")
    }

    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Load configuration from the default data directory.
    /// If no config exists, auto-creates one with defaults.
    pub fn load() -> Result<Self> {
        Self::load_from_dir(&Self::data_dir())
    }

    /// Load configuration from a specific data directory.
    /// If no config exists there, auto-creates one with defaults.
    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        let path = Self::config_path_in(dir);
        if !path.exists() {
            Self::auto_init(dir)?;
        }
        Self::from_file(&path)
    }

    /// Save configuration to a file with atomic write and file locking.
    ///
    /// An exclusive lock keeps concurrent processes from interleaving
    /// writes, and the temp-file + rename keeps a crash from leaving a
    /// half-written config behind.
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let content = toml::to_string_pretty(self).with_context(|| "Failed to serialize config")?;

        // Lock file is separate from the config to survive the rename
        let lock_path = path.with_extension("toml.lock");
        let lock_file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&lock_path)
            .with_context(|| format!("Failed to create lock file: {}", lock_path.display()))?;

        lock_file
            .lock_exclusive()
            .with_context(|| "Failed to acquire config lock")?;

        let temp_path = path.with_extension("toml.tmp");
        let mut temp_file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_path)
            .with_context(|| format!("Failed to create temp file: {}", temp_path.display()))?;

        temp_file
            .write_all(content.as_bytes())
            .with_context(|| "Failed to write config content")?;

        temp_file
            .sync_all()
            .with_context(|| "Failed to sync config file")?;

        std::fs::rename(&temp_path, path)
            .with_context(|| format!("Failed to rename config file: {}", path.display()))?;

        // Lock is released when lock_file is dropped
        Ok(())
    }

    /// Create the default config file when none exists.
    ///
    /// Takes the same lock as `save_to_file` so two processes racing on
    /// first run produce exactly one file.
    fn auto_init(dir: &Path) -> Result<()> {
        let config_path = Self::config_path_in(dir);

        if !dir.exists() {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create data directory: {}", dir.display()))?;
        }

        let lock_path = config_path.with_extension("toml.lock");
        let lock_file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&lock_path)
            .with_context(|| format!("Failed to create lock file: {}", lock_path.display()))?;

        lock_file
            .lock_exclusive()
            .with_context(|| "Failed to acquire config lock for auto-init")?;

        // Re-check after acquiring the lock; another process may have won
        if config_path.exists() {
            return Ok(());
        }

        let content = toml::to_string_pretty(&Self::default())
            .with_context(|| "Failed to serialize default config")?;

        let temp_path = config_path.with_extension("toml.tmp");
        let mut temp_file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_path)
            .with_context(|| format!("Failed to create temp file: {}", temp_path.display()))?;

        temp_file
            .write_all(content.as_bytes())
            .with_context(|| "Failed to write config content")?;

        temp_file
            .sync_all()
            .with_context(|| "Failed to sync config file")?;

        std::fs::rename(&temp_path, &config_path)
            .with_context(|| format!("Failed to rename config file: {}", config_path.display()))?;

        eprintln!("Created {}", config_path.display());
        Ok(())
    }
}
