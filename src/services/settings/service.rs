use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;

use crate::models::settings::SchedulerConfig;

const CONFIG_FILE: &str = "scheduler.toml";

/// Loads and saves the scheduler configuration as TOML.
pub struct ConfigService {
    path: PathBuf,
}

impl ConfigService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Service for the platform config directory.
    pub fn from_default_location() -> Result<Self> {
        Ok(Self::new(Self::default_path()?))
    }

    pub fn default_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("com", "KenBoyle", "WeeklyScheduler")
            .ok_or_else(|| anyhow!("Could not determine a config directory"))?;
        Ok(dirs.config_dir().join(CONFIG_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the configuration; a missing file yields the defaults.
    pub fn load(&self) -> Result<SchedulerConfig> {
        if !self.path.exists() {
            log::info!(
                "No scheduler config at {}; using defaults",
                self.path.display()
            );
            return Ok(SchedulerConfig::default());
        }

        let contents = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))?;
        let config = parse(&contents)
            .with_context(|| format!("Invalid scheduler config in {}", self.path.display()))?;

        log::info!("Loaded scheduler config from {}", self.path.display());
        Ok(config)
    }

    /// Save the configuration, creating parent directories as needed.
    pub fn save(&self, config: &SchedulerConfig) -> Result<()> {
        config
            .validate()
            .map_err(|e| anyhow!("Invalid settings: {}", e))?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let contents = toml::to_string_pretty(config).context("Failed to serialize config")?;
        fs::write(&self.path, contents)
            .with_context(|| format!("Failed to write {}", self.path.display()))?;
        Ok(())
    }
}

/// Parse and validate a TOML configuration.
pub fn parse(contents: &str) -> Result<SchedulerConfig> {
    let config: SchedulerConfig = toml::from_str(contents).context("Failed to parse TOML")?;
    config.validate()?;
    Ok(config)
}
