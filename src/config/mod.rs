use crate::models::UserConfig;
use crate::services::HISTORY_FILE_NAME;
use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use directories::ProjectDirs;
use std::fs;

/// Name of the YAML settings file inside the config directory
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Configuration manager for the per-user settings file and cache locations.
///
/// Manages:
/// - User config (`config.yaml`): defaults for the command line flags
/// - Cache directory: the assignment history and optional log files
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config_dir: Utf8PathBuf,
    cache_dir: Utf8PathBuf,
    user_config_path: Utf8PathBuf,
}

impl ConfigManager {
    /// Create a ConfigManager over explicit config and cache directories.
    ///
    /// Nothing is created on disk until something is saved or recorded.
    pub fn new<P: AsRef<Utf8Path>, Q: AsRef<Utf8Path>>(config_dir: P, cache_dir: Q) -> Self {
        let config_dir = config_dir.as_ref().to_path_buf();

        Self {
            user_config_path: config_dir.join(CONFIG_FILE_NAME),
            cache_dir: cache_dir.as_ref().to_path_buf(),
            config_dir,
        }
    }

    /// Create a ConfigManager over the platform's per-user directories.
    pub fn from_project_dirs(app_name: &str) -> Result<Self> {
        let dirs = ProjectDirs::from("", "", app_name)
            .context("Could not determine a home directory for config and cache files")?;

        let config_dir = Utf8PathBuf::try_from(dirs.config_dir().to_path_buf())
            .context("Config directory is not valid UTF-8")?;
        let cache_dir = Utf8PathBuf::try_from(dirs.cache_dir().to_path_buf())
            .context("Cache directory is not valid UTF-8")?;

        Ok(Self::new(config_dir, cache_dir))
    }

    /// Use an explicit settings file instead of `config.yaml` in the config dir.
    pub fn with_user_config_path<P: AsRef<Utf8Path>>(mut self, path: P) -> Self {
        self.user_config_path = path.as_ref().to_path_buf();
        self
    }

    /// Load the user configuration file.
    ///
    /// # Returns
    /// The loaded UserConfig, or default if file doesn't exist
    pub fn load_user_config(&self) -> Result<UserConfig> {
        if !self.user_config_path.exists() {
            tracing::debug!(
                "User config file not found at {}, using defaults",
                self.user_config_path
            );
            return Ok(UserConfig::default());
        }

        let file_contents = fs::read_to_string(&self.user_config_path).with_context(|| {
            format!("Failed to read user config: {}", self.user_config_path)
        })?;

        let config: UserConfig = serde_yaml_ng::from_str(&file_contents).with_context(|| {
            format!("Failed to parse user config: {}", self.user_config_path)
        })?;

        tracing::debug!("Loaded user config from {}", self.user_config_path);
        Ok(config)
    }

    /// Save the user configuration file.
    ///
    /// # Arguments
    /// * `config` - The UserConfig to save
    pub fn save_user_config(&self, config: &UserConfig) -> Result<()> {
        if let Some(parent) = self.user_config_path.parent() {
            if !parent.as_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create config directory: {}", parent))?;
            }
        }

        let yaml_string =
            serde_yaml_ng::to_string(config).context("Failed to serialize user config to YAML")?;

        fs::write(&self.user_config_path, yaml_string).with_context(|| {
            format!("Failed to write user config: {}", self.user_config_path)
        })?;

        tracing::info!("Saved user config to {}", self.user_config_path);
        Ok(())
    }

    /// Location of the assignment history, honouring a configured override.
    ///
    /// A relative override is taken relative to the cache directory.
    pub fn history_path(&self, config: &UserConfig) -> Utf8PathBuf {
        match &config.iconic_settings.history_file {
            Some(path) if path.is_absolute() => path.clone(),
            Some(path) => self.cache_dir.join(path),
            None => self.cache_dir.join(HISTORY_FILE_NAME),
        }
    }

    /// Directory for rotating log files
    pub fn log_dir(&self) -> Utf8PathBuf {
        self.cache_dir.join("logs")
    }

    /// Get the configuration directory path.
    pub fn config_dir(&self) -> &Utf8Path {
        &self.config_dir
    }

    /// Get the cache directory path.
    pub fn cache_dir(&self) -> &Utf8Path {
        &self.cache_dir
    }

    pub fn user_config_path(&self) -> &Utf8Path {
        &self.user_config_path
    }
}
