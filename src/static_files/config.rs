use crate::error::{EssentialsError, Result};
use crate::utils::get_env_with_prefix;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Static file serving configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct StaticFilesConfig {
    /// Whether static files are served
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// URL path the directory is mounted under
    /// `/` serves files as the router fallback
    #[serde(default = "default_mount_path")]
    pub mount_path: String,

    /// Directory files are read from
    #[serde(default = "default_root")]
    pub root: PathBuf,

    /// Cache-Control max-age in seconds
    #[serde(default = "default_max_age_seconds")]
    pub max_age_seconds: u64,
}

impl Default for StaticFilesConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            mount_path: default_mount_path(),
            root: default_root(),
            max_age_seconds: default_max_age_seconds(),
        }
    }
}

impl StaticFilesConfig {
    /// Create a new StaticFilesConfig builder
    pub fn builder() -> StaticFilesConfigBuilder {
        StaticFilesConfigBuilder::new()
    }

    /// Load static file configuration from environment variables
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(enabled) = get_env_with_prefix("STATIC_ENABLED") {
            config.enabled = enabled.parse().unwrap_or(true);
        }

        if let Some(root) = get_env_with_prefix("STATIC_ROOT") {
            config.root = PathBuf::from(root);
        }

        if let Some(mount_path) = get_env_with_prefix("STATIC_MOUNT_PATH") {
            config.mount_path = mount_path;
        }

        if let Some(max_age) = get_env_with_prefix("STATIC_MAX_AGE") {
            match max_age.parse() {
                Ok(seconds) => config.max_age_seconds = seconds,
                Err(_) => tracing::warn!(value = %max_age, "Ignoring invalid static file max-age"),
            }
        }

        config
    }

    pub fn max_age(&self) -> Duration {
        Duration::from_secs(self.max_age_seconds)
    }

    /// Check the configuration can be mounted
    ///
    /// # Errors
    ///
    /// - [`EssentialsError::InvalidMaxAge`] when `max_age_seconds` is 0
    /// - [`EssentialsError::InvalidConfig`] for an empty root or a mount
    ///   path that does not start with `/`
    pub fn validate(&self) -> Result<()> {
        if self.max_age_seconds == 0 {
            return Err(EssentialsError::InvalidMaxAge);
        }

        if self.root.as_os_str().is_empty() {
            return Err(EssentialsError::invalid_config(
                "Static file root must not be empty",
            ));
        }

        if !self.mount_path.starts_with('/') {
            return Err(EssentialsError::invalid_config(format!(
                "Static file mount path must start with '/', got: {}",
                self.mount_path
            )));
        }

        Ok(())
    }
}

/// Builder for StaticFilesConfig
#[must_use = "builder does nothing until you call build()"]
pub struct StaticFilesConfigBuilder {
    config: StaticFilesConfig,
}

impl StaticFilesConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: StaticFilesConfig::default(),
        }
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.config.enabled = enabled;
        self
    }

    pub fn mount_path(mut self, path: impl Into<String>) -> Self {
        self.config.mount_path = path.into();
        self
    }

    pub fn root(mut self, root: impl Into<PathBuf>) -> Self {
        self.config.root = root.into();
        self
    }

    /// Set max-age; sub-second precision is truncated
    pub fn max_age(mut self, max_age: Duration) -> Self {
        self.config.max_age_seconds = max_age.as_secs();
        self
    }

    pub fn max_age_seconds(mut self, seconds: u64) -> Self {
        self.config.max_age_seconds = seconds;
        self
    }

    pub fn build(self) -> StaticFilesConfig {
        self.config
    }
}

impl Default for StaticFilesConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn default_enabled() -> bool {
    true
}

fn default_mount_path() -> String {
    "/".to_string()
}

fn default_root() -> PathBuf {
    PathBuf::from("public")
}

fn default_max_age_seconds() -> u64 {
    86400 // 1 day
}
