use crate::api::client::DEFAULT_API_BASE_URL;
use crate::errors::{AppError, AppResult};
use crate::render::OutputFormat;
use crate::session::SessionStore;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Overrides the configuration directory (used by tests and packaging).
pub const CONFIG_DIR_ENV: &str = "EVENTHOST_CONFIG_DIR";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    #[serde(default = "default_banner_auto_hide_secs")]
    pub banner_auto_hide_secs: u64,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_file: Option<String>,
    #[serde(default)]
    pub output: OutputFormat,
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}
fn default_banner_auto_hide_secs() -> u64 {
    5
}
fn default_request_timeout_secs() -> u64 {
    30
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            banner_auto_hide_secs: default_banner_auto_hide_secs(),
            request_timeout_secs: default_request_timeout_secs(),
            session_file: None,
            output: OutputFormat::default(),
        }
    }
}

impl Config {
    /// Return the configuration directory: `$EVENTHOST_CONFIG_DIR`, else
    /// `~/.eventhost`
    pub fn config_dir() -> PathBuf {
        if let Some(dir) = env::var_os(CONFIG_DIR_ENV) {
            return PathBuf::from(dir);
        }
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".eventhost")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("eventhost.conf")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))
    }

    pub fn session_path(&self) -> PathBuf {
        match &self.session_file {
            Some(p) => expand_tilde(p),
            None => SessionStore::default_path(),
        }
    }

    pub fn banner_ttl(&self) -> Duration {
        Duration::from_secs(self.banner_auto_hide_secs)
    }

    /// `request_timeout_secs: 0` disables the timeout.
    pub fn request_timeout(&self) -> Option<Duration> {
        match self.request_timeout_secs {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        }
    }

    /// Write the default configuration file. In test mode nothing is
    /// written; the path it would use is returned either way.
    pub fn init_all(is_test: bool) -> AppResult<PathBuf> {
        let path = Self::config_file();
        if is_test {
            return Ok(path);
        }

        fs::create_dir_all(Self::config_dir())?;
        if path.exists() {
            return Err(AppError::Config(format!(
                "{} already exists; use `eventhost config --edit` to change it",
                path.display()
            )));
        }

        let yaml = serde_yaml::to_string(&Config::default())?;
        fs::write(&path, yaml)?;
        Ok(path)
    }
}
