use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

pub const DEFAULT_BASE_URL: &str = "https://api.shecodes.io/weather/v1";

/// City searched on startup when the user gives none.
pub const DEFAULT_CITY: &str = "Omagh";

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// api_key = "..."
/// default_city = "Omagh"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Credential for the weather API. Captured by `weather-dash configure`
    /// and kept out of source and version control.
    pub api_key: Option<String>,

    #[serde(default = "default_city")]
    pub default_city: String,

    /// Weather API base URL; overridable mainly for testing against a mock.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_city() -> String {
    DEFAULT_CITY.to_string()
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            default_city: default_city(),
            base_url: default_base_url(),
        }
    }
}

impl Config {
    /// Return the configured API key, with a setup hint when absent.
    pub fn api_key(&self) -> Result<&str> {
        self.api_key.as_deref().ok_or_else(|| {
            anyhow!(
                "No API key configured.\n\
                 Hint: run `weather-dash configure` and enter your weather API key."
            )
        })
    }

    pub fn set_api_key(&mut self, api_key: String) {
        self.api_key = Some(api_key);
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// Load config from disk, or return defaults if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            // First run: no config file, return defaults.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "weather-dash", "weather-dash")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_key_errors_when_not_set() {
        let cfg = Config::default();
        let err = cfg.api_key().unwrap_err();

        assert!(err.to_string().contains("No API key configured"));
        assert!(err.to_string().contains("weather-dash configure"));
    }

    #[test]
    fn set_api_key_makes_config_usable() {
        let mut cfg = Config::default();
        assert!(!cfg.is_configured());

        cfg.set_api_key("KEY".into());

        assert!(cfg.is_configured());
        assert_eq!(cfg.api_key().expect("key must exist"), "KEY");
    }

    #[test]
    fn defaults_cover_city_and_base_url() {
        let cfg = Config::default();
        assert_eq!(cfg.default_city, "Omagh");
        assert_eq!(cfg.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn partial_toml_fills_in_defaults() {
        let cfg: Config = toml::from_str("api_key = \"KEY\"").expect("valid TOML");

        assert_eq!(cfg.api_key.as_deref(), Some("KEY"));
        assert_eq!(cfg.default_city, DEFAULT_CITY);
        assert_eq!(cfg.base_url, DEFAULT_BASE_URL);
    }
}
