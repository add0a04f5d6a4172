//! Dashboard configuration.
//!
//! Settings come from an optional YAML file (`~/.fyi/config.yaml` unless a
//! path is given) with every field defaulted. The weather API key is never
//! stored in the file: it is read from the environment variable named by
//! `weather.api_key_env`, which may be populated from a `.env` file first.
//!
//! ```yaml
//! weather:
//!   location: "auto:ip"
//!   timeout_secs: 10
//! refresh:
//!   slow_interval_secs: 120
//! capabilities:
//!   weather: false
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{FyiError, Result};
use crate::types::Capabilities;

/// Default weather provider base URL.
pub const DEFAULT_WEATHER_API_BASE_URL: &str = "http://api.weatherapi.com/v1";

/// Environment variable holding the weather API key.
pub const DEFAULT_API_KEY_ENV: &str = "WEATHER_API_KEY";

/// Location hint asking the provider to geolocate the caller's IP.
pub const AUTO_IP_LOCATION: &str = "auto:ip";

/// Top-level dashboard configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Weather provider settings
    pub weather: WeatherConfig,

    /// Refresh cadence
    pub refresh: RefreshConfig,

    /// Which panels are enabled
    pub capabilities: Capabilities,
}

/// Weather provider settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeatherConfig {
    /// Provider base URL (without the `current.json` suffix)
    pub api_base_url: String,

    /// Environment variable holding the API key
    pub api_key_env: String,

    /// Location hint passed as the `q` parameter
    pub location: String,

    /// HTTP request timeout in seconds
    pub timeout_secs: u64,

    /// Fetch once at startup instead of waiting for the first slow tick
    pub fetch_on_start: bool,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_WEATHER_API_BASE_URL.to_string(),
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
            location: AUTO_IP_LOCATION.to_string(),
            timeout_secs: 10,
            fetch_on_start: true,
        }
    }
}

impl WeatherConfig {
    /// HTTP request timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Read the API key from the configured environment variable.
    ///
    /// Returns `None` when the variable is unset or blank.
    pub fn resolve_api_key(&self) -> Option<String> {
        std::env::var(&self.api_key_env)
            .ok()
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
    }
}

/// Refresh cadence for the two periodic triggers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RefreshConfig {
    /// Clock and CPU refresh period in milliseconds
    pub fast_interval_ms: u64,

    /// Weather refresh period in seconds
    pub slow_interval_secs: u64,

    /// Window over which CPU utilization is measured, in milliseconds
    pub cpu_sample_window_ms: u64,
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            fast_interval_ms: 1000,
            slow_interval_secs: 60,
            cpu_sample_window_ms: 200,
        }
    }
}

impl RefreshConfig {
    /// Fast trigger period.
    pub fn fast_interval(&self) -> Duration {
        Duration::from_millis(self.fast_interval_ms)
    }

    /// Slow trigger period.
    pub fn slow_interval(&self) -> Duration {
        Duration::from_secs(self.slow_interval_secs)
    }

    /// CPU measurement window.
    pub fn cpu_sample_window(&self) -> Duration {
        Duration::from_millis(self.cpu_sample_window_ms)
    }
}

impl DashboardConfig {
    /// Load configuration.
    ///
    /// An explicit `path` must exist. Without one, `~/.fyi/config.yaml` is
    /// used when present and defaults otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => match default_config_path() {
                Ok(default) if default.exists() => Self::from_file(&default)?,
                _ => {
                    debug!("no configuration file, using defaults");
                    Self::default()
                }
            },
        };
        config.validate()?;
        Ok(config)
    }

    /// Parse a YAML configuration file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                FyiError::config_not_found(path, e)
            } else {
                FyiError::io("reading config", path, e)
            }
        })?;

        let config: Self = serde_yaml::from_str(&contents).map_err(|e| FyiError::ConfigInvalid {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        debug!(path = %path.display(), "configuration loaded");
        Ok(config)
    }

    /// Reject settings the scheduler cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.refresh.fast_interval_ms == 0 {
            return Err(FyiError::config_validation(
                "refresh.fast_interval_ms must be greater than zero",
            ));
        }
        if self.refresh.slow_interval_secs == 0 {
            return Err(FyiError::config_validation(
                "refresh.slow_interval_secs must be greater than zero",
            ));
        }
        if self.capabilities.weather && self.weather.api_base_url.trim().is_empty() {
            return Err(FyiError::config_validation(
                "weather.api_base_url must not be empty",
            ));
        }
        Ok(())
    }
}

/// Populate the process environment from a `.env` file.
///
/// An explicit `path` must load. Without one, a `.env` in the current
/// directory or its parents is loaded if present. Variables already set in
/// the environment are kept.
pub fn load_env_file(path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => {
            dotenvy::from_path(path).map_err(|e| FyiError::EnvFile {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
            debug!(path = %path.display(), "environment file loaded");
        }
        None => match dotenvy::dotenv() {
            Ok(path) => debug!(path = %path.display(), "environment file loaded"),
            Err(e) if e.not_found() => debug!("no .env file found"),
            Err(e) => {
                return Err(FyiError::EnvFile {
                    path: PathBuf::from(".env"),
                    message: e.to_string(),
                });
            }
        },
    }
    Ok(())
}

/// FYI state directory, `~/.fyi`.
pub fn fyi_home() -> Result<PathBuf> {
    dirs::home_dir()
        .map(|home| home.join(".fyi"))
        .ok_or_else(|| FyiError::internal("home directory could not be determined"))
}

/// Default configuration file path, `~/.fyi/config.yaml`.
pub fn default_config_path() -> Result<PathBuf> {
    Ok(fyi_home()?.join("config.yaml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_temp(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults() {
        let config = DashboardConfig::default();
        assert_eq!(config.weather.api_base_url, "http://api.weatherapi.com/v1");
        assert_eq!(config.weather.api_key_env, "WEATHER_API_KEY");
        assert_eq!(config.weather.location, "auto:ip");
        assert!(config.weather.fetch_on_start);
        assert_eq!(config.refresh.fast_interval(), Duration::from_secs(1));
        assert_eq!(config.refresh.slow_interval(), Duration::from_secs(60));
        assert_eq!(config.capabilities, Capabilities::all());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let file = write_temp(
            "refresh:\n  slow_interval_secs: 120\ncapabilities:\n  weather: false\n",
        );
        let config = DashboardConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.refresh.slow_interval_secs, 120);
        assert_eq!(config.refresh.fast_interval_ms, 1000);
        assert!(!config.capabilities.weather);
        assert!(config.capabilities.metrics);
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let err = DashboardConfig::load(Some(Path::new("/nonexistent/fyi.yaml"))).unwrap_err();
        assert!(matches!(err, FyiError::ConfigNotFound { .. }));
    }

    #[test]
    fn test_invalid_yaml_is_error() {
        let file = write_temp("refresh: [not, a, map");
        let err = DashboardConfig::load(Some(file.path())).unwrap_err();
        assert!(matches!(err, FyiError::ConfigInvalid { .. }));
    }

    #[test]
    fn test_zero_interval_rejected() {
        let file = write_temp("refresh:\n  fast_interval_ms: 0\n");
        let err = DashboardConfig::load(Some(file.path())).unwrap_err();
        assert!(err.to_string().contains("fast_interval_ms"));
    }

    #[test]
    fn test_empty_base_url_only_matters_with_weather() {
        let mut config = DashboardConfig::default();
        config.weather.api_base_url = String::new();
        assert!(config.validate().is_err());

        config.capabilities = config.capabilities.without_weather();
        assert!(config.validate().is_ok());
    }

    #[test]
    #[serial]
    fn test_resolve_api_key_trims_and_rejects_blank() {
        let weather = WeatherConfig {
            api_key_env: "FYI_TEST_RESOLVE_KEY".to_string(),
            ..Default::default()
        };

        // SAFETY: serialized test, no other thread reads this variable
        unsafe { std::env::set_var("FYI_TEST_RESOLVE_KEY", "  abc123 \n") };
        assert_eq!(weather.resolve_api_key().as_deref(), Some("abc123"));

        unsafe { std::env::set_var("FYI_TEST_RESOLVE_KEY", "   ") };
        assert_eq!(weather.resolve_api_key(), None);

        unsafe { std::env::remove_var("FYI_TEST_RESOLVE_KEY") };
        assert_eq!(weather.resolve_api_key(), None);
    }

    #[test]
    #[serial]
    fn test_env_file_populates_environment() {
        let file = write_temp("FYI_TEST_ENV_FILE_KEY=from-dotenv\n");
        // SAFETY: serialized test
        unsafe { std::env::remove_var("FYI_TEST_ENV_FILE_KEY") };

        load_env_file(Some(file.path())).unwrap();
        assert_eq!(
            std::env::var("FYI_TEST_ENV_FILE_KEY").as_deref(),
            Ok("from-dotenv")
        );

        unsafe { std::env::remove_var("FYI_TEST_ENV_FILE_KEY") };
    }

    #[test]
    fn test_missing_explicit_env_file_is_error() {
        let err = load_env_file(Some(Path::new("/nonexistent/.env"))).unwrap_err();
        assert!(matches!(err, FyiError::EnvFile { .. }));
    }
}
