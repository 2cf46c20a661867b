//! Configuration management for the moodlog application.
//!
//! This module handles loading and validating configuration settings from environment
//! variables, with sensible defaults. It supports configuring the data directory,
//! the default export directory, and the weather provider.
//!
//! # Environment Variables
//!
//! - `MOODLOG_DIR`: Path to the data directory (defaults to ~/.local/share/moodlog)
//! - `MOODLOG_EXPORT_DIR`: Directory for export files (defaults to the current directory)
//! - `OPENWEATHER_API_KEY`: API key for the weather provider (weather is disabled without it)
//! - `MOODLOG_WEATHER_URL`: Override for the weather endpoint
//! - `MOODLOG_WEATHER_TIMEOUT_SECS`: Request timeout for weather lookups (defaults to 10)
//! - `MOODLOG_LAT` / `MOODLOG_LON`: Coordinates used for weather lookups
//! - `HOME`: Used for expanding the default data directory path

use crate::constants;
use crate::errors::{AppError, AppResult};
use std::env;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    /// Builds coordinates after checking both values are in range.
    ///
    /// ```
    /// use moodlog::config::Coordinates;
    ///
    /// assert!(Coordinates::new(51.5, -0.12).is_ok());
    /// assert!(Coordinates::new(91.0, 0.0).is_err());
    /// ```
    pub fn new(latitude: f64, longitude: f64) -> AppResult<Self> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(AppError::Config(format!(
                "Latitude must be between -90 and 90, got {}",
                latitude
            )));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(AppError::Config(format!(
                "Longitude must be between -180 and 180, got {}",
                longitude
            )));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }
}

/// Configuration for the moodlog application.
///
/// # Examples
///
/// Creating a configuration manually:
/// ```
/// use moodlog::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     data_dir: PathBuf::from("/path/to/data"),
///     export_dir: PathBuf::from("/path/to/exports"),
///     ..Config::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone)]
pub struct Config {
    /// Directory holding the key-value store.
    pub data_dir: PathBuf,

    /// Directory export files are written to unless overridden on the command line.
    pub export_dir: PathBuf,

    /// API key for the weather provider. Weather lookups fail with
    /// `WeatherError::MissingApiKey` when this is `None`.
    pub weather_api_key: Option<String>,

    /// Current-conditions endpoint of the weather provider.
    pub weather_url: String,

    /// Timeout applied to each weather request.
    pub weather_timeout: Duration,

    /// Position used for weather lookups, standing in for device geolocation.
    pub location: Option<Coordinates>,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("data_dir", &"[REDACTED_PATH]")
            .field("export_dir", &"[REDACTED_PATH]")
            .field(
                "weather_api_key",
                &self
                    .weather_api_key
                    .as_ref()
                    .map(|_| constants::REDACTED_PLACEHOLDER),
            )
            .field("weather_url", &self.weather_url)
            .field("weather_timeout", &self.weather_timeout)
            .field("location", &self.location.map(|_| "[REDACTED_LOCATION]"))
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_dir: PathBuf::from(""),
            export_dir: PathBuf::from(""),
            weather_api_key: None,
            weather_url: constants::DEFAULT_WEATHER_URL.to_string(),
            weather_timeout: Duration::from_secs(constants::DEFAULT_WEATHER_TIMEOUT_SECS),
            location: None,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables with sensible defaults.
    ///
    /// Paths are expanded using `shellexpand` to handle `~` and environment
    /// variable references.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if:
    /// - Path expansion fails or yields a relative data directory
    /// - Only one of `MOODLOG_LAT` / `MOODLOG_LON` is set, or either is not a number in range
    /// - The weather timeout is not a positive integer
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use moodlog::Config;
    ///
    /// match Config::load() {
    ///     Ok(config) => println!("Loaded config: {:?}", config),
    ///     Err(err) => eprintln!("Failed to load config: {}", err),
    /// }
    /// ```
    pub fn load() -> AppResult<Self> {
        let data_dir_str = env::var(constants::ENV_VAR_MOODLOG_DIR).unwrap_or_else(|_| {
            let home = env::var(constants::ENV_VAR_HOME).unwrap_or_default();
            format!("{}/{}", home, constants::DEFAULT_DATA_SUBDIR)
        });
        let data_dir = expand_path(&data_dir_str)?;

        let export_dir = match env::var(constants::ENV_VAR_MOODLOG_EXPORT_DIR) {
            Ok(dir) => expand_path(&dir)?,
            Err(_) => env::current_dir()?,
        };

        let weather_api_key = env::var(constants::ENV_VAR_WEATHER_API_KEY)
            .ok()
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty());

        let weather_url = env::var(constants::ENV_VAR_WEATHER_URL)
            .unwrap_or_else(|_| constants::DEFAULT_WEATHER_URL.to_string());

        let weather_timeout = match env::var(constants::ENV_VAR_WEATHER_TIMEOUT) {
            Ok(raw) => parse_timeout(&raw)?,
            Err(_) => Duration::from_secs(constants::DEFAULT_WEATHER_TIMEOUT_SECS),
        };

        let location = parse_location(
            env::var(constants::ENV_VAR_LATITUDE).ok().as_deref(),
            env::var(constants::ENV_VAR_LONGITUDE).ok().as_deref(),
        )?;

        let config = Config {
            data_dir,
            export_dir,
            weather_api_key,
            weather_url,
            weather_timeout,
            location,
        };
        config.validate()?;

        Ok(config)
    }

    /// Validates that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` when the data directory is empty or relative,
    /// the export directory is empty, the weather URL is empty, or the timeout is zero.
    pub fn validate(&self) -> AppResult<()> {
        if self.data_dir.as_os_str().is_empty() {
            return Err(AppError::Config("Data directory path is empty".to_string()));
        }

        if !self.data_dir.is_absolute() {
            return Err(AppError::Config(
                "Data directory must be an absolute path".to_string(),
            ));
        }

        if self.export_dir.as_os_str().is_empty() {
            return Err(AppError::Config(
                "Export directory path is empty".to_string(),
            ));
        }

        if self.weather_url.trim().is_empty() {
            return Err(AppError::Config("Weather URL is empty".to_string()));
        }

        if self.weather_timeout.is_zero() {
            return Err(AppError::Config(
                "Weather timeout must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }
}

fn expand_path(raw: &str) -> AppResult<PathBuf> {
    let expanded = shellexpand::full(raw)
        .map_err(|e| AppError::Config(format!("Failed to expand path: {}", e)))?;
    Ok(PathBuf::from(expanded.into_owned()))
}

fn parse_timeout(raw: &str) -> AppResult<Duration> {
    let secs: u64 = raw.trim().parse().map_err(|_| {
        AppError::Config(format!(
            "{} must be a positive integer, got '{}'",
            constants::ENV_VAR_WEATHER_TIMEOUT,
            raw
        ))
    })?;
    if secs == 0 {
        return Err(AppError::Config(format!(
            "{} must be a positive integer, got '{}'",
            constants::ENV_VAR_WEATHER_TIMEOUT,
            raw
        )));
    }
    Ok(Duration::from_secs(secs))
}

fn parse_location(lat: Option<&str>, lon: Option<&str>) -> AppResult<Option<Coordinates>> {
    match (lat, lon) {
        (None, None) => Ok(None),
        (Some(lat), Some(lon)) => {
            let latitude = parse_degrees(constants::ENV_VAR_LATITUDE, lat)?;
            let longitude = parse_degrees(constants::ENV_VAR_LONGITUDE, lon)?;
            Coordinates::new(latitude, longitude).map(Some)
        }
        _ => Err(AppError::Config(format!(
            "{} and {} must be set together",
            constants::ENV_VAR_LATITUDE,
            constants::ENV_VAR_LONGITUDE
        ))),
    }
}

fn parse_degrees(name: &str, raw: &str) -> AppResult<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| AppError::Config(format!("{} must be a number, got '{}'", name, raw)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::tempdir;

    fn setup() {
        env::remove_var(constants::ENV_VAR_MOODLOG_DIR);
        env::remove_var(constants::ENV_VAR_MOODLOG_EXPORT_DIR);
        env::remove_var(constants::ENV_VAR_WEATHER_API_KEY);
        env::remove_var(constants::ENV_VAR_WEATHER_URL);
        env::remove_var(constants::ENV_VAR_WEATHER_TIMEOUT);
        env::remove_var(constants::ENV_VAR_LATITUDE);
        env::remove_var(constants::ENV_VAR_LONGITUDE);
    }

    fn valid_config() -> Config {
        Config {
            data_dir: PathBuf::from("/var/lib/moodlog"),
            export_dir: PathBuf::from("/tmp"),
            ..Config::default()
        }
    }

    #[test]
    fn test_debug_impl_redacts_sensitive_info() {
        let config = Config {
            data_dir: PathBuf::from("/home/username/private/moodlog"),
            weather_api_key: Some("secret-key-123".to_string()),
            location: Some(Coordinates::new(51.5, -0.12).unwrap()),
            ..valid_config()
        };

        let debug_output = format!("{:?}", config);

        assert!(debug_output.contains("[REDACTED_PATH]"));
        assert!(debug_output.contains("[REDACTED]"));
        assert!(debug_output.contains("[REDACTED_LOCATION]"));
        assert!(!debug_output.contains("secret-key-123"));
        assert!(!debug_output.contains("/home/username/private/moodlog"));
        assert!(!debug_output.contains("51.5"));
    }

    #[test]
    fn test_default_uses_public_endpoint_without_key() {
        let config = Config::default();
        assert_eq!(config.weather_url, constants::DEFAULT_WEATHER_URL);
        assert!(config.weather_api_key.is_none());
        assert_eq!(config.weather_timeout, Duration::from_secs(10));
    }

    #[test]
    #[serial]
    fn test_load_with_custom_dirs() {
        setup();
        let data = tempdir().unwrap();
        let exports = tempdir().unwrap();
        env::set_var(constants::ENV_VAR_MOODLOG_DIR, data.path());
        env::set_var(constants::ENV_VAR_MOODLOG_EXPORT_DIR, exports.path());

        let config = Config::load().unwrap();
        setup();

        assert_eq!(config.data_dir, data.path());
        assert_eq!(config.export_dir, exports.path());
        assert!(config.location.is_none());
    }

    #[test]
    #[serial]
    fn test_load_reads_weather_settings() {
        setup();
        let data = tempdir().unwrap();
        env::set_var(constants::ENV_VAR_MOODLOG_DIR, data.path());
        env::set_var(constants::ENV_VAR_WEATHER_API_KEY, "  abc123  ");
        env::set_var(constants::ENV_VAR_WEATHER_URL, "http://localhost:9999/weather");
        env::set_var(constants::ENV_VAR_WEATHER_TIMEOUT, "3");
        env::set_var(constants::ENV_VAR_LATITUDE, "40.7");
        env::set_var(constants::ENV_VAR_LONGITUDE, "-74.0");

        let config = Config::load().unwrap();
        setup();

        assert_eq!(config.weather_api_key.as_deref(), Some("abc123"));
        assert_eq!(config.weather_url, "http://localhost:9999/weather");
        assert_eq!(config.weather_timeout, Duration::from_secs(3));
        assert_eq!(
            config.location,
            Some(Coordinates {
                latitude: 40.7,
                longitude: -74.0
            })
        );
    }

    #[test]
    #[serial]
    fn test_blank_api_key_is_treated_as_missing() {
        setup();
        let data = tempdir().unwrap();
        env::set_var(constants::ENV_VAR_MOODLOG_DIR, data.path());
        env::set_var(constants::ENV_VAR_WEATHER_API_KEY, "   ");

        let config = Config::load().unwrap();
        setup();

        assert!(config.weather_api_key.is_none());
    }

    #[test]
    #[serial]
    fn test_load_rejects_half_a_location() {
        setup();
        let data = tempdir().unwrap();
        env::set_var(constants::ENV_VAR_MOODLOG_DIR, data.path());
        env::set_var(constants::ENV_VAR_LATITUDE, "40.7");

        let result = Config::load();
        setup();

        match result {
            Err(AppError::Config(msg)) => assert!(msg.contains("must be set together")),
            _ => panic!("Expected Config error for partial location"),
        }
    }

    #[test]
    #[serial]
    fn test_load_rejects_zero_timeout() {
        setup();
        let data = tempdir().unwrap();
        env::set_var(constants::ENV_VAR_MOODLOG_DIR, data.path());
        env::set_var(constants::ENV_VAR_WEATHER_TIMEOUT, "0");

        let result = Config::load();
        setup();

        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_validate_valid_config() {
        assert!(valid_config().validate().is_ok());
    }

    #[test]
    fn test_validate_empty_data_dir() {
        let config = Config {
            data_dir: PathBuf::from(""),
            ..valid_config()
        };

        match config.validate() {
            Err(AppError::Config(message)) => {
                assert!(message.contains("Data directory path is empty"));
            }
            _ => panic!("Expected Config error about empty data directory"),
        }
    }

    #[test]
    fn test_validate_relative_data_dir() {
        let config = Config {
            data_dir: PathBuf::from("relative/path"),
            ..valid_config()
        };

        match config.validate() {
            Err(AppError::Config(message)) => {
                assert!(message.contains("must be an absolute path"));
            }
            _ => panic!("Expected Config error about relative path"),
        }
    }

    #[test]
    fn test_parse_location_rejects_out_of_range() {
        let result = parse_location(Some("12"), Some("200"));
        match result {
            Err(AppError::Config(message)) => assert!(message.contains("Longitude")),
            _ => panic!("Expected Config error for longitude"),
        }
    }

    #[test]
    fn test_parse_location_rejects_garbage() {
        assert!(parse_location(Some("north"), Some("0")).is_err());
        assert!(parse_location(Some("NaN"), Some("0")).is_err());
    }
}
