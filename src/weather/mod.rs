//! Current-weather lookup against an OpenWeather-compatible endpoint.
//!
//! The lookup has two steps, each with its own failure mode: resolving a
//! position (`LocationProvider`) and fetching conditions for it
//! (`WeatherClient`). Neither failure blocks saving an entry.

use crate::config::{Config, Coordinates};
use crate::constants;
use crate::errors::WeatherError;
use crate::journal::WeatherSnapshot;
use crate::theme::WeatherTheme;
use chrono::{DateTime, Local};
use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info};

/// Source of the current position.
pub trait LocationProvider {
    fn current_position(&self) -> Result<Coordinates, WeatherError>;
}

/// Position taken from configuration. With none configured the lookup is
/// treated like a denied permission prompt.
#[derive(Debug, Clone, Copy)]
pub struct ConfiguredLocation(pub Option<Coordinates>);

impl LocationProvider for ConfiguredLocation {
    fn current_position(&self) -> Result<Coordinates, WeatherError> {
        self.0.ok_or(WeatherError::LocationUnavailable)
    }
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    main: ApiMain,
    weather: Vec<ApiCondition>,
    #[serde(default)]
    wind: Option<ApiWind>,
    #[serde(default)]
    name: String,
    #[serde(default)]
    sys: Option<ApiSys>,
}

#[derive(Debug, Deserialize)]
struct ApiMain {
    temp: f64,
    #[serde(default)]
    humidity: Option<u8>,
}

#[derive(Debug, Deserialize)]
struct ApiCondition {
    main: String,
    description: String,
    icon: String,
}

#[derive(Debug, Deserialize)]
struct ApiWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct ApiSys {
    #[serde(default)]
    country: Option<String>,
    #[serde(default)]
    sunrise: Option<i64>,
    #[serde(default)]
    sunset: Option<i64>,
}

/// Current conditions as shown by the weather widget.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReport {
    /// Temperature in degrees Celsius.
    pub temp: f64,
    pub description: String,
    /// Full icon URL.
    pub icon: String,
    /// Condition group, e.g. `Clouds`.
    pub main: String,
    pub humidity: Option<u8>,
    /// Wind speed in metres per second.
    pub wind_speed: Option<f64>,
    pub city: String,
    pub country: Option<String>,
    pub sunrise: Option<DateTime<Local>>,
    pub sunset: Option<DateTime<Local>>,
}

impl WeatherReport {
    fn from_api(response: ApiResponse) -> Result<Self, WeatherError> {
        let condition = response.weather.into_iter().next().ok_or_else(|| {
            WeatherError::InvalidResponse("response contained no weather conditions".to_string())
        })?;
        let sys = response.sys;

        Ok(Self {
            temp: response.main.temp,
            description: condition.description,
            icon: icon_url(&condition.icon),
            main: condition.main,
            humidity: response.main.humidity,
            wind_speed: response.wind.map(|wind| wind.speed),
            city: response.name,
            country: sys.as_ref().and_then(|sys| sys.country.clone()),
            sunrise: sys.as_ref().and_then(|sys| sys.sunrise).and_then(local_time),
            sunset: sys.as_ref().and_then(|sys| sys.sunset).and_then(local_time),
        })
    }

    /// The part of the report stored with an entry.
    pub fn snapshot(&self) -> WeatherSnapshot {
        WeatherSnapshot {
            temp: self.temp,
            description: self.description.clone(),
            icon: self.icon.clone(),
        }
    }

    pub fn theme(&self) -> WeatherTheme {
        WeatherTheme::resolve(Some(&self.description))
    }
}

/// Builds the icon URL for a provider icon code such as `10d`.
///
/// ```
/// assert_eq!(
///     moodlog::weather::icon_url("10d"),
///     "https://openweathermap.org/img/wn/10d@2x.png"
/// );
/// ```
pub fn icon_url(code: &str) -> String {
    format!("{}/{}@2x.png", constants::WEATHER_ICON_BASE_URL, code)
}

fn local_time(unix_secs: i64) -> Option<DateTime<Local>> {
    DateTime::from_timestamp(unix_secs, 0).map(|utc| utc.with_timezone(&Local))
}

/// Blocking client for the current-weather endpoint.
pub struct WeatherClient {
    base_url: String,
    api_key: String,
    client: Client,
}

impl WeatherClient {
    /// Creates a client.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Full current-weather endpoint URL
    /// * `api_key` - Provider API key
    /// * `timeout` - Upper bound for each request
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(WeatherError::Offline)?;

        Ok(Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            client,
        })
    }

    /// Creates a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns `WeatherError::MissingApiKey` when no key is configured.
    pub fn from_config(config: &Config) -> Result<Self, WeatherError> {
        let api_key = config
            .weather_api_key
            .clone()
            .ok_or(WeatherError::MissingApiKey)?;
        Self::new(config.weather_url.clone(), api_key, config.weather_timeout)
    }

    /// Fetches current conditions in metric units.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The provider is not reachable or the request times out
    /// - The API key is rejected (HTTP 401)
    /// - The provider answers with another non-success status or an unusable body
    pub fn current(&self, position: Coordinates) -> Result<WeatherReport, WeatherError> {
        debug!("Requesting current weather from {}", self.base_url);

        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("lat", position.latitude.to_string()),
                ("lon", position.longitude.to_string()),
                ("units", "metric".to_string()),
                ("appid", self.api_key.clone()),
            ])
            .send()
            .map_err(WeatherError::Offline)?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            return Err(WeatherError::Unauthorized);
        }
        if !status.is_success() {
            let error_text = response.text().unwrap_or_default();
            return Err(WeatherError::InvalidResponse(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        let body: ApiResponse = response.json().map_err(|e| {
            WeatherError::InvalidResponse(format!("Failed to parse weather response: {}", e))
        })?;

        let report = WeatherReport::from_api(body)?;
        debug!("Received weather: {}", report.description);
        Ok(report)
    }
}

/// State of the weather widget.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum WeatherStatus {
    #[default]
    Loading,
    Ready(WeatherReport),
    Failed(String),
}

impl WeatherStatus {
    pub fn report(&self) -> Option<&WeatherReport> {
        match self {
            WeatherStatus::Ready(report) => Some(report),
            _ => None,
        }
    }
}

/// Resolves the position and fetches the weather in one step.
pub fn fetch_current(
    location: &dyn LocationProvider,
    client: &WeatherClient,
) -> Result<WeatherReport, WeatherError> {
    let position = location.current_position()?;
    client.current(position)
}

/// Runs a full lookup from configuration and folds the outcome into a widget
/// status. Failures are logged and returned as `Failed`.
pub fn lookup(config: &Config) -> WeatherStatus {
    let result = WeatherClient::from_config(config)
        .and_then(|client| fetch_current(&ConfiguredLocation(config.location), &client));

    match result {
        Ok(report) => {
            info!("Weather lookup succeeded");
            WeatherStatus::Ready(report)
        }
        Err(e) => {
            info!("Weather lookup failed: {}", e);
            WeatherStatus::Failed(e.to_string())
        }
    }
}
