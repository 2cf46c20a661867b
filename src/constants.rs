//! Constants used throughout the application.
//!
//! This module contains all constants used in the moodlog application, organized
//! into logical groups. Having constants centralized makes them easier to find,
//! modify, and reference consistently.

// Application Metadata
/// The name of the application.
pub const APP_NAME: &str = "moodlog";
/// The description of the application used in CLI help text.
pub const APP_DESCRIPTION: &str =
    "A daily mood journal with weather themes, trend charts, and CSV/PDF export";

// CLI Arguments & Defaults
/// Log format identifier for plain text.
pub const LOG_FORMAT_TEXT: &str = "text";
/// Log format identifier for JSON.
pub const LOG_FORMAT_JSON: &str = "json";
/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";
/// Log level used when `--verbose` is passed.
pub const VERBOSE_LOG_LEVEL: &str = "debug";

// Configuration Keys & Environment Variables
/// Environment variable for the moodlog data directory.
pub const ENV_VAR_MOODLOG_DIR: &str = "MOODLOG_DIR";
/// Environment variable for the default export directory.
pub const ENV_VAR_MOODLOG_EXPORT_DIR: &str = "MOODLOG_EXPORT_DIR";
/// Environment variable holding the OpenWeather API key.
pub const ENV_VAR_WEATHER_API_KEY: &str = "OPENWEATHER_API_KEY";
/// Environment variable overriding the weather endpoint.
pub const ENV_VAR_WEATHER_URL: &str = "MOODLOG_WEATHER_URL";
/// Environment variable for the request timeout of the weather provider.
pub const ENV_VAR_WEATHER_TIMEOUT: &str = "MOODLOG_WEATHER_TIMEOUT_SECS";
/// Environment variable for the latitude used for weather lookups.
pub const ENV_VAR_LATITUDE: &str = "MOODLOG_LAT";
/// Environment variable for the longitude used for weather lookups.
pub const ENV_VAR_LONGITUDE: &str = "MOODLOG_LON";
/// Standard environment variable for the user's home directory.
pub const ENV_VAR_HOME: &str = "HOME";
/// Default sub-directory for moodlog data within the user's home directory.
pub const DEFAULT_DATA_SUBDIR: &str = ".local/share/moodlog";
/// Placeholder string for redacted information in debug output.
pub const REDACTED_PLACEHOLDER: &str = "[REDACTED]";

// Storage
/// Key under which the entry collection is stored.
pub const ENTRIES_KEY: &str = "moodEntries";
/// File name of the key-value store inside the data directory.
pub const STORE_FILE_NAME: &str = "store.json";
/// File name of the advisory lock guarding the store.
pub const STORE_LOCK_FILE_NAME: &str = "store.lock";
/// Default POSIX permissions for newly created directories (owner read/write/execute).
#[cfg(unix)]
pub const DEFAULT_DIR_PERMISSIONS: u32 = 0o700;
/// Default POSIX permissions for newly created files (owner read/write).
#[cfg(unix)]
pub const DEFAULT_FILE_PERMISSIONS: u32 = 0o600;

// Date/Time Logic
/// Format used to stamp new entries (e.g. "1/15/2024").
pub const ENTRY_DATE_FORMAT: &str = "%-m/%-d/%Y";
/// Month-first date format accepted when parsing stored entries.
pub const DATE_FORMAT_US: &str = "%m/%d/%Y";
/// Date format string for ISO date format (YYYY-MM-DD).
pub const DATE_FORMAT_ISO: &str = "%Y-%m-%d";
/// Time format used for sunrise and sunset.
pub const CLOCK_TIME_FORMAT: &str = "%-I:%M:%S %p";
/// Number of days covered by the weekly trend window.
pub const TREND_WEEK_DAYS: i64 = 7;
/// Number of months covered by the monthly trend window.
pub const TREND_MONTHS: u32 = 1;

// Entry Form
/// Message shown when the form is missing a mood or a note.
pub const VALIDATION_MESSAGE: &str = "Please select a mood and write a note!";
/// Message shown after an entry is stored.
pub const SAVED_MESSAGE: &str = "Entry saved successfully!";

// Trends
/// Maximum number of note characters shown in a trend tooltip.
pub const NOTE_EXCERPT_CHARS: usize = 30;
/// Trend value used for moods outside the taxonomy.
pub const DEFAULT_TREND_VALUE: u8 = 3;
/// Chart color used for moods outside the taxonomy.
pub const DEFAULT_MOOD_COLOR: &str = "#60a5fa";

// Weather Provider
/// Default OpenWeather current-conditions endpoint.
pub const DEFAULT_WEATHER_URL: &str = "https://api.openweathermap.org/data/2.5/weather";
/// Base URL for weather condition icons.
pub const WEATHER_ICON_BASE_URL: &str = "https://openweathermap.org/img/wn";
/// Default timeout for weather requests, in seconds.
pub const DEFAULT_WEATHER_TIMEOUT_SECS: u64 = 10;

// Export
/// Prefix of every export file name.
pub const EXPORT_FILE_PREFIX: &str = "mood-journal-export";
/// Header row of the CSV export.
pub const CSV_HEADER: &str = "Date,Mood,Note,Temperature,Weather";

// Logging Configuration
/// Service name used in tracing spans and structured logs.
pub const TRACING_SERVICE_NAME: &str = "moodlog";
/// Name for the root tracing span covering an application invocation.
pub const TRACING_ROOT_SPAN_NAME: &str = "app_invocation";
