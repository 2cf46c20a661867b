//! Error handling utilities for the moodlog application.
//!
//! This module provides the central error type `AppError` which represents all
//! possible error conditions that might occur in the application, as well as the
//! convenience type alias `AppResult` for functions that can return these errors.
//!
//! Domain-specific failures live in their own enums (`StorageError`,
//! `ValidationError`, `ExportError`, `WeatherError`) and convert into
//! `AppError` through `#[from]`, so `?` works across module boundaries.

use std::path::PathBuf;
use thiserror::Error;

/// Represents errors that can occur while reading or writing the key-value store.
///
/// # Examples
///
/// ```
/// use moodlog::errors::StorageError;
/// use std::path::PathBuf;
/// use std::io::{self, ErrorKind};
///
/// let error = StorageError::Lock {
///     path: PathBuf::from("/data/store.lock"),
///     source: io::Error::new(ErrorKind::PermissionDenied, "permission denied"),
/// };
///
/// assert!(format!("{}", error).contains("Failed to lock"));
/// ```
#[derive(Debug, Error)]
pub enum StorageError {
    /// Acquiring the advisory store lock failed.
    #[error("Failed to lock the journal store at {path}: {source}. Check that the data directory is writable.")]
    Lock {
        /// Path of the lock file
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A value could not be encoded as JSON.
    #[error("Failed to serialize journal data: {0}")]
    Serialize(#[source] serde_json::Error),

    /// A stored value is not in the expected shape and was left untouched.
    #[error("Stored value under {key} is not a JSON array; leaving it unchanged: {source}")]
    Malformed {
        /// Store key holding the value
        key: String,
        /// The parse failure
        #[source]
        source: serde_json::Error,
    },
}

/// Errors raised by the entry form before anything is stored.
///
/// Both variants render the same user-facing prompt.
///
/// ```
/// use moodlog::errors::ValidationError;
///
/// let error = ValidationError::MissingNote;
/// assert_eq!(format!("{}", error), "Please select a mood and write a note!");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// No mood was selected.
    #[error("{}", crate::constants::VALIDATION_MESSAGE)]
    MissingMood,

    /// The note is empty or whitespace.
    #[error("{}", crate::constants::VALIDATION_MESSAGE)]
    MissingNote,
}

/// Errors that abort an export attempt.
///
/// An export that fails never leaves a partial file behind.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The journal has no entries.
    #[error("No entries to export")]
    NoEntries,

    /// The PDF document could not be assembled.
    #[error("PDF export failed: {0}")]
    Pdf(String),

    /// The export file could not be written.
    #[error("Export failed while writing {path}: {source}")]
    Write {
        /// Destination of the export
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// Errors from the location lookup or the weather provider.
///
/// Weather failures never block saving an entry; callers render them as the
/// widget's error state.
///
/// ```
/// use moodlog::errors::WeatherError;
///
/// let error = WeatherError::LocationUnavailable;
/// assert!(format!("{}", error).contains("Location permission denied"));
/// ```
#[derive(Debug, Error)]
pub enum WeatherError {
    /// No API key is configured.
    #[error("Weather is unavailable: no API key configured. Set OPENWEATHER_API_KEY to enable it.")]
    MissingApiKey,

    /// No coordinates are available.
    #[error("Location permission denied. Set MOODLOG_LAT and MOODLOG_LON to enable weather.")]
    LocationUnavailable,

    /// The provider could not be reached.
    #[error("Failed to fetch weather: {0}")]
    Offline(#[source] reqwest::Error),

    /// The provider rejected the API key.
    #[error("Failed to fetch weather: the API key was rejected")]
    Unauthorized,

    /// The provider answered with something we could not use.
    #[error("Failed to fetch weather: {0}")]
    InvalidResponse(String),
}

/// Represents all possible errors that can occur in the moodlog application.
///
/// This enum is the central error type used across the application, with variants
/// for different error categories. It uses `thiserror` for deriving the `Error` trait
/// implementation and formatted error messages.
///
/// # Examples
///
/// Creating a configuration error:
/// ```
/// use moodlog::errors::AppError;
///
/// let error = AppError::Config("Missing data directory".to_string());
/// assert_eq!(format!("{}", error), "Configuration error: Missing data directory");
/// ```
///
/// Converting from an IO error:
/// ```
/// use moodlog::errors::AppError;
/// use std::io::{self, ErrorKind};
///
/// let io_error = io::Error::new(ErrorKind::NotFound, "file not found");
/// let app_error: AppError = io_error.into();
///
/// match app_error {
///     AppError::Io(inner) => assert_eq!(inner.kind(), ErrorKind::NotFound),
///     _ => panic!("Expected Io variant"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Errors related to configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input/output errors from filesystem operations.
    ///
    /// This variant automatically converts from `std::io::Error` through the `From` trait.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Errors related to the key-value store.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// The entry form was incomplete.
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// An export attempt failed.
    #[error("{0}")]
    Export(#[from] ExportError),

    /// Location or weather lookup failed.
    #[error("Weather error: {0}")]
    Weather(#[from] WeatherError),
}

/// A type alias for `Result<T, AppError>` to simplify function signatures.
///
/// # Examples
///
/// ```
/// use moodlog::errors::{AppResult, AppError};
///
/// fn might_fail() -> AppResult<String> {
///     if false {
///         return Err(AppError::Config("Something went wrong".to_string()));
///     }
///     Ok("Operation succeeded".to_string())
/// }
/// ```
pub type AppResult<T> = Result<T, AppError>;
