//! Structured logging setup.
//!
//! Logs go to stderr so view output on stdout stays clean.

use crate::constants;
use crate::errors::{AppError, AppResult};
use clap::ValueEnum;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// Output format of the log layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl LogFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            LogFormat::Text => constants::LOG_FORMAT_TEXT,
            LogFormat::Json => constants::LOG_FORMAT_JSON,
        }
    }
}

/// The filter directive used when `RUST_LOG` is unset.
pub fn default_level(verbose: bool) -> &'static str {
    if verbose {
        constants::VERBOSE_LOG_LEVEL
    } else {
        constants::DEFAULT_LOG_LEVEL
    }
}

/// Installs the global subscriber. Call once at startup.
///
/// `RUST_LOG` takes precedence over `verbose`.
///
/// # Errors
///
/// Returns `AppError::Config` if a global subscriber is already installed.
pub fn init(format: LogFormat, verbose: bool) -> AppResult<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level(verbose)));

    let registry = tracing_subscriber::registry().with(filter);
    let result = match format {
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_current_span(true)
                    .with_span_list(false)
                    .with_writer(std::io::stderr),
            )
            .try_init(),
        LogFormat::Text => registry
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .try_init(),
    };

    result.map_err(|e| AppError::Config(format!("Failed to initialize logging: {}", e)))?;
    tracing::debug!("Logging initialized ({} format)", format.as_str());
    Ok(())
}
