// ABOUTME: Environment configuration for the IRA Health CLI
// ABOUTME: Parses IRA_* variables into a typed AppConfig with validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IRA Health

//! Environment-based configuration

use std::env;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{AppError, AppResult};

/// Reference date override, `YYYY-MM-DD`
pub const REFERENCE_DATE_VAR: &str = "IRA_REFERENCE_DATE";
/// Output format, `text` or `json`
pub const OUTPUT_FORMAT_VAR: &str = "IRA_OUTPUT_FORMAT";
/// Default history file path
pub const HISTORY_FILE_VAR: &str = "IRA_HISTORY_FILE";

/// File name used under the platform data directory when no path is configured
pub const DEFAULT_HISTORY_FILE_NAME: &str = "history.json";

/// How command results are printed
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

impl FromStr for OutputFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(AppError::config(format!(
                "Unknown output format: '{other}'. Valid options: text, json"
            ))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// CLI configuration resolved from the environment
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Fixed "today"; `None` means the local calendar date
    pub reference_date: Option<NaiveDate>,
    /// Output format
    pub output_format: OutputFormat,
    /// Explicit history file path
    pub history_file: Option<PathBuf>,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` when a variable is set to an unparsable value
    pub fn from_env() -> AppResult<Self> {
        let reference_date = env::var(REFERENCE_DATE_VAR)
            .ok()
            .map(|raw| parse_date(REFERENCE_DATE_VAR, &raw))
            .transpose()?;

        let output_format = env::var(OUTPUT_FORMAT_VAR)
            .ok()
            .map(|raw| raw.parse())
            .transpose()?
            .unwrap_or_default();

        let history_file = env::var(HISTORY_FILE_VAR)
            .ok()
            .filter(|raw| !raw.trim().is_empty())
            .map(PathBuf::from);

        let config = Self {
            reference_date,
            output_format,
            history_file,
        };
        debug!(?config, "Loaded environment configuration");
        Ok(config)
    }

    /// The configured reference date, or the local calendar date
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.reference_date
            .unwrap_or_else(|| Local::now().date_naive())
    }

    /// History file to read: the configured one, else `<data dir>/ira-health/history.json`
    #[must_use]
    pub fn history_path(&self) -> Option<PathBuf> {
        self.history_file.clone().or_else(|| {
            dirs::data_dir().map(|dir| dir.join("ira-health").join(DEFAULT_HISTORY_FILE_NAME))
        })
    }
}

/// Parse a `YYYY-MM-DD` date, naming `source` in the error
///
/// # Errors
///
/// Returns `ConfigInvalid` if `raw` is not a valid calendar date
pub fn parse_date(source: &str, raw: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|e| {
        AppError::config(format!("{source} must be a YYYY-MM-DD date, got '{raw}'"))
            .with_source(e)
    })
}
