// ABOUTME: Configuration error types for insight threshold validation
// ABOUTME: Defines error variants for invalid ranges, parse failures, and bad values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IRA Health

//! Configuration error types for insight threshold validation.

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Two related thresholds are in the wrong order
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// Failed to parse an override value
    #[error("Parse error: {0}")]
    Parse(String),

    /// Numeric value outside the valid range for the parameter
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),
}
