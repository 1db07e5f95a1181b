// ABOUTME: Configuration management module for IRA Health
// ABOUTME: Environment-only settings for the CLI plus re-exported insight thresholds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IRA Health
//! Configuration module
//!
//! - **Environment**: reference date, output format, and history file from `IRA_*` variables
//! - **Insights**: thresholds for the insight aggregator (`IRA_INSIGHTS_*`)
//!
//! There are no configuration files.

/// Environment-based application configuration
pub mod environment;

pub use environment::{AppConfig, OutputFormat};
pub use ira_intelligence::config::{ConfigError, InsightConfig};
