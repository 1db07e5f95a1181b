// ABOUTME: Tunable thresholds for the insight aggregator
// ABOUTME: Defaults plus IRA_INSIGHTS_* environment overrides with validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IRA Health

//! Insight configuration
//!
//! Every threshold used by [`crate::insights::InsightAggregator`] lives here.
//! The defaults reproduce the standard wording and cut-offs; overrides come
//! from `IRA_INSIGHTS_*` environment variables.

mod error;

pub use error::ConfigError;

use std::env;
use std::str::FromStr;

use ira_core::constants::cycle::DEFAULT_CYCLE_LENGTH_DAYS;
use serde::{Deserialize, Serialize};

/// Thresholds for insight generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightConfig {
    /// Minimum absolute BMI change between the two latest records to report a trend
    pub bmi_trend_delta: f64,
    /// Cycles shorter than this many days are reported as short
    pub short_cycle_days: i64,
    /// Cycles longer than this many days are reported as long
    pub long_cycle_days: i64,
    /// Spread (max - min) above which recent cycle lengths count as varied
    pub cycle_variation_days: i64,
    /// Days past the predicted start before a period counts as significantly delayed
    pub late_window_days: i64,
    /// Minimum score change between same-category assessments to report
    pub risk_change_points: f64,
    /// PCOS score above which the weight-management note applies
    pub pcos_correlation_score: f64,
    /// Length substituted for cycles without a recorded duration
    pub default_cycle_length_days: i64,
    /// Number of most recent cycles used for the consistency check
    pub consistency_window: usize,
}

impl Default for InsightConfig {
    fn default() -> Self {
        Self {
            bmi_trend_delta: 1.0,
            short_cycle_days: 21,
            long_cycle_days: 35,
            cycle_variation_days: 7,
            late_window_days: 5,
            risk_change_points: 5.0,
            pcos_correlation_score: 50.0,
            default_cycle_length_days: DEFAULT_CYCLE_LENGTH_DAYS,
            consistency_window: 3,
        }
    }
}

impl InsightConfig {
    /// Load configuration from defaults and environment
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Check threshold ordering and ranges
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.bmi_trend_delta.is_finite() || self.bmi_trend_delta < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "bmi_trend_delta must be a non-negative number",
            ));
        }

        if self.short_cycle_days <= 0 {
            return Err(ConfigError::ValueOutOfRange(
                "short_cycle_days must be positive",
            ));
        }

        if self.short_cycle_days >= self.long_cycle_days {
            return Err(ConfigError::InvalidRange(
                "short_cycle_days must be < long_cycle_days",
            ));
        }

        if self.cycle_variation_days < 0 {
            return Err(ConfigError::ValueOutOfRange(
                "cycle_variation_days must not be negative",
            ));
        }

        if self.late_window_days <= 0 {
            return Err(ConfigError::ValueOutOfRange(
                "late_window_days must be positive",
            ));
        }

        if !self.risk_change_points.is_finite() || self.risk_change_points < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "risk_change_points must be a non-negative number",
            ));
        }

        if !(0.0..=100.0).contains(&self.pcos_correlation_score) {
            return Err(ConfigError::ValueOutOfRange(
                "pcos_correlation_score must be between 0 and 100",
            ));
        }

        if self.default_cycle_length_days <= 0 {
            return Err(ConfigError::ValueOutOfRange(
                "default_cycle_length_days must be positive",
            ));
        }

        if self.consistency_window < 2 {
            return Err(ConfigError::ValueOutOfRange(
                "consistency_window must be at least 2",
            ));
        }

        Ok(())
    }

    /// Apply `IRA_INSIGHTS_*` environment overrides
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` naming the variable that failed to parse
    pub fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        override_from_env("IRA_INSIGHTS_BMI_TREND_DELTA", &mut self.bmi_trend_delta)?;
        override_from_env("IRA_INSIGHTS_SHORT_CYCLE_DAYS", &mut self.short_cycle_days)?;
        override_from_env("IRA_INSIGHTS_LONG_CYCLE_DAYS", &mut self.long_cycle_days)?;
        override_from_env(
            "IRA_INSIGHTS_CYCLE_VARIATION_DAYS",
            &mut self.cycle_variation_days,
        )?;
        override_from_env("IRA_INSIGHTS_LATE_WINDOW_DAYS", &mut self.late_window_days)?;
        override_from_env(
            "IRA_INSIGHTS_RISK_CHANGE_POINTS",
            &mut self.risk_change_points,
        )?;
        override_from_env(
            "IRA_INSIGHTS_PCOS_CORRELATION_SCORE",
            &mut self.pcos_correlation_score,
        )?;
        override_from_env(
            "IRA_INSIGHTS_DEFAULT_CYCLE_LENGTH",
            &mut self.default_cycle_length_days,
        )?;
        override_from_env(
            "IRA_INSIGHTS_CONSISTENCY_WINDOW",
            &mut self.consistency_window,
        )?;
        Ok(self)
    }
}

fn override_from_env<T: FromStr>(name: &str, field: &mut T) -> Result<(), ConfigError> {
    if let Ok(val) = env::var(name) {
        *field = val
            .trim()
            .parse()
            .map_err(|_| ConfigError::Parse(format!("Invalid {name}: '{val}'")))?;
    }
    Ok(())
}
