// ABOUTME: JSON health history bundle loaded from disk by the CLI
// ABOUTME: Parsing, date normalization, and invariant validation for BMI, cycle, and risk records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IRA Health

//! History files
//!
//! A history file is one JSON object holding a user's exported records:
//!
//! ```json
//! {
//!   "bmi_records": [{"height_cm": 165.0, "weight_kg": 60.0, "bmi": 22.04, "category": "normal", "date": "2025-01-10"}],
//!   "cycles": [{"id": "c1", "start_date": "2025-01-01", "end_date": null, "duration": null, "days": []}],
//!   "risk_assessments": []
//! }
//! ```
//!
//! Every section is optional.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::errors::{AppError, AppResult};
use crate::intelligence::InsightAggregator;
use crate::models::{BmiRecord, CycleRecord, HealthInsights, RiskAssessment};

/// A user's exported BMI, cycle, and risk records
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HealthHistory {
    /// BMI measurements
    #[serde(default)]
    pub bmi_records: Vec<BmiRecord>,
    /// Menstrual cycles
    #[serde(default)]
    pub cycles: Vec<CycleRecord>,
    /// Questionnaire results
    #[serde(default)]
    pub risk_assessments: Vec<RiskAssessment>,
}

impl HealthHistory {
    /// Parse a history from JSON text
    ///
    /// # Errors
    ///
    /// Returns `InvalidFormat` when the JSON is malformed or holds unknown enum values
    pub fn from_json(json: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a history file
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for a missing file, `StorageError` for other
    /// I/O failures, and `InvalidFormat` for malformed content
    pub fn from_path(path: &Path) -> AppResult<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                AppError::not_found(format!("History file {}", path.display()))
            } else {
                AppError::from(e)
            }
        })?;
        let history = Self::from_json(&contents)?;
        info!(
            path = %path.display(),
            bmi_records = history.bmi_records.len(),
            cycles = history.cycles.len(),
            risk_assessments = history.risk_assessments.len(),
            "Loaded health history"
        );
        Ok(history)
    }

    /// Write the history as pretty-printed JSON, creating missing parent directories
    ///
    /// # Errors
    ///
    /// Returns `StorageError` when the directory or file cannot be written
    pub fn save(&self, path: &Path) -> AppResult<()> {
        let json = serde_json::to_string_pretty(self)?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, json)?;
        debug!(path = %path.display(), "Saved health history");
        Ok(())
    }

    /// Sorted copy: BMI, cycles, and day logs oldest first, risk assessments newest first
    #[must_use]
    pub fn normalized(&self) -> Self {
        let mut history = self.clone();
        history.bmi_records.sort_by_key(|r| r.date);
        history.cycles.sort_by_key(|c| c.start_date);
        for cycle in &mut history.cycles {
            cycle.days.sort_by_key(|d| d.date);
        }
        history
            .risk_assessments
            .sort_by(|a, b| b.date.cmp(&a.date));
        history
    }

    /// Check record invariants
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a BMI or cycle record that breaks its invariant
    /// (including two day logs on the same date),
    /// `ValueOutOfRange` for a risk score outside 0-100
    pub fn validate(&self) -> AppResult<()> {
        for record in &self.bmi_records {
            record.validate()?;
        }
        for cycle in &self.cycles {
            cycle.validate()?;
        }
        for assessment in &self.risk_assessments {
            if !(0.0..=100.0).contains(&assessment.score) {
                return Err(AppError::value_out_of_range(format!(
                    "Risk score {} for {} on {} is outside 0-100",
                    assessment.score, assessment.category, assessment.date
                )));
            }
        }
        Ok(())
    }

    /// Insights over this history as of `today`
    #[must_use]
    pub fn insights(
        &self,
        aggregator: &InsightAggregator,
        today: NaiveDate,
    ) -> HealthInsights {
        aggregator.generate(
            &self.bmi_records,
            &self.cycles,
            &self.risk_assessments,
            today,
        )
    }
}
