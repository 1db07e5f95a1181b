// ABOUTME: Health record data models for IRA Health
// ABOUTME: Re-exports BMI, cycle, and risk assessment types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IRA Health

//! # Data Models
//!
//! Records exchanged with the external document store. Enums are closed:
//! an unknown category, flow, or mood fails deserialization instead of
//! falling through to a default branch.

mod bmi;
mod cycle;
mod risk;

pub use bmi::{BmiCategory, BmiRecord};
pub use cycle::{CycleDay, CycleRecord, Flow, Mood};
pub use risk::{AnswerSet, Question, RiskAssessment, RiskCategory, RiskLevel};

use serde::{Deserialize, Serialize};

/// Insight sentences grouped by the record type they were derived from
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthInsights {
    /// Insights from BMI history
    pub bmi: Vec<String>,
    /// Insights from cycle history
    pub cycle: Vec<String>,
    /// Insights from risk assessments
    pub risk: Vec<String>,
    /// Fixed wellness advice followed by cross-record correlations
    pub general: Vec<String>,
}

impl HealthInsights {
    /// Total number of insight sentences
    #[must_use]
    pub fn len(&self) -> usize {
        self.bmi.len() + self.cycle.len() + self.risk.len() + self.general.len()
    }

    /// Whether no sentence was produced in any section
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
