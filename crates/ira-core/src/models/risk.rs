// ABOUTME: Risk questionnaire models for condition screening
// ABOUTME: RiskCategory, Question, AnswerSet, RiskAssessment, and display RiskLevel
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IRA Health

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::constants::risk::{HIGH_LEVEL_FROM, MODERATE_LEVEL_FROM};
use crate::errors::AppError;

/// Condition a questionnaire screens for
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum RiskCategory {
    /// Polycystic ovary syndrome
    Pcos,
    /// Polycystic ovarian disease
    Pcod,
    /// Breast cancer early-detection screening
    BreastCancer,
}

impl RiskCategory {
    /// All categories in catalog order
    pub const ALL: [Self; 3] = [Self::Pcos, Self::Pcod, Self::BreastCancer];

    /// Stable identifier, matching the serialized form
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Pcos => "pcos",
            Self::Pcod => "pcod",
            Self::BreastCancer => "breast_cancer",
        }
    }

    /// Identifier with underscores replaced, used inside insight sentences
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Pcos => "pcos",
            Self::Pcod => "pcod",
            Self::BreastCancer => "breast cancer",
        }
    }

    /// Questionnaire title
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Pcos => "PCOS Risk Assessment",
            Self::Pcod => "PCOD Risk Assessment",
            Self::BreastCancer => "Breast Cancer Risk Assessment",
        }
    }

    /// Questionnaire description
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Pcos => "Evaluate your risk for Polycystic Ovary Syndrome",
            Self::Pcod => "Check your risk for Polycystic Ovarian Disease",
            Self::BreastCancer => "Early detection screening questionnaire",
        }
    }
}

impl fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RiskCategory {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "pcos" => Ok(Self::Pcos),
            "pcod" => Ok(Self::Pcod),
            "breast_cancer" => Ok(Self::BreastCancer),
            other => Err(AppError::invalid_input(format!(
                "Unknown risk category: '{other}'. Valid options: pcos, pcod, breast_cancer"
            ))),
        }
    }
}

/// One weighted yes/no question
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    /// Stable identifier used as the answer key
    pub id: String,
    /// Question text shown to the user
    pub text: String,
    /// Condition the question contributes to
    pub category: RiskCategory,
    /// Positive weight added to the score on a "yes"
    pub weight: f64,
}

/// Answers keyed by question id; absent keys count as "no"
pub type AnswerSet = BTreeMap<String, bool>;

/// Result of scoring one questionnaire
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    /// Condition assessed
    pub category: RiskCategory,
    /// Weighted percentage in [0, 100]
    pub score: f64,
    /// Tiered recommendations, most urgent first
    pub recommendations: Vec<String>,
    /// Assessment date
    pub date: NaiveDate,
    /// Question ids the user left unanswered (scored as "no")
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub unanswered: Vec<String>,
}

impl RiskAssessment {
    /// Display level for the score
    #[must_use]
    pub fn level(&self) -> RiskLevel {
        RiskLevel::from_score(self.score)
    }
}

/// Display label for a risk score
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    /// Score below 40
    Low,
    /// Score in [40, 70)
    Moderate,
    /// Score of 70 or more
    High,
}

impl RiskLevel {
    /// Label a score; boundaries are inclusive on the lower end
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score >= HIGH_LEVEL_FROM {
            Self::High
        } else if score >= MODERATE_LEVEL_FROM {
            Self::Moderate
        } else {
            Self::Low
        }
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Low => "Low Risk",
            Self::Moderate => "Moderate Risk",
            Self::High => "High Risk",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
