// ABOUTME: Benchmark fixtures for generating realistic health histories
// ABOUTME: Provides deterministic BMI, cycle, and risk data for reproducible measurements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IRA Health

//! Benchmark fixtures for generating realistic health histories.
//!
//! Everything is derived from the record index, so repeated runs measure
//! identical inputs.

use chrono::{Duration, NaiveDate};
use ira_health::intelligence::algorithms::risk::recommendations;
use ira_health::intelligence::algorithms::QuestionCatalog;
use ira_health::models::{
    AnswerSet, BmiCategory, BmiRecord, CycleRecord, RiskAssessment, RiskCategory,
};
use ira_health::records::HealthHistory;

/// Predefined history sizes for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum HistorySize {
    /// One year of monthly records
    Small,
    /// Ten years of monthly records
    Medium,
    /// Fifty years of monthly records, well beyond any real user
    Large,
}

impl HistorySize {
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Self::Small => 12,
            Self::Medium => 120,
            Self::Large => 600,
        }
    }
}

/// First date of every generated history
#[must_use]
pub fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1990, 1, 1).unwrap_or_default()
}

/// Cycle lengths between 24 and 35 days
#[allow(clippy::cast_possible_wrap)]
const fn cycle_length(index: usize) -> i64 {
    24 + ((index * 7) % 12) as i64
}

/// Closed cycles back to back, with the most recent one left open
#[allow(clippy::cast_possible_wrap)]
#[must_use]
pub fn generate_cycles(count: usize) -> Vec<CycleRecord> {
    let mut start = base_date();
    (0..count)
        .map(|index| {
            let mut cycle = CycleRecord::new(format!("bench_cycle_{index}"), start);
            let length = cycle_length(index);
            if index + 1 < count {
                cycle.end_date = Some(start + Duration::days(length));
                cycle.duration = Some(length);
            }
            start += Duration::days(length);
            cycle
        })
        .collect()
}

/// Monthly BMI records drifting between 18 and 32
#[allow(clippy::cast_precision_loss, clippy::cast_possible_wrap)]
#[must_use]
pub fn generate_bmi_records(count: usize) -> Vec<BmiRecord> {
    (0..count)
        .map(|index| {
            let bmi = 18.0 + ((index * 13) % 140) as f64 / 10.0;
            BmiRecord {
                height_cm: 165.0,
                weight_kg: bmi * 1.65 * 1.65,
                bmi,
                category: BmiCategory::from_bmi(bmi),
                date: base_date() + Duration::days(index as i64 * 30),
            }
        })
        .collect()
}

/// Monthly assessments rotating through every category
#[allow(clippy::cast_precision_loss, clippy::cast_possible_wrap)]
#[must_use]
pub fn generate_risk_assessments(count: usize) -> Vec<RiskAssessment> {
    (0..count)
        .map(|index| {
            let score = ((index * 37) % 101) as f64;
            RiskAssessment {
                category: RiskCategory::ALL[index % RiskCategory::ALL.len()],
                score,
                recommendations: recommendations(score),
                date: base_date() + Duration::days(index as i64 * 30),
                unanswered: Vec::new(),
            }
        })
        .collect()
}

/// A full history with `size` records in each section
#[must_use]
pub fn generate_history(size: HistorySize) -> HealthHistory {
    let count = size.count();
    HealthHistory {
        bmi_records: generate_bmi_records(count),
        cycles: generate_cycles(count),
        risk_assessments: generate_risk_assessments(count),
    }
}

/// Answers for every question in `category`, alternating yes and no
#[must_use]
pub fn alternating_answers(category: RiskCategory) -> AnswerSet {
    QuestionCatalog::standard()
        .for_category(category)
        .enumerate()
        .map(|(index, question)| (question.id.clone(), index % 2 == 0))
        .collect()
}
