// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging setup and builders for BMI, cycle, and risk records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IRA Health
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `ira_health`

use std::env;
use std::sync::Once;

use chrono::{Duration, NaiveDate};
use ira_health::intelligence::algorithms::risk::recommendations;
use ira_health::models::{BmiCategory, BmiRecord, CycleRecord, RiskAssessment, RiskCategory};
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            Ok("WARN" | "ERROR") | _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// BMI record at 165 cm whose weight reproduces `bmi`
pub fn bmi_record(bmi: f64, on: NaiveDate) -> BmiRecord {
    BmiRecord {
        height_cm: 165.0,
        weight_kg: bmi * 1.65 * 1.65,
        bmi,
        category: BmiCategory::from_bmi(bmi),
        date: on,
    }
}

/// Completed cycle of `days` length
pub fn closed_cycle(id: &str, start: NaiveDate, days: i64) -> CycleRecord {
    let mut cycle = CycleRecord::new(id, start);
    cycle.close(start + Duration::days(days)).unwrap();
    cycle
}

/// Assessment with the standard recommendations for `score`
pub fn assessment(category: RiskCategory, score: f64, on: NaiveDate) -> RiskAssessment {
    RiskAssessment {
        category,
        score,
        recommendations: recommendations(score),
        date: on,
        unanswered: Vec::new(),
    }
}
