// ABOUTME: Body Mass Index calculation and WHO category classification
// ABOUTME: Validates height and weight, then derives BMI and its category
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IRA Health

use chrono::NaiveDate;
use ira_core::constants::bmi::CM_PER_METRE;
use ira_core::errors::{AppError, AppResult};
use ira_core::models::{BmiCategory, BmiRecord};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A computed BMI and its category
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BmiResult {
    /// weight (kg) / height (m)²
    pub bmi: f64,
    /// Category derived from `bmi`
    pub category: BmiCategory,
}

/// Compute BMI from height in centimetres and weight in kilograms
///
/// # Errors
///
/// Returns `AppError::InvalidInput` if either value is non-positive or not finite
///
/// # Example
///
/// ```rust
/// use ira_intelligence::algorithms::bmi::classify;
/// use ira_core::models::BmiCategory;
///
/// let result = classify(165.0, 60.0)?;
/// assert_eq!(result.category, BmiCategory::Normal);
/// # Ok::<(), ira_core::errors::AppError>(())
/// ```
pub fn classify(height_cm: f64, weight_kg: f64) -> AppResult<BmiResult> {
    if !height_cm.is_finite() || height_cm <= 0.0 {
        return Err(AppError::invalid_input(format!(
            "Height must be a positive number of centimetres, got {height_cm}"
        )));
    }
    if !weight_kg.is_finite() || weight_kg <= 0.0 {
        return Err(AppError::invalid_input(format!(
            "Weight must be a positive number of kilograms, got {weight_kg}"
        )));
    }

    let metres = height_cm / CM_PER_METRE;
    let bmi = weight_kg / (metres * metres);
    let category = BmiCategory::from_bmi(bmi);
    debug!(height_cm, weight_kg, bmi, category = %category, "BMI classified");

    Ok(BmiResult { bmi, category })
}

/// Classify and package the measurement as a record ready to store
///
/// # Errors
///
/// Returns `AppError::InvalidInput` under the same conditions as [`classify`]
pub fn record(height_cm: f64, weight_kg: f64, date: NaiveDate) -> AppResult<BmiRecord> {
    let BmiResult { bmi, category } = classify(height_cm, weight_kg)?;
    Ok(BmiRecord {
        height_cm,
        weight_kg,
        bmi,
        category,
        date,
    })
}
