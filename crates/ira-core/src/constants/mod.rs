// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Classification thresholds and defaults for BMI, cycles, risk, and the shop
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IRA Health

//! Constants module
//!
//! Fixed thresholds used by the classifiers. Insight heuristics that product
//! may want to tune live in the intelligence crate's `InsightConfig` instead,
//! with these values as defaults.

/// Body Mass Index category boundaries (kg/m²), WHO adult classification
pub mod bmi {
    /// Below this value the category is underweight
    pub const UNDERWEIGHT_BELOW: f64 = 18.5;
    /// Below this value (and at or above underweight) the category is normal
    pub const NORMAL_BELOW: f64 = 25.0;
    /// Below this value (and at or above normal) the category is overweight
    pub const OVERWEIGHT_BELOW: f64 = 30.0;
    /// Centimetres per metre
    pub const CM_PER_METRE: f64 = 100.0;
}

/// Cycle phase day offsets (days since the cycle started, inclusive upper bounds)
pub mod cycle {
    /// Last day offset of the menstrual phase
    pub const MENSTRUAL_LAST_DAY: i64 = 5;
    /// Last day offset of the follicular phase
    pub const FOLLICULAR_LAST_DAY: i64 = 13;
    /// Last day offset of the ovulation window
    pub const OVULATION_LAST_DAY: i64 = 17;
    /// Cycle length assumed when a record has no duration
    pub const DEFAULT_CYCLE_LENGTH_DAYS: i64 = 28;
    /// Number of recent cycles averaged when predicting the next start
    pub const PREDICTION_WINDOW: usize = 3;
    /// Minimum previous cycles needed before averaging replaces the default
    pub const PREDICTION_MIN_HISTORY: usize = 2;
}

/// Risk questionnaire tiering (percent of maximum weighted score)
pub mod risk {
    /// Scores strictly above this get the escalation tier
    pub const ESCALATION_ABOVE: f64 = 70.0;
    /// Scores strictly above this (and not escalated) get the moderate tier
    pub const MODERATE_ABOVE: f64 = 40.0;
    /// Display label: scores at or above this are "High Risk"
    pub const HIGH_LEVEL_FROM: f64 = 70.0;
    /// Display label: scores at or above this are "Moderate Risk"
    pub const MODERATE_LEVEL_FROM: f64 = 40.0;
    /// Upper bound of a risk score
    pub const MAX_SCORE: f64 = 100.0;
}

/// Shop pricing rules
pub mod shop {
    /// Sales tax rate applied to the subtotal
    pub const TAX_RATE: f64 = 0.10;
    /// Flat shipping charge added at checkout
    pub const FLAT_SHIPPING: f64 = 5.99;
    /// Smallest quantity a cart line may hold
    pub const MIN_QUANTITY: u32 = 1;
    /// Largest quantity a cart line may hold
    pub const MAX_QUANTITY: u32 = 10;
    /// Minor currency units per major unit (paise per rupee)
    pub const MINOR_UNITS_PER_MAJOR: f64 = 100.0;
}

/// Meal plan defaults
pub mod diet {
    /// Daily calorie target when none is chosen
    pub const DEFAULT_TARGET_CALORIES: f64 = 2000.0;
}

/// Service identity used in logs
pub mod service_names {
    /// Service name for the CLI
    pub const IRA_CLI: &str = "ira-cli";
}
