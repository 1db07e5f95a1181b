// ABOUTME: Pure health calculation algorithms
// ABOUTME: BMI classification, cycle phase calculation, and risk questionnaire scoring
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IRA Health

//! # Algorithms
//!
//! Stateless functions over borrowed inputs. None of them read the clock;
//! callers pass the reference date.

/// BMI calculation and category classification
pub mod bmi;
/// Cycle phase from days since the period started
pub mod cycle_phase;
/// Weighted questionnaire scoring
pub mod risk;

pub use bmi::{classify, BmiResult};
pub use cycle_phase::{current_phase, CyclePhase, CyclePhaseInfo};
pub use risk::{QuestionCatalog, RecommendationTier, RiskScorer};
