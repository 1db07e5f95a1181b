// ABOUTME: Health intelligence engine for IRA Health
// ABOUTME: Risk scoring, cycle phase and prediction, BMI classification, and insight aggregation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IRA Health

#![deny(unsafe_code)]

//! # IRA Intelligence
//!
//! Computations over health records from [`ira_core::models`]:
//!
//! - [`algorithms::risk`]: weighted yes/no questionnaire scoring
//! - [`algorithms::cycle_phase`]: current reproductive phase
//! - [`algorithms::bmi`]: BMI and WHO category
//! - [`cycle_tracking`]: next-start prediction and cycle rollover
//! - [`insights`]: human-readable insights across all histories
//!
//! Everything here is synchronous and pure apart from `tracing` events.

pub mod algorithms;
pub mod config;
pub mod cycle_tracking;
pub mod insights;

pub use config::{ConfigError, InsightConfig};
pub use insights::InsightAggregator;
