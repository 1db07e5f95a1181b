// ABOUTME: Main library entry point for the IRA Health toolkit
// ABOUTME: Ties together core models, intelligence, configuration, logging, and record loading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IRA Health

#![deny(unsafe_code)]

//! # IRA Health
//!
//! Women's health tracking computations: questionnaire risk screening,
//! menstrual cycle phase and prediction, BMI classification, and insights
//! aggregated across a user's history.
//!
//! ## Architecture
//!
//! - **`ira-core`**: errors, constants, and record models
//! - **`ira-intelligence`**: pure algorithms and the insight aggregator
//! - **This crate**: environment configuration, logging, history files,
//!   meal plan totals, the shop cart and appointment booking rules, and the
//!   `ira-cli` binary
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use ira_health::intelligence::insights;
//!
//! let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap_or_default();
//! let generated = insights::generate(&[], &[], &[], today);
//! assert_eq!(generated.general.len(), 4);
//! ```

/// Error types shared across the workspace
pub use ira_core::errors;

/// Health record models
pub use ira_core::models;

/// Classification thresholds and defaults
pub use ira_core::constants;

/// Algorithms, cycle tracking, and insight aggregation
pub use ira_intelligence as intelligence;

/// Appointment booking against doctor availability
pub mod appointments;

/// Environment-based configuration
pub mod config;

/// Meal plans and daily nutrition totals
pub mod diet;

/// Structured logging setup
pub mod logging;

/// JSON history files consumed by the CLI
pub mod records;

/// Cart totals, addresses, and orders
pub mod shop;
