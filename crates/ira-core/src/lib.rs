// ABOUTME: Core types and constants for the IRA Health platform
// ABOUTME: Foundation crate with error handling, health record models, and thresholds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IRA Health

#![deny(unsafe_code)]

//! # IRA Core
//!
//! Foundation crate providing shared types and constants for IRA Health.
//! Everything here is plain data: records fetched from the external document
//! store deserialize into these models, and the intelligence crate computes
//! over them.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Classification thresholds and fixed defaults
//! - **models**: BMI, cycle, and risk assessment records

/// Unified error handling system with standard error codes
pub mod errors;

/// Classification thresholds and defaults organized by domain
pub mod constants;

/// Health record data models (BMI, cycles, risk assessments)
pub mod models;
