// ABOUTME: Integration tests for environment configuration
// ABOUTME: Covers IRA_* variable parsing, defaults, and invalid values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IRA Health

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::env;
use std::path::PathBuf;

use common::date;
use ira_health::config::environment::{
    parse_date, AppConfig, OutputFormat, HISTORY_FILE_VAR, OUTPUT_FORMAT_VAR, REFERENCE_DATE_VAR,
};
use ira_health::config::InsightConfig;
use ira_health::errors::ErrorCode;
use serial_test::serial;

fn clear_env() {
    for var in [REFERENCE_DATE_VAR, OUTPUT_FORMAT_VAR, HISTORY_FILE_VAR] {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_defaults_without_environment() {
    clear_env();
    let config = AppConfig::from_env().unwrap();

    assert_eq!(config, AppConfig::default());
    assert_eq!(config.output_format, OutputFormat::Text);
    assert!(config.reference_date.is_none());
}

#[test]
#[serial]
fn test_variables_are_parsed() {
    clear_env();
    env::set_var(REFERENCE_DATE_VAR, "2025-06-01");
    env::set_var(OUTPUT_FORMAT_VAR, "JSON");
    env::set_var(HISTORY_FILE_VAR, "/tmp/ira-history.json");

    let config = AppConfig::from_env().unwrap();
    assert_eq!(config.reference_date, Some(date(2025, 6, 1)));
    assert_eq!(config.today(), date(2025, 6, 1));
    assert_eq!(config.output_format, OutputFormat::Json);
    assert_eq!(
        config.history_path(),
        Some(PathBuf::from("/tmp/ira-history.json"))
    );

    clear_env();
}

#[test]
#[serial]
fn test_blank_history_file_is_ignored() {
    clear_env();
    env::set_var(HISTORY_FILE_VAR, "  ");
    let config = AppConfig::from_env().unwrap();
    assert!(config.history_file.is_none());
    clear_env();
}

#[test]
#[serial]
fn test_invalid_values_are_config_errors() {
    clear_env();
    env::set_var(REFERENCE_DATE_VAR, "06/01/2025");
    let err = AppConfig::from_env().unwrap_err();
    assert_eq!(err.code, ErrorCode::ConfigInvalid);
    assert!(err.message.contains(REFERENCE_DATE_VAR));

    clear_env();
    env::set_var(OUTPUT_FORMAT_VAR, "yaml");
    assert_eq!(AppConfig::from_env().unwrap_err().code, ErrorCode::ConfigInvalid);
    clear_env();
}

#[test]
fn test_parse_date_rejects_impossible_dates() {
    assert_eq!(parse_date("--today", " 2024-02-29 ").unwrap(), date(2024, 2, 29));
    assert!(parse_date("--today", "2025-02-29").is_err());
}

#[test]
#[serial]
fn test_insight_thresholds_from_environment() {
    env::set_var("IRA_INSIGHTS_LONG_CYCLE_DAYS", "40");
    env::set_var("IRA_INSIGHTS_CONSISTENCY_WINDOW", "4");
    let config = InsightConfig::load().unwrap();
    assert_eq!(config.long_cycle_days, 40);
    assert_eq!(config.consistency_window, 4);

    env::set_var("IRA_INSIGHTS_SHORT_CYCLE_DAYS", "50");
    assert!(InsightConfig::load().is_err());

    for var in [
        "IRA_INSIGHTS_LONG_CYCLE_DAYS",
        "IRA_INSIGHTS_CONSISTENCY_WINDOW",
        "IRA_INSIGHTS_SHORT_CYCLE_DAYS",
    ] {
        env::remove_var(var);
    }
}
