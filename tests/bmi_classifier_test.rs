// ABOUTME: Integration tests for BMI classification and guidance
// ABOUTME: Covers reference measurements, category boundaries, monotonicity, and input rejection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IRA Health

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::date;
use ira_health::errors::ErrorCode;
use ira_health::intelligence::algorithms::bmi::{classify, record};
use ira_health::models::BmiCategory;

#[test]
fn test_reference_measurements() {
    let normal = classify(165.0, 60.0).unwrap();
    assert!((normal.bmi - 22.04).abs() < 0.01);
    assert_eq!(normal.category, BmiCategory::Normal);

    let overweight = classify(165.0, 75.0).unwrap();
    assert!((overweight.bmi - 27.55).abs() < 0.01);
    assert_eq!(overweight.category, BmiCategory::Overweight);
}

#[test]
fn test_boundaries_belong_to_upper_category() {
    let cases = [
        (18.5, BmiCategory::Normal),
        (25.0, BmiCategory::Overweight),
        (30.0, BmiCategory::Obese),
        (18.499, BmiCategory::Underweight),
    ];
    for (bmi, expected) in cases {
        assert_eq!(BmiCategory::from_bmi(bmi), expected, "bmi {bmi}");
    }
}

#[test]
fn test_bmi_grows_with_weight_and_shrinks_with_height() {
    let mut previous = 0.0;
    for weight in (40..=120).step_by(5) {
        let result = classify(170.0, f64::from(weight)).unwrap();
        assert!(result.bmi > previous);
        previous = result.bmi;
    }

    let short = classify(150.0, 70.0).unwrap();
    let tall = classify(190.0, 70.0).unwrap();
    assert!(short.bmi > tall.bmi);
}

#[test]
fn test_rejects_non_positive_and_non_finite_input() {
    for (height, weight) in [(0.0, 60.0), (165.0, -1.0), (f64::NAN, 60.0), (165.0, f64::INFINITY)] {
        let err = classify(height, weight).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput, "{height} / {weight}");
    }
}

#[test]
fn test_record_is_self_consistent() {
    let saved = record(160.0, 90.0, date(2025, 3, 2)).unwrap();
    assert_eq!(saved.category, BmiCategory::Obese);
    assert_eq!(saved.date, date(2025, 3, 2));
    saved.validate().unwrap();
}

#[test]
fn test_every_category_has_guidance() {
    for category in [
        BmiCategory::Underweight,
        BmiCategory::Normal,
        BmiCategory::Overweight,
        BmiCategory::Obese,
    ] {
        assert!(!category.guidance().is_empty());
        assert!(!category.tips().is_empty());
    }
    assert!(BmiCategory::Obese.is_above_normal());
    assert!(!BmiCategory::Underweight.is_above_normal());
}
