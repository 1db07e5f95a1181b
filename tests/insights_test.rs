// ABOUTME: Integration tests for the insight aggregator
// ABOUTME: Covers empty histories, trends, cycle consistency, risk changes, and correlations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IRA Health

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::Duration;
use common::{assessment, bmi_record, closed_cycle, date, init_test_logging};
use ira_health::intelligence::insights::{
    generate, GENERAL_WELLNESS, NO_BMI_DATA, NO_CYCLE_DATA, NO_RISK_DATA,
};
use ira_health::intelligence::{InsightAggregator, InsightConfig};
use ira_health::models::{CycleRecord, RiskCategory};

#[test]
fn test_empty_histories_yield_placeholders_and_wellness_tips() {
    init_test_logging();
    let insights = generate(&[], &[], &[], date(2025, 6, 1));

    assert_eq!(insights.bmi, vec![NO_BMI_DATA]);
    assert_eq!(insights.cycle, vec![NO_CYCLE_DATA]);
    assert_eq!(insights.risk, vec![NO_RISK_DATA]);
    assert_eq!(insights.general, GENERAL_WELLNESS);
    assert_eq!(insights.len(), 7);
}

#[test]
fn test_generation_is_idempotent() {
    let today = date(2025, 6, 1);
    let bmi = [
        bmi_record(24.0, date(2025, 5, 1)),
        bmi_record(27.0, date(2025, 5, 20)),
    ];
    let cycles = [
        closed_cycle("c1", date(2025, 4, 1), 40),
        CycleRecord::new("c2", date(2025, 5, 11)),
    ];
    let risks = [assessment(RiskCategory::Pcos, 60.0, date(2025, 5, 5))];

    let first = generate(&bmi, &cycles, &risks, today);
    let second = generate(&bmi, &cycles, &risks, today);
    assert_eq!(first, second);
}

#[test]
fn test_bmi_increase_into_overweight() {
    let history = [bmi_record(27.0, date(2025, 5, 20)), bmi_record(24.0, date(2025, 5, 1))];
    let insights = generate(&history, &[], &[], date(2025, 6, 1));

    assert_eq!(insights.bmi.len(), 3);
    assert!(insights.bmi[0].starts_with("Your BMI indicates you are overweight."));
    assert_eq!(
        insights.bmi[2],
        "Your BMI has increased by 3.0 points since your last measurement. Consider reviewing your diet and exercise habits."
    );
}

#[test]
fn test_bmi_decrease_from_overweight_is_progress() {
    let history = [
        bmi_record(27.5, date(2025, 4, 1)),
        bmi_record(24.0, date(2025, 5, 20)),
    ];
    let insights = generate(&history, &[], &[], date(2025, 6, 1));

    assert_eq!(
        insights.bmi,
        vec![
            "Your BMI is within the normal range. Keep up the good work with your healthy lifestyle habits!",
            "Great progress! Your BMI has decreased by 3.5 points since your last measurement.",
        ]
    );
}

#[test]
fn test_bmi_decrease_into_underweight() {
    let history = [
        bmi_record(19.5, date(2025, 4, 1)),
        bmi_record(17.5, date(2025, 5, 20)),
    ];
    let insights = generate(&history, &[], &[], date(2025, 6, 1));

    assert_eq!(insights.bmi.len(), 3);
    assert!(insights.bmi[0].starts_with("Your BMI indicates you are underweight."));
    assert_eq!(
        insights.bmi[2],
        "Your BMI has decreased by 2.0 points and is now in the underweight range. Consider consulting with a healthcare provider."
    );
}

#[test]
fn test_small_bmi_change_adds_no_trend() {
    let history = [bmi_record(22.0, date(2025, 5, 1)), bmi_record(22.8, date(2025, 5, 20))];
    let insights = generate(&history, &[], &[], date(2025, 6, 1));
    assert_eq!(insights.bmi.len(), 1);
}

#[test]
fn test_consistent_cycles_report_average() {
    let cycles = [
        closed_cycle("c1", date(2025, 1, 1), 28),
        closed_cycle("c2", date(2025, 1, 29), 29),
        closed_cycle("c3", date(2025, 2, 27), 30),
    ];
    let insights = generate(&[], &cycles, &[], date(2025, 4, 1));

    assert_eq!(
        insights.cycle,
        vec![
            "Your cycle length is within the normal range, which is a positive indicator of reproductive health.",
            "Your cycle has been relatively consistent in recent months, which is a positive sign of hormonal balance.",
            "Based on your history, your average cycle length is 29 days.",
            "You are currently in your luteal phase. You may experience changes in energy and mood. Prioritize balanced nutrition and adequate rest.",
        ]
    );
}

#[test]
fn test_irregular_cycles_are_flagged() {
    let cycles = [
        closed_cycle("c1", date(2025, 1, 1), 22),
        closed_cycle("c2", date(2025, 1, 23), 36),
        closed_cycle("c3", date(2025, 2, 28), 27),
    ];
    let insights = generate(&[], &cycles, &[], date(2025, 3, 30));
    assert!(insights
        .cycle
        .iter()
        .any(|s| s.starts_with("Your cycle length has varied significantly")));
}

#[test]
fn test_prediction_messages() {
    let today = date(2025, 6, 1);
    let cases = [
        (3, "Your next cycle is predicted to start in approximately 3 days."),
        (0, "Your next cycle is expected to start today."),
        (-2, "Your period appears to be late. This can be due to various factors including stress, exercise, or hormonal changes."),
        (-9, "Your period appears to be significantly delayed. If this is unusual for you, consider consulting with a healthcare provider."),
    ];
    for (offset, expected) in cases {
        let mut cycle = CycleRecord::new("c1", today - Duration::days(20));
        cycle.predicted_next_start = Some(today + Duration::days(offset));
        let insights = generate(&[], &[cycle], &[], today);
        assert_eq!(insights.cycle[0], expected, "offset {offset}");
    }
}

#[test]
fn test_current_phase_uses_latest_cycle() {
    let today = date(2025, 6, 1);
    let cycles = [
        CycleRecord::new("c2", today - Duration::days(14)),
        closed_cycle("c1", date(2025, 4, 20), 28),
    ];
    let insights = generate(&[], &cycles, &[], today);
    assert!(insights.cycle.last().unwrap().contains("ovulation phase"));
}

#[test]
fn test_future_dated_cycle_gets_pre_menstrual_message() {
    let today = date(2025, 6, 1);
    let cycles = [CycleRecord::new("c1", date(2025, 6, 4))];
    let insights = generate(&[], &cycles, &[], today);

    assert_eq!(
        insights.cycle,
        vec![
            "You are currently in your pre-menstrual phase. This is a good time to focus on self-care and stress management.",
        ]
    );
}

#[test]
fn test_zero_duration_gets_no_length_commentary() {
    let mut cycle = CycleRecord::new("c1", date(2025, 5, 20));
    cycle.duration = Some(0);
    let insights = generate(&[], &[cycle], &[], date(2025, 6, 1));

    assert_eq!(insights.cycle.len(), 1);
    assert!(insights.cycle[0].contains("follicular phase"));
}

#[test]
fn test_risk_decrease_is_reported_regardless_of_input_order() {
    let older = assessment(RiskCategory::Pcos, 55.0, date(2025, 5, 1));
    let newer = assessment(RiskCategory::Pcos, 47.0, date(2025, 5, 2));

    for risks in [[older.clone(), newer.clone()], [newer, older]] {
        let insights = generate(&[], &[], &risks, date(2025, 6, 1));
        assert_eq!(insights.risk.len(), 3);
        assert_eq!(
            insights.risk[0],
            "Your risk assessment for pcos shows a moderate risk level. Consider the recommended lifestyle modifications."
        );
        assert_eq!(
            insights.risk[1],
            "Key recommendation: Schedule a consultation with a healthcare provider"
        );
        assert!(insights.risk[2].contains("has decreased since your last assessment"));
    }
}

#[test]
fn test_high_risk_escalates() {
    let risks = [assessment(RiskCategory::BreastCancer, 82.0, date(2025, 5, 1))];
    let insights = generate(&[], &[], &risks, date(2025, 6, 1));
    assert_eq!(
        insights.risk,
        vec![
            "Your risk assessment for breast cancer shows a high risk level. It's recommended to consult with a healthcare provider.",
            "Key recommendation: Consult a healthcare provider immediately",
        ]
    );
}

#[test]
fn test_change_across_categories_is_not_compared() {
    let risks = [
        assessment(RiskCategory::Pcod, 90.0, date(2025, 5, 2)),
        assessment(RiskCategory::Pcos, 10.0, date(2025, 5, 1)),
    ];
    let insights = generate(&[], &[], &risks, date(2025, 6, 1));
    assert_eq!(insights.risk.len(), 2);
}

#[test]
fn test_correlations_follow_wellness_tips() {
    let today = date(2025, 6, 1);
    let bmi = [bmi_record(31.0, date(2025, 5, 1))];
    let cycles = [closed_cycle("c1", date(2025, 3, 1), 42)];
    let risks = [assessment(RiskCategory::Pcos, 60.0, date(2025, 5, 5))];

    let insights = generate(&bmi, &cycles, &risks, today);
    assert_eq!(insights.general.len(), 6);
    assert_eq!(insights.general[..4], GENERAL_WELLNESS);
    assert!(insights.general[4].starts_with("Higher body weight can sometimes affect menstrual regularity."));
    assert!(insights.general[5].starts_with("Weight management can be particularly beneficial for managing PCOS symptoms."));
}

#[test]
fn test_underweight_with_long_cycle() {
    let bmi = [bmi_record(17.5, date(2025, 5, 1))];
    let cycles = [closed_cycle("c1", date(2025, 3, 1), 38)];
    let insights = generate(&bmi, &cycles, &[], date(2025, 6, 1));
    assert_eq!(insights.general.len(), 5);
    assert!(insights.general[4].starts_with("Being underweight"));
}

#[test]
fn test_no_correlations_without_bmi() {
    let cycles = [closed_cycle("c1", date(2025, 3, 1), 45)];
    let risks = [assessment(RiskCategory::Pcos, 90.0, date(2025, 5, 5))];
    let insights = generate(&[], &cycles, &risks, date(2025, 6, 1));
    assert_eq!(insights.general, GENERAL_WELLNESS);
}

#[test]
fn test_custom_thresholds() {
    let config = InsightConfig {
        long_cycle_days: 30,
        ..InsightConfig::default()
    };
    let aggregator = InsightAggregator::with_config(config);
    let cycles = [closed_cycle("c1", date(2025, 3, 1), 32)];

    let insights = aggregator.generate(&[], &cycles, &[], date(2025, 6, 1));
    assert!(insights.cycle[0].starts_with("Your last cycle was longer than average."));

    let defaults = generate(&[], &cycles, &[], date(2025, 6, 1));
    assert!(defaults.cycle[0].starts_with("Your cycle length is within the normal range"));
}
