// ABOUTME: Health insight aggregation across BMI, cycle, and risk assessment histories
// ABOUTME: Compares latest against previous records and applies threshold rules to produce advice sentences
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IRA Health

//! Insight generation
//!
//! Insights are transient: they are regenerated from the stored records on
//! every read and never persisted. Generation is pure; `today` is an explicit
//! argument and histories are ordered by date here, so the same inputs always
//! produce the same sentences.

use chrono::NaiveDate;
use ira_core::models::{
    BmiCategory, BmiRecord, CycleRecord, HealthInsights, RiskAssessment, RiskCategory,
};
use tracing::debug;

use crate::algorithms::cycle_phase::{current_phase, CyclePhase};
use crate::algorithms::risk::RecommendationTier;
use crate::config::InsightConfig;
use crate::cycle_tracking::{effective_duration, CycleLengthStats};

/// Always listed first in the general section
pub const GENERAL_WELLNESS: [&str; 4] = [
    "Stay hydrated by drinking at least 8 glasses of water daily",
    "Aim for 7-9 hours of quality sleep each night",
    "Practice stress-reduction techniques like meditation or deep breathing",
    "Include a variety of fruits and vegetables in your diet for essential nutrients",
];

/// Shown when there is no BMI history
pub const NO_BMI_DATA: &str =
    "No BMI data available. Calculate your BMI to receive personalized insights.";
/// Shown when there is no cycle history
pub const NO_CYCLE_DATA: &str =
    "No cycle data available. Track your cycle to receive personalized insights.";
/// Shown when there are no risk assessments
pub const NO_RISK_DATA: &str =
    "No risk assessment data available. Complete a health assessment to receive personalized insights.";

/// Builds [`HealthInsights`] from record histories
#[derive(Debug, Clone, Default)]
pub struct InsightAggregator {
    config: InsightConfig,
}

impl InsightAggregator {
    /// Aggregator with the default thresholds
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Aggregator with custom thresholds
    #[must_use]
    pub const fn with_config(config: InsightConfig) -> Self {
        Self { config }
    }

    /// Thresholds in use
    #[must_use]
    pub const fn config(&self) -> &InsightConfig {
        &self.config
    }

    /// Generate insights as of `today`
    ///
    /// Histories may be in any order. BMI records are ordered by date, cycles
    /// by start date, and risk assessments newest first (ties keep input order).
    #[must_use]
    pub fn generate(
        &self,
        bmi_history: &[BmiRecord],
        cycle_history: &[CycleRecord],
        risk_history: &[RiskAssessment],
        today: NaiveDate,
    ) -> HealthInsights {
        let mut bmi: Vec<&BmiRecord> = bmi_history.iter().collect();
        bmi.sort_by_key(|r| r.date);
        let mut cycles: Vec<&CycleRecord> = cycle_history.iter().collect();
        cycles.sort_by_key(|c| c.start_date);
        let mut risks: Vec<&RiskAssessment> = risk_history.iter().collect();
        risks.sort_by(|a, b| b.date.cmp(&a.date));

        let mut general: Vec<String> = GENERAL_WELLNESS.iter().map(|s| (*s).to_owned()).collect();
        general.extend(self.correlations(&bmi, &cycles, &risks));

        let insights = HealthInsights {
            bmi: self.bmi_insights(&bmi),
            cycle: self.cycle_insights(&cycles, today),
            risk: self.risk_insights(&risks),
            general,
        };

        debug!(
            bmi_records = bmi.len(),
            cycles = cycles.len(),
            assessments = risks.len(),
            insights = insights.len(),
            "Generated health insights"
        );
        insights
    }

    fn bmi_insights(&self, history: &[&BmiRecord]) -> Vec<String> {
        let Some((latest, earlier)) = history.split_last() else {
            return vec![NO_BMI_DATA.to_owned()];
        };

        let mut out: Vec<String> = bmi_category_insights(latest.category)
            .iter()
            .map(|s| (*s).to_owned())
            .collect();

        if let Some(previous) = earlier.last() {
            let change = latest.bmi - previous.bmi;
            if change.abs() > self.config.bmi_trend_delta {
                if let Some(message) = bmi_trend_message(change, previous.category, latest.category)
                {
                    out.push(message);
                }
            }
        }
        out
    }

    fn cycle_insights(&self, history: &[&CycleRecord], today: NaiveDate) -> Vec<String> {
        let Some(latest) = history.last() else {
            return vec![NO_CYCLE_DATA.to_owned()];
        };
        let config = &self.config;
        let mut out = Vec::new();

        if let Some(duration) = latest.duration.filter(|d| *d > 0) {
            let message = if duration < config.short_cycle_days {
                "Your last cycle was shorter than average. Short cycles can sometimes indicate hormonal imbalances or stress."
            } else if duration > config.long_cycle_days {
                "Your last cycle was longer than average. Long cycles can sometimes be related to hormonal changes, stress, or other factors."
            } else {
                "Your cycle length is within the normal range, which is a positive indicator of reproductive health."
            };
            out.push(message.to_owned());
        }

        if history.len() >= config.consistency_window {
            if let Some(stats) = CycleLengthStats::from_recent(
                history.iter().copied(),
                config.consistency_window,
                config.default_cycle_length_days,
            ) {
                let message = if stats.variation > config.cycle_variation_days {
                    "Your cycle length has varied significantly in recent months. This can be normal, but if it concerns you, consider discussing it with a healthcare provider."
                } else {
                    "Your cycle has been relatively consistent in recent months, which is a positive sign of hormonal balance."
                };
                out.push(message.to_owned());
                out.push(format!(
                    "Based on your history, your average cycle length is {} days.",
                    stats.rounded_average()
                ));
            }
        }

        if let Some(next) = latest.predicted_next_start {
            out.push(self.prediction_message((next - today).num_days()));
        }

        out.push(phase_message(current_phase(latest.start_date, today).phase).to_owned());
        out
    }

    fn prediction_message(&self, days_until: i64) -> String {
        if days_until > 0 {
            format!("Your next cycle is predicted to start in approximately {days_until} days.")
        } else if days_until == 0 {
            "Your next cycle is expected to start today.".to_owned()
        } else if days_until > -self.config.late_window_days {
            "Your period appears to be late. This can be due to various factors including stress, exercise, or hormonal changes.".to_owned()
        } else {
            "Your period appears to be significantly delayed. If this is unusual for you, consider consulting with a healthcare provider.".to_owned()
        }
    }

    fn risk_insights(&self, newest_first: &[&RiskAssessment]) -> Vec<String> {
        let Some(latest) = newest_first.first() else {
            return vec![NO_RISK_DATA.to_owned()];
        };
        let condition = latest.category.display_name();

        let level = match RecommendationTier::from_score(latest.score) {
            RecommendationTier::Escalation => "shows a high risk level. It's recommended to consult with a healthcare provider.",
            RecommendationTier::Moderate => "shows a moderate risk level. Consider the recommended lifestyle modifications.",
            RecommendationTier::Routine => "shows a low risk level. Continue with preventive health measures.",
        };
        let mut out = vec![format!("Your risk assessment for {condition} {level}")];

        if let Some(first) = latest.recommendations.first() {
            out.push(format!("Key recommendation: {first}"));
        }

        if let Some(previous) = newest_first.get(1) {
            if previous.category == latest.category {
                let change = latest.score - previous.score;
                if change > self.config.risk_change_points {
                    out.push(format!(
                        "Your risk for {condition} has increased since your last assessment. Review the recommendations and consider consulting a healthcare provider."
                    ));
                } else if change < -self.config.risk_change_points {
                    out.push(format!(
                        "Your risk for {condition} has decreased since your last assessment. Your health changes appear to be having a positive impact."
                    ));
                }
            }
        }
        out
    }

    fn correlations(
        &self,
        bmi: &[&BmiRecord],
        cycles: &[&CycleRecord],
        risks: &[&RiskAssessment],
    ) -> Vec<String> {
        let Some(latest_bmi) = bmi.last() else {
            return Vec::new();
        };
        let mut out = Vec::new();

        let has_long_cycle = cycles.iter().any(|c| {
            effective_duration(c, self.config.default_cycle_length_days)
                > self.config.long_cycle_days
        });
        if has_long_cycle {
            if latest_bmi.category == BmiCategory::Underweight {
                out.push("Being underweight can sometimes affect menstrual regularity. Maintaining a healthy weight may help regulate your cycle.".to_owned());
            } else if latest_bmi.category.is_above_normal() {
                out.push("Higher body weight can sometimes affect menstrual regularity. Gradual weight management may help improve cycle regularity.".to_owned());
            }
        }

        let elevated_pcos = risks.iter().any(|r| {
            r.category == RiskCategory::Pcos && r.score > self.config.pcos_correlation_score
        });
        if elevated_pcos && latest_bmi.category.is_above_normal() {
            out.push("Weight management can be particularly beneficial for managing PCOS symptoms. Even a modest 5-10% weight reduction can help improve hormonal balance.".to_owned());
        }
        out
    }
}

/// Generate insights with the default thresholds
#[must_use]
pub fn generate(
    bmi_history: &[BmiRecord],
    cycle_history: &[CycleRecord],
    risk_history: &[RiskAssessment],
    today: NaiveDate,
) -> HealthInsights {
    InsightAggregator::new().generate(bmi_history, cycle_history, risk_history, today)
}

const fn bmi_category_insights(category: BmiCategory) -> &'static [&'static str] {
    match category {
        BmiCategory::Underweight => &[
            "Your BMI indicates you are underweight. Consider consulting with a nutritionist for a personalized plan to reach a healthy weight.",
            "Focus on nutrient-dense foods and consider adding strength training to your exercise routine.",
        ],
        BmiCategory::Normal => &[
            "Your BMI is within the normal range. Keep up the good work with your healthy lifestyle habits!",
        ],
        BmiCategory::Overweight => &[
            "Your BMI indicates you are overweight. Small, sustainable changes to diet and exercise can help you reach a healthier weight.",
            "Consider incorporating more physical activity into your daily routine and focusing on portion control.",
        ],
        BmiCategory::Obese => &[
            "Your BMI indicates obesity, which increases risk for various health conditions. Consider consulting with a healthcare provider.",
            "Focus on gradual, sustainable lifestyle changes rather than rapid weight loss for long-term success.",
        ],
    }
}

fn bmi_trend_message(change: f64, previous: BmiCategory, latest: BmiCategory) -> Option<String> {
    let magnitude = change.abs();
    if change > 0.0 && latest.is_above_normal() {
        Some(format!("Your BMI has increased by {magnitude:.1} points since your last measurement. Consider reviewing your diet and exercise habits."))
    } else if change > 0.0 && latest == BmiCategory::Normal {
        Some(format!("Your BMI has increased by {magnitude:.1} points but remains in the normal range. Continue monitoring your health habits."))
    } else if change < 0.0 && previous.is_above_normal() {
        Some(format!("Great progress! Your BMI has decreased by {magnitude:.1} points since your last measurement."))
    } else if change < 0.0 && latest == BmiCategory::Underweight {
        Some(format!("Your BMI has decreased by {magnitude:.1} points and is now in the underweight range. Consider consulting with a healthcare provider."))
    } else {
        None
    }
}

const fn phase_message(phase: CyclePhase) -> &'static str {
    match phase {
        CyclePhase::PreCycle => "You are currently in your pre-menstrual phase. This is a good time to focus on self-care and stress management.",
        CyclePhase::Menstrual => "You are currently in your menstrual phase. Focus on iron-rich foods and gentle exercise to support your body.",
        CyclePhase::Follicular => "You are currently in your follicular phase. Energy levels are typically higher during this time, making it ideal for more intense workouts.",
        CyclePhase::Ovulation => "You are currently in your ovulation phase. This is your peak fertility window, and energy and mood are often at their highest.",
        CyclePhase::Luteal => "You are currently in your luteal phase. You may experience changes in energy and mood. Prioritize balanced nutrition and adequate rest.",
    }
}
