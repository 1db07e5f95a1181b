// ABOUTME: Output formatting helpers for ira-cli
// ABOUTME: Renders command results as banner-style text or pretty JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IRA Health

use chrono::NaiveDate;
use ira_health::config::OutputFormat;
use ira_health::diet::{format_calorie_delta, MealPlan};
use ira_health::errors::AppResult;
use ira_health::intelligence::algorithms::CyclePhaseInfo;
use ira_health::intelligence::cycle_tracking::NewCycle;
use ira_health::models::{BmiRecord, HealthInsights, Question, RiskAssessment, RiskCategory};
use ira_health::shop::{CartItem, CartSummary};
use serde::Serialize;

/// Routes results to the text renderer or to JSON
pub struct Printer {
    format: OutputFormat,
}

impl Printer {
    /// Printer for the chosen format
    pub const fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Active format
    pub const fn format(&self) -> OutputFormat {
        self.format
    }

    /// Print `value` as JSON, or call `text` for human-readable output
    pub fn emit<T: Serialize + ?Sized>(&self, value: &T, text: impl FnOnce()) -> AppResult<()> {
        match self.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
            OutputFormat::Text => text(),
        }
        Ok(())
    }
}

fn banner(title: &str, width: usize) {
    println!("\n{title}");
    println!("{}", "=".repeat(width));
}

/// BMI result with guidance and tips
pub fn display_bmi(record: &BmiRecord) {
    banner("BMI Result", 60);
    println!("   Height: {:.1} cm", record.height_cm);
    println!("   Weight: {:.1} kg", record.weight_kg);
    println!("   BMI: {:.1}", record.bmi);
    println!("   Category: {}", record.category);
    println!("\n{}", record.category.guidance());
    println!("\nRecommendations:");
    for tip in record.category.tips() {
        println!("• {tip}");
    }
}

/// Score, level, and recommendations
pub fn display_assessment(assessment: &RiskAssessment) {
    banner(assessment.category.title(), 60);
    println!("   Score: {:.1}%", assessment.score);
    println!("   Level: {}", assessment.level());
    println!("   Date: {}", assessment.date);

    println!("\nRecommendations:");
    for (index, recommendation) in assessment.recommendations.iter().enumerate() {
        println!("{}. {recommendation}", index + 1);
    }

    if !assessment.unanswered.is_empty() {
        println!(
            "\nNote: {} question(s) were not answered and were scored as \"no\": {}",
            assessment.unanswered.len(),
            assessment.unanswered.join(", ")
        );
    }
    println!("\nThis screening is not a diagnosis. Consult a healthcare provider with any concerns.");
}

/// Questions grouped by condition
pub fn display_questions(categories: &[RiskCategory], questions: &[&Question]) {
    for category in categories {
        banner(category.title(), 60);
        println!("{}", category.description());
        for question in questions.iter().filter(|q| q.category == *category) {
            println!("   [{}] {} (weight {})", question.id, question.text, question.weight);
        }
    }
}

/// Phase name and description
pub fn display_phase(info: &CyclePhaseInfo) {
    banner(info.name, 50);
    println!("   Day of cycle: {}", info.days_since_start);
    println!("   {}", info.description);
}

/// Closed and started cycles
pub fn display_new_cycle(outcome: &NewCycle) {
    banner("New Cycle Started", 50);
    if let Some(closed) = &outcome.closed {
        println!(
            "   Previous cycle: {} to {} ({} days)",
            closed.start_date,
            closed.end_date.map_or_else(String::new, |d| d.to_string()),
            closed.duration.unwrap_or_default()
        );
    }
    println!("   Started: {}", outcome.started.start_date);
    if let Some(next) = outcome.started.predicted_next_start {
        println!("   Next cycle predicted: {}", next.format("%B %-d, %Y"));
    }
}

/// All insight sections
pub fn display_insights(insights: &HealthInsights, today: NaiveDate) {
    banner(&format!("Health Insights ({today})"), 70);
    for (title, lines) in [
        ("BMI", &insights.bmi),
        ("Cycle", &insights.cycle),
        ("Risk", &insights.risk),
        ("General", &insights.general),
    ] {
        println!("\n{title}:");
        for line in lines {
            println!("• {line}");
        }
    }
}

/// Cart lines and totals
pub fn display_cart(items: &[CartItem], summary: &CartSummary) {
    banner("Cart Summary", 50);
    for item in items {
        println!(
            "   {} x{} @ {:.2} = {:.2}",
            item.name,
            item.quantity,
            item.unit_price,
            item.line_total()
        );
    }
    println!("{}", "-".repeat(50));
    println!("   Subtotal: {:.2}", summary.subtotal);
    println!("   Tax (10%): {:.2}", summary.tax);
    println!("   Shipping: {:.2}", summary.shipping);
    println!("   Total: {:.2}", summary.total);
    println!("   Amount (minor units): {}", summary.to_minor_units());
}

/// One day of a meal plan with totals against the target
pub fn display_meal_day(plan: &MealPlan, date: NaiveDate) {
    banner(&format!("Meal Plan {date} ({})", plan.diet_type.display_name()), 60);
    match plan.day(date) {
        Some(day) => {
            for (kind, meal) in day.meals() {
                println!("   {kind}: {} ({:.0} cal)", meal.name, meal.nutritional_info.calories);
            }
        }
        None => println!("   No meals planned for this date"),
    }
    let totals = plan.daily_totals(date);
    println!("{}", "-".repeat(60));
    println!("   Calories: {:.0}", totals.calories);
    println!("   Protein: {:.0}g", totals.protein);
    println!("   Carbs: {:.0}g", totals.carbs);
    println!("   Fat: {:.0}g", totals.fat);
    println!("   Target: {:.0} calories", plan.target_calories);
    println!("   Difference: {}", format_calorie_delta(plan.calorie_delta(date)));
}
