// ABOUTME: Diet command for ira-cli
// ABOUTME: Prints one day of a meal plan with nutrition totals and the calorie delta
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IRA Health

use std::path::Path;

use chrono::NaiveDate;
use ira_health::diet::MealPlan;
use ira_health::errors::AppResult;
use serde_json::json;
use tracing::warn;

use crate::helpers::display::{display_meal_day, Printer};

/// Totals for `date` in the plan at `path`
pub fn day(printer: &Printer, path: &Path, date: NaiveDate) -> AppResult<()> {
    let plan = MealPlan::from_path(path)?;
    if plan.day(date).is_none() {
        warn!(%date, plan_id = %plan.id, "No meals planned for this date");
    }
    let totals = plan.daily_totals(date);
    let delta = plan.calorie_delta(date);
    let payload = json!({
        "plan_id": plan.id,
        "date": date,
        "meals": plan.day(date),
        "totals": totals,
        "target_calories": plan.target_calories,
        "calorie_delta": delta,
    });
    printer.emit(&payload, || display_meal_day(&plan, date))
}
