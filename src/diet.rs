// ABOUTME: Meal plans with per-meal nutrition and daily totals against a calorie target
// ABOUTME: Diet types, health goals, plan validation, and JSON plan files read by the CLI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IRA Health

//! Diet planning
//!
//! A plan maps each date to breakfast, lunch, dinner and any number of
//! snacks. Daily totals add up every meal present on that date.

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::iter::Sum;
use std::ops::{Add, AddAssign};
use std::path::Path;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::constants::diet::DEFAULT_TARGET_CALORIES;
use crate::errors::{AppError, AppResult};

/// Calories and macronutrients in grams
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionalInfo {
    /// Energy in kcal
    pub calories: f64,
    /// Protein (g)
    pub protein: f64,
    /// Carbohydrates (g)
    pub carbs: f64,
    /// Fat (g)
    pub fat: f64,
}

impl NutritionalInfo {
    fn is_valid(&self) -> bool {
        [self.calories, self.protein, self.carbs, self.fat]
            .iter()
            .all(|v| v.is_finite() && *v >= 0.0)
    }
}

impl Add for NutritionalInfo {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

impl AddAssign for NutritionalInfo {
    fn add_assign(&mut self, rhs: Self) {
        self.calories += rhs.calories;
        self.protein += rhs.protein;
        self.carbs += rhs.carbs;
        self.fat += rhs.fat;
    }
}

impl Sum for NutritionalInfo {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}

/// Slot a meal occupies in a day
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MealType {
    /// Breakfast meal
    Breakfast,
    /// Lunch meal
    Lunch,
    /// Dinner meal
    Dinner,
    /// Snack between meals
    Snack,
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Breakfast => write!(f, "Breakfast"),
            Self::Lunch => write!(f, "Lunch"),
            Self::Dinner => write!(f, "Dinner"),
            Self::Snack => write!(f, "Snack"),
        }
    }
}

/// One planned dish
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    /// Dish name
    pub name: String,
    /// Ingredient list
    #[serde(default)]
    pub ingredients: Vec<String>,
    /// Nutrition for the whole portion
    pub nutritional_info: NutritionalInfo,
    /// Link to a recipe
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipe_url: Option<String>,
    /// Link to a photo
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl Meal {
    /// Meal with no ingredients or links
    #[must_use]
    pub fn new(name: impl Into<String>, nutritional_info: NutritionalInfo) -> Self {
        Self {
            name: name.into(),
            ingredients: Vec::new(),
            nutritional_info,
            recipe_url: None,
            image_url: None,
        }
    }
}

/// Meals planned for one date
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DailyPlan {
    /// Morning meal
    #[serde(default)]
    pub breakfast: Option<Meal>,
    /// Midday meal
    #[serde(default)]
    pub lunch: Option<Meal>,
    /// Evening meal
    #[serde(default)]
    pub dinner: Option<Meal>,
    /// Snacks in the order they are eaten
    #[serde(default)]
    pub snacks: Vec<Meal>,
}

impl DailyPlan {
    /// Every meal present, main meals first
    pub fn meals(&self) -> impl Iterator<Item = (MealType, &Meal)> {
        [
            (MealType::Breakfast, self.breakfast.as_ref()),
            (MealType::Lunch, self.lunch.as_ref()),
            (MealType::Dinner, self.dinner.as_ref()),
        ]
        .into_iter()
        .filter_map(|(kind, meal)| meal.map(|m| (kind, m)))
        .chain(self.snacks.iter().map(|m| (MealType::Snack, m)))
    }

    /// Sum of every meal's nutrition
    #[must_use]
    pub fn totals(&self) -> NutritionalInfo {
        self.meals().map(|(_, meal)| meal.nutritional_info).sum()
    }
}

/// Eating pattern the plan follows
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DietType {
    /// Balanced diet
    #[default]
    Balanced,
    /// Vegetarian
    Vegetarian,
    /// Vegan
    Vegan,
    /// Low carb
    LowCarb,
    /// High protein
    HighProtein,
    /// Ketogenic
    Keto,
}

impl DietType {
    /// Every diet type, in menu order
    pub const ALL: [Self; 6] = [
        Self::Balanced,
        Self::Vegetarian,
        Self::Vegan,
        Self::LowCarb,
        Self::HighProtein,
        Self::Keto,
    ];

    /// Human-readable name
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Balanced => "Balanced Diet",
            Self::Vegetarian => "Vegetarian",
            Self::Vegan => "Vegan",
            Self::LowCarb => "Low Carb",
            Self::HighProtein => "High Protein",
            Self::Keto => "Ketogenic",
        }
    }

    const fn as_str(self) -> &'static str {
        match self {
            Self::Balanced => "balanced",
            Self::Vegetarian => "vegetarian",
            Self::Vegan => "vegan",
            Self::LowCarb => "low_carb",
            Self::HighProtein => "high_protein",
            Self::Keto => "keto",
        }
    }
}

impl fmt::Display for DietType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DietType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|d| d.as_str() == wanted)
            .ok_or_else(|| {
                AppError::invalid_input(format!(
                    "Unknown diet type: '{s}'. Valid options: balanced, vegetarian, vegan, low_carb, high_protein, keto"
                ))
            })
    }
}

/// What the plan is meant to help with
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum HealthGoal {
    /// Weight loss
    WeightLoss,
    /// Weight gain
    WeightGain,
    /// Weight maintenance
    Maintenance,
    /// PCOS management
    PcosManagement,
    /// Hormone balance
    HormoneBalance,
    /// Energy boost
    EnergyBoost,
    /// Immune support
    ImmuneSupport,
}

impl HealthGoal {
    /// Human-readable name
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::WeightLoss => "Weight Loss",
            Self::WeightGain => "Weight Gain",
            Self::Maintenance => "Weight Maintenance",
            Self::PcosManagement => "PCOS Management",
            Self::HormoneBalance => "Hormone Balance",
            Self::EnergyBoost => "Energy Boost",
            Self::ImmuneSupport => "Immune Support",
        }
    }
}

const fn default_target_calories() -> f64 {
    DEFAULT_TARGET_CALORIES
}

/// A dated meal plan with a daily calorie target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealPlan {
    /// Plan identifier
    pub id: String,
    /// First planned date
    pub start_date: NaiveDate,
    /// Last planned date, inclusive
    pub end_date: NaiveDate,
    /// Daily calorie target
    #[serde(default = "default_target_calories")]
    pub target_calories: f64,
    /// Eating pattern
    #[serde(default)]
    pub diet_type: DietType,
    /// Goals the plan serves
    #[serde(default)]
    pub health_goals: Vec<HealthGoal>,
    /// Meals by date
    #[serde(default)]
    pub daily_plans: BTreeMap<NaiveDate, DailyPlan>,
}

impl MealPlan {
    /// Parse a plan from JSON text
    ///
    /// # Errors
    ///
    /// Returns `InvalidFormat` for malformed JSON or unknown enum values
    pub fn from_json(json: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read, parse, and validate a plan file
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for a missing file, `InvalidFormat` for
    /// malformed content, and the errors of [`MealPlan::validate`]
    pub fn from_path(path: &Path) -> AppResult<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                AppError::not_found(format!("Meal plan file {}", path.display()))
            } else {
                AppError::from(e)
            }
        })?;
        let plan = Self::from_json(&contents)?;
        plan.validate()?;
        info!(
            path = %path.display(),
            plan_id = %plan.id,
            days = plan.daily_plans.len(),
            "Loaded meal plan"
        );
        Ok(plan)
    }

    /// Check the target, the date range, and every meal's nutrition
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` for a non-positive target, a day outside the
    /// plan's range, or negative nutrition, and `InvalidInput` for an
    /// inverted range or an unnamed meal
    pub fn validate(&self) -> AppResult<()> {
        if !self.target_calories.is_finite() || self.target_calories <= 0.0 {
            return Err(AppError::value_out_of_range(format!(
                "Meal plan {} has a non-positive calorie target of {}",
                self.id, self.target_calories
            )));
        }
        if self.end_date < self.start_date {
            return Err(AppError::invalid_input(format!(
                "Meal plan {} ends on {} before it starts on {}",
                self.id, self.end_date, self.start_date
            )));
        }
        for (date, day) in &self.daily_plans {
            if *date < self.start_date || *date > self.end_date {
                return Err(AppError::value_out_of_range(format!(
                    "Meal plan {} has meals on {date}, outside {} to {}",
                    self.id, self.start_date, self.end_date
                )));
            }
            for (kind, meal) in day.meals() {
                if meal.name.trim().is_empty() {
                    return Err(AppError::invalid_input(format!(
                        "{kind} on {date} has no name"
                    )));
                }
                if !meal.nutritional_info.is_valid() {
                    return Err(AppError::value_out_of_range(format!(
                        "{kind} '{}' on {date} has negative or non-finite nutrition",
                        meal.name
                    )));
                }
            }
        }
        Ok(())
    }

    /// Meals planned for `date`
    #[must_use]
    pub fn day(&self, date: NaiveDate) -> Option<&DailyPlan> {
        self.daily_plans.get(&date)
    }

    /// Totals for `date`, all zero when nothing is planned that day
    #[must_use]
    pub fn daily_totals(&self, date: NaiveDate) -> NutritionalInfo {
        let totals = self.day(date).map(DailyPlan::totals).unwrap_or_default();
        debug!(%date, calories = totals.calories, "Computed daily nutrition totals");
        totals
    }

    /// Planned calories on `date` minus the target; positive means over target
    #[must_use]
    pub fn calorie_delta(&self, date: NaiveDate) -> f64 {
        self.daily_totals(date).calories - self.target_calories
    }
}

/// Signed delta as shown next to the target, e.g. "+150 calories"
#[must_use]
pub fn format_calorie_delta(delta: f64) -> String {
    if delta > 0.0 {
        format!("+{delta:.0} calories")
    } else {
        format!("{delta:.0} calories")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(calories: f64, protein: f64, carbs: f64, fat: f64) -> NutritionalInfo {
        NutritionalInfo {
            calories,
            protein,
            carbs,
            fat,
        }
    }

    #[test]
    fn test_missing_main_meals_are_skipped() {
        let day = DailyPlan {
            lunch: Some(Meal::new("Soup", info(400.0, 25.0, 45.0, 10.0))),
            snacks: vec![Meal::new("Apple", info(95.0, 0.5, 25.0, 0.3))],
            ..DailyPlan::default()
        };

        let kinds: Vec<MealType> = day.meals().map(|(kind, _)| kind).collect();
        assert_eq!(kinds, vec![MealType::Lunch, MealType::Snack]);
        assert!((day.totals().calories - 495.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_delta_formatting() {
        assert_eq!(format_calorie_delta(150.0), "+150 calories");
        assert_eq!(format_calorie_delta(-250.0), "-250 calories");
        assert_eq!(format_calorie_delta(0.0), "0 calories");
    }

    #[test]
    fn test_diet_type_parsing() {
        assert_eq!("low_carb".parse::<DietType>().ok(), Some(DietType::LowCarb));
        assert_eq!(DietType::Keto.display_name(), "Ketogenic");
        assert!("paleo".parse::<DietType>().is_err());
    }
}
