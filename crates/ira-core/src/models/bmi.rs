// ABOUTME: Body Mass Index record model and category classification
// ABOUTME: BmiCategory thresholds, guidance text, and the persisted BmiRecord shape
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IRA Health

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::constants::bmi::{CM_PER_METRE, NORMAL_BELOW, OVERWEIGHT_BELOW, UNDERWEIGHT_BELOW};
use crate::errors::AppError;

/// Tolerance when checking a stored BMI against its height and weight
const BMI_CONSISTENCY_TOLERANCE: f64 = 0.05;

/// Adult BMI category
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    /// BMI below 18.5
    Underweight,
    /// BMI in [18.5, 25)
    Normal,
    /// BMI in [25, 30)
    Overweight,
    /// BMI of 30 or more
    Obese,
}

impl BmiCategory {
    /// Classify a BMI value
    #[must_use]
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < UNDERWEIGHT_BELOW {
            Self::Underweight
        } else if bmi < NORMAL_BELOW {
            Self::Normal
        } else if bmi < OVERWEIGHT_BELOW {
            Self::Overweight
        } else {
            Self::Obese
        }
    }

    /// Stable lowercase name
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Underweight => "underweight",
            Self::Normal => "normal",
            Self::Overweight => "overweight",
            Self::Obese => "obese",
        }
    }

    /// True for overweight and obese
    #[must_use]
    pub const fn is_above_normal(&self) -> bool {
        matches!(self, Self::Overweight | Self::Obese)
    }

    /// One-sentence explanation shown next to a freshly computed BMI
    #[must_use]
    pub const fn guidance(&self) -> &'static str {
        match self {
            Self::Underweight => "Your BMI suggests you are underweight. This may indicate malnutrition or other health problems. Consider consulting with a healthcare professional.",
            Self::Normal => "Your BMI is within the normal range. This suggests you have a healthy weight for your height. Maintain a balanced diet and regular physical activity.",
            Self::Overweight => "Your BMI suggests you are overweight. This may increase your risk of health problems. Consider making lifestyle changes and consulting with a healthcare professional.",
            Self::Obese => "Your BMI suggests you are obese. This increases your risk of various health problems. It's recommended to consult with a healthcare professional for personalized advice.",
        }
    }

    /// Practical recommendations for the category
    #[must_use]
    pub const fn tips(&self) -> &'static [&'static str] {
        match self {
            Self::Underweight => &[
                "Increase your calorie intake with nutrient-rich foods",
                "Include protein-rich foods in your diet",
                "Consider strength training to build muscle mass",
                "Consult with a nutritionist for a personalized meal plan",
            ],
            Self::Normal => &[
                "Maintain a balanced diet with plenty of fruits and vegetables",
                "Stay physically active with regular exercise",
                "Get regular health check-ups",
                "Focus on overall wellness, not just weight",
            ],
            Self::Overweight => &[
                "Gradually increase physical activity",
                "Focus on a balanced diet with portion control",
                "Reduce intake of processed foods and sugary drinks",
                "Set realistic weight loss goals (0.5-1 kg per week)",
            ],
            Self::Obese => &[
                "Consult with a healthcare professional before starting any weight loss program",
                "Focus on gradual, sustainable lifestyle changes",
                "Increase physical activity as recommended by your doctor",
                "Consider working with a dietitian for a personalized meal plan",
                "Monitor other health markers like blood pressure and cholesterol",
            ],
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BmiCategory {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "underweight" => Ok(Self::Underweight),
            "normal" => Ok(Self::Normal),
            "overweight" => Ok(Self::Overweight),
            "obese" => Ok(Self::Obese),
            other => Err(AppError::invalid_input(format!(
                "Unknown BMI category: '{other}'. Valid options: underweight, normal, overweight, obese"
            ))),
        }
    }
}

/// A saved BMI measurement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BmiRecord {
    /// Height in centimetres
    pub height_cm: f64,
    /// Weight in kilograms
    pub weight_kg: f64,
    /// Derived BMI
    pub bmi: f64,
    /// Derived category
    pub category: BmiCategory,
    /// Measurement date
    pub date: NaiveDate,
}

impl BmiRecord {
    /// Recompute BMI from the stored height and weight
    #[must_use]
    pub fn expected_bmi(&self) -> f64 {
        let metres = self.height_cm / CM_PER_METRE;
        self.weight_kg / (metres * metres)
    }

    /// Check the derived fields against height and weight
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when height or weight is non-positive, the stored
    /// BMI disagrees with them, or the category does not match the BMI.
    pub fn validate(&self) -> Result<(), AppError> {
        if !(self.height_cm > 0.0 && self.weight_kg > 0.0) {
            return Err(AppError::invalid_input(format!(
                "BMI record on {} has non-positive height or weight",
                self.date
            )));
        }
        let expected = self.expected_bmi();
        if (expected - self.bmi).abs() > BMI_CONSISTENCY_TOLERANCE {
            return Err(AppError::invalid_input(format!(
                "BMI record on {} stores {:.2} but height and weight give {expected:.2}",
                self.date, self.bmi
            )));
        }
        if BmiCategory::from_bmi(self.bmi) != self.category {
            return Err(AppError::invalid_input(format!(
                "BMI record on {} is labelled {} but {:.1} is {}",
                self.date,
                self.category,
                self.bmi,
                BmiCategory::from_bmi(self.bmi)
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_boundaries_are_lower_inclusive() {
        assert_eq!(BmiCategory::from_bmi(18.49), BmiCategory::Underweight);
        assert_eq!(BmiCategory::from_bmi(18.5), BmiCategory::Normal);
        assert_eq!(BmiCategory::from_bmi(24.99), BmiCategory::Normal);
        assert_eq!(BmiCategory::from_bmi(25.0), BmiCategory::Overweight);
        assert_eq!(BmiCategory::from_bmi(30.0), BmiCategory::Obese);
    }

    #[test]
    fn test_unknown_category_rejected() {
        assert!("athletic".parse::<BmiCategory>().is_err());
        assert_eq!("Obese".parse::<BmiCategory>().unwrap(), BmiCategory::Obese);
    }

    #[test]
    fn test_obese_has_five_tips() {
        assert_eq!(BmiCategory::Obese.tips().len(), 5);
        assert_eq!(BmiCategory::Normal.tips().len(), 4);
    }
}
