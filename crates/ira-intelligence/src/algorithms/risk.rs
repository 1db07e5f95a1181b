// ABOUTME: Weighted yes/no questionnaire scoring for PCOS, PCOD, and breast cancer screening
// ABOUTME: Holds the standard question catalog and maps scores to tiered recommendations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IRA Health

//! Risk questionnaire scoring
//!
//! The score is the answered-yes share of a category's total question weight,
//! expressed as a percentage. It is a screening aid, not a diagnosis.

use std::collections::HashSet;
use std::sync::OnceLock;

use chrono::NaiveDate;
use ira_core::constants::risk::{ESCALATION_ABOVE, MAX_SCORE, MODERATE_ABOVE};
use ira_core::errors::{AppError, AppResult};
use ira_core::models::{AnswerSet, Question, RiskAssessment, RiskCategory};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Appended to every tier, in this order
pub const BASE_RECOMMENDATIONS: [&str; 3] = [
    "Schedule regular check-ups with your healthcare provider",
    "Maintain a healthy diet and exercise routine",
    "Keep track of your symptoms and changes",
];

/// (id, text, category, weight)
const STANDARD_QUESTIONS: &[(&str, &str, RiskCategory, f64)] = &[
    (
        "irregular_periods",
        "Do you have irregular menstrual periods?",
        RiskCategory::Pcos,
        2.0,
    ),
    (
        "weight_gain",
        "Have you experienced unexplained weight gain or difficulty losing weight?",
        RiskCategory::Pcos,
        1.5,
    ),
    (
        "acne",
        "Do you have persistent acne?",
        RiskCategory::Pcos,
        1.0,
    ),
    (
        "hair_growth",
        "Do you have excessive hair growth on face, chest, or other areas?",
        RiskCategory::Pcos,
        1.5,
    ),
    (
        "hair_loss",
        "Have you experienced hair thinning or male-pattern baldness?",
        RiskCategory::Pcos,
        1.0,
    ),
    (
        "pelvic_pain",
        "Do you experience pelvic pain during menstruation?",
        RiskCategory::Pcod,
        2.0,
    ),
    (
        "mood_swings",
        "Do you have severe mood swings before or during periods?",
        RiskCategory::Pcod,
        1.0,
    ),
    (
        "fatigue",
        "Do you experience unusual fatigue or low energy?",
        RiskCategory::Pcod,
        1.5,
    ),
    (
        "skin_darkening",
        "Have you noticed darkening of skin in certain areas?",
        RiskCategory::Pcod,
        1.0,
    ),
    (
        "breast_lump",
        "Have you noticed any lumps in your breasts?",
        RiskCategory::BreastCancer,
        3.0,
    ),
    (
        "breast_changes",
        "Have you noticed any changes in breast size or shape?",
        RiskCategory::BreastCancer,
        2.0,
    ),
    (
        "nipple_discharge",
        "Have you experienced any unusual nipple discharge?",
        RiskCategory::BreastCancer,
        2.0,
    ),
    (
        "breast_pain",
        "Do you have persistent breast pain?",
        RiskCategory::BreastCancer,
        1.5,
    ),
];

static STANDARD_CATALOG: OnceLock<QuestionCatalog> = OnceLock::new();

/// Immutable set of weighted questions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionCatalog {
    questions: Vec<Question>,
}

impl QuestionCatalog {
    /// Build a catalog, rejecting duplicate ids and non-positive weights
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidInput` if a weight is not a positive finite
    /// number or an id appears twice
    pub fn new(questions: Vec<Question>) -> AppResult<Self> {
        let mut seen = HashSet::with_capacity(questions.len());
        for question in &questions {
            if !question.weight.is_finite() || question.weight <= 0.0 {
                return Err(AppError::invalid_input(format!(
                    "Question '{}' must have a positive weight, got {}",
                    question.id, question.weight
                )));
            }
            if !seen.insert(question.id.as_str()) {
                return Err(AppError::invalid_input(format!(
                    "Duplicate question id '{}'",
                    question.id
                )));
            }
        }
        Ok(Self { questions })
    }

    /// The built-in questionnaire shared by every assessment
    pub fn standard() -> &'static Self {
        STANDARD_CATALOG.get_or_init(|| Self {
            questions: STANDARD_QUESTIONS
                .iter()
                .map(|&(id, text, category, weight)| Question {
                    id: id.to_owned(),
                    text: text.to_owned(),
                    category,
                    weight,
                })
                .collect(),
        })
    }

    /// All questions in catalog order
    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Questions for one category, in catalog order
    pub fn for_category(&self, category: RiskCategory) -> impl Iterator<Item = &Question> {
        self.questions
            .iter()
            .filter(move |q| q.category == category)
    }

    /// Sum of weights for a category
    #[must_use]
    pub fn max_score(&self, category: RiskCategory) -> f64 {
        self.for_category(category).map(|q| q.weight).sum()
    }
}

/// Recommendation tier selected by the score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationTier {
    /// Score at or below 40
    Routine,
    /// Score above 40 up to 70
    Moderate,
    /// Score above 70
    Escalation,
}

impl RecommendationTier {
    /// Select the tier; each bound is exclusive below and inclusive above
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score > ESCALATION_ABOVE {
            Self::Escalation
        } else if score > MODERATE_ABOVE {
            Self::Moderate
        } else {
            Self::Routine
        }
    }

    /// Tier-specific items placed before the base recommendations
    #[must_use]
    pub const fn leading(&self) -> [&'static str; 2] {
        match self {
            Self::Escalation => [
                "Consult a healthcare provider immediately",
                "Consider comprehensive medical screening",
            ],
            Self::Moderate => [
                "Schedule a consultation with a healthcare provider",
                "Monitor your symptoms closely",
            ],
            Self::Routine => [
                "Continue with routine health screenings",
                "Maintain awareness of any changes",
            ],
        }
    }
}

/// Full recommendation list for a score: tier items then the base items
#[must_use]
pub fn recommendations(score: f64) -> Vec<String> {
    RecommendationTier::from_score(score)
        .leading()
        .iter()
        .chain(BASE_RECOMMENDATIONS.iter())
        .map(|s| (*s).to_owned())
        .collect()
}

/// Scores answer sets against a catalog
#[derive(Debug, Clone, Copy)]
pub struct RiskScorer<'a> {
    catalog: &'a QuestionCatalog,
}

impl Default for RiskScorer<'static> {
    fn default() -> Self {
        Self::new(QuestionCatalog::standard())
    }
}

impl<'a> RiskScorer<'a> {
    /// Scorer over a specific catalog
    #[must_use]
    pub const fn new(catalog: &'a QuestionCatalog) -> Self {
        Self { catalog }
    }

    /// Score one questionnaire
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidInput` when the catalog has no weight for
    /// `category`, since the percentage would be undefined
    pub fn score(
        &self,
        category: RiskCategory,
        answers: &AnswerSet,
        date: NaiveDate,
    ) -> AppResult<RiskAssessment> {
        let max_score = self.catalog.max_score(category);
        if max_score <= 0.0 {
            return Err(AppError::invalid_input(format!(
                "No questions with positive weight for category '{category}'"
            )));
        }

        let mut user_score = 0.0;
        let mut unanswered = Vec::new();
        for question in self.catalog.for_category(category) {
            match answers.get(&question.id) {
                Some(true) => user_score += question.weight,
                Some(false) => {}
                None => unanswered.push(question.id.clone()),
            }
        }

        let unknown = answers
            .keys()
            .filter(|id| !self.catalog.for_category(category).any(|q| &q.id == *id))
            .count();
        if unknown > 0 {
            warn!(
                category = %category,
                unknown,
                "Ignoring answers that do not belong to the questionnaire"
            );
        }

        let score = (MAX_SCORE * user_score / max_score).clamp(0.0, MAX_SCORE);
        debug!(
            category = %category,
            score,
            unanswered = unanswered.len(),
            "Risk questionnaire scored"
        );

        Ok(RiskAssessment {
            category,
            score,
            recommendations: recommendations(score),
            date,
            unanswered,
        })
    }
}

/// Score `answers` for `category` against `catalog`
///
/// # Errors
///
/// Returns `AppError::InvalidInput` when the category has no questions in the catalog
pub fn score(
    category: RiskCategory,
    answers: &AnswerSet,
    catalog: &QuestionCatalog,
    date: NaiveDate,
) -> AppResult<RiskAssessment> {
    RiskScorer::new(catalog).score(category, answers, date)
}
