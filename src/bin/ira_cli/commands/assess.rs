// ABOUTME: BMI and risk questionnaire commands for ira-cli
// ABOUTME: Classifies measurements, scores answers, and lists the question catalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IRA Health

use chrono::NaiveDate;
use ira_health::errors::{AppError, AppResult};
use ira_health::intelligence::algorithms::{bmi as bmi_classifier, QuestionCatalog, RiskScorer};
use ira_health::models::{AnswerSet, RiskCategory};
use tracing::info;

use crate::helpers::display::{display_assessment, display_bmi, display_questions, Printer};

/// Classify a height/weight measurement
pub fn bmi(printer: &Printer, height_cm: f64, weight_kg: f64, today: NaiveDate) -> AppResult<()> {
    let record = bmi_classifier::record(height_cm, weight_kg, today)?;
    info!(bmi = record.bmi, category = %record.category, "BMI computed");
    printer.emit(&record, || display_bmi(&record))
}

/// Score a questionnaire from explicit yes/no answers
pub fn risk(
    printer: &Printer,
    category: RiskCategory,
    yes: &[String],
    no: &[String],
    today: NaiveDate,
) -> AppResult<()> {
    let catalog = QuestionCatalog::standard();
    let mut answers = AnswerSet::new();

    for (ids, answer) in [(yes, true), (no, false)] {
        for id in ids {
            if !catalog.for_category(category).any(|q| &q.id == id) {
                return Err(AppError::invalid_input(format!(
                    "Unknown question '{id}' for {category}. Run `ira-cli questions --category {category}` to list them"
                )));
            }
            if answers.insert(id.clone(), answer).is_some() {
                return Err(AppError::invalid_input(format!(
                    "Question '{id}' was answered more than once"
                )));
            }
        }
    }

    let assessment = RiskScorer::new(catalog).score(category, &answers, today)?;
    info!(
        category = %category,
        score = assessment.score,
        level = %assessment.level(),
        "Risk assessment completed"
    );
    printer.emit(&assessment, || display_assessment(&assessment))
}

/// List questions, optionally for one condition
pub fn questions(printer: &Printer, category: Option<RiskCategory>) -> AppResult<()> {
    let catalog = QuestionCatalog::standard();
    let categories: Vec<RiskCategory> =
        category.map_or_else(|| RiskCategory::ALL.to_vec(), |c| vec![c]);
    let listed: Vec<_> = catalog
        .questions()
        .iter()
        .filter(|q| categories.contains(&q.category))
        .collect();
    printer.emit(&listed, || display_questions(&categories, &listed))
}
