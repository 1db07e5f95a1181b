// ABOUTME: Menstrual cycle tracking models with per-day logs
// ABOUTME: CycleRecord, CycleDay, Flow, and Mood with date-keyed upsert and close semantics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IRA Health

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Menstrual flow intensity for a day
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum Flow {
    /// No bleeding
    #[default]
    None,
    /// Light flow
    Light,
    /// Medium flow
    Medium,
    /// Heavy flow
    Heavy,
}

/// Self-reported mood for a day
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    /// Happy
    Happy,
    /// Sad
    Sad,
    /// Anxious
    Anxious,
    /// Irritable
    Irritable,
    /// Neutral
    #[default]
    Neutral,
}

/// One logged calendar day within a cycle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CycleDay {
    /// Calendar date (the upsert key)
    pub date: NaiveDate,
    /// Flow intensity
    #[serde(default)]
    pub flow: Flow,
    /// Mood
    #[serde(default)]
    pub mood: Mood,
    /// Symptoms such as "Cramps" or "Bloating"
    #[serde(default)]
    pub symptoms: BTreeSet<String>,
    /// Free-form notes
    #[serde(default)]
    pub notes: String,
    /// Basal body temperature in Celsius
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
}

impl CycleDay {
    /// An empty log for a date (no flow, neutral mood)
    #[must_use]
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            flow: Flow::None,
            mood: Mood::Neutral,
            symptoms: BTreeSet::new(),
            notes: String::new(),
            temperature: None,
        }
    }

    /// Add the symptom if absent, remove it if present
    pub fn toggle_symptom(&mut self, symptom: &str) {
        if !self.symptoms.remove(symptom) {
            self.symptoms.insert(symptom.to_owned());
        }
    }
}

/// One menstrual cycle, from a period start to the next period start
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CycleRecord {
    /// Record identifier assigned by the store
    pub id: String,
    /// First day of the period that opened this cycle
    pub start_date: NaiveDate,
    /// Day the next cycle started, once known
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    /// Length in days, set together with `end_date`
    #[serde(default)]
    pub duration: Option<i64>,
    /// Daily logs ordered by date
    #[serde(default)]
    pub days: Vec<CycleDay>,
    /// Predicted start of the following cycle
    #[serde(default)]
    pub predicted_next_start: Option<NaiveDate>,
}

impl CycleRecord {
    /// An open cycle with no logged days
    #[must_use]
    pub fn new(id: impl Into<String>, start_date: NaiveDate) -> Self {
        Self {
            id: id.into(),
            start_date,
            end_date: None,
            duration: None,
            days: Vec::new(),
            predicted_next_start: None,
        }
    }

    /// Whether the cycle has been closed by a following one
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.end_date.is_some()
    }

    /// Close the cycle on `end_date`, deriving its duration
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if `end_date` is not after the start date.
    pub fn close(&mut self, end_date: NaiveDate) -> Result<(), AppError> {
        let duration = (end_date - self.start_date).num_days();
        if duration <= 0 {
            return Err(AppError::invalid_input(format!(
                "Cycle {} started {} and cannot end on {end_date}",
                self.id, self.start_date
            )));
        }
        self.end_date = Some(end_date);
        self.duration = Some(duration);
        Ok(())
    }

    /// Insert a day log, replacing any existing log for the same date
    ///
    /// Days loaded from storage may arrive in any order; they are left
    /// sorted by date afterwards.
    pub fn upsert_day(&mut self, day: CycleDay) {
        match self.days.iter().position(|d| d.date == day.date) {
            Some(index) => self.days[index] = day,
            None => self.days.push(day),
        }
        self.days.sort_by_key(|d| d.date);
    }

    /// Log for a specific date, if any
    #[must_use]
    pub fn day(&self, date: NaiveDate) -> Option<&CycleDay> {
        self.days.iter().find(|d| d.date == date)
    }

    /// Check the end date / duration invariant and one log per date
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when the duration is not positive, disagrees
    /// with the dates, is missing for a closed cycle, or two day logs share
    /// a date.
    pub fn validate(&self) -> Result<(), AppError> {
        if let Some(duration) = self.duration.filter(|d| *d <= 0) {
            return Err(AppError::invalid_input(format!(
                "Cycle {} records a non-positive duration of {duration}",
                self.id
            )));
        }

        let mut seen = BTreeSet::new();
        if let Some(duplicate) = self.days.iter().find(|d| !seen.insert(d.date)) {
            return Err(AppError::invalid_input(format!(
                "Cycle {} has more than one log for {}",
                self.id, duplicate.date
            )));
        }

        match (self.end_date, self.duration) {
            (Some(end), Some(duration)) => {
                let expected = (end - self.start_date).num_days();
                if expected != duration {
                    return Err(AppError::invalid_input(format!(
                        "Cycle {} spans {expected} days but records a duration of {duration}",
                        self.id
                    )));
                }
            }
            (Some(end), None) => {
                return Err(AppError::invalid_input(format!(
                    "Cycle {} ends on {end} but has no duration",
                    self.id
                )));
            }
            (None, Some(_)) | (None, None) => {}
        }
        Ok(())
    }
}
