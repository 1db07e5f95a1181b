// ABOUTME: Cycle history operations: next-start prediction and starting a new cycle
// ABOUTME: Closes the open cycle, averages recent cycle lengths, and seeds the first day log
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IRA Health

//! Cycle tracking
//!
//! Histories may be passed in any order; functions here order cycles by
//! `start_date` themselves.

use chrono::{Duration, NaiveDate};
use ira_core::constants::cycle::{
    DEFAULT_CYCLE_LENGTH_DAYS, PREDICTION_MIN_HISTORY, PREDICTION_WINDOW,
};
use ira_core::errors::{AppError, AppResult};
use ira_core::models::{CycleDay, CycleRecord, Flow, Mood};
use serde::Serialize;
use tracing::{debug, info, warn};

/// Summary of recent cycle lengths
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CycleLengthStats {
    /// Lengths used, oldest first; missing durations are replaced by the default
    pub lengths: Vec<i64>,
    /// Arithmetic mean of `lengths`
    pub average: f64,
    /// `max - min` of `lengths`
    pub variation: i64,
}

impl CycleLengthStats {
    /// Stats over the `window` most recent cycles, or `None` when there are no cycles
    #[must_use]
    pub fn from_recent<'a>(
        cycles: impl IntoIterator<Item = &'a CycleRecord>,
        window: usize,
        default_length: i64,
    ) -> Option<Self> {
        let mut ordered: Vec<&CycleRecord> = cycles.into_iter().collect();
        ordered.sort_by_key(|c| c.start_date);

        let skip = ordered.len().saturating_sub(window);
        let lengths: Vec<i64> = ordered[skip..]
            .iter()
            .map(|c| effective_duration(c, default_length))
            .collect();

        let max = *lengths.iter().max()?;
        let min = *lengths.iter().min()?;
        let average = lengths.iter().sum::<i64>() as f64 / lengths.len() as f64;

        Some(Self {
            lengths,
            average,
            variation: max - min,
        })
    }

    /// Mean rounded to whole days
    #[must_use]
    pub fn rounded_average(&self) -> i64 {
        self.average.round() as i64
    }
}

/// Recorded duration, or `default_length` for open cycles
///
/// A duration that disagrees with the recorded dates is still used, with a warning.
#[must_use]
pub fn effective_duration(cycle: &CycleRecord, default_length: i64) -> i64 {
    if cycle.validate().is_err() {
        warn!(cycle_id = %cycle.id, "Cycle duration disagrees with its dates");
    }
    cycle.duration.unwrap_or(default_length)
}

/// Predict when the cycle starting on `start` will be followed by the next one
///
/// With at least two cycles of history, averages the three most recent
/// lengths (open cycles count as 28 days); otherwise assumes 28 days.
#[must_use]
pub fn predict_next_start(history: &[CycleRecord], start: NaiveDate) -> NaiveDate {
    let length = if history.len() >= PREDICTION_MIN_HISTORY {
        CycleLengthStats::from_recent(history, PREDICTION_WINDOW, DEFAULT_CYCLE_LENGTH_DAYS)
            .map_or(DEFAULT_CYCLE_LENGTH_DAYS, |stats| stats.rounded_average())
    } else {
        DEFAULT_CYCLE_LENGTH_DAYS
    };
    debug!(%start, length, "Predicted next cycle length");
    start + Duration::days(length)
}

/// Outcome of starting a new cycle
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewCycle {
    /// The previously open cycle, now closed on the new start date
    pub closed: Option<CycleRecord>,
    /// The new open cycle
    pub started: CycleRecord,
}

/// Start a cycle on `start`, closing the most recent open cycle
///
/// The new cycle's first day is logged with medium flow and neutral mood.
///
/// # Errors
///
/// Returns `ResourceConflict` if `start` is not after the most recent cycle's
/// start date
pub fn start_new_cycle(
    history: &[CycleRecord],
    start: NaiveDate,
    id: impl Into<String>,
) -> AppResult<NewCycle> {
    let id = id.into();
    let latest = history.iter().max_by_key(|c| c.start_date);

    if let Some(latest) = latest {
        if start <= latest.start_date {
            return Err(AppError::conflict(format!(
                "New cycle must start after {} (cycle {})",
                latest.start_date, latest.id
            )));
        }
    }

    let closed = match latest {
        Some(open) if !open.is_complete() => {
            let mut closed = open.clone();
            closed.close(start)?;
            Some(closed)
        }
        _ => None,
    };

    let updated: Vec<CycleRecord> = history
        .iter()
        .map(|c| match &closed {
            Some(closed) if closed.id == c.id => closed.clone(),
            _ => c.clone(),
        })
        .collect();

    let mut started = CycleRecord::new(id, start);
    let mut first_day = CycleDay::new(start);
    first_day.flow = Flow::Medium;
    first_day.mood = Mood::Neutral;
    started.upsert_day(first_day);
    started.predicted_next_start = Some(predict_next_start(&updated, start));

    info!(
        cycle_id = %started.id,
        %start,
        closed = closed.as_ref().map(|c| c.id.as_str()),
        "Started new cycle"
    );

    Ok(NewCycle { closed, started })
}
