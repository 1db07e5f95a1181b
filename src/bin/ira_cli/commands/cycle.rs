// ABOUTME: Cycle commands for ira-cli
// ABOUTME: Reports the current phase and starts new cycles in a history file
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IRA Health

use std::path::Path;

use chrono::NaiveDate;
use ira_health::errors::{AppResult, ErrorCode};
use ira_health::intelligence::algorithms::current_phase;
use ira_health::intelligence::cycle_tracking::start_new_cycle;
use ira_health::records::HealthHistory;
use tracing::{info, warn};
use uuid::Uuid;

use crate::helpers::display::{display_new_cycle, display_phase, Printer};

/// Print the phase of the cycle that started on `start`
pub fn phase(printer: &Printer, start: NaiveDate, today: NaiveDate) -> AppResult<()> {
    let info = current_phase(start, today);
    if info.days_since_start < 0 {
        warn!(%start, %today, "Cycle start is after the reference date");
    }
    printer.emit(&info, || display_phase(&info))
}

/// Start a cycle on `date`, closing the open one, and save the history
///
/// A missing history file is created.
pub fn start(printer: &Printer, path: &Path, date: NaiveDate) -> AppResult<()> {
    let mut history = match HealthHistory::from_path(path) {
        Ok(history) => history,
        Err(e) if e.code == ErrorCode::ResourceNotFound => {
            info!(path = %path.display(), "Creating new history file");
            HealthHistory::default()
        }
        Err(e) => return Err(e),
    };

    let outcome = start_new_cycle(&history.cycles, date, Uuid::new_v4().to_string())?;
    if let Some(closed) = &outcome.closed {
        if let Some(existing) = history.cycles.iter_mut().find(|c| c.id == closed.id) {
            *existing = closed.clone();
        }
    }
    history.cycles.push(outcome.started.clone());
    history.save(path)?;

    printer.emit(&outcome, || display_new_cycle(&outcome))
}
