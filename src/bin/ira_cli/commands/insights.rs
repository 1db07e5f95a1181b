// ABOUTME: Insight command for ira-cli
// ABOUTME: Loads and validates a history file, then prints generated insights
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IRA Health

use std::path::Path;

use chrono::NaiveDate;
use ira_health::config::InsightConfig;
use ira_health::errors::AppResult;
use ira_health::intelligence::InsightAggregator;
use ira_health::records::HealthHistory;

use crate::helpers::display::{display_insights, Printer};

/// Generate insights for the history at `path`
pub fn generate(
    printer: &Printer,
    path: &Path,
    today: NaiveDate,
    config: InsightConfig,
) -> AppResult<()> {
    let history = HealthHistory::from_path(path)?;
    history.validate()?;

    let aggregator = InsightAggregator::with_config(config);
    let insights = history.insights(&aggregator, today);
    printer.emit(&insights, || display_insights(&insights, today))
}
