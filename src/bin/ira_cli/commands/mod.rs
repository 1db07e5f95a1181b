// ABOUTME: Re-exports command modules for ira-cli
// ABOUTME: Assessment, cycle, insight, diet, and cart commands plus shared path resolution
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IRA Health

pub mod assess;
pub mod cart;
pub mod cycle;
pub mod diet;
pub mod insights;

use std::path::PathBuf;

use ira_health::config::AppConfig;
use ira_health::errors::{AppError, AppResult};

/// Explicit `--file`, else the configured or platform default history file
pub fn resolve_history_path(file: Option<PathBuf>, config: &AppConfig) -> AppResult<PathBuf> {
    file.or_else(|| config.history_path()).ok_or_else(|| {
        AppError::missing_field("history file (pass --file or set IRA_HISTORY_FILE)")
    })
}
