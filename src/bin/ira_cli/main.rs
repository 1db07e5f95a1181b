// ABOUTME: IRA CLI - command-line front end for IRA Health computations
// ABOUTME: BMI, risk questionnaires, cycle phase and rollover, insights, meal plans, and cart totals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IRA Health
//!
//! Usage:
//! ```bash
//! # Classify a BMI measurement
//! ira-cli bmi --height 165 --weight 60
//!
//! # Score a PCOS questionnaire, answering "yes" to two questions
//! ira-cli risk --category pcos --yes irregular_periods --yes acne
//!
//! # List the questionnaire
//! ira-cli questions --category breast_cancer
//!
//! # Current cycle phase
//! ira-cli phase --start 2025-06-01 --today 2025-06-15
//!
//! # Start a new cycle in a history file
//! ira-cli cycle-start --date 2025-06-29 --file history.json
//!
//! # Insights from a history file, as JSON
//! ira-cli --format json insights --file history.json
//!
//! # Nutrition totals for one day of a meal plan
//! ira-cli diet --plan plan.json --date 2025-06-02
//!
//! # Cart totals
//! ira-cli cart --item "Iron Supplement:12.50:2" --item "Herbal Tea:4.99"
//! ```

mod commands;
mod helpers;

use std::path::PathBuf;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use ira_health::config::{AppConfig, InsightConfig, OutputFormat};
use ira_health::logging::LoggingConfig;
use ira_health::models::RiskCategory;
use ira_health::shop::CartItem;
use tracing::{debug, info};

use helpers::display::Printer;

#[derive(Parser)]
#[command(
    name = "ira-cli",
    about = "IRA Health command-line tool",
    long_about = "Risk screening, cycle tracking, BMI classification, and health insights from the command line."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Output format override (text or json); defaults to `IRA_OUTPUT_FORMAT`
    #[arg(long, global = true)]
    format: Option<OutputFormat>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Compute BMI with guidance and tips
    Bmi {
        /// Height in centimetres
        #[arg(long)]
        height: f64,

        /// Weight in kilograms
        #[arg(long)]
        weight: f64,
    },

    /// Score a risk questionnaire
    Risk {
        /// Condition: pcos, pcod, or breast_cancer
        #[arg(long)]
        category: RiskCategory,

        /// Question ids answered "yes"
        #[arg(long = "yes", value_name = "QUESTION_ID")]
        yes: Vec<String>,

        /// Question ids answered "no"; ids given neither way count as unanswered
        #[arg(long = "no", value_name = "QUESTION_ID")]
        no: Vec<String>,
    },

    /// List questionnaire questions
    Questions {
        /// Only this condition
        #[arg(long)]
        category: Option<RiskCategory>,
    },

    /// Show the current cycle phase
    Phase {
        /// First day of the current period (YYYY-MM-DD)
        #[arg(long)]
        start: NaiveDate,

        /// Reference date (defaults to `IRA_REFERENCE_DATE` or the local date)
        #[arg(long)]
        today: Option<NaiveDate>,
    },

    /// Start a new cycle, closing the open one in the history file
    CycleStart {
        /// First day of the new period (YYYY-MM-DD)
        #[arg(long)]
        date: NaiveDate,

        /// History file (defaults to `IRA_HISTORY_FILE`)
        #[arg(long)]
        file: Option<PathBuf>,
    },

    /// Generate insights from a history file
    Insights {
        /// History file (defaults to `IRA_HISTORY_FILE`)
        #[arg(long)]
        file: Option<PathBuf>,

        /// Reference date (defaults to `IRA_REFERENCE_DATE` or the local date)
        #[arg(long)]
        today: Option<NaiveDate>,
    },

    /// Show a day's meals and nutrition totals from a meal plan file
    Diet {
        /// Meal plan JSON file
        #[arg(long)]
        plan: PathBuf,

        /// Day to total (defaults to `IRA_REFERENCE_DATE` or the local date)
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Compute cart totals
    Cart {
        /// Cart line as name:price[:quantity]
        #[arg(long = "item", value_name = "NAME:PRICE[:QTY]", required = true)]
        items: Vec<CartItem>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_level("debug");
    }
    logging.init()?;

    let config = AppConfig::from_env()?;
    let printer = Printer::new(cli.format.unwrap_or(config.output_format));
    debug!(?config, format = %printer.format(), "IRA CLI starting");

    match cli.command {
        Command::Bmi { height, weight } => {
            commands::assess::bmi(&printer, height, weight, config.today())?;
        }
        Command::Risk { category, yes, no } => {
            commands::assess::risk(&printer, category, &yes, &no, config.today())?;
        }
        Command::Questions { category } => {
            commands::assess::questions(&printer, category)?;
        }
        Command::Phase { start, today } => {
            let today = today.unwrap_or_else(|| config.today());
            commands::cycle::phase(&printer, start, today)?;
        }
        Command::CycleStart { date, file } => {
            let path = commands::resolve_history_path(file, &config)?;
            commands::cycle::start(&printer, &path, date)?;
        }
        Command::Insights { file, today } => {
            let path = commands::resolve_history_path(file, &config)?;
            let today = today.unwrap_or_else(|| config.today());
            let insight_config = InsightConfig::load()?;
            commands::insights::generate(&printer, &path, today, insight_config)?;
        }
        Command::Diet { plan, date } => {
            let date = date.unwrap_or_else(|| config.today());
            commands::diet::day(&printer, &plan, date)?;
        }
        Command::Cart { items } => {
            commands::cart::summarize(&printer, &items)?;
        }
    }

    info!("IRA CLI finished");
    Ok(())
}
