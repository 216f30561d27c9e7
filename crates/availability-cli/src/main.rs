//! `availcal` CLI — resolve resource availability from the command line.
//!
//! Plays the role of the API layer around the engine: it loads a schedule
//! document (weekly patterns + exceptions), runs queries, computes the
//! derived per-day `cost` field, and serializes results as JSON. Resolution
//! itself lives entirely in `availability-engine`.
//!
//! ## Usage
//!
//! ```sh
//! # Resolve a date range (schedule document via stdin)
//! availcal resolve --start 2024-01-15 --end 2024-01-19 < schedule.json
//!
//! # Resolve from file to file
//! availcal resolve --start 2024-01-15 --end 2024-01-19 -i schedule.json -o week.json
//!
//! # Aggregate a range
//! availcal summary --start 2024-01-01 --end 2024-01-31 -i schedule.json
//!
//! # Check a single date for an active exception
//! availcal check --date 2024-12-25 -i schedule.json
//! ```
//!
//! The schedule document is the application's wire format:
//!
//! ```json
//! {
//!   "patterns":   [{"dayOfWeek": 0, "isActive": true, "totalWorkHours": "8", ...}],
//!   "exceptions": [{"id": "ex-1", "exceptionDate": "2024-01-16", ...}]
//! }
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::io::{self, Read};

use availability_engine::{
    AvailabilityException, AvailabilityResolver, AvailabilityResult, WeeklyPattern,
};

#[derive(Parser)]
#[command(
    name = "availcal",
    version,
    about = "Resolve per-day resource availability from weekly patterns and exceptions"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve every day in a date range
    Resolve {
        /// First date of the range (YYYY-MM-DD)
        #[arg(long)]
        start: String,
        /// Last date of the range, inclusive (YYYY-MM-DD)
        #[arg(long)]
        end: String,
        /// Schedule document (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Aggregate a date range into day/hour counts
    Summary {
        /// First date of the range (YYYY-MM-DD)
        #[arg(long)]
        start: String,
        /// Last date of the range, inclusive (YYYY-MM-DD)
        #[arg(long)]
        end: String,
        /// Schedule document (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Check whether an active exception covers a date
    Check {
        /// Date to check (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Schedule document (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
}

/// The schedule document the surrounding application stores per resource.
#[derive(Debug, Default, Deserialize)]
struct ScheduleDocument {
    #[serde(default)]
    patterns: Vec<WeeklyPattern>,
    #[serde(default)]
    exceptions: Vec<AvailabilityException>,
}

/// A resolved day augmented with the caller-computed cost field.
#[derive(Debug, Serialize)]
struct CostedDay {
    #[serde(flatten)]
    day: AvailabilityResult,
    /// `hoursAvailable * hourlyRate` — derived here, never by the engine.
    cost: Decimal,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CheckReport {
    date: String,
    has_exception: bool,
    active_exceptions: Vec<AvailabilityException>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Resolve {
            start,
            end,
            input,
            output,
        } => {
            let resolver = load_resolver(input.as_deref())?;
            let days = resolver
                .resolve_range(&start, &end)
                .context("Failed to resolve date range")?;

            let costed: Vec<CostedDay> = days
                .into_iter()
                .map(|day| CostedDay {
                    cost: day.hours_available * day.hourly_rate,
                    day,
                })
                .collect();

            let json = serde_json::to_string_pretty(&costed)?;
            write_output(output.as_deref(), &json)?;
        }
        Commands::Summary {
            start,
            end,
            input,
            output,
        } => {
            let resolver = load_resolver(input.as_deref())?;
            let summary = resolver
                .summarize(&start, &end)
                .context("Failed to summarize date range")?;

            let json = serde_json::to_string_pretty(&summary)?;
            write_output(output.as_deref(), &json)?;
        }
        Commands::Check { date, input } => {
            let resolver = load_resolver(input.as_deref())?;
            // Validate the date up front so a typo fails loudly instead of
            // degrading to "no exception".
            let day = resolver
                .resolve_day(&date)
                .context("Failed to resolve date")?;
            let date = day.date.to_string();

            let report = CheckReport {
                has_exception: resolver.has_exception(&date),
                active_exceptions: resolver.exceptions_in_range(&date, &date),
                date,
            };

            let json = serde_json::to_string_pretty(&report)?;
            write_output(None, &json)?;
        }
    }

    Ok(())
}

/// Load the schedule document and build a resolver from it.
fn load_resolver(path: Option<&str>) -> Result<AvailabilityResolver> {
    let raw = read_input(path)?;
    let doc: ScheduleDocument =
        serde_json::from_str(&raw).context("Failed to parse schedule document")?;
    Ok(AvailabilityResolver::new(doc.patterns, doc.exceptions))
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
