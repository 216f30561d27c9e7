//! Per-day availability resolution with exception-over-pattern priority.
//!
//! For a given date the resolver checks, in order: an active exception on
//! that exact date (first match in collection order wins), then an active
//! weekly pattern for that weekday, then a non-working default. The winning
//! rule supplies hours, rate, and currency wholesale -- sources are never
//! blended.
//!
//! The resolver is a plain owned value constructed per request from
//! caller-loaded data. Its mutation methods mirror writes the caller has
//! already persisted so that subsequent resolutions reflect them without a
//! re-fetch; they are not a system of record.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calendar::{days_inclusive, monday_index, parse_date};
use crate::error::Result;
use crate::schedule::{AvailabilityException, ExceptionPatch, WeeklyPattern};

/// Which rule produced an [`AvailabilityResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AvailabilitySource {
    WeeklyPattern,
    Exception,
}

/// Resolved availability for a single calendar date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityResult {
    pub date: NaiveDate,
    pub hours_available: Decimal,
    pub hourly_rate: Decimal,
    pub currency: String,
    pub is_working_day: bool,
    pub source: AvailabilitySource,
    /// Monday-based weekday index, 0-6.
    pub day_of_week: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Aggregate view of a resolved date range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilitySummary {
    /// Number of calendar days in the range.
    pub total_days: usize,
    /// Days that resolved as working.
    pub working_days: usize,
    /// Hours summed over working days only.
    pub total_hours: Decimal,
    /// Active exceptions whose date falls inside the range.
    pub exceptions_count: usize,
    /// `total_hours / working_days`, or 0 when there are no working days.
    pub average_hours_per_working_day: Decimal,
}

/// Resolves per-day availability from a weekly pattern set and an exception set.
///
/// Both collections are supplied by the caller; the resolver holds its own
/// copy and does not talk to storage. Safe to share immutably across
/// threads; mutation requires exclusive access, matching its intended role
/// as a short-lived, per-request helper.
#[derive(Debug, Clone, Default)]
pub struct AvailabilityResolver {
    patterns: Vec<WeeklyPattern>,
    exceptions: Vec<AvailabilityException>,
}

impl AvailabilityResolver {
    /// Create a resolver over the given weekly patterns and exceptions.
    pub fn new(patterns: Vec<WeeklyPattern>, exceptions: Vec<AvailabilityException>) -> Self {
        Self {
            patterns,
            exceptions,
        }
    }

    /// Resolve availability for a single date.
    ///
    /// Priority chain:
    /// 1. The first active exception (in collection order) dated exactly
    ///    `date`. Duplicate active exceptions on one date are tolerated;
    ///    first match wins. The storage layer is expected to prevent
    ///    duplicates, not this method.
    /// 2. The active weekly pattern for the date's weekday.
    /// 3. A non-working zero-hour default -- absence of schedule data means
    ///    "day off", not an error.
    ///
    /// # Errors
    /// Returns [`crate::AvailabilityError::InvalidDate`] when `date` cannot
    /// be parsed as a calendar date.
    pub fn resolve_day(&self, date: &str) -> Result<AvailabilityResult> {
        Ok(self.resolve_date(parse_date(date)?))
    }

    /// Resolve availability for an already-parsed date. Infallible.
    pub fn resolve_date(&self, date: NaiveDate) -> AvailabilityResult {
        let day_of_week = monday_index(date.weekday());

        if let Some(exception) = self
            .exceptions
            .iter()
            .find(|e| e.is_active && e.exception_date == date)
        {
            return AvailabilityResult {
                date,
                hours_available: exception.hours_available,
                hourly_rate: exception.hourly_rate,
                currency: exception.currency.clone(),
                is_working_day: exception.hours_available > Decimal::ZERO,
                source: AvailabilitySource::Exception,
                day_of_week,
                notes: exception.notes.clone(),
            };
        }

        if let Some(pattern) = self
            .patterns
            .iter()
            .find(|p| p.is_active && p.day_of_week == day_of_week)
        {
            return AvailabilityResult {
                date,
                hours_available: pattern.total_work_hours,
                hourly_rate: pattern.hourly_rate,
                currency: pattern.currency.clone(),
                is_working_day: pattern.is_active && pattern.total_work_hours > Decimal::ZERO,
                source: AvailabilitySource::WeeklyPattern,
                day_of_week,
                notes: None,
            };
        }

        AvailabilityResult {
            date,
            hours_available: Decimal::ZERO,
            hourly_rate: Decimal::ZERO,
            currency: "USD".to_string(),
            is_working_day: false,
            source: AvailabilitySource::WeeklyPattern,
            day_of_week,
            notes: Some("No availability pattern found".to_string()),
        }
    }

    /// Resolve every date from `start` to `end` inclusive, ascending.
    ///
    /// An inverted range (`end < start`) yields an empty vector, not an
    /// error.
    ///
    /// # Errors
    /// Returns [`crate::AvailabilityError::InvalidDate`] when either bound
    /// cannot be parsed.
    pub fn resolve_range(&self, start: &str, end: &str) -> Result<Vec<AvailabilityResult>> {
        let start = parse_date(start)?;
        let end = parse_date(end)?;
        Ok(days_inclusive(start, end)
            .map(|date| self.resolve_date(date))
            .collect())
    }

    /// Total hours over the range, non-working days included (they
    /// contribute 0).
    ///
    /// # Errors
    /// Returns [`crate::AvailabilityError::InvalidDate`] when either bound
    /// cannot be parsed.
    pub fn total_available_hours(&self, start: &str, end: &str) -> Result<Decimal> {
        Ok(self
            .resolve_range(start, end)?
            .iter()
            .map(|day| day.hours_available)
            .sum())
    }

    /// Aggregate the range into day/hour counts.
    ///
    /// `total_hours` sums working days only, via the working-day filter --
    /// numerically equal to [`total_available_hours`](Self::total_available_hours)
    /// since non-working days carry 0 hours, but computed independently.
    ///
    /// # Errors
    /// Returns [`crate::AvailabilityError::InvalidDate`] when either bound
    /// cannot be parsed.
    pub fn summarize(&self, start: &str, end: &str) -> Result<AvailabilitySummary> {
        let days = self.resolve_range(start, end)?;
        let working: Vec<&AvailabilityResult> =
            days.iter().filter(|day| day.is_working_day).collect();
        let total_hours: Decimal = working.iter().map(|day| day.hours_available).sum();
        let average = if working.is_empty() {
            Decimal::ZERO
        } else {
            total_hours / Decimal::from(working.len() as u64)
        };

        Ok(AvailabilitySummary {
            total_days: days.len(),
            working_days: working.len(),
            total_hours,
            exceptions_count: self.exceptions_in_range(start, end).len(),
            average_hours_per_working_day: average,
        })
    }

    /// Whether an active exception exists for the exact date.
    ///
    /// Unparseable input degrades to `false` -- this is a boolean query
    /// surface, not a validation path.
    pub fn has_exception(&self, date: &str) -> bool {
        match parse_date(date) {
            Ok(date) => self
                .exceptions
                .iter()
                .any(|e| e.is_active && e.exception_date == date),
            Err(_) => false,
        }
    }

    /// Active exceptions whose date falls within the inclusive range.
    ///
    /// Bounds and exception dates are compared as date values, never as
    /// strings. Unparseable bounds degrade to an empty result.
    pub fn exceptions_in_range(&self, start: &str, end: &str) -> Vec<AvailabilityException> {
        let (Ok(start), Ok(end)) = (parse_date(start), parse_date(end)) else {
            return Vec::new();
        };
        self.exceptions
            .iter()
            .filter(|e| e.is_active && e.exception_date >= start && e.exception_date <= end)
            .cloned()
            .collect()
    }

    /// Replace the held weekly pattern collection.
    pub fn update_work_schedules(&mut self, patterns: Vec<WeeklyPattern>) {
        self.patterns = patterns;
    }

    /// Replace the held exception collection.
    pub fn update_exceptions(&mut self, exceptions: Vec<AvailabilityException>) {
        self.exceptions = exceptions;
    }

    /// Append an exception to the in-memory set.
    ///
    /// No uniqueness check: the storage layer owns the one-exception-per-date
    /// rule. A duplicate date is arbitrated at resolution time by the
    /// first-match policy.
    pub fn add_exception(&mut self, exception: AvailabilityException) {
        self.exceptions.push(exception);
    }

    /// Remove the exception with the given id. Returns whether a removal
    /// occurred.
    pub fn remove_exception(&mut self, id: &str) -> bool {
        let before = self.exceptions.len();
        self.exceptions.retain(|e| e.id != id);
        self.exceptions.len() < before
    }

    /// Merge a partial update into the exception with the given id,
    /// refreshing its `updated_at`. Returns whether the target was found.
    pub fn update_exception(&mut self, id: &str, patch: ExceptionPatch) -> bool {
        match self.exceptions.iter_mut().find(|e| e.id == id) {
            Some(exception) => {
                exception.apply(patch);
                true
            }
            None => false,
        }
    }
}
