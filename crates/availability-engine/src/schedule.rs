//! Input model -- recurring weekly patterns and date-specific exceptions.
//!
//! These types mirror the wire format of the surrounding application
//! (camelCase field names, kebab-case exception categories). Hours and
//! rates come off the wire as either JSON numbers or strings (the storage
//! layer uses a decimal-precision column type); `rust_decimal`'s
//! deserializer accepts both, so the engine carries `Decimal` internally
//! and never sees a string-typed numeric.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

fn default_currency() -> String {
    "USD".to_string()
}

/// One entry of a resource's recurring weekly schedule.
///
/// `day_of_week` is Monday-based: Monday=0 .. Sunday=6. A resource has at
/// most one pattern per weekday; the storage layer enforces that, not this
/// crate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyPattern {
    /// Monday-based weekday index, 0-6.
    pub day_of_week: u8,
    /// Whether this weekday is a working day at all.
    pub is_active: bool,
    /// Scheduled working hours for the day.
    pub total_work_hours: Decimal,
    /// Billing rate; absent on the wire means 0.
    #[serde(default)]
    pub hourly_rate: Decimal,
    /// 3-letter ISO currency code.
    #[serde(default = "default_currency")]
    pub currency: String,
}

/// Category of a date-specific exception.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExceptionKind {
    Holiday,
    Vacation,
    Custom,
    NonWorking,
}

/// A date-specific override of the weekly schedule.
///
/// An active exception on a date fully replaces whatever the weekly pattern
/// says for that date. Inactive exceptions are invisible to resolution.
/// The upstream validation layer guarantees `hours_available == 0` implies
/// `exception_type == NonWorking`; this crate computes over whatever it is
/// handed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityException {
    pub id: String,
    pub resource_id: String,
    pub exception_date: NaiveDate,
    pub is_active: bool,
    pub hours_available: Decimal,
    #[serde(default)]
    pub hourly_rate: Decimal,
    #[serde(default = "default_currency")]
    pub currency: String,
    pub exception_type: ExceptionKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Informational time-of-day bounds; not used in hour or cost arithmetic.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time_utc: Option<NaiveTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time_utc: Option<NaiveTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Partial update for an existing exception.
///
/// Only fields actually present are merged; everything else keeps its prior
/// value. `id` and `resource_id` are identity and cannot be patched.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExceptionPatch {
    #[serde(default)]
    pub exception_date: Option<NaiveDate>,
    #[serde(default)]
    pub is_active: Option<bool>,
    #[serde(default)]
    pub hours_available: Option<Decimal>,
    #[serde(default)]
    pub hourly_rate: Option<Decimal>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub exception_type: Option<ExceptionKind>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub start_time_utc: Option<NaiveTime>,
    #[serde(default)]
    pub end_time_utc: Option<NaiveTime>,
}

impl AvailabilityException {
    /// Merge a partial update into this exception, refreshing `updated_at`.
    pub(crate) fn apply(&mut self, patch: ExceptionPatch) {
        if let Some(date) = patch.exception_date {
            self.exception_date = date;
        }
        if let Some(active) = patch.is_active {
            self.is_active = active;
        }
        if let Some(hours) = patch.hours_available {
            self.hours_available = hours;
        }
        if let Some(rate) = patch.hourly_rate {
            self.hourly_rate = rate;
        }
        if let Some(currency) = patch.currency {
            self.currency = currency;
        }
        if let Some(kind) = patch.exception_type {
            self.exception_type = kind;
        }
        if let Some(notes) = patch.notes {
            self.notes = Some(notes);
        }
        if let Some(start) = patch.start_time_utc {
            self.start_time_utc = Some(start);
        }
        if let Some(end) = patch.end_time_utc {
            self.end_time_utc = Some(end);
        }
        self.updated_at = Some(Utc::now());
    }
}
