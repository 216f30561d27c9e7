//! # availability-engine
//!
//! Deterministic per-day availability resolution for project resources.
//!
//! A resource has a recurring weekly work pattern (one entry per weekday)
//! and a set of date-specific exceptions (holidays, vacations, custom
//! overrides). This crate answers, for any date or date range: is the
//! resource working, for how many hours, at what rate, and which rule fired.
//!
//! Resolution is a strict priority chain: an active exception on the exact
//! date always wins, an active weekly pattern for that weekday comes second,
//! and when neither exists the day resolves to a non-working default. The
//! engine never blends the two sources.
//!
//! All computation is pure and in-memory: the caller loads patterns and
//! exceptions from storage, constructs an [`AvailabilityResolver`], and
//! serializes the results. The resolver's mutation methods only keep its
//! in-memory copy in sync with writes the caller has already persisted.
//!
//! ## Quick start
//!
//! ```rust
//! use availability_engine::{AvailabilityResolver, WeeklyPattern};
//! use rust_decimal::Decimal;
//!
//! // Mondays (day 0) are 8-hour working days at 50/h.
//! let monday = WeeklyPattern {
//!     day_of_week: 0,
//!     is_active: true,
//!     total_work_hours: Decimal::from(8),
//!     hourly_rate: Decimal::from(50),
//!     currency: "USD".to_string(),
//! };
//! let resolver = AvailabilityResolver::new(vec![monday], vec![]);
//!
//! // 2024-01-15 is a Monday.
//! let day = resolver.resolve_day("2024-01-15").unwrap();
//! assert!(day.is_working_day);
//! assert_eq!(day.hours_available, Decimal::from(8));
//! ```
//!
//! ## Modules
//!
//! - [`resolver`] — the resolution engine and its result/summary types
//! - [`schedule`] — weekly pattern and exception input model
//! - [`calendar`] — date parsing, Monday-based weekday index, range iteration
//! - [`error`] — error types

pub mod calendar;
pub mod error;
pub mod resolver;
pub mod schedule;

pub use error::AvailabilityError;
pub use resolver::{
    AvailabilityResolver, AvailabilityResult, AvailabilitySource, AvailabilitySummary,
};
pub use schedule::{AvailabilityException, ExceptionKind, ExceptionPatch, WeeklyPattern};
