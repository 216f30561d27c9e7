//! Tests for range resolution, aggregation, and exception range queries.

use availability_engine::{
    AvailabilityException, AvailabilityResolver, AvailabilitySource, ExceptionKind, WeeklyPattern,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// ── Helpers ─────────────────────────────────────────────────────────────────

fn pattern(day_of_week: u8, hours: Decimal) -> WeeklyPattern {
    WeeklyPattern {
        day_of_week,
        is_active: true,
        total_work_hours: hours,
        hourly_rate: dec!(50),
        currency: "USD".to_string(),
    }
}

fn exception(id: &str, date: &str, is_active: bool, hours: Decimal) -> AvailabilityException {
    AvailabilityException {
        id: id.to_string(),
        resource_id: "res-1".to_string(),
        exception_date: date.parse().unwrap(),
        is_active,
        hours_available: hours,
        hourly_rate: dec!(60),
        currency: "USD".to_string(),
        exception_type: if hours == Decimal::ZERO {
            ExceptionKind::Holiday
        } else {
            ExceptionKind::Custom
        },
        notes: None,
        start_time_utc: None,
        end_time_utc: None,
        updated_at: None,
    }
}

/// Mon-Fri at 8h/day.
fn weekday_patterns() -> Vec<WeeklyPattern> {
    (0..5).map(|d| pattern(d, dec!(8))).collect()
}

// ── resolve_range ───────────────────────────────────────────────────────────

#[test]
fn range_is_inclusive_and_ascending() {
    let resolver = AvailabilityResolver::new(weekday_patterns(), vec![]);

    let days = resolver.resolve_range("2024-01-15", "2024-01-19").unwrap();

    assert_eq!(days.len(), 5);
    assert_eq!(days[0].date, "2024-01-15".parse().unwrap());
    assert_eq!(days[4].date, "2024-01-19".parse().unwrap());
    for window in days.windows(2) {
        assert!(window[0].date < window[1].date);
    }
}

#[test]
fn single_day_range_returns_exactly_one_result() {
    let resolver = AvailabilityResolver::new(weekday_patterns(), vec![]);

    let days = resolver.resolve_range("2024-01-15", "2024-01-15").unwrap();

    assert_eq!(days.len(), 1);
    assert_eq!(days[0].date, "2024-01-15".parse().unwrap());
}

#[test]
fn inverted_range_is_empty_not_an_error() {
    let resolver = AvailabilityResolver::new(weekday_patterns(), vec![]);

    let days = resolver.resolve_range("2024-01-19", "2024-01-15").unwrap();

    assert!(days.is_empty());
}

#[test]
fn range_spanning_a_month_boundary_stays_contiguous() {
    let resolver = AvailabilityResolver::default();

    let days = resolver.resolve_range("2024-01-30", "2024-02-02").unwrap();

    assert_eq!(days.len(), 4);
    assert_eq!(days[2].date, "2024-02-01".parse().unwrap());
}

#[test]
fn unparseable_bound_fails_the_whole_range() {
    let resolver = AvailabilityResolver::default();

    assert!(resolver.resolve_range("2024-01-15", "later").is_err());
    assert!(resolver.resolve_range("sometime", "2024-01-19").is_err());
}

// ── Mixed week: the holiday scenario ────────────────────────────────────────

#[test]
fn working_week_with_one_holiday() {
    // Mon-Fri at 8h, Tuesday is a zero-hour holiday.
    let resolver = AvailabilityResolver::new(
        weekday_patterns(),
        vec![exception("hol", "2024-01-16", true, dec!(0))],
    );

    let days = resolver.resolve_range("2024-01-15", "2024-01-19").unwrap();
    assert_eq!(days.len(), 5);
    assert_eq!(days[1].source, AvailabilitySource::Exception);
    assert!(!days[1].is_working_day);

    assert_eq!(
        resolver
            .total_available_hours("2024-01-15", "2024-01-19")
            .unwrap(),
        dec!(32)
    );

    let summary = resolver.summarize("2024-01-15", "2024-01-19").unwrap();
    assert_eq!(summary.total_days, 5);
    assert_eq!(summary.working_days, 4);
    assert_eq!(summary.total_hours, dec!(32));
    assert_eq!(summary.exceptions_count, 1);
    assert_eq!(summary.average_hours_per_working_day, dec!(8));
}

// ── total_available_hours ───────────────────────────────────────────────────

#[test]
fn total_hours_counts_non_working_days_as_zero() {
    // Only Monday is scheduled; the rest of the week contributes 0.
    let resolver = AvailabilityResolver::new(vec![pattern(0, dec!(7.5))], vec![]);

    let total = resolver
        .total_available_hours("2024-01-15", "2024-01-21")
        .unwrap();

    assert_eq!(total, dec!(7.5));
}

#[test]
fn total_hours_of_inverted_range_is_zero() {
    let resolver = AvailabilityResolver::new(weekday_patterns(), vec![]);

    let total = resolver
        .total_available_hours("2024-01-19", "2024-01-15")
        .unwrap();

    assert_eq!(total, Decimal::ZERO);
}

// ── summarize ───────────────────────────────────────────────────────────────

#[test]
fn summary_with_no_working_days_has_zero_average() {
    let resolver = AvailabilityResolver::default();

    let summary = resolver.summarize("2024-01-15", "2024-01-19").unwrap();

    assert_eq!(summary.total_days, 5);
    assert_eq!(summary.working_days, 0);
    assert_eq!(summary.total_hours, Decimal::ZERO);
    assert_eq!(summary.average_hours_per_working_day, Decimal::ZERO);
}

#[test]
fn summary_average_over_uneven_days() {
    // Monday 8h, Tuesday 4h -> average 6h across two working days.
    let resolver =
        AvailabilityResolver::new(vec![pattern(0, dec!(8)), pattern(1, dec!(4))], vec![]);

    let summary = resolver.summarize("2024-01-15", "2024-01-21").unwrap();

    assert_eq!(summary.total_days, 7);
    assert_eq!(summary.working_days, 2);
    assert_eq!(summary.total_hours, dec!(12));
    assert_eq!(summary.average_hours_per_working_day, dec!(6));
}

#[test]
fn summary_counts_only_active_exceptions_inside_the_range() {
    let resolver = AvailabilityResolver::new(
        weekday_patterns(),
        vec![
            exception("in-1", "2024-01-16", true, dec!(2)),
            exception("in-2", "2024-01-18", true, dec!(0)),
            exception("inactive", "2024-01-17", false, dec!(0)),
            exception("before", "2024-01-10", true, dec!(0)),
            exception("after", "2024-02-01", true, dec!(0)),
        ],
    );

    let summary = resolver.summarize("2024-01-15", "2024-01-19").unwrap();

    assert_eq!(summary.exceptions_count, 2);
}

// ── has_exception / exceptions_in_range ─────────────────────────────────────

#[test]
fn has_exception_sees_only_active_entries() {
    let resolver = AvailabilityResolver::new(
        vec![],
        vec![
            exception("on", "2024-01-16", true, dec!(2)),
            exception("off", "2024-01-17", false, dec!(2)),
        ],
    );

    assert!(resolver.has_exception("2024-01-16"));
    assert!(!resolver.has_exception("2024-01-17"));
    assert!(!resolver.has_exception("2024-01-18"));
    assert!(!resolver.has_exception("never"));
}

#[test]
fn exceptions_in_range_is_inclusive_on_both_bounds() {
    let resolver = AvailabilityResolver::new(
        vec![],
        vec![
            exception("lo", "2024-01-15", true, dec!(1)),
            exception("mid", "2024-01-17", true, dec!(1)),
            exception("hi", "2024-01-19", true, dec!(1)),
            exception("out", "2024-01-20", true, dec!(1)),
        ],
    );

    let hits = resolver.exceptions_in_range("2024-01-15", "2024-01-19");

    let ids: Vec<&str> = hits.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["lo", "mid", "hi"]);
}

#[test]
fn exceptions_in_range_compares_date_values_not_strings() {
    // Bounds arrive as datetimes; the exception is stored as a plain date.
    // A lexicographic comparison would miss the match.
    let resolver = AvailabilityResolver::new(
        vec![],
        vec![exception("ex", "2024-01-16", true, dec!(3))],
    );

    let hits = resolver.exceptions_in_range("2024-01-15T00:00:00Z", "2024-01-19T00:00:00Z");

    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, "ex");
}

#[test]
fn exceptions_in_range_with_bad_bounds_is_empty() {
    let resolver = AvailabilityResolver::new(
        vec![],
        vec![exception("ex", "2024-01-16", true, dec!(3))],
    );

    assert!(resolver.exceptions_in_range("bad", "2024-01-19").is_empty());
    assert!(resolver.exceptions_in_range("2024-01-15", "bad").is_empty());
}
