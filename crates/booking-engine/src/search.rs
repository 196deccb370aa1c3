//! Bounded forward search for the next open date and time.

use chrono::{NaiveDate, NaiveDateTime};

use crate::availability::{day_gaps, gap_fits, is_date_available};
use crate::calendar::ArtistCalendar;
use crate::clock::{minutes_to_time, naive_time};
use crate::policy::BookingPolicy;

/// Earliest open clock time on `date` for `duration_minutes`, or `None`
/// when no gap fits.
///
/// A day with no bookings answers store open, provided the duration
/// can finish by closing at all. Otherwise the start of the first gap
/// — morning, between appointments, or evening — that holds the
/// duration plus the break. The strict closing boundary applies here;
/// the fully-booked overrun flag does not. Zero-duration services take
/// the same path, needing only the break.
pub fn next_available_time(
    policy: &BookingPolicy,
    artist: &ArtistCalendar,
    date: NaiveDate,
    duration_minutes: u32,
) -> Option<String> {
    next_available_minutes(policy, artist, date, duration_minutes).map(minutes_to_time)
}

fn next_available_minutes(
    policy: &BookingPolicy,
    artist: &ArtistCalendar,
    date: NaiveDate,
    duration_minutes: u32,
) -> Option<i32> {
    if policy.last_possible_start(duration_minutes) < policy.open {
        return None;
    }
    let bookings = artist.bookings_on(date);
    if bookings.is_empty() {
        return Some(policy.open);
    }
    day_gaps(policy, &bookings, 0)
        .into_iter()
        .find(|&gap| gap_fits(policy, gap, duration_minutes))
        .map(|gap| gap.0)
}

/// Scan forward from `start_date` for the first date with a bookable
/// opening, answering the combined date-and-time of the earliest one.
///
/// The scan is linear and bounded to
/// [`BookingPolicy::search_horizon_days`]; `None` means the horizon was
/// exhausted. Each candidate date must pass the full
/// [`is_date_available`] gate (workday pattern, same-day cutoff, slot
/// existence) before its earliest time is computed.
pub fn find_next_available_date(
    policy: &BookingPolicy,
    artist: &ArtistCalendar,
    start_date: NaiveDate,
    duration_minutes: u32,
    now: NaiveDateTime,
) -> Option<NaiveDateTime> {
    let mut date = start_date;
    for _ in 0..policy.search_horizon_days {
        if is_date_available(policy, artist, date, duration_minutes, now) {
            if let Some(minutes) = next_available_minutes(policy, artist, date, duration_minutes) {
                return Some(date.and_time(naive_time(minutes)));
            }
        }
        date = date.succ_opt()?;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::{Appointment, WorkdayPattern};
    use chrono::Weekday;

    fn artist(booked: Vec<Appointment>) -> ArtistCalendar {
        ArtistCalendar {
            id: "100".into(),
            name: "Sammy".into(),
            workdays: WorkdayPattern::AllDays,
            services: Default::default(),
            booked,
        }
    }

    fn appt(start: &str, end: &str) -> Appointment {
        Appointment::parse(start, end).unwrap()
    }

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn at(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M").unwrap()
    }

    // ── next_available_time ─────────────────────────────────────────────

    #[test]
    fn test_empty_day_answers_store_open() {
        let policy = BookingPolicy::default();
        let time = next_available_time(&policy, &artist(Vec::new()), date("2025-06-02"), 120);
        assert_eq!(time.as_deref(), Some("09:00"));
    }

    #[test]
    fn test_earliest_gap_after_morning_booking() {
        let policy = BookingPolicy::default();
        let a = artist(vec![appt("2025-06-02T09:00", "2025-06-02T12:00")]);
        let time = next_available_time(&policy, &a, date("2025-06-02"), 30);
        assert_eq!(time.as_deref(), Some("12:00"));
    }

    #[test]
    fn test_midday_gap_too_small_falls_through_to_evening() {
        let policy = BookingPolicy::default();
        let a = artist(vec![
            appt("2025-06-02T09:00", "2025-06-02T12:00"),
            appt("2025-06-02T12:20", "2025-06-02T16:00"),
        ]);
        // The 20-minute midday gap cannot hold 30 + 10; the evening can.
        let time = next_available_time(&policy, &a, date("2025-06-02"), 30);
        assert_eq!(time.as_deref(), Some("16:00"));
    }

    #[test]
    fn test_zero_duration_needs_only_the_break() {
        let policy = BookingPolicy::default();
        let a = artist(vec![
            appt("2025-06-02T09:00", "2025-06-02T12:00"),
            appt("2025-06-02T12:10", "2025-06-02T21:00"),
        ]);
        let time = next_available_time(&policy, &a, date("2025-06-02"), 0);
        assert_eq!(time.as_deref(), Some("12:00"));

        let b = artist(vec![
            appt("2025-06-02T09:00", "2025-06-02T12:00"),
            appt("2025-06-02T12:05", "2025-06-02T21:00"),
        ]);
        assert_eq!(next_available_time(&policy, &b, date("2025-06-02"), 0), None);
    }

    #[test]
    fn test_oversized_duration_answers_none_even_on_an_empty_day() {
        // 13 hours exceeds the 12-hour store day; an empty calendar must
        // not short-circuit to opening time.
        let policy = BookingPolicy::default();
        assert_eq!(
            next_available_time(&policy, &artist(Vec::new()), date("2025-06-02"), 780),
            None
        );
        // A duration spanning exactly the whole day still starts at open.
        let time = next_available_time(&policy, &artist(Vec::new()), date("2025-06-02"), 720);
        assert_eq!(time.as_deref(), Some("09:00"));
    }

    #[test]
    fn test_fully_packed_day_answers_none() {
        let policy = BookingPolicy::default();
        let a = artist(vec![appt("2025-06-02T09:00", "2025-06-02T20:55")]);
        assert_eq!(next_available_time(&policy, &a, date("2025-06-02"), 30), None);
    }

    // ── find_next_available_date ────────────────────────────────────────

    #[test]
    fn test_empty_future_day_found_at_open() {
        let policy = BookingPolicy::default();
        let found = find_next_available_date(
            &policy,
            &artist(Vec::new()),
            date("2025-06-02"),
            120,
            at("2025-06-01T12:00"),
        );
        assert_eq!(found, Some(at("2025-06-02T09:00")));
    }

    #[test]
    fn test_scan_skips_non_working_days() {
        let policy = BookingPolicy::default();
        let mut a = artist(Vec::new());
        a.workdays = WorkdayPattern::Weekends;
        // Scanning from Monday 2025-06-02 lands on Saturday 2025-06-07.
        let found = find_next_available_date(
            &policy,
            &a,
            date("2025-06-02"),
            30,
            at("2025-06-01T12:00"),
        );
        assert_eq!(found, Some(at("2025-06-07T09:00")));
    }

    #[test]
    fn test_scan_skips_booked_days() {
        let policy = BookingPolicy::default();
        let a = artist(vec![
            appt("2025-06-02T09:00", "2025-06-02T20:55"),
            appt("2025-06-03T09:00", "2025-06-03T14:00"),
        ]);
        let found = find_next_available_date(
            &policy,
            &a,
            date("2025-06-02"),
            30,
            at("2025-06-01T12:00"),
        );
        assert_eq!(found, Some(at("2025-06-03T14:00")));
    }

    #[test]
    fn test_horizon_exhausted_answers_none() {
        let policy = BookingPolicy::default();
        let mut a = artist(Vec::new());
        a.workdays = WorkdayPattern::Days(Vec::new());
        assert_eq!(
            find_next_available_date(&policy, &a, date("2025-06-02"), 30, at("2025-06-01T12:00")),
            None
        );
    }

    #[test]
    fn test_horizon_is_sixty_days() {
        // Artist only works one weekday; shrink the horizon below a week
        // and the scan gives up before reaching it.
        let mut a = artist(Vec::new());
        a.workdays = WorkdayPattern::Days(vec![Weekday::Sun]);
        let narrow = BookingPolicy {
            search_horizon_days: 5,
            ..BookingPolicy::default()
        };
        // Monday 2025-06-02: the next Sunday is 6 days out.
        assert_eq!(
            find_next_available_date(&narrow, &a, date("2025-06-02"), 30, at("2025-06-01T12:00")),
            None
        );
        let wide = BookingPolicy::default();
        assert_eq!(
            find_next_available_date(&wide, &a, date("2025-06-02"), 30, at("2025-06-01T12:00")),
            Some(at("2025-06-08T09:00"))
        );
    }
}
