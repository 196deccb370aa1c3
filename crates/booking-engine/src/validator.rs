//! The single slot bookability check.
//!
//! Every higher-level answer — day availability, slot enumeration,
//! next-available search — delegates here rather than re-deriving the
//! interval math, so the closing-boundary, lead-time, and break rules
//! live in exactly one place.

use chrono::{NaiveDate, NaiveDateTime};

use crate::calendar::ArtistCalendar;
use crate::clock::{minutes_of, time_to_minutes};
use crate::error::Result;
use crate::policy::BookingPolicy;

/// Decide whether one candidate slot is bookable.
///
/// Rules, applied in order with the first failure short-circuiting to
/// `false`:
///
/// 1. The slot must lie within store hours: `start` at or after open
///    and no later than the last possible start for `duration_minutes`,
///    `end` no later than closing. Ending exactly at closing is
///    allowed; one minute past it is not.
/// 2. Past dates are never bookable. On today, `start` must clear the
///    lead-time buffer (`now` plus the lead time, plus the rounding
///    tolerance); a slot exactly at the buffer boundary is rejected.
///    With the default policy and `now` = 11:55, the first admissible
///    start is 14:00.
/// 3. The slot must not overlap any booked interval on `date` extended
///    by the break. Overlap is half-open: a slot starting exactly where
///    a break ends is available.
///
/// # Errors
///
/// Returns [`BookingError::InvalidTime`](crate::BookingError::InvalidTime)
/// if either clock string is malformed.
///
/// # Examples
///
/// ```
/// use booking_engine::{is_slot_available, ArtistCalendar, BookingPolicy, WorkdayPattern};
/// use chrono::NaiveDate;
///
/// let policy = BookingPolicy::default();
/// let artist = ArtistCalendar {
///     id: "100".into(),
///     name: "Sammy".into(),
///     workdays: WorkdayPattern::AllDays,
///     services: Default::default(),
///     booked: Vec::new(),
/// };
/// let date = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
/// let now = NaiveDate::from_ymd_opt(2025, 6, 1)
///     .unwrap()
///     .and_hms_opt(12, 0, 0)
///     .unwrap();
/// assert!(is_slot_available(&policy, &artist, date, "09:00", "09:30", 30, now).unwrap());
/// assert!(!is_slot_available(&policy, &artist, date, "20:31", "21:01", 30, now).unwrap());
/// ```
pub fn is_slot_available(
    policy: &BookingPolicy,
    artist: &ArtistCalendar,
    date: NaiveDate,
    start: &str,
    end: &str,
    duration_minutes: u32,
    now: NaiveDateTime,
) -> Result<bool> {
    let start_min = time_to_minutes(start)?;
    let end_min = time_to_minutes(end)?;
    Ok(slot_fits(
        policy,
        artist,
        date,
        start_min,
        end_min,
        duration_minutes,
        now,
    ))
}

/// Minute-domain core of [`is_slot_available`]; shared with the day
/// walkers so candidate probing never round-trips through clock strings.
pub(crate) fn slot_fits(
    policy: &BookingPolicy,
    artist: &ArtistCalendar,
    date: NaiveDate,
    start_min: i32,
    end_min: i32,
    duration_minutes: u32,
    now: NaiveDateTime,
) -> bool {
    if start_min < policy.open
        || start_min > policy.last_possible_start(duration_minutes)
        || end_min > policy.close
    {
        return false;
    }

    let today = now.date();
    if date < today {
        return false;
    }
    if date == today {
        let buffer = minutes_of(now.time())
            + policy.lead_time_minutes
            + policy.lead_time_tolerance_minutes;
        if start_min < buffer {
            return false;
        }
    }

    for (booked_start, booked_end) in artist.bookings_on(date) {
        let extended_end = booked_end + policy.break_minutes;
        if start_min < extended_end && end_min > booked_start {
            return false;
        }
    }

    true
}
