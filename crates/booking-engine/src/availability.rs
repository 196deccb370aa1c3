//! Day-level availability: whether a date can yield a bookable slot,
//! the fully-booked hint, and the calendar-grid date check.
//!
//! The existence check walks candidates through the slot validator; the
//! fully-booked hint and the next-available search share one gap scan
//! over the day's bookings, so the interval math is not forked.

use chrono::{NaiveDate, NaiveDateTime, Timelike};

use crate::calendar::ArtistCalendar;
use crate::clock::{minutes_of, round_up_to_step};
use crate::policy::BookingPolicy;
use crate::validator::slot_fits;

/// Step, in minutes, used when probing a day for any bookable slot.
const PROBE_STEP: i32 = 30;

/// Whether `date` can yield at least one bookable slot for
/// `duration_minutes`.
///
/// Walks candidate starts in 30-minute steps — from store open, or on
/// today from the lead-time buffer rounded up to the next half hour —
/// and asks the slot validator at each, answering `true` on the first
/// hit. This is the authoritative existence check: it applies the
/// strict closing boundary with no overrun allowance.
///
/// A duration that cannot finish by closing at all (last possible start
/// precedes opening) answers `false` for every date, regardless of
/// bookings.
pub fn has_available_time_slots(
    policy: &BookingPolicy,
    artist: &ArtistCalendar,
    date: NaiveDate,
    duration_minutes: u32,
    now: NaiveDateTime,
) -> bool {
    let last_start = policy.last_possible_start(duration_minutes);
    if last_start < policy.open {
        return false;
    }

    let mut cursor = policy.open;
    if date == now.date() {
        let earliest =
            round_up_to_step(minutes_of(now.time()) + policy.lead_time_minutes, PROBE_STEP);
        cursor = cursor.max(earliest);
    }

    while cursor <= last_start {
        if slot_fits(
            policy,
            artist,
            date,
            cursor,
            cursor + duration_minutes as i32,
            duration_minutes,
            now,
        ) {
            return true;
        }
        cursor += PROBE_STEP;
    }
    false
}

/// Free intervals on a day around `bookings`, as minute pairs, clipped
/// to `[open, close + overrun_minutes]`.
///
/// One gap before the first booking, one between each consecutive pair,
/// one after the last. A running maximum end collapses overlapping
/// bookings, so an inconsistent snapshot yields zero or negative gaps
/// instead of phantom free time; callers skip those via the fit check.
pub(crate) fn day_gaps(
    policy: &BookingPolicy,
    bookings: &[(i32, i32)],
    overrun_minutes: i32,
) -> Vec<(i32, i32)> {
    let day_end = policy.close + overrun_minutes;
    let mut gaps = Vec::with_capacity(bookings.len() + 1);
    let mut cursor = policy.open;
    for &(start, end) in bookings {
        gaps.push((cursor, start.min(day_end)));
        cursor = cursor.max(end);
    }
    gaps.push((cursor, day_end));
    gaps
}

/// Whether a single gap can host `duration_minutes` plus the break.
pub(crate) fn gap_fits(policy: &BookingPolicy, gap: (i32, i32), duration_minutes: u32) -> bool {
    gap.1 - gap.0 >= policy.required_gap(duration_minutes)
}

/// UI hint: `true` when no gap on `date` — morning, between
/// appointments, or evening — can fit `duration_minutes` plus the break
/// before the closing boundary.
///
/// A day without bookings is never fully booked. Zero-duration services
/// take the same path: only the break has to fit. The boundary may be
/// relaxed past closing via
/// [`BookingPolicy::fully_booked_overrun_minutes`], which defaults to
/// the strict 0.
pub fn is_date_fully_booked(
    policy: &BookingPolicy,
    artist: &ArtistCalendar,
    date: NaiveDate,
    duration_minutes: u32,
) -> bool {
    let bookings = artist.bookings_on(date);
    if bookings.is_empty() {
        return false;
    }
    !day_gaps(policy, &bookings, policy.fully_booked_overrun_minutes)
        .into_iter()
        .any(|gap| gap_fits(policy, gap, duration_minutes))
}

/// Calendar-grid check for one date.
///
/// `date` must be today or later; today is additionally cut off at
/// [`BookingPolicy::same_day_cutoff_hour`] (independent of the
/// lead-time buffer — the two restrictions stack); the artist must work
/// that weekday; and at least one slot must actually be bookable.
pub fn is_date_available(
    policy: &BookingPolicy,
    artist: &ArtistCalendar,
    date: NaiveDate,
    duration_minutes: u32,
    now: NaiveDateTime,
) -> bool {
    let today = now.date();
    if date < today {
        return false;
    }
    if date == today && now.hour() >= policy.same_day_cutoff_hour {
        return false;
    }
    if !artist.works_on(date) {
        return false;
    }
    has_available_time_slots(policy, artist, date, duration_minutes, now)
}
