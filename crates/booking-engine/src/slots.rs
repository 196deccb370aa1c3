//! The ordered slot grid for a picked date.

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

use crate::calendar::ArtistCalendar;
use crate::clock::minutes_to_time;
use crate::policy::BookingPolicy;
use crate::validator::slot_fits;

/// One candidate slot in a day's grid. Derived and ephemeral — never
/// persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlotCandidate {
    pub date: NaiveDate,
    /// Slot start, "HH:MM".
    pub start_time: String,
    /// Slot end (start plus the service duration), "HH:MM".
    pub end_time: String,
    pub is_available: bool,
}

/// Enumerate every slot candidate on `date`, from store open to close.
///
/// Steps by 30 minutes for services of half an hour or less, hourly
/// otherwise. Each entry's `is_available` is exactly the slot
/// validator's verdict; unavailable entries are kept — the UI decides
/// whether to grey them out or hide them. The grid is recomputed fresh
/// on every call, so two calls with identical inputs (including `now`)
/// yield identical sequences.
pub fn generate_time_slots(
    policy: &BookingPolicy,
    artist: &ArtistCalendar,
    date: NaiveDate,
    duration_minutes: u32,
    now: NaiveDateTime,
) -> Vec<SlotCandidate> {
    let step = policy.slot_step(duration_minutes);
    let mut slots = Vec::new();
    let mut cursor = policy.open;
    while cursor < policy.close {
        let end = cursor + duration_minutes as i32;
        slots.push(SlotCandidate {
            date,
            start_time: minutes_to_time(cursor),
            end_time: minutes_to_time(end),
            is_available: slot_fits(policy, artist, date, cursor, end, duration_minutes, now),
        });
        cursor += step;
    }
    slots
}
