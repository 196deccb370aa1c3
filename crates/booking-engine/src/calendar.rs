//! Read-model types for an artist's calendar snapshot.
//!
//! The booking API supplies one [`ArtistCalendar`] per call and the
//! engine never mutates it. Booked intervals are expected to be
//! non-overlapping and sorted, but the snapshot is not trusted: the
//! per-day view re-sorts, and overlapping intervals collapse into zero
//! or negative gaps downstream instead of panicking.

use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate, NaiveDateTime, Weekday};
use serde::{Deserialize, Serialize};

use crate::clock::minutes_of;
use crate::error::{BookingError, Result};

/// Timestamp shapes used by the booking API.
const API_FORMAT: &str = "%Y-%m-%dT%H:%M";
const API_FORMAT_SECONDS: &str = "%Y-%m-%dT%H:%M:%S";

/// A booked interval on an artist's calendar. Immutable once stored;
/// created and removed only by the booking API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl Appointment {
    /// Create an appointment, enforcing `end > start`.
    ///
    /// # Errors
    ///
    /// Returns [`BookingError::InvalidDuration`] if the interval is
    /// empty or inverted.
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Result<Self> {
        if end <= start {
            return Err(BookingError::InvalidDuration(format!(
                "appointment must end after it starts: {start} >= {end}"
            )));
        }
        Ok(Self { start, end })
    }

    /// Parse an appointment from the booking API's timestamp strings
    /// (`2025-02-14T09:00`, optionally with seconds).
    ///
    /// # Errors
    ///
    /// Returns [`BookingError::InvalidDatetime`] on a malformed
    /// timestamp, or [`BookingError::InvalidDuration`] if the interval
    /// is empty or inverted.
    pub fn parse(start: &str, end: &str) -> Result<Self> {
        Self::new(parse_api_datetime(start)?, parse_api_datetime(end)?)
    }
}

fn parse_api_datetime(s: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, API_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(s, API_FORMAT_SECONDS))
        .map_err(|e| BookingError::InvalidDatetime(format!("'{s}': {e}")))
}

/// Which calendar weekdays an artist is structurally available,
/// regardless of bookings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkdayPattern {
    AllDays,
    Weekdays,
    Weekends,
    /// An explicit weekday list, e.g. Monday and Wednesday only.
    Days(Vec<Weekday>),
}

impl WorkdayPattern {
    /// Whether this pattern includes `weekday`.
    pub fn covers(&self, weekday: Weekday) -> bool {
        let weekend = matches!(weekday, Weekday::Sat | Weekday::Sun);
        match self {
            WorkdayPattern::AllDays => true,
            WorkdayPattern::Weekdays => !weekend,
            WorkdayPattern::Weekends => weekend,
            WorkdayPattern::Days(days) => days.contains(&weekday),
        }
    }
}

/// Read-only snapshot of one artist's bookable state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtistCalendar {
    pub id: String,
    pub name: String,
    pub workdays: WorkdayPattern,
    pub services: BTreeSet<String>,
    /// Booked intervals, ordered by start.
    pub booked: Vec<Appointment>,
}

impl ArtistCalendar {
    /// Whether the artist's workday pattern includes `date`.
    pub fn works_on(&self, date: NaiveDate) -> bool {
        self.workdays.covers(date.weekday())
    }

    /// The day's booked intervals as minute-of-day pairs, sorted by start.
    pub(crate) fn bookings_on(&self, date: NaiveDate) -> Vec<(i32, i32)> {
        let mut day: Vec<(i32, i32)> = self
            .booked
            .iter()
            .filter(|a| a.start.date() == date)
            .map(|a| (minutes_of(a.start.time()), minutes_of(a.end.time())))
            .collect();
        day.sort_unstable();
        day
    }
}
