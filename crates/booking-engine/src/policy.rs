//! Store hours and booking rules as one explicit configuration value.
//!
//! A single immutable [`BookingPolicy`] is constructed once and passed
//! into every entry point. There are no module-level globals, so
//! multi-location setups and tests carry their own policies.

use crate::clock::{minutes_to_time, time_to_minutes};
use crate::error::{BookingError, Result};

/// Immutable booking rules for one store location.
///
/// All minute fields count from midnight. The defaults mirror the
/// production store: open 09:00, close 21:00, a 10-minute break after
/// every appointment, a 2-hour same-day lead time with a 5-minute
/// rounding tolerance, a hard 19:00 same-day cutoff, and a 60-day
/// search horizon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingPolicy {
    /// Store opening, minutes since midnight.
    pub open: i32,
    /// Store closing, minutes since midnight. A slot may end exactly here.
    pub close: i32,
    /// Mandatory idle minutes after every booked interval.
    pub break_minutes: i32,
    /// Minimum lead time before a same-day booking, counted from "now".
    pub lead_time_minutes: i32,
    /// Rounding tolerance added to the lead-time boundary. A slot at or
    /// inside `now + lead_time + tolerance` is rejected.
    pub lead_time_tolerance_minutes: i32,
    /// Hard same-day cutoff: at or after this hour, today is no longer
    /// offered regardless of remaining store hours. Independent of, and
    /// stacked with, the lead-time buffer.
    pub same_day_cutoff_hour: u32,
    /// How many calendar days the next-available search scans.
    pub search_horizon_days: u32,
    /// Extra minutes past closing the fully-booked gap check may use.
    /// The legacy behavior allowed 60 here while slot validation never
    /// did; the relaxation is now opt-in and defaults to 0.
    pub fully_booked_overrun_minutes: i32,
}

impl Default for BookingPolicy {
    fn default() -> Self {
        Self {
            open: 9 * 60,
            close: 21 * 60,
            break_minutes: 10,
            lead_time_minutes: 120,
            lead_time_tolerance_minutes: 5,
            same_day_cutoff_hour: 19,
            search_horizon_days: 60,
            fully_booked_overrun_minutes: 0,
        }
    }
}

impl BookingPolicy {
    /// Build a policy with custom store hours and default booking rules.
    ///
    /// # Errors
    ///
    /// Returns [`BookingError::InvalidTime`] if either clock string is
    /// malformed or the store would close at or before it opens.
    pub fn new(open: &str, close: &str) -> Result<Self> {
        let open = time_to_minutes(open)?;
        let close = time_to_minutes(close)?;
        if close <= open {
            return Err(BookingError::InvalidTime(format!(
                "store must close after it opens: {} >= {}",
                minutes_to_time(open),
                minutes_to_time(close),
            )));
        }
        Ok(Self {
            open,
            close,
            ..Self::default()
        })
    }

    /// The latest start, in minutes, that lets `duration_minutes` finish
    /// by closing.
    ///
    /// A result before [`BookingPolicy::open`] means no valid slot
    /// exists that day — callers treat it as "no slots possible", never
    /// as an error.
    pub fn last_possible_start(&self, duration_minutes: u32) -> i32 {
        self.close - duration_minutes as i32
    }

    /// Whether a clock time falls within store hours, both ends inclusive.
    ///
    /// # Errors
    ///
    /// Returns [`BookingError::InvalidTime`] if `clock` is malformed.
    pub fn is_within_store_hours(&self, clock: &str) -> Result<bool> {
        let t = time_to_minutes(clock)?;
        Ok(t >= self.open && t <= self.close)
    }

    /// Enumeration granularity for a service duration: short services
    /// every 30 minutes, longer ones hourly.
    pub fn slot_step(&self, duration_minutes: u32) -> i32 {
        if duration_minutes <= 30 {
            30
        } else {
            60
        }
    }

    /// Minutes a free gap must hold to host `duration_minutes` plus the
    /// break. Zero-duration services need only the break.
    pub(crate) fn required_gap(&self, duration_minutes: u32) -> i32 {
        duration_minutes as i32 + self.break_minutes
    }
}
