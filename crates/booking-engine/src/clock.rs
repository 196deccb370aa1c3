//! Minute-granularity clock arithmetic.
//!
//! The booking API and the UI exchange wall-clock times as "HH:MM"
//! strings; everything downstream computes in integer minutes since
//! midnight. These conversions are the only place the string shape is
//! parsed or produced.

use chrono::{NaiveTime, Timelike};

use crate::error::{BookingError, Result};

/// Parse an "HH:MM" clock string into minutes since midnight.
///
/// # Errors
///
/// Returns [`BookingError::InvalidTime`] if the string is not a
/// 24-hour clock time (`"09:00"`, `"21:30"`, ...).
///
/// # Examples
///
/// ```
/// use booking_engine::clock::time_to_minutes;
///
/// assert_eq!(time_to_minutes("09:00").unwrap(), 540);
/// assert_eq!(time_to_minutes("21:00").unwrap(), 1260);
/// assert!(time_to_minutes("25:00").is_err());
/// ```
pub fn time_to_minutes(clock: &str) -> Result<i32> {
    let (h, m) = clock
        .split_once(':')
        .ok_or_else(|| BookingError::InvalidTime(format!("'{clock}': expected HH:MM")))?;
    let hours: i32 = h
        .parse()
        .map_err(|_| BookingError::InvalidTime(format!("'{clock}': bad hour")))?;
    let minutes: i32 = m
        .parse()
        .map_err(|_| BookingError::InvalidTime(format!("'{clock}': bad minute")))?;
    if !(0..24).contains(&hours) || !(0..60).contains(&minutes) {
        return Err(BookingError::InvalidTime(format!("'{clock}': out of range")));
    }
    Ok(hours * 60 + minutes)
}

/// Format minutes since midnight as a zero-padded "HH:MM" string.
///
/// The domain is `[0, 1440)`. Values outside it are a caller bug and
/// are not handled: there is no midnight rollover, so 1470 formats as
/// `"24:30"`.
pub fn minutes_to_time(minutes: i32) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// Add a minute delta to an "HH:MM" clock string.
///
/// Valid use never rolls across midnight — the store closes at 21:00,
/// so no slot arithmetic reaches 24:00.
///
/// # Errors
///
/// Returns [`BookingError::InvalidTime`] if `clock` is malformed.
pub fn add_minutes(clock: &str, delta: i32) -> Result<String> {
    Ok(minutes_to_time(time_to_minutes(clock)? + delta))
}

/// Minutes since midnight of a `NaiveTime`, discarding seconds.
pub(crate) fn minutes_of(time: NaiveTime) -> i32 {
    time.hour() as i32 * 60 + time.minute() as i32
}

/// Minutes since midnight back to a `NaiveTime`.
pub(crate) fn naive_time(minutes: i32) -> NaiveTime {
    NaiveTime::from_hms_opt((minutes / 60) as u32, (minutes % 60) as u32, 0)
        .unwrap_or(NaiveTime::MIN)
}

/// Round non-negative minutes up to the next multiple of `step`.
pub(crate) fn round_up_to_step(minutes: i32, step: i32) -> i32 {
    (minutes + step - 1) / step * step
}
