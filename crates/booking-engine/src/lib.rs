//! # booking-engine
//!
//! Deterministic availability computation for appointment booking.
//!
//! Given an artist's calendar snapshot, a requested service duration,
//! store operating hours, and an explicit "now" anchor, the engine
//! decides which dates and time slots are bookable, enumerates a day's
//! slot grid, and searches forward for the next open slot. It is a pure
//! function-over-data core: no I/O, no persistence, no system clock
//! access — the caller supplies the snapshot and the anchor, so every
//! answer is reproducible and concurrent calls over different snapshots
//! are inherently safe.
//!
//! ## Modules
//!
//! - [`clock`] — "HH:MM" strings ↔ minutes since midnight
//! - [`policy`] — store hours and booking rules as one explicit config value
//! - [`calendar`] — read-model types for the artist calendar snapshot
//! - [`validator`] — the single slot bookability check everything delegates to
//! - [`availability`] — day-level availability and the fully-booked hint
//! - [`slots`] — a day's ordered slot grid
//! - [`search`] — bounded forward search for the next open date and time
//! - [`error`] — error types

pub mod availability;
pub mod calendar;
pub mod clock;
pub mod error;
pub mod policy;
pub mod search;
pub mod slots;
pub mod validator;

pub use availability::{has_available_time_slots, is_date_available, is_date_fully_booked};
pub use calendar::{Appointment, ArtistCalendar, WorkdayPattern};
pub use clock::{add_minutes, minutes_to_time, time_to_minutes};
pub use error::BookingError;
pub use policy::BookingPolicy;
pub use search::{find_next_available_date, next_available_time};
pub use slots::{generate_time_slots, SlotCandidate};
pub use validator::is_slot_available;
