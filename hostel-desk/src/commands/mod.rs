//! Desk operations. Every mutation writes through the database first and
//! applies the confirmed result to the in-memory mirrors, so a failed write
//! leaves the mirrors exactly as they were.

pub mod bookings;
pub mod catalog;
pub mod hr;
pub mod lodging;
pub mod payments;
pub mod reports;
pub mod rooms;
pub mod staff;
pub mod users;
pub mod utilities;

use crate::error::Result;

// Failed writes are logged with the attempted action; the error itself
// still reaches the caller untouched.
pub(crate) fn log_db_failure<T>(action: &'static str, result: Result<T>) -> Result<T> {
    result.map_err(|e| {
        tracing::error!("failed to {action}: {e}");
        e
    })
}
