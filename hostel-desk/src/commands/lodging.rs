//! Accommodation channels: walk-in guests paying at the desk and bookings
//! arriving through external platforms.

use crate::commands::log_db_failure;
use crate::error::Result;
use crate::models::{
    AccommodationBooking, CreateAccommodationBooking, CreateWalkInGuest, WalkInGuest,
};
use crate::state::AppState;

pub fn add_walk_in_guest(state: &mut AppState, guest: CreateWalkInGuest) -> Result<WalkInGuest> {
    let created = log_db_failure("check in guest", state.db.insert_walk_in_guest(guest))?;
    state.walk_in_guests.push(created.clone());
    Ok(created)
}

pub fn update_walk_in_guest(state: &mut AppState, guest: WalkInGuest) -> Result<WalkInGuest> {
    let updated = log_db_failure(
        "update walk-in guest",
        state.db.update_walk_in_guest(&guest),
    )?;

    if let Some(slot) = state.walk_in_guests.iter_mut().find(|g| g.id == updated.id) {
        *slot = updated.clone();
    }

    Ok(updated)
}

pub fn delete_walk_in_guest(state: &mut AppState, id: &str) -> Result<()> {
    log_db_failure("delete walk-in guest", state.db.delete_walk_in_guest(id))?;
    state.walk_in_guests.retain(|g| g.id != id);
    Ok(())
}

pub fn add_accommodation_booking(
    state: &mut AppState,
    booking: CreateAccommodationBooking,
) -> Result<AccommodationBooking> {
    let created = log_db_failure(
        "add accommodation booking",
        state.db.insert_accommodation_booking(booking),
    )?;
    state.accommodation_bookings.push(created.clone());
    Ok(created)
}

pub fn update_accommodation_booking(
    state: &mut AppState,
    booking: AccommodationBooking,
) -> Result<AccommodationBooking> {
    let updated = log_db_failure(
        "update accommodation booking",
        state.db.update_accommodation_booking(&booking),
    )?;

    if let Some(slot) = state
        .accommodation_bookings
        .iter_mut()
        .find(|b| b.id == updated.id)
    {
        *slot = updated.clone();
    }

    Ok(updated)
}

pub fn delete_accommodation_booking(state: &mut AppState, id: &str) -> Result<()> {
    log_db_failure(
        "delete accommodation booking",
        state.db.delete_accommodation_booking(id),
    )?;
    state.accommodation_bookings.retain(|b| b.id != id);
    Ok(())
}
