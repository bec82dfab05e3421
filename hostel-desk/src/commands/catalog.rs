//! Administration of the sellable catalog: activities, speed boat trips,
//! taxi boat options, and extras. Bookings snapshot these at sale time, so
//! edits here never change stored history.

use crate::commands::log_db_failure;
use crate::error::Result;
use crate::models::{
    Activity, CreateActivity, CreateExtra, CreateSpeedBoatTrip, CreateTaxiBoatOption, Extra,
    SpeedBoatTrip, TaxiBoatOption,
};
use crate::state::AppState;

pub fn add_activity(state: &mut AppState, activity: CreateActivity) -> Result<Activity> {
    let created = log_db_failure("add activity", state.db.insert_activity(activity))?;
    state.activities.push(created.clone());
    Ok(created)
}

pub fn update_activity(state: &mut AppState, activity: Activity) -> Result<Activity> {
    let updated = log_db_failure("update activity", state.db.update_activity(&activity))?;

    if let Some(slot) = state.activities.iter_mut().find(|a| a.id == updated.id) {
        *slot = updated.clone();
    }

    Ok(updated)
}

pub fn delete_activity(state: &mut AppState, id: &str) -> Result<()> {
    log_db_failure("delete activity", state.db.delete_activity(id))?;
    state.activities.retain(|a| a.id != id);
    Ok(())
}

pub fn add_speed_boat_trip(
    state: &mut AppState,
    trip: CreateSpeedBoatTrip,
) -> Result<SpeedBoatTrip> {
    let created = log_db_failure("add speed boat trip", state.db.insert_speed_boat_trip(trip))?;
    state.speed_boat_trips.push(created.clone());
    Ok(created)
}

pub fn update_speed_boat_trip(state: &mut AppState, trip: SpeedBoatTrip) -> Result<SpeedBoatTrip> {
    let updated = log_db_failure(
        "update speed boat trip",
        state.db.update_speed_boat_trip(&trip),
    )?;

    if let Some(slot) = state.speed_boat_trips.iter_mut().find(|t| t.id == updated.id) {
        *slot = updated.clone();
    }

    Ok(updated)
}

pub fn delete_speed_boat_trip(state: &mut AppState, id: &str) -> Result<()> {
    log_db_failure("delete speed boat trip", state.db.delete_speed_boat_trip(id))?;
    state.speed_boat_trips.retain(|t| t.id != id);
    Ok(())
}

pub fn add_taxi_boat_option(
    state: &mut AppState,
    option: CreateTaxiBoatOption,
) -> Result<TaxiBoatOption> {
    let created = log_db_failure(
        "add taxi boat option",
        state.db.insert_taxi_boat_option(option),
    )?;
    state.taxi_boat_options.push(created.clone());
    Ok(created)
}

pub fn update_taxi_boat_option(
    state: &mut AppState,
    option: TaxiBoatOption,
) -> Result<TaxiBoatOption> {
    let updated = log_db_failure(
        "update taxi boat option",
        state.db.update_taxi_boat_option(&option),
    )?;

    if let Some(slot) = state.taxi_boat_options.iter_mut().find(|o| o.id == updated.id) {
        *slot = updated.clone();
    }

    Ok(updated)
}

pub fn delete_taxi_boat_option(state: &mut AppState, id: &str) -> Result<()> {
    log_db_failure(
        "delete taxi boat option",
        state.db.delete_taxi_boat_option(id),
    )?;
    state.taxi_boat_options.retain(|o| o.id != id);
    Ok(())
}

pub fn add_extra(state: &mut AppState, extra: CreateExtra) -> Result<Extra> {
    let created = log_db_failure("add extra", state.db.insert_extra(extra))?;
    state.extras.push(created.clone());
    Ok(created)
}

pub fn update_extra(state: &mut AppState, extra: Extra) -> Result<Extra> {
    let updated = log_db_failure("update extra", state.db.update_extra(&extra))?;

    if let Some(slot) = state.extras.iter_mut().find(|e| e.id == updated.id) {
        *slot = updated.clone();
    }

    Ok(updated)
}

pub fn delete_extra(state: &mut AppState, id: &str) -> Result<()> {
    log_db_failure("delete extra", state.db.delete_extra(id))?;
    state.extras.retain(|e| e.id != id);
    Ok(())
}
