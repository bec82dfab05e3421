use crate::commands::log_db_failure;
use crate::error::Result;
use crate::models::{CreateRoom, Room};
use crate::state::AppState;

pub fn add_room(state: &mut AppState, room: CreateRoom) -> Result<Room> {
    let created = log_db_failure("add room", state.db.insert_room(room))?;
    state.rooms.push(created.clone());
    Ok(created)
}

pub fn update_room(state: &mut AppState, room: Room) -> Result<Room> {
    let updated = log_db_failure("update room", state.db.update_room(&room))?;

    if let Some(slot) = state.rooms.iter_mut().find(|r| r.id == updated.id) {
        *slot = updated.clone();
    }

    Ok(updated)
}

/// Removes a room and its beds.
pub fn delete_room(state: &mut AppState, id: &str) -> Result<()> {
    log_db_failure("delete room", state.db.delete_room(id))?;
    state.rooms.retain(|r| r.id != id);
    Ok(())
}
