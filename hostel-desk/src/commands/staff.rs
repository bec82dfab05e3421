use crate::commands::log_db_failure;
use crate::error::Result;
use crate::models::{CreateStaff, Staff};
use crate::state::AppState;

pub fn add_staff(state: &mut AppState, staff: CreateStaff) -> Result<Staff> {
    let created = log_db_failure("add staff member", state.db.insert_staff(staff))?;
    state.staff.push(created.clone());
    Ok(created)
}

pub fn update_staff(state: &mut AppState, staff: Staff) -> Result<Staff> {
    let updated = log_db_failure("update staff member", state.db.update_staff(&staff))?;

    if let Some(slot) = state.staff.iter_mut().find(|s| s.id == updated.id) {
        *slot = updated.clone();
    }

    Ok(updated)
}

pub fn delete_staff(state: &mut AppState, id: &str) -> Result<()> {
    log_db_failure("delete staff member", state.db.delete_staff(id))?;
    state.staff.retain(|s| s.id != id);
    Ok(())
}
