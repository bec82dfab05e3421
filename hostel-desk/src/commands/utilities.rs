use crate::commands::log_db_failure;
use crate::error::{Error, Result};
use crate::models::{CreateUtilityRecord, UtilityRecord};
use crate::state::AppState;

pub fn add_utility_record(
    state: &mut AppState,
    record: CreateUtilityRecord,
) -> Result<UtilityRecord> {
    let created = log_db_failure("add utility record", state.db.insert_utility_record(record))?;
    state.utility_records.push(created.clone());
    Ok(created)
}

pub fn update_utility_record(state: &mut AppState, record: UtilityRecord) -> Result<UtilityRecord> {
    let updated = log_db_failure(
        "update utility record",
        state.db.update_utility_record(&record),
    )?;

    if let Some(slot) = state.utility_records.iter_mut().find(|r| r.id == updated.id) {
        *slot = updated.clone();
    }

    Ok(updated)
}

pub fn delete_utility_record(state: &mut AppState, id: &str) -> Result<()> {
    log_db_failure("delete utility record", state.db.delete_utility_record(id))?;
    state.utility_records.retain(|r| r.id != id);
    Ok(())
}

/// Adds a spend category. Names are the key, compared case-insensitively.
pub fn add_utility_category(state: &mut AppState, name: &str) -> Result<String> {
    let name = name.trim();

    if name.is_empty() {
        return Err(Error::invalid("Category name cannot be empty"));
    }

    let lowered = name.to_lowercase();
    if state
        .utility_categories
        .iter()
        .any(|existing| existing.to_lowercase() == lowered)
    {
        return Err(Error::invalid(format!("Category {name:?} already exists")));
    }

    log_db_failure(
        "add utility category",
        state.db.insert_utility_category(name),
    )?;
    state.utility_categories.push(name.to_string());
    state.utility_categories.sort();
    Ok(name.to_string())
}

pub fn delete_utility_category(state: &mut AppState, name: &str) -> Result<()> {
    log_db_failure(
        "delete utility category",
        state.db.delete_utility_category(name),
    )?;
    state.utility_categories.retain(|existing| existing != name);
    Ok(())
}
