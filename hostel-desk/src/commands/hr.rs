//! Tasks, absences, and salary advances. Shifts are read-only rows loaded
//! at startup; there is no mutation surface for them.

use crate::commands::log_db_failure;
use crate::error::Result;
use crate::models::{
    Absence, CreateAbsence, CreateSalaryAdvance, CreateTask, SalaryAdvance, Task,
};
use crate::state::AppState;

pub fn add_task(state: &mut AppState, task: CreateTask) -> Result<Task> {
    let created = log_db_failure("add task", state.db.insert_task(task))?;
    state.tasks.push(created.clone());
    Ok(created)
}

pub fn update_task(state: &mut AppState, task: Task) -> Result<Task> {
    let updated = log_db_failure("update task", state.db.update_task(&task))?;

    if let Some(slot) = state.tasks.iter_mut().find(|t| t.id == updated.id) {
        *slot = updated.clone();
    }

    Ok(updated)
}

pub fn delete_task(state: &mut AppState, id: &str) -> Result<()> {
    log_db_failure("delete task", state.db.delete_task(id))?;
    state.tasks.retain(|t| t.id != id);
    Ok(())
}

pub fn add_absence(state: &mut AppState, absence: CreateAbsence) -> Result<Absence> {
    let created = log_db_failure("record absence", state.db.insert_absence(absence))?;
    state.absences.push(created.clone());
    Ok(created)
}

pub fn update_absence(state: &mut AppState, absence: Absence) -> Result<Absence> {
    let updated = log_db_failure("update absence", state.db.update_absence(&absence))?;

    if let Some(slot) = state.absences.iter_mut().find(|a| a.id == updated.id) {
        *slot = updated.clone();
    }

    Ok(updated)
}

pub fn delete_absence(state: &mut AppState, id: &str) -> Result<()> {
    log_db_failure("delete absence", state.db.delete_absence(id))?;
    state.absences.retain(|a| a.id != id);
    Ok(())
}

pub fn add_salary_advance(
    state: &mut AppState,
    advance: CreateSalaryAdvance,
) -> Result<SalaryAdvance> {
    let created = log_db_failure(
        "record salary advance",
        state.db.insert_salary_advance(advance),
    )?;
    state.salary_advances.push(created.clone());
    Ok(created)
}

pub fn update_salary_advance(
    state: &mut AppState,
    advance: SalaryAdvance,
) -> Result<SalaryAdvance> {
    let updated = log_db_failure(
        "update salary advance",
        state.db.update_salary_advance(&advance),
    )?;

    if let Some(slot) = state.salary_advances.iter_mut().find(|a| a.id == updated.id) {
        *slot = updated.clone();
    }

    Ok(updated)
}

pub fn delete_salary_advance(state: &mut AppState, id: &str) -> Result<()> {
    log_db_failure("delete salary advance", state.db.delete_salary_advance(id))?;
    state.salary_advances.retain(|a| a.id != id);
    Ok(())
}
