//! Hostel operations and booking management: room and bed inventory, staff
//! HR records, the sellable catalog, booking pricing with commission
//! accounting, and utility expense tracking over an embedded SQLite store.

pub mod auth;
pub mod commands;
pub mod db;
pub mod error;
pub mod models;
pub mod pricing;
pub mod state;

#[cfg(test)]
mod tests;

use std::path::{Path, PathBuf};

pub use auth::{Session, SessionStore, View};
pub use db::Database;
pub use error::{Error, Result};
pub use state::AppState;

/// Opens the database, loads every mirror, seeds the default accounts when
/// no users exist, and restores any session saved by a previous run.
pub fn bootstrap(
    db_path: impl AsRef<Path>,
    session_path: impl Into<PathBuf>,
) -> Result<AppState> {
    let db = Database::open(db_path)?;
    db.initialize()?;

    let mut state = AppState::with_session_store(db, SessionStore::new(session_path));
    state.load_all()?;
    commands::users::ensure_default_users(&mut state)?;
    state.restore_session()?;

    Ok(state)
}
