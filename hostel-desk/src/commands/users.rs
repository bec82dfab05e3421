//! Login accounts and session handling.

use crate::auth::Session;
use crate::commands::log_db_failure;
use crate::error::{Error, Result};
use crate::models::{CreateUser, Role, User};
use crate::state::AppState;

pub fn add_user(state: &mut AppState, user: CreateUser) -> Result<User> {
    check_credentials(&user.username, &user.password)?;

    if state.users.iter().any(|u| u.username == user.username) {
        return Err(Error::invalid(format!(
            "Username {:?} is already taken",
            user.username
        )));
    }

    let created = log_db_failure("add user", state.db.insert_user(user))?;
    state.users.push(created.clone());
    Ok(created)
}

pub fn update_user(state: &mut AppState, user: User) -> Result<User> {
    check_credentials(&user.username, &user.password)?;

    if state
        .users
        .iter()
        .any(|u| u.username == user.username && u.id != user.id)
    {
        return Err(Error::invalid(format!(
            "Username {:?} is already taken",
            user.username
        )));
    }

    let updated = log_db_failure("update user", state.db.update_user(&user))?;

    if let Some(slot) = state.users.iter_mut().find(|u| u.id == updated.id) {
        *slot = updated.clone();
    }

    Ok(updated)
}

pub fn delete_user(state: &mut AppState, id: &str) -> Result<()> {
    if let Some(session) = &state.session {
        if session.user_id == id {
            return Err(Error::invalid("You cannot delete your own account!"));
        }
    }

    if let Some(target) = state.users.iter().find(|u| u.id == id) {
        if target.role == Role::Admin {
            let active_admins = state
                .users
                .iter()
                .filter(|u| u.role == Role::Admin && u.is_active)
                .count();

            if active_admins <= 1 {
                return Err(Error::invalid("Cannot delete the last active admin user!"));
            }
        }
    }

    log_db_failure("delete user", state.db.delete_user(id))?;
    state.users.retain(|u| u.id != id);
    Ok(())
}

/// Seeds the default admin and staff accounts when no users exist yet.
pub fn ensure_default_users(state: &mut AppState) -> Result<()> {
    if !state.users.is_empty() {
        return Ok(());
    }

    let defaults = [
        ("admin", "admin123", Role::Admin),
        ("staff", "staff123", Role::Staff),
    ];

    for (username, password, role) in defaults {
        let created = log_db_failure(
            "seed default user",
            state.db.insert_user(CreateUser {
                username: username.to_string(),
                password: password.to_string(),
                role,
                staff_id: None,
                is_active: true,
            }),
        )?;
        state.users.push(created);
    }

    Ok(())
}

/// Validates a credential pair against the active users. Inactive accounts
/// get the same generic rejection as wrong passwords.
pub fn login(state: &mut AppState, username: &str, password: &str) -> Result<Session> {
    let user = state
        .users
        .iter()
        .find(|u| u.username == username && u.password == password && u.is_active)
        .cloned();

    let user = match user {
        Some(user) => user,
        None => return Err(Error::invalid("Invalid username or password")),
    };

    let session = Session {
        user_id: user.id,
        username: user.username,
        role: user.role,
    };

    if let Some(store) = &state.session_store {
        store.save(&session)?;
    }

    state.session = Some(session.clone());
    Ok(session)
}

pub fn logout(state: &mut AppState) -> Result<()> {
    if let Some(store) = &state.session_store {
        store.clear()?;
    }

    state.session = None;
    Ok(())
}

fn check_credentials(username: &str, password: &str) -> Result<()> {
    if username.trim().len() < 3 {
        return Err(Error::invalid("Username must be at least 3 characters"));
    }
    if password.len() < 6 {
        return Err(Error::invalid("Password must be at least 6 characters"));
    }
    Ok(())
}
