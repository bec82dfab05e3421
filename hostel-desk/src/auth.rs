//! Login sessions and per-role view access.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::error::Result;
use crate::models::Role;

/// Top-level screens of the desk application, in display order.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum View {
    Rooms,
    Booking,
    Staff,
    Users,
    Utilities,
    Activities,
}

pub const ALL_VIEWS: [View; 6] = [
    View::Rooms,
    View::Booking,
    View::Staff,
    View::Users,
    View::Utilities,
    View::Activities,
];

impl View {
    pub fn label(&self) -> &'static str {
        match self {
            View::Rooms => "Rooms & Beds",
            View::Booking => "Booking",
            View::Staff => "Staff & HR",
            View::Users => "User Management",
            View::Utilities => "Utilities",
            View::Activities => "Activities",
        }
    }
}

impl Role {
    /// Views this role may open, in display order.
    pub fn allowed_views(&self) -> Vec<View> {
        match self {
            Role::Admin => ALL_VIEWS.to_vec(),
            // Staff never see HR records or account management.
            Role::Staff => ALL_VIEWS
                .iter()
                .copied()
                .filter(|view| !matches!(view, View::Staff | View::Users))
                .collect(),
        }
    }

    pub fn can_view(&self, view: View) -> bool {
        self.allowed_views().contains(&view)
    }

    /// The screen shown right after login.
    pub fn default_view(&self) -> View {
        self.allowed_views().first().copied().unwrap_or(View::Rooms)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub user_id: String,
    pub username: String,
    pub role: Role,
}

/// Persists the active session across restarts as a small JSON file.
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        SessionStore { path: path.into() }
    }

    pub fn load(&self) -> Result<Option<Session>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let raw = std::fs::read_to_string(&self.path)?;

        match serde_json::from_str(&raw) {
            Ok(session) => Ok(Some(session)),
            Err(e) => {
                // An unreadable file means a fresh login, not a hard failure.
                tracing::warn!("discarding unreadable session file: {e}");
                Ok(None)
            }
        }
    }

    pub fn save(&self, session: &Session) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        std::fs::write(&self.path, serde_json::to_string_pretty(session)?)?;
        Ok(())
    }

    pub fn clear(&self) -> Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
