//! Session state for the signed-in admin.
//!
//! SYSTEM CONTEXT
//! ==============
//! Consumed by route guards and every page that shows who is signed in. The
//! snapshot is replaced wholesale on each transition; only
//! `state::session_context` performs transitions.
//!
//! DESIGN
//! ======
//! Blocking fetches fail closed (any failure drops the session), silent
//! refreshes fail open (a failure keeps the last good profile). The two
//! `apply_*` methods below are the only place that asymmetry lives.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::net::types::ProfileUser;

/// Message recorded when a blocking profile fetch fails.
pub const FETCH_USER_FAILED: &str = "Failed to fetch user details";

/// Role assigned to every dashboard user.
pub const ADMIN_ROLE: &str = "admin";

/// Cached identity of the signed-in user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionProfile {
    pub id: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub bio: String,
    pub profile_photo: Option<String>,
    pub role: String,
    /// RFC 3339 timestamp.
    pub created_at: String,
    /// RFC 3339 timestamp.
    pub updated_at: String,
}

impl SessionProfile {
    /// Map the server's user object, filling the fields it may omit.
    pub fn from_wire(user: ProfileUser, now: DateTime<Utc>) -> Self {
        let now = now.to_rfc3339_opts(SecondsFormat::Millis, true);
        Self {
            id: user.id,
            username: user.username,
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
            bio: user.bio.unwrap_or_default(),
            profile_photo: user.profile_photo.filter(|url| !url.is_empty()),
            role: ADMIN_ROLE.to_owned(),
            created_at: user.created_at.unwrap_or_else(|| now.clone()),
            updated_at: user.updated_at.unwrap_or(now),
        }
    }

    /// Full name, or the username when both name parts are blank.
    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.first_name.trim(), self.last_name.trim());
        let full = full.trim();
        if full.is_empty() { self.username.clone() } else { full.to_owned() }
    }

    /// Up to two uppercase initials for avatar fallbacks.
    pub fn initials(&self) -> String {
        let display = self.display_name();
        display
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}

/// Tri-state session value exposed to the rest of the app.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SessionState {
    /// A profile fetch is in flight; the outcome is unknown.
    #[default]
    Loading,
    Authenticated(SessionProfile),
    Unauthenticated,
}

impl SessionState {
    pub fn profile(&self) -> Option<&SessionProfile> {
        match self {
            Self::Authenticated(profile) => Some(profile),
            Self::Loading | Self::Unauthenticated => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// Everything consumers observe about the session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub state: SessionState,
    /// Last blocking-fetch failure, for pages that want to show it.
    pub error: Option<String>,
}

impl SessionSnapshot {
    pub fn is_authenticated(&self) -> bool {
        self.state.is_authenticated()
    }

    pub fn loading(&self) -> bool {
        self.state.is_loading()
    }

    pub fn user(&self) -> Option<&SessionProfile> {
        self.state.profile()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub(crate) fn begin_blocking_fetch(&mut self) {
        self.state = SessionState::Loading;
        self.error = None;
    }

    pub(crate) fn apply_blocking_result(&mut self, profile: Option<SessionProfile>) {
        match profile {
            Some(profile) => self.state = SessionState::Authenticated(profile),
            None => {
                self.state = SessionState::Unauthenticated;
                self.error = Some(FETCH_USER_FAILED.to_owned());
            }
        }
    }

    /// Silent refreshes only ever land successes; the error is left alone.
    pub(crate) fn apply_silent_result(&mut self, profile: SessionProfile) {
        self.state = SessionState::Authenticated(profile);
    }

    pub(crate) fn mark_unauthenticated(&mut self) {
        self.state = SessionState::Unauthenticated;
    }

    pub(crate) fn clear(&mut self) {
        self.state = SessionState::Unauthenticated;
        self.error = None;
    }
}
