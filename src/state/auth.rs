//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The header, the greetings list, and the write-greeting dialog all react to
//! session changes. `dispatch_auth_event` is the single broadcast point: it
//! replaces the user and bumps `revision`, and every subscriber is an effect
//! that tracks the shared `RwSignal<AuthState>`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::net::types::AuthUser;

/// Which header block is visible.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeaderMode {
    /// Session lookup still in flight; neither block is shown.
    Pending,
    /// `#headerLogin` with the login/register buttons.
    Login,
    /// `#headerAuthenticated` with name, company, and logout.
    Authenticated,
}

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub user: Option<AuthUser>,
    pub loading: bool,
    /// Number of auth events applied so far; `0` until the first one.
    pub revision: u64,
}

impl AuthState {
    /// State at page load, before `GET /auth` has answered.
    pub fn pending() -> Self {
        Self { user: None, loading: true, revision: 0 }
    }

    /// Apply an auth event: replace the user and mark the session as known.
    pub fn apply(&mut self, user: Option<AuthUser>) {
        self.user = user;
        self.loading = false;
        self.revision = self.revision.wrapping_add(1);
    }

    pub fn header_mode(&self) -> HeaderMode {
        match (&self.user, self.loading) {
            (Some(_), _) => HeaderMode::Authenticated,
            (None, true) => HeaderMode::Pending,
            (None, false) => HeaderMode::Login,
        }
    }

    /// Only signed-in users may write greetings.
    pub fn can_write(&self) -> bool {
        self.user.is_some()
    }
}

/// Broadcast a session change to every subscriber of `auth`.
pub fn dispatch_auth_event(auth: RwSignal<AuthState>, user: Option<AuthUser>) {
    auth.update(|state| state.apply(user));
}
