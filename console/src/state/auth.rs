//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! A reactive mirror of [`SessionStore`]: the store pushes every change into
//! an `RwSignal<AuthState>` so views re-render on login, logout and eviction
//! without polling.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::sync::Arc;

use leptos::prelude::*;
use session::{Role, SessionPhase, SessionState, SessionStore, UserProfile};

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub phase: SessionPhase,
    pub user: Option<UserProfile>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self::from(&SessionState::default())
    }
}

impl From<&SessionState> for AuthState {
    fn from(state: &SessionState) -> Self {
        Self {
            phase: state.phase,
            user: state.user.clone(),
            loading: state.loading,
        }
    }
}

impl AuthState {
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.phase == SessionPhase::Authenticated && self.user.is_some()
    }

    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().and_then(UserProfile::parsed_role)
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role() == Some(Role::Admin)
    }

    /// Admins and regular users may create inventory records.
    #[must_use]
    pub fn can_edit_inventory(&self) -> bool {
        self.role().is_some()
    }
}

/// Signal seeded from `store` and kept current by a store subscription.
pub fn bind(store: &Arc<SessionStore>) -> RwSignal<AuthState> {
    let auth = RwSignal::new(AuthState::from(&store.snapshot()));
    store.subscribe(move |state| {
        if auth.try_set(AuthState::from(state)).is_some() {
            log::debug!("auth: signal disposed, dropping session update");
        }
    });
    auth
}
