//! Session store: the resolved identity of the current tab.
//!
//! SYSTEM CONTEXT
//! ==============
//! Constructed once at application start with its collaborators injected
//! (token store, gateway, clock, navigator) and shared through the UI
//! context. Views read [`SessionState`] snapshots or subscribe to changes;
//! they never touch the token store directly.
//!
//! LIFECYCLE
//! =========
//! `Uninitialized -> Loading -> {Authenticated, Anonymous}`. Every failure
//! lands in `Anonymous`; evictions (expired, malformed, 401, role mismatch)
//! also clear the token and force navigation to `/login`.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::authz::{self, Access, Redirect, TokenStatus};
use crate::claims::Claims;
use crate::clock::{Clock, SystemClock};
use crate::error::{ApiError, SessionError};
use crate::gateway::{ApiGateway, PasswordChange, ProfileUpdate, UserProfile};
use crate::guard::RouteGuard;
use crate::navigator::{Navigator, NoopNavigator};
use crate::role::{Role, RouteRequirement};
use crate::token_store::TokenStore;

/// Coarse session lifecycle position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionPhase {
    #[default]
    Uninitialized,
    Loading,
    Authenticated,
    Anonymous,
}

/// Snapshot handed to views and subscribers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionState {
    pub phase: SessionPhase,
    pub user: Option<UserProfile>,
    /// True until the mount-time fetch has resolved.
    pub loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            phase: SessionPhase::Uninitialized,
            user: None,
            loading: true,
        }
    }
}

impl SessionState {
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.phase == SessionPhase::Authenticated && self.user.is_some()
    }

    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().and_then(UserProfile::parsed_role)
    }
}

type Listener = Box<dyn Fn(&SessionState) + Send + Sync>;

/// Shared session state plus the operations that move it.
pub struct SessionStore {
    tokens: Arc<dyn TokenStore>,
    gateway: Arc<dyn ApiGateway>,
    clock: Arc<dyn Clock>,
    navigator: Arc<dyn Navigator>,
    state: Mutex<SessionState>,
    listeners: Mutex<Vec<Listener>>,
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("state", &*lock(&self.state))
            .finish_non_exhaustive()
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl SessionStore {
    /// Store using the system clock and a navigator that goes nowhere.
    pub fn new(tokens: Arc<dyn TokenStore>, gateway: Arc<dyn ApiGateway>) -> Self {
        Self {
            tokens,
            gateway,
            clock: Arc::new(SystemClock),
            navigator: Arc::new(NoopNavigator),
            state: Mutex::new(SessionState::default()),
            listeners: Mutex::new(Vec::new()),
        }
    }

    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    #[must_use]
    pub fn with_navigator(mut self, navigator: Arc<dyn Navigator>) -> Self {
        self.navigator = navigator;
        self
    }

    // =========================================================
    // Accessors
    // =========================================================

    #[must_use]
    pub fn snapshot(&self) -> SessionState {
        lock(&self.state).clone()
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        lock(&self.state).phase
    }

    #[must_use]
    pub fn user(&self) -> Option<UserProfile> {
        lock(&self.state).user.clone()
    }

    #[must_use]
    pub fn role(&self) -> Option<Role> {
        lock(&self.state).role()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        lock(&self.state).loading
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        lock(&self.state).is_authenticated()
    }

    /// Current bearer token, if one is stored. Validity is not checked.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.tokens.read()
    }

    /// Guard sharing this store's token slot and clock.
    #[must_use]
    pub fn guard(&self) -> RouteGuard {
        RouteGuard::new(self.tokens.clone(), self.clock.clone())
    }

    /// Access decision for `requirement` against the stored token.
    #[must_use]
    pub fn authorize(&self, requirement: &RouteRequirement) -> Access {
        self.guard().check(requirement)
    }

    /// Register a listener called after every state change.
    ///
    /// Listeners run synchronously and must not call `subscribe`.
    pub fn subscribe(&self, listener: impl Fn(&SessionState) + Send + Sync + 'static) {
        lock(&self.listeners).push(Box::new(listener));
    }

    // =========================================================
    // Transitions
    // =========================================================

    /// Resolve the stored token into a session. Called once on mount.
    pub async fn init(&self) -> SessionPhase {
        self.update(|s| {
            s.phase = SessionPhase::Loading;
            s.loading = true;
        });
        self.sync_profile().await;
        self.update(|s| {
            if s.phase == SessionPhase::Loading {
                s.phase = SessionPhase::Anonymous;
            }
            s.loading = false;
        });
        self.phase()
    }

    /// Re-fetch the profile after an edit. Leaves `loading` untouched.
    ///
    /// Overlapping refreshes are not fenced; the last response to resolve wins.
    pub async fn refresh_user(&self) -> SessionPhase {
        self.sync_profile().await;
        self.phase()
    }

    /// Drop the session. Safe to call repeatedly.
    pub fn logout(&self) {
        self.tokens.clear();
        self.update(|s| {
            s.user = None;
            s.phase = SessionPhase::Anonymous;
        });
    }

    /// Exchange credentials for a token and resolve the session.
    ///
    /// # Errors
    ///
    /// [`SessionError::InvalidCredentials`] when the backend rejects the login,
    /// [`SessionError::Transient`] when it cannot be reached, and the mapped
    /// gateway error when the follow-up profile fetch fails (the new token is
    /// discarded in that case).
    pub async fn login(&self, username: &str, password: &str) -> Result<UserProfile, SessionError> {
        let token = self.gateway.login(username, password).await.map_err(|err| match err {
            ApiError::Status { status, .. } => {
                log::warn!("session: login rejected with status {status}");
                SessionError::InvalidCredentials
            }
            other => {
                log::error!("session: login failed: {other}");
                SessionError::Transient(other.to_string())
            }
        })?;

        let claims = match authz::inspect(Some(&token), self.clock.now_millis()) {
            TokenStatus::Live(claims) => claims,
            TokenStatus::Malformed(err) => return Err(err.into()),
            TokenStatus::Expired(_) | TokenStatus::Missing => return Err(SessionError::Unauthorized),
        };

        self.tokens.save(&token);
        match self.gateway.fetch_profile(&token).await {
            Ok(profile) if profile.parsed_role() == claims.role => {
                self.update(|s| {
                    s.user = Some(profile.clone());
                    s.phase = SessionPhase::Authenticated;
                    s.loading = false;
                });
                Ok(profile)
            }
            Ok(profile) => {
                log::warn!(
                    "session: profile role {:?} disagrees with token role {:?}",
                    profile.role,
                    claims.role
                );
                self.discard();
                Err(SessionError::Unauthorized)
            }
            Err(err) => {
                log::error!("session: fetching user details after login failed: {err}");
                self.discard();
                Err(err.into())
            }
        }
    }

    /// Submit a partial profile edit, then resynchronize.
    ///
    /// # Errors
    ///
    /// [`SessionError::Unauthorized`] when there is no usable token (the
    /// session is evicted), [`SessionError::Validation`] when the backend
    /// rejects the edit, [`SessionError::Transient`] otherwise.
    pub async fn update_me(&self, update: &ProfileUpdate) -> Result<UserProfile, SessionError> {
        let token = self.live_token()?;
        let updated = self
            .gateway
            .update_profile(&token, update)
            .await
            .map_err(|err| self.map_edit_error(err))?;
        self.refresh_user().await;
        Ok(updated)
    }

    /// Change the current user's password, then resynchronize.
    ///
    /// # Errors
    ///
    /// Same taxonomy as [`SessionStore::update_me`]; an incorrect current
    /// password surfaces as [`SessionError::Validation`].
    pub async fn change_password(&self, request: &PasswordChange) -> Result<(), SessionError> {
        let token = self.live_token()?;
        self.gateway
            .change_password(&token, request)
            .await
            .map_err(|err| self.map_edit_error(err))?;
        self.refresh_user().await;
        Ok(())
    }

    // =========================================================
    // Internals
    // =========================================================

    async fn sync_profile(&self) {
        let Some(token) = self.tokens.read() else {
            self.become_anonymous();
            return;
        };
        let claims = match authz::inspect(Some(&token), self.clock.now_millis()) {
            TokenStatus::Live(claims) => claims,
            TokenStatus::Expired(_) => {
                log::warn!("session: token is expired");
                self.evict();
                return;
            }
            TokenStatus::Malformed(err) => {
                log::warn!("session: stored token is malformed: {err}");
                self.evict();
                return;
            }
            TokenStatus::Missing => {
                self.become_anonymous();
                return;
            }
        };

        let result = self.gateway.fetch_profile(&token).await;
        if self.tokens.read().as_deref() != Some(token.as_str()) {
            log::debug!("session: token changed while fetching user details, dropping response");
            return;
        }
        match result {
            Ok(profile) => self.accept_profile(&claims, profile),
            Err(err) => match SessionError::from(err) {
                SessionError::Unauthorized => {
                    log::warn!("session: backend rejected token");
                    self.evict();
                }
                other => {
                    log::error!("session: fetching user details failed: {other}");
                    self.update(|s| {
                        if s.user.is_none() {
                            s.phase = SessionPhase::Anonymous;
                        }
                    });
                }
            },
        }
    }

    fn accept_profile(&self, claims: &Claims, profile: UserProfile) {
        if profile.parsed_role() != claims.role {
            log::warn!(
                "session: profile role {:?} disagrees with token role {:?}",
                profile.role,
                claims.role
            );
            self.evict();
            return;
        }
        self.update(|s| {
            s.user = Some(profile);
            s.phase = SessionPhase::Authenticated;
        });
    }

    fn live_token(&self) -> Result<String, SessionError> {
        let Some(token) = self.tokens.read() else {
            self.become_anonymous();
            return Err(SessionError::Unauthorized);
        };
        match authz::inspect(Some(&token), self.clock.now_millis()) {
            TokenStatus::Live(_) => Ok(token),
            TokenStatus::Malformed(err) => {
                self.evict();
                Err(err.into())
            }
            TokenStatus::Expired(_) | TokenStatus::Missing => {
                self.evict();
                Err(SessionError::Unauthorized)
            }
        }
    }

    fn map_edit_error(&self, err: ApiError) -> SessionError {
        let err = SessionError::from(err);
        match &err {
            SessionError::Unauthorized => self.evict(),
            SessionError::Validation(detail) => log::debug!("session: edit rejected: {detail}"),
            other => log::error!("session: edit failed: {other}"),
        }
        err
    }

    fn become_anonymous(&self) {
        self.update(|s| {
            s.user = None;
            s.phase = SessionPhase::Anonymous;
        });
    }

    /// Clear the token and session without navigating.
    fn discard(&self) {
        self.tokens.clear();
        self.become_anonymous();
    }

    /// Clear the token and session, then force the visitor to sign in again.
    fn evict(&self) {
        self.discard();
        self.navigator.navigate(Redirect::Login.path());
    }

    fn update(&self, mutate: impl FnOnce(&mut SessionState)) {
        let snapshot = {
            let mut state = lock(&self.state);
            let before = state.clone();
            mutate(&mut state);
            if *state == before {
                return;
            }
            state.clone()
        };
        log::debug!(
            "session: phase={:?} loading={} user={:?}",
            snapshot.phase,
            snapshot.loading,
            snapshot.user.as_ref().map(|u| u.username.as_str())
        );
        for listener in lock(&self.listeners).iter() {
            listener(&snapshot);
        }
    }
}
