//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected route renders through [`Protected`], so role gating and
//! the expired-session redirect behave identically across pages.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::sync::Arc;

use leptos::prelude::*;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_location;
use session::{Access, ApiError, RouteTable, SessionError, SessionStore};

use crate::state::auth::AuthState;

/// Path to redirect to, or `None` when the view may render.
pub fn redirect_target(access: Access) -> Option<&'static str> {
    match access {
        Access::Granted => None,
        Access::Denied(redirect) => Some(redirect.path()),
    }
}

/// Inline message for a failed backend call.
pub fn api_error_message(err: &ApiError) -> String {
    match err {
        ApiError::Status { status: 403, .. } => "You are not allowed to do that.".to_owned(),
        ApiError::Status { detail, .. } => detail.clone(),
        ApiError::Network(_) | ApiError::Body(_) => "The server could not be reached.".to_owned(),
    }
}

/// Inline message for a failed session operation.
pub fn session_error_message(err: &SessionError) -> String {
    match err {
        SessionError::InvalidCredentials => "Invalid credentials".to_owned(),
        SessionError::Validation(detail) => detail.clone(),
        SessionError::Unauthorized | SessionError::Decode(_) => "Your session has expired. Please log in again.".to_owned(),
        SessionError::Transient(_) => "The server could not be reached.".to_owned(),
    }
}

/// Re-check the session after a backend call failed with 401.
///
/// The store evicts the token and navigates to `/login` when the backend
/// confirms the credential is gone.
pub async fn recheck_on_unauthorized(store: &SessionStore, err: &ApiError) {
    if err.status() == Some(401) {
        log::warn!("auth: backend returned 401, re-checking session");
        store.refresh_user().await;
    }
}

/// Render `children` only when the stored token satisfies the requirement
/// registered for the current path; otherwise redirect.
///
/// Re-evaluated on navigation and on every session change.
#[component]
pub fn Protected(children: ChildrenFn) -> impl IntoView {
    let store = expect_context::<Arc<SessionStore>>();
    let table = expect_context::<RouteTable>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let pathname = use_location().pathname;

    move || {
        auth.track();
        let path = pathname.get();
        let access = store.guard().check_path(&table, &path);
        match redirect_target(access) {
            None => children().into_any(),
            Some(target) => view! { <Redirect path=target/> }.into_any(),
        }
    }
}
