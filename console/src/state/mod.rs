//! Reactive UI state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read these signals from Leptos context; the session store
//! remains the single writer of auth state.

pub mod auth;
pub mod fetch;
