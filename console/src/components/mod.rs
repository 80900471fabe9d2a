//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render console chrome and shared list/detail layouts while
//! reading session state from Leptos context providers.

pub mod details_view;
pub mod form_field;
pub mod list_view;
pub mod navbar;
pub mod pagination;
