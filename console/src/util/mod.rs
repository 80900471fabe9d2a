//! Utility helpers shared across console UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser and session concerns from page and
//! component logic to improve reuse and testability.

pub mod auth;
pub mod form;
pub mod list_view;
pub mod task;
