//! Networking for the console.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` is the REST client (and the session core's gateway), `types`
//! defines the inventory wire schema.

pub mod api;
pub mod types;
