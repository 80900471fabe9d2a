//! # session
//!
//! Client-side session and authorization core for the warehouse console.
//!
//! This crate owns the bearer-token lifecycle (storage, decode, expiry),
//! the session state machine that resolves a token into a server-confirmed
//! profile, and the route guard that gates protected views by role. It has
//! no UI framework dependency; the `console` crate wires it into Leptos.
//!
//! ARCHITECTURE
//! ============
//! Leaf-first: `token_store` and `claims` know nothing about sessions,
//! `authz` combines them into the single access decision, and `store` /
//! `guard` both consume `authz` so they can never disagree about a token.
//! Every side effect (storage, HTTP, time, navigation) is an injected trait
//! object.

pub mod authz;
pub mod claims;
pub mod clock;
pub mod error;
pub mod gateway;
pub mod guard;
pub mod navigator;
pub mod role;
pub mod routes;
pub mod store;
pub mod task;
pub mod token_store;

#[cfg(test)]
pub(crate) mod test_support;

pub use authz::{Access, Redirect, TokenStatus, authorize, inspect};
pub use claims::{Claims, decode, is_expired};
pub use clock::{Clock, SystemClock};
pub use error::{ApiError, DecodeError, SessionError};
pub use gateway::{ApiGateway, PasswordChange, ProfileUpdate, UserProfile};
pub use guard::{Guarded, RouteGuard};
pub use navigator::{Navigator, NoopNavigator};
pub use role::{Role, RouteRequirement};
pub use routes::RouteTable;
pub use store::{SessionPhase, SessionState, SessionStore};
pub use task::{TaskGuard, cancellable};
pub use token_store::{MemoryTokenStore, TOKEN_STORAGE_KEY, TokenStore};

#[cfg(feature = "browser")]
pub use navigator::LocationNavigator;
#[cfg(feature = "browser")]
pub use token_store::LocalStorageTokenStore;
