//! The single authorization decision shared by the session store and the
//! route guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Both consumers call [`inspect`] on the stored token, so a token the store
//! would evict is never one the guard lets through.

#[cfg(test)]
#[path = "authz_test.rs"]
mod authz_test;

use crate::claims::{self, Claims};
use crate::error::DecodeError;
use crate::role::RouteRequirement;

/// What the stored credential amounts to at a given instant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TokenStatus {
    /// Nothing stored.
    Missing,
    /// Stored but undecodable.
    Malformed(DecodeError),
    /// Decodable but past its expiry.
    Expired(Claims),
    /// Decodable and unexpired.
    Live(Claims),
}

impl TokenStatus {
    /// Claims of a live token.
    #[must_use]
    pub fn live_claims(&self) -> Option<&Claims> {
        match self {
            Self::Live(claims) => Some(claims),
            _ => None,
        }
    }
}

/// Classify a stored token at `now_ms`.
#[must_use]
pub fn inspect(token: Option<&str>, now_ms: i64) -> TokenStatus {
    let Some(token) = token else {
        return TokenStatus::Missing;
    };
    match claims::decode(token) {
        Ok(claims) if claims.is_expired_at(now_ms) => TokenStatus::Expired(claims),
        Ok(claims) => TokenStatus::Live(claims),
        Err(err) => TokenStatus::Malformed(err),
    }
}

/// Where a denied visitor is sent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Redirect {
    /// No usable session: sign in first.
    Login,
    /// Signed in, but the role does not satisfy the route.
    Home,
}

impl Redirect {
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::Home => "/",
        }
    }
}

/// Outcome of an access check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    Granted,
    Denied(Redirect),
}

impl Access {
    #[must_use]
    pub fn is_granted(self) -> bool {
        matches!(self, Self::Granted)
    }
}

/// Decide whether the holder of `token` may render a route with `requirement`.
///
/// Public routes are always granted. Otherwise a missing, malformed or
/// expired token sends the visitor to `/login`, and a live token whose role
/// is outside the requirement sends them home.
#[must_use]
pub fn authorize(token: Option<&str>, requirement: &RouteRequirement, now_ms: i64) -> Access {
    if requirement.is_public() {
        return Access::Granted;
    }
    match inspect(token, now_ms) {
        TokenStatus::Live(claims) if requirement.admits(claims.role) => Access::Granted,
        TokenStatus::Live(_) => Access::Denied(Redirect::Home),
        TokenStatus::Missing | TokenStatus::Malformed(_) | TokenStatus::Expired(_) => {
            Access::Denied(Redirect::Login)
        }
    }
}
