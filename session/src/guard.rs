//! Route guard for protected views.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use std::sync::Arc;

use crate::authz::{self, Access, Redirect};
use crate::clock::Clock;
use crate::role::RouteRequirement;
use crate::routes::RouteTable;
use crate::token_store::TokenStore;

/// Result of guarding a render: the view, or where to go instead.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Guarded<V> {
    Render(V),
    Redirect(Redirect),
}

/// Evaluates route requirements against the stored token.
///
/// Reads the token on every check, so a login or eviction elsewhere is
/// picked up on the next navigation.
#[derive(Clone)]
pub struct RouteGuard {
    tokens: Arc<dyn TokenStore>,
    clock: Arc<dyn Clock>,
}

impl RouteGuard {
    pub fn new(tokens: Arc<dyn TokenStore>, clock: Arc<dyn Clock>) -> Self {
        Self { tokens, clock }
    }

    #[must_use]
    pub fn check(&self, requirement: &RouteRequirement) -> Access {
        let token = self.tokens.read();
        let access = authz::authorize(token.as_deref(), requirement, self.clock.now_millis());
        if let Access::Denied(redirect) = access {
            log::debug!("guard: denied, redirecting to {}", redirect.path());
        }
        access
    }

    /// Check the requirement registered for `path` in `table`.
    #[must_use]
    pub fn check_path(&self, table: &RouteTable, path: &str) -> Access {
        self.check(&table.requirement_for(path))
    }

    /// Call `render` only when access is granted.
    pub fn guard<V>(&self, requirement: &RouteRequirement, render: impl FnOnce() -> V) -> Guarded<V> {
        match self.check(requirement) {
            Access::Granted => Guarded::Render(render()),
            Access::Denied(redirect) => Guarded::Redirect(redirect),
        }
    }
}

impl std::fmt::Debug for RouteGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RouteGuard").finish_non_exhaustive()
    }
}
