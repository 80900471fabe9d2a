//! Role tags and per-route role requirements.
//!
//! DESIGN
//! ======
//! A requirement is always a set. A route that names a single role holds a
//! singleton set; a route with an empty set is public.

#[cfg(test)]
#[path = "role_test.rs"]
mod role_test;

use std::collections::BTreeSet;
use std::fmt;

/// Role carried in the token and mirrored in the profile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Role {
    Admin,
    User,
}

impl Role {
    /// Parse a wire tag. Unknown tags are `None` (anonymous).
    #[must_use]
    pub fn parse(tag: &str) -> Option<Self> {
        match tag.trim() {
            "admin" => Some(Self::Admin),
            "user" => Some(Self::User),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::User => "user",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Set of roles allowed to render a route.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RouteRequirement {
    roles: BTreeSet<Role>,
}

impl RouteRequirement {
    /// Requirement satisfied by everyone, including anonymous visitors.
    #[must_use]
    pub fn public() -> Self {
        Self::default()
    }

    /// Requirement satisfied only by `role`.
    #[must_use]
    pub fn only(role: Role) -> Self {
        Self::from(role)
    }

    /// Requirement satisfied by any of `roles`.
    pub fn any_of(roles: impl IntoIterator<Item = Role>) -> Self {
        roles.into_iter().collect()
    }

    #[must_use]
    pub fn is_public(&self) -> bool {
        self.roles.is_empty()
    }

    /// Whether a visitor holding `role` satisfies this requirement.
    #[must_use]
    pub fn admits(&self, role: Option<Role>) -> bool {
        if self.is_public() {
            return true;
        }
        role.is_some_and(|r| self.roles.contains(&r))
    }

    pub fn roles(&self) -> impl Iterator<Item = Role> + '_ {
        self.roles.iter().copied()
    }
}

impl From<Role> for RouteRequirement {
    fn from(role: Role) -> Self {
        Self {
            roles: BTreeSet::from([role]),
        }
    }
}

impl FromIterator<Role> for RouteRequirement {
    fn from_iter<I: IntoIterator<Item = Role>>(iter: I) -> Self {
        Self {
            roles: iter.into_iter().collect(),
        }
    }
}
