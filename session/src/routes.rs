//! Route requirement table.
//!
//! Requirements are attached to path patterns when the application registers
//! its routes. Patterns use `/`-separated literal segments and `:name`
//! parameters. Paths with no registered pattern are public.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use crate::role::{Role, RouteRequirement};

#[derive(Clone, Debug, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Param,
}

#[derive(Clone, Debug)]
struct Entry {
    pattern: String,
    segments: Vec<Segment>,
    requirement: RouteRequirement,
}

impl Entry {
    fn matches(&self, parts: &[&str]) -> bool {
        self.segments.len() == parts.len()
            && self.segments.iter().zip(parts).all(|(segment, part)| match segment {
                Segment::Literal(lit) => lit == part,
                Segment::Param => !part.is_empty(),
            })
    }

    fn literal_count(&self) -> usize {
        self.segments
            .iter()
            .filter(|s| matches!(s, Segment::Literal(_)))
            .count()
    }
}

/// Registered route patterns and their role requirements.
#[derive(Clone, Debug, Default)]
pub struct RouteTable {
    entries: Vec<Entry>,
}

impl RouteTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Table used by the warehouse console.
    #[must_use]
    pub fn console_default() -> Self {
        Self::new()
            .register("/users/register", Role::Admin)
            .register("/users", Role::Admin)
            .register("/users/myprofile", RouteRequirement::any_of([Role::Admin, Role::User]))
            .register("/users/:id", Role::Admin)
    }

    /// Attach `requirement` to `pattern`. Re-registering a pattern replaces it.
    #[must_use]
    pub fn register(mut self, pattern: &str, requirement: impl Into<RouteRequirement>) -> Self {
        let requirement = requirement.into();
        let segments: Vec<Segment> = split_path(pattern)
            .into_iter()
            .map(|s| match s.strip_prefix(':') {
                Some(_) => Segment::Param,
                None => Segment::Literal(s.to_owned()),
            })
            .collect();
        self.entries.retain(|e| e.segments != segments);
        self.entries.push(Entry {
            pattern: pattern.to_owned(),
            segments,
            requirement,
        });
        self
    }

    /// Requirement for a concrete path. Literal segments win over parameters.
    #[must_use]
    pub fn requirement_for(&self, path: &str) -> RouteRequirement {
        self.find(path)
            .map(|e| e.requirement.clone())
            .unwrap_or_default()
    }

    /// Pattern matched by `path`, if any.
    #[must_use]
    pub fn pattern_for(&self, path: &str) -> Option<&str> {
        self.find(path).map(|e| e.pattern.as_str())
    }

    fn find(&self, path: &str) -> Option<&Entry> {
        let parts = split_path(path);
        self.entries
            .iter()
            .filter(|e| e.matches(&parts))
            .max_by_key(|e| e.literal_count())
    }
}

fn split_path(path: &str) -> Vec<&str> {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    path.split('/').filter(|s| !s.is_empty()).collect()
}
