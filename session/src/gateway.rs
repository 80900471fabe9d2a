//! Contract between the session core and the backend HTTP client.
//!
//! The concrete client lives in the `console` crate; the core only needs the
//! login and current-user endpoints. Futures are `?Send` because browser
//! HTTP futures are tied to the JS event loop.

#[cfg(test)]
#[path = "gateway_test.rs"]
mod gateway_test;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::role::Role;

/// Server-confirmed profile of the current user (`GET /users/details`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: i64,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: String,
    /// ISO date (`YYYY-MM-DD`) or datetime.
    pub date_joined: String,
    pub is_active: bool,
}

impl UserProfile {
    #[must_use]
    pub fn parsed_role(&self) -> Option<Role> {
        Role::parse(&self.role)
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.parsed_role() == Some(Role::Admin)
    }

    #[must_use]
    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.first_name.trim(), self.last_name.trim());
        let full = full.trim();
        if full.is_empty() {
            self.username.clone()
        } else {
            full.to_owned()
        }
    }

    /// Date portion of `date_joined`.
    #[must_use]
    pub fn joined_date(&self) -> &str {
        self.date_joined
            .split(['T', ' '])
            .next()
            .unwrap_or(self.date_joined.as_str())
    }
}

/// Partial profile edit (`PATCH /users/update/me`). Unset fields are omitted.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl ProfileUpdate {
    /// Edit containing only the fields that differ from `current`.
    #[must_use]
    pub fn diff(current: &UserProfile, username: &str, first_name: &str, last_name: &str, email: &str) -> Self {
        fn changed(old: &str, new: &str) -> Option<String> {
            let new = new.trim();
            (!new.is_empty() && new != old).then(|| new.to_owned())
        }
        Self {
            username: changed(&current.username, username),
            first_name: changed(&current.first_name, first_name),
            last_name: changed(&current.last_name, last_name),
            email: changed(&current.email, email),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.username.is_none() && self.first_name.is_none() && self.last_name.is_none() && self.email.is_none()
    }
}

/// Password change request (`PATCH /users/change-password`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PasswordChange {
    pub current_password: String,
    pub new_password: String,
}

/// Backend operations the session core depends on.
#[async_trait(?Send)]
pub trait ApiGateway: Send + Sync {
    /// `POST /login/` with form-encoded credentials; returns the access token.
    async fn login(&self, username: &str, password: &str) -> Result<String, ApiError>;

    /// `GET /users/details` with `Authorization: Bearer <token>`.
    async fn fetch_profile(&self, token: &str) -> Result<UserProfile, ApiError>;

    /// `PATCH /users/update/me`.
    async fn update_profile(&self, token: &str, update: &ProfileUpdate) -> Result<UserProfile, ApiError>;

    /// `PATCH /users/change-password`.
    async fn change_password(&self, token: &str, request: &PasswordChange) -> Result<(), ApiError>;
}
