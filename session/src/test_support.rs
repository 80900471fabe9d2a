//! Fakes shared by the crate's unit tests.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use base64ct::{Base64UrlUnpadded, Encoding};

use crate::clock::Clock;
use crate::error::ApiError;
use crate::gateway::{ApiGateway, PasswordChange, ProfileUpdate, UserProfile};
use crate::navigator::Navigator;

/// Fixed "now" used across tests: 2024-06-01T00:00:00Z.
pub const NOW_MS: i64 = 1_717_200_000_000;
pub const PAST_EXP: i64 = NOW_MS / 1000 - 60;
pub const FUTURE_EXP: i64 = NOW_MS / 1000 + 3600;

/// Build an unsigned token around an arbitrary JSON payload.
pub fn token_with_payload(payload: &serde_json::Value) -> String {
    let header = Base64UrlUnpadded::encode_string(br#"{"alg":"HS256","typ":"JWT"}"#);
    let body = Base64UrlUnpadded::encode_string(payload.to_string().as_bytes());
    format!("{header}.{body}.signature")
}

pub fn token(role: &str, exp: i64) -> String {
    token_with_payload(&serde_json::json!({ "sub": "alice", "role": role, "exp": exp }))
}

pub fn profile(role: &str) -> UserProfile {
    UserProfile {
        id: 7,
        username: "alice".to_owned(),
        first_name: "Alice".to_owned(),
        last_name: "Liddell".to_owned(),
        email: "alice@example.com".to_owned(),
        role: role.to_owned(),
        date_joined: "2024-01-15".to_owned(),
        is_active: true,
    }
}

pub fn status(code: u16) -> ApiError {
    ApiError::Status {
        status: code,
        detail: format!("status {code}"),
    }
}

#[derive(Debug)]
pub struct FixedClock(AtomicI64);

impl FixedClock {
    pub fn at(now_ms: i64) -> Self {
        Self(AtomicI64::new(now_ms))
    }

    pub fn set(&self, now_ms: i64) {
        self.0.store(now_ms, Ordering::SeqCst);
    }
}

impl Clock for FixedClock {
    fn now_millis(&self) -> i64 {
        self.0.load(Ordering::SeqCst)
    }
}

#[derive(Debug, Default)]
pub struct RecordingNavigator {
    pub visits: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn visits(&self) -> Vec<String> {
        self.visits.lock().expect("navigator lock").clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, path: &str) {
        self.visits.lock().expect("navigator lock").push(path.to_owned());
    }
}

/// Gateway replaying scripted responses and recording the tokens it saw.
#[derive(Debug, Default)]
pub struct ScriptedGateway {
    pub logins: Mutex<VecDeque<Result<String, ApiError>>>,
    pub profiles: Mutex<VecDeque<Result<UserProfile, ApiError>>>,
    pub updates: Mutex<VecDeque<Result<UserProfile, ApiError>>>,
    pub password_changes: Mutex<VecDeque<Result<(), ApiError>>>,
    pub seen_tokens: Mutex<Vec<String>>,
    pub seen_updates: Mutex<Vec<ProfileUpdate>>,
}

impl ScriptedGateway {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn push_login(&self, result: Result<String, ApiError>) {
        self.logins.lock().expect("lock").push_back(result);
    }

    pub fn push_profile(&self, result: Result<UserProfile, ApiError>) {
        self.profiles.lock().expect("lock").push_back(result);
    }

    pub fn push_update(&self, result: Result<UserProfile, ApiError>) {
        self.updates.lock().expect("lock").push_back(result);
    }

    pub fn push_password_change(&self, result: Result<(), ApiError>) {
        self.password_changes.lock().expect("lock").push_back(result);
    }

    pub fn seen_tokens(&self) -> Vec<String> {
        self.seen_tokens.lock().expect("lock").clone()
    }

    fn record(&self, token: &str) {
        self.seen_tokens.lock().expect("lock").push(token.to_owned());
    }
}

fn unscripted<T>() -> Result<T, ApiError> {
    Err(ApiError::Network("no scripted response".to_owned()))
}

#[async_trait(?Send)]
impl ApiGateway for ScriptedGateway {
    async fn login(&self, _username: &str, _password: &str) -> Result<String, ApiError> {
        self.logins.lock().expect("lock").pop_front().unwrap_or_else(unscripted)
    }

    async fn fetch_profile(&self, token: &str) -> Result<UserProfile, ApiError> {
        self.record(token);
        self.profiles.lock().expect("lock").pop_front().unwrap_or_else(unscripted)
    }

    async fn update_profile(&self, token: &str, update: &ProfileUpdate) -> Result<UserProfile, ApiError> {
        self.record(token);
        self.seen_updates.lock().expect("lock").push(update.clone());
        self.updates.lock().expect("lock").pop_front().unwrap_or_else(unscripted)
    }

    async fn change_password(&self, token: &str, _request: &PasswordChange) -> Result<(), ApiError> {
        self.record(token);
        self.password_changes
            .lock()
            .expect("lock")
            .pop_front()
            .unwrap_or_else(unscripted)
    }
}
