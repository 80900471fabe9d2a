//! Load state for a backend fetch owned by one view.

#[cfg(test)]
#[path = "fetch_test.rs"]
mod fetch_test;

use session::ApiError;

use crate::util::auth::api_error_message;

#[derive(Clone, Debug, PartialEq)]
pub enum Fetch<T> {
    Loading,
    Ready(T),
    /// Message suitable for inline display.
    Failed(String),
}

impl<T> Default for Fetch<T> {
    fn default() -> Self {
        Self::Loading
    }
}

impl<T> Fetch<T> {
    pub fn from_result(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(value) => Self::Ready(value),
            Err(err) => Self::Failed(api_error_message(&err)),
        }
    }

    #[must_use]
    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            Self::Loading | Self::Failed(_) => None,
        }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            Self::Loading | Self::Ready(_) => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Fetch<U> {
        match self {
            Self::Loading => Fetch::Loading,
            Self::Ready(value) => Fetch::Ready(f(value)),
            Self::Failed(message) => Fetch::Failed(message),
        }
    }
}
