//! Console configuration resolved at build time.
//!
//! The bundle runs in the browser, so there is no process environment at
//! runtime; values are baked in from the build environment instead.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleConfig {
    /// Backend origin without a trailing slash.
    pub api_base_url: String,
    /// `localStorage` key holding the bearer token.
    pub token_key: String,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self::from_values(None)
    }
}

impl ConsoleConfig {
    /// Build config from the build environment.
    ///
    /// Optional:
    /// - `WAREHOUSE_API_URL`: backend base URL, default `http://localhost:8000`
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::from_values(option_env!("WAREHOUSE_API_URL"))
    }

    #[must_use]
    pub fn from_values(api_base_url: Option<&str>) -> Self {
        let api_base_url = api_base_url
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL)
            .trim_end_matches('/')
            .to_owned();
        Self {
            api_base_url,
            token_key: session::TOKEN_STORAGE_KEY.to_owned(),
        }
    }
}
