//! REST client for the warehouse backend.
//!
//! Browser (csr): real HTTP calls via `gloo-net`.
//! Native builds (tests, tooling): every call fails with a network error,
//! since the backend is only reachable from the bundle.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx responses become [`ApiError::Status`] carrying the backend's
//! `detail` text, so pages can show it inline. Auth decisions (401 handling,
//! eviction) belong to the session store, not to this client.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use session::{ApiError, ApiGateway, PasswordChange, ProfileUpdate, TokenStore, UserProfile};

use super::types::{
    Ack, Category, Item, NewCategory, NewItem, NewStockMovement, NewUser, NewWarehouse, Stock,
    StockMovement, Warehouse,
};

const FALLBACK_DETAIL: &str = "request failed";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Verb {
    Get,
    Post,
    Patch,
    Delete,
}

impl Verb {
    fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), path.trim_start_matches('/'))
}

#[cfg(any(test, feature = "csr"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// `application/x-www-form-urlencoded` body for `POST /login/`.
#[cfg(any(test, feature = "csr"))]
fn login_form_body(username: &str, password: &str) -> String {
    url::form_urlencoded::Serializer::new(String::new())
        .append_pair("username", username)
        .append_pair("password", password)
        .finish()
}

/// Human-readable text from a backend error body.
///
/// Accepts `{"detail": "..."}` and validation lists
/// `{"detail": [{"msg": "..."}, ...]}`; anything else falls back to the raw
/// body, or a generic message when the body is empty.
pub fn error_detail(body: &str) -> String {
    let parsed: Option<serde_json::Value> = serde_json::from_str(body).ok();
    let detail = parsed.as_ref().and_then(|v| v.get("detail"));
    match detail {
        Some(serde_json::Value::String(text)) => text.clone(),
        Some(serde_json::Value::Array(entries)) => {
            let messages: Vec<&str> = entries
                .iter()
                .filter_map(|e| e.get("msg").and_then(serde_json::Value::as_str))
                .collect();
            if messages.is_empty() {
                FALLBACK_DETAIL.to_owned()
            } else {
                messages.join("; ")
            }
        }
        _ if body.trim().is_empty() => FALLBACK_DETAIL.to_owned(),
        _ if parsed.is_some() => FALLBACK_DETAIL.to_owned(),
        _ => body.trim().to_owned(),
    }
}

#[cfg(any(test, feature = "csr"))]
fn status_error(status: u16, body: &str) -> ApiError {
    ApiError::Status {
        status,
        detail: error_detail(body),
    }
}

#[cfg(any(test, feature = "csr"))]
fn parse_body<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ApiError> {
    if !(200..300).contains(&status) {
        return Err(status_error(status, body));
    }
    serde_json::from_str(body).map_err(|e| ApiError::Body(e.to_string()))
}

/// HTTP client bound to one backend origin and the console's token slot.
#[derive(Clone)]
pub struct HttpGateway {
    base_url: String,
    tokens: Arc<dyn TokenStore>,
}

impl std::fmt::Debug for HttpGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpGateway")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl HttpGateway {
    pub fn new(base_url: impl Into<String>, tokens: Arc<dyn TokenStore>) -> Self {
        Self {
            base_url: base_url.into(),
            tokens,
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        endpoint(&self.base_url, path)
    }

    async fn request<T: DeserializeOwned>(
        &self,
        verb: Verb,
        path: &str,
        token: Option<&str>,
        body: Option<serde_json::Value>,
    ) -> Result<T, ApiError> {
        let url = self.url(path);
        #[cfg(feature = "csr")]
        {
            use gloo_net::http::Request;

            log::debug!("api: {} {path}", verb.as_str());
            let mut builder = match verb {
                Verb::Get => Request::get(&url),
                Verb::Post => Request::post(&url),
                Verb::Patch => Request::patch(&url),
                Verb::Delete => Request::delete(&url),
            };
            if let Some(token) = token {
                builder = builder.header("Authorization", &bearer(token));
            }
            let sent = match body {
                Some(body) => {
                    builder
                        .json(&body)
                        .map_err(|e| ApiError::Body(e.to_string()))?
                        .send()
                        .await
                }
                None => builder.send().await,
            };
            let resp = sent.map_err(|e| ApiError::Network(e.to_string()))?;
            let status = resp.status();
            let text = resp.text().await.map_err(|e| ApiError::Body(e.to_string()))?;
            parse_body(status, &text)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (token, body);
            Err(ApiError::Network(format!(
                "{} {url}: not available outside the browser",
                verb.as_str()
            )))
        }
    }

    /// Request carrying the stored token, if any.
    async fn authed<T: DeserializeOwned>(
        &self,
        verb: Verb,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<T, ApiError> {
        let token = self.tokens.read();
        self.request(verb, path, token.as_deref(), body).await
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.authed(Verb::Get, path, None).await
    }

    async fn send<B: Serialize, T: DeserializeOwned>(&self, verb: Verb, path: &str, body: &B) -> Result<T, ApiError> {
        let body = serde_json::to_value(body).map_err(|e| ApiError::Body(e.to_string()))?;
        self.authed(verb, path, Some(body)).await
    }

    async fn delete(&self, path: &str) -> Result<Ack, ApiError> {
        self.authed(Verb::Delete, path, None).await
    }

    // =========================================================
    // Users (admin)
    // =========================================================

    pub async fn list_users(&self) -> Result<Vec<UserProfile>, ApiError> {
        self.get("/users/get").await
    }

    pub async fn get_user(&self, id: i64) -> Result<UserProfile, ApiError> {
        self.get(&format!("/users/get/{id}")).await
    }

    pub async fn register_user(&self, user: &NewUser) -> Result<UserProfile, ApiError> {
        self.send(Verb::Post, "/users/register", user).await
    }

    pub async fn delete_user(&self, id: i64) -> Result<Ack, ApiError> {
        self.delete(&format!("/users/delete/{id}")).await
    }

    // =========================================================
    // Items
    // =========================================================

    pub async fn list_items(&self) -> Result<Vec<Item>, ApiError> {
        self.get("/items/get").await
    }

    pub async fn get_item(&self, id: i64) -> Result<Item, ApiError> {
        self.get(&format!("/items/get/{id}")).await
    }

    pub async fn add_item(&self, item: &NewItem) -> Result<Item, ApiError> {
        self.send(Verb::Post, "/items/add", item).await
    }

    pub async fn update_item(&self, id: i64, item: &NewItem) -> Result<Item, ApiError> {
        self.send(Verb::Patch, &format!("/items/update/{id}"), item).await
    }

    pub async fn delete_item(&self, id: i64) -> Result<Ack, ApiError> {
        self.delete(&format!("/items/delete/{id}")).await
    }

    // =========================================================
    // Categories
    // =========================================================

    pub async fn list_categories(&self) -> Result<Vec<Category>, ApiError> {
        self.get("/categories/get").await
    }

    pub async fn get_category(&self, id: i64) -> Result<Category, ApiError> {
        self.get(&format!("/categories/get/{id}")).await
    }

    pub async fn category_items(&self, id: i64) -> Result<Vec<Item>, ApiError> {
        self.get(&format!("/categories/get/{id}/items")).await
    }

    pub async fn add_category(&self, category: &NewCategory) -> Result<Category, ApiError> {
        self.send(Verb::Post, "/categories/add", category).await
    }

    pub async fn update_category(&self, id: i64, category: &NewCategory) -> Result<Category, ApiError> {
        self.send(Verb::Patch, &format!("/categories/{id}"), category).await
    }

    // =========================================================
    // Warehouses
    // =========================================================

    pub async fn list_warehouses(&self) -> Result<Vec<Warehouse>, ApiError> {
        self.get("/warehouses/get").await
    }

    pub async fn get_warehouse(&self, id: i64) -> Result<Warehouse, ApiError> {
        self.get(&format!("/warehouses/get/{id}")).await
    }

    pub async fn add_warehouse(&self, warehouse: &NewWarehouse) -> Result<Warehouse, ApiError> {
        self.send(Verb::Post, "/warehouses/add", warehouse).await
    }

    pub async fn update_warehouse(&self, id: i64, warehouse: &NewWarehouse) -> Result<Warehouse, ApiError> {
        self.send(Verb::Patch, &format!("/warehouses/{id}"), warehouse).await
    }

    pub async fn delete_warehouse(&self, id: i64) -> Result<Ack, ApiError> {
        self.delete(&format!("/warehouses/{id}")).await
    }

    // =========================================================
    // Stock
    // =========================================================

    pub async fn list_stock(&self) -> Result<Vec<Stock>, ApiError> {
        self.get("/stock/get").await
    }

    pub async fn stock_for_item(&self, item_id: i64) -> Result<Vec<Stock>, ApiError> {
        self.get(&format!("/stock/get/item/{item_id}")).await
    }

    pub async fn stock_for_warehouse(&self, warehouse_id: i64) -> Result<Vec<Stock>, ApiError> {
        self.get(&format!("/stock/get/warehouse/{warehouse_id}")).await
    }

    pub async fn list_movements(&self) -> Result<Vec<StockMovement>, ApiError> {
        self.get("/stock/movement/get").await
    }

    pub async fn add_movement(&self, movement: &NewStockMovement) -> Result<StockMovement, ApiError> {
        self.send(Verb::Post, "/stock/movement/add", movement).await
    }
}

#[async_trait(?Send)]
impl ApiGateway for HttpGateway {
    async fn login(&self, username: &str, password: &str) -> Result<String, ApiError> {
        #[cfg(feature = "csr")]
        {
            use gloo_net::http::Request;

            #[derive(serde::Deserialize)]
            struct AccessToken {
                access_token: String,
            }

            log::debug!("api: POST /login/");
            let resp = Request::post(&self.url("/login/"))
                .header("Content-Type", "application/x-www-form-urlencoded")
                .body(login_form_body(username, password))
                .map_err(|e| ApiError::Body(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            let status = resp.status();
            let text = resp.text().await.map_err(|e| ApiError::Body(e.to_string()))?;
            let body: AccessToken = parse_body(status, &text)?;
            Ok(body.access_token)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (username, password);
            Err(ApiError::Network("login: not available outside the browser".to_owned()))
        }
    }

    async fn fetch_profile(&self, token: &str) -> Result<UserProfile, ApiError> {
        self.request(Verb::Get, "/users/details", Some(token), None).await
    }

    async fn update_profile(&self, token: &str, update: &ProfileUpdate) -> Result<UserProfile, ApiError> {
        let body = serde_json::to_value(update).map_err(|e| ApiError::Body(e.to_string()))?;
        self.request(Verb::Patch, "/users/update/me", Some(token), Some(body)).await
    }

    async fn change_password(&self, token: &str, request: &PasswordChange) -> Result<(), ApiError> {
        let body = serde_json::to_value(request).map_err(|e| ApiError::Body(e.to_string()))?;
        let _: serde_json::Value = self
            .request(Verb::Patch, "/users/change-password", Some(token), Some(body))
            .await?;
        Ok(())
    }
}
