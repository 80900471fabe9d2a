//! Bearer-token claim decoding.
//!
//! Decoding is local and unverified: the signature segment is never checked.
//! The backend remains the authority (it answers 401 for forged or stale
//! tokens); the client only needs the role and expiry to decide what to
//! render and when to stop trusting a stored token.

#[cfg(test)]
#[path = "claims_test.rs"]
mod claims_test;

use base64ct::{Base64Unpadded, Base64UrlUnpadded, Encoding};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

use crate::error::DecodeError;
use crate::role::Role;

/// Claims embedded in the token payload.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Claims {
    /// Subject (the username for this backend).
    #[serde(default)]
    pub sub: Option<String>,
    /// Role tag; unknown tags decode as anonymous.
    #[serde(default, deserialize_with = "deserialize_role")]
    pub role: Option<Role>,
    /// Expiry in seconds since the Unix epoch.
    #[serde(deserialize_with = "deserialize_expiry")]
    pub exp: i64,
}

impl Claims {
    /// Whether the expiry lies strictly before `now_ms`.
    #[must_use]
    pub fn is_expired_at(&self, now_ms: i64) -> bool {
        self.exp.saturating_mul(1000) < now_ms
    }
}

/// Decode the claims of a `header.payload.signature` token.
///
/// # Errors
///
/// Returns [`DecodeError::Segments`] when the token does not have exactly three
/// segments, [`DecodeError::Base64`] when the payload is not base64, and
/// [`DecodeError::Json`] when the payload is not a claims object with a
/// numeric `exp`.
pub fn decode(token: &str) -> Result<Claims, DecodeError> {
    let segments: Vec<&str> = token.trim().split('.').collect();
    let [_, payload, _] = segments.as_slice() else {
        return Err(DecodeError::Segments(segments.len()));
    };
    let bytes = decode_segment(payload)?;
    let object: serde_json::Map<String, serde_json::Value> =
        serde_json::from_slice(&bytes).map_err(|e| DecodeError::Json(e.to_string()))?;
    Claims::deserialize(serde_json::Value::Object(object)).map_err(|e| DecodeError::Json(e.to_string()))
}

/// Whether `token` must no longer be trusted at `now_ms`.
///
/// Fails closed: any token that cannot be decoded counts as expired.
#[must_use]
pub fn is_expired(token: &str, now_ms: i64) -> bool {
    match decode(token) {
        Ok(claims) => claims.is_expired_at(now_ms),
        Err(err) => {
            log::warn!("claims: treating undecodable token as expired: {err}");
            true
        }
    }
}

/// JWTs use the url-safe alphabet without padding; tolerate padding and the
/// standard alphabet as well.
fn decode_segment(segment: &str) -> Result<Vec<u8>, DecodeError> {
    let trimmed = segment.trim_end_matches('=');
    if trimmed.is_empty() {
        return Err(DecodeError::Base64);
    }
    Base64UrlUnpadded::decode_vec(trimmed)
        .or_else(|_| Base64Unpadded::decode_vec(trimmed))
        .map_err(|_| DecodeError::Base64)
}

fn deserialize_role<'de, D>(deserializer: D) -> Result<Option<Role>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(Role::parse))
}

fn deserialize_expiry<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Ok(int);
            }
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float >= i64::MIN as f64
                && float <= i64::MAX as f64
            {
                return Ok(float.floor() as i64);
            }
            Err(D::Error::custom("expected numeric exp"))
        }
        _ => Err(D::Error::custom("expected numeric exp")),
    }
}
