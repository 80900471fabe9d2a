//! Error taxonomy for token decoding, gateway transport, and session flows.
//!
//! ERROR HANDLING
//! ==============
//! `ApiError` describes what happened on the wire. `SessionError` is what the
//! session store acts on: `Unauthorized` evicts the token, `Validation` is
//! shown next to a form, and `Transient` is logged and otherwise ignored.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Error returned by [`crate::claims::decode`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// The token is not `header.payload.signature`.
    #[error("expected 3 token segments, found {0}")]
    Segments(usize),
    /// The payload segment is not valid base64.
    #[error("token payload is not valid base64")]
    Base64,
    /// The payload decoded but is not a claims object.
    #[error("token payload is not valid claims JSON: {0}")]
    Json(String),
}

/// Transport-level failure reported by an [`crate::ApiGateway`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The backend answered with a non-2xx status.
    #[error("request failed with status {status}: {detail}")]
    Status { status: u16, detail: String },
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// The response body could not be parsed.
    #[error("malformed response body: {0}")]
    Body(String),
}

impl ApiError {
    /// HTTP status, when the backend produced one.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Network(_) | Self::Body(_) => None,
        }
    }
}

/// Failure surfaced by session operations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// The stored credential could not be decoded.
    #[error(transparent)]
    Decode(#[from] DecodeError),
    /// The backend rejected the credential (401) or no credential exists.
    #[error("session is no longer valid")]
    Unauthorized,
    /// Login was rejected.
    #[error("invalid credentials")]
    InvalidCredentials,
    /// The backend rejected submitted form data (400/422).
    #[error("{0}")]
    Validation(String),
    /// Any other network or HTTP failure.
    #[error("request failed: {0}")]
    Transient(String),
}

impl From<ApiError> for SessionError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Status { status: 401, .. } => Self::Unauthorized,
            ApiError::Status {
                status: 400 | 422,
                detail,
            } => Self::Validation(detail),
            other => Self::Transient(other.to_string()),
        }
    }
}
