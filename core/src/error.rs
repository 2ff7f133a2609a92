//! Error types for the todo client.
//!
//! # Design
//! `NotFound` gets its own variant because the service answers an update of
//! an unknown id with 404, and callers want to tell that apart from a broken
//! server. Every other non-2xx status lands in `HttpError` with the raw
//! status and body. Failures to complete the exchange at all are a separate
//! `TransportError` so hosts can produce them without knowing `ApiError`.

use thiserror::Error;

/// The request never produced an HTTP response (connection refused, DNS,
/// broken pipe, unreadable body).
#[derive(Debug, Error)]
#[error("transport failed: {0}")]
pub struct TransportError(pub String);

/// Errors returned by `TodoClient` parse methods and `TodoApp` actions.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404, or a toggle named an id that is not in the
    /// local list.
    #[error("todo not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// Delete answered 2xx but the body did not say `success: true`. Holds
    /// the raw body.
    #[error("delete was not acknowledged: {0}")]
    Unacknowledged(String),

    /// A 2xx body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),

    /// The host's `Transport` failed before a response arrived.
    #[error(transparent)]
    Transport(#[from] TransportError),
}
