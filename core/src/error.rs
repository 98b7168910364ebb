//! Error types for the task client.
//!
//! # Design
//! `NotFound` gets a dedicated variant so a missing task reads differently
//! from "the server returned an unexpected status." All other non-2xx
//! responses land in `HttpError` with the raw status code and body.
//! `Transport` covers requests that never produced a response at all.

use std::fmt;

/// Errors returned by task operations.
#[derive(Debug)]
pub enum ApiError {
    /// The request could not be completed (DNS, connect, TLS, I/O).
    Transport(String),

    /// The server returned 404.
    NotFound,

    /// The server returned a non-2xx status other than 404.
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    SerializationError(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Transport(msg) => write!(f, "transport failure: {msg}"),
            ApiError::NotFound => write!(f, "resource not found"),
            ApiError::HttpError { status, body } if body.is_empty() => {
                write!(f, "HTTP {status}")
            }
            ApiError::HttpError { status, body } => {
                write!(f, "HTTP {status}: {body}")
            }
            ApiError::DeserializationError(msg) => {
                write!(f, "deserialization failed: {msg}")
            }
            ApiError::SerializationError(msg) => {
                write!(f, "serialization failed: {msg}")
            }
        }
    }
}

impl std::error::Error for ApiError {}
