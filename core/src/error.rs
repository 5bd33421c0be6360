//! Error types for the agency portal API client.
//!
//! # Design
//! A server response whose `success` field signals failure is *not* an
//! error here; it decodes normally and the caller inspects it. These
//! variants cover only what stops a call from producing a decoded
//! envelope: a bad URL, a failed connection, an empty body, or a body
//! that does not match the operation's schema.

use std::fmt;

/// Errors returned by `AgencyClient` operations.
#[derive(Debug)]
pub enum ApiError {
    /// The base URL and operation path do not form a valid URL. With a
    /// static catalog this is a programmer error.
    InvalidUrl(String),

    /// The request never completed (connection refused, DNS failure,
    /// timeout). Never retried.
    Transport(String),

    /// The server answered with a zero-byte body where content was
    /// expected. Distinct from `Decode` so callers can tell "no data"
    /// from "unreadable data".
    NoData,

    /// The body was not valid JSON for the operation's schema: parse
    /// failure, missing required field, or type mismatch. No partial
    /// result is surfaced.
    Decode(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::InvalidUrl(url) => write!(f, "invalid request URL: {url}"),
            ApiError::Transport(msg) => write!(f, "request failed: {msg}"),
            ApiError::NoData => write!(f, "no data received from the server"),
            ApiError::Decode(msg) => write!(f, "failed to decode the response: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}
