//! HTTP transport: one form-encoded POST per call.
//!
//! # Design
//! `FormRequest` describes a request as plain data so request
//! construction stays a pure, testable step. `send` is the only function
//! in the crate that touches the network: it performs a single POST and
//! resolves exactly once, with the raw body bytes or an error. Timeouts,
//! redirects, and connection pooling are whatever `reqwest` defaults to.

use reqwest::header::CONTENT_TYPE;
use reqwest::Url;

use crate::error::ApiError;

/// The only content type this protocol uses, on every request.
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// A fully-built request: absolute URL plus the encoded form body.
///
/// Produced by `AgencyClient::build`; consumed by `send`. Not retained
/// after the call completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormRequest {
    pub url: String,
    pub body: String,
}

/// Execute `request` and return the raw response body.
///
/// The body is returned regardless of HTTP status; the server reports
/// failures inside the JSON envelope, not via status codes, and the
/// decoder is the judge of whatever comes back.
pub async fn send(http: &reqwest::Client, request: &FormRequest) -> Result<Vec<u8>, ApiError> {
    let url = Url::parse(&request.url).map_err(|_| ApiError::InvalidUrl(request.url.clone()))?;

    let response = http
        .post(url)
        .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
        .body(request.body.clone())
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    let bytes = response
        .bytes()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    Ok(bytes.to_vec())
}
