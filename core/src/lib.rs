//! Typed API client for the agency portal.
//!
//! # Overview
//! Every screen of the agent app follows the same pattern: call one
//! form-encoded POST endpoint, decode a fixed JSON envelope, render it.
//! This crate owns that pattern end to end: a static endpoint catalog,
//! percent-encoded request bodies, one async POST per call, and strict
//! per-operation response schemas with a small typed error set.
//!
//! # Design
//! - `AgencyClient` is stateless: it holds the base URL and the HTTP
//!   client, nothing per-call. Construct one and pass it by reference.
//! - Request construction and response decoding are pure functions around
//!   a single `send`, so the I/O boundary stays explicit and testable.
//! - A rejected login (`success == 0`) is a decoded value, not an error;
//!   the error type covers only URL, transport, empty-body, and decode
//!   failures.
//! - Session state is an observable `LoggedOut | LoggedIn` value the
//!   caller updates from decoded login results; the client never touches
//!   it.

pub mod client;
pub mod error;
pub mod form;
pub mod http;
pub mod ops;
pub mod session;
pub mod types;

pub use client::AgencyClient;
pub use error::ApiError;
pub use http::{FormRequest, FORM_CONTENT_TYPE};
pub use ops::Operation;
pub use session::{Identity, Session, SessionStore};
pub use types::{
    Contact, ContactDetail, ContactDetailResponse, ContactPolicyInfo, ContactsResponse,
    DashboardResponse, FinalizedDetail, FinalizedDetailResponse, FinalizedRecord, FinalizedResponse,
    FollowupDetail, FollowupDetailResponse, FollowupRecord, FollowupsResponse, LoginResponse,
    RenewalFollowup, RenewalFollowupsResponse, RenewalListResponse, RenewalPolicyResponse,
    RenewalRecord, User, VehicleDetails,
};
