//! The API client facade: build, send, decode.
//!
//! # Design
//! `AgencyClient` holds only the base URL and a `reqwest::Client`; it
//! carries no per-call state and no session knowledge. Request
//! construction (`build`) and response decoding (`decode`) are pure and
//! separately testable; `execute` glues them around the one network call.
//! Each catalogued operation gets a thin typed wrapper over `execute`
//! instead of its own copy of the plumbing.

use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::form;
use crate::http::{self, FormRequest};
use crate::ops::{self, Operation};
use crate::types::{
    ContactDetailResponse, ContactsResponse, DashboardResponse, FinalizedDetailResponse,
    FinalizedResponse, FollowupDetailResponse, FollowupsResponse, LoginResponse,
    RenewalFollowupsResponse, RenewalListResponse, RenewalPolicyResponse,
};

/// Asynchronous client for the agency portal API.
///
/// Construct one per base URL and share it by reference; concurrent calls
/// are independent and unordered.
#[derive(Debug, Clone)]
pub struct AgencyClient {
    base_url: String,
    http: reqwest::Client,
}

impl AgencyClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    /// Build the request for `op`, pairing its declared parameter names
    /// with `values` in catalog order. Pure; a length mismatch is a
    /// programming error.
    pub fn build(&self, op: &Operation, values: &[&str]) -> FormRequest {
        assert_eq!(
            op.params.len(),
            values.len(),
            "{}: expected {} parameter values, got {}",
            op.name,
            op.params.len(),
            values.len()
        );
        let pairs: Vec<(&str, &str)> = op.params.iter().copied().zip(values.iter().copied()).collect();
        FormRequest {
            url: format!("{}{}", self.base_url, op.path),
            body: form::encode_pairs(&pairs),
        }
    }

    /// Decode raw body bytes into `op`'s response schema. A zero-byte
    /// body is `NoData`; anything that does not match the schema is
    /// `Decode`, with no partial value surfaced.
    pub fn decode<T: DeserializeOwned>(op: &Operation, bytes: &[u8]) -> Result<T, ApiError> {
        if bytes.is_empty() {
            return Err(ApiError::NoData);
        }
        tracing::debug!(op = op.name, body = %String::from_utf8_lossy(bytes), "raw response");
        serde_json::from_slice(bytes).map_err(|e| {
            tracing::warn!(op = op.name, error = %e, "response did not match schema");
            ApiError::Decode(e.to_string())
        })
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        op: &'static Operation,
        values: &[&str],
    ) -> Result<T, ApiError> {
        let request = self.build(op, values);
        let bytes = http::send(&self.http, &request).await?;
        Self::decode(op, &bytes)
    }

    /// Authenticate an agent. A well-formed rejection decodes with
    /// `success == 0` and the reason in `message`; only transport and
    /// decoding problems are `Err`.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, ApiError> {
        self.execute(&ops::LOGIN, &[username, password]).await
    }

    /// Sales and target figures for the dashboard tiles.
    pub async fn fetch_dashboard(&self, brn: &str, ucode: &str) -> Result<DashboardResponse, ApiError> {
        self.execute(&ops::DASHBOARD, &[brn, ucode]).await
    }

    /// The agent's full contact book.
    pub async fn fetch_all_contacts(&self, ucode: &str) -> Result<ContactsResponse, ApiError> {
        self.execute(&ops::ALL_CONTACTS, &[ucode]).await
    }

    /// One contact with references and latest policy summary.
    pub async fn fetch_single_contact(&self, cust_id: &str) -> Result<ContactDetailResponse, ApiError> {
        self.execute(&ops::SINGLE_CONTACT, &[cust_id]).await
    }

    /// Open new-business follow-ups for the agent.
    pub async fn fetch_new_business_followups(&self, ucode: &str) -> Result<FollowupsResponse, ApiError> {
        self.execute(&ops::NEW_BUSINESS_FOLLOWUPS, &[ucode]).await
    }

    /// One new-business follow-up in full.
    pub async fn fetch_single_new_business_followup(
        &self,
        bus_id: &str,
    ) -> Result<FollowupDetailResponse, ApiError> {
        self.execute(&ops::SINGLE_NEW_BUSINESS_FOLLOWUP, &[bus_id]).await
    }

    /// Renewal quotation detail for one vehicle.
    pub async fn fetch_single_renewal_policy(
        &self,
        ucode: &str,
        vehicle_id: &str,
    ) -> Result<RenewalPolicyResponse, ApiError> {
        self.execute(&ops::SINGLE_RENEWAL_POLICY, &[ucode, vehicle_id]).await
    }

    /// Open renewal follow-ups for the agent.
    pub async fn fetch_renewal_followups(&self, ucode: &str) -> Result<RenewalFollowupsResponse, ApiError> {
        self.execute(&ops::RENEWAL_FOLLOWUPS, &[ucode]).await
    }

    /// Policies due for renewal between `date_from` and `date_to`.
    pub async fn fetch_renewal_list(
        &self,
        ucode: &str,
        date_from: &str,
        date_to: &str,
    ) -> Result<RenewalListResponse, ApiError> {
        self.execute(&ops::RENEWAL_LIST, &[ucode, date_from, date_to]).await
    }

    /// Finalized quotations for the agent.
    pub async fn fetch_finalized_business(&self, ucode: &str) -> Result<FinalizedResponse, ApiError> {
        self.execute(&ops::FINALIZED_BUSINESS, &[ucode]).await
    }

    /// One finalized quotation in full.
    pub async fn fetch_single_finalized_business(
        &self,
        ucode: &str,
        quote_id: &str,
    ) -> Result<FinalizedDetailResponse, ApiError> {
        self.execute(&ops::SINGLE_FINALIZED_BUSINESS, &[ucode, quote_id]).await
    }
}
