//! Response schemas for every catalogued operation.
//!
//! # Design
//! One fixed envelope per operation, deserialized strictly: required
//! fields must be present with matching types or the decode fails as a
//! whole; `Option` marks fields the server genuinely omits. Wire keys are
//! reproduced exactly. Most record structs use upper-snake keys, handled
//! with `rename_all`; envelope keys are plain lowercase.
//!
//! The `success` indicator is an integer on login and a string on every
//! other operation. That mismatch is the server's, and each schema keeps
//! its observed type so the inconsistency stays visible instead of being
//! papered over.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Login
// ---------------------------------------------------------------------------

/// Envelope for `ops::LOGIN`. `success == 1` means the credentials were
/// accepted; anything else is a rejection explained by `message`. The
/// `user` object is present either way.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginResponse {
    pub user: User,
    pub success: i64,
    pub message: String,
}

/// The authenticated agent as the server reports it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub ucode: String,
    pub fname: String,
    pub sname: String,
    pub username: String,
    pub brn: String,
    #[serde(rename = "type")]
    pub user_type: String,
    pub email: String,
    pub djoined: String,
}

// ---------------------------------------------------------------------------
// Dashboard
// ---------------------------------------------------------------------------

/// Envelope for `ops::DASHBOARD`: the agent's sales and target figures,
/// one section per tile. Every figure is a preformatted string straight
/// from the server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DashboardResponse {
    pub current: ProductionFigures,
    pub target: TargetFigures,
    pub ren_m: RenewalPremium,
    #[serde(default)]
    pub ren_nm: Option<NonMotorRenewalPremium>,
    pub ren_ach_m: MotorRenewalAchievement,
    pub ren_ach_nm: NonMotorRenewalAchievement,
    pub new_ach_m: MotorNewAchievement,
    pub new_ach_nm: NonMotorNewAchievement,
    pub m_pros: ProspectPremium,
    pub n_pros: ProspectPremium,
    pub com: Commission,
    pub cdr: DailyCalls,
    pub fq: FollowupCount,
    pub lf: LapsedCount,
    pub mdr: DailyCalls,
    pub nfq: FollowupCount,
    pub rfq: FollowupCount,
    pub fd: FinalizedCount,
    pub debtors_summ: DebtorsSummary,
    pub success: String,
}

/// Current-month production: premium and policy-count pairs per business
/// category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct ProductionFigures {
    pub new_premium: String,
    pub new_pol_no: String,
    pub renewal_premium: String,
    pub renewal_pol_no: String,
    pub endorsement_premium: String,
    pub endorsement_pol_no: String,
    pub cancel_premium: String,
    pub cancel_pol_no: String,
    pub total_premium: String,
    pub total_pol_no: String,
}

/// Targets and achievement percentages, motor and non-motor.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TargetFigures {
    pub mc: String,
    pub m3: String,
    pub mn: String,
    pub tot_prem: String,
    pub tr_mot: String,
    pub tr_non: String,
    pub tot_target: String,
    pub per_mot: String,
    pub per_non: String,
    pub per_total: String,
    pub p_comm: String,
}

/// Motor renewal premium due this month.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RenewalPremium {
    #[serde(rename = "REN_PREM")]
    pub ren_prem: String,
}

/// Non-motor renewal premium. The server sometimes omits the figure
/// inside the section as well as the section itself.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NonMotorRenewalPremium {
    #[serde(rename = "REN_PREM")]
    #[serde(default)]
    pub ren_prem: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MotorRenewalAchievement {
    #[serde(rename = "ACH_REN_M")]
    pub amount: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NonMotorRenewalAchievement {
    #[serde(rename = "ACH_REN_NM")]
    pub amount: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MotorNewAchievement {
    #[serde(rename = "ACH_NEW_M")]
    pub amount: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NonMotorNewAchievement {
    #[serde(rename = "ACH_NEW_NM")]
    pub amount: String,
}

/// Prospect premium; serves both the motor and non-motor sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProspectPremium {
    #[serde(rename = "PREMIUM")]
    pub premium: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Commission {
    #[serde(rename = "COMM")]
    pub comm: String,
}

/// Daily call rate; serves both the customer and marketing sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DailyCalls {
    #[serde(rename = "DAILY_CALL")]
    pub daily_call: String,
}

/// Follow-up quotation count; serves the fq, nfq, and rfq sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FollowupCount {
    #[serde(rename = "FQ")]
    pub fq: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LapsedCount {
    #[serde(rename = "LAPSED")]
    pub lapsed: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FinalizedCount {
    #[serde(rename = "FD")]
    pub fd: String,
}

/// Outstanding debtor totals bucketed by age in days.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct DebtorsSummary {
    pub days_60: String,
    pub days_90: String,
    pub days_180: String,
    pub days_360: String,
    pub days_total: String,
}

// ---------------------------------------------------------------------------
// Contacts
// ---------------------------------------------------------------------------

/// Envelope for `ops::ALL_CONTACTS`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactsResponse {
    pub contacts: Vec<Contact>,
    pub success: String,
}

/// One contact row in the agent's book. Only the identifying fields are
/// guaranteed; everything else depends on how complete the record is.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct Contact {
    pub mmc_id: String,
    pub mmc_surname: String,
    pub mmc_firstname: String,
    pub mmc_title: Option<String>,
    pub mmc_nicno: Option<String>,
    pub mmc_phoneno: Option<String>,
    pub mmc_mobileno: Option<String>,
    pub mmc_email: Option<String>,
    pub mmc_address1: Option<String>,
    pub mmc_address2: Option<String>,
    pub mmc_address3: Option<String>,
    pub mmc_city: Option<String>,
    pub mmc_district: Option<String>,
    pub mmc_business_occ: Option<String>,
    pub mmc_ref_id: Option<String>,
    pub mmc_mecode: Option<String>,
    pub created_by: Option<String>,
    pub created_date: Option<String>,
    pub modify_by: Option<String>,
    pub modify_date: Option<String>,
    pub mmc_status: Option<String>,
    pub mmc_brn: Option<String>,
    pub mmc_source_of_fund: Option<String>,
}

/// Envelope for `ops::SINGLE_CONTACT`: the contact record, a list of
/// reference labels, and the contact's latest policy summary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactDetailResponse {
    pub contactval: ContactDetail,
    pub contactref: Vec<String>,
    pub contactinfo: ContactPolicyInfo,
    pub success: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct ContactDetail {
    pub mmc_id: String,
    pub mmc_surname: String,
    pub mmc_firstname: String,
    pub mmc_initials: Option<String>,
    pub mmc_title: Option<String>,
    pub mmc_mobileno: Option<String>,
    pub mmc_email: Option<String>,
    pub mmc_address1: Option<String>,
    pub mmc_address2: Option<String>,
    pub mmc_address3: Option<String>,
    pub mmc_city: Option<String>,
    pub mmc_district: Option<String>,
    pub mmc_business_occ: Option<String>,
    pub mmc_status: Option<String>,
    pub mmc_brn: Option<String>,
    pub mmc_source_of_fund: Option<String>,
}

/// Policy summary attached to a single-contact lookup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct ContactPolicyInfo {
    pub mtb_pol_no: Option<String>,
    pub mtb_vehi_no: Option<String>,
    pub mtb_premium: Option<String>,
    // "FORM" is the wire spelling.
    pub mtq_period_form: Option<String>,
    pub mtq_period_to: Option<String>,
    pub mtb_status: Option<String>,
    pub mtb_bus_status: Option<String>,
}

// ---------------------------------------------------------------------------
// New business follow-ups
// ---------------------------------------------------------------------------

/// Envelope for `ops::NEW_BUSINESS_FOLLOWUPS`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FollowupsResponse {
    pub business: Vec<FollowupRecord>,
    pub success: String,
    pub user_code: String,
}

/// One follow-up row keyed by `MTB_SEQ`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct FollowupRecord {
    pub mtb_seq: String,
    pub mtb_mmc_id: Option<String>,
    pub mtb_follow_up_date: Option<String>,
    pub contact: Option<String>,
    pub mmc_mobileno: Option<String>,
    pub mtb_vehi_no: Option<String>,
    pub class: Option<String>,
    pub product: Option<String>,
    pub mtb_type_of_prospective: Option<String>,
}

/// Envelope for `ops::SINGLE_NEW_BUSINESS_FOLLOWUP`. The detail lookup
/// returns every field populated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FollowupDetailResponse {
    pub business: FollowupDetail,
    pub success: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct FollowupDetail {
    pub mtb_seq: String,
    pub mtb_mmc_id: String,
    pub mtb_follow_up_date: String,
    pub contact: String,
    pub mmc_mobileno: String,
    pub mtb_vehi_no: String,
    pub class: String,
    pub product: String,
    pub mtb_type_of_prospective: String,
}

// ---------------------------------------------------------------------------
// Renewals
// ---------------------------------------------------------------------------

/// Envelope for `ops::RENEWAL_FOLLOWUPS`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RenewalFollowupsResponse {
    pub business: Vec<RenewalFollowup>,
    pub success: String,
}

/// Like `FollowupRecord` with the policy number the renewal hangs off.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct RenewalFollowup {
    pub mtb_seq: String,
    pub mtb_mmc_id: Option<String>,
    pub mtb_follow_up_date: Option<String>,
    pub contact: Option<String>,
    pub mmc_mobileno: Option<String>,
    pub mtb_vehi_no: Option<String>,
    pub class: Option<String>,
    pub product: Option<String>,
    pub mtb_type_of_prospective: Option<String>,
    pub mtb_pol_no: Option<String>,
}

/// Envelope for `ops::SINGLE_RENEWAL_POLICY`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RenewalPolicyResponse {
    pub veh_details: VehicleDetails,
    pub success: String,
}

/// Full detail for one vehicle's renewal quotation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct VehicleDetails {
    pub veh_no: String,
    pub pol_policy_no: String,
    pub cust_name: String,
    pub tel: String,
    pub pol_period_from: String,
    pub pol_period_to: String,
    pub pol_days: String,
    pub pol_cla_code: String,
    pub pol_prd_code: String,
    pub pol_sum_insured: String,
    pub class: String,
    pub product: String,
}

/// Envelope for `ops::RENEWAL_LIST`. `from` and `to` echo the requested
/// date range.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RenewalListResponse {
    pub renew_list: Vec<RenewalRecord>,
    pub success: String,
    pub from: String,
    pub to: String,
}

/// One policy due for renewal in the requested window.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct RenewalRecord {
    pub pol_policy_no: String,
    pub pol_prd_code: Option<String>,
    pub pol_cla_code: Option<String>,
    pub des: Option<String>,
    pub risk: Option<String>,
    pub make: Option<String>,
    pub model: Option<String>,
    pub cap: Option<String>,
    pub yom: Option<String>,
    pub v_level: Option<String>,
    pub p_from: Option<String>,
    pub p_to: Option<String>,
    pub cust_name: Option<String>,
    pub cust_addr: Option<String>,
    pub tel: Option<String>,
    pub pol_premium: Option<String>,
}

// ---------------------------------------------------------------------------
// Finalized business
// ---------------------------------------------------------------------------

/// Envelope for `ops::FINALIZED_BUSINESS`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FinalizedResponse {
    pub bus_finalised: Vec<FinalizedRecord>,
    pub success: String,
}

/// One finalized quotation keyed by `MTQ_QUO_SEQ`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct FinalizedRecord {
    pub mtq_quo_seq: String,
    pub mmc_title: Option<String>,
    pub mmc_firstname: Option<String>,
    pub mmc_surname: Option<String>,
    pub mmc_mobileno: Option<String>,
    pub mtb_vehi_no: Option<String>,
    pub mtq_period_to: Option<String>,
}

/// Envelope for `ops::SINGLE_FINALIZED_BUSINESS`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FinalizedDetailResponse {
    pub bus_finalised: FinalizedDetail,
    pub success: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct FinalizedDetail {
    pub mmc_title: String,
    pub mmc_firstname: String,
    pub mmc_surname: String,
    pub mmc_mobileno: String,
    pub mtb_vehi_no: String,
    pub mtb_class: String,
    pub mtb_product: String,
    pub prd_description: String,
    pub mtq_tot_prm: String,
    // "FORM" is the wire spelling.
    pub mtq_period_form: String,
    pub mtq_period_to: String,
}
