//! Test double for the agency portal API.
//!
//! Serves every catalogued endpoint with canned JSON over the same wire
//! shapes as the real server: form-encoded POST in, JSON envelope out,
//! `success` as an integer on login and a string everywhere else. One
//! credential pair is seeded (`jdoe` / `secret`); anything else gets the
//! success=0 rejection envelope so callers can exercise the business
//! failure path.

use axum::{extract::Form, routing::post, Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};
use tokio::net::TcpListener;

/// The seeded agent: username, password, ucode, branch.
pub const SEED_USERNAME: &str = "jdoe";
pub const SEED_PASSWORD: &str = "secret";
pub const SEED_UCODE: &str = "401";
pub const SEED_BRN: &str = "BR001";

pub fn app() -> Router {
    Router::new()
        .route("/apilogin", post(login))
        .route("/apidashboard", post(dashboard))
        .route("/getAllContacts", post(all_contacts))
        .route("/getSingleContact", post(single_contact))
        .route("/getNewBusinessFollowUps", post(new_business_followups))
        .route("/grtSingleBusinessFollowUp", post(single_business_followup))
        .route("/getRenewalResult", post(renewal_result))
        .route("/getRenewalFollowUpList", post(renewal_followups))
        .route("/getRenewalList", post(renewal_list))
        .route("/getFinalizedBusinessList", post(finalized_list))
        .route("/getSingleFinalizedBusiness", post(single_finalized))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

#[derive(Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

async fn login(Form(form): Form<LoginForm>) -> Json<Value> {
    if form.username == SEED_USERNAME && form.password == SEED_PASSWORD {
        Json(json!({
            "user": {
                "ucode": SEED_UCODE,
                "fname": "Jane",
                "sname": "Doe",
                "username": SEED_USERNAME,
                "brn": SEED_BRN,
                "type": "AGENT",
                "email": "jdoe@example.com",
                "djoined": "01-01-2020"
            },
            "success": 1,
            "message": "successfully loggedin"
        }))
    } else {
        Json(json!({
            "user": {
                "ucode": "", "fname": "", "sname": "", "username": "",
                "brn": "", "type": "", "email": "", "djoined": ""
            },
            "success": 0,
            "message": "invalid credentials"
        }))
    }
}

#[derive(Deserialize)]
pub struct DashboardForm {
    pub brn: String,
    pub ucode: String,
}

async fn dashboard(Form(_form): Form<DashboardForm>) -> Json<Value> {
    Json(json!({
        "current": {
            "NEW_PREMIUM": "250000", "NEW_POL_NO": "12",
            "RENEWAL_PREMIUM": "320000", "RENEWAL_POL_NO": "25",
            "ENDORSEMENT_PREMIUM": "15000", "ENDORSEMENT_POL_NO": "3",
            "CANCEL_PREMIUM": "20000", "CANCEL_POL_NO": "2",
            "TOTAL_PREMIUM": "605000", "TOTAL_POL_NO": "42"
        },
        "target": {
            "mc": "100000", "m3": "50000", "mn": "80000",
            "tot_prem": "605000", "tr_mot": "400000", "tr_non": "200000",
            "tot_target": "850000", "per_mot": "80", "per_non": "55",
            "per_total": "71", "p_comm": "36300"
        },
        "ren_m": { "REN_PREM": "120000" },
        "ren_nm": { "REN_PREM": "42000" },
        "ren_ach_m": { "ACH_REN_M": "95000" },
        "ren_ach_nm": { "ACH_REN_NM": "30000" },
        "new_ach_m": { "ACH_NEW_M": "150000" },
        "new_ach_nm": { "ACH_NEW_NM": "60000" },
        "m_pros": { "PREMIUM": "75000" },
        "n_pros": { "PREMIUM": "25000" },
        "com": { "COMM": "36300" },
        "cdr": { "DAILY_CALL": "12" },
        "fq": { "FQ": "7" },
        "lf": { "LAPSED": "3" },
        "mdr": { "DAILY_CALL": "4" },
        "nfq": { "FQ": "5" },
        "rfq": { "FQ": "6" },
        "fd": { "FD": "9" },
        "debtors_summ": {
            "DAYS_60": "15000", "DAYS_90": "22000", "DAYS_180": "31000",
            "DAYS_360": "22000", "DAYS_TOTAL": "90000"
        },
        "success": "true"
    }))
}

#[derive(Deserialize)]
pub struct UcodeForm {
    pub ucode: String,
}

async fn all_contacts(Form(_form): Form<UcodeForm>) -> Json<Value> {
    Json(json!({
        "contacts": [
            {
                "MMC_ID": "C100", "MMC_SURNAME": "Doe", "MMC_FIRSTNAME": "Jane",
                "MMC_TITLE": "Ms", "MMC_NICNO": "857261003V", "MMC_PHONENO": "0112345678",
                "MMC_MOBILENO": "0771234567", "MMC_EMAIL": "jane.doe@example.com",
                "MMC_ADDRESS1": "12 Galle Road", "MMC_ADDRESS2": "Kollupitiya",
                "MMC_ADDRESS3": null, "MMC_CITY": "Colombo", "MMC_DISTRICT": "Colombo",
                "MMC_BUSINESS_OCC": "Accountant", "MMC_REF_ID": "R-77", "MMC_MECODE": "ME01",
                "CREATED_BY": "401", "CREATED_DATE": "15-03-2024",
                "MODIFY_BY": null, "MODIFY_DATE": null,
                "MMC_STATUS": "A", "MMC_BRN": "BR001", "MMC_SOURCE_OF_FUND": "Salary"
            },
            {
                "MMC_ID": "C101", "MMC_SURNAME": "Perera", "MMC_FIRSTNAME": "Nimal",
                "MMC_TITLE": "Mr", "MMC_MOBILENO": "0779876543"
            }
        ],
        "success": "true"
    }))
}

#[derive(Deserialize)]
pub struct SingleContactForm {
    pub cust_id: String,
}

async fn single_contact(Form(form): Form<SingleContactForm>) -> Json<Value> {
    Json(json!({
        "contactval": {
            "MMC_ID": form.cust_id, "MMC_SURNAME": "Doe", "MMC_FIRSTNAME": "Jane",
            "MMC_INITIALS": "J", "MMC_TITLE": "Ms", "MMC_MOBILENO": "0771234567",
            "MMC_EMAIL": "jane.doe@example.com", "MMC_ADDRESS1": "12 Galle Road",
            "MMC_ADDRESS2": "Kollupitiya", "MMC_ADDRESS3": null, "MMC_CITY": "Colombo",
            "MMC_DISTRICT": "Colombo", "MMC_BUSINESS_OCC": "Accountant",
            "MMC_STATUS": "A", "MMC_BRN": "BR001", "MMC_SOURCE_OF_FUND": "Salary"
        },
        "contactref": ["REF-1", "REF-2"],
        "contactinfo": {
            "MTB_POL_NO": "P100", "MTB_VEHI_NO": "CAB-1234", "MTB_PREMIUM": "45000",
            "MTQ_PERIOD_FORM": "01-01-2025", "MTQ_PERIOD_TO": "31-12-2025",
            "MTB_STATUS": "A", "MTB_BUS_STATUS": "F"
        },
        "success": "true"
    }))
}

async fn new_business_followups(Form(form): Form<UcodeForm>) -> Json<Value> {
    Json(json!({
        "business": [
            {
                "MTB_SEQ": "77", "MTB_MMC_ID": "C100", "MTB_FOLLOW_UP_DATE": "05-02-2025",
                "CONTACT": "Jane Doe", "MMC_MOBILENO": "0771234567", "MTB_VEHI_NO": "CAB-1234",
                "CLASS": "Motor", "PRODUCT": "Comprehensive", "MTB_TYPE_OF_PROSPECTIVE": "HOT"
            },
            {
                "MTB_SEQ": "78", "MTB_MMC_ID": "C101", "MTB_FOLLOW_UP_DATE": "07-02-2025",
                "CONTACT": "Nimal Perera", "MMC_MOBILENO": "0779876543"
            }
        ],
        "success": "true",
        "user_code": form.ucode
    }))
}

#[derive(Deserialize)]
pub struct SingleBusinessForm {
    pub bus_id: String,
}

async fn single_business_followup(Form(form): Form<SingleBusinessForm>) -> Json<Value> {
    Json(json!({
        "business": {
            "MTB_SEQ": form.bus_id, "MTB_MMC_ID": "C100", "MTB_FOLLOW_UP_DATE": "05-02-2025",
            "CONTACT": "Jane Doe", "MMC_MOBILENO": "0771234567", "MTB_VEHI_NO": "CAB-1234",
            "CLASS": "Motor", "PRODUCT": "Comprehensive", "MTB_TYPE_OF_PROSPECTIVE": "HOT"
        },
        "success": "true"
    }))
}

#[derive(Deserialize)]
pub struct RenewalResultForm {
    pub ucode: String,
    pub vehicle_id: String,
}

async fn renewal_result(Form(form): Form<RenewalResultForm>) -> Json<Value> {
    Json(json!({
        "veh_details": {
            "VEH_NO": form.vehicle_id, "POL_POLICY_NO": "P100", "CUST_NAME": "Jane Doe",
            "TEL": "0771234567", "POL_PERIOD_FROM": "01-01-2025", "POL_PERIOD_TO": "31-12-2025",
            "POL_DAYS": "30", "POL_CLA_CODE": "MC", "POL_PRD_CODE": "PRD1",
            "POL_SUM_INSURED": "1000000", "CLASS": "Motor", "PRODUCT": "Comprehensive"
        },
        "success": "true"
    }))
}

async fn renewal_followups(Form(_form): Form<UcodeForm>) -> Json<Value> {
    Json(json!({
        "business": [
            {
                "MTB_SEQ": "91", "MTB_MMC_ID": "C100", "MTB_FOLLOW_UP_DATE": "10-02-2025",
                "CONTACT": "Jane Doe", "MMC_MOBILENO": "0771234567", "MTB_VEHI_NO": "CAB-1234",
                "CLASS": "Motor", "PRODUCT": "Comprehensive",
                "MTB_TYPE_OF_PROSPECTIVE": "RENEWAL", "MTB_POL_NO": "P200"
            }
        ],
        "success": "true"
    }))
}

#[derive(Deserialize)]
pub struct RenewalListForm {
    pub ucode: String,
    pub date_from: String,
    pub date_to: String,
}

async fn renewal_list(Form(form): Form<RenewalListForm>) -> Json<Value> {
    Json(json!({
        "renew_list": [
            {
                "POL_POLICY_NO": "P300", "POL_PRD_CODE": "PRD1", "POL_CLA_CODE": "MC",
                "DES": "Private Car", "RISK": "CAB-1234", "MAKE": "Toyota", "MODEL": "Axio",
                "CAP": "1500", "YOM": "2018", "V_LEVEL": "A", "P_FROM": "01-03-2025",
                "P_TO": "28-02-2026", "CUST_NAME": "Jane Doe", "CUST_ADDR": "12 Galle Road",
                "TEL": "0771234567", "POL_PREMIUM": "52000"
            }
        ],
        "success": "true",
        "from": form.date_from,
        "to": form.date_to
    }))
}

async fn finalized_list(Form(_form): Form<UcodeForm>) -> Json<Value> {
    Json(json!({
        "bus_finalised": [
            {
                "MTQ_QUO_SEQ": "QUO144", "MMC_TITLE": "Ms", "MMC_FIRSTNAME": "Jane",
                "MMC_SURNAME": "Doe", "MMC_MOBILENO": "0771234567",
                "MTB_VEHI_NO": "CAB-1234", "MTQ_PERIOD_TO": "31-12-2025"
            }
        ],
        "success": "true"
    }))
}

#[derive(Deserialize)]
pub struct SingleFinalizedForm {
    pub ucode: String,
    pub quote_id: String,
}

async fn single_finalized(Form(_form): Form<SingleFinalizedForm>) -> Json<Value> {
    Json(json!({
        "bus_finalised": {
            "MMC_TITLE": "Ms", "MMC_FIRSTNAME": "Jane", "MMC_SURNAME": "Doe",
            "MMC_MOBILENO": "0771234567", "MTB_VEHI_NO": "CAB-1234",
            "MTB_CLASS": "Motor", "MTB_PRODUCT": "Comprehensive",
            "PRD_DESCRIPTION": "Private Car Comprehensive", "MTQ_TOT_PRM": "52000",
            "MTQ_PERIOD_FORM": "01-01-2025", "MTQ_PERIOD_TO": "31-12-2025"
        },
        "success": "true"
    }))
}
