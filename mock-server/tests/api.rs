use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, SEED_BRN, SEED_PASSWORD, SEED_UCODE, SEED_USERNAME};
use tower::ServiceExt;

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn form_request(uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(body.to_string())
        .unwrap()
}

#[tokio::test]
async fn login_with_seeded_credentials_succeeds() {
    let resp = app()
        .oneshot(form_request(
            "/apilogin",
            &format!("username={SEED_USERNAME}&password={SEED_PASSWORD}"),
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["success"], 1);
    assert_eq!(body["user"]["ucode"], SEED_UCODE);
    assert_eq!(body["user"]["brn"], SEED_BRN);
    assert_eq!(body["user"]["username"], SEED_USERNAME);
}

#[tokio::test]
async fn login_with_wrong_password_returns_rejection_envelope() {
    let resp = app()
        .oneshot(form_request(
            "/apilogin",
            &format!("username={SEED_USERNAME}&password=nope"),
        ))
        .await
        .unwrap();

    // A rejection is still a 200 with success=0, like the real server.
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["success"], 0);
    assert_eq!(body["message"], "invalid credentials");
}

#[tokio::test]
async fn dashboard_returns_every_section() {
    let resp = app()
        .oneshot(form_request(
            "/apidashboard",
            &format!("brn={SEED_BRN}&ucode={SEED_UCODE}"),
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    for section in [
        "current", "target", "ren_m", "ren_nm", "ren_ach_m", "ren_ach_nm", "new_ach_m",
        "new_ach_nm", "m_pros", "n_pros", "com", "cdr", "fq", "lf", "mdr", "nfq", "rfq", "fd",
        "debtors_summ",
    ] {
        assert!(body.get(section).is_some(), "missing section {section}");
    }
    assert_eq!(body["success"], "true");
    assert_eq!(body["current"]["TOTAL_PREMIUM"], "605000");
}

#[tokio::test]
async fn contacts_list_has_records_with_string_success() {
    let resp = app()
        .oneshot(form_request("/getAllContacts", &format!("ucode={SEED_UCODE}")))
        .await
        .unwrap();

    let body = body_json(resp).await;
    assert_eq!(body["success"], "true");
    assert_eq!(body["contacts"].as_array().unwrap().len(), 2);
    assert_eq!(body["contacts"][0]["MMC_ID"], "C100");
}

#[tokio::test]
async fn single_business_followup_echoes_the_requested_id() {
    let resp = app()
        .oneshot(form_request("/grtSingleBusinessFollowUp", "bus_id=88"))
        .await
        .unwrap();

    let body = body_json(resp).await;
    assert_eq!(body["business"]["MTB_SEQ"], "88");
}

#[tokio::test]
async fn renewal_list_echoes_the_requested_range() {
    let resp = app()
        .oneshot(form_request(
            "/getRenewalList",
            &format!("ucode={SEED_UCODE}&date_from=01-01-2025&date_to=31-01-2025"),
        ))
        .await
        .unwrap();

    let body = body_json(resp).await;
    assert_eq!(body["from"], "01-01-2025");
    assert_eq!(body["to"], "31-01-2025");
    assert_eq!(body["renew_list"][0]["POL_POLICY_NO"], "P300");
}

#[tokio::test]
async fn non_form_content_type_is_rejected() {
    let resp = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/apilogin")
                .header(http::header::CONTENT_TYPE, "application/json")
                .body(format!("username={SEED_USERNAME}&password={SEED_PASSWORD}"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
}

#[tokio::test]
async fn missing_form_field_is_rejected() {
    let resp = app()
        .oneshot(form_request("/apilogin", "username=jdoe"))
        .await
        .unwrap();

    assert_ne!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let resp = app()
        .oneshot(form_request("/getSomethingElse", "ucode=401"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
