//! Every facade operation exercised end-to-end against the live mock
//! server, plus the session lifecycle driven by decoded login results.
//!
//! The server is started once on an ephemeral port; each test block then
//! drives `AgencyClient` over real HTTP.

use agency_core::{AgencyClient, ApiError, Identity, Session, SessionStore};
use mock_server::{SEED_BRN, SEED_PASSWORD, SEED_UCODE, SEED_USERNAME};

/// Start the mock server on a random port and return a client bound to it.
fn start_server() -> AgencyClient {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener).await
        })
        .unwrap();
    });

    AgencyClient::new(&format!("http://{addr}"))
}

#[tokio::test]
async fn login_and_session_lifecycle() {
    let client = start_server();
    let store = SessionStore::new();

    // Rejected credentials decode as a normal value with success=0.
    let rejected = client.login(SEED_USERNAME, "wrong").await.unwrap();
    assert_eq!(rejected.success, 0);
    assert_eq!(rejected.message, "invalid credentials");
    assert!(!store.is_logged_in());

    // Accepted credentials populate the session from the decoded user.
    let accepted = client.login(SEED_USERNAME, SEED_PASSWORD).await.unwrap();
    assert_eq!(accepted.success, 1);
    store.log_in(Identity::from(&accepted.user));

    assert!(store.is_logged_in());
    assert_eq!(store.ucode().as_deref(), Some(SEED_UCODE));
    assert_eq!(store.brn().as_deref(), Some(SEED_BRN));

    store.log_out();
    assert_eq!(store.current(), Session::LoggedOut);
    assert_eq!(store.ucode(), None);
}

#[tokio::test]
async fn dashboard_round_trip() {
    let client = start_server();

    let dashboard = client.fetch_dashboard(SEED_BRN, SEED_UCODE).await.unwrap();
    assert_eq!(dashboard.success, "true");
    assert_eq!(dashboard.current.total_premium, "605000");
    assert_eq!(dashboard.target.tot_target, "850000");
    assert_eq!(dashboard.ren_m.ren_prem, "120000");
    assert_eq!(
        dashboard.ren_nm.as_ref().and_then(|s| s.ren_prem.as_deref()),
        Some("42000")
    );
    assert_eq!(dashboard.debtors_summ.days_total, "90000");
}

#[tokio::test]
async fn contact_screens_round_trip() {
    let client = start_server();

    let contacts = client.fetch_all_contacts(SEED_UCODE).await.unwrap();
    assert_eq!(contacts.success, "true");
    assert_eq!(contacts.contacts.len(), 2);
    let first = &contacts.contacts[0];
    assert_eq!(first.mmc_id, "C100");
    assert_eq!(first.mmc_surname, "Doe");
    // The sparse second record leaves its optional columns empty.
    assert_eq!(contacts.contacts[1].mmc_email, None);

    let detail = client.fetch_single_contact(&first.mmc_id).await.unwrap();
    assert_eq!(detail.contactval.mmc_id, "C100");
    assert_eq!(detail.contactref, vec!["REF-1", "REF-2"]);
    assert_eq!(detail.contactinfo.mtb_pol_no.as_deref(), Some("P100"));
}

#[tokio::test]
async fn followup_screens_round_trip() {
    let client = start_server();

    let followups = client.fetch_new_business_followups(SEED_UCODE).await.unwrap();
    assert_eq!(followups.user_code, SEED_UCODE);
    assert_eq!(followups.business.len(), 2);
    assert_eq!(followups.business[0].mtb_seq, "77");

    let detail = client
        .fetch_single_new_business_followup(&followups.business[0].mtb_seq)
        .await
        .unwrap();
    assert_eq!(detail.business.mtb_seq, "77");
    assert_eq!(detail.business.contact, "Jane Doe");
}

#[tokio::test]
async fn renewal_screens_round_trip() {
    let client = start_server();

    let followups = client.fetch_renewal_followups(SEED_UCODE).await.unwrap();
    assert_eq!(followups.business[0].mtb_pol_no.as_deref(), Some("P200"));

    let list = client
        .fetch_renewal_list(SEED_UCODE, "01-01-2025", "31-01-2025")
        .await
        .unwrap();
    assert_eq!(list.from, "01-01-2025");
    assert_eq!(list.to, "31-01-2025");
    assert_eq!(list.renew_list[0].pol_policy_no, "P300");

    let vehicle = list.renew_list[0].risk.as_deref().unwrap();
    let policy = client
        .fetch_single_renewal_policy(SEED_UCODE, vehicle)
        .await
        .unwrap();
    assert_eq!(policy.veh_details.veh_no, vehicle);
    assert_eq!(policy.veh_details.pol_sum_insured, "1000000");
}

#[tokio::test]
async fn finalized_business_screens_round_trip() {
    let client = start_server();

    let finalized = client.fetch_finalized_business(SEED_UCODE).await.unwrap();
    assert_eq!(finalized.bus_finalised[0].mtq_quo_seq, "QUO144");

    let detail = client
        .fetch_single_finalized_business(SEED_UCODE, &finalized.bus_finalised[0].mtq_quo_seq)
        .await
        .unwrap();
    assert_eq!(detail.bus_finalised.mtq_tot_prm, "52000");
    assert_eq!(detail.bus_finalised.prd_description, "Private Car Comprehensive");
}

#[tokio::test]
async fn concurrent_calls_complete_independently() {
    let client = start_server();

    let (contacts, dashboard, renewals) = tokio::join!(
        client.fetch_all_contacts(SEED_UCODE),
        client.fetch_dashboard(SEED_BRN, SEED_UCODE),
        client.fetch_renewal_followups(SEED_UCODE),
    );
    assert_eq!(contacts.unwrap().contacts.len(), 2);
    assert_eq!(dashboard.unwrap().success, "true");
    assert_eq!(renewals.unwrap().business.len(), 1);
}

#[tokio::test]
async fn connection_failure_is_a_transport_error() {
    // Grab a port and close it again so nothing is listening.
    let addr = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap()
    };
    let client = AgencyClient::new(&format!("http://{addr}"));

    let err = client.login("jdoe", "secret").await.unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)));
}
