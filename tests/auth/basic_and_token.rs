use crate::common::{ALICE_BASIC, PAT_BASIC, builder_for, client_for, setup_server};
use httpmock::Method::GET;
use serde_json::json;
use uphold_rs::Credential;

#[tokio::test]
async fn personal_access_token_is_sent_as_basic_principal() {
    let server = setup_server();
    let cards = server.mock(|when, then| {
        when.method(GET)
            .path("/v0/me/cards")
            .header("authorization", PAT_BASIC);
        then.status(200).json_body(json!([]));
    });

    let mut client = client_for(&server);
    client.authenticate_with_token("pat-123");
    client.list_cards().await.unwrap();

    cards.assert();
}

#[tokio::test]
async fn personal_access_token_can_be_set_on_the_builder() {
    let server = setup_server();
    let cards = server.mock(|when, then| {
        when.method(GET)
            .path("/v0/me/cards")
            .header("authorization", PAT_BASIC);
        then.status(200).json_body(json!([]));
    });

    let mut client = builder_for(&server)
        .personal_access_token("pat-123")
        .build()
        .unwrap();
    client.list_cards().await.unwrap();

    cards.assert();
}

#[tokio::test]
async fn basic_credentials_are_sent_without_a_network_login() {
    let server = setup_server();
    let me = server.mock(|when, then| {
        when.method(GET)
            .path("/v0/me")
            .header("authorization", ALICE_BASIC);
        then.status(200).json_body(json!({ "username": "alice" }));
    });

    let mut client = client_for(&server);
    client.authenticate_with_basic("alice", "s3cret");
    me.assert_hits(0);

    let profile = client.get_profile().await.unwrap();
    me.assert();
    assert_eq!(profile["username"], "alice");
}

#[tokio::test]
async fn latest_credential_replaces_the_previous_one() {
    let server = setup_server();
    let with_basic = server.mock(|when, then| {
        when.method(GET)
            .path("/v0/me/phones")
            .header("authorization", ALICE_BASIC);
        then.status(200).json_body(json!([]));
    });
    let with_pat = server.mock(|when, then| {
        when.method(GET)
            .path("/v0/me/transactions")
            .header("authorization", PAT_BASIC);
        then.status(200).json_body(json!([]));
    });

    let mut client = client_for(&server);
    client.authenticate_with_token("pat-123");
    client.authenticate_with_basic("alice", "s3cret");
    assert_eq!(client.credential().mode(), "basic");
    client.list_phones().await.unwrap();

    client.authenticate_with_token("pat-123");
    assert!(matches!(
        client.credential(),
        Credential::PersonalAccessToken { .. }
    ));
    client.list_transactions().await.unwrap();

    with_basic.assert();
    with_pat.assert();
}

#[tokio::test]
async fn cleared_credentials_send_no_authorization() {
    let server = setup_server();
    let public = server.mock(|when, then| {
        when.method(GET)
            .path("/v0/reserve/statistics")
            .header_missing("authorization");
        then.status(200).json_body(json!([]));
    });

    let mut client = client_for(&server);
    client.authenticate_with_token("pat-123");
    client.clear_credentials();
    client.get_reserve_statistics().await.unwrap();

    public.assert();
}

#[test]
fn credential_debug_redacts_secrets() {
    let rendered = format!(
        "{:?} {:?} {:?}",
        Credential::Basic {
            username: "alice".into(),
            password: "s3cret".into()
        },
        Credential::Bearer {
            access_token: "tok-abc".into(),
            refresh_token: Some("ref-1".into())
        },
        Credential::PersonalAccessToken {
            token: "pat-123".into()
        },
    );
    assert!(rendered.contains("alice"));
    for secret in ["s3cret", "tok-abc", "ref-1", "pat-123"] {
        assert!(!rendered.contains(secret), "{secret} leaked in {rendered}");
    }
}
