use crate::common::{PAT_BASIC, client_for, setup_server};
use httpmock::Method::{GET, POST};
use serde_json::json;
use uphold_rs::UpholdError;

#[tokio::test]
async fn create_token_sends_json_and_returns_the_access_token() {
    let server = setup_server();
    let create = server.mock(|when, then| {
        when.method(POST)
            .path("/v0/me/tokens")
            .header("content-type", "application/json")
            .json_body(json!({ "description": "laptop" }));
        then.status(200).json_body(json!({
            "accessToken": "new-pat",
            "description": "laptop",
            "expiresIn": null
        }));
    });

    let mut client = client_for(&server);
    client.authenticate_with_basic("alice", "s3cret");
    let token = client.create_personal_access_token("laptop").await.unwrap();

    create.assert();
    assert_eq!(token, "new-pat");
}

#[tokio::test]
async fn create_token_without_access_token_is_a_data_error() {
    let server = setup_server();
    let _create = server.mock(|when, then| {
        when.method(POST).path("/v0/me/tokens");
        then.status(200).json_body(json!({ "description": "laptop" }));
    });

    let mut client = client_for(&server);
    let err = client
        .create_personal_access_token("laptop")
        .await
        .unwrap_err();
    assert!(matches!(err, UpholdError::Data(_)), "got {err:?}");
}

#[tokio::test]
async fn list_tokens_uses_json_content_type() {
    let server = setup_server();
    let body = json!([{ "description": "laptop" }, { "description": "ci" }]);
    let list = server.mock(|when, then| {
        when.method(GET)
            .path("/v0/me/tokens")
            .header("content-type", "application/json")
            .header("authorization", PAT_BASIC);
        then.status(200).json_body(body.clone());
    });

    let mut client = client_for(&server);
    client.authenticate_with_token("pat-123");
    let tokens = client.list_personal_access_tokens().await.unwrap();

    list.assert();
    assert_eq!(tokens, body);
}

#[tokio::test]
async fn json_content_type_does_not_leak_into_later_requests() {
    let server = setup_server();
    let _list = server.mock(|when, then| {
        when.method(GET).path("/v0/me/tokens");
        then.status(200).json_body(json!([]));
    });
    let cards = server.mock(|when, then| {
        when.method(GET)
            .path("/v0/me/cards")
            .header("content-type", "application/x-www-form-urlencoded");
        then.status(200).json_body(json!([]));
    });

    let mut client = client_for(&server);
    client.list_personal_access_tokens().await.unwrap();
    client.list_cards().await.unwrap();

    cards.assert();
}
