use crate::common::{CARD_ID, TRANSACTION_ID, client_for, setup_server, transaction_json};
use httpmock::Method::POST;

#[tokio::test]
async fn cancel_posts_to_the_cancel_sub_resource() {
    let server = setup_server();
    let cancel = server.mock(|when, then| {
        when.method(POST)
            .path(format!("/v0/me/cards/{CARD_ID}/transactions/{TRANSACTION_ID}/cancel"));
        then.status(200).json_body(transaction_json());
    });

    let mut client = client_for(&server);
    let txn = client
        .cancel_transaction(CARD_ID, TRANSACTION_ID)
        .await
        .unwrap();

    cancel.assert();
    assert_eq!(txn, transaction_json());
}

#[tokio::test]
async fn resend_posts_to_the_resend_sub_resource() {
    let server = setup_server();
    let resend = server.mock(|when, then| {
        when.method(POST)
            .path(format!("/v0/me/cards/{CARD_ID}/transactions/{TRANSACTION_ID}/resend"));
        then.status(200).json_body(transaction_json());
    });

    let mut client = client_for(&server);
    let txn = client
        .resend_transaction_notice(CARD_ID, TRANSACTION_ID)
        .await
        .unwrap();

    resend.assert();
    assert_eq!(txn["id"], TRANSACTION_ID);
}
