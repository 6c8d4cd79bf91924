use crate::common::{client_for, setup_server};
use httpmock::Method::POST;
use serde_json::json;

#[tokio::test]
async fn create_contact_repeats_emails_and_addresses() {
    let server = setup_server();
    let create = server.mock(|when, then| {
        when.method(POST)
            .path("/v0/me/contacts")
            .header("content-type", "application/x-www-form-urlencoded")
            .body("firstName=Jane&lastName=Doe&company=Acme+Inc&emails=jane%40acme.test&emails=jd%40home.test&addresses=1BvBMSEYstWetqTFn5Au4m4GFg7xJaNVN2");
        then.status(200).json_body(json!({ "id": "c-9", "firstName": "Jane" }));
    });

    let mut client = client_for(&server);
    let contact = client
        .create_contact(
            "Jane",
            "Doe",
            "Acme Inc",
            &["jane@acme.test", "jd@home.test"],
            &["1BvBMSEYstWetqTFn5Au4m4GFg7xJaNVN2"],
        )
        .await
        .unwrap();

    create.assert();
    assert_eq!(contact["id"], "c-9");
}

#[tokio::test]
async fn create_contact_calls_do_not_share_sequences() {
    let server = setup_server();
    let first = server.mock(|when, then| {
        when.method(POST)
            .path("/v0/me/contacts")
            .body("firstName=Jane&lastName=Doe&company=Acme&emails=jane%40acme.test");
        then.status(200).json_body(json!({ "id": "c-1" }));
    });
    let second = server.mock(|when, then| {
        when.method(POST)
            .path("/v0/me/contacts")
            .body("firstName=John&lastName=Roe&company=Acme");
        then.status(200).json_body(json!({ "id": "c-2" }));
    });

    let mut client = client_for(&server);
    client
        .create_contact("Jane", "Doe", "Acme", &["jane@acme.test"], &[])
        .await
        .unwrap();
    let created = client
        .create_contact("John", "Roe", "Acme", &[], &[])
        .await
        .unwrap();

    first.assert();
    second.assert();
    assert_eq!(created["id"], "c-2");
}
