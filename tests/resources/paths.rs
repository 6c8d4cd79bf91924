use crate::common::{builder_for, setup_server};
use httpmock::Method::GET;
use serde_json::json;
use url::Url;

#[tokio::test]
async fn resource_paths_carry_the_configured_version() {
    let server = setup_server();
    let v1 = server.mock(|when, then| {
        when.method(GET).path("/v1/me/cards");
        then.status(200).json_body(json!([]));
    });

    let mut client = builder_for(&server).api_version(1).build().unwrap();
    client.list_cards().await.unwrap();

    v1.assert();
}

#[tokio::test]
async fn base_url_path_prefix_is_kept() {
    let server = setup_server();
    let proxied = server.mock(|when, then| {
        when.method(GET).path("/proxy/v0/me/cards");
        then.status(200).json_body(json!([]));
    });

    let base = Url::parse(&format!("{}/proxy/", server.base_url())).unwrap();
    let mut client = uphold_rs::UpholdClient::builder()
        .base_url(base)
        .build()
        .unwrap();
    client.list_cards().await.unwrap();

    proxied.assert();
}

#[tokio::test]
async fn requests_identify_the_sdk() {
    let server = setup_server();
    let me = server.mock(|when, then| {
        when.method(GET)
            .path("/v0/me")
            .header("user-agent", concat!("uphold-rs/", env!("CARGO_PKG_VERSION")));
        then.status(200).json_body(json!({}));
    });

    let mut client = builder_for(&server).build().unwrap();
    client.get_profile().await.unwrap();
    me.assert();

    let custom = server.mock(|when, then| {
        when.method(GET)
            .path("/v0/me/phones")
            .header("user-agent", "my-app/2.0");
        then.status(200).json_body(json!([]));
    });
    let mut client = builder_for(&server).user_agent("my-app/2.0").build().unwrap();
    client.list_phones().await.unwrap();
    custom.assert();
}
