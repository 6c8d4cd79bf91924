use serde::{Deserialize, Serialize};

use crate::core::net::Form;

pub(crate) struct PasswordGrant<'a> {
    pub(crate) client_id: &'a str,
    pub(crate) client_secret: &'a str,
    pub(crate) username: &'a str,
    pub(crate) password: &'a str,
}

impl PasswordGrant<'_> {
    pub(crate) fn into_form(self) -> Form {
        vec![
            ("client_id", self.client_id.to_string()),
            ("client_secret", self.client_secret.to_string()),
            ("grant_type", "password".to_string()),
            ("username", self.username.to_string()),
            ("password", self.password.to_string()),
        ]
    }
}

#[derive(Deserialize)]
pub(crate) struct TokenResponse {
    pub(crate) access_token: Option<String>,
    pub(crate) refresh_token: Option<String>,
}

#[derive(Serialize)]
pub(crate) struct NewToken<'a> {
    pub(crate) description: &'a str,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreatedToken {
    pub(crate) access_token: Option<String>,
}
