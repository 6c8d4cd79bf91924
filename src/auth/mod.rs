//! Authentication modes and personal access tokens.
//!
//! A session holds one credential at a time (see [`Credential`]). The password grant
//! talks to the server; basic and token modes only store what later requests send.

mod wire;

use serde_json::Value;

use crate::core::net::{Body, Verb};
use crate::core::{Credential, UpholdClient, UpholdError};
use wire::{CreatedToken, NewToken, PasswordGrant, TokenResponse};

impl UpholdClient {
    /// Log in with the OAuth password grant (`POST /oauth2/token`).
    ///
    /// On success the access token becomes the session's bearer credential and the
    /// decoded token response is returned as-is. The OAuth client id and secret must be
    /// configured on the builder.
    ///
    /// # Errors
    ///
    /// Returns [`UpholdError::Config`] without touching the network when no OAuth client
    /// is configured, [`UpholdError::Data`] when the response has no `access_token`,
    /// and any transport or API error otherwise.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, password), err))]
    pub async fn authenticate_with_password(
        &mut self,
        username: &str,
        password: &str,
    ) -> Result<Value, UpholdError> {
        let oauth = self.oauth_client().cloned().ok_or_else(|| {
            UpholdError::Config("OAuth client id/secret are required for the password grant".into())
        })?;

        let grant = PasswordGrant {
            client_id: &oauth.client_id,
            client_secret: &oauth.client_secret,
            username,
            password,
        };
        let data = self
            .post("/oauth2/token", Body::Form(grant.into_form()))
            .await?;

        let tokens: TokenResponse = serde_json::from_value(data.clone())
            .map_err(|e| UpholdError::Data(format!("unexpected token response: {e}")))?;
        let access_token = tokens
            .access_token
            .ok_or_else(|| UpholdError::Data("access_token missing from token response".into()))?;

        self.set_credential(Credential::Bearer {
            access_token,
            refresh_token: tokens.refresh_token,
        });
        Ok(data)
    }

    /// Use HTTP basic auth with `username` and `password` for subsequent requests.
    ///
    /// No request is made.
    pub fn authenticate_with_basic(
        &mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) {
        self.set_credential(Credential::Basic {
            username: username.into(),
            password: password.into(),
        });
    }

    /// Use a personal access token for subsequent requests.
    ///
    /// No request is made.
    pub fn authenticate_with_token(&mut self, token: impl Into<String>) {
        self.set_credential(Credential::PersonalAccessToken {
            token: token.into(),
        });
    }

    /// Attach a one-time passcode to the next request only.
    ///
    /// Use this after a call failed with [`UpholdError::VerificationRequired`], then repeat
    /// that call.
    pub fn set_verification_code(&mut self, code: impl Into<String>) {
        self.set_otp(code.into());
    }

    /// Create a personal access token (`POST /me/tokens`) and return it.
    ///
    /// # Errors
    ///
    /// Returns [`UpholdError::Data`] if the response carries no `accessToken`.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn create_personal_access_token(
        &mut self,
        description: &str,
    ) -> Result<String, UpholdError> {
        let body = Body::json(&NewToken { description })?;
        let data = self.post("/me/tokens", body).await?;

        let created: CreatedToken = serde_json::from_value(data)
            .map_err(|e| UpholdError::Data(format!("unexpected token response: {e}")))?;
        created
            .access_token
            .ok_or_else(|| UpholdError::Data("accessToken missing from token response".into()))
    }

    /// List the user's personal access tokens (`GET /me/tokens`).
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn list_personal_access_tokens(&mut self) -> Result<Value, UpholdError> {
        self.send(Verb::Get, "/me/tokens", Body::JsonContentType).await
    }
}
