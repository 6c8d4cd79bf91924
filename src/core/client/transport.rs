//! The single request path shared by every API operation.

use super::constants::{CONTENT_TYPE_FORM, CONTENT_TYPE_JSON, OTP_HEADER, PAT_BASIC_PASSWORD};
use super::{Credential, RateLimit};
use crate::core::UpholdError;
use crate::core::net::{Body, Verb, versioned_path};
use reqwest::header::CONTENT_TYPE;
use reqwest::{RequestBuilder, StatusCode};
use serde_json::Value;
use url::Url;

impl super::UpholdClient {
    pub(crate) async fn get(&mut self, path: &str) -> Result<Value, UpholdError> {
        self.send(Verb::Get, path, Body::None).await
    }

    pub(crate) async fn post(&mut self, path: &str, body: Body) -> Result<Value, UpholdError> {
        self.send(Verb::Post, path, body).await
    }

    /// Resolve `path` (unversioned, e.g. `/me/cards`) against the base URL.
    pub(crate) fn endpoint(&self, path: &str) -> Result<Url, UpholdError> {
        let base = self.base_url.as_str().trim_end_matches('/');
        Ok(Url::parse(&format!(
            "{base}{}",
            versioned_path(self.api_version, path)
        ))?)
    }

    pub(crate) async fn send(
        &mut self,
        verb: Verb,
        path: &str,
        body: Body,
    ) -> Result<Value, UpholdError> {
        let url = self.endpoint(path)?;

        #[cfg(feature = "tracing")]
        tracing::debug!(method = ?verb, %url, auth = self.credential.mode(), "sending request");

        let mut req = match verb {
            Verb::Get => self.http.get(url.clone()),
            Verb::Post => self.http.post(url.clone()),
        };
        let content_type = if body.is_json() {
            CONTENT_TYPE_JSON
        } else {
            CONTENT_TYPE_FORM
        };
        req = req.header(CONTENT_TYPE, content_type);
        req = self.authorize(req);

        // The passcode is consumed by this request whatever its outcome.
        if let Some(code) = self.otp.take() {
            #[cfg(feature = "tracing")]
            tracing::debug!("attaching one-time passcode");
            req = req.header(OTP_HEADER, code);
        }

        req = match body {
            Body::None | Body::JsonContentType => req,
            Body::Form(pairs) => req.form(&pairs),
            Body::Json(doc) => req.json(&doc),
        };

        let resp = req.send().await?;
        let status = resp.status();

        #[cfg(feature = "tracing")]
        tracing::debug!(status = status.as_u16(), %url, "response received");

        self.rate_limit = RateLimit::from_headers(resp.headers());

        if resp.headers().contains_key(OTP_HEADER) {
            #[cfg(feature = "tracing")]
            tracing::warn!(%url, "server requires a one-time passcode");
            return Err(UpholdError::VerificationRequired);
        }

        if status == StatusCode::TOO_MANY_REQUESTS {
            #[cfg(feature = "tracing")]
            tracing::warn!(
                %url,
                limit = %self.rate_limit.limit,
                reset = %self.rate_limit.reset,
                "rate limit exceeded"
            );
            return Err(UpholdError::RateLimited {
                rate_limit: self.rate_limit.clone(),
                headers: resp.headers().clone(),
            });
        }

        let text = resp.text().await?;

        if !status.is_success() {
            let body = serde_json::from_str(&text).unwrap_or(Value::String(text));
            return Err(UpholdError::Api {
                status: status.as_u16(),
                url: url.to_string(),
                body,
            });
        }

        serde_json::from_str(&text).map_err(|source| UpholdError::Decode {
            url: url.to_string(),
            source,
        })
    }

    fn authorize(&self, req: RequestBuilder) -> RequestBuilder {
        match &self.credential {
            Credential::None => req,
            Credential::PersonalAccessToken { token } => {
                req.basic_auth(token, Some(PAT_BASIC_PASSWORD))
            }
            Credential::Basic { username, password } => req.basic_auth(username, Some(password)),
            Credential::Bearer { access_token, .. } => req.bearer_auth(access_token),
        }
    }
}
