//! Public client surface + builder.
//! Internals are split into `credential` (auth modes), `rate_limit` (header snapshot),
//! `transport` (the single request path) and `constants` (UA + defaults).

mod constants;
mod credential;
mod rate_limit;
mod transport;

pub use credential::Credential;
pub use rate_limit::RateLimit;

use crate::core::UpholdError;
use constants::{DEFAULT_API_VERSION, DEFAULT_BASE_PRODUCTION, DEFAULT_BASE_SANDBOX, USER_AGENT};
use reqwest::Client;
use std::env;
use std::time::Duration;
use url::Url;

/// OAuth application credentials used by the password grant.
#[derive(Clone, PartialEq, Eq)]
pub struct OAuthClient {
    pub client_id: String,
    pub client_secret: String,
}

impl std::fmt::Debug for OAuthClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OAuthClient")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

/// One authenticated session against the Uphold API.
///
/// The client owns its credential, the pending one-time passcode and the last
/// rate-limit snapshot. Every request method takes `&mut self`, so a session is
/// used by one caller at a time; wrap it in a lock to share it between tasks.
///
/// # Example
///
/// ```no_run
/// # use uphold_rs::UpholdClient;
/// # #[tokio::main]
/// # async fn main() -> Result<(), uphold_rs::UpholdError> {
/// let mut client = UpholdClient::builder().sandbox(true).build()?;
/// client.authenticate_with_token("my-personal-access-token");
///
/// let cards = client.list_cards().await?;
/// println!("{cards:#}");
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct UpholdClient {
    http: Client,
    base_url: Url,
    api_version: u32,
    sandbox: bool,
    oauth_client: Option<OAuthClient>,

    credential: Credential,
    otp: Option<String>,
    rate_limit: RateLimit,
}

impl UpholdClient {
    /// Create a new builder.
    pub fn builder() -> UpholdClientBuilder {
        UpholdClientBuilder::default()
    }

    /// Whether this client talks to the sandbox environment.
    pub fn is_sandbox(&self) -> bool {
        self.sandbox
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn api_version(&self) -> u32 {
        self.api_version
    }

    /// The rate-limit values reported by the most recent response.
    pub fn rate_limit(&self) -> &RateLimit {
        &self.rate_limit
    }

    /// The active authentication mode.
    pub fn credential(&self) -> &Credential {
        &self.credential
    }

    /// The refresh token from the last password grant, if that is the active mode.
    pub fn refresh_token(&self) -> Option<&str> {
        match &self.credential {
            Credential::Bearer { refresh_token, .. } => refresh_token.as_deref(),
            _ => None,
        }
    }

    /// Drop the active credential and any pending passcode; later requests go out unauthenticated.
    pub fn clear_credentials(&mut self) {
        self.credential = Credential::None;
        self.otp = None;
    }

    /* -------- internal accessors used by other modules -------- */

    pub(crate) fn oauth_client(&self) -> Option<&OAuthClient> {
        self.oauth_client.as_ref()
    }

    pub(crate) fn set_credential(&mut self, credential: Credential) {
        #[cfg(feature = "tracing")]
        tracing::debug!(mode = credential.mode(), "credential set");
        self.credential = credential;
    }

    pub(crate) fn set_otp(&mut self, code: String) {
        self.otp = Some(code);
    }

    /// Fail fast for sandbox-only operations, before anything reaches the network.
    pub(crate) fn require_sandbox(&self, operation: &'static str) -> Result<(), UpholdError> {
        if self.sandbox {
            Ok(())
        } else {
            Err(UpholdError::NotSupportedInProduction { operation })
        }
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct UpholdClientBuilder {
    sandbox: bool,
    base_url: Option<Url>,
    api_version: Option<u32>,
    user_agent: Option<String>,
    oauth_client: Option<OAuthClient>,
    personal_access_token: Option<String>,

    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl UpholdClientBuilder {
    /// Seed a builder from the environment.
    ///
    /// Reads `UPHOLD_SANDBOX` (`1`/`true`), `UPHOLD_BASE_URL`, `UPHOLD_API_VERSION`,
    /// `UPHOLD_CLIENT_ID` + `UPHOLD_CLIENT_SECRET` and `UPHOLD_PAT`. Unset variables
    /// leave the defaults in place.
    ///
    /// # Errors
    ///
    /// Returns an error if `UPHOLD_BASE_URL` is not a valid URL or `UPHOLD_API_VERSION`
    /// is not a non-negative integer.
    pub fn from_env() -> Result<Self, UpholdError> {
        let var = |name: &str| env::var(name).ok().filter(|v| !v.trim().is_empty());

        let mut builder = Self::default();
        if let Some(v) = var("UPHOLD_SANDBOX") {
            builder.sandbox = matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes");
        }
        if let Some(v) = var("UPHOLD_BASE_URL") {
            builder.base_url = Some(Url::parse(v.trim())?);
        }
        if let Some(v) = var("UPHOLD_API_VERSION") {
            let version = v.trim().parse::<u32>().map_err(|_| {
                UpholdError::Config(format!("UPHOLD_API_VERSION is not a valid version: {v}"))
            })?;
            builder.api_version = Some(version);
        }
        if let (Some(id), Some(secret)) = (var("UPHOLD_CLIENT_ID"), var("UPHOLD_CLIENT_SECRET")) {
            builder = builder.oauth_client(id, secret);
        }
        builder.personal_access_token = var("UPHOLD_PAT");
        Ok(builder)
    }

    /// Target the sandbox environment (`api-sandbox.uphold.com`). Default: production.
    ///
    /// Voucher operations are only available in sandbox mode.
    pub fn sandbox(mut self, sandbox: bool) -> Self {
        self.sandbox = sandbox;
        self
    }

    /// Override the API base (scheme + host), e.g. to point at a proxy or a mock server.
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Override the version used in the `/v{n}` path prefix. Default: `0`.
    pub fn api_version(mut self, version: u32) -> Self {
        self.api_version = Some(version);
        self
    }

    /// Override the User-Agent.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// OAuth application credentials for the password grant.
    pub fn oauth_client(
        mut self,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Self {
        self.oauth_client = Some(OAuthClient {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        });
        self
    }

    /// Start the session already authenticated with a personal access token.
    pub fn personal_access_token(mut self, token: impl Into<String>) -> Self {
        self.personal_access_token = Some(token.into());
        self
    }

    /// Set a global request timeout (overall). Default: none.
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns an error if the default base URL cannot be parsed or the HTTP client
    /// cannot be initialized.
    pub fn build(self) -> Result<UpholdClient, UpholdError> {
        let base_url = match self.base_url {
            Some(url) => url,
            None if self.sandbox => Url::parse(DEFAULT_BASE_SANDBOX)?,
            None => Url::parse(DEFAULT_BASE_PRODUCTION)?,
        };

        let mut httpb = reqwest::Client::builder()
            .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT));

        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        let http = httpb.build()?;

        Ok(UpholdClient {
            http,
            base_url,
            api_version: self.api_version.unwrap_or(DEFAULT_API_VERSION),
            sandbox: self.sandbox,
            oauth_client: self.oauth_client,
            credential: self
                .personal_access_token
                .map(|token| Credential::PersonalAccessToken { token })
                .unwrap_or_default(),
            otp: None,
            rate_limit: RateLimit::default(),
        })
    }
}
