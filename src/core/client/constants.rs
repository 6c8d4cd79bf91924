//! Centralized constants for default endpoints, headers and UA.

/// Identifies this SDK to the API.
pub(crate) const USER_AGENT: &str = concat!("uphold-rs/", env!("CARGO_PKG_VERSION"));

/// Production API base.
pub(crate) const DEFAULT_BASE_PRODUCTION: &str = "https://api.uphold.com";

/// Sandbox API base.
pub(crate) const DEFAULT_BASE_SANDBOX: &str = "https://api-sandbox.uphold.com";

/// API version used for the `/v{n}` path prefix.
pub(crate) const DEFAULT_API_VERSION: u32 = 0;

/// Password sent alongside a personal access token used as the basic-auth principal.
pub(crate) const PAT_BASIC_PASSWORD: &str = "X-OAuth-Basic";

/// Carries the one-time passcode on requests, and signals that one is required on responses.
pub(crate) const OTP_HEADER: &str = "X-Bitreserve-OTP";

pub(crate) const RATE_LIMIT_LIMIT_HEADER: &str = "X-RateLimit-Limit";
pub(crate) const RATE_LIMIT_REMAINING_HEADER: &str = "X-RateLimit-Remaining";
pub(crate) const RATE_LIMIT_RESET_HEADER: &str = "X-RateLimit-Reset";

pub(crate) const CONTENT_TYPE_FORM: &str = "application/x-www-form-urlencoded";
pub(crate) const CONTENT_TYPE_JSON: &str = "application/json";
