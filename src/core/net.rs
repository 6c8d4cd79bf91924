//! Request shapes shared by the transport and the resource modules.

use crate::core::UpholdError;
use serde::Serialize;

/// Paths under this prefix are served without the `/v{n}` version segment.
const UNVERSIONED_PREFIX: &str = "/oauth2";

/// Prefix `path` with `/v{version}`, except for OAuth endpoints.
pub(crate) fn versioned_path(version: u32, path: &str) -> String {
    if path.starts_with(UNVERSIONED_PREFIX) {
        path.to_string()
    } else {
        format!("/v{version}{path}")
    }
}

/// Ordered form-url-encoded pairs. Keys may repeat.
pub(crate) type Form = Vec<(&'static str, String)>;

/// Request payload and the content type it is sent with.
#[derive(Debug)]
pub(crate) enum Body {
    /// No payload; sent with the form content type like the rest of the API.
    None,
    /// Form-url-encoded pairs.
    Form(Form),
    /// A JSON document; also selects the JSON content type.
    Json(serde_json::Value),
    /// No payload, but the request advertises the JSON content type.
    JsonContentType,
}

impl Body {
    pub(crate) fn json<T: Serialize>(value: &T) -> Result<Self, UpholdError> {
        serde_json::to_value(value)
            .map(Body::Json)
            .map_err(|e| UpholdError::Data(format!("failed to encode request body: {e}")))
    }

    pub(crate) fn is_json(&self) -> bool {
        matches!(self, Body::Json(_) | Body::JsonContentType)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Verb {
    Get,
    Post,
}
