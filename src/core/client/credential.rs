//! The single active credential of a session.

use std::fmt;

/// The authentication mode used for outgoing requests.
///
/// Exactly one mode is active at a time; authenticating again replaces it.
#[derive(Clone, Default, PartialEq, Eq)]
pub enum Credential {
    /// Requests are sent unauthenticated.
    #[default]
    None,
    /// HTTP basic auth with a username (or email) and password.
    Basic {
        /// Username or email address.
        username: String,
        /// Password for `username`.
        password: String,
    },
    /// OAuth bearer token obtained through the password grant.
    Bearer {
        /// Token sent in the `Authorization` header.
        access_token: String,
        /// Refresh token returned with the access token, if any.
        refresh_token: Option<String>,
    },
    /// Personal access token, sent as the basic-auth username.
    PersonalAccessToken {
        /// The token.
        token: String,
    },
}

impl Credential {
    /// Short name of the mode, safe to log.
    pub fn mode(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Basic { .. } => "basic",
            Self::Bearer { .. } => "bearer",
            Self::PersonalAccessToken { .. } => "pat",
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

// Secrets never reach logs or panic messages.
impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("None"),
            Self::Basic { username, .. } => f
                .debug_struct("Basic")
                .field("username", username)
                .field("password", &"<redacted>")
                .finish(),
            Self::Bearer { refresh_token, .. } => f
                .debug_struct("Bearer")
                .field("access_token", &"<redacted>")
                .field("refresh_token", &refresh_token.as_ref().map(|_| "<redacted>"))
                .finish(),
            Self::PersonalAccessToken { .. } => f
                .debug_struct("PersonalAccessToken")
                .field("token", &"<redacted>")
                .finish(),
        }
    }
}
