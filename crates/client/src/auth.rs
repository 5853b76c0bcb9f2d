//! Authorization headers and credential selection.
//!
//! Responsibilities:
//! - Build `Authorization` header values for session keys and Basic auth.
//! - Decide, from the supplied credentials, whether a login round-trip is needed.
//!
//! Does NOT handle:
//! - The login HTTP call itself (see [`crate::endpoints::login`]).
//! - Token refresh or expiry; a header is used unchanged for the connection's lifetime.
//!
//! Invariants:
//! - Header values are held in `SecretString` and never appear in `Debug` output.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use secrecy::{ExposeSecret, SecretString};
use splunk_config::AuthStrategy;
use std::fmt;

use crate::error::{ClientError, Result};

/// Authorization scheme carried by an [`AuthHeader`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthScheme {
    /// `Authorization: Splunk <session key>`
    Splunk,
    /// `Authorization: Basic <base64(user:pass)>`
    Basic,
}

impl fmt::Display for AuthScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Splunk => write!(f, "Splunk"),
            Self::Basic => write!(f, "Basic"),
        }
    }
}

/// A ready-to-send `Authorization` header.
#[derive(Clone)]
pub struct AuthHeader {
    scheme: AuthScheme,
    credential: SecretString,
}

impl AuthHeader {
    /// Wrap a pre-established session key. No network call.
    pub fn from_key(key: SecretString) -> Self {
        Self {
            scheme: AuthScheme::Splunk,
            credential: key,
        }
    }

    /// Build a Basic header from `username:password`.
    pub fn basic(username: &str, password: &SecretString) -> Self {
        let encoded = STANDARD.encode(format!("{}:{}", username, password.expose_secret()));
        Self {
            scheme: AuthScheme::Basic,
            credential: SecretString::new(encoded.into()),
        }
    }

    /// Build a header from whichever credentials are present.
    ///
    /// A key wins over a username/password pair. Supplying neither is a
    /// configuration error.
    pub fn from_parts(
        key: Option<SecretString>,
        username: Option<&str>,
        password: Option<&SecretString>,
    ) -> Result<Self> {
        match (key, username, password) {
            (Some(key), _, _) => Ok(Self::from_key(key)),
            (None, Some(username), Some(password)) => Ok(Self::basic(username, password)),
            _ => Err(ClientError::Config(
                "either a session key or a username and password is required".to_string(),
            )),
        }
    }

    pub fn scheme(&self) -> AuthScheme {
        self.scheme
    }

    /// Full header value, e.g. `Splunk abc123`.
    pub(crate) fn value(&self) -> String {
        format!("{} {}", self.scheme, self.credential.expose_secret())
    }
}

impl fmt::Debug for AuthHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AuthHeader({} <redacted>)", self.scheme)
    }
}

/// Credentials a connection can be opened with.
#[derive(Clone)]
pub enum Credentials {
    /// Pre-established session key.
    SessionKey(SecretString),
    /// Username/password exchanged for a session key at the login endpoint.
    Login {
        username: String,
        password: SecretString,
    },
    /// Username/password sent as HTTP Basic on every request.
    Basic {
        username: String,
        password: SecretString,
    },
}

impl Credentials {
    /// Whether opening a connection with these credentials calls the login endpoint.
    pub fn requires_login(&self) -> bool {
        matches!(self, Self::Login { .. })
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SessionKey(_) => write!(f, "SessionKey(<redacted>)"),
            Self::Login { username, .. } => write!(f, "Login({username}, <redacted>)"),
            Self::Basic { username, .. } => write!(f, "Basic({username}, <redacted>)"),
        }
    }
}

/// A single string is a pre-established session key.
impl From<&str> for Credentials {
    fn from(key: &str) -> Self {
        Self::SessionKey(SecretString::new(key.to_string().into()))
    }
}

/// A `(username, password)` pair triggers a login.
impl From<(&str, &str)> for Credentials {
    fn from((username, password): (&str, &str)) -> Self {
        Self::Login {
            username: username.to_string(),
            password: SecretString::new(password.to_string().into()),
        }
    }
}

impl From<&AuthStrategy> for Credentials {
    fn from(strategy: &AuthStrategy) -> Self {
        match strategy {
            AuthStrategy::SessionKey { key } => Self::SessionKey(key.clone()),
            AuthStrategy::SessionToken { username, password } => Self::Login {
                username: username.clone(),
                password: password.clone(),
            },
            AuthStrategy::Basic { username, password } => Self::Basic {
                username: username.clone(),
                password: password.clone(),
            },
        }
    }
}

/// Resolve credentials into a header, logging in when required.
pub async fn authenticate(
    http: &reqwest::Client,
    base_url: &str,
    credentials: &Credentials,
) -> Result<AuthHeader> {
    match credentials {
        Credentials::SessionKey(key) => Ok(AuthHeader::from_key(key.clone())),
        Credentials::Basic { username, password } => Ok(AuthHeader::basic(username, password)),
        Credentials::Login { username, password } => {
            let key = crate::endpoints::login(http, base_url, username, password).await?;
            Ok(AuthHeader::from_key(key))
        }
    }
}
