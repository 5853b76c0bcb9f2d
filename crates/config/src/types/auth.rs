//! Authentication types for Splunk connections.
//!
//! Responsibilities:
//! - Define the ways a connection can authenticate (login, session key, basic).
//!
//! Does NOT handle:
//! - Actual authentication flow or token exchange (see client crate).
//!
//! Invariants:
//! - All secret values use `secrecy::SecretString` to prevent accidental logging.

use secrecy::SecretString;

/// Strategy for authenticating with Splunk.
#[derive(Debug, Clone)]
pub enum AuthStrategy {
    /// Username and password exchanged once for a session key via the login endpoint.
    SessionToken {
        username: String,
        password: SecretString,
    },
    /// A session key obtained out of band. No login call is made.
    SessionKey { key: SecretString },
    /// Username and password sent as HTTP Basic credentials on every request.
    Basic {
        username: String,
        password: SecretString,
    },
}

impl AuthStrategy {
    /// Whether opening a connection with this strategy requires a login round trip.
    pub fn requires_login(&self) -> bool {
        matches!(self, Self::SessionToken { .. })
    }
}

/// Authentication configuration.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// The authentication strategy to use.
    pub strategy: AuthStrategy,
}
