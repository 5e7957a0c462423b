/// Session authority
///
/// One active session per account. A token is a random positive 64-bit
/// integer drawn from the operating system's CSPRNG; zero is never issued
/// and never accepted.

use chrono::{DateTime, Duration, Utc};
use rand::{rngs::OsRng, Rng};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque session token handed out by a successful login
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionToken(u64);

impl SessionToken {
    /// Draw a fresh token in `1..=u64::MAX`
    pub fn generate() -> Self {
        SessionToken(OsRng.gen_range(1..=u64::MAX))
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Login state of one account
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SessionState {
    #[default]
    LoggedOut,
    LoggedIn {
        token: SessionToken,
        issued_at: DateTime<Utc>,
    },
}

impl SessionState {
    /// Start a new session, replacing any existing one.
    pub fn issue(&mut self) -> SessionToken {
        let token = SessionToken::generate();
        *self = SessionState::LoggedIn {
            token,
            issued_at: Utc::now(),
        };
        token
    }

    /// True only when logged in with exactly this token.
    pub fn validate(&self, presented: u64) -> bool {
        match self {
            SessionState::LoggedIn { token, .. } => presented > 0 && token.value() == presented,
            SessionState::LoggedOut => false,
        }
    }

    /// Log out. Idempotent; returns how long the ended session lasted, if any.
    pub fn clear(&mut self) -> Option<Duration> {
        match std::mem::take(self) {
            SessionState::LoggedIn { issued_at, .. } => Some(Utc::now() - issued_at),
            SessionState::LoggedOut => None,
        }
    }

    pub fn is_logged_in(&self) -> bool {
        matches!(self, SessionState::LoggedIn { .. })
    }
}
