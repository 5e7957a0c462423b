/// Account management system
///
/// Handles account provisioning, credential checks, sessions, and the
/// per-account media collection.

mod manager;
pub mod provision;
mod repository;
mod session;

pub use manager::{AccountManager, AuthenticatedAccount};
pub use repository::{AccountHandle, AccountRepository, MemoryAccountRepository};
pub use session::{SessionState, SessionToken};

use crate::crypto;
use crate::media::{MediaCollection, MediaList};
use serde::{Deserialize, Serialize};

/// Account record
#[derive(Debug, Clone)]
pub struct Account {
    /// Globally unique, immutable
    pub id: u64,
    /// Globally unique, immutable external lookup key
    pub username: String,
    pub email: String,
    /// hex(sha256(password || hex(id)))
    pub credential_digest: String,
    pub session: SessionState,
    pub saved_media: MediaCollection,
    pub saved_lists: Vec<MediaList>,
}

impl Account {
    /// Build a logged-out account with no saved media
    pub fn new(id: u64, username: &str, email: &str, password: &str) -> Self {
        Self {
            id,
            username: username.to_string(),
            email: email.to_string(),
            credential_digest: crypto::hash_password(password, id),
            session: SessionState::LoggedOut,
            saved_media: MediaCollection::new(),
            saved_lists: Vec::new(),
        }
    }

    pub fn check_password(&self, password: &str) -> bool {
        crypto::verify_password(password, self.id, &self.credential_digest)
    }
}

/// Account provisioning record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAccount {
    pub id: u64,
    pub username: String,
    #[serde(default)]
    pub email: String,
    pub password: String,
}

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Login response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: SessionToken,
}

/// Email read/update body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailBody {
    pub email: String,
}

/// Password change request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub old_password: String,
    pub new_password: String,
}
