/// PII redaction
///
/// Produces the public projection of an account: no id, no credential digest,
/// no session state.

use crate::{
    account::Account,
    error::MediaResult,
    media::{MediaItem, MediaList},
};
use serde::{Deserialize, Serialize};

/// Account data safe to expose to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicAccount {
    pub username: String,
    pub email: String,
    pub saved_media: Vec<MediaItem>,
    pub saved_lists: Vec<MediaList>,
}

/// Strip identifying and credential fields from an account
pub fn redact(account: &Account) -> PublicAccount {
    PublicAccount {
        username: account.username.clone(),
        email: account.email.clone(),
        saved_media: account.saved_media.list().to_vec(),
        saved_lists: account.saved_lists.clone(),
    }
}

/// Redact and serialize to JSON
pub fn redact_to_json(account: &Account) -> MediaResult<String> {
    Ok(serde_json::to_string(&redact(account))?)
}
