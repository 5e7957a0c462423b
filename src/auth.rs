/// Authentication extractor for account-scoped routes
use crate::{
    account::{AccountHandle, AccountManager, AuthenticatedAccount},
    api::middleware::extract_session_token,
    context::AppContext,
    error::{MediaError, MediaResult},
};
use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use std::collections::HashMap;

/// Authenticated context for `/users/:username/...` routes.
///
/// The gate runs on request parts, before any body is read, and releases the
/// account lock once the token checks out. Handlers call [`AuthContext::lock`]
/// after their body has arrived; that re-checks the token under the lock.
#[derive(Debug, Clone)]
pub struct AuthContext {
    pub username: String,
    token: u64,
    handle: AccountHandle,
}

impl AuthContext {
    /// Lock the account for the rest of the handler, re-validating the session
    pub async fn lock(&self) -> MediaResult<AuthenticatedAccount> {
        AccountManager::lock_validated(self.handle.clone(), self.token).await
    }
}

#[async_trait]
impl FromRequestParts<AppContext> for AuthContext {
    type Rejection = MediaError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppContext,
    ) -> Result<Self, Self::Rejection> {
        // Malformed or missing token is rejected before touching any account
        let token = extract_session_token(&parts.headers)?;

        let Path(params) = Path::<HashMap<String, String>>::from_request_parts(parts, state)
            .await
            .map_err(|e| MediaError::Validation(format!("Invalid path: {}", e)))?;
        let username = params
            .get("username")
            .cloned()
            .ok_or_else(|| MediaError::Validation("Missing username".to_string()))?;

        let handle = state.account_manager.resolve(&username).await?;
        drop(AccountManager::lock_validated(handle.clone(), token).await?);

        Ok(AuthContext {
            username,
            token,
            handle,
        })
    }
}
