/// Account manager implementation
///
/// The only mutator of account state. Every operation that touches an
/// account holds that account's lock for its whole read-modify-write.

use crate::{
    account::{
        Account, AccountHandle, AccountRepository, MemoryAccountRepository, NewAccount,
        SessionToken,
    },
    crypto,
    error::{MediaError, MediaResult},
    privacy,
};
use std::sync::Arc;
use tokio::sync::OwnedMutexGuard;

/// An account whose session has been validated, locked for the caller
pub type AuthenticatedAccount = OwnedMutexGuard<Account>;

/// Account manager service
pub struct AccountManager {
    repo: Arc<dyn AccountRepository>,
}

impl AccountManager {
    /// Create a new account manager over the given repository
    pub fn new(repo: Arc<dyn AccountRepository>) -> Self {
        Self { repo }
    }

    /// Account manager backed by an empty in-memory repository
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryAccountRepository::new()))
    }

    /// Provision a new account
    pub async fn create_account(&self, new: NewAccount) -> MediaResult<AccountHandle> {
        if new.username.trim().is_empty() {
            return Err(MediaError::Validation("Username cannot be empty".to_string()));
        }
        if new.password.is_empty() {
            return Err(MediaError::Validation("Password cannot be empty".to_string()));
        }

        let account = Account::new(new.id, &new.username, &new.email, &new.password);
        self.repo.insert(account).await
    }

    /// Find account by username. Absence is not an error.
    pub async fn find_by_username(&self, username: &str) -> MediaResult<Option<AccountHandle>> {
        self.repo.get_by_username(username).await
    }

    /// Find account by id
    pub async fn find_by_id(&self, id: u64) -> MediaResult<Option<AccountHandle>> {
        self.repo.get_by_id(id).await
    }

    /// Number of provisioned accounts
    pub async fn account_count(&self) -> MediaResult<usize> {
        self.repo.count().await
    }

    /// Verify credentials and start a session.
    ///
    /// Unknown username and wrong password produce the same error.
    pub async fn login(&self, username: &str, password: &str) -> MediaResult<SessionToken> {
        let handle = self
            .find_by_username(username)
            .await?
            .ok_or_else(MediaError::invalid_credentials)?;

        let mut account = handle.lock().await;
        if !account.check_password(password) {
            return Err(MediaError::invalid_credentials());
        }

        Ok(account.session.issue())
    }

    /// Resolve an account by username, `NotFound` if absent
    pub async fn resolve(&self, username: &str) -> MediaResult<AccountHandle> {
        self.find_by_username(username)
            .await?
            .ok_or_else(|| MediaError::NotFound("Account not found".to_string()))
    }

    /// Authentication gate for account-scoped operations.
    ///
    /// Resolves the account and checks the presented token, returning the
    /// account locked so the caller's whole operation is serialized.
    pub async fn authenticate(
        &self,
        username: &str,
        presented: u64,
    ) -> MediaResult<AuthenticatedAccount> {
        let handle = self.resolve(username).await?;
        Self::lock_validated(handle, presented).await
    }

    /// Lock an account and check the presented token under that lock
    pub async fn lock_validated(
        handle: AccountHandle,
        presented: u64,
    ) -> MediaResult<AuthenticatedAccount> {
        let account = handle.lock_owned().await;
        if !account.session.validate(presented) {
            return Err(MediaError::Authentication(
                "Invalid or expired session".to_string(),
            ));
        }

        Ok(account)
    }

    /// End the session of an authenticated account
    ///
    /// Returns how long the ended session lasted; `None` if already logged out.
    pub fn logout(&self, account: &mut Account) -> Option<chrono::Duration> {
        account.session.clear()
    }

    /// Redacted view of an account, serialized to JSON
    pub fn public_profile(&self, account: &Account) -> MediaResult<String> {
        privacy::redact_to_json(account)
    }

    /// Replace the account's email
    pub fn change_email(&self, account: &mut Account, new_email: &str) -> MediaResult<String> {
        let new_email = new_email.trim();
        if new_email.is_empty() {
            return Err(MediaError::Validation("Email cannot be empty".to_string()));
        }

        account.email = new_email.to_string();
        Ok(account.email.clone())
    }

    /// Replace the password after re-verifying the current one
    pub fn change_password(
        &self,
        account: &mut Account,
        old_password: &str,
        new_password: &str,
    ) -> MediaResult<()> {
        if old_password.is_empty() {
            return Err(MediaError::Validation("Old password cannot be empty".to_string()));
        }
        if new_password.is_empty() {
            return Err(MediaError::Validation("New password cannot be empty".to_string()));
        }
        if !account.check_password(old_password) {
            return Err(MediaError::Authentication(
                "Old password does not match".to_string(),
            ));
        }

        account.credential_digest = crypto::hash_password(new_password, account.id);
        Ok(())
    }
}
