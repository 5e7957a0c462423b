/// Account storage backends
use super::Account;
use crate::error::{MediaError, MediaResult};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

/// Shared, lockable account record.
///
/// The mutex serializes every operation on one account. Accounts never share
/// a lock, so work on different accounts proceeds independently.
pub type AccountHandle = Arc<Mutex<Account>>;

/// Account repository trait
///
/// Implementations own the account population and enforce global uniqueness
/// of usernames and ids.
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Store a new account. Fails with `Conflict` on a duplicate username or id.
    async fn insert(&self, account: Account) -> MediaResult<AccountHandle>;

    /// Look up an account by username
    async fn get_by_username(&self, username: &str) -> MediaResult<Option<AccountHandle>>;

    /// Look up an account by id
    async fn get_by_id(&self, id: u64) -> MediaResult<Option<AccountHandle>>;

    /// Number of stored accounts
    async fn count(&self) -> MediaResult<usize>;
}

#[derive(Default)]
struct Accounts {
    by_username: HashMap<String, AccountHandle>,
    username_by_id: HashMap<u64, String>,
}

/// In-memory account repository
#[derive(Default)]
pub struct MemoryAccountRepository {
    accounts: RwLock<Accounts>,
}

impl MemoryAccountRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AccountRepository for MemoryAccountRepository {
    async fn insert(&self, account: Account) -> MediaResult<AccountHandle> {
        let mut accounts = self.accounts.write().await;

        if accounts.by_username.contains_key(&account.username) {
            return Err(MediaError::Conflict(format!(
                "Username {} already taken",
                account.username
            )));
        }
        if accounts.username_by_id.contains_key(&account.id) {
            return Err(MediaError::Conflict(format!(
                "Account id {} already in use",
                account.id
            )));
        }

        let username = account.username.clone();
        let id = account.id;
        let handle = Arc::new(Mutex::new(account));
        accounts.by_username.insert(username.clone(), Arc::clone(&handle));
        accounts.username_by_id.insert(id, username);

        Ok(handle)
    }

    async fn get_by_username(&self, username: &str) -> MediaResult<Option<AccountHandle>> {
        let accounts = self.accounts.read().await;
        Ok(accounts.by_username.get(username).cloned())
    }

    async fn get_by_id(&self, id: u64) -> MediaResult<Option<AccountHandle>> {
        let accounts = self.accounts.read().await;
        Ok(accounts
            .username_by_id
            .get(&id)
            .and_then(|username| accounts.by_username.get(username))
            .cloned())
    }

    async fn count(&self) -> MediaResult<usize> {
        Ok(self.accounts.read().await.by_username.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account(id: u64, username: &str) -> Account {
        Account::new(id, username, "someone@example.com", "secret")
    }

    #[tokio::test]
    async fn test_insert_and_lookup() {
        let repo = MemoryAccountRepository::new();
        repo.insert(account(7, "alice")).await.unwrap();

        let by_name = repo.get_by_username("alice").await.unwrap().unwrap();
        assert_eq!(by_name.lock().await.id, 7);

        let by_id = repo.get_by_id(7).await.unwrap().unwrap();
        assert!(Arc::ptr_eq(&by_name, &by_id));
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_missing_account_is_none() {
        let repo = MemoryAccountRepository::new();
        assert!(repo.get_by_username("nobody").await.unwrap().is_none());
        assert!(repo.get_by_id(1).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_username_conflicts() {
        let repo = MemoryAccountRepository::new();
        repo.insert(account(1, "alice")).await.unwrap();

        let result = repo.insert(account(2, "alice")).await;
        assert!(matches!(result, Err(MediaError::Conflict(_))));
        assert!(repo.get_by_id(2).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_id_conflicts() {
        let repo = MemoryAccountRepository::new();
        repo.insert(account(1, "alice")).await.unwrap();

        let result = repo.insert(account(1, "bob")).await;
        assert!(matches!(result, Err(MediaError::Conflict(_))));
        assert!(repo.get_by_username("bob").await.unwrap().is_none());
        assert_eq!(repo.count().await.unwrap(), 1);
    }
}
