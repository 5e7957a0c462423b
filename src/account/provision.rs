/// Startup provisioning of accounts from a JSON seed file
///
/// The file holds an array of `{ "id", "username", "email", "password" }`
/// records.

use crate::{
    account::{AccountManager, NewAccount},
    error::MediaResult,
};
use std::path::Path;

/// Read seed records from disk
pub async fn load_seed_file(path: &Path) -> MediaResult<Vec<NewAccount>> {
    let data = tokio::fs::read_to_string(path).await?;
    parse_seed(&data)
}

/// Parse seed records from a JSON string
pub fn parse_seed(data: &str) -> MediaResult<Vec<NewAccount>> {
    Ok(serde_json::from_str(data)?)
}

/// Create every seed account, stopping at the first failure
pub async fn provision_accounts(
    manager: &AccountManager,
    accounts: Vec<NewAccount>,
) -> MediaResult<usize> {
    let mut created = 0;
    for account in accounts {
        manager.create_account(account).await?;
        created += 1;
    }
    Ok(created)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MediaError;

    const SEED: &str = r#"[
        {"id": 7, "username": "alice", "email": "alice@example.com", "password": "secret"},
        {"id": 8, "username": "bob", "password": "hunter2"}
    ]"#;

    #[test]
    fn test_parse_seed() {
        let accounts = parse_seed(SEED).unwrap();
        assert_eq!(accounts.len(), 2);
        assert_eq!(accounts[0].username, "alice");
        assert_eq!(accounts[1].email, "");
    }

    #[test]
    fn test_parse_seed_rejects_bad_json() {
        assert!(matches!(
            parse_seed("{not json"),
            Err(MediaError::Serialization(_))
        ));
    }

    #[tokio::test]
    async fn test_provision_accounts() {
        let manager = AccountManager::in_memory();
        let created = provision_accounts(&manager, parse_seed(SEED).unwrap())
            .await
            .unwrap();

        assert_eq!(created, 2);
        assert!(manager.login("bob", "hunter2").await.is_ok());
    }

    #[tokio::test]
    async fn test_provision_stops_on_duplicate() {
        let manager = AccountManager::in_memory();
        let mut accounts = parse_seed(SEED).unwrap();
        accounts.push(accounts[0].clone());

        let result = provision_accounts(&manager, accounts).await;
        assert!(matches!(result, Err(MediaError::Conflict(_))));
        assert_eq!(manager.account_count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_missing_seed_file_is_io_error() {
        let result = load_seed_file(Path::new("./does-not-exist/seed.json")).await;
        assert!(matches!(result, Err(MediaError::Io(_))));
    }
}
