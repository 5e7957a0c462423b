/// Application context and dependency injection
use crate::{
    account::{provision, AccountManager},
    config::ServerConfig,
    error::MediaResult,
};
use std::sync::Arc;

/// Application context holding all shared services
#[derive(Clone)]
pub struct AppContext {
    pub config: Arc<ServerConfig>,
    pub account_manager: Arc<AccountManager>,
}

impl AppContext {
    /// Create a new application context from configuration
    pub async fn new(config: ServerConfig) -> MediaResult<Self> {
        // Validate configuration
        config.validate()?;

        let account_manager = AccountManager::in_memory();

        // Provision accounts from the seed file, if any
        if let Some(path) = &config.storage.seed_file {
            let accounts = provision::load_seed_file(path).await?;
            let created = provision::provision_accounts(&account_manager, accounts).await?;
            tracing::info!("Provisioned {} account(s) from {:?}", created, path);
        } else {
            tracing::warn!("No seed file configured - starting with no accounts");
        }

        Ok(Self::with_manager(config, account_manager))
    }

    /// Build a context around an existing account manager
    pub fn with_manager(config: ServerConfig, account_manager: AccountManager) -> Self {
        Self {
            config: Arc::new(config),
            account_manager: Arc::new(account_manager),
        }
    }

    /// Get service URL
    pub fn service_url(&self) -> String {
        format!("http://{}", self.config.bind_addr())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MediaError;
    use std::path::PathBuf;

    #[tokio::test]
    async fn test_new_without_seed_file() {
        let ctx = AppContext::new(ServerConfig::default()).await.unwrap();
        assert_eq!(ctx.account_manager.account_count().await.unwrap(), 0);
        assert_eq!(ctx.service_url(), "http://127.0.0.1:8080");
    }

    #[tokio::test]
    async fn test_new_rejects_invalid_config() {
        let mut config = ServerConfig::default();
        config.service.port = 0;
        assert!(matches!(
            AppContext::new(config).await,
            Err(MediaError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_new_with_missing_seed_file_fails() {
        let mut config = ServerConfig::default();
        config.storage.seed_file = Some(PathBuf::from("./missing-seed-file.json"));
        assert!(matches!(AppContext::new(config).await, Err(MediaError::Io(_))));
    }
}
