use std::sync::Arc;

use catalog_core::config::{AppConfig, ConfigError, LoadOptions};
use catalog_core::{InMemoryProductStore, ProductStore};
use thiserror::Error;
use tracing::info;

pub struct Application {
    pub config: AppConfig,
    pub store: Arc<dyn ProductStore>,
}

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub async fn bootstrap(options: LoadOptions) -> Result<Application, BootstrapError> {
    let config = AppConfig::load(options)?;
    bootstrap_with_config(config)
}

pub fn bootstrap_with_config(config: AppConfig) -> Result<Application, BootstrapError> {
    info!(
        event_name = "catalog.bootstrap.store_ready",
        "in-memory product store initialized"
    );

    Ok(Application { config, store: Arc::new(InMemoryProductStore::new()) })
}

#[cfg(test)]
mod tests {
    use catalog_core::config::{AppConfig, ConfigOverrides, LoadOptions};

    use super::{bootstrap, bootstrap_with_config};

    #[tokio::test]
    async fn bootstrap_starts_with_an_empty_catalog() {
        let app = bootstrap_with_config(AppConfig::default()).expect("bootstrap should succeed");

        let products = app.store.list_all().await.expect("list should succeed");
        assert!(products.is_empty());
    }

    #[tokio::test]
    async fn bootstrap_rejects_invalid_configuration() {
        let result = bootstrap(LoadOptions {
            overrides: ConfigOverrides {
                log_level: Some("shout".to_string()),
                ..ConfigOverrides::default()
            },
            ..LoadOptions::default()
        })
        .await;

        assert!(result.is_err());
        let message = result.err().expect("error").to_string();
        assert!(message.contains("logging.level"));
    }
}
