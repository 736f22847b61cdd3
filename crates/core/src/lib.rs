pub mod config;
pub mod domain;
pub mod store;

pub use config::{AppConfig, ConfigError, ConfigOverrides, LoadOptions, LogFormat};
pub use domain::product::{Product, ProductId};
pub use store::{InMemoryProductStore, ProductStore, StoreError};
