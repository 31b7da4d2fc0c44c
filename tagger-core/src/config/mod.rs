//! Configuration management for the tagger.
//!
//! - [`types`]: [`CoreConfig`], [`LoggingConfig`] and [`SettingsStoreConfig`].
//! - [`defaults`]: serde default values and well-known file names.
//! - [`loader`]: [`ConfigLoader`], which reads `config.toml`, falls back to
//!   defaults when it is missing, and validates the result.
//!
//! ```rust,ignore
//! use tagger_core::config::ConfigLoader;
//!
//! match ConfigLoader::load() {
//!     Ok(config) => tracing::info!("Log level: {}", config.logging.level),
//!     Err(e) => {
//!         tagger_core::logging::init_minimal_logging();
//!         tracing::error!("Configuration error: {}", e);
//!     }
//! }
//! ```

pub mod defaults;
pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{CoreConfig, LoggingConfig, SettingsStoreConfig};
