//! # Tagger core library (`tagger-core`)
//!
//! Shared infrastructure for the dataset tagger workspace:
//!
//! - **Error handling**: [`CoreError`] and [`ConfigError`].
//! - **Configuration**: TOML-based [`CoreConfig`] loaded by [`ConfigLoader`],
//!   with defaults when no file exists.
//! - **Logging**: [`init_logging`] and [`init_minimal_logging`] on top of `tracing`.
//! - **Utilities**: application directories and small filesystem helpers.
//!
//! ```rust,ignore
//! use tagger_core::{init_logging, ConfigLoader, CoreError};
//!
//! fn main() -> Result<(), CoreError> {
//!     let config = ConfigLoader::load()?;
//!     init_logging(&config.logging, false)?;
//!     tracing::info!("Settings file: {}", config.settings.file_path.display());
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod utils;

pub use config::{ConfigLoader, CoreConfig, LoggingConfig, SettingsStoreConfig};
pub use error::{ConfigError, CoreError};
pub use logging::{init_logging, init_minimal_logging};
pub use utils::{ensure_dir_exists, read_optional_to_string};
