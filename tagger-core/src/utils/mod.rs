//! General utilities for the tagger core layer.
//!
//! - [`fs`]: filesystem helpers mapping `std::io::Error` into [`crate::error::CoreError`].
//! - [`paths`]: platform-specific application directories via `directories-next`.

pub mod fs;
pub mod paths;

pub use fs::{ensure_dir_exists, read_optional_to_string};
