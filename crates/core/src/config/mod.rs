//! Configuration file loading.
//!
//! A TOML file with named profiles selects the document root and indexing
//! settings; `[search]`, `[glossary]` and `[logging]` apply to every profile.
//! Environment variables override the active profile after loading.

pub mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, default_config_path};
pub use types::{ConfigFile, LoggingConfig, Profile, ResolvedConfig, SearchSettings};
