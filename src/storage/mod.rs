//! Storage module for configuration and state files.

pub mod config;
pub mod state_file;

pub use config::{load_config, load_config_from, save_config_to, ConfigError, EngineConfig};
pub use state_file::{load_members, load_state, save_members, save_state, StorageError};
