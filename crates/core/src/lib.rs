//! Core types for the guestbook service
//!
//! Configuration resolution, shared constants and the list snapshot types
//! passed between the storage, service and HTTP crates.

pub mod constants;
mod config;
mod env_config;
mod error;
mod json_utils;
mod list;

pub use config::{AppConfig, BackendConfig, RemoteTarget};
pub use env_config::{environment_snapshot, non_empty_env, snapshot_from};
pub use error::ConfigError;
pub use json_utils::to_flat_json;
pub use list::{ListSnapshot, ReadSource};
