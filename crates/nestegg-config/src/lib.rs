//! nestegg-config
//!
//! Persistent application preferences: where ledger data lives on disk and
//! which key prefix scopes the durable slots. Owns the Config data
//! structure plus disk persistence helpers.

pub mod error;
pub mod manager;
pub mod model;

pub use error::ConfigError;
pub use manager::ConfigManager;
pub use model::Config;
