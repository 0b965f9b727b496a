use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// User-configurable storage preferences.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Prefix applied to every durable key, so several ledgers can share a
    /// backend without colliding.
    #[serde(default = "Config::default_key_prefix")]
    pub key_prefix: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    /// Optional custom root directory for ledger data. Defaults to the
    /// platform data dir.
    pub data_root: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            key_prefix: Self::default_key_prefix(),
            data_root: None,
        }
    }
}

impl Config {
    pub fn default_key_prefix() -> String {
        "nestegg".into()
    }

    pub fn resolve_data_root(&self) -> PathBuf {
        if let Some(path) = &self.data_root {
            return path.clone();
        }

        let base = dirs::data_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."));

        base.join("nestegg")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_prefix_is_non_empty() {
        assert!(!Config::default().key_prefix.is_empty());
    }

    #[test]
    fn explicit_data_root_wins() {
        let cfg = Config {
            data_root: Some(PathBuf::from("/tmp/ledger-data")),
            ..Config::default()
        };
        assert_eq!(cfg.resolve_data_root(), PathBuf::from("/tmp/ledger-data"));
    }

    #[test]
    fn missing_fields_deserialize_to_defaults() {
        let cfg: Config = serde_json::from_str("{}").expect("parse");
        assert_eq!(cfg.key_prefix, "nestegg");
        assert!(cfg.data_root.is_none());
    }
}
