use std::path::PathBuf;

use nestegg_config::{Config, ConfigManager};
use tempfile::tempdir;

#[test]
fn load_without_a_file_returns_defaults() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::new(dir.path().join("config.json"));

    let cfg = manager.load().expect("load config");
    assert_eq!(cfg.key_prefix, "nestegg");
    assert!(cfg.data_root.is_none());
}

#[test]
fn config_manager_persists_and_loads_config() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::new(dir.path().join("config.json"));

    let cfg = Config {
        key_prefix: "household".into(),
        data_root: Some(PathBuf::from("/tmp/ledger-data")),
    };

    manager.save(&cfg).expect("save config");
    let loaded = manager.load().expect("load config");

    assert_eq!(loaded.key_prefix, "household");
    assert_eq!(loaded.data_root, Some(PathBuf::from("/tmp/ledger-data")));
}

#[test]
fn with_base_dir_places_the_file_inside_it() {
    let dir = tempdir().expect("tempdir");
    let manager =
        ConfigManager::with_base_dir(dir.path().join("app")).expect("create manager");
    assert!(manager.config_path().starts_with(dir.path().join("app")));

    manager.save(&Config::default()).expect("save config");
    assert!(manager.config_path().exists());
}
