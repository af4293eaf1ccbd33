use spendquest_config::{Config, ConfigManager};
use tempfile::tempdir;

#[test]
fn default_config_has_non_empty_fields() {
    let cfg = Config::default();

    assert!(!cfg.currency.is_empty());
    assert!(!cfg.locale.is_empty());
    assert!(cfg.data_root.is_none());
}

#[test]
fn load_returns_defaults_when_nothing_is_stored() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::new(dir.path().join("config.json"));

    let loaded = manager.load().expect("load config");
    assert_eq!(loaded.currency, Config::default_currency());
}

#[test]
fn config_manager_persists_and_loads_config() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).expect("manager");

    let mut cfg = Config::default();
    cfg.currency = "USD".to_string();
    cfg.locale = "en-US".to_string();
    cfg.data_root = Some(dir.path().join("collections"));

    manager.save(&cfg).expect("save config");
    let loaded = manager.load().expect("load config");

    assert_eq!(loaded.currency, "USD");
    assert_eq!(loaded.locale, "en-US");
    assert_eq!(loaded.data_root, cfg.data_root);
    assert_eq!(loaded.resolve_data_root(), dir.path().join("collections"));
}

#[test]
fn explicit_data_root_wins_over_the_platform_default() {
    let mut cfg = Config::default();
    assert!(cfg.resolve_data_root().ends_with("SpendQuest"));

    cfg.data_root = Some("/tmp/quests".into());
    assert_eq!(cfg.resolve_data_root(), std::path::PathBuf::from("/tmp/quests"));
}
