//! Integration tests for Settings config loading with layered precedence.
//!
//! Precedence: defaults < global config file < CONTACTS_* env vars < --store.
//!
//! Environment variables are process-wide, so everything touching them lives
//! in a single test.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use contacts::application::ApplicationError;
use contacts::config::{CorruptStorePolicy, Settings};

#[test]
fn given_config_file_and_env_vars_when_loading_then_layers_apply_in_order() {
    let temp = TempDir::new().unwrap();
    let config_file = temp.path().join("contacts.toml");
    fs::write(
        &config_file,
        r#"
store_path = "/from/file/contacts.json"
corrupt_store = "fail"
"#,
    )
    .unwrap();

    std::env::remove_var("CONTACTS_STORE_PATH");
    std::env::remove_var("CONTACTS_CORRUPT_STORE");

    // Missing file: defaults
    let settings = Settings::load_from(Some(&temp.path().join("absent.toml"))).unwrap();
    assert_eq!(settings.corrupt_store, CorruptStorePolicy::Recover);

    // Config file over defaults
    let settings = Settings::load_from(Some(&config_file)).expect("load settings");
    assert_eq!(settings.store_path, PathBuf::from("/from/file/contacts.json"));
    assert_eq!(settings.corrupt_store, CorruptStorePolicy::Fail);

    // Env vars over config file
    std::env::set_var("CONTACTS_STORE_PATH", "/from/env/contacts.json");
    std::env::set_var("CONTACTS_CORRUPT_STORE", "recover");
    let settings = Settings::load_from(Some(&config_file)).expect("load settings");
    assert_eq!(settings.store_path, PathBuf::from("/from/env/contacts.json"));
    assert_eq!(settings.corrupt_store, CorruptStorePolicy::Recover);

    // Invalid policy value is a config error
    std::env::set_var("CONTACTS_CORRUPT_STORE", "shrug");
    let err = Settings::load_from(Some(&config_file)).unwrap_err();
    assert!(matches!(err, ApplicationError::Config { .. }));

    // Command-line override beats everything
    std::env::remove_var("CONTACTS_CORRUPT_STORE");
    let settings = Settings::load_from(Some(&config_file))
        .expect("load settings")
        .with_store_path("/from/cli/contacts.json");
    assert_eq!(settings.store_path, PathBuf::from("/from/cli/contacts.json"));

    std::env::remove_var("CONTACTS_STORE_PATH");
}
