//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/contacts/contacts.toml`
//! 3. Environment variables: `CONTACTS_*` prefix
//! 4. Command line (`--store`), applied by the binary

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;

/// What `list` (and the mutating operations) do when the store does not parse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CorruptStorePolicy {
    /// Log a warning and treat the store as empty.
    #[default]
    Recover,
    /// Surface the corruption as an error.
    Fail,
}

impl std::str::FromStr for CorruptStorePolicy {
    type Err = ApplicationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "recover" => Ok(Self::Recover),
            "fail" => Ok(Self::Fail),
            other => Err(ApplicationError::Config {
                message: format!("unknown corrupt_store policy '{other}' (expected recover|fail)"),
            }),
        }
    }
}

/// Raw settings for intermediate parsing (fields are Option to detect "not specified").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub store_path: Option<PathBuf>,
    pub corrupt_store: Option<CorruptStorePolicy>,
}

/// Unified configuration for contacts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Backing store file (default: <data dir>/contacts.json)
    pub store_path: PathBuf,
    /// Behavior on a store that does not parse
    pub corrupt_store: CorruptStorePolicy,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            store_path: default_store_path(),
            corrupt_store: CorruptStorePolicy::default(),
        }
    }
}

/// Get the default store location.
fn default_store_path() -> PathBuf {
    ProjectDirs::from("", "", "contacts")
        .map(|dirs| dirs.data_dir().join("contacts.json"))
        .unwrap_or_else(|| PathBuf::from("contacts.json"))
}

/// Get the XDG config directory for contacts.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "contacts").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("contacts.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

/// Expand `~`, `$VAR` and `${VAR}`; unknown variables are left as written.
fn expand_path(path: &Path) -> PathBuf {
    let raw = path.to_string_lossy();
    match shellexpand::full(&raw) {
        Ok(expanded) => PathBuf::from(expanded.into_owned()),
        Err(_) => PathBuf::from(shellexpand::tilde(&raw).into_owned()),
    }
}

impl Settings {
    /// Overlay the fields a config file sets.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            store_path: overlay
                .store_path
                .clone()
                .unwrap_or_else(|| self.store_path.clone()),
            corrupt_store: overlay.corrupt_store.unwrap_or(self.corrupt_store),
        }
    }

    /// Load settings with layered precedence from the standard locations.
    pub fn load() -> Result<Self, ApplicationError> {
        Self::load_from(global_config_path().as_deref())
    }

    /// Load settings using `config_file` as the global config layer.
    ///
    /// A missing file is skipped; an unreadable or invalid one is an error.
    pub fn load_from(config_file: Option<&Path>) -> Result<Self, ApplicationError> {
        // 1. Start with defaults
        let mut current = Self::default();

        // 2. Global config file
        if let Some(path) = config_file {
            if path.exists() {
                let raw = load_raw_settings(path)?;
                current = current.merge_with(&raw);
            }
        }

        // 3. Environment variables (explicit override)
        current = Self::apply_env_overrides(current)?;

        current.store_path = expand_path(&current.store_path);
        Ok(current)
    }

    /// Apply CONTACTS_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("CONTACTS")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_string("store_path") {
            settings.store_path = PathBuf::from(val);
        }
        if let Ok(val) = config.get_string("corrupt_store") {
            settings.corrupt_store = val.parse()?;
        }

        Ok(settings)
    }

    /// Replace the store location (command-line override).
    pub fn with_store_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.store_path = expand_path(&path.into());
        self
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn given_no_config_when_loading_then_defaults_to_contacts_json() {
        let settings = Settings::default();
        assert_eq!(
            settings.store_path.file_name().and_then(|n| n.to_str()),
            Some("contacts.json")
        );
        assert_eq!(settings.corrupt_store, CorruptStorePolicy::Recover);
    }

    #[test]
    fn given_missing_config_file_when_loading_then_file_layer_is_skipped() {
        let temp = TempDir::new().unwrap();
        let settings = Settings::load_from(Some(&temp.path().join("absent.toml")));
        assert!(settings.is_ok());
    }

    #[test]
    fn given_config_file_when_merging_then_overrides_only_set_fields() {
        let raw: RawSettings = toml::from_str(r#"corrupt_store = "fail""#).unwrap();
        let base = Settings {
            store_path: PathBuf::from("/data/contacts.json"),
            corrupt_store: CorruptStorePolicy::Recover,
        };

        let merged = base.merge_with(&raw);

        assert_eq!(merged.store_path, PathBuf::from("/data/contacts.json"));
        assert_eq!(merged.corrupt_store, CorruptStorePolicy::Fail);
    }

    #[test]
    fn given_invalid_config_file_when_loading_then_config_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("contacts.toml");
        std::fs::write(&path, "store_path = [").unwrap();

        let err = Settings::load_from(Some(&path)).unwrap_err();
        assert!(matches!(err, ApplicationError::Config { .. }));
    }

    #[test]
    fn given_tilde_in_store_path_when_overriding_then_expands_to_home() {
        let settings = Settings::default().with_store_path("~/contacts.json");

        let home = std::env::var("HOME").expect("HOME should be set");
        let path = settings.store_path.to_string_lossy();
        assert!(path.starts_with(&home), "store_path should start with home: {path}");
        assert!(!path.contains('~'));
    }

    #[test]
    fn given_policy_strings_when_parsing_then_accepts_known_values() {
        assert_eq!(
            "Recover".parse::<CorruptStorePolicy>().unwrap(),
            CorruptStorePolicy::Recover
        );
        assert_eq!(
            " fail ".parse::<CorruptStorePolicy>().unwrap(),
            CorruptStorePolicy::Fail
        );
        assert!("ignore".parse::<CorruptStorePolicy>().is_err());
    }

    #[test]
    fn given_settings_when_rendering_toml_then_contains_both_keys() {
        let settings = Settings {
            store_path: PathBuf::from("/tmp/c.json"),
            corrupt_store: CorruptStorePolicy::Fail,
        };
        let rendered = settings.to_toml().unwrap();
        assert!(rendered.contains(r#"store_path = "/tmp/c.json""#));
        assert!(rendered.contains(r#"corrupt_store = "fail""#));
    }
}
