use super::consts::{
    APP_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_BIN_DIR, DEFAULT_CATALOG_LIMIT, DEFAULT_CATALOG_URL,
    DEFAULT_HTTP_TIMEOUT_SECS,
};
use crate::error::{Result, SwapError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// config.toml schema
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Settings {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoreConfig {
    /// Parent of the `<tool>-versions` stores; `~/hc-swap` when unset
    #[serde(default)]
    pub app_dir: Option<PathBuf>,
    #[serde(default = "default_bin_dir")]
    pub bin_dir: PathBuf,
    /// Keep `<version>.zip` next to the unpacked files after extraction
    #[serde(default)]
    pub keep_archives: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            app_dir: None,
            bin_dir: default_bin_dir(),
            keep_archives: false,
        }
    }
}

fn default_bin_dir() -> PathBuf {
    PathBuf::from(DEFAULT_BIN_DIR)
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogConfig {
    #[serde(default = "default_catalog_url")]
    pub url: String,
    /// Only the first `limit` listing entries are offered
    #[serde(default = "default_catalog_limit")]
    pub limit: usize,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            url: default_catalog_url(),
            limit: DEFAULT_CATALOG_LIMIT,
            timeout_secs: DEFAULT_HTTP_TIMEOUT_SECS,
        }
    }
}

fn default_catalog_url() -> String {
    DEFAULT_CATALOG_URL.to_string()
}

fn default_catalog_limit() -> usize {
    DEFAULT_CATALOG_LIMIT
}

fn default_timeout_secs() -> u64 {
    DEFAULT_HTTP_TIMEOUT_SECS
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SessionConfig {
    #[serde(default)]
    pub after_activate: AfterActivate,
}

/// What the interactive session does once a version has been activated
/// from the menu (directly or through "Install New")
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AfterActivate {
    /// Go back to the version menu of the same tool
    #[default]
    Menu,
    /// End the session
    Exit,
}

impl Settings {
    /// Reads and validates a settings file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| SwapError::ConfigParseError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let settings: Settings =
            toml::from_str(&content).map_err(|e| SwapError::ConfigParseError {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        settings.validate()?;
        Ok(settings)
    }

    /// Loads settings from `explicit`, or from the default location when it
    /// exists, or falls back to built-in defaults
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        match default_config_path() {
            Some(path) if path.is_file() => {
                log::debug!("loading settings from {}", path.display());
                Self::from_file(&path)
            }
            _ => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.catalog.limit == 0 {
            return Err(SwapError::ConfigInvalidValue {
                field: "catalog.limit".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }

        if self.catalog.url.trim().is_empty() {
            return Err(SwapError::ConfigInvalidValue {
                field: "catalog.url".to_string(),
                reason: "must not be empty".to_string(),
            });
        }

        Ok(())
    }

    /// Resolved parent directory of all version stores
    pub fn app_dir(&self) -> Result<PathBuf> {
        match &self.store.app_dir {
            Some(dir) => expand_home(dir),
            None => Ok(dirs::home_dir()
                .ok_or(SwapError::HomeNotFound)?
                .join(APP_DIR_NAME)),
        }
    }
}

/// `<config_dir>/hc-swap/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// Expands a leading `~` to the home directory
fn expand_home(path: &Path) -> Result<PathBuf> {
    match path.strip_prefix("~") {
        Ok(rest) => Ok(dirs::home_dir().ok_or(SwapError::HomeNotFound)?.join(rest)),
        Err(_) => Ok(path.to_path_buf()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.store.bin_dir, PathBuf::from("/usr/local/bin"));
        assert_eq!(settings.catalog.url, "https://releases.hashicorp.com/");
        assert_eq!(settings.catalog.limit, 10);
        assert!(!settings.store.keep_archives);
        assert_eq!(settings.session.after_activate, AfterActivate::Menu);
    }

    #[test]
    fn test_empty_file_yields_defaults() {
        let temp = hcswap_testkit::temp_dir_in_workspace();
        let path = temp.path().join("config.toml");
        fs::write(&path, "").unwrap();

        let settings = Settings::from_file(&path).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_partial_file_overrides_only_given_fields() {
        let temp = hcswap_testkit::temp_dir_in_workspace();
        let path = temp.path().join("config.toml");
        fs::write(
            &path,
            r#"
[store]
app_dir = "/opt/hc-swap"
keep_archives = true

[catalog]
limit = 3

[session]
after_activate = "exit"
"#,
        )
        .unwrap();

        let settings = Settings::from_file(&path).unwrap();
        assert_eq!(settings.app_dir().unwrap(), PathBuf::from("/opt/hc-swap"));
        assert!(settings.store.keep_archives);
        assert_eq!(settings.store.bin_dir, PathBuf::from("/usr/local/bin"));
        assert_eq!(settings.catalog.limit, 3);
        assert_eq!(settings.catalog.url, "https://releases.hashicorp.com/");
        assert_eq!(settings.session.after_activate, AfterActivate::Exit);
    }

    #[test]
    fn test_zero_limit_is_rejected() {
        let temp = hcswap_testkit::temp_dir_in_workspace();
        let path = temp.path().join("config.toml");
        fs::write(&path, "[catalog]\nlimit = 0\n").unwrap();

        let err = Settings::from_file(&path).unwrap_err();
        assert!(matches!(err, SwapError::ConfigInvalidValue { ref field, .. } if field == "catalog.limit"));
    }

    #[test]
    fn test_malformed_file_reports_path() {
        let temp = hcswap_testkit::temp_dir_in_workspace();
        let path = temp.path().join("config.toml");
        fs::write(&path, "[session]\nafter_activate = \"sometimes\"\n").unwrap();

        let err = Settings::from_file(&path).unwrap_err();
        assert!(err.to_string().starts_with("CONFIG_PARSE_ERROR"));
        assert!(err.to_string().contains("config.toml"));
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let temp = hcswap_testkit::temp_dir_in_workspace();
        let result = Settings::load(Some(&temp.path().join("absent.toml")));
        assert!(matches!(result, Err(SwapError::ConfigParseError { .. })));
    }

    #[test]
    fn test_sectioned_file_overrides_only_named_fields() {
        let temp = hcswap_testkit::temp_dir_in_workspace();
        let path = temp.path().join("config.toml");
        std::fs::write(
            &path,
            "[store]\napp_dir = \"/srv/tools\"\n\n[session]\nafter_activate = \"exit\"\n",
        )
        .unwrap();

        let settings = Settings::from_file(&path).unwrap();

        assert_eq!(settings.store.app_dir, Some(PathBuf::from("/srv/tools")));
        assert_eq!(settings.session.after_activate, AfterActivate::Exit);
        assert_eq!(settings.catalog, CatalogConfig::default());
    }
}
