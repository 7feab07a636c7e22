//! Version store layout and the operations that change it
//!
//! ```text
//! <app_dir>/
//!   terraform-versions/
//!     1.6.0/terraform
//!     1.5.7/terraform
//!   vault-versions/
//!     ...
//! <bin_dir>/terraform -> <app_dir>/terraform-versions/1.6.0/terraform
//! ```
//!
//! Directory presence is the whole state: there is no index file.

pub mod activate;
pub mod inspect;
pub mod uninstall;

pub use activate::{ActivateError, PathStatus, activate, active_version, path_status, show_version};
pub use inspect::{StoreState, inspect};
pub use uninstall::uninstall;

use crate::config::Settings;
use crate::error::Result;
use crate::tool::Tool;
use std::path::{Path, PathBuf};

/// Resolved locations of the version stores and the link directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreLayout {
    app_dir: PathBuf,
    bin_dir: PathBuf,
}

impl StoreLayout {
    pub fn new(app_dir: impl Into<PathBuf>, bin_dir: impl Into<PathBuf>) -> Self {
        Self {
            app_dir: app_dir.into(),
            bin_dir: bin_dir.into(),
        }
    }

    pub fn from_settings(settings: &Settings) -> Result<Self> {
        Ok(Self::new(settings.app_dir()?, settings.store.bin_dir.clone()))
    }

    pub fn app_dir(&self) -> &Path {
        &self.app_dir
    }

    pub fn bin_dir(&self) -> &Path {
        &self.bin_dir
    }

    /// `<app_dir>/<tool>-versions`
    pub fn store_root(&self, tool: Tool) -> PathBuf {
        self.app_dir
            .join(format!("{}-versions", tool.canonical_name()))
    }

    /// `<store_root>/<version>`
    pub fn version_dir(&self, tool: Tool, version: &str) -> PathBuf {
        self.store_root(tool).join(version)
    }

    /// `<bin_dir>/<tool>`
    pub fn link_path(&self, tool: Tool) -> PathBuf {
        self.bin_dir.join(tool.canonical_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_paths() {
        let layout = StoreLayout::new("/home/me/hc-swap", "/usr/local/bin");

        assert_eq!(
            layout.store_root(Tool::Terraform),
            PathBuf::from("/home/me/hc-swap/terraform-versions")
        );
        assert_eq!(
            layout.version_dir(Tool::Vault, "1.15.2"),
            PathBuf::from("/home/me/hc-swap/vault-versions/1.15.2")
        );
        assert_eq!(
            layout.link_path(Tool::Packer),
            PathBuf::from("/usr/local/bin/packer")
        );
    }

    #[test]
    fn test_from_settings_uses_configured_dirs() {
        let mut settings = Settings::default();
        settings.store.app_dir = Some(PathBuf::from("/data/hc"));
        settings.store.bin_dir = PathBuf::from("/opt/bin");

        let layout = StoreLayout::from_settings(&settings).unwrap();
        assert_eq!(layout.app_dir(), Path::new("/data/hc"));
        assert_eq!(layout.bin_dir(), Path::new("/opt/bin"));
    }
}
