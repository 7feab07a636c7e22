//! Global context for CLI commands

use crate::cli::Cli;
use anyhow::{Context as _, Result};
use hcswap::SessionOptions;
use hcswap::output::progress_callback;
use hcswap_core::{Settings, StoreLayout, Tool};
use hcswap_release::catalog::parse_catalog_url;
use hcswap_release::{DownloadOptions, Platform, http};
use reqwest::blocking::Client;
use std::time::Duration;
use url::Url;

/// Settings merged from the config file and the command line
pub struct Context {
    pub settings: Settings,
    pub layout: StoreLayout,
    pub catalog_url: Url,
}

impl Context {
    /// Loads settings and applies flag / environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The settings file cannot be read or parsed
    /// - An override produces an invalid value
    /// - The home directory cannot be determined
    pub fn new(cli: &Cli) -> Result<Self> {
        let mut settings = Settings::load(cli.config.as_deref())?;

        if let Some(dir) = &cli.app_dir {
            settings.store.app_dir = Some(dir.clone());
        }
        if let Some(dir) = &cli.bin_dir {
            settings.store.bin_dir = dir.clone();
        }
        if let Some(url) = &cli.catalog_url {
            settings.catalog.url = url.clone();
        }
        settings.validate()?;

        let layout = StoreLayout::from_settings(&settings)?;
        let catalog_url = parse_catalog_url(&settings.catalog.url)?;
        log::debug!(
            "stores under {}, links in {}, catalog {}",
            layout.app_dir().display(),
            layout.bin_dir().display(),
            catalog_url
        );

        Ok(Self {
            settings,
            layout,
            catalog_url,
        })
    }

    pub fn client(&self) -> Result<Client> {
        http::build_client(Duration::from_secs(self.settings.catalog.timeout_secs))
            .context("Failed to build HTTP client")
    }

    pub fn session_options(&self) -> Result<SessionOptions> {
        Ok(SessionOptions {
            catalog_url: self.catalog_url.clone(),
            catalog_limit: self.settings.catalog.limit,
            platform: Platform::current()?,
            keep_archives: self.settings.store.keep_archives,
            after_activate: self.settings.session.after_activate,
            progress: Some(progress_callback),
        })
    }

    pub fn download_options(&self, tool: Tool) -> Result<DownloadOptions> {
        Ok(DownloadOptions {
            catalog_url: self.catalog_url.clone(),
            store_root: self.layout.store_root(tool),
            platform: Platform::current()?,
            keep_archives: self.settings.store.keep_archives,
            progress: Some(progress_callback),
        })
    }
}
