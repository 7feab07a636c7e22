//! Lifecycle engine for one interactive session
//!
//! ```text
//! SelectTool ──► InspectStore ──Missing──► FirstInstall ──► (end)
//!                    ▲    │
//!                    │    └─Empty/Populated─► Menu
//!                    │                         ├─ <version>   → activate → policy
//!                    │                         ├─ Install New → fetch + activate → policy
//!                    └─────────────────────────├─ Uninstall   → remove
//!                                              └─ Exit        → (end)
//! ```
//!
//! "policy" is [`AfterActivate`]: back to `InspectStore`, or end the session.
//! Cancelling any prompt ends the session without an error.

use crate::chooser::{Chooser, PromptError};
use colored::Colorize;
use hcswap_core::store::{
    self, ActivateError, PathStatus, StoreState, activate, active_version, path_status,
    show_version,
};
use hcswap_core::{AfterActivate, StoreLayout, SwapError, Tool};
use hcswap_release::{DownloadOptions, FetchError, Platform, install_version, list_versions};
use reqwest::blocking::Client;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use url::Url;

pub const INSTALL_NEW: &str = "Install New";
pub const UNINSTALL: &str = "Uninstall";
pub const EXIT: &str = "Exit";

pub const TOOL_PROMPT: &str = "Tool Select";
pub const FIRST_INSTALL_PROMPT: &str = "Select version to install:";
pub const VERSION_PROMPT: &str = "Select Version";
pub const UNINSTALL_PROMPT: &str = "Select version to uninstall:";

#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Activate(#[from] ActivateError),

    #[error(transparent)]
    Swap(#[from] SwapError),

    #[error(transparent)]
    Prompt(#[from] PromptError),

    #[error("IO_ERROR: failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: io::Error,
    },
}

/// Where the session goes next
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    SelectTool,
    InspectStore(Tool),
    FirstInstall(Tool),
    Menu(Tool, Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flow {
    Next(Step),
    Exit,
}

/// Settings a session needs beyond the store layout
#[derive(Debug, Clone)]
pub struct SessionOptions {
    pub catalog_url: Url,
    pub catalog_limit: usize,
    pub platform: Platform,
    pub keep_archives: bool,
    pub after_activate: AfterActivate,
    pub progress: Option<fn(u64, u64)>,
}

pub struct Session<C: Chooser> {
    chooser: C,
    client: Client,
    layout: StoreLayout,
    options: SessionOptions,
}

impl<C: Chooser> Session<C> {
    pub fn new(chooser: C, client: Client, layout: StoreLayout, options: SessionOptions) -> Self {
        Self {
            chooser,
            client,
            layout,
            options,
        }
    }

    pub fn chooser(&self) -> &C {
        &self.chooser
    }

    /// Drives the session until it ends
    ///
    /// With `tool` given, the tool prompt is skipped.
    pub fn run(&mut self, tool: Option<Tool>) -> Result<(), EngineError> {
        let mut step = match tool {
            Some(tool) => Step::InspectStore(tool),
            None => Step::SelectTool,
        };

        loop {
            log::debug!("session step: {:?}", step);

            let flow = match step {
                Step::SelectTool => self.select_tool()?,
                Step::InspectStore(tool) => self.inspect_store(tool)?,
                Step::FirstInstall(tool) => self.first_install(tool)?,
                Step::Menu(tool, versions) => self.menu(tool, versions)?,
            };

            match flow {
                Flow::Next(next) => step = next,
                Flow::Exit => return Ok(()),
            }
        }
    }

    fn select_tool(&mut self) -> Result<Flow, EngineError> {
        let options: Vec<String> = Tool::ALL
            .iter()
            .map(|tool| tool.display_name().to_string())
            .collect();

        let Some(choice) = self.chooser.choose(TOOL_PROMPT, &options)? else {
            return Ok(Flow::Exit);
        };

        let tool = Tool::from_display_name(&choice).ok_or(SwapError::UnknownTool(choice))?;
        Ok(Flow::Next(Step::InspectStore(tool)))
    }

    fn inspect_store(&mut self, tool: Tool) -> Result<Flow, EngineError> {
        let root = self.layout.store_root(tool);
        let state = store::inspect(&root).map_err(|e| EngineError::Io {
            operation: format!("inspect store {}", root.display()),
            source: e,
        })?;

        Ok(match state {
            StoreState::Missing => Flow::Next(Step::FirstInstall(tool)),
            StoreState::Empty => Flow::Next(Step::Menu(tool, Vec::new())),
            StoreState::Populated(versions) => Flow::Next(Step::Menu(tool, versions)),
        })
    }

    fn first_install(&mut self, tool: Tool) -> Result<Flow, EngineError> {
        let root = self.layout.store_root(tool);
        println!("No {} installations found", tool.canonical_name());
        println!("Setting up version store at {}", root.display());

        fs::create_dir_all(&root).map_err(|e| EngineError::Io {
            operation: format!("create store {}", root.display()),
            source: e,
        })?;

        let available = self.fetch_catalog(tool)?;
        if available.is_empty() {
            self.report_empty_catalog(tool);
            return Ok(Flow::Exit);
        }

        let Some(version) = self.chooser.choose(FIRST_INSTALL_PROMPT, &available)? else {
            return Ok(Flow::Exit);
        };

        self.install_and_activate(tool, &version)?;
        Ok(Flow::Exit)
    }

    fn menu(&mut self, tool: Tool, versions: Vec<String>) -> Result<Flow, EngineError> {
        let root = self.layout.store_root(tool);
        match active_link(tool, &root, self.layout.bin_dir()) {
            Some(ActiveLink::Installed(active)) => println!("{} {} is active", tool, active.cyan()),
            Some(ActiveLink::Dangling(active)) => println!(
                "{} {} points at {} {}, which is no longer installed",
                "!".yellow(),
                self.layout.link_path(tool).display(),
                tool,
                active
            ),
            None => {}
        }

        let mut options = versions.clone();
        options.extend([INSTALL_NEW, UNINSTALL, EXIT].map(String::from));

        let Some(choice) = self.chooser.choose(VERSION_PROMPT, &options)? else {
            return Ok(Flow::Exit);
        };

        match choice.as_str() {
            INSTALL_NEW => self.install_new(tool),
            UNINSTALL => self.uninstall(tool, versions),
            EXIT => Ok(Flow::Exit),
            version => {
                self.activate(tool, version)?;
                Ok(self.after_activation(tool))
            }
        }
    }

    fn install_new(&mut self, tool: Tool) -> Result<Flow, EngineError> {
        let available = self.fetch_catalog(tool)?;
        if available.is_empty() {
            self.report_empty_catalog(tool);
            return Ok(Flow::Next(Step::InspectStore(tool)));
        }

        let Some(version) = self.chooser.choose(VERSION_PROMPT, &available)? else {
            return Ok(Flow::Exit);
        };

        self.install_and_activate(tool, &version)?;
        Ok(self.after_activation(tool))
    }

    fn uninstall(&mut self, tool: Tool, mut versions: Vec<String>) -> Result<Flow, EngineError> {
        versions.push(EXIT.to_string());

        let Some(version) = self.chooser.choose(UNINSTALL_PROMPT, &versions)? else {
            return Ok(Flow::Exit);
        };

        if version == EXIT {
            return Ok(Flow::Next(Step::InspectStore(tool)));
        }

        let root = self.layout.store_root(tool);
        let was_active = active_version(tool, &root, self.layout.bin_dir())
            .is_some_and(|active| active == version);

        store::uninstall(tool, &root, &version).map_err(|e| EngineError::Io {
            operation: format!("remove {}", root.join(&version).display()),
            source: e,
        })?;

        println!("{} Uninstalled {} {}", "✓".green().bold(), tool, version);

        if was_active {
            println!(
                "{} {} still points at the removed {}; select another version to repair it",
                "!".yellow(),
                self.layout.link_path(tool).display(),
                version
            );
        }

        Ok(Flow::Next(Step::InspectStore(tool)))
    }

    fn after_activation(&self, tool: Tool) -> Flow {
        match self.options.after_activate {
            AfterActivate::Menu => Flow::Next(Step::InspectStore(tool)),
            AfterActivate::Exit => Flow::Exit,
        }
    }

    fn fetch_catalog(&self, tool: Tool) -> Result<Vec<String>, EngineError> {
        println!("Fetching available {} versions...", tool.canonical_name());
        Ok(list_versions(
            &self.client,
            &self.options.catalog_url,
            tool,
            self.options.catalog_limit,
        )?)
    }

    fn report_empty_catalog(&self, tool: Tool) {
        println!(
            "{} No {} versions available from {}",
            "!".yellow(),
            tool.canonical_name(),
            self.options.catalog_url
        );
    }

    fn install_and_activate(&self, tool: Tool, version: &str) -> Result<(), EngineError> {
        let download = DownloadOptions {
            catalog_url: self.options.catalog_url.clone(),
            store_root: self.layout.store_root(tool),
            platform: self.options.platform,
            keep_archives: self.options.keep_archives,
            progress: self.options.progress,
        };

        println!("Downloading {} {}...", tool, version);
        let dir = install_version(&self.client, tool, version, &download)?;
        println!("{} Installed {} {} to {}", "✓".green().bold(), tool, version, dir.display());

        self.activate(tool, version)?;
        Ok(())
    }

    fn activate(&self, tool: Tool, version: &str) -> Result<PathBuf, EngineError> {
        let link = activate(
            tool,
            &self.layout.store_root(tool),
            version,
            self.layout.bin_dir(),
        )?;

        println!(
            "{} {} now points to {} {}",
            "✓".green().bold(),
            link.display(),
            tool,
            version
        );
        show_version(&link);
        warn_if_not_reachable(tool, &link);
        Ok(link)
    }
}

/// State of the tool's link relative to its store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActiveLink {
    /// The link points into an installed version
    Installed(String),
    /// The version the link points into has been removed
    Dangling(String),
}

pub fn active_link(tool: Tool, store_root: &Path, bin_dir: &Path) -> Option<ActiveLink> {
    let version = active_version(tool, store_root, bin_dir)?;
    if store_root.join(&version).is_dir() {
        Some(ActiveLink::Installed(version))
    } else {
        Some(ActiveLink::Dangling(version))
    }
}

/// Tells the user when invoking the tool by name will not reach `link`
pub fn warn_if_not_reachable(tool: Tool, link: &Path) {
    match path_status(tool, link) {
        PathStatus::Active => {}
        PathStatus::Shadowed(found) => println!(
            "{} `{}` resolves to {} which comes before {} on PATH",
            "!".yellow(),
            tool.canonical_name(),
            found.display(),
            link.display()
        ),
        PathStatus::NotOnPath => println!(
            "{} {} is not on PATH",
            "!".yellow(),
            link.parent().unwrap_or(link).display()
        ),
    }
}
