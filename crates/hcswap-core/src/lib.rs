//! Core model and on-disk state management for hc-swap.
//!
//! - [`tool`]: the supported tools and version identifiers
//! - [`config`]: user settings (`config.toml`)
//! - [`store`]: version store layout, inspection, activation and uninstall
//!
//! Network access lives in `hcswap-release`; this crate only touches the
//! local filesystem.

// Core modules
pub mod config;
pub mod error;
pub mod store;
pub mod tool;

// Re-export commonly used types
pub use config::{AfterActivate, Settings};
pub use error::{Result, SwapError};
pub use store::{StoreLayout, StoreState};
pub use tool::Tool;
