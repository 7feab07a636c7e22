//! Remote side of hc-swap: the release catalog and archive installation.
//!
//! # Install Flow
//!
//! ```text
//! list_versions(tool)
//!     → GET {catalog}/{tool}/            (HTML listing, anchors only)
//!     → first N version tokens
//! download(tool, [versions])
//!     for each version, in order:
//!     → mkdir {store}/{version}/
//!     → GET {catalog}/{tool}/{version}/{tool}_{version}_{os}_{arch}.zip
//!     → {store}/{version}/{version}.zip
//!     → extract into {store}/{version}/  (traversal-checked)
//!     → remove the archive unless keep_archives
//! ```
//!
//! Everything is blocking and sequential; the first failure aborts a batch.

pub mod catalog;
pub mod error;
pub mod http;
pub mod install;
pub mod platform;

pub use catalog::{list_versions, parse_listing};
pub use error::FetchError;
pub use install::{DownloadOptions, ExtractError, download, extract, install_version};
pub use platform::{Arch, Os, Platform};
