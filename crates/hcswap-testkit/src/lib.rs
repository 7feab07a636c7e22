//! Test utilities for hc-swap
//!
//! This crate provides shared testing utilities used across the hc-swap workspace:
//!
//! - [`temp_dir_in_workspace`]: scratch directories under `.tmp/`
//! - [`fixtures`]: release archives and catalog listings built in memory
//! - [`mock`]: catalog and artifact routes on a `mockito` server

pub mod fixtures;
pub mod mock;

pub use fixtures::{ZipFixture, listing_html, release_zip};

use tempfile::TempDir;

/// Creates a temporary directory within `.tmp/` at the crate root
///
/// Keeps test scratch space next to the sources (gitignored) instead of the
/// system temp dir, so a failed run can be inspected.
///
/// # Returns
///
/// A `TempDir` instance that automatically cleans up on drop.
///
/// # Panics
///
/// Panics if:
/// - Unable to determine current directory
/// - Unable to create `.tmp/` directory
/// - Unable to create temporary subdirectory
///
/// # Examples
///
/// ```rust
/// use hcswap_testkit::temp_dir_in_workspace;
///
/// let temp = temp_dir_in_workspace();
/// let file_path = temp.path().join("test.txt");
/// std::fs::write(&file_path, "test data").unwrap();
/// ```
pub fn temp_dir_in_workspace() -> TempDir {
    try_temp_dir_in_workspace().expect("Failed to create temporary directory in .tmp/")
}

/// Alternative with Result for non-test code
pub fn try_temp_dir_in_workspace() -> std::io::Result<TempDir> {
    let workspace_root = std::env::current_dir()?;
    let tmp_base = workspace_root.join(".tmp");
    std::fs::create_dir_all(&tmp_base)?;
    TempDir::new_in(&tmp_base)
}
