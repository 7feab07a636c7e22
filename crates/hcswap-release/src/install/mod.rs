pub mod download;
pub mod extract;

// Re-export for convenience
pub use download::{DownloadOptions, artifact_url, download, install_version};
pub use extract::{ExtractError, extract};
