//! Release archive download and installation into a version store
//!
//! For each requested version:
//!
//! 1. Create `<store_root>/<version>/`
//! 2. Stream `<tool>_<version>_<os>_<arch>.zip` into `<version>.zip` there
//! 3. Extract it in place
//! 4. Remove the archive unless `keep_archives` is set
//!
//! A failed step leaves whatever was already written; the store is not
//! rolled back.

use crate::error::FetchError;
use crate::install::extract::extract;
use crate::platform::Platform;
use hcswap_core::Tool;
use hcswap_core::tool::validate_version;
use reqwest::blocking::Client;
use std::fs;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use url::Url;

/// Download configuration options
#[derive(Debug, Clone)]
pub struct DownloadOptions {
    /// Base of the release index, e.g. `https://releases.hashicorp.com/`
    pub catalog_url: Url,

    /// `<app_dir>/<tool>-versions`
    pub store_root: PathBuf,

    /// Target of the artifacts to fetch
    pub platform: Platform,

    /// Keep `<version>.zip` after extraction
    pub keep_archives: bool,

    /// Optional progress callback (bytes_downloaded, total_bytes)
    pub progress: Option<fn(u64, u64)>,
}

/// Installs every version in order, stopping at the first failure
///
/// Versions installed before the failure remain in the store.
///
/// # Returns
///
/// The version directories that were populated
pub fn download(
    client: &Client,
    tool: Tool,
    versions: &[String],
    options: &DownloadOptions,
) -> Result<Vec<PathBuf>, FetchError> {
    let mut installed = Vec::with_capacity(versions.len());

    for version in versions {
        let dir = install_version(client, tool, version, options)?;
        installed.push(dir);
    }

    Ok(installed)
}

/// Installs a single version into `<store_root>/<version>/`
///
/// Re-installing an existing version overwrites files with the same names.
///
/// # Errors
///
/// - `Core` if `version` is not a plain path segment
/// - `Request`/`Status` if the artifact cannot be fetched
/// - `Extract` if the archive is corrupt or hostile
/// - `Io` on filesystem failures
pub fn install_version(
    client: &Client,
    tool: Tool,
    version: &str,
    options: &DownloadOptions,
) -> Result<PathBuf, FetchError> {
    validate_version(version)?;

    let version_dir = options.store_root.join(version);
    fs::create_dir_all(&version_dir).map_err(|e| FetchError::Io {
        operation: format!("create version directory {}", version_dir.display()),
        source: e,
    })?;

    let url = artifact_url(&options.catalog_url, tool, version, options.platform)?;
    let archive_path = version_dir.join(format!("{version}.zip"));

    log::info!("downloading {} {} from {}", tool, version, url);
    let bytes = download_to_file(client, &url, &archive_path, options.progress)?;
    log::debug!("wrote {} bytes to {}", bytes, archive_path.display());

    extract(&archive_path, &version_dir)?;

    if !options.keep_archives {
        fs::remove_file(&archive_path).map_err(|e| FetchError::Io {
            operation: format!("remove archive {}", archive_path.display()),
            source: e,
        })?;
    }

    Ok(version_dir)
}

/// `<catalog>/<tool>/<version>/<tool>_<version>_<os>_<arch>.zip`
pub fn artifact_url(
    catalog_url: &Url,
    tool: Tool,
    version: &str,
    platform: Platform,
) -> Result<Url, FetchError> {
    let name = tool.canonical_name();
    let relative = format!(
        "{name}/{version}/{name}_{version}_{}.zip",
        platform.suffix()
    );
    Ok(crate::catalog::base_url(catalog_url).join(&relative)?)
}

/// Streams the response body into `path`
///
/// # Returns
///
/// Number of bytes written
fn download_to_file(
    client: &Client,
    url: &Url,
    path: &Path,
    progress: Option<fn(u64, u64)>,
) -> Result<u64, FetchError> {
    let mut response = client
        .get(url.as_str())
        .send()
        .map_err(|e| FetchError::Request {
            url: url.clone(),
            source: e,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            url: url.clone(),
            status,
        });
    }

    let total = response.content_length();

    let mut file = fs::File::create(path).map_err(|e| FetchError::Io {
        operation: format!("create archive {}", path.display()),
        source: e,
    })?;

    let mut downloaded: u64 = 0;
    let mut buffer = [0; 8192];

    loop {
        let bytes_read = response.read(&mut buffer).map_err(|e| FetchError::Io {
            operation: "read from HTTP response".to_string(),
            source: e,
        })?;

        if bytes_read == 0 {
            break;
        }

        file.write_all(&buffer[..bytes_read])
            .map_err(|e| FetchError::Io {
                operation: format!("write to {}", path.display()),
                source: e,
            })?;

        downloaded += bytes_read as u64;

        if let Some(callback) = progress {
            callback(downloaded, total.unwrap_or(downloaded));
        }
    }

    file.sync_all().map_err(|e| FetchError::Io {
        operation: format!("sync {}", path.display()),
        source: e,
    })?;

    Ok(downloaded)
}
