//! Release catalog: the HTML index listing published versions of a tool

mod listing;

pub use listing::{PROMO_HREF, normalize_href, parse_listing};

use crate::error::FetchError;
use hcswap_core::Tool;
use reqwest::blocking::Client;
use url::Url;

/// Parses a configured catalog location
pub fn parse_catalog_url(raw: &str) -> Result<Url, FetchError> {
    Ok(base_url(&Url::parse(raw.trim())?))
}

/// Catalog base with a trailing slash so relative joins append to it
pub(crate) fn base_url(url: &Url) -> Url {
    let mut base = url.clone();
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    base
}

/// `<catalog>/<tool>/`
pub fn listing_url(catalog_url: &Url, tool: Tool) -> Result<Url, FetchError> {
    Ok(base_url(catalog_url).join(&format!("{}/", tool.canonical_name()))?)
}

/// Fetches the tool's listing and returns at most `limit` versions in
/// document order
///
/// # Errors
///
/// `Request` or `Status` when the listing cannot be retrieved. A listing
/// without version links is not an error; it yields an empty list.
pub fn list_versions(
    client: &Client,
    catalog_url: &Url,
    tool: Tool,
    limit: usize,
) -> Result<Vec<String>, FetchError> {
    let url = listing_url(catalog_url, tool)?;
    log::debug!("fetching catalog listing {}", url);

    let response = client
        .get(url.as_str())
        .send()
        .map_err(|e| FetchError::Request {
            url: url.clone(),
            source: e,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status { url, status });
    }

    let body = response.text().map_err(|e| FetchError::Request {
        url: url.clone(),
        source: e,
    })?;

    let versions = parse_listing(&body, tool.canonical_name(), limit).map_err(|e| {
        FetchError::Io {
            operation: format!("parse catalog listing {}", url),
            source: e,
        }
    })?;

    log::debug!("catalog offered {} {} versions", versions.len(), tool);
    Ok(versions)
}
