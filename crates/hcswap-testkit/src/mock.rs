//! Catalog routes on a `mockito` server
//!
//! Paths mirror the real release index:
//! `/<tool>/` for the listing and `/<tool>/<version>/<file>.zip` for artifacts.

use crate::fixtures::listing_html;
use mockito::{Mock, ServerGuard};

/// Serves the listing page for `tool`
pub fn mock_listing(server: &mut ServerGuard, tool: &str, versions: &[&str]) -> Mock {
    server
        .mock("GET", format!("/{tool}/").as_str())
        .with_status(200)
        .with_header("content-type", "text/html")
        .with_body(listing_html(tool, versions))
        .create()
}

/// Serves `body` as the artifact at `/<tool>/<version>/<tool>_<version>_<platform>.zip`
///
/// `platform` is the `<os>_<arch>` suffix, e.g. `linux_amd64`.
pub fn mock_artifact(
    server: &mut ServerGuard,
    tool: &str,
    version: &str,
    platform: &str,
    body: &[u8],
) -> Mock {
    server
        .mock(
            "GET",
            format!("/{tool}/{version}/{tool}_{version}_{platform}.zip").as_str(),
        )
        .with_status(200)
        .with_header("content-type", "application/zip")
        .with_body(body)
        .create()
}

/// Answers `path` with the given status and an empty body
pub fn mock_status(server: &mut ServerGuard, path: &str, status: usize) -> Mock {
    server.mock("GET", path).with_status(status).create()
}
