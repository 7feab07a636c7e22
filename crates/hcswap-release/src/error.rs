use crate::install::ExtractError;
use hcswap_core::SwapError;
use std::io;
use thiserror::Error;
use url::Url;

/// Catalog and download errors
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request could not be sent or the body could not be read
    #[error("NETWORK_FETCH_FAILED: request to {url} failed: {source}")]
    Request {
        url: Url,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status
    #[error("NETWORK_FETCH_FAILED: {url} answered {status}")]
    Status {
        url: Url,
        status: reqwest::StatusCode,
    },

    #[error("CATALOG_URL_INVALID: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("PLATFORM_UNSUPPORTED: {0}")]
    UnsupportedPlatform(String),

    #[error("IO_ERROR: failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Extract(#[from] ExtractError),

    #[error(transparent)]
    Core(#[from] SwapError),
}
