use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SwapError {
    // Tool / version errors
    #[error("TOOL_UNKNOWN: '{0}' is not a supported tool (expected terraform, packer or vault)")]
    UnknownTool(String),

    #[error("VERSION_INVALID: '{version}' is not a valid version identifier: {reason}")]
    InvalidVersion { version: String, reason: String },

    #[error("VERSION_NOT_INSTALLED: {tool} {version} is not installed in {store}")]
    VersionNotInstalled {
        tool: String,
        version: String,
        store: PathBuf,
    },

    // Config errors
    #[error("CONFIG_PARSE_ERROR: failed to read {path}: {reason}")]
    ConfigParseError { path: PathBuf, reason: String },

    #[error("CONFIG_INVALID_VALUE: {field}: {reason}")]
    ConfigInvalidValue { field: String, reason: String },

    #[error("HOME_NOT_FOUND: could not determine the home directory")]
    HomeNotFound,

    // IO errors
    #[error("IO_ERROR: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SwapError>;
