//! Default values shared by the settings model and the CLI

/// Directory under the home directory holding every version store
pub const APP_DIR_NAME: &str = "hc-swap";

/// Directory holding the active links, expected to be on `PATH`
pub const DEFAULT_BIN_DIR: &str = "/usr/local/bin";

/// Release index serving both the per-tool listings and the archives
pub const DEFAULT_CATALOG_URL: &str = "https://releases.hashicorp.com/";

/// Catalog entries offered per prompt
pub const DEFAULT_CATALOG_LIMIT: usize = 10;

/// Download timeout; release archives run to tens of megabytes
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 300;

/// File name of the settings file inside `<config_dir>/hc-swap/`
pub const CONFIG_FILE_NAME: &str = "config.toml";
