pub mod available;
pub mod current;
pub mod install;
pub mod list;
pub mod session;
pub mod uninstall;
pub mod use_version;

use colored::Colorize;
use hcswap::engine::warn_if_not_reachable;
use hcswap_core::Tool;
use hcswap_core::store::show_version;
use std::path::Path;

/// Success line, `--version` banner and PATH check after a link change
fn report_activation(tool: Tool, version: &str, link: &Path) {
    println!(
        "{} {} now points to {} {}",
        "✓".green().bold(),
        link.display(),
        tool,
        version
    );
    show_version(link);
    warn_if_not_reachable(tool, link);
}
