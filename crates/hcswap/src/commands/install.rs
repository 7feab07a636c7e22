//! Install command - download release archives into the version store

use super::report_activation;
use crate::context::Context;
use anyhow::Result;
use colored::Colorize;
use hcswap_core::Tool;
use hcswap_core::store::activate;
use hcswap_core::tool::validate_version;
use hcswap_release::download;

/// Installs `versions` in order and activates the last one
///
/// Nothing is downloaded unless every version is a valid identifier.
pub fn run(ctx: &Context, tool: Tool, versions: &[String], no_activate: bool) -> Result<()> {
    for version in versions {
        validate_version(version)?;
    }

    let client = ctx.client()?;
    let options = ctx.download_options(tool)?;
    println!(
        "Installing {} {} for {}...",
        tool,
        versions.join(", "),
        options.platform
    );

    let installed = download(&client, tool, versions, &options)?;
    for dir in &installed {
        println!("{} Installed to: {}", "✓".green().bold(), dir.display());
    }

    if no_activate {
        return Ok(());
    }

    if let Some(last) = versions.last() {
        let link = activate(tool, &options.store_root, last, ctx.layout.bin_dir())?;
        report_activation(tool, last, &link);
    }

    Ok(())
}
