//! Uninstall command - remove a version from the store

use crate::context::Context;
use anyhow::Result;
use colored::Colorize;
use hcswap_core::Tool;
use hcswap_core::store::{active_version, uninstall};
use hcswap_core::tool::validate_version;

/// Removes the version directory; removing an absent version succeeds
///
/// The active link is not touched. When it pointed into the removed
/// version the user is told that it now dangles.
pub fn run(ctx: &Context, tool: Tool, version: &str) -> Result<()> {
    validate_version(version)?;

    let store = ctx.layout.store_root(tool);
    let was_active = active_version(tool, &store, ctx.layout.bin_dir())
        .is_some_and(|active| active == version);

    uninstall(tool, &store, version)?;
    println!("{} Uninstalled {} {}", "✓".green().bold(), tool, version);

    if was_active {
        println!(
            "{} {} still points at the removed {}; run `hc-swap use {} <version>` to repair it",
            "!".yellow(),
            ctx.layout.link_path(tool).display(),
            version,
            tool.canonical_name()
        );
    }

    Ok(())
}
