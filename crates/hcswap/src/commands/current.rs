//! Current command - show the version the active link points into

use crate::context::Context;
use anyhow::Result;
use hcswap::output::print_json;
use hcswap_core::Tool;
use hcswap_core::store::active_version;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Serialize)]
struct CurrentReport {
    tool: Tool,
    link: PathBuf,
    version: Option<String>,
    /// False when the link points into a version that was removed
    installed: bool,
}

pub fn run(ctx: &Context, tool: Tool, json: bool) -> Result<()> {
    let store = ctx.layout.store_root(tool);
    let version = active_version(tool, &store, ctx.layout.bin_dir());
    let installed = version
        .as_deref()
        .is_some_and(|version| store.join(version).is_dir());

    let report = CurrentReport {
        tool,
        link: ctx.layout.link_path(tool),
        version,
        installed,
    };

    if json {
        print_json(&serde_json::to_string_pretty(&report)?)?;
        return Ok(());
    }

    match &report.version {
        Some(version) if report.installed => println!("{} {}", tool.canonical_name(), version),
        Some(version) => println!(
            "{} {} (removed from the store; {} is dangling)",
            tool.canonical_name(),
            version,
            report.link.display()
        ),
        None => println!("No active {} version", tool.canonical_name()),
    }

    Ok(())
}
