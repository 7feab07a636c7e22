//! List command - installed versions with the active one marked

use crate::context::Context;
use anyhow::Result;
use colored::Colorize;
use hcswap::output::print_json;
use hcswap_core::Tool;
use hcswap_core::store::{active_version, inspect};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Serialize)]
struct InstalledVersion {
    version: String,
    active: bool,
}

#[derive(Debug, Serialize)]
struct ListReport {
    tool: Tool,
    store: PathBuf,
    versions: Vec<InstalledVersion>,
}

pub fn run(ctx: &Context, tool: Tool, json: bool) -> Result<()> {
    let store = ctx.layout.store_root(tool);
    let mut versions = inspect(&store)?.versions().to_vec();
    versions.sort();

    let active = active_version(tool, &store, ctx.layout.bin_dir());
    let report = ListReport {
        tool,
        store,
        versions: versions
            .into_iter()
            .map(|version| InstalledVersion {
                active: active.as_deref() == Some(version.as_str()),
                version,
            })
            .collect(),
    };

    if json {
        print_json(&serde_json::to_string_pretty(&report)?)?;
        return Ok(());
    }

    if report.versions.is_empty() {
        println!(
            "{} No {} versions installed in {}",
            "!".yellow(),
            tool.canonical_name(),
            report.store.display()
        );
        return Ok(());
    }

    for entry in &report.versions {
        if entry.active {
            println!("{} {}", "*".green().bold(), entry.version.green());
        } else {
            println!("  {}", entry.version);
        }
    }

    Ok(())
}

