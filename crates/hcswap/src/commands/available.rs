//! Available command - versions published on the release index

use crate::context::Context;
use anyhow::{Result, bail};
use hcswap::output::print_json;
use hcswap_core::Tool;
use hcswap_core::store::inspect;
use hcswap_release::list_versions;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct AvailableVersion {
    version: String,
    installed: bool,
}

pub fn run(ctx: &Context, tool: Tool, limit: Option<usize>, json: bool) -> Result<()> {
    let limit = limit.unwrap_or(ctx.settings.catalog.limit);
    if limit == 0 {
        bail!("--limit must be at least 1");
    }

    let client = ctx.client()?;
    let versions = list_versions(&client, &ctx.catalog_url, tool, limit)?;

    let store = ctx.layout.store_root(tool);
    let installed = inspect(&store)?;
    let report: Vec<AvailableVersion> = versions
        .into_iter()
        .map(|version| AvailableVersion {
            installed: installed.versions().contains(&version),
            version,
        })
        .collect();

    if json {
        print_json(&serde_json::to_string_pretty(&report)?)?;
        return Ok(());
    }

    if report.is_empty() {
        println!(
            "No {} versions available from {}",
            tool.canonical_name(),
            ctx.catalog_url
        );
        return Ok(());
    }

    for entry in &report {
        if entry.installed {
            println!("{} (installed)", entry.version);
        } else {
            println!("{}", entry.version);
        }
    }

    Ok(())
}
