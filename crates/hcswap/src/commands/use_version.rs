//! Use command - activate an installed version

use super::report_activation;
use crate::context::Context;
use anyhow::Result;
use hcswap_core::store::activate;
use hcswap_core::tool::validate_version;
use hcswap_core::{SwapError, Tool};

pub fn run(ctx: &Context, tool: Tool, version: &str) -> Result<()> {
    validate_version(version)?;

    let store = ctx.layout.store_root(tool);
    if !store.join(version).is_dir() {
        return Err(SwapError::VersionNotInstalled {
            tool: tool.canonical_name().to_string(),
            version: version.to_string(),
            store,
        }
        .into());
    }

    let link = activate(tool, &store, version, ctx.layout.bin_dir())?;
    report_activation(tool, version, &link);
    Ok(())
}
