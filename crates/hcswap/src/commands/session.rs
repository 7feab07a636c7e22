//! Interactive session - the default when no command is given

use crate::context::Context;
use anyhow::Result;
use hcswap::{InquireChooser, Session};
use hcswap_core::Tool;

pub fn run(ctx: &Context, tool: Option<Tool>) -> Result<()> {
    let mut session = Session::new(
        InquireChooser,
        ctx.client()?,
        ctx.layout.clone(),
        ctx.session_options()?,
    );
    session.run(tool)?;
    Ok(())
}
