mod cli;
mod commands;
mod context;

use clap::Parser;
use cli::{Cli, Commands};
use context::Context;

fn main() {
    let cli = Cli::parse();
    cli.init_logging();

    let result = Context::new(&cli).and_then(|ctx| match cli.command {
        None => commands::session::run(&ctx, None),
        Some(Commands::Session { tool }) => commands::session::run(&ctx, tool),
        Some(Commands::List { tool, json }) => commands::list::run(&ctx, tool, json),
        Some(Commands::Available { tool, limit, json }) => {
            commands::available::run(&ctx, tool, limit, json)
        }
        Some(Commands::Install {
            tool,
            versions,
            no_activate,
        }) => commands::install::run(&ctx, tool, &versions, no_activate),
        Some(Commands::Use { tool, version }) => commands::use_version::run(&ctx, tool, &version),
        Some(Commands::Uninstall { tool, version }) => {
            commands::uninstall::run(&ctx, tool, &version)
        }
        Some(Commands::Current { tool, json }) => commands::current::run(&ctx, tool, json),
    });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
