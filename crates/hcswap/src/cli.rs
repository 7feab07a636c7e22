//! CLI command structure using clap

use clap::{ArgAction, Parser, Subcommand};
use hcswap_core::Tool;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "hc-swap")]
#[command(version, about = "Install and switch between Terraform, Packer and Vault versions", long_about = None)]
pub struct Cli {
    /// Starts an interactive session when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Settings file (default: <config dir>/hc-swap/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Directory holding the <tool>-versions stores
    #[arg(long, global = true, env = "HC_SWAP_APP_DIR", value_name = "PATH")]
    pub app_dir: Option<PathBuf>,

    /// Directory where the active links are created
    #[arg(long, global = true, env = "HC_SWAP_BIN_DIR", value_name = "PATH")]
    pub bin_dir: Option<PathBuf>,

    /// Base URL of the release index
    #[arg(long, global = true, env = "HC_SWAP_CATALOG_URL", value_name = "URL")]
    pub catalog_url: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Interactive install / switch / uninstall session
    Session {
        /// Skip the tool prompt
        #[arg(long)]
        tool: Option<Tool>,
    },

    /// List installed versions
    List {
        tool: Tool,

        #[arg(long)]
        json: bool,
    },

    /// List versions published on the release index
    Available {
        tool: Tool,

        /// How many listing entries to show
        #[arg(long)]
        limit: Option<usize>,

        #[arg(long)]
        json: bool,
    },

    /// Download and install versions, activating the last one
    Install {
        tool: Tool,

        /// Versions to install, in order (e.g. "1.6.0")
        #[arg(required = true)]
        versions: Vec<String>,

        /// Leave the active link untouched
        #[arg(long)]
        no_activate: bool,
    },

    /// Point the active link at an installed version
    Use { tool: Tool, version: String },

    /// Remove an installed version
    Uninstall { tool: Tool, version: String },

    /// Show the active version
    Current {
        tool: Tool,

        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    /// Initialize logging based on verbosity level
    pub fn init_logging(&self) {
        let level = match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        };

        env_logger::Builder::from_default_env()
            .filter_level(level)
            .init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_command_means_session() {
        let cli = Cli::try_parse_from(["hc-swap"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_tool_argument_is_case_insensitive() {
        let cli = Cli::try_parse_from(["hc-swap", "list", "Terraform"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::List {
                tool: Tool::Terraform,
                json: false
            })
        ));
    }

    #[test]
    fn test_unknown_tool_is_rejected() {
        assert!(Cli::try_parse_from(["hc-swap", "list", "consul"]).is_err());
    }

    #[test]
    fn test_install_requires_a_version() {
        assert!(Cli::try_parse_from(["hc-swap", "install", "vault"]).is_err());
    }

    #[test]
    fn test_verbose_is_counted() {
        let cli = Cli::try_parse_from(["hc-swap", "-vv", "current", "packer"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }
}
