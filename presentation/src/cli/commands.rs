//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for ecobot
#[derive(Parser, Debug)]
#[command(name = "ecobot")]
#[command(author, version, about = "EcoBot - economics tutor served over TCP")]
#[command(long_about = r#"
EcoBot answers economics questions for many concurrent TCP clients.

Each message is routed in order:
1. Chart: "grafico ..." requests render a PNG chart
2. Lookup: known concepts are answered from the built-in knowledge base
3. Generative: anything else goes to the configured completion provider

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./ecobot.toml       Project-level config
3. ~/.config/ecobot/config.toml   Global config

ECOBOT_SOCKET_PORT overrides the configured port.

Example:
  ecobot --port 5001
  ecobot -vv --no-admin
  ecobot connect 127.0.0.1:5001
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Address to bind (overrides config)
    #[arg(long, value_name = "HOST")]
    pub host: Option<String>,

    /// Port to bind (overrides config and ECOBOT_SOCKET_PORT)
    #[arg(short, long, value_name = "PORT")]
    pub port: Option<u16>,

    /// Do not start the admin console on stdin
    #[arg(long)]
    pub no_admin: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Connect to a running server as an interactive client
    Connect {
        /// Server address
        #[arg(default_value = "127.0.0.1:5001")]
        address: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_serve() {
        let cli = Cli::try_parse_from(["ecobot"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.port, None);
        assert!(!cli.no_admin);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_server_overrides() {
        let cli =
            Cli::try_parse_from(["ecobot", "--host", "127.0.0.1", "-p", "6000", "-vv", "--no-admin"])
                .unwrap();
        assert_eq!(cli.host.as_deref(), Some("127.0.0.1"));
        assert_eq!(cli.port, Some(6000));
        assert_eq!(cli.verbose, 2);
        assert!(cli.no_admin);
    }

    #[test]
    fn test_connect_subcommand() {
        let cli = Cli::try_parse_from(["ecobot", "connect"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Command::Connect {
                address: "127.0.0.1:5001".to_string()
            })
        );
        let cli = Cli::try_parse_from(["ecobot", "connect", "10.0.0.2:7000", "-v"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Command::Connect {
                address: "10.0.0.2:7000".to_string()
            })
        );
        assert_eq!(cli.verbose, 1);
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        assert!(Cli::try_parse_from(["ecobot", "--port", "70000"]).is_err());
    }
}
