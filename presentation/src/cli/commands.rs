//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for home-relay
#[derive(Parser, Debug)]
#[command(name = "home-relay")]
#[command(author, version, about = "Smart-home relay between a local LLM and a device service")]
#[command(long_about = r#"
home-relay sits between a text-generation backend and a smart-home device
service. The model answers in free text; whenever that text contains a device
operation (list, get or update), the relay runs it against the device service
and feeds the result back to the model, for at most a few rounds.

Configuration files are loaded from (in priority order):
1. RELAY_* environment variables (e.g. RELAY_MODEL__NAME)
2. --config <path>        Explicit config file
3. ./home-relay.toml      Project-level config
4. ~/.config/home-relay/config.toml   Global config

Example:
  home-relay serve --port 8090
  home-relay ask "turn on the desk lamp"
  home-relay -vv ask --max-rounds 3 "which lights are on?"
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP relay
    Serve {
        /// Port to listen on (overrides `server.port`)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Relay a single prompt and print the response as JSON
    Ask {
        /// The request for the smart-home assistant
        prompt: String,

        /// Maximum tool rounds (overrides `agent.max_tool_rounds`)
        #[arg(long, value_name = "N")]
        max_rounds: Option<usize>,

        /// Suppress per-round progress output
        #[arg(short, long)]
        quiet: bool,
    },
}
