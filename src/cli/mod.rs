use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod commands;

#[derive(Parser)]
#[command(name = "welcome-flow")]
#[command(about = "Page through onboarding flows and track which ones were completed")]
#[command(long_about = "welcome-flow drives a multi-page onboarding flow from a TOML definition, \
                       records completion in a local store, and skips flows that were already \
                       completed. Get started with 'welcome-flow run <flow>'.")]
pub struct Cli {
    /// Override the completion store file from configuration
    #[arg(long, global = true, help = "Path of the JSON completion store")]
    pub store: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true, help = "Log navigation decisions at debug level")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show a flow and drive it with commands until it finishes
    Run {
        /// Flow definition file, or a name inside the configured flows directory
        flow: String,
        /// Comma separated commands (next, prev, skip, done, back, home, dismiss, goto:N)
        #[arg(long, value_delimiter = ',', help = "Scripted commands; read from stdin when omitted")]
        commands: Option<Vec<String>>,
        /// Show the flow even if it was already completed
        #[arg(long, help = "Ignore the completion flag and show the flow anyway")]
        force: bool,
    },
    /// Print a flow's pages and policies without running it
    Inspect {
        /// Flow definition file, or a name inside the configured flows directory
        flow: String,
    },
    /// Show completion state for one key, or list all completed keys
    Status {
        /// Identity key to check
        key: Option<String>,
    },
    /// Forget a completion so the flow shows again
    Reset {
        /// Identity key to reset
        key: String,
    },
}
