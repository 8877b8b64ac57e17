use anyhow::Result;
use clap::Parser;

mod cli;

use cli::commands::{
    inspect::InspectCommand, load_flow, reset::ResetCommand, run::RunCommand,
    status::StatusCommand, Command,
};
use cli::{Cli, Commands};
use welcome_flow::init_telemetry;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = welcome_flow::config()?.clone();
    if let Some(store) = cli.store {
        config.store.path = store;
    }
    if cli.verbose {
        config.observability.log_level = "debug".to_string();
    }
    init_telemetry(&config.observability)?;

    match cli.command {
        Commands::Run {
            flow,
            commands,
            force,
        } => RunCommand::new(load_flow(&config, &flow)?, config.completion_store())
            .with_commands(commands)
            .with_force(force)
            .execute(),
        Commands::Inspect { flow } => InspectCommand::new(load_flow(&config, &flow)?).execute(),
        Commands::Status { key } => StatusCommand::new(config.completion_store())
            .with_key(key)
            .execute(),
        Commands::Reset { key } => ResetCommand::new(config.completion_store(), key).execute(),
    }
}
