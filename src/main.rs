//! dockswap - Swap between docker-compose based project environments
//!
//! Registers named composers (docker-compose file + optional env file) per
//! project and shells out to docker/docker-compose to start, stop, list,
//! and delete them.

use anyhow::Result;
use clap::Parser;

mod cli;
mod composer;
mod config;
mod docker;
mod version;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    // Ensure configuration directory exists on startup
    config::ensure_config_dir()?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Add {
            project_name,
            path,
            env_path,
        } => {
            composer::commands::add(&project_name, &path, env_path.as_deref())?;
        }
        Commands::Delete { project_name } => {
            composer::commands::delete(&project_name)?;
        }
        Commands::List { full, .. } => {
            composer::commands::list(full)?;
        }
        Commands::Prune { dry, .. } => {
            composer::commands::prune(dry)?;
        }
        Commands::Start {
            project_name,
            remove_other,
            dry,
            service,
            ..
        } => {
            composer::commands::start(&project_name, remove_other, dry, &service)?;
        }
        Commands::Stop {
            project_name,
            remove_other,
            dry,
            ..
        } => {
            composer::commands::stop(&project_name, remove_other, dry)?;
        }
        Commands::Stopall { remove, dry, .. } => {
            composer::commands::stopall(remove, dry)?;
        }
        Commands::Version { part, mini } => {
            version::print(part, mini);
        }
    }

    Ok(())
}
