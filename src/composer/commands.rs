//! User-facing composer commands
//!
//! Each function here backs one CLI subcommand: it loads the registry and
//! configuration, does the work, and prints colored status output.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use colored::Colorize;

use crate::config::Config;
use crate::docker::compose::{validate_compose_file, validate_file};
use crate::docker::containers::{list_all_container_ids, render_stop_command, stop_containers};

use super::entry::{ComposeAction, ComposerEntry};
use super::registry::ComposerRegistry;

/// Register a composer for a project
pub fn add(project_name: &str, path: &Path, env_path: Option<&Path>) -> Result<()> {
    let mut registry = ComposerRegistry::load()?;

    if registry.is_registered(project_name) {
        anyhow::bail!(
            "Composer for project \"{}\" is already registered. Consider removing it first",
            project_name
        );
    }

    if let Some(env_path) = env_path {
        validate_file(env_path)?;
    }
    validate_compose_file(path)?;

    let entry = ComposerEntry {
        project_name: project_name.to_string(),
        compose_path: absolute(path)?,
        env_path: env_path.map(absolute).transpose()?,
    };

    registry.add(entry)?;

    println!(
        "{} Successfully registered composer for project \"{}\"",
        "✓".green(),
        project_name.bright_white()
    );

    Ok(())
}

/// List all registered composers
pub fn list(full: bool) -> Result<()> {
    let registry = ComposerRegistry::load()?;
    let composers = registry.all();

    if composers.is_empty() {
        println!("{}", "No composers registered".yellow());
        println!();
        println!(
            "Register one with {}",
            "dockswap add <project> --path <compose-file>".bright_white()
        );
        return Ok(());
    }

    for (i, composer) in composers.iter().enumerate() {
        println!("{}. {}", i + 1, composer.represent(full));
    }

    Ok(())
}

/// Delete a registered composer
pub fn delete(project_name: &str) -> Result<()> {
    let mut registry = ComposerRegistry::load()?;
    registry.delete(project_name)?;

    println!(
        "{} Successfully removed \"{}\" from registered composers",
        "✓".green(),
        project_name.bright_white()
    );

    Ok(())
}

/// Remove composers whose compose file no longer exists
pub fn prune(dry: bool) -> Result<()> {
    let mut registry = ComposerRegistry::load()?;
    let stale = registry.prune(dry)?;

    if stale.is_empty() {
        println!("{} Nothing to prune, all compose files exist", "✓".green());
        return Ok(());
    }

    for entry in &stale {
        println!(
            "{} {} ({} is gone)",
            if dry { "ℹ".blue() } else { "✗".red() },
            entry.project_name.bright_white(),
            entry.compose_path.display()
        );
    }

    if dry {
        println!(
            "{} Would prune {} composer(s)",
            "ℹ".blue(),
            stale.len().to_string().bright_white()
        );
    } else {
        println!(
            "{} Pruned {} composer(s)",
            "✓".green(),
            stale.len().to_string().bright_white()
        );
    }

    Ok(())
}

/// Start containers for a registered composer
pub fn start(
    project_name: &str,
    remove_other: bool,
    dry: bool,
    services: &[String],
) -> Result<()> {
    let config = Config::load()?;
    let registry = ComposerRegistry::load()?;
    let composer = registry.get(project_name)?;

    if dry {
        let command =
            composer.render_command(&config.docker.compose_cli, ComposeAction::Up, services);
        println!("{}", prefix_stop_command(&config, remove_other, command)?);
        return Ok(());
    }

    if remove_other {
        stop_other_containers(&config, true)?;
    }

    composer.run(&config.docker.compose_cli, ComposeAction::Up, services)?;

    println!("{} Successfully swapped a project!", "✓".green());

    Ok(())
}

/// Stop containers for a registered composer
pub fn stop(project_name: &str, remove_other: bool, dry: bool) -> Result<()> {
    let config = Config::load()?;
    let registry = ComposerRegistry::load()?;
    let composer = registry.get(project_name)?;

    if dry {
        let command = composer.render_command(&config.docker.compose_cli, ComposeAction::Down, &[]);
        println!("{}", prefix_stop_command(&config, remove_other, command)?);
        return Ok(());
    }

    if remove_other {
        stop_other_containers(&config, true)?;
    }

    composer.run(&config.docker.compose_cli, ComposeAction::Down, &[])?;

    println!("{} Successfully stopped containers!", "✓".green());

    Ok(())
}

/// Stop (and optionally remove) all containers
pub fn stopall(remove: bool, dry: bool) -> Result<()> {
    let config = Config::load()?;

    if dry {
        let ids = list_all_container_ids(&config.docker.cli)?;
        match render_stop_command(&config.docker.cli, &ids, remove) {
            Some(command) => println!("{}", command),
            None => println!("{}", "No containers to stop".yellow()),
        }
        return Ok(());
    }

    stop_other_containers(&config, remove)?;

    println!(
        "{} Successfully stopped{} all running containers!",
        "✓".green(),
        if remove { " and removed" } else { "" }
    );

    Ok(())
}

/// Stop (and optionally remove) every container on the daemon
fn stop_other_containers(config: &Config, remove: bool) -> Result<()> {
    let ids = list_all_container_ids(&config.docker.cli)?;
    stop_containers(&config.docker.cli, &ids, remove)
}

/// In dry mode `--remove-other` prepends the stop/rm command line, joined
/// with " && ". Nothing is prepended when no containers exist.
fn prefix_stop_command(config: &Config, remove_other: bool, command: String) -> Result<String> {
    if !remove_other {
        return Ok(command);
    }

    let ids = list_all_container_ids(&config.docker.cli)?;
    Ok(match render_stop_command(&config.docker.cli, &ids, true) {
        Some(stop_command) => format!("{} && {}", stop_command, command),
        None => command,
    })
}

fn absolute(path: &Path) -> Result<PathBuf> {
    fs::canonicalize(path).context(format!("Failed to resolve path: {:?}", path))
}
