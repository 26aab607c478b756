//! CLI command definitions for dockswap
//!
//! This module contains all the clap-based command definitions and argument parsing.
//! Boolean flags come in `--flag` / `--no-flag` pairs; the later one wins.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "dockswap")]
#[command(about = "DockSwap. Tool for swapping projects.", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Register a composer for a project
    Add {
        project_name: String,
        /// Path to .yml or .json file that must be run using docker-compose
        #[arg(long)]
        path: PathBuf,
        /// If your docker-compose file uses env_file then specify path for that file
        #[arg(long)]
        env_path: Option<PathBuf>,
    },
    /// Delete a registered composer
    Delete { project_name: String },
    /// List all registered composers
    List {
        /// Show more info
        #[arg(long, overrides_with = "no_full")]
        full: bool,
        #[allow(dead_code)]
        #[arg(long = "no-full", hide = true)]
        no_full: bool,
    },
    /// Remove composers whose compose file no longer exists
    Prune {
        /// Do not prune, instead just show what would be removed
        #[arg(long, overrides_with = "no_dry")]
        dry: bool,
        #[allow(dead_code)]
        #[arg(long = "no-dry", hide = true)]
        no_dry: bool,
    },
    /// Start containers for a registered composer
    Start {
        project_name: String,
        /// Stop and remove all other containers first
        #[arg(long, overrides_with = "no_remove_other")]
        remove_other: bool,
        #[allow(dead_code)]
        #[arg(long = "no-remove-other", hide = true)]
        no_remove_other: bool,
        /// Do not run command, instead just print it
        #[arg(long, overrides_with = "no_dry")]
        dry: bool,
        #[allow(dead_code)]
        #[arg(long = "no-dry", hide = true)]
        no_dry: bool,
        /// Name of service to be started. Can be provided multiple times
        #[arg(long)]
        service: Vec<String>,
    },
    /// Stop containers for a registered composer
    Stop {
        project_name: String,
        /// Stop and remove all other containers first
        #[arg(long, overrides_with = "no_remove_other")]
        remove_other: bool,
        #[allow(dead_code)]
        #[arg(long = "no-remove-other", hide = true)]
        no_remove_other: bool,
        /// Do not run command, instead just print it
        #[arg(long, overrides_with = "no_dry")]
        dry: bool,
        #[allow(dead_code)]
        #[arg(long = "no-dry", hide = true)]
        no_dry: bool,
    },
    /// Stop (and/or remove) all running containers
    Stopall {
        /// Remove stopped containers
        #[arg(long, overrides_with = "no_remove")]
        remove: bool,
        #[allow(dead_code)]
        #[arg(long = "no-remove", hide = true)]
        no_remove: bool,
        /// Do not run command, instead just print it
        #[arg(long, overrides_with = "no_dry")]
        dry: bool,
        #[allow(dead_code)]
        #[arg(long = "no-dry", hide = true)]
        no_dry: bool,
    },
    /// Show version of currently used dockswap
    Version {
        /// Which part of version to output
        #[arg(long, value_enum)]
        part: Option<VersionPart>,
        /// Output only version itself, useless if part is specified
        #[arg(long)]
        mini: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum VersionPart {
    Major,
    Minor,
    Patch,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_add() {
        let cli = Cli::try_parse_from([
            "dockswap", "add", "foo", "--path", "/p/f.yml", "--env-path", "/p/env",
        ])
        .unwrap();

        match cli.command {
            Commands::Add {
                project_name,
                path,
                env_path,
            } => {
                assert_eq!(project_name, "foo");
                assert_eq!(path, PathBuf::from("/p/f.yml"));
                assert_eq!(env_path, Some(PathBuf::from("/p/env")));
            }
            _ => panic!("expected add command"),
        }
    }

    #[test]
    fn test_parse_start_with_services() {
        let cli = Cli::try_parse_from([
            "dockswap", "start", "foo", "--dry", "--service", "db", "--service", "queue",
        ])
        .unwrap();

        match cli.command {
            Commands::Start {
                project_name,
                dry,
                remove_other,
                service,
                ..
            } => {
                assert_eq!(project_name, "foo");
                assert!(dry);
                assert!(!remove_other);
                assert_eq!(service, vec!["db", "queue"]);
            }
            _ => panic!("expected start command"),
        }
    }

    #[test]
    fn test_negation_flag_wins() {
        let cli = Cli::try_parse_from(["dockswap", "list", "--full", "--no-full"]).unwrap();

        match cli.command {
            Commands::List { full, .. } => assert!(!full),
            _ => panic!("expected list command"),
        }
    }
}
