//! Composer entries
//!
//! A composer is a named registration pointing to a docker-compose file
//! (and optionally an env file). It knows how to build the compose command
//! line for starting and stopping its containers.

use std::path::PathBuf;
use std::process::Command;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Compose action mapped to the docker-compose subcommand
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComposeAction {
    Up,
    Down,
}

impl ComposeAction {
    fn as_str(self) -> &'static str {
        match self {
            ComposeAction::Up => "up",
            ComposeAction::Down => "down",
        }
    }
}

/// A registered composer for a project
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComposerEntry {
    /// Project name (registry key)
    pub project_name: String,
    /// Absolute path to the docker-compose file
    pub compose_path: PathBuf,
    /// Absolute path to the env file, if the compose file uses one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub env_path: Option<PathBuf>,
}

impl ComposerEntry {
    /// Build the compose command line for an action.
    /// The env file is only passed on `up`; `down` stops the whole project
    /// regardless of how it was brought up.
    pub fn compose_args(&self, action: ComposeAction, services: &[String]) -> Vec<String> {
        let mut args = Vec::new();

        if action == ComposeAction::Up {
            if let Some(env_path) = &self.env_path {
                args.push("--env-file".to_string());
                args.push(env_path.to_string_lossy().to_string());
            }
        }

        args.push("-f".to_string());
        args.push(self.compose_path.to_string_lossy().to_string());
        args.push(action.as_str().to_string());

        if action == ComposeAction::Up {
            args.push("-d".to_string());
            for service in services {
                args.push(service.trim().to_string());
            }
        }

        args
    }

    /// The full command line as it would be typed in a shell (dry mode output)
    pub fn render_command(
        &self,
        compose_cli: &str,
        action: ComposeAction,
        services: &[String],
    ) -> String {
        let mut parts = vec![compose_cli.to_string()];
        parts.extend(self.compose_args(action, services));
        parts.join(" ")
    }

    /// Run the compose command for an action, inheriting stdio.
    /// Surfaces a non-zero exit status as an error naming the command.
    pub fn run(&self, compose_cli: &str, action: ComposeAction, services: &[String]) -> Result<()> {
        let args = self.compose_args(action, services);

        let status = Command::new(compose_cli)
            .args(&args)
            .status()
            .context(format!("Failed to execute {}", compose_cli))?;

        if !status.success() {
            anyhow::bail!(
                "Command \"{}\" exited with status code {}",
                self.render_command(compose_cli, action, services),
                status.code().unwrap_or(-1)
            );
        }

        Ok(())
    }

    /// One-line representation for `list`
    pub fn represent(&self, full: bool) -> String {
        if full {
            format!(
                "{} | docker-compose={} env={}",
                self.project_name,
                self.compose_path.display(),
                self.env_path
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "X".to_string())
            )
        } else {
            self.project_name.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(env: bool) -> ComposerEntry {
        ComposerEntry {
            project_name: "foo".to_string(),
            compose_path: PathBuf::from("foo.yml"),
            env_path: env.then(|| PathBuf::from("env")),
        }
    }

    #[test]
    fn test_up_command_with_env_file() {
        let cmd = entry(true).render_command("docker-compose", ComposeAction::Up, &[]);
        assert_eq!(cmd, "docker-compose --env-file env -f foo.yml up -d");
    }

    #[test]
    fn test_up_command_without_env_file() {
        let cmd = entry(false).render_command("docker-compose", ComposeAction::Up, &[]);
        assert_eq!(cmd, "docker-compose -f foo.yml up -d");
    }

    #[test]
    fn test_down_command_skips_env_file_and_detach() {
        let cmd = entry(true).render_command("docker-compose", ComposeAction::Down, &[]);
        assert_eq!(cmd, "docker-compose -f foo.yml down");
    }

    #[test]
    fn test_up_command_with_services() {
        let services = vec!["db".to_string(), "queue".to_string()];
        let cmd = entry(false).render_command("docker-compose", ComposeAction::Up, &services);
        assert_eq!(cmd, "docker-compose -f foo.yml up -d db queue");
    }

    #[test]
    fn test_custom_compose_cli() {
        let cmd = entry(false).render_command("podman-compose", ComposeAction::Up, &[]);
        assert_eq!(cmd, "podman-compose -f foo.yml up -d");
    }

    #[test]
    fn test_represent() {
        let e = entry(true);
        assert_eq!(e.represent(false), "foo");
        assert_eq!(e.represent(true), "foo | docker-compose=foo.yml env=env");

        let e = entry(false);
        assert_eq!(e.represent(true), "foo | docker-compose=foo.yml env=X");
    }
}
