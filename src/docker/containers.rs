//! Container-level docker commands
//!
//! Used by `stopall` and the `--remove-other` swap behavior: list every
//! container known to the docker daemon, stop them, and optionally remove
//! them. No output is interpreted beyond the id list and exit statuses.

use std::process::Command;

use anyhow::{Context, Result};

/// List ids of all containers (running or not) via `docker ps -aq`
pub fn list_all_container_ids(docker_cli: &str) -> Result<Vec<String>> {
    let output = Command::new(docker_cli)
        .args(["ps", "-aq"])
        .output()
        .context(format!("Failed to execute {} ps", docker_cli))?;

    if !output.status.success() {
        anyhow::bail!(
            "Command \"{} ps -aq\" exited with status code {}",
            docker_cli,
            output.status.code().unwrap_or(-1)
        );
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    Ok(stdout.split_whitespace().map(str::to_string).collect())
}

/// The stop (and optional rm) command line for a set of container ids,
/// as it would be typed in a shell. `None` when there is nothing to stop.
pub fn render_stop_command(docker_cli: &str, ids: &[String], remove: bool) -> Option<String> {
    if ids.is_empty() {
        return None;
    }

    let id_list = ids.join(" ");
    let mut commands = vec![format!("{} stop {}", docker_cli, id_list)];

    if remove {
        commands.push(format!("{} rm {}", docker_cli, id_list));
    }

    Some(commands.join(" && "))
}

/// Stop (and optionally remove) the given containers.
/// A no-op for an empty id list.
pub fn stop_containers(docker_cli: &str, ids: &[String], remove: bool) -> Result<()> {
    if ids.is_empty() {
        return Ok(());
    }

    run_on_containers(docker_cli, "stop", ids)?;

    if remove {
        run_on_containers(docker_cli, "rm", ids)?;
    }

    Ok(())
}

fn run_on_containers(docker_cli: &str, subcommand: &str, ids: &[String]) -> Result<()> {
    let status = Command::new(docker_cli)
        .arg(subcommand)
        .args(ids)
        .status()
        .context(format!("Failed to execute {} {}", docker_cli, subcommand))?;

    if !status.success() {
        anyhow::bail!(
            "Command \"{} {} {}\" exited with status code {}",
            docker_cli,
            subcommand,
            ids.join(" "),
            status.code().unwrap_or(-1)
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_render_stop_command() {
        let cmd = render_stop_command("docker", &ids(&["abc", "def"]), false).unwrap();
        assert_eq!(cmd, "docker stop abc def");
    }

    #[test]
    fn test_render_stop_command_with_remove() {
        let cmd = render_stop_command("docker", &ids(&["abc", "def"]), true).unwrap();
        assert_eq!(cmd, "docker stop abc def && docker rm abc def");
    }

    #[test]
    fn test_render_stop_command_no_containers() {
        assert_eq!(render_stop_command("docker", &[], true), None);
        assert_eq!(render_stop_command("docker", &[], false), None);
    }

    #[test]
    fn test_render_stop_command_custom_cli() {
        let cmd = render_stop_command("podman", &ids(&["abc"]), true).unwrap();
        assert_eq!(cmd, "podman stop abc && podman rm abc");
    }

    #[test]
    fn test_stop_containers_empty_is_noop() {
        // Must not invoke the docker binary at all
        assert!(stop_containers("definitely-not-a-binary", &[], true).is_ok());
    }
}
