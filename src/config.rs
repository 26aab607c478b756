use std::{
    env, fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use dirs;
use serde::{Deserialize, Serialize};

/// Get the configuration directory path
/// Checks DOCKSWAP_DIR environment variable first,
/// then defaults to ~/.dockswap
pub fn get_config_dir() -> Result<PathBuf> {
    if let Ok(custom_dir) = env::var("DOCKSWAP_DIR") {
        return Ok(PathBuf::from(custom_dir));
    }

    let home_dir = dirs::home_dir().context("Failed to get home directory")?;

    Ok(home_dir.join(".dockswap"))
}

/// Ensure the configuration directory exists
pub fn ensure_config_dir() -> Result<PathBuf> {
    let config_dir = get_config_dir()?;

    fs::create_dir_all(&config_dir).context("Failed to create config directory")?;

    // Create default config.toml if it doesn't exist
    let config_file = config_dir.join("config.toml");
    if !config_file.exists() {
        create_default_config(&config_file)?;
    }

    Ok(config_dir)
}

fn create_default_config(config_path: &Path) -> Result<()> {
    let default_config = r#"# Global configuration for dockswap

[docker]
# Binary used for container-level commands (stopall, --remove-other)
cli = "docker"

# Binary used to run registered compose files
compose_cli = "docker-compose"
"#;

    fs::write(config_path, default_config).context("Failed to write default config file")?;

    Ok(())
}

fn default_docker_cli() -> String {
    "docker".to_string()
}

fn default_compose_cli() -> String {
    "docker-compose".to_string()
}

#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub docker: DockerSettings,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct DockerSettings {
    /// Binary used for container-level commands
    #[serde(default = "default_docker_cli")]
    pub cli: String,
    /// Binary used to run compose files
    #[serde(default = "default_compose_cli")]
    pub compose_cli: String,
}

impl Default for DockerSettings {
    fn default() -> Self {
        Self {
            cli: default_docker_cli(),
            compose_cli: default_compose_cli(),
        }
    }
}

impl Config {
    /// Load configuration, applying environment variable overrides.
    /// A missing config.toml yields the defaults.
    pub fn load() -> Result<Self> {
        let config_dir = get_config_dir()?;
        let config_path = config_dir.join("config.toml");

        let mut config = if config_path.exists() {
            let content = fs::read_to_string(&config_path)
                .context(format!("Failed to read config.toml from {:?}", config_path))?;
            toml::from_str(&content).context("Failed to parse config.toml")?
        } else {
            Self {
                docker: DockerSettings::default(),
            }
        };

        if let Ok(cli) = env::var("DOCKSWAP_DOCKER_CLI") {
            config.docker.cli = cli;
        }
        if let Ok(compose_cli) = env::var("DOCKSWAP_DOCKER_COMPOSE_CLI") {
            config.docker.compose_cli = compose_cli;
        }

        Ok(config)
    }
}

/// Get the path to the registry file.
/// The file name can be overridden with DOCKSWAP_REGISTRY_FILE.
pub fn get_registry_path() -> Result<PathBuf> {
    let config_dir = get_config_dir()?;
    let file_name =
        env::var("DOCKSWAP_REGISTRY_FILE").unwrap_or_else(|_| "registry.json".to_string());
    Ok(config_dir.join(file_name))
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_docker_settings_defaults() {
        let settings = DockerSettings::default();
        assert_eq!(settings.cli, "docker");
        assert_eq!(settings.compose_cli, "docker-compose");
    }

    #[test]
    fn test_parse_partial_config() {
        let config: Config = toml::from_str("[docker]\ncli = \"podman\"\n").unwrap();
        assert_eq!(config.docker.cli, "podman");
        assert_eq!(config.docker.compose_cli, "docker-compose");
    }

    #[test]
    fn test_env_overrides_apply() {
        let dir = TempDir::new().unwrap();

        // set_var is unsafe in edition 2024; no other test reads these vars
        unsafe {
            env::set_var("DOCKSWAP_DIR", dir.path());
            env::set_var("DOCKSWAP_DOCKER_CLI", "podman");
            env::set_var("DOCKSWAP_DOCKER_COMPOSE_CLI", "podman-compose");
            env::set_var("DOCKSWAP_REGISTRY_FILE", "alt.json");
        }

        let config_dir = get_config_dir().unwrap();
        let config = Config::load().unwrap();
        let registry_path = get_registry_path().unwrap();

        unsafe {
            env::remove_var("DOCKSWAP_DIR");
            env::remove_var("DOCKSWAP_DOCKER_CLI");
            env::remove_var("DOCKSWAP_DOCKER_COMPOSE_CLI");
            env::remove_var("DOCKSWAP_REGISTRY_FILE");
        }

        assert_eq!(config_dir, dir.path());
        assert_eq!(config.docker.cli, "podman");
        assert_eq!(config.docker.compose_cli, "podman-compose");
        assert_eq!(registry_path, dir.path().join("alt.json"));
    }

    #[test]
    fn test_parse_empty_config() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.docker.cli, "docker");
        assert_eq!(config.docker.compose_cli, "docker-compose");
    }
}
