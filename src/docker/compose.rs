//! Compose file validation
//!
//! `add` checks registered paths up front so that `start` never points
//! docker-compose at a file that cannot work: the path must be a regular
//! YAML/JSON file with a non-empty top-level `services` mapping.

use std::{fs, path::Path};

use anyhow::{Context, Result};
use serde_yaml::Value;

/// Check that a path exists and is a regular file
pub fn validate_file(path: &Path) -> Result<()> {
    if !path.exists() || path.is_dir() {
        anyhow::bail!(
            "{} is not a valid file path. May be you have provided a directory?",
            path.display()
        );
    }

    Ok(())
}

/// Validate a docker-compose file: extension, parseability, and the
/// presence of at least one service.
pub fn validate_compose_file(path: &Path) -> Result<()> {
    validate_file(path)?;

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default();

    if !matches!(extension, "yml" | "yaml" | "json") {
        anyhow::bail!("\"{}\" is not a valid YAML/JSON path", path.display());
    }

    let content = fs::read_to_string(path)
        .context(format!("Failed to read docker-compose file: {:?}", path))?;

    let yaml: Value = if extension == "json" {
        serde_json::from_str(&content)
            .context(format!("Failed to parse docker-compose JSON: {:?}", path))?
    } else {
        serde_yaml::from_str(&content)
            .context(format!("Failed to parse docker-compose YAML: {:?}", path))?
    };

    let has_services = yaml
        .get("services")
        .and_then(|v| v.as_mapping())
        .map(|services| !services.is_empty())
        .unwrap_or(false);

    if !has_services {
        anyhow::bail!(
            "\"{}\" does not define any services. Is it really a docker-compose file?",
            path.display()
        );
    }

    Ok(())
}
