//! Composer registry
//!
//! This module manages the registry of composers registered per project.
//! The registry is stored as a JSON file in the configuration directory,
//! keyed by project name.

use std::{collections::BTreeMap, fs, path::PathBuf};

use anyhow::{Context, Result};

use super::entry::ComposerEntry;
use crate::config::get_registry_path;

/// Registry of composers. The persisted file is a plain JSON object keyed
/// by project name.
#[derive(Debug)]
pub struct ComposerRegistry {
    /// Map of project name to composer entry
    composers: BTreeMap<String, ComposerEntry>,

    /// File this registry was loaded from
    path: PathBuf,
}

impl ComposerRegistry {
    /// Load the registry from its default location.
    /// A missing file yields an empty registry.
    pub fn load() -> Result<Self> {
        Self::open(get_registry_path()?)
    }

    /// Load a registry from a specific file
    pub fn open(path: PathBuf) -> Result<Self> {
        if !path.exists() {
            return Ok(Self {
                composers: BTreeMap::new(),
                path,
            });
        }

        let content = fs::read_to_string(&path).context("Failed to read registry file")?;

        let composers =
            serde_json::from_str(&content).context("Failed to parse registry file")?;

        Ok(Self { composers, path })
    }

    /// Save the registry back to the file it was loaded from
    pub fn save(&self) -> Result<()> {
        let content = serde_json::to_string_pretty(&self.composers)
            .context("Failed to serialize registry")?;

        fs::write(&self.path, content).context("Failed to write registry file")?;

        Ok(())
    }

    /// Register a new composer. Fails if the project name is already taken.
    pub fn add(&mut self, entry: ComposerEntry) -> Result<()> {
        if self.composers.contains_key(&entry.project_name) {
            anyhow::bail!(
                "Composer for project \"{}\" is already registered. Consider removing it first",
                entry.project_name
            );
        }

        self.composers.insert(entry.project_name.clone(), entry);
        self.save()
    }

    /// Remove a composer by project name. Fails if the name is unknown.
    pub fn delete(&mut self, project_name: &str) -> Result<ComposerEntry> {
        let entry = self.composers.remove(project_name).with_context(|| {
            format!(
                "Seems like composer for a project \"{}\" did not exist or already removed",
                project_name
            )
        })?;

        self.save()?;
        Ok(entry)
    }

    /// Get a composer by project name
    pub fn get(&self, project_name: &str) -> Result<&ComposerEntry> {
        self.composers.get(project_name).with_context(|| {
            format!(
                "No composer found for \"{}\". May be register it first?",
                project_name
            )
        })
    }

    /// All registered composers in project name order
    pub fn all(&self) -> Vec<&ComposerEntry> {
        self.composers.values().collect()
    }

    /// Check if a project name is registered
    pub fn is_registered(&self, project_name: &str) -> bool {
        self.composers.contains_key(project_name)
    }

    /// Remove entries whose compose file no longer exists on disk.
    /// Returns the removed entries. With `dry` the registry is left untouched.
    pub fn prune(&mut self, dry: bool) -> Result<Vec<ComposerEntry>> {
        let stale: Vec<ComposerEntry> = self
            .composers
            .values()
            .filter(|entry| !entry.compose_path.exists())
            .cloned()
            .collect();

        if dry || stale.is_empty() {
            return Ok(stale);
        }

        for entry in &stale {
            self.composers.remove(&entry.project_name);
        }
        self.save()?;

        Ok(stale)
    }
}
