//! Composer management module
//!
//! This module contains functionality for managing composers:
//! - Composer entries and compose command construction
//! - Composer registry
//! - User-facing add/delete/list/prune/start/stop commands

pub mod commands;
pub mod entry;
pub mod registry;
