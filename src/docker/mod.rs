//! Docker operations module
//!
//! This module contains functionality for interacting with Docker:
//! - compose file validation
//! - container-level stop/remove commands

pub mod compose;
pub mod containers;
