//! Shared utilities for the Roster project.

pub mod version_info;
