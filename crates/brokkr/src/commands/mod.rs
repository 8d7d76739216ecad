//! CLI command implementations

pub mod completions;
pub mod provision;
pub mod version;
