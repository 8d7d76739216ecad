//! Build identity reported by `brokkr version`

use std::fmt;

use serde::Serialize;

/// What this binary knows about itself at compile time
///
/// Only the crate version is guaranteed to be present. The commit is
/// stamped by the release pipeline through `BROKKR_COMMIT` and is
/// absent in local builds, in which case it is omitted from output
/// entirely rather than printed as a placeholder.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct BuildInfo {
    pub version: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commit: Option<&'static str>,
}

impl BuildInfo {
    pub fn current() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION"),
            commit: option_env!("BROKKR_COMMIT"),
        }
    }
}

impl fmt::Display for BuildInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "brokkr {}", self.version)?;
        if let Some(commit) = self.commit {
            write!(f, " ({commit})")?;
        }
        Ok(())
    }
}
