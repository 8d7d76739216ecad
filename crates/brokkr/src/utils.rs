//! Utility functions shared across CLI commands

use anyhow::{anyhow, Result};
use camino::Utf8PathBuf;

/// Get the user's home directory
///
/// Prefers the HOME environment variable over dirs::home_dir() so shell
/// overrides behave the same way they do for the installer actions,
/// which all resolve `~` through the shell.
pub fn get_home_dir() -> Result<Utf8PathBuf> {
    if let Ok(home) = std::env::var("HOME") {
        return Ok(Utf8PathBuf::from(home));
    }

    let home = dirs::home_dir().ok_or_else(|| anyhow!("Could not determine home directory"))?;
    Utf8PathBuf::from_path_buf(home).map_err(|p| anyhow!("Home directory is not UTF-8: {p:?}"))
}

/// Default directory for project checkouts (~/workspace)
pub fn get_workspace_dir() -> Result<Utf8PathBuf> {
    Ok(get_home_dir()?.join("workspace"))
}

/// Directory for credential material (~/.ssh)
pub fn get_ssh_dir() -> Result<Utf8PathBuf> {
    Ok(get_home_dir()?.join(".ssh"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn workspace_and_ssh_dirs_hang_off_home() {
        let home = get_home_dir().unwrap();
        assert_eq!(get_workspace_dir().unwrap(), home.join("workspace"));
        assert_eq!(get_ssh_dir().unwrap(), home.join(".ssh"));
    }
}
