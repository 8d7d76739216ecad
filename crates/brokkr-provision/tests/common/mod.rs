//! Shared test support for flow tests

pub mod mocks;

use camino::Utf8PathBuf;

use brokkr_provision::ProvisionPaths;

/// A tempdir-backed set of provisioning paths
///
/// Keep the returned guard alive for the duration of the test.
pub fn temp_paths() -> (tempfile::TempDir, ProvisionPaths) {
    let dir = tempfile::tempdir().unwrap();
    let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).unwrap();
    let paths = ProvisionPaths {
        workspace: root.join("workspace"),
        ssh: root.join("ssh"),
    };
    (dir, paths)
}
