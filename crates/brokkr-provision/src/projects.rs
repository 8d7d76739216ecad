//! Project clone catalog and clone operation

use camino::Utf8Path;
use tracing::info;

use crate::action::ActionError;
use crate::invoker::Invoke;

/// A cloneable project offered in the clone menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    /// Checkout directory name under the workspace
    pub name: &'static str,
    /// Clone URL
    pub url: &'static str,
    /// One-line description for the menu
    pub description: &'static str,
}

/// Fixed catalog of cloneable projects, in menu order
pub static PROJECT_CATALOG: &[Project] = &[
    Project {
        name: "platform-api",
        url: "git@github.com:ironworks-io/platform-api.git",
        description: "Core platform backend",
    },
    Project {
        name: "web-console",
        url: "git@github.com:ironworks-io/web-console.git",
        description: "Customer-facing web UI",
    },
    Project {
        name: "billing-service",
        url: "git@github.com:ironworks-io/billing-service.git",
        description: "Invoicing and payments",
    },
    Project {
        name: "data-pipeline",
        url: "git@github.com:ironworks-io/data-pipeline.git",
        description: "Batch and streaming jobs",
    },
    Project {
        name: "team-handbook",
        url: "git@github.com:ironworks-io/team-handbook.git",
        description: "Docs and onboarding notes",
    },
    Project {
        name: "infra-scripts",
        url: "git@github.com:ironworks-io/infra-scripts.git",
        description: "Terraform and deploy tooling",
    },
];

/// Clone a project into the workspace
///
/// An already-present checkout counts as success: re-running the step is
/// cheap by design, and the operator may be re-provisioning a machine
/// that was only partially wiped.
pub async fn clone_project<I: Invoke>(
    invoker: &I,
    project: &Project,
    workspace: &Utf8Path,
) -> Result<(), ActionError> {
    let dest = workspace.join(project.name);
    if dest.exists() {
        info!(project = project.name, dest = %dest, "checkout already present");
        println!("{} already present at {dest}, leaving it alone", project.name);
        return Ok(());
    }

    invoker
        .run(&format!("git clone {} {}", project.url, dest))
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::invoker::tests_support::MockInvoker;
    use camino::Utf8PathBuf;

    fn utf8_tempdir() -> (tempfile::TempDir, Utf8PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).unwrap();
        (dir, path)
    }

    #[test]
    fn catalog_names_are_unique() {
        let mut names: Vec<_> = PROJECT_CATALOG.iter().map(|p| p.name).collect();
        let before = names.len();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), before);
    }

    #[tokio::test]
    async fn clone_runs_git_against_the_workspace() {
        let (_guard, workspace) = utf8_tempdir();
        let invoker = MockInvoker::new();

        clone_project(&invoker, &PROJECT_CATALOG[0], &workspace)
            .await
            .unwrap();

        let commands = invoker.commands();
        assert_eq!(commands.len(), 1);
        assert_eq!(
            commands[0],
            format!(
                "git clone {} {}",
                PROJECT_CATALOG[0].url,
                workspace.join(PROJECT_CATALOG[0].name)
            )
        );
    }

    #[tokio::test]
    async fn existing_checkout_is_left_alone() {
        let (_guard, workspace) = utf8_tempdir();
        std::fs::create_dir_all(workspace.join(PROJECT_CATALOG[0].name)).unwrap();
        let invoker = MockInvoker::new();

        clone_project(&invoker, &PROJECT_CATALOG[0], &workspace)
            .await
            .unwrap();

        assert!(invoker.commands().is_empty());
    }

    #[tokio::test]
    async fn clone_failure_propagates() {
        let (_guard, workspace) = utf8_tempdir();
        let invoker = MockInvoker::new();
        invoker.fail_matching("git clone", 128);

        let err = clone_project(&invoker, &PROJECT_CATALOG[1], &workspace)
            .await
            .unwrap_err();
        assert_eq!(err.exit_code(), Some(128));
    }
}
