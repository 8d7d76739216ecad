//! Post-clone image builds
//!
//! Developer machines get a local `docker build` of each cloned project
//! so the first `docker compose up` of the day is not a cold build. Some
//! catalog entries are documentation or tooling checkouts with no
//! Dockerfile; those are excluded by name.

use camino::Utf8Path;

use crate::action::ActionError;
use crate::invoker::Invoke;
use crate::projects::Project;

/// Projects that never get an image build
pub static BUILD_EXCLUSIONS: &[&str] = &["team-handbook", "infra-scripts"];

/// Filter cloned projects down to the ones worth building
pub fn buildable<'a>(cloned: &[&'a Project]) -> Vec<&'a Project> {
    cloned
        .iter()
        .filter(|project| !BUILD_EXCLUSIONS.contains(&project.name))
        .copied()
        .collect()
}

/// Build a local image for one cloned project
pub async fn build_image<I: Invoke>(
    invoker: &I,
    project: &Project,
    workspace: &Utf8Path,
) -> Result<(), ActionError> {
    let dir = workspace.join(project.name);
    invoker
        .run(&format!("docker build -t {} {dir}", project.name))
        .await
}
