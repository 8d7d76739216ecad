//! Interactive provisioning flow
//!
//! One run walks a fixed sequence of phases: distribution selection,
//! role selection, role defaults, operator-selected additional tools,
//! SSH identity, project clones, and (for developers) local image
//! builds. Every externally-risky step inside a phase goes through
//! `supervise`; every phase as a whole sits behind `absorb_fault`, so an
//! unexpected failure in orchestration glue pauses for acknowledgment
//! and the run advances to the next phase instead of dying.
//!
//! The only fatal input is the distribution choice: without it no
//! registry can be resolved, so the run exits nonzero immediately.

use anyhow::Context;
use brokkr_core::error::PromptError;
use brokkr_core::intercept::absorb_fault;
use brokkr_core::prompt::Prompter;
use brokkr_core::supervise::supervise;
use brokkr_core::types::{exit_code, Distro, Role, StepOutcome};
use camino::Utf8PathBuf;
use owo_colors::OwoColorize;
use thiserror::Error;
use tracing::info;

use crate::action::Action;
use crate::identity;
use crate::images;
use crate::invoker::Invoke;
use crate::projects::{self, Project, PROJECT_CATALOG};
use crate::registry::Registry;
use crate::selection::parse_selection;

/// Errors that abort a provisioning run
#[derive(Error, Debug)]
pub enum FlowError {
    /// The initial distribution selection did not name a supported
    /// distribution; nothing can run without a registry
    #[error("'{input}' is not one of the supported distributions")]
    InvalidDistribution { input: String },

    /// The operator interrupted the run, or the terminal broke
    #[error(transparent)]
    Prompt(#[from] PromptError),
}

impl FlowError {
    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidDistribution { .. } => exit_code::INVALID_DISTRIBUTION,
            Self::Prompt(PromptError::Interrupted) => exit_code::INTERRUPTED,
            Self::Prompt(PromptError::Io(_)) => 1,
        }
    }
}

/// Filesystem locations a run provisions into
#[derive(Debug, Clone)]
pub struct ProvisionPaths {
    /// Where project checkouts land (`~/workspace`)
    pub workspace: Utf8PathBuf,
    /// Where credential material lives (`~/.ssh`)
    pub ssh: Utf8PathBuf,
}

/// Outcome of one supervised step, as recorded in the run state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepRecord {
    pub label: String,
    pub outcome: StepOutcome,
}

/// Everything a single run knows about itself
///
/// Created after the two selection prompts, threaded explicitly through
/// the phases, and returned to the caller at the end. Nothing here
/// survives the process.
#[derive(Debug)]
pub struct RunState {
    pub distro: Distro,
    pub role: Role,
    /// Every supervised step's outcome, in execution order
    pub records: Vec<StepRecord>,
    /// Projects whose clone step completed, deduplicated
    pub cloned: Vec<&'static Project>,
}

impl RunState {
    fn new(distro: Distro, role: Role) -> Self {
        Self {
            distro,
            role,
            records: Vec::new(),
            cloned: Vec::new(),
        }
    }

    fn record(&mut self, label: impl Into<String>, outcome: StepOutcome) {
        self.records.push(StepRecord {
            label: label.into(),
            outcome,
        });
    }

    /// Count of steps that completed
    pub fn completed(&self) -> usize {
        self.records
            .iter()
            .filter(|r| r.outcome == StepOutcome::Completed)
            .count()
    }

    /// Count of steps the operator skipped
    pub fn skipped(&self) -> usize {
        self.records
            .iter()
            .filter(|r| r.outcome == StepOutcome::SkippedByUser)
            .count()
    }
}

/// The interactive flow orchestrator
///
/// Generic over the invoker and the prompter so the whole state machine
/// can be driven in tests without touching a shell or a terminal.
pub struct Provisioner<I, P> {
    invoker: I,
    prompter: P,
    paths: ProvisionPaths,
}

impl<I: Invoke, P: Prompter> Provisioner<I, P> {
    pub fn new(invoker: I, prompter: P, paths: ProvisionPaths) -> Self {
        Self {
            invoker,
            prompter,
            paths,
        }
    }

    /// Drive one provisioning run to completion
    pub async fn run(mut self) -> Result<RunState, FlowError> {
        let distro = self.select_distribution()?;
        let registry = Registry::for_distro(distro);
        let role = self.select_role()?;
        info!(%distro, %role, "starting provisioning run");

        let mut state = RunState::new(distro, role);

        if let Err(err) = self.run_defaults(registry, &mut state).await {
            absorb_fault(&mut self.prompter, "install the default tools", err)?;
        }
        if let Err(err) = self.run_additional(registry, &mut state).await {
            absorb_fault(&mut self.prompter, "install the additional tools", err)?;
        }
        if let Err(err) = self.run_identity(&mut state).await {
            absorb_fault(&mut self.prompter, "configure the SSH identity", err)?;
        }
        if let Err(err) = self.run_clones(&mut state).await {
            absorb_fault(&mut self.prompter, "clone projects", err)?;
        }
        if let Err(err) = self.run_image_builds(role, &mut state).await {
            absorb_fault(&mut self.prompter, "build project images", err)?;
        }

        self.finish(&state);
        Ok(state)
    }

    /// The one prompt with no recovery: an unrecognized answer is fatal
    fn select_distribution(&mut self) -> Result<Distro, FlowError> {
        println!("{}", "Select your distribution:".bold());
        for distro in Distro::ALL {
            println!("  {}) {}", distro.code(), distro);
        }

        let input = self.prompter.read_line("Distribution")?;
        input
            .trim()
            .parse::<u32>()
            .ok()
            .and_then(Distro::from_code)
            .ok_or_else(|| FlowError::InvalidDistribution {
                input: input.trim().to_string(),
            })
    }

    /// Role prompt; an unrecognized answer falls back to `Other`
    fn select_role(&mut self) -> Result<Role, PromptError> {
        println!("\n{}", "Select your role:".bold());
        for role in Role::ALL {
            println!("  {}) {}", role.code(), role);
        }

        let input = self.prompter.read_line("Role")?;
        match input.trim().parse::<u32>().ok().and_then(Role::from_code) {
            Some(role) => Ok(role),
            None => {
                println!(
                    "{}",
                    format!(
                        "Unrecognized role '{}', defaulting to {}",
                        input.trim(),
                        Role::Other
                    )
                    .yellow()
                );
                Ok(Role::Other)
            }
        }
    }

    async fn run_defaults(
        &mut self,
        registry: &'static Registry,
        state: &mut RunState,
    ) -> anyhow::Result<()> {
        let defaults = registry.defaults_for(state.role);
        if defaults.is_empty() {
            info!(role = %state.role, "role has no default actions");
            return Ok(());
        }

        println!(
            "\n{}",
            format!(
                "Installing {} default tool(s) for the {} role",
                defaults.len(),
                state.role
            )
            .bold()
        );

        for action in defaults {
            let outcome = self.supervise_action(action).await?;
            state.record(action.name, outcome);
        }
        Ok(())
    }

    async fn run_additional(
        &mut self,
        registry: &'static Registry,
        state: &mut RunState,
    ) -> anyhow::Result<()> {
        let menu = registry.additional_menu(state.role);
        if menu.is_empty() {
            return Ok(());
        }

        println!("\n{}", "Additional tools available:".bold());
        for (i, action) in menu.iter().enumerate() {
            println!("  {}) {} - {}", i + 1, action.name, action.description);
        }

        let input = self
            .prompter
            .read_line("Tools to install (space-separated numbers, Enter for none)")?;
        let selection = parse_selection(&input, menu.len());
        for token in &selection.invalid {
            println!("{}", format!("Invalid selection: {token}").yellow());
        }

        for index in selection.chosen {
            let action = menu[index];
            let outcome = self.supervise_action(action).await?;
            state.record(action.name, outcome);
        }
        Ok(())
    }

    async fn run_identity(&mut self, state: &mut RunState) -> anyhow::Result<()> {
        println!("\n{}", "Configuring SSH identity".bold());

        let invoker = &self.invoker;
        let ssh_dir = self.paths.ssh.clone();
        let outcome = supervise("SSH identity", &mut self.prompter, || {
            identity::ensure_ssh_identity(invoker, &ssh_dir)
        })
        .await?;
        state.record("SSH identity", outcome);
        Ok(())
    }

    async fn run_clones(&mut self, state: &mut RunState) -> anyhow::Result<()> {
        println!("\n{}", "Projects available to clone:".bold());
        for (i, project) in PROJECT_CATALOG.iter().enumerate() {
            println!("  {}) {} - {}", i + 1, project.name, project.description);
        }

        let input = self
            .prompter
            .read_line("Projects to clone (space-separated numbers, Enter for none)")?;
        let selection = parse_selection(&input, PROJECT_CATALOG.len());
        for token in &selection.invalid {
            println!("{}", format!("Invalid selection: {token}").yellow());
        }
        if selection.chosen.is_empty() {
            return Ok(());
        }

        // Glue work, covered by the fault boundary rather than supervise.
        tokio::fs::create_dir_all(&self.paths.workspace)
            .await
            .with_context(|| format!("create workspace directory {}", self.paths.workspace))?;

        for index in selection.chosen {
            let project = &PROJECT_CATALOG[index];
            let invoker = &self.invoker;
            let workspace = self.paths.workspace.clone();
            let label = format!("clone {}", project.name);

            let outcome = supervise(&label, &mut self.prompter, || {
                projects::clone_project(invoker, project, &workspace)
            })
            .await?;

            if outcome == StepOutcome::Completed
                && !state.cloned.iter().any(|p| p.name == project.name)
            {
                state.cloned.push(project);
            }
            state.record(label, outcome);
        }
        Ok(())
    }

    /// Role is passed in explicitly rather than re-read from ambient
    /// state: the condition must stay correct even if role selection
    /// ever becomes re-enterable mid-run.
    async fn run_image_builds(&mut self, role: Role, state: &mut RunState) -> anyhow::Result<()> {
        if role != Role::Developer {
            return Ok(());
        }

        for project in &state.cloned {
            if images::BUILD_EXCLUSIONS.contains(&project.name) {
                println!("Skipping image build for {} (excluded)", project.name);
            }
        }

        let targets = images::buildable(&state.cloned);
        if targets.is_empty() {
            return Ok(());
        }

        println!("\n{}", "Building local images for cloned projects".bold());
        for project in targets {
            let invoker = &self.invoker;
            let workspace = self.paths.workspace.clone();
            let label = format!("build {} image", project.name);

            let outcome = supervise(&label, &mut self.prompter, || {
                images::build_image(invoker, project, &workspace)
            })
            .await?;
            state.record(label, outcome);
        }
        Ok(())
    }

    fn finish(&self, state: &RunState) {
        println!("\n{}", "Provisioning complete.".bold().green());
        println!(
            "{} step(s) completed, {} skipped",
            state.completed(),
            state.skipped()
        );
        for record in &state.records {
            if record.outcome == StepOutcome::SkippedByUser {
                println!("  {} {}", "skipped:".yellow(), record.label);
            }
        }
        println!(
            "\nGroup membership and shell tool initialization take effect in a new login session."
        );
    }

    async fn supervise_action(
        &mut self,
        action: &'static Action,
    ) -> Result<StepOutcome, PromptError> {
        if let Some(notes) = action.notes {
            println!("Note: {notes}");
        }
        let invoker = &self.invoker;
        supervise(action.name, &mut self.prompter, || {
            invoker.run(action.command)
        })
        .await
    }
}
