//! Provision command - run the interactive provisioning flow
//!
//! Wires the production invoker and prompter into the flow orchestrator
//! and maps the flow's terminal errors onto process exit codes: a run
//! with skipped steps still exits zero, an invalid distribution choice
//! and an operator interrupt get their dedicated nonzero codes.

use anyhow::Result;
use brokkr_core::prompt::ConsolePrompter;
use brokkr_core::types::exit_code;
use brokkr_provision::{FlowError, ProvisionPaths, Provisioner, ShellInvoker};
use tracing::{debug, info};

use crate::cli::ProvisionArgs;
use crate::output;
use crate::utils;

/// Run the interactive provisioning flow
pub async fn run(args: ProvisionArgs) -> Result<()> {
    preflight();

    let workspace = match args.workspace_dir {
        Some(dir) => dir,
        None => utils::get_workspace_dir()?,
    };
    let paths = ProvisionPaths {
        workspace,
        ssh: utils::get_ssh_dir()?,
    };

    let provisioner = Provisioner::new(ShellInvoker::new(), ConsolePrompter::new(), paths);

    match provisioner.run().await {
        Ok(state) => {
            info!(
                completed = state.completed(),
                skipped = state.skipped(),
                "provisioning run finished"
            );
            if state.skipped() > 0 {
                output::warning(&format!(
                    "{} step(s) were skipped; re-run `brokkr provision` to pick them up",
                    state.skipped()
                ));
            }
            Ok(())
        }
        Err(err) => {
            output::error(&err.to_string());
            let code = err.exit_code();
            debug_assert_ne!(code, exit_code::SUCCESS);
            std::process::exit(code);
        }
    }
}

/// Warn about missing external collaborators before the run starts
///
/// Missing tools are not fatal here: the affected step will fail under
/// supervision and the operator decides what to do.
fn preflight() {
    for tool in ["git", "curl"] {
        match which::which(tool) {
            Ok(path) => debug!(tool, path = %path.display(), "preflight tool found"),
            Err(_) => output::warning(&format!(
                "{tool} not found in PATH; steps that need it will fail until it is installed"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flow_errors_map_to_documented_exit_codes() {
        let err = FlowError::InvalidDistribution {
            input: "9".to_string(),
        };
        assert_eq!(err.exit_code(), exit_code::INVALID_DISTRIBUTION);

        let err = FlowError::Prompt(brokkr_core::PromptError::Interrupted);
        assert_eq!(err.exit_code(), exit_code::INTERRUPTED);
    }
}
