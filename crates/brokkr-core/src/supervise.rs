//! Supervised step execution
//!
//! `supervise` is the primitive the whole run is built from: it turns an
//! unreliable, side-effecting action into a step that either completes or
//! is explicitly skipped by the operator. A failing action is re-offered
//! indefinitely; there is no retry cap and no automatic escalation,
//! because the operator watching the live output is the best arbiter of
//! whether a package mirror hiccup is worth another attempt.
//!
//! Nothing is rolled back on failure. Actions are expected to tolerate
//! re-invocation after a partial failure; that is an authorship
//! responsibility of the action catalog, not enforced here.

use std::fmt;
use std::future::Future;

use tracing::debug;

use crate::error::PromptError;
use crate::prompt::{Decision, Prompter};
use crate::types::StepOutcome;

/// Run one action under operator supervision
///
/// Invokes `op`; on success returns [`StepOutcome::Completed`] without
/// prompting. On failure the operator is shown the label and the failure
/// (including the exit indicator carried by the error's `Display`) and
/// chooses between retry and skip. The loop only ends on a success or an
/// explicit skip.
///
/// The only error this returns is a prompt-level one: an operator
/// interrupt or a broken terminal, both of which abort the run.
pub async fn supervise<P, F, Fut, E>(
    label: &str,
    prompter: &mut P,
    mut op: F,
) -> Result<StepOutcome, PromptError>
where
    P: Prompter,
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<(), E>>,
    E: fmt::Display,
{
    let mut attempt: u32 = 1;
    loop {
        debug!(step = label, attempt, "running supervised step");
        match op().await {
            Ok(()) => {
                debug!(step = label, attempt, "step completed");
                return Ok(StepOutcome::Completed);
            }
            Err(err) => match prompter.retry_or_skip(label, &err.to_string())? {
                Decision::Retry => {
                    attempt += 1;
                }
                Decision::Skip => {
                    debug!(step = label, attempt, "step skipped by operator");
                    return Ok(StepOutcome::SkippedByUser);
                }
            },
        }
    }
}
