//! Process-wide fault absorption
//!
//! The original trap-style safety net ("catch any unexpected nonzero
//! exit, pause, resume at the next statement") is modeled here as a
//! recoverable boundary between orchestration phases: each phase returns
//! `anyhow::Result<()>`, and a failing phase is reported and acknowledged
//! instead of killing the run. "Resume at the next statement" becomes
//! "advance to the next phase".
//!
//! Operator interrupts are the exception: they are re-raised so the run
//! aborts with the dedicated interrupt exit code rather than being
//! swallowed by the safety net.

use tracing::warn;

use crate::error::PromptError;
use crate::prompt::Prompter;

/// Absorb an unexpected phase failure after operator acknowledgment
///
/// Reports the failing phase and the error content, then blocks until
/// the operator presses Enter. Returns `Ok(())` so the caller can move
/// on to the next phase. A [`PromptError`] buried in `err` (an interrupt
/// mid-pause, a broken terminal) is re-raised instead of absorbed.
pub fn absorb_fault<P: Prompter>(
    prompter: &mut P,
    phase: &str,
    err: anyhow::Error,
) -> Result<(), PromptError> {
    match err.downcast::<PromptError>() {
        Ok(prompt_err) => Err(prompt_err),
        Err(other) => {
            warn!(phase, error = %other, "unexpected failure, continuing after acknowledgment");
            eprintln!("\n✗ Unexpected failure while trying to {phase}: {other:#}");
            prompter.acknowledge("Press Enter to continue with the next step")?;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::Decision;

    struct CountingPrompter {
        acknowledgments: u32,
    }

    impl Prompter for CountingPrompter {
        fn retry_or_skip(&mut self, _label: &str, _failure: &str) -> Result<Decision, PromptError> {
            Ok(Decision::Skip)
        }

        fn read_line(&mut self, _prompt: &str) -> Result<String, PromptError> {
            Ok(String::new())
        }

        fn acknowledge(&mut self, _message: &str) -> Result<(), PromptError> {
            self.acknowledgments += 1;
            Ok(())
        }
    }

    #[test]
    fn ordinary_errors_are_absorbed_after_acknowledgment() {
        let mut prompter = CountingPrompter { acknowledgments: 0 };
        let err = anyhow::anyhow!("mkdir failed: permission denied");

        let result = absorb_fault(&mut prompter, "create the workspace directory", err);

        assert!(result.is_ok());
        assert_eq!(prompter.acknowledgments, 1);
    }

    #[test]
    fn interrupts_are_reraised_not_absorbed() {
        let mut prompter = CountingPrompter { acknowledgments: 0 };
        let err = anyhow::Error::from(PromptError::Interrupted);

        let result = absorb_fault(&mut prompter, "install default tools", err);

        assert!(matches!(result, Err(PromptError::Interrupted)));
        assert_eq!(prompter.acknowledgments, 0);
    }
}
