//! Operator interaction abstraction
//!
//! All console input goes through the [`Prompter`] trait so the flow
//! orchestrator and the step executor can be exercised in tests with a
//! scripted implementation. The production implementation,
//! [`ConsolePrompter`], is built on `dialoguer`.

use crate::error::PromptError;

/// Operator decision after a supervised step failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Re-run the failing action from scratch
    Retry,
    /// Abandon the action and move on
    Skip,
}

/// Line-oriented console interaction
///
/// Implementations must surface an operator interrupt (Ctrl-C, closed
/// stdin) as [`PromptError::Interrupted`]; everything else in the run
/// treats that error as fatal.
pub trait Prompter {
    /// Report a step failure and ask the operator to retry or skip
    ///
    /// `failure` is the displayable failure (action name and exit
    /// indicator are the caller's responsibility to include).
    fn retry_or_skip(&mut self, label: &str, failure: &str) -> Result<Decision, PromptError>;

    /// Read one line of free-form input
    fn read_line(&mut self, prompt: &str) -> Result<String, PromptError>;

    /// Block until the operator acknowledges with Enter
    fn acknowledge(&mut self, message: &str) -> Result<(), PromptError>;
}

impl<T: Prompter> Prompter for &mut T {
    fn retry_or_skip(&mut self, label: &str, failure: &str) -> Result<Decision, PromptError> {
        (**self).retry_or_skip(label, failure)
    }

    fn read_line(&mut self, prompt: &str) -> Result<String, PromptError> {
        (**self).read_line(prompt)
    }

    fn acknowledge(&mut self, message: &str) -> Result<(), PromptError> {
        (**self).acknowledge(message)
    }
}

/// Interactive prompter backed by `dialoguer`
#[derive(Debug, Default)]
pub struct ConsolePrompter;

impl ConsolePrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for ConsolePrompter {
    fn retry_or_skip(&mut self, label: &str, failure: &str) -> Result<Decision, PromptError> {
        eprintln!("\n✗ {label}: {failure}");

        let choice = dialoguer::Select::new()
            .with_prompt(format!("How do you want to proceed with '{label}'?"))
            .items(&["Retry", "Skip"])
            .default(0)
            .interact()?;

        Ok(match choice {
            0 => Decision::Retry,
            _ => Decision::Skip,
        })
    }

    fn read_line(&mut self, prompt: &str) -> Result<String, PromptError> {
        let line: String = dialoguer::Input::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?;
        Ok(line)
    }

    fn acknowledge(&mut self, message: &str) -> Result<(), PromptError> {
        let _: String = dialoguer::Input::new()
            .with_prompt(message)
            .allow_empty(true)
            .interact_text()?;
        Ok(())
    }
}
