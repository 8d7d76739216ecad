//! Command invocation
//!
//! Everything the flow executes externally — package installs, key
//! generation, clones, image builds — goes through [`Invoke`] as a single
//! shell command line. That keeps the flow orchestrator testable against
//! a recording mock while the production [`ShellInvoker`] runs `sh -c`
//! with inherited stdio so the operator sees the live output of every
//! step.

use std::future::Future;
use std::process::Stdio;

use tokio::process::Command;
use tracing::debug;

use crate::action::ActionError;

/// Execute one shell command line to completion
pub trait Invoke {
    /// Run `command` and map its exit status to success or failure
    fn run(&self, command: &str) -> impl Future<Output = Result<(), ActionError>> + Send;
}

impl<T: Invoke + Sync> Invoke for &T {
    fn run(&self, command: &str) -> impl Future<Output = Result<(), ActionError>> + Send {
        (**self).run(command)
    }
}

/// Production invoker: `sh -c <command>` with inherited stdio
#[derive(Debug, Clone, Copy, Default)]
pub struct ShellInvoker;

impl ShellInvoker {
    pub fn new() -> Self {
        Self
    }
}

impl Invoke for ShellInvoker {
    fn run(&self, command: &str) -> impl Future<Output = Result<(), ActionError>> + Send {
        let command = command.to_string();
        async move {
            println!("Running: {command}");
            debug!(%command, "spawning shell command");

            let status = Command::new("sh")
                .args(["-c", &command])
                .stdin(Stdio::inherit())
                .stdout(Stdio::inherit())
                .stderr(Stdio::inherit())
                .spawn()?
                .wait()
                .await?;

            if status.success() {
                Ok(())
            } else {
                match status.code() {
                    Some(code) => Err(ActionError::ExitStatus { code }),
                    None => Err(ActionError::Signalled),
                }
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod tests_support {
    //! Recording mock invoker shared by this crate's unit tests

    use std::sync::Mutex;

    use super::*;

    /// Records every command line and fails the ones scripted to fail
    #[derive(Debug, Default)]
    pub struct MockInvoker {
        commands: Mutex<Vec<String>>,
        failures: Mutex<Vec<FailureRule>>,
    }

    #[derive(Debug)]
    struct FailureRule {
        needle: String,
        code: i32,
        remaining: u32,
    }

    impl MockInvoker {
        pub fn new() -> Self {
            Self::default()
        }

        /// Every command containing `needle` fails with `code`
        pub fn fail_matching(&self, needle: &str, code: i32) {
            self.fail_matching_times(needle, code, u32::MAX);
        }

        /// The next `times` commands containing `needle` fail with `code`
        pub fn fail_matching_times(&self, needle: &str, code: i32, times: u32) {
            self.failures.lock().unwrap().push(FailureRule {
                needle: needle.to_string(),
                code,
                remaining: times,
            });
        }

        /// Every command line run so far, in order
        pub fn commands(&self) -> Vec<String> {
            self.commands.lock().unwrap().clone()
        }
    }

    impl Invoke for MockInvoker {
        fn run(&self, command: &str) -> impl Future<Output = Result<(), ActionError>> + Send {
            self.commands.lock().unwrap().push(command.to_string());

            let mut failures = self.failures.lock().unwrap();
            let result = match failures
                .iter_mut()
                .find(|rule| rule.remaining > 0 && command.contains(&rule.needle))
            {
                Some(rule) => {
                    rule.remaining = rule.remaining.saturating_sub(1);
                    Err(ActionError::ExitStatus { code: rule.code })
                }
                None => Ok(()),
            };
            drop(failures);

            async move { result }
        }
    }
}
