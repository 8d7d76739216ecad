//! Mock implementations for driving the flow without a shell or terminal

#![allow(dead_code)]

use std::collections::VecDeque;
use std::future::Future;
use std::sync::Mutex;

use brokkr_core::error::PromptError;
use brokkr_core::prompt::{Decision, Prompter};
use brokkr_provision::{ActionError, Invoke};

/// Recording invoker with scripted failures
#[derive(Debug, Default)]
pub struct RecordingInvoker {
    commands: Mutex<Vec<String>>,
    failures: Mutex<Vec<FailureRule>>,
}

#[derive(Debug)]
struct FailureRule {
    needle: String,
    code: i32,
    remaining: u32,
}

impl RecordingInvoker {
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

    /// How many recorded commands contain `needle`
    pub fn count_matching(&self, needle: &str) -> usize {
        self.commands()
            .iter()
            .filter(|c| c.contains(needle))
            .count()
    }
}

impl Invoke for RecordingInvoker {
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

/// Prompter that answers from pre-scripted lines and decisions
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    lines: VecDeque<String>,
    decisions: VecDeque<Decision>,
    /// Recorded (label, failure) pairs from retry/skip prompts
    pub failures_seen: Vec<(String, String)>,
    /// Number of fault acknowledgments requested
    pub acknowledgments: u32,
    /// Fail the next read_line with an interrupt
    interrupt_next_read: bool,
}

impl ScriptedPrompter {
    pub fn new(lines: &[&str], decisions: &[Decision]) -> Self {
        Self {
            lines: lines.iter().map(|l| l.to_string()).collect(),
            decisions: decisions.iter().copied().collect(),
            ..Self::default()
        }
    }

    pub fn interrupting() -> Self {
        Self {
            interrupt_next_read: true,
            ..Self::default()
        }
    }

    /// How many retry/skip prompts were shown
    pub fn prompts(&self) -> usize {
        self.failures_seen.len()
    }
}

impl Prompter for ScriptedPrompter {
    fn retry_or_skip(&mut self, label: &str, failure: &str) -> Result<Decision, PromptError> {
        self.failures_seen
            .push((label.to_string(), failure.to_string()));
        Ok(self
            .decisions
            .pop_front()
            .unwrap_or_else(|| panic!("unscripted retry/skip prompt for '{label}': {failure}")))
    }

    fn read_line(&mut self, prompt: &str) -> Result<String, PromptError> {
        if self.interrupt_next_read {
            return Err(PromptError::Interrupted);
        }
        Ok(self
            .lines
            .pop_front()
            .unwrap_or_else(|| panic!("unscripted read_line prompt: '{prompt}'")))
    }

    fn acknowledge(&mut self, _message: &str) -> Result<(), PromptError> {
        self.acknowledgments += 1;
        Ok(())
    }
}
