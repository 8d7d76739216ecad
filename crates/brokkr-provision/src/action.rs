//! Installer action definitions

use thiserror::Error;

/// One installable unit of work
///
/// Actions are static data authored alongside each distribution family's
/// catalog; the core never inspects the command, it only invokes it and
/// reacts to the exit status. Idempotence under re-invocation is the
/// catalog author's responsibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Action {
    /// Stable identifier, shared across families ("docker", "dbeaver", ...)
    pub id: &'static str,
    /// Human-readable name shown in menus and step labels
    pub name: &'static str,
    /// Short description shown in the additional-selection menu
    pub description: &'static str,
    /// Shell command line executed via `sh -c`
    pub command: &'static str,
    /// Optional note printed before the command runs
    pub notes: Option<&'static str>,
}

/// Failure of one action invocation
///
/// The `Display` output is what the operator sees next to the action
/// name before choosing retry or skip, so it always carries the exit
/// indicator.
#[derive(Error, Debug)]
pub enum ActionError {
    /// The command ran and reported a nonzero exit status
    #[error("exited with status {code}")]
    ExitStatus { code: i32 },

    /// The command was terminated by a signal before reporting a status
    #[error("terminated by signal")]
    Signalled,

    /// The command could not be spawned, or supporting filesystem work
    /// around it failed
    #[error("{0}")]
    Io(#[from] std::io::Error),
}

impl ActionError {
    /// The reported exit code, when the command got far enough to have one
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            Self::ExitStatus { code } => Some(*code),
            _ => None,
        }
    }
}
