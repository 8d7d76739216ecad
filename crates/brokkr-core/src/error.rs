//! Error types for brokkr-core

use thiserror::Error;

/// Errors raised while interacting with the operator
///
/// An `Interrupted` prompt is the one condition that must not be absorbed
/// by the fault boundary: it aborts the whole run with a dedicated exit
/// code rather than advancing to the next phase.
#[derive(Error, Debug)]
pub enum PromptError {
    /// The operator interrupted the run (Ctrl-C or closed stdin) while
    /// a prompt was waiting for input
    #[error("run aborted by operator")]
    Interrupted,

    /// Terminal I/O failed for a reason other than an interrupt
    #[error("terminal error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<dialoguer::Error> for PromptError {
    fn from(err: dialoguer::Error) -> Self {
        match err {
            dialoguer::Error::IO(io) if io.kind() == std::io::ErrorKind::Interrupted => {
                Self::Interrupted
            }
            dialoguer::Error::IO(io) if io.kind() == std::io::ErrorKind::UnexpectedEof => {
                Self::Interrupted
            }
            dialoguer::Error::IO(io) => Self::Io(io),
            _ => Self::Interrupted,
        }
    }
}
