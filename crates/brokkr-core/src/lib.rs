//! # brokkr-core
//!
//! Core library for the Brokkr CLI providing:
//! - Run type definitions (distribution, role, step outcomes)
//! - The `supervise` step executor with operator-driven retry/skip recovery
//! - The fault-absorption boundary used between orchestration phases
//! - The `Prompter` abstraction over console interaction

pub mod error;
pub mod intercept;
pub mod prompt;
pub mod supervise;
pub mod types;

pub use error::PromptError;
pub use intercept::absorb_fault;
pub use prompt::{ConsolePrompter, Decision, Prompter};
pub use supervise::supervise;
pub use types::{exit_code, Distro, Role, StepOutcome};
