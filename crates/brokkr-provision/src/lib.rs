//! # brokkr-provision
//!
//! Provisioning library for the Brokkr CLI. It owns everything between
//! the console and the shell:
//!
//! - **Action catalogs**: static, per-distribution-family registries of
//!   installer actions with role-specific default lists
//! - **Shell invocation**: the `Invoke` abstraction and its `sh -c`
//!   production implementation
//! - **Identity setup**: SSH key detection and generation
//! - **Project cloning** and the role-conditional image build post step
//! - **The flow orchestrator**: the interactive state machine that drives
//!   a whole run through supervised steps

pub mod action;
pub mod flow;
pub mod identity;
pub mod images;
pub mod invoker;
pub mod projects;
pub mod registry;
pub mod selection;

pub use action::{Action, ActionError};
pub use flow::{FlowError, ProvisionPaths, Provisioner, RunState, StepRecord};
pub use invoker::{Invoke, ShellInvoker};
pub use registry::{PackageFamily, Registry};
