//! Shared run types for the Brokkr CLI
//!
//! These types describe a single provisioning run: which distribution is
//! being targeted, which role the operator declared, and how each
//! supervised step ended. A run owns this state exclusively for its
//! lifetime; nothing here persists between runs.

use std::fmt;

/// Target distribution for the run
///
/// Selected once, before anything else, because it decides which action
/// registry is active. The numeric codes are the ones presented in the
/// selection menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Distro {
    /// Debian stable
    Debian,
    /// Ubuntu LTS
    Ubuntu,
    /// Arch Linux
    Arch,
}

impl Distro {
    /// All supported distributions, in menu order
    pub const ALL: &'static [Distro] = &[Distro::Debian, Distro::Ubuntu, Distro::Arch];

    /// Menu code for this distribution (1-based)
    pub fn code(&self) -> u32 {
        match self {
            Self::Debian => 1,
            Self::Ubuntu => 2,
            Self::Arch => 3,
        }
    }

    /// Resolve a menu code back to a distribution
    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            1 => Some(Self::Debian),
            2 => Some(Self::Ubuntu),
            3 => Some(Self::Arch),
            _ => None,
        }
    }
}

impl fmt::Display for Distro {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Debian => write!(f, "Debian"),
            Self::Ubuntu => write!(f, "Ubuntu"),
            Self::Arch => write!(f, "Arch"),
        }
    }
}

/// Operator-declared job function
///
/// The role decides the default action list for the active distribution.
/// Unlike the distribution choice, an unrecognized role code is not an
/// error: the run falls back to `Other`, which has no defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Developer,
    Tester,
    Database,
    Other,
}

impl Role {
    /// All roles, in menu order
    pub const ALL: &'static [Role] = &[Role::Developer, Role::Tester, Role::Database, Role::Other];

    /// Menu code for this role (1-based)
    pub fn code(&self) -> u32 {
        match self {
            Self::Developer => 1,
            Self::Tester => 2,
            Self::Database => 3,
            Self::Other => 4,
        }
    }

    /// Resolve a menu code back to a role
    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            1 => Some(Self::Developer),
            2 => Some(Self::Tester),
            3 => Some(Self::Database),
            4 => Some(Self::Other),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Developer => write!(f, "Developer"),
            Self::Tester => write!(f, "Tester"),
            Self::Database => write!(f, "Database"),
            Self::Other => write!(f, "Other"),
        }
    }
}

/// How one supervised step ended
///
/// Never dropped silently: the orchestrator records every outcome so
/// later phases can branch on it and the final summary can report it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The step's action eventually reported success
    Completed,
    /// The operator chose to skip after one or more failures
    SkippedByUser,
}

/// Process exit codes
///
/// A skip-recovered run still exits zero; only the fatal distribution
/// choice and an operator interrupt produce nonzero codes.
pub mod exit_code {
    /// Normal completion, including runs with skipped steps
    pub const SUCCESS: i32 = 0;
    /// The initial distribution selection was invalid
    pub const INVALID_DISTRIBUTION: i32 = 2;
    /// The operator interrupted the run during a pause
    pub const INTERRUPTED: i32 = 130;
}
