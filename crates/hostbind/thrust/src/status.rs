//! Differential-throttle solver status

use serde::{Deserialize, Serialize};

/// Outcome of the host's differential-throttle solver.
///
/// Host ordinal `i` maps to the `i`-th variant. Anything outside that range
/// is host drift and is reported, never defaulted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DifferentialThrottleStatus {
    Success,
    AllEnginesOff,
    MoreEnginesRequired,
    SolverFailed,
}

impl DifferentialThrottleStatus {
    /// All variants in host ordinal order.
    pub const ALL: [Self; 4] = [
        Self::Success,
        Self::AllEnginesOff,
        Self::MoreEnginesRequired,
        Self::SolverFailed,
    ];

    pub fn from_ordinal(ordinal: i64) -> Option<Self> {
        usize::try_from(ordinal)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
    }

    pub fn ordinal(&self) -> i64 {
        match self {
            Self::Success => 0,
            Self::AllEnginesOff => 1,
            Self::MoreEnginesRequired => 2,
            Self::SolverFailed => 3,
        }
    }
}

impl std::fmt::Display for DifferentialThrottleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Success => write!(f, "Success"),
            Self::AllEnginesOff => write!(f, "AllEnginesOff"),
            Self::MoreEnginesRequired => write!(f, "MoreEnginesRequired"),
            Self::SolverFailed => write!(f, "SolverFailed"),
        }
    }
}
