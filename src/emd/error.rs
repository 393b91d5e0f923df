use super::solution::Solution;

/// Errors that can occur while computing a distance.
///
/// None of these are worth retrying: the solver is deterministic, so the
/// same inputs fail the same way.
#[derive(Debug, Clone)]
pub enum Error {
    /// Rejected before or during setup: empty signature, negative or
    /// non-finite weight, zero total mass, or a ground distance that is
    /// negative or non-finite.
    InvalidInput(String),
    /// The pivot cap was reached before optimality was proven.
    /// Carries the best plan found, flagged as truncated.
    NonConvergence {
        iterations: usize,
        partial: Box<Solution>,
    },
    /// The basis stopped being a spanning tree. This is a solver defect.
    InternalInconsistency(String),
}

impl Error {
    /// The truncated solution, if the solve ran out of pivots.
    pub fn partial(&self) -> Option<&Solution> {
        match self {
            Self::NonConvergence { partial, .. } => Some(partial),
            _ => None,
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput(s) => write!(f, "invalid input: {}", s),
            Self::NonConvergence {
                iterations,
                partial,
            } => write!(
                f,
                "no optimum after {} pivots (best distance {})",
                iterations,
                partial.distance()
            ),
            Self::InternalInconsistency(s) => write!(f, "internal inconsistency: {}", s),
        }
    }
}

impl std::error::Error for Error {}
