use serde::Deserialize;
use serde::Serialize;

/// Per-call knobs for [`emd`](crate::emd()).
///
/// The defaults compute the distance only, with an automatic pivot cap, and
/// treat hitting that cap as an error.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Maximum number of simplex pivots. `None` scales the cap with the problem size.
    pub iterations: Option<usize>,
    /// Whether to report the flow matrix.
    pub flows: bool,
    /// Whether a solve truncated by the pivot cap is returned as a flagged
    /// [`Solution`](crate::Solution) instead of [`Error::NonConvergence`](crate::Error).
    pub partial: bool,
}

impl Settings {
    pub fn iterations(self, iterations: usize) -> Self {
        Self {
            iterations: Some(iterations),
            ..self
        }
    }
    pub fn flows(self) -> Self {
        Self {
            flows: true,
            ..self
        }
    }
    pub fn partial(self) -> Self {
        Self {
            partial: true,
            ..self
        }
    }
    /// Pivot cap for a balanced problem of `rows` × `cols` cells.
    pub fn limit(&self, rows: usize, cols: usize) -> usize {
        self.iterations.unwrap_or_else(|| {
            usize::max(
                crate::SIMPLEX_ITERATIONS,
                crate::SIMPLEX_ITERATIONS_PER_CELL * rows * cols,
            )
        })
    }
}
