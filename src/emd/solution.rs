use super::flow::Flow;
use crate::Energy;
use crate::Mass;
use serde::Deserialize;
use serde::Serialize;

/// Outcome of one distance computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    distance: Energy,
    mass: Mass,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    flows: Option<Vec<Flow>>,
    truncated: bool,
    iterations: usize,
    evaluations: usize,
}

impl Solution {
    pub(crate) fn new(
        distance: Energy,
        mass: Mass,
        flows: Option<Vec<Flow>>,
        truncated: bool,
        iterations: usize,
        evaluations: usize,
    ) -> Self {
        Self {
            distance,
            mass,
            flows,
            truncated,
            iterations,
            evaluations,
        }
    }
    /// Work per unit of matched mass.
    pub fn distance(&self) -> Energy {
        self.distance
    }
    /// Matched mass: the smaller of the two signature totals.
    pub fn mass(&self) -> Mass {
        self.mass
    }
    /// Non-zero matched flows sorted by (from, to), if requested.
    pub fn flows(&self) -> Option<&[Flow]> {
        self.flows.as_deref()
    }
    /// True when the pivot cap stopped the solve. The distance is then an
    /// upper bound rather than a proven optimum.
    pub fn truncated(&self) -> bool {
        self.truncated
    }
    /// Simplex pivots performed after the greedy start.
    pub fn iterations(&self) -> usize {
        self.iterations
    }
    /// Ground distance evaluations.
    pub fn evaluations(&self) -> usize {
        self.evaluations
    }
}

impl std::fmt::Display for Solution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{:<16}{}", "distance", self.distance)?;
        writeln!(f, "{:<16}{}", "mass", self.mass)?;
        writeln!(f, "{:<16}{}", "iterations", self.iterations)?;
        writeln!(f, "{:<16}{}", "truncated", self.truncated)?;
        for flow in self.flows.iter().flatten() {
            writeln!(f, "{}", flow)?;
        }
        Ok(())
    }
}
