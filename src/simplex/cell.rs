use crate::Energy;
use crate::Mass;

/// A basic cell: one edge of the spanning tree.
///
/// The ground distance is cached on the cell so the plan's work can be
/// summed without touching the cost matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
    pub flow: Mass,
    pub cost: Energy,
}

impl Cell {
    pub fn work(&self) -> Energy {
        self.flow * self.cost
    }
}
