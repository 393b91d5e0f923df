use super::basis::Basis;
use super::tree::Tree;
use crate::Energy;
use crate::emd::Error;

/// Dual values: `u` per row, `v` per column.
///
/// Satisfies `u[i] + v[j] = cost(i, j)` on every basic cell, with `u[0]`
/// pinned to zero. Because the basis is a spanning tree the system has
/// exactly one solution, found by a single traversal from row 0.
#[derive(Debug, Clone, PartialEq)]
pub struct Potential {
    u: Vec<Energy>,
    v: Vec<Energy>,
}

impl Potential {
    pub fn solve(tree: &Tree, basis: &Basis) -> Result<Self, Error> {
        let mut u = vec![0.; basis.rows()];
        let mut v = vec![0.; basis.cols()];
        let steps = tree.walk(tree.row(0));
        if steps.len() + 1 != tree.nodes() {
            return Err(Error::InternalInconsistency(format!(
                "basis of {} cells reaches {} of {} nodes",
                basis.len(),
                steps.len() + 1,
                tree.nodes()
            )));
        }
        for step in steps {
            let cell = basis.cell(step.slot);
            match tree.is_row(step.node) {
                true => u[cell.row] = cell.cost - v[cell.col],
                false => v[cell.col] = cell.cost - u[cell.row],
            }
        }
        Ok(Self { u, v })
    }
    pub fn u(&self, i: usize) -> Energy {
        self.u[i]
    }
    pub fn v(&self, j: usize) -> Energy {
        self.v[j]
    }
    /// Reduced cost of cell (i, j) given its ground distance.
    pub fn reduced(&self, i: usize, j: usize, cost: Energy) -> Energy {
        cost - self.u[i] - self.v[j]
    }
}
