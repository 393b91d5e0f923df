use super::basis::Basis;
use super::cell::Cell;
use super::potential::Potential;
use super::problem::Problem;
use super::tree::Tree;
use crate::Energy;
use crate::Mass;
use crate::emd::Error;
use crate::transport::Measure;

/// Entering cell selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Most negative reduced cost; ties go to the lowest row, then column.
    Dantzig,
    /// First negative reduced cost in row-major order. Cannot cycle.
    Bland,
}

/// A non-basic cell chosen to enter the basis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entering {
    pub row: usize,
    pub col: usize,
    pub cost: Energy,
    pub reduced: Energy,
}

/// Outcome of one pivot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pivot {
    pub entering: Entering,
    pub leaving: (usize, usize),
    pub theta: Mass,
}

impl Rule {
    /// Scans non-basic cells for an improving one.
    /// `None` means the current basis is optimal within tolerance.
    pub fn select<X, Y, M>(
        &self,
        problem: &mut Problem<'_, X, Y, M>,
        basis: &Basis,
        potential: &Potential,
    ) -> Result<Option<Entering>, Error>
    where
        M: Measure<X, Y>,
    {
        let mut best = None::<Entering>;
        for row in 0..problem.rows() {
            for col in 0..problem.cols() {
                if basis.contains(row, col) {
                    continue;
                }
                let cost = problem.cost(row, col)?;
                let reduced = potential.reduced(row, col, cost);
                let entering = Entering {
                    row,
                    col,
                    cost,
                    reduced,
                };
                match self {
                    Self::Bland if reduced < -problem.tolerance() => return Ok(Some(entering)),
                    Self::Bland => continue,
                    Self::Dantzig if best.is_none_or(|b| reduced < b.reduced) => {
                        best = Some(entering)
                    }
                    Self::Dantzig => continue,
                }
            }
        }
        // every cost has been seen by now, so the threshold is final
        Ok(best.filter(|b| b.reduced < -problem.tolerance()))
    }
}

impl Pivot {
    /// Shifts θ around the cycle that `entering` closes in the tree.
    ///
    /// Walking the tree path from the entering column back to the entering
    /// row, cells alternate −, +, −, … ; the entering cell itself is +.
    /// θ is the least flow on a − cell, and the − cell carrying it leaves
    /// (lowest row, then column, on ties). Other − cells that also reach
    /// zero stay basic as degenerate cells.
    pub fn apply(basis: &mut Basis, tree: &Tree, entering: Entering) -> Result<Self, Error> {
        let path = tree
            .path(tree.col(entering.col), tree.row(entering.row))
            .ok_or_else(|| {
                Error::InternalInconsistency(format!(
                    "no cycle through entering cell ({}, {})",
                    entering.row, entering.col
                ))
            })?;
        if path.len() % 2 == 0 {
            return Err(Error::InternalInconsistency(format!(
                "cycle through ({}, {}) has even length {}",
                entering.row,
                entering.col,
                path.len() + 1
            )));
        }
        let slot = path
            .iter()
            .step_by(2)
            .copied()
            .min_by(|&a, &b| {
                let a = basis.cell(a);
                let b = basis.cell(b);
                a.flow
                    .total_cmp(&b.flow)
                    .then(a.row.cmp(&b.row))
                    .then(a.col.cmp(&b.col))
            })
            .ok_or_else(|| Error::InternalInconsistency("empty pivot cycle".into()))?;
        let Cell {
            row,
            col,
            flow: theta,
            ..
        } = *basis.cell(slot);
        for (k, &s) in path.iter().enumerate() {
            let cell = basis.cell_mut(s);
            match k % 2 {
                0 => cell.flow = (cell.flow - theta).max(0.),
                _ => cell.flow += theta,
            }
        }
        let leaving = (row, col);
        basis.replace(
            slot,
            Cell {
                row: entering.row,
                col: entering.col,
                flow: theta,
                cost: entering.cost,
            },
        );
        Ok(Self {
            entering,
            leaving,
            theta,
        })
    }
    pub fn is_degenerate(&self, scale: Mass) -> bool {
        self.theta <= crate::SIMPLEX_TOLERANCE * scale
    }
}
