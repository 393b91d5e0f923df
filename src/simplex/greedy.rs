use super::basis::Basis;
use super::cell::Cell;
use super::problem::Problem;
use crate::Energy;
use crate::Mass;
use crate::emd::Error;
use crate::transport::Coupling;
use crate::transport::Measure;

/// Row-minimum bootstrap for the transportation simplex.
///
/// Every active row nominates its cheapest active column. Among the
/// nominees, the cheapest wins; equal costs go to the cell that can move
/// more mass, then to the lowest row. Cells on a dummy line rank after
/// every real cell, so excess mass is parked only once real capacity is
/// spent. The winner ships as much as its row
/// and column allow, and exactly one of the two lines retires:
///
/// - the row, if its supply ran out first (or both did),
/// - otherwise the column,
/// - except that the last remaining row or column is never retired while
///   the other side still has active lines.
///
/// Retiring one line per allocation, and both on the final one, yields
/// exactly `rows + cols - 1` cells forming a spanning tree. Cells placed
/// when both lines ran out together carry zero flow and keep the tree
/// connected.
///
/// The resulting plan is feasible but generally not optimal; its cost is an
/// upper bound on the distance.
pub struct Greedy<'a, X, Y, M> {
    problem: Problem<'a, X, Y, M>,
    basis: Basis,
}

impl<'a, X, Y, M> Greedy<'a, X, Y, M>
where
    M: Measure<X, Y>,
{
    fn allocate(&mut self) -> Result<(), Error> {
        let rows = self.problem.rows();
        let cols = self.problem.cols();
        let mut supply = self.problem.supply().to_vec();
        let mut demand = self.problem.demand().to_vec();
        let mut live_rows = vec![true; rows];
        let mut live_cols = vec![true; cols];
        let mut n_rows = rows;
        let mut n_cols = cols;
        while n_rows > 0 && n_cols > 0 {
            let mut best = None::<((bool, Energy), Mass, usize, usize)>;
            for i in (0..rows).filter(|&i| live_rows[i]) {
                let mut nominee = None::<((bool, Energy), usize)>;
                for j in (0..cols).filter(|&j| live_cols[j]) {
                    let rank = (!self.problem.is_real(i, j), self.problem.cost(i, j)?);
                    if nominee.is_none_or(|(r, _)| rank < r) {
                        nominee = Some((rank, j));
                    }
                }
                if let Some((rank, j)) = nominee {
                    let flow = Mass::min(supply[i], demand[j]);
                    if best.is_none_or(|(r, f, _, _)| rank < r || (rank == r && flow > f)) {
                        best = Some((rank, flow, i, j));
                    }
                }
            }
            let Some(((_, cost), flow, i, j)) = best else {
                return Err(Error::InternalInconsistency(
                    "greedy start found no active cell".into(),
                ));
            };
            self.basis.push(Cell {
                row: i,
                col: j,
                flow,
                cost,
            });
            let row_first = supply[i] <= demand[j];
            supply[i] = (supply[i] - flow).max(0.);
            demand[j] = (demand[j] - flow).max(0.);
            let (retire_row, retire_col) = match (n_rows, n_cols) {
                (1, 1) => (true, true),
                (1, _) => (false, true),
                (_, 1) => (true, false),
                _ => (row_first, !row_first),
            };
            if retire_row {
                live_rows[i] = false;
                n_rows -= 1;
            }
            if retire_col {
                live_cols[j] = false;
                n_cols -= 1;
            }
        }
        log::trace!(
            "{:<32}{} cells over {}x{}",
            "greedy start",
            self.basis.len(),
            rows,
            cols
        );
        Ok(())
    }
}

impl<'a, X, Y, M> Greedy<'a, X, Y, M> {
    pub fn problem(&self) -> &Problem<'a, X, Y, M> {
        &self.problem
    }
    pub fn basis(&self) -> &Basis {
        &self.basis
    }
    pub(crate) fn into_inner(self) -> (Problem<'a, X, Y, M>, Basis) {
        (self.problem, self.basis)
    }
}

impl<X, Y, M> Coupling for Greedy<'_, X, Y, M>
where
    M: Measure<X, Y>,
{
    fn minimize(mut self) -> Result<Self, Error> {
        if self.basis.is_empty() {
            self.allocate()?;
        }
        Ok(self)
    }
    fn flow(&self, x: usize, y: usize) -> Mass {
        self.basis.flow(x, y)
    }
    fn cost(&self) -> Energy {
        self.basis.work(|c| self.problem.is_real(c.row, c.col))
    }
    fn mass(&self) -> Mass {
        self.basis.mass(|c| self.problem.is_real(c.row, c.col))
    }
}

impl<'a, X, Y, M> From<Problem<'a, X, Y, M>> for Greedy<'a, X, Y, M> {
    fn from(problem: Problem<'a, X, Y, M>) -> Self {
        let basis = Basis::new(problem.rows(), problem.cols());
        Self { problem, basis }
    }
}
