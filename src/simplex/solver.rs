use super::basis::Basis;
use super::greedy::Greedy;
use super::pivot::Pivot;
use super::pivot::Rule;
use super::potential::Potential;
use super::problem::Problem;
use super::tree::Tree;
use crate::Energy;
use crate::Mass;
use crate::emd::Error;
use crate::emd::Flow;
use crate::emd::Solution;
use crate::transport::Coupling;
use crate::transport::Measure;

/// Where a solve stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Not yet minimized.
    Pending,
    /// No reduced cost below tolerance: the plan is optimal.
    Optimal,
    /// The pivot cap was reached first.
    Truncated,
}

/// Transportation simplex over a spanning-tree basis.
///
/// Each iteration rebuilds the tree, solves the potentials, prices every
/// non-basic cell and pivots on the chosen one. All scratch state lives on
/// this struct, so independent solves share nothing.
pub struct Simplex<'a, X, Y, M> {
    problem: Problem<'a, X, Y, M>,
    basis: Basis,
    rule: Rule,
    limit: usize,
    patience: usize,
    iterations: usize,
    streak: usize,
    status: Status,
}

impl<'a, X, Y, M> Simplex<'a, X, Y, M> {
    /// Caps the number of pivots.
    pub fn limit(self, limit: usize) -> Self {
        Self { limit, ..self }
    }
    /// Consecutive degenerate pivots tolerated before switching to Bland's rule.
    pub fn patience(self, patience: usize) -> Self {
        Self { patience, ..self }
    }
    pub fn status(&self) -> Status {
        self.status
    }
    pub fn rule(&self) -> Rule {
        self.rule
    }
    pub fn iterations(&self) -> usize {
        self.iterations
    }
    pub fn basis(&self) -> &Basis {
        &self.basis
    }
    pub fn problem(&self) -> &Problem<'a, X, Y, M> {
        &self.problem
    }
    /// Non-zero flows between real entries, sorted by (from, to).
    pub fn flows(&self) -> Vec<Flow> {
        let mut flows = self
            .basis
            .cells()
            .iter()
            .filter(|c| self.problem.is_real(c.row, c.col))
            .filter(|c| c.flow > 0.)
            .map(|c| Flow::from((c.row, c.col, c.flow)))
            .collect::<Vec<_>>();
        flows.sort_by(|a, b| a.from.cmp(&b.from).then(a.to.cmp(&b.to)));
        flows
    }
}

impl<X, Y, M> Simplex<'_, X, Y, M>
where
    M: Measure<X, Y>,
{
    fn iterate(&mut self) -> Result<(), Error> {
        loop {
            let ref tree = Tree::from(&self.basis);
            let ref potential = Potential::solve(tree, &self.basis)?;
            let Some(entering) = self.rule.select(&mut self.problem, &self.basis, potential)? else {
                self.status = Status::Optimal;
                return Ok(());
            };
            if self.iterations >= self.limit {
                self.status = Status::Truncated;
                return Ok(());
            }
            let pivot = Pivot::apply(&mut self.basis, tree, entering)?;
            self.iterations += 1;
            log::trace!(
                "pivot {:>6} in ({}, {}) out ({}, {}) θ = {:.6e} r = {:.6e}",
                self.iterations,
                pivot.entering.row,
                pivot.entering.col,
                pivot.leaving.0,
                pivot.leaving.1,
                pivot.theta,
                pivot.entering.reduced,
            );
            self.observe(&pivot);
        }
    }
    /// Tracks degenerate streaks and falls back to Bland's rule on a long one.
    fn observe(&mut self, pivot: &Pivot) {
        match pivot.is_degenerate(self.problem.total()) {
            true => self.streak += 1,
            false => self.streak = 0,
        }
        if self.rule == Rule::Dantzig && self.streak >= self.patience {
            log::debug!(
                "{:<32}after {} degenerate pivots",
                "switching to Bland's rule",
                self.streak
            );
            self.rule = Rule::Bland;
        }
    }
    /// Packages the current plan. Flows are included only on request.
    ///
    /// Fails if the real cells do not carry the shared mass, which happens
    /// only when rounding lets the dummy line absorb real flow.
    pub fn solution(&self, flows: bool) -> Result<Solution, Error> {
        let moved = self.mass();
        let shared = self.problem.shared();
        if (moved - shared).abs() > crate::SIMPLEX_TOLERANCE * shared {
            return Err(Error::InternalInconsistency(format!(
                "plan moves {} of {} shared mass",
                moved, shared
            )));
        }
        Ok(Solution::new(
            self.distance(),
            shared,
            flows.then(|| self.flows()),
            self.status == Status::Truncated,
            self.iterations,
            self.problem.evaluations(),
        ))
    }
}

impl<X, Y, M> Coupling for Simplex<'_, X, Y, M>
where
    M: Measure<X, Y>,
{
    fn minimize(mut self) -> Result<Self, Error> {
        if self.status == Status::Pending {
            self.iterate()?;
            log::debug!(
                "{:<32}{:?} after {} pivots, {} evaluations",
                "transportation simplex",
                self.status,
                self.iterations,
                self.problem.evaluations()
            );
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
    /// Work per unit of shared mass, which validation keeps positive.
    fn distance(&self) -> Energy {
        self.cost() / self.problem.shared()
    }
}

impl<'a, X, Y, M> From<Greedy<'a, X, Y, M>> for Simplex<'a, X, Y, M> {
    fn from(greedy: Greedy<'a, X, Y, M>) -> Self {
        let (problem, basis) = greedy.into_inner();
        let limit = crate::Settings::default().limit(problem.rows(), problem.cols());
        Self {
            problem,
            basis,
            rule: Rule::Dantzig,
            limit,
            patience: crate::SIMPLEX_DEGENERATE_STREAK,
            iterations: 0,
            streak: 0,
            status: Status::Pending,
        }
    }
}
