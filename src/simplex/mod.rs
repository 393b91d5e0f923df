//! Transportation simplex.
//!
//! A primal simplex specialized to the transportation problem: the basis is
//! a spanning tree over the bipartite graph of rows (sources) and columns
//! (targets), so dual potentials come from one tree traversal and each pivot
//! shifts flow around the unique cycle its entering cell closes.
//!
//! ## Pipeline
//!
//! 1. [`Problem`]: validate, balance with a zero-cost dummy line
//! 2. [`Greedy`]: row-minimum bootstrap to a spanning-tree basis
//! 3. [`Simplex`]: pivot until no reduced cost is negative, or the cap hits
//!
//! ## Numerics
//!
//! Optimality is tested against `-SIMPLEX_TOLERANCE × max cost`. Degenerate
//! pivots (θ = 0) are allowed; a long streak of them switches entering
//! selection from [`Rule::Dantzig`] to [`Rule::Bland`], and the pivot cap
//! bounds the rest.
mod basis;
mod cell;
mod costs;
mod greedy;
mod pivot;
mod potential;
mod problem;
mod solver;
mod tree;

pub use basis::*;
pub use cell::*;
pub use costs::*;
pub use greedy::*;
pub use pivot::*;
pub use potential::*;
pub use problem::*;
pub use solver::*;
pub use tree::*;
