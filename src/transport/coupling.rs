use crate::Energy;
use crate::Mass;
use crate::emd::Error;

/// A transport plan (coupling) between two weighted distributions.
///
/// A coupling assigns a flow to every (source, target) pair so that no source
/// ships more than its weight and no target receives more than its weight.
/// Support points are addressed by their position in the source and target
/// densities.
///
/// # Algorithm Contract
///
/// Implementations must ensure that after [`minimize`](Coupling::minimize)
/// returns, [`cost`](Coupling::cost) and [`mass`](Coupling::mass) describe
/// the plan they hold. For exact solvers that plan is optimal; for
/// heuristics it is merely feasible.
pub trait Coupling: Sized {
    /// Improves the coupling as far as the implementation allows.
    fn minimize(self) -> Result<Self, Error>;
    /// Returns the mass transported from source `x` to target `y`.
    fn flow(&self, x: usize, y: usize) -> Mass;
    /// Returns the total work of the plan: Σ flow(x, y) · distance(x, y).
    fn cost(&self) -> Energy;
    /// Returns the total mass actually moved between real support points.
    fn mass(&self) -> Mass;
    /// Returns the work per unit of moved mass.
    ///
    /// A plan that moves nothing has distance zero.
    fn distance(&self) -> Energy {
        match self.mass() {
            mass if mass > 0. => self.cost() / mass,
            _ => 0.,
        }
    }
}
