use super::costs::Costs;
use crate::Energy;
use crate::Mass;
use crate::emd::Error;
use crate::emd::validate;
use crate::transport::Density;
use crate::transport::Measure;

/// Which side, if any, received a zero-cost dummy line to absorb excess mass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dummy {
    /// Supplies and demands already balance.
    Balanced,
    /// Extra row: the target side is heavier.
    Row,
    /// Extra column: the source side is heavier.
    Col,
}

/// A validated, balanced transportation problem.
///
/// Rows are sources, columns are targets. When total masses differ, one
/// dummy row or column takes up the difference at zero cost; flow routed
/// through it is excluded from the work and from the moved mass.
pub struct Problem<'a, X, Y, M> {
    costs: Costs<'a, X, Y, M>,
    supply: Vec<Mass>,
    demand: Vec<Mass>,
    dummy: Dummy,
    shared: Mass,
}

impl<'a, X, Y, M> Problem<'a, X, Y, M>
where
    M: Measure<X, Y>,
{
    pub fn new<P, Q>(p: &'a P, q: &'a Q, metric: &'a M) -> Result<Self, Error>
    where
        P: Density<Support = X>,
        Q: Density<Support = Y>,
    {
        validate("source", p.support().map(|(_, w)| w))?;
        validate("target", q.support().map(|(_, w)| w))?;
        let (mut supply, lhs) = p.support().map(|(x, w)| (w, x)).unzip::<_, _, Vec<_>, Vec<_>>();
        let (mut demand, rhs) = q.support().map(|(y, w)| (w, y)).unzip::<_, _, Vec<_>, Vec<_>>();
        let s = supply.iter().sum::<Mass>();
        let d = demand.iter().sum::<Mass>();
        let dummy = match s - d {
            excess if excess.abs() <= crate::SIMPLEX_TOLERANCE * s.max(d) => Dummy::Balanced,
            excess if excess > 0. => {
                demand.push(excess);
                Dummy::Col
            }
            excess => {
                supply.push(-excess);
                Dummy::Row
            }
        };
        let costs = Costs::new(metric, lhs, rhs, supply.len(), demand.len());
        Ok(Self {
            costs,
            supply,
            demand,
            dummy,
            shared: s.min(d),
        })
    }
}

impl<X, Y, M> Problem<'_, X, Y, M>
where
    M: Measure<X, Y>,
{
    /// Ground distance of cell (i, j); zero on the dummy line.
    pub fn cost(&mut self, i: usize, j: usize) -> Result<Energy, Error> {
        self.costs.get(i, j)
    }
    /// Optimality threshold for reduced costs at the current cost scale.
    pub fn tolerance(&self) -> Energy {
        crate::SIMPLEX_TOLERANCE * self.costs.peak()
    }
    pub fn evaluations(&self) -> usize {
        self.costs.evaluations()
    }
}

impl<X, Y, M> Problem<'_, X, Y, M> {
    /// Rows including any dummy row.
    pub fn rows(&self) -> usize {
        self.supply.len()
    }
    /// Columns including any dummy column.
    pub fn cols(&self) -> usize {
        self.demand.len()
    }
    pub fn supply(&self) -> &[Mass] {
        &self.supply
    }
    pub fn demand(&self) -> &[Mass] {
        &self.demand
    }
    pub fn dummy(&self) -> Dummy {
        self.dummy
    }
    /// Mass both sides hold in common: the smaller of the two totals.
    /// Every optimal plan moves exactly this much between real entries.
    pub fn shared(&self) -> Mass {
        self.shared
    }
    /// Total balanced mass.
    pub fn total(&self) -> Mass {
        self.supply.iter().sum()
    }
    /// Whether cell (i, j) joins a real source to a real target.
    pub fn is_real(&self, i: usize, j: usize) -> bool {
        match self.dummy {
            Dummy::Balanced => true,
            Dummy::Row => i + 1 < self.rows(),
            Dummy::Col => j + 1 < self.cols(),
        }
    }
}
