use crate::Energy;
use crate::emd::Error;
use crate::transport::Measure;

/// Lazily evaluated, memoized cost matrix.
///
/// Cell (i, j) is computed on first access and cached in a dense array
/// guarded by a `known` bitmap. Rows and columns past the real supports
/// belong to the dummy line and cost nothing.
pub struct Costs<'a, X, Y, M> {
    metric: &'a M,
    lhs: Vec<&'a X>,
    rhs: Vec<&'a Y>,
    cols: usize,
    cache: Vec<Energy>,
    known: Vec<bool>,
    peak: Energy,
    evaluations: usize,
}

impl<'a, X, Y, M> Costs<'a, X, Y, M>
where
    M: Measure<X, Y>,
{
    /// `rows` and `cols` include any dummy line.
    pub fn new(metric: &'a M, lhs: Vec<&'a X>, rhs: Vec<&'a Y>, rows: usize, cols: usize) -> Self {
        debug_assert!(lhs.len() <= rows);
        debug_assert!(rhs.len() <= cols);
        Self {
            metric,
            lhs,
            rhs,
            cols,
            cache: vec![0.; rows * cols],
            known: vec![false; rows * cols],
            peak: 0.,
            evaluations: 0,
        }
    }
    /// Ground distance of cell (i, j).
    pub fn get(&mut self, i: usize, j: usize) -> Result<Energy, Error> {
        if i >= self.lhs.len() || j >= self.rhs.len() {
            return Ok(0.);
        }
        let k = i * self.cols + j;
        if !self.known[k] {
            let cost = self.metric.distance(self.lhs[i], self.rhs[j]);
            if !cost.is_finite() || cost < 0. {
                return Err(Error::InvalidInput(format!(
                    "ground distance ({}, {}) is {}",
                    i, j, cost
                )));
            }
            self.cache[k] = cost;
            self.known[k] = true;
            self.peak = self.peak.max(cost);
            self.evaluations += 1;
        }
        Ok(self.cache[k])
    }
    /// Largest ground distance evaluated so far.
    pub fn peak(&self) -> Energy {
        self.peak
    }
    /// Number of calls made to the ground measure.
    pub fn evaluations(&self) -> usize {
        self.evaluations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn evaluates_each_cell_once() {
        let calls = Cell::new(0);
        let metric = |x: &f64, y: &f64| {
            calls.set(calls.get() + 1);
            (x - y).abs()
        };
        let xs = [0., 1.];
        let ys = [3.];
        let mut costs = Costs::new(&metric, xs.iter().collect(), ys.iter().collect(), 2, 1);
        assert_eq!(costs.get(1, 0).unwrap(), 2.);
        assert_eq!(costs.get(1, 0).unwrap(), 2.);
        assert_eq!(costs.get(0, 0).unwrap(), 3.);
        assert_eq!(calls.get(), 2);
        assert_eq!(costs.evaluations(), 2);
        assert_eq!(costs.peak(), 3.);
    }
    #[test]
    fn dummy_line_is_free() {
        let metric = |_: &f64, _: &f64| -> Energy { panic!("dummy cells never reach the metric") };
        let xs = [0.];
        let ys = [0.];
        let mut costs = Costs::new(&metric, xs.iter().collect(), ys.iter().collect(), 1, 2);
        assert_eq!(costs.get(0, 1).unwrap(), 0.);
    }
    #[test]
    fn negative_distance_is_rejected() {
        let metric = |_: &f64, _: &f64| -1.;
        let xs = [0.];
        let mut costs = Costs::new(&metric, xs.iter().collect(), xs.iter().collect(), 1, 1);
        assert!(matches!(costs.get(0, 0), Err(Error::InvalidInput(_))));
    }
    #[test]
    fn nan_distance_is_rejected() {
        let metric = |_: &f64, _: &f64| Energy::NAN;
        let xs = [0.];
        let mut costs = Costs::new(&metric, xs.iter().collect(), xs.iter().collect(), 1, 1);
        assert!(matches!(costs.get(0, 0), Err(Error::InvalidInput(_))));
    }
}
