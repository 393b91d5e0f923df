use crate::Energy;
use crate::transport::Measure;

/// L2 distance. On scalars this is `|x - y|`.
#[derive(Debug, Default, Clone, Copy)]
pub struct Euclidean;

/// L1 distance. On scalars this is `|x - y|`.
#[derive(Debug, Default, Clone, Copy)]
pub struct Manhattan;

/// L∞ distance. On scalars this is `|x - y|`.
#[derive(Debug, Default, Clone, Copy)]
pub struct Chebyshev;

/// coordinates beyond the shorter vector are compared against zero
fn deltas<'a>(x: &'a [f64], y: &'a [f64]) -> impl Iterator<Item = Energy> + 'a {
    (0..x.len().max(y.len())).map(move |i| {
        let a = x.get(i).copied().unwrap_or(0.);
        let b = y.get(i).copied().unwrap_or(0.);
        (a - b).abs()
    })
}

impl Measure<f64> for Euclidean {
    fn distance(&self, x: &f64, y: &f64) -> Energy {
        (x - y).abs()
    }
}
impl Measure<Vec<f64>> for Euclidean {
    fn distance(&self, x: &Vec<f64>, y: &Vec<f64>) -> Energy {
        deltas(x, y).map(|d| d * d).sum::<Energy>().sqrt()
    }
}

impl Measure<f64> for Manhattan {
    fn distance(&self, x: &f64, y: &f64) -> Energy {
        (x - y).abs()
    }
}
impl Measure<Vec<f64>> for Manhattan {
    fn distance(&self, x: &Vec<f64>, y: &Vec<f64>) -> Energy {
        deltas(x, y).sum()
    }
}

impl Measure<f64> for Chebyshev {
    fn distance(&self, x: &f64, y: &f64) -> Energy {
        (x - y).abs()
    }
}
impl Measure<Vec<f64>> for Chebyshev {
    fn distance(&self, x: &Vec<f64>, y: &Vec<f64>) -> Energy {
        deltas(x, y).fold(0., Energy::max)
    }
}
