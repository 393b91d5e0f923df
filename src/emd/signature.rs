use crate::Arbitrary;
use crate::Mass;
use crate::emd::Error;
use crate::transport::Density;
use serde::Deserialize;
use serde::Serialize;

/// An ordered sequence of (weight, feature) pairs.
///
/// Features are opaque to the solver and only ever compared through a
/// [`Measure`](crate::Measure). Weights need not sum to one; when two
/// signatures carry different total mass, the excess is left unmatched.
///
/// Serializes as a bare JSON array of `[weight, feature]` pairs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Signature<F> {
    points: Vec<(Mass, F)>,
}

impl<F> Signature<F> {
    pub fn len(&self) -> usize {
        self.points.len()
    }
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
    pub fn weight(&self, i: usize) -> Mass {
        self.points[i].0
    }
    pub fn feature(&self, i: usize) -> &F {
        &self.points[i].1
    }
    pub fn weights(&self) -> impl Iterator<Item = Mass> + '_ {
        self.points.iter().map(|(w, _)| *w)
    }
    pub fn features(&self) -> impl Iterator<Item = &F> {
        self.points.iter().map(|(_, f)| f)
    }
    /// Sum of all weights.
    pub fn mass(&self) -> Mass {
        self.weights().sum()
    }
    /// Rescales weights to sum to one. A massless signature is returned as is.
    pub fn normalize(mut self) -> Self {
        let mass = self.mass();
        if mass > 0. {
            self.points.iter_mut().for_each(|(w, _)| *w /= mass);
        }
        self
    }
    /// Checks the entry contract: non-empty, finite non-negative weights,
    /// positive total mass.
    pub fn validate(&self) -> Result<(), Error> {
        validate("signature", self.weights())
    }
}

/// Checks a stream of weights against the signature contract.
/// `side` names the offending signature in the error.
pub(crate) fn validate(side: &str, weights: impl Iterator<Item = Mass>) -> Result<(), Error> {
    let mut count = 0;
    let mut mass = 0.;
    for (i, w) in weights.enumerate() {
        if !w.is_finite() {
            return Err(Error::InvalidInput(format!("{} weight {} is not finite ({})", side, i, w)));
        }
        if w < 0. {
            return Err(Error::InvalidInput(format!("{} weight {} is negative ({})", side, i, w)));
        }
        count += 1;
        mass += w;
    }
    match (count, mass) {
        (0, _) => Err(Error::InvalidInput(format!("{} is empty", side))),
        (_, m) if m <= 0. => Err(Error::InvalidInput(format!("{} has no mass", side))),
        _ => Ok(()),
    }
}

impl<F> Density for Signature<F> {
    type Support = F;
    fn support(&self) -> impl Iterator<Item = (&Self::Support, Mass)> {
        self.points.iter().map(|(w, f)| (f, *w))
    }
}

impl<F> From<Vec<(Mass, F)>> for Signature<F> {
    fn from(points: Vec<(Mass, F)>) -> Self {
        Self { points }
    }
}

impl<F> FromIterator<(Mass, F)> for Signature<F> {
    fn from_iter<I: IntoIterator<Item = (Mass, F)>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

/// parallel weight and feature sequences, as the binding layers hand them over
impl<F> TryFrom<(Vec<Mass>, Vec<F>)> for Signature<F> {
    type Error = Error;
    fn try_from((weights, features): (Vec<Mass>, Vec<F>)) -> Result<Self, Self::Error> {
        match weights.len() == features.len() {
            true => Ok(weights.into_iter().zip(features).collect()),
            false => Err(Error::InvalidInput(format!(
                "{} weights for {} features",
                weights.len(),
                features.len()
            ))),
        }
    }
}

/// 1 to 8 unit-mass points in the unit square.
impl Arbitrary for Signature<Vec<f64>> {
    fn random() -> Self {
        use rand::Rng;
        let ref mut rng = rand::rng();
        let n = rng.random_range(1..=8);
        (0..n)
            .map(|_| {
                let w = rng.random_range(0.05..1.);
                let x = vec![rng.random::<f64>(), rng.random::<f64>()];
                (w, x)
            })
            .collect::<Self>()
            .normalize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_is_invalid() {
        let s = Signature::<f64>::from(vec![]);
        assert!(matches!(s.validate(), Err(Error::InvalidInput(_))));
    }
    #[test]
    fn negative_is_invalid() {
        let s = Signature::from(vec![(1., 0.), (-0.5, 1.)]);
        assert!(matches!(s.validate(), Err(Error::InvalidInput(_))));
    }
    #[test]
    fn nan_is_invalid() {
        let s = Signature::from(vec![(Mass::NAN, 0.)]);
        assert!(matches!(s.validate(), Err(Error::InvalidInput(_))));
    }
    #[test]
    fn massless_is_invalid() {
        let s = Signature::from(vec![(0., 0.), (0., 1.)]);
        assert!(matches!(s.validate(), Err(Error::InvalidInput(_))));
    }
    #[test]
    fn zero_weight_entries_are_valid() {
        let s = Signature::from(vec![(0., 0.), (1., 1.)]);
        assert!(s.validate().is_ok());
    }
    #[test]
    fn mismatched_parallel_sequences() {
        let s = Signature::try_from((vec![1., 2.], vec![0.]));
        assert!(matches!(s, Err(Error::InvalidInput(_))));
        let s = Signature::try_from((vec![1., 2.], vec![0., 5.])).unwrap();
        assert_eq!(s.feature(1), &5.);
        assert_eq!(s.weight(1), 2.);
    }
    #[test]
    fn random_is_normalized() {
        let s = Signature::<Vec<f64>>::random();
        assert!((s.mass() - 1.).abs() < 1e-12);
        assert!(s.validate().is_ok());
    }
    #[test]
    fn serializes_as_pairs() {
        let s = Signature::from(vec![(0.5, vec![1., 2.])]);
        let json = serde_json::to_string(&s).unwrap();
        assert_eq!(json, "[[0.5,[1.0,2.0]]]");
        let back = serde_json::from_str::<Signature<Vec<f64>>>(&json).unwrap();
        assert_eq!(back, s);
    }
}
