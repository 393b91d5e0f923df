use crate::Mass;
use std::collections::BTreeMap;
use std::collections::HashMap;

/// A finite weighted support: the mathematical content of a signature.
///
/// The solver addresses support points by the position at which
/// [`support`](Density::support) yields them, so implementations must iterate
/// in a stable order for the lifetime of a borrow.
///
/// # Implementations
///
/// - [`Signature<F>`](crate::Signature): ordered (weight, feature) pairs
/// - `BTreeMap<T, Mass>`: histogram in key order
/// - `HashMap<T, Mass>`: histogram in (stable, unspecified) hash order
pub trait Density {
    /// The type of points in the support.
    type Support;
    /// Iterates over every support point together with its weight.
    fn support(&self) -> impl Iterator<Item = (&Self::Support, Mass)>;
    /// Total weight across the support.
    fn total(&self) -> Mass {
        self.support().map(|(_, w)| w).sum()
    }
}

impl<T> Density for BTreeMap<T, Mass> {
    type Support = T;
    fn support(&self) -> impl Iterator<Item = (&Self::Support, Mass)> {
        self.iter().map(|(x, &w)| (x, w))
    }
}

impl<T> Density for HashMap<T, Mass> {
    type Support = T;
    fn support(&self) -> impl Iterator<Item = (&Self::Support, Mass)> {
        self.iter().map(|(x, &w)| (x, w))
    }
}
