use crate::Energy;

/// Ground distance between a source point and a target point.
///
/// Defines the cost of transporting one unit of mass from `x` to `y`. The
/// solver requires it to be deterministic, free of side effects, finite and
/// non-negative; it may be evaluated lazily and at most once per pair.
///
/// `X` and `Y` are often the same type, but heterogeneous problems (e.g.
/// pixels against palette entries) are supported.
///
/// # Implementations
///
/// - any `Fn(&X, &Y) -> Energy` closure
/// - [`Euclidean`](crate::Euclidean), [`Manhattan`](crate::Manhattan),
///   [`Chebyshev`](crate::Chebyshev) over `f64` and `Vec<f64>`
pub trait Measure<X, Y = X> {
    /// Returns the cost of transporting one unit of mass from `x` to `y`.
    fn distance(&self, x: &X, y: &Y) -> Energy;
}

impl<X, Y, F> Measure<X, Y> for F
where
    F: Fn(&X, &Y) -> Energy,
{
    fn distance(&self, x: &X, y: &Y) -> Energy {
        self(x, y)
    }
}
