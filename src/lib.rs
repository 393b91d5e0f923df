//! Exact Earth Mover's Distance between weighted signatures.
//!
//! A signature is a finite set of (weight, feature) pairs. The distance
//! between two signatures is the minimum total work needed to turn one into
//! the other, where moving one unit of weight from feature `x` to feature `y`
//! costs `distance(x, y)` under a caller-supplied ground [`Measure`].
//!
//! ## Modules
//!
//! - [`transport`]: seams for [`Density`], [`Measure`], [`Coupling`]
//! - [`simplex`]: the transportation simplex solver
//! - [`emd`]: call contract for [`Signature`], [`Settings`], [`Solution`], [`emd()`]
//!
//! ## Unequal mass
//!
//! Total weights need not match. Excess mass on the heavier side is routed
//! to a zero-cost dummy line, is not charged, and does not count toward the
//! normalizing denominator.
//!
//! ```rust
//! use earthmover::*;
//!
//! let p = Signature::from(vec![(0.5, 0.0), (0.5, 1.0)]);
//! let q = Signature::from(vec![(1.0, 0.0)]);
//! let d = distance(&p, &q, &Euclidean).unwrap();
//! assert!((d - 0.5).abs() < 1e-12);
//! ```
pub mod emd;
pub mod simplex;
pub mod transport;

pub use emd::*;
pub use transport::*;

#[cfg(test)]
mod tests;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Ground distances, reduced costs, dual potentials and total work.
pub type Energy = f64;
/// Signature weights and transported flow.
pub type Mass = f64;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and benchmarking.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// TRANSPORTATION SIMPLEX
// Primal simplex over a spanning tree of basic cells.
// ============================================================================
/// Relative tolerance for optimality and balance checks.
/// Scaled by the largest ground distance seen (reduced costs) or total mass (balance).
pub const SIMPLEX_TOLERANCE: Energy = 1e-9;
/// Floor on the pivot budget when no explicit cap is configured.
pub const SIMPLEX_ITERATIONS: usize = 500;
/// Pivot budget per cell of the (balanced) cost matrix when no explicit cap is configured.
pub const SIMPLEX_ITERATIONS_PER_CELL: usize = 4;
/// Consecutive degenerate pivots tolerated before switching to Bland's rule.
pub const SIMPLEX_DEGENERATE_STREAK: usize = 32;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize terminal logging at the given level.
/// Location, target and thread columns are suppressed.
#[cfg(feature = "cli")]
pub fn log(level: log::LevelFilter) {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let term = simplelog::TermLogger::new(
        level,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    );
    // a logger installed by the host process wins
    let _ = simplelog::CombinedLogger::init(vec![term]);
}
