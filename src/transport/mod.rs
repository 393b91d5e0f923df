//! Abstractions shared by every transport plan in this crate.
//!
//! ## Core Types
//!
//! - [`Density`]: A weighted support (a signature or histogram)
//! - [`Measure`]: Ground distance between two support points
//! - [`Coupling`]: A transport plan between two densities
//!
//! The solver only ever sees support points through a [`Measure`]; it never
//! inspects their structure.
mod coupling;
mod density;
mod measure;

pub use coupling::*;
pub use density::*;
pub use measure::*;
