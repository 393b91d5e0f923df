//! The distance call contract.
//!
//! Callers hand over two [`Signature`]s (or any [`Density`](crate::Density)),
//! a ground [`Measure`](crate::Measure) and [`Settings`]; they get back a
//! [`Solution`] or an [`Error`].
mod error;
mod flow;
mod metric;
mod settings;
mod signature;
mod solution;
mod solve;

pub use error::*;
pub use flow::*;
pub use metric::*;
pub use settings::*;
pub use signature::*;
pub use solution::*;
pub use solve::*;

pub(crate) use signature::validate;
