//! The parametric highway path all spatial layout derives from.

mod spline;

pub use spline::{Spline, binormal};
