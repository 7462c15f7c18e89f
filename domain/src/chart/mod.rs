//! Chart domain: what can be drawn and which parameters are valid.
//!
//! - [`spec::ChartSpec`]: a parameterised chart request
//! - [`spec::ChartKind`]: chart family (file stem and label)
//! - [`error::ChartError`]: validation failures

pub mod error;
pub mod spec;

pub use error::ChartError;
pub use spec::{ChartKind, ChartSpec, CostCurves, Equilibrium, LinearCurve};
