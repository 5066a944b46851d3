//! Magnetostatic field models.

mod magnetic;
mod rectangular;

pub use magnetic::MagneticField;
pub use rectangular::{evaluate_field, evaluate_field_at, OerstedEvaluator, RectangularConductor};
