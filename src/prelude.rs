//! Convenience re-exports for computing Oersted field profiles.

pub use crate::config::ProfileConfig;
pub use crate::constants::*;
pub use crate::errors::FieldError;
pub use crate::fields::{
    evaluate_field, evaluate_field_at, MagneticField, OerstedEvaluator, RectangularConductor,
};
pub use crate::io::{write_profile_csv, write_profile_csv_scaled};
pub use crate::math::{linspace, Scalar, R3};
pub use crate::profile::FieldProfile;
