//! Error types raised while validating field-evaluation inputs.

use thiserror::Error;

use crate::math::Scalar;

/// Top-level error type for the crate.
///
/// Every variant is a validation failure detected before a numeric result is
/// produced; nothing here is transient.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum FieldError {
    /// Width or thickness is non-positive (or not finite).
    #[error("invalid conductor geometry: width = {width:e} m, thickness = {thickness:e} m (both must be positive)")]
    InvalidGeometry {
        /// Conductor width in meters.
        width: Scalar,
        /// Conductor thickness in meters.
        thickness: Scalar,
    },
    /// Observation height lies on the bottom (`z = 0`) or top (`z = thickness`) face.
    #[error("degenerate observation plane: z = {height:e} m coincides with a conductor face (thickness = {thickness:e} m)")]
    DegenerateObservationPlane {
        /// Observation height in meters.
        height: Scalar,
        /// Conductor thickness in meters.
        thickness: Scalar,
    },
    /// A scalar parameter is NaN or infinite.
    #[error("non-finite input: {name} = {value}")]
    NonFiniteInput {
        /// Parameter name.
        name: &'static str,
        /// Offending value.
        value: Scalar,
    },
}
