//! Closed-form in-plane field of a rectangular conductor carrying uniform current.
//!
//! Coordinates: origin at the middle of the conductor's bottom face, `x` across
//! the width, `z` up through the thickness. The current flows along `y`, out of
//! the cross-section. For a width `w`, thickness `h`, current `I` and
//! observation height `z`, the in-plane component is
//!
//! ```text
//! B(x) = γ [ e(x + w/2) − e(x − w/2) ],     γ = μ₀ I / (4π w h)
//! e(s) = ½ s ln((s² + z²) / (s² + (h − z)²)) + z atan(s / z) − (h − z) atan(s / (h − z))
//! ```
//!
//! which is the Biot-Savart integral over the cross-section collapsed onto its
//! two vertical edges. `z` may lie inside the conductor (`0 < z < h`), above it
//! or below it, but never on the bottom or top face.

use log::{debug, trace};

use crate::constants::mu0_over_4pi;
use crate::errors::FieldError;
use crate::math::{Scalar, R3};

use super::magnetic::MagneticField;

/// Rectangular cross-section of a straight conductor, in meters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectangularConductor {
    width: Scalar,
    thickness: Scalar,
}

impl RectangularConductor {
    /// Validates and builds a cross-section.
    ///
    /// # Errors
    ///
    /// [`FieldError::InvalidGeometry`] unless both dimensions are finite and positive.
    pub fn new(width: Scalar, thickness: Scalar) -> Result<Self, FieldError> {
        let valid = |d: Scalar| d.is_finite() && d > 0.0;
        if !valid(width) || !valid(thickness) {
            return Err(FieldError::InvalidGeometry { width, thickness });
        }
        Ok(Self { width, thickness })
    }

    /// Full width (m).
    #[must_use]
    pub const fn width(&self) -> Scalar {
        self.width
    }

    /// Full thickness (m).
    #[must_use]
    pub const fn thickness(&self) -> Scalar {
        self.thickness
    }

    /// Half of the width; the conductor spans `[-half_width, half_width]`.
    #[must_use]
    pub fn half_width(&self) -> Scalar {
        0.5 * self.width
    }

    /// Cross-sectional area (m²).
    #[must_use]
    pub fn area(&self) -> Scalar {
        self.width * self.thickness
    }

    /// Uniform current density (A/m²) for a total current `current`.
    #[must_use]
    pub fn current_density(&self, current: Scalar) -> Scalar {
        current / self.area()
    }
}

/// Evaluates the in-plane Oersted field of one conductor at a fixed observation height.
///
/// All inputs are validated on construction, so evaluation never fails and
/// never yields NaN or infinity for finite positions. The evaluator is `Copy`
/// and holds no interior state; share it freely across threads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OerstedEvaluator {
    conductor: RectangularConductor,
    height: Scalar,
    current: Scalar,
    // μ₀ I / (4π w h)
    gamma: Scalar,
}

impl OerstedEvaluator {
    /// Binds a conductor, an observation height (m) and a current (A).
    ///
    /// # Errors
    ///
    /// - [`FieldError::NonFiniteInput`] if `observation_height` or `current` is NaN or infinite.
    /// - [`FieldError::DegenerateObservationPlane`] if `observation_height` is `0` or
    ///   equals the conductor thickness.
    pub fn new(
        conductor: RectangularConductor,
        observation_height: Scalar,
        current: Scalar,
    ) -> Result<Self, FieldError> {
        if !observation_height.is_finite() {
            return Err(FieldError::NonFiniteInput {
                name: "observation_height",
                value: observation_height,
            });
        }
        if !current.is_finite() {
            return Err(FieldError::NonFiniteInput { name: "current", value: current });
        }
        if observation_height == 0.0 || observation_height == conductor.thickness() {
            return Err(FieldError::DegenerateObservationPlane {
                height: observation_height,
                thickness: conductor.thickness(),
            });
        }

        let gamma = mu0_over_4pi() * conductor.current_density(current);
        debug!(
            "oersted evaluator: w = {:e} m, h = {:e} m, z = {:e} m, I = {:e} A, gamma = {:e}",
            conductor.width(),
            conductor.thickness(),
            observation_height,
            current,
            gamma
        );

        Ok(Self { conductor, height: observation_height, current, gamma })
    }

    /// Returns a copy of this evaluator carrying a different current.
    ///
    /// # Errors
    ///
    /// [`FieldError::NonFiniteInput`] if `current` is NaN or infinite.
    pub fn with_current(&self, current: Scalar) -> Result<Self, FieldError> {
        Self::new(self.conductor, self.height, current)
    }

    /// Conductor cross-section.
    #[must_use]
    pub const fn conductor(&self) -> &RectangularConductor {
        &self.conductor
    }

    /// Observation height above the bottom face (m).
    #[must_use]
    pub const fn observation_height(&self) -> Scalar {
        self.height
    }

    /// Total current (A).
    #[must_use]
    pub const fn current(&self) -> Scalar {
        self.current
    }

    /// In-plane field (T) at horizontal position `x` (m).
    #[must_use]
    pub fn field_at(&self, x: Scalar) -> Scalar {
        if self.current == 0.0 {
            return 0.0;
        }
        let half = self.conductor.half_width();
        self.gamma * (self.edge_term(x + half) - self.edge_term(x - half))
    }

    /// In-plane field (T) at each position, in input order.
    #[must_use]
    pub fn field_along(&self, positions: &[Scalar]) -> Vec<Scalar> {
        trace!("evaluating oersted field at {} positions", positions.len());
        positions.iter().map(|&x| self.field_at(x)).collect()
    }

    /// Parallel counterpart of [`Self::field_along`]; output is identical and in input order.
    #[cfg(feature = "parallel")]
    #[must_use]
    pub fn field_along_par(&self, positions: &[Scalar]) -> Vec<Scalar> {
        use rayon::prelude::*;

        trace!("evaluating oersted field at {} positions (parallel)", positions.len());
        positions.par_iter().map(|&x| self.field_at(x)).collect()
    }

    /// Field at `x` as a vector descriptor; the in-plane component points along ±x.
    #[must_use]
    pub fn field_vector_at(&self, x: Scalar) -> MagneticField {
        MagneticField::from_vector(R3::new(self.field_at(x), 0.0, 0.0))
    }

    // Contribution of the vertical edge at horizontal offset `s` from the observation point.
    fn edge_term(&self, s: Scalar) -> Scalar {
        let z = self.height;
        let z_top = self.conductor.thickness() - z;
        // ½ s ln((s² + z²)/(s² + z_top²))
        let log_term = s * (s.hypot(z) / s.hypot(z_top)).ln();
        log_term + z * (s / z).atan() - z_top * (s / z_top).atan()
    }
}

/// Evaluates the in-plane field (T) at every position in one call.
///
/// Arguments follow the order position(s), observation height, width,
/// thickness, current, all in SI units. The output has the length and order of
/// `positions`.
///
/// # Errors
///
/// See [`RectangularConductor::new`] and [`OerstedEvaluator::new`]. Inputs are
/// validated before any position is evaluated.
pub fn evaluate_field(
    positions: &[Scalar],
    observation_height: Scalar,
    width: Scalar,
    thickness: Scalar,
    current: Scalar,
) -> Result<Vec<Scalar>, FieldError> {
    let conductor = RectangularConductor::new(width, thickness)?;
    let evaluator = OerstedEvaluator::new(conductor, observation_height, current)?;
    Ok(evaluator.field_along(positions))
}

/// Scalar form of [`evaluate_field`].
///
/// # Errors
///
/// Same as [`evaluate_field`].
pub fn evaluate_field_at(
    x: Scalar,
    observation_height: Scalar,
    width: Scalar,
    thickness: Scalar,
    current: Scalar,
) -> Result<Scalar, FieldError> {
    let conductor = RectangularConductor::new(width, thickness)?;
    Ok(OerstedEvaluator::new(conductor, observation_height, current)?.field_at(x))
}
