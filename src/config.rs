//! Parameter sets describing a field-profile computation.

use crate::errors::FieldError;
use crate::fields::{OerstedEvaluator, RectangularConductor};
use crate::math::Scalar;

/// Inputs of a lateral field profile across a rectangular conductor.
///
/// The default reproduces a 3 µm × 25 nm gold strip carrying 150 mA, observed
/// 90 nm above its bottom face, sampled at 1000 points.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfileConfig {
    /// Total current through the conductor (A).
    pub current: Scalar,
    /// Observation height above the bottom face (m).
    pub observation_height: Scalar,
    /// Conductor width (m).
    pub width: Scalar,
    /// Conductor thickness (m).
    pub thickness: Scalar,
    /// Number of evenly spaced positions spanning `[-width/2, width/2]`.
    pub samples: usize,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            current: 0.15,
            observation_height: 90e-9,
            width: 3e-6,
            thickness: 25e-9,
            samples: 1000,
        }
    }
}

impl ProfileConfig {
    /// Creates a configuration with the default sample count.
    #[must_use]
    pub fn new(current: Scalar, observation_height: Scalar, width: Scalar, thickness: Scalar) -> Self {
        Self {
            current,
            observation_height,
            width,
            thickness,
            ..Self::default()
        }
    }

    /// Overrides the number of samples.
    #[must_use]
    pub const fn with_samples(mut self, samples: usize) -> Self {
        self.samples = samples;
        self
    }

    /// Validates the parameters and builds the evaluator they describe.
    ///
    /// # Errors
    ///
    /// Any [`FieldError`] raised by [`RectangularConductor::new`] or [`OerstedEvaluator::new`].
    pub fn evaluator(&self) -> Result<OerstedEvaluator, FieldError> {
        let conductor = RectangularConductor::new(self.width, self.thickness)?;
        OerstedEvaluator::new(conductor, self.observation_height, self.current)
    }
}
