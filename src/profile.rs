//! Lateral field profiles: the field sampled on an even grid across the conductor width.

use log::debug;

use crate::config::ProfileConfig;
use crate::constants::TESLA_TO_MILLITESLA;
use crate::errors::FieldError;
use crate::fields::OerstedEvaluator;
use crate::math::{linspace, Scalar};

/// Sampled in-plane field along `x`, in SI units.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldProfile {
    /// Horizontal positions (m), ascending.
    pub positions: Vec<Scalar>,
    /// In-plane field (T) at each position.
    pub field: Vec<Scalar>,
}

impl FieldProfile {
    /// Samples `evaluator` at `samples` evenly spaced points across the conductor width.
    #[must_use]
    pub fn across_width(evaluator: &OerstedEvaluator, samples: usize) -> Self {
        let half = evaluator.conductor().half_width();
        Self::sample(evaluator, linspace(-half, half, samples))
    }

    /// Samples `evaluator` at caller-supplied positions, keeping their order.
    #[must_use]
    pub fn sample(evaluator: &OerstedEvaluator, positions: Vec<Scalar>) -> Self {
        let field = evaluator.field_along(&positions);
        Self { positions, field }
    }

    /// Parallel counterpart of [`Self::sample`].
    #[cfg(feature = "parallel")]
    #[must_use]
    pub fn sample_par(evaluator: &OerstedEvaluator, positions: Vec<Scalar>) -> Self {
        let field = evaluator.field_along_par(&positions);
        Self { positions, field }
    }

    /// Validates `config` and samples the profile it describes.
    ///
    /// # Errors
    ///
    /// Any [`FieldError`] raised while validating the configuration.
    pub fn from_config(config: &ProfileConfig) -> Result<Self, FieldError> {
        let evaluator = config.evaluator()?;
        let profile = Self::across_width(&evaluator, config.samples);
        if let Some((x, b)) = profile.peak() {
            debug!(
                "profile: {} samples, peak |B| = {:.6e} T at x = {:.6e} m",
                profile.len(),
                b.abs(),
                x
            );
        }
        Ok(profile)
    }

    /// Total samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// True if no samples recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Iterates over `(x, B)` pairs.
    pub fn samples(&self) -> impl Iterator<Item = (Scalar, Scalar)> + '_ {
        self.positions.iter().copied().zip(self.field.iter().copied())
    }

    /// Field values multiplied by `factor`, e.g. [`TESLA_TO_MILLITESLA`].
    #[must_use]
    pub fn scaled(&self, factor: Scalar) -> Vec<Scalar> {
        self.field.iter().map(|b| b * factor).collect()
    }

    /// Field values in millitesla.
    #[must_use]
    pub fn millitesla(&self) -> Vec<Scalar> {
        self.scaled(TESLA_TO_MILLITESLA)
    }

    /// Sample with the largest field magnitude; the first one wins ties.
    #[must_use]
    pub fn peak(&self) -> Option<(Scalar, Scalar)> {
        self.samples()
            .fold(None, |best: Option<(Scalar, Scalar)>, (x, b)| match best {
                Some((_, best_b)) if best_b.abs() >= b.abs() => best,
                _ => Some((x, b)),
            })
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn default_profile_spans_the_width() {
        let profile = FieldProfile::from_config(&ProfileConfig::default()).unwrap();
        assert_eq!(profile.len(), 1000);
        assert_eq!(profile.field.len(), 1000);
        assert_eq!(profile.positions[0], -1.5e-6);
        assert_eq!(profile.positions[999], 1.5e-6);
        assert!(profile.positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn peak_sits_next_to_the_centerline() {
        let profile = FieldProfile::from_config(&ProfileConfig::default()).unwrap();
        let (x, b) = profile.peak().unwrap();
        let spacing = profile.positions[1] - profile.positions[0];
        assert!(x.abs() < spacing);
        assert_relative_eq!(b, 1.519_132e-2, max_relative = 1.0e-4);
    }

    #[test]
    fn millitesla_scales_by_one_thousand() {
        let config = ProfileConfig::default().with_samples(5);
        let profile = FieldProfile::from_config(&config).unwrap();
        for (mt, t) in profile.millitesla().iter().zip(&profile.field) {
            assert_relative_eq!(*mt, 1.0e3 * t, max_relative = 1.0e-15);
        }
        assert_relative_eq!(profile.millitesla()[2], 15.191_32, max_relative = 1.0e-6);
    }

    #[test]
    fn sample_keeps_caller_order() {
        let eval = ProfileConfig::default().evaluator().unwrap();
        let xs = vec![3.0e-7, -1.0e-6, 0.0];
        let profile = FieldProfile::sample(&eval, xs.clone());
        let pairs: Vec<_> = profile.samples().collect();
        assert_eq!(pairs.len(), 3);
        for ((x, b), expected_x) in pairs.into_iter().zip(xs) {
            assert_eq!(x, expected_x);
            assert_eq!(b, eval.field_at(expected_x));
        }
    }

    #[test]
    fn empty_profile_has_no_peak() {
        let config = ProfileConfig::default().with_samples(0);
        let profile = FieldProfile::from_config(&config).unwrap();
        assert!(profile.is_empty());
        assert!(profile.peak().is_none());
    }

    #[test]
    fn invalid_config_yields_no_profile() {
        let config = ProfileConfig { observation_height: 0.0, ..ProfileConfig::default() };
        assert!(FieldProfile::from_config(&config).is_err());
    }
}
