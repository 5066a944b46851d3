//! Physical constants and unit scale factors.
//!
//! ## Accuracy
//!
//! The vacuum permeability is carried to five significant figures
//! (1.2566 × 10⁻⁶ H/m). Field profiles computed with this crate are pinned to
//! that value; the relative deviation from the CODATA 2018 value
//! (1.25663706212 × 10⁻⁶ H/m) is below 3 × 10⁻⁵, well inside the tolerance of
//! any thin-film geometry measurement the formula is fed with.
//!
//! ## References
//!
//! - NIST Reference on Constants, Units, and Uncertainty: <https://physics.nist.gov/cuu/Constants/>

use std::f64::consts::PI;

use crate::math::Scalar;

/// Vacuum permeability μ₀ in henries per meter (H/m).
pub const VACUUM_PERMEABILITY: Scalar = 1.2566e-6;

/// Multiply a value in tesla by this factor to obtain millitesla.
pub const TESLA_TO_MILLITESLA: Scalar = 1.0e3;

/// Returns μ₀ / 4π, the Biot-Savart prefactor in T·m/A.
#[inline]
#[must_use]
pub fn mu0_over_4pi() -> Scalar {
    VACUUM_PERMEABILITY / (4.0 * PI)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn mu0_over_4pi_is_close_to_1e_minus_7() {
        assert_relative_eq!(mu0_over_4pi(), 1.0e-7, max_relative = 1.0e-4);
    }
}
