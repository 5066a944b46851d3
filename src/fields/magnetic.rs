use crate::math::{R3, Scalar};

/// Magnetic field descriptor expressed in tesla (T).
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MagneticField {
    /// Magnetic flux density magnitude (T).
    pub magnitude: Scalar,
    /// Unit direction vector; zero when the field vanishes.
    pub direction: R3,
}

impl MagneticField {
    /// Constructs a magnetic field from a vector representation.
    #[must_use]
    pub fn from_vector(vector: R3) -> Self {
        let magnitude = vector.norm();
        let direction = if magnitude == 0.0 {
            R3::zeros()
        } else {
            vector / magnitude
        };

        Self {
            magnitude,
            direction,
        }
    }

    /// Recombines magnitude and direction into the field vector.
    #[must_use]
    pub fn to_vector(&self) -> R3 {
        self.direction * self.magnitude
    }

    /// Signed projection of the field onto `axis` (not necessarily normalized).
    #[must_use]
    pub fn component_along(&self, axis: &R3) -> Scalar {
        let norm = axis.norm();
        if norm == 0.0 {
            return 0.0;
        }
        self.to_vector().dot(axis) / norm
    }
}
