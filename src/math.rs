//! Shared numerical primitives anchored on `nalgebra`.

use nalgebra::Vector3;

/// Primary scalar type used across the crate.
pub type Scalar = f64;
/// Convenient alias for three-dimensional real vectors.
pub type R3 = Vector3<Scalar>;

/// Generates `n` linearly spaced samples in [start, stop].
///
/// Both end points are included. The last sample is pinned to `stop` so the
/// grid is exact at the conductor edges regardless of rounding in `step`.
#[must_use]
pub fn linspace(start: Scalar, stop: Scalar, n: usize) -> Vec<Scalar> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n as Scalar - 1.0);
            (0..n)
                .map(|i| if i == n - 1 { stop } else { start + step * i as Scalar })
                .collect()
        }
    }
}
