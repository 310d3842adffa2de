//! Uniform directions on unit spheres.

use super::continuous::standard_normal;
use crate::error::{Error, Result};
use crate::random::RandomSource;

/// Uniform point on the unit 2-sphere as `[x, y, z]`.
///
/// # Algorithm
/// Marsaglia (1972): draw `(x₁, x₂)` uniformly in the unit disk by
/// rejection, then map with `s = x₁² + x₂²` to
/// `(2x₁√(1−s), 2x₂√(1−s), 1 − 2s)`.
///
/// Reference: Marsaglia (1972), "Choosing a Point from the Surface of a
/// Sphere", *Annals of Mathematical Statistics* 43(2).
pub fn unit_sphere_point<R: RandomSource + ?Sized>(rng: &mut R) -> [f64; 3] {
    loop {
        let x1 = 2.0 * rng.draw_f64() - 1.0;
        let x2 = 2.0 * rng.draw_f64() - 1.0;
        let s = x1 * x1 + x2 * x2;
        if s < 1.0 {
            let r = 2.0 * (1.0 - s).sqrt();
            return [x1 * r, x2 * r, 1.0 - 2.0 * s];
        }
    }
}

/// Uniform point on the unit sphere in `dim` dimensions.
///
/// Normalises a vector of independent standard normal coordinates.
///
/// # Errors
/// Returns [`Error::InvalidArgument`] if `dim == 0`.
pub fn unit_hypersphere_point<R: RandomSource + ?Sized>(
    rng: &mut R,
    dim: usize,
) -> Result<Vec<f64>> {
    if dim == 0 {
        return Err(Error::invalid_argument("dim", "dimension must be at least 1"));
    }
    let mut coords = vec![0.0; dim];
    loop {
        for c in coords.iter_mut() {
            *c = standard_normal(rng);
        }
        let norm = coords.iter().map(|c| c * c).sum::<f64>().sqrt();
        if norm > 0.0 {
            for c in coords.iter_mut() {
                *c /= norm;
            }
            return Ok(coords);
        }
    }
}
