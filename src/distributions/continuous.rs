//! Continuous samplers.
//!
//! Each sampler validates its parameters before consuming any entropy and
//! returns [`Error::InvalidParameters`] on failure. Rejection samplers loop
//! until acceptance; acceptance probabilities are high for every valid
//! parameterisation, so no iteration cap is imposed.

use std::f64::consts::E;

use super::{open_unit, DistributionKind};
use crate::error::{Error, Result};
use crate::random::RandomSource;

fn ensure(kind: DistributionKind, ok: bool, reason: impl FnOnce() -> String) -> Result<()> {
    if ok {
        Ok(())
    } else {
        Err(Error::invalid_parameters(kind, reason()))
    }
}

fn ensure_finite(kind: DistributionKind, params: &[f64]) -> Result<()> {
    ensure(kind, params.iter().all(|p| p.is_finite()), || {
        format!("parameters must be finite, got {params:?}")
    })
}

// ============================================================================
// Validation
// ============================================================================

pub(crate) fn check_uniform(min: f64, max: f64) -> Result<()> {
    let kind = DistributionKind::Uniform;
    ensure_finite(kind, &[min, max])?;
    ensure(kind, min < max, || {
        format!("requires min < max, got min={min}, max={max}")
    })
}

pub(crate) fn check_exponential(loc: f64, scale: f64) -> Result<()> {
    let kind = DistributionKind::Exponential;
    ensure_finite(kind, &[loc, scale])?;
    ensure(kind, scale > 0.0, || format!("scale must be > 0, got {scale}"))
}

pub(crate) fn check_normal(mean: f64, sd: f64) -> Result<()> {
    let kind = DistributionKind::Normal;
    ensure_finite(kind, &[mean, sd])?;
    ensure(kind, sd > 0.0, || format!("sd must be > 0, got {sd}"))
}

pub(crate) fn check_log_normal(loc: f64, mean: f64, var: f64) -> Result<()> {
    let kind = DistributionKind::LogNormal;
    ensure_finite(kind, &[loc, mean, var])?;
    ensure(kind, mean > 0.0, || format!("mean must be > 0, got {mean}"))?;
    ensure(kind, var > 0.0, || format!("var must be > 0, got {var}"))
}

pub(crate) fn check_gamma(loc: f64, scale: f64, shape: f64) -> Result<()> {
    let kind = DistributionKind::Gamma;
    ensure_finite(kind, &[loc, scale, shape])?;
    ensure(kind, scale > 0.0, || format!("scale must be > 0, got {scale}"))?;
    ensure(kind, shape > 0.0, || format!("shape must be > 0, got {shape}"))
}

pub(crate) fn check_weibull(loc: f64, scale: f64, shape: f64) -> Result<()> {
    let kind = DistributionKind::Weibull;
    ensure_finite(kind, &[loc, scale, shape])?;
    ensure(kind, scale > 0.0, || format!("scale must be > 0, got {scale}"))?;
    ensure(kind, shape > 0.0, || format!("shape must be > 0, got {shape}"))
}

pub(crate) fn check_beta(v: f64, w: f64, min: f64, max: f64) -> Result<()> {
    let kind = DistributionKind::Beta;
    ensure_finite(kind, &[v, w, min, max])?;
    ensure(kind, v > 0.0 && w > 0.0, || {
        format!("shapes must be > 0, got v={v}, w={w}")
    })?;
    ensure(kind, min < max, || {
        format!("requires min < max, got min={min}, max={max}")
    })
}

pub(crate) fn check_inv_normal(loc: f64, mean: f64, shape: f64) -> Result<()> {
    let kind = DistributionKind::InvNormal;
    ensure_finite(kind, &[loc, mean, shape])?;
    ensure(kind, mean > 0.0, || format!("mean must be > 0, got {mean}"))?;
    ensure(kind, shape > 0.0, || format!("shape must be > 0, got {shape}"))
}

pub(crate) fn check_triangular(mode: f64, min: f64, max: f64) -> Result<()> {
    let kind = DistributionKind::Triangular;
    ensure_finite(kind, &[mode, min, max])?;
    ensure(kind, min < max && min <= mode && mode <= max, || {
        format!("requires min ≤ mode ≤ max and min < max, got mode={mode}, min={min}, max={max}")
    })
}

// ============================================================================
// Uniform / Exponential
// ============================================================================

/// Uniform deviate on `[min, max)`: `min + u·(max − min)`.
///
/// # Errors
/// Fails unless `min < max` and both are finite.
///
/// # Examples
/// ```
/// use u_stochastic::distributions::uniform;
/// use u_stochastic::random::MersenneTwister;
///
/// let mut rng = MersenneTwister::with_seed(1);
/// let x = uniform(&mut rng, 2.0, 5.0).unwrap();
/// assert!((2.0..5.0).contains(&x));
/// assert!(uniform(&mut rng, 5.0, 5.0).is_err());
/// ```
pub fn uniform<R: RandomSource + ?Sized>(rng: &mut R, min: f64, max: f64) -> Result<f64> {
    check_uniform(min, max)?;
    Ok(min + rng.draw_f64() * (max - min))
}

/// Exponential deviate by inverse CDF: `loc − scale·ln(u)`.
///
/// `u` is drawn from the open interval (0, 1), so the result is finite
/// and never below `loc`.
pub fn exponential<R: RandomSource + ?Sized>(rng: &mut R, loc: f64, scale: f64) -> Result<f64> {
    check_exponential(loc, scale)?;
    Ok(loc - scale * open_unit(rng).ln())
}

/// Exponential deviate with location 0.
pub fn exponential_with_scale<R: RandomSource + ?Sized>(rng: &mut R, scale: f64) -> Result<f64> {
    exponential(rng, 0.0, scale)
}

// ============================================================================
// Normal family
// ============================================================================

/// Standard normal deviate by the Marsaglia polar method.
///
/// Draws `(v1, v2)` uniformly on `[−1, 1]²` until `0 < s < 1` with
/// `s = v1² + v2²`, then returns `v1·√(−2·ln(s)/s)`. The second deviate
/// of the pair is discarded so that the engine is the only state.
///
/// Reference: Marsaglia & Bray (1964), "A Convenient Method for Generating
/// Normal Variables", *SIAM Review* 6(3).
pub fn standard_normal<R: RandomSource + ?Sized>(rng: &mut R) -> f64 {
    loop {
        let v1 = 2.0 * rng.draw_f64() - 1.0;
        let v2 = 2.0 * rng.draw_f64() - 1.0;
        let s = v1 * v1 + v2 * v2;
        if s > 0.0 && s < 1.0 {
            return v1 * (-2.0 * s.ln() / s).sqrt();
        }
    }
}

/// Normal deviate N(mean, sd²).
///
/// # Errors
/// Fails if `sd ≤ 0`.
pub fn normal<R: RandomSource + ?Sized>(rng: &mut R, mean: f64, sd: f64) -> Result<f64> {
    check_normal(mean, sd)?;
    Ok(mean + sd * standard_normal(rng))
}

/// Log-normal deviate shifted by `loc`, parameterised by the mean and
/// spread of the log-normal variable itself.
///
/// The underlying normal parameters are
/// ```text
/// μ = ln(mean² / √(var² + mean²))
/// σ = √ln((var² + mean²) / mean²)
/// ```
/// so the unshifted variable has expectation `mean` and standard
/// deviation `var`.
///
/// # Errors
/// Fails unless `mean > 0` and `var > 0`.
pub fn log_normal<R: RandomSource + ?Sized>(
    rng: &mut R,
    loc: f64,
    mean: f64,
    var: f64,
) -> Result<f64> {
    check_log_normal(loc, mean, var)?;
    let mean2 = mean * mean;
    let spread = var * var + mean2;
    let mu = (mean2 / spread.sqrt()).ln();
    let sigma = (spread / mean2).ln().sqrt();
    Ok(loc + (mu + sigma * standard_normal(rng)).exp())
}

/// Inverse Gaussian (Wald) deviate shifted by `loc`.
///
/// # Algorithm
/// Michael, Schucany & Haas (1976): transform a squared standard normal
/// draw `y` into the smaller root `x` of the defining quadratic, then pick
/// `x` with probability `μ/(μ+x)`, otherwise `μ²/x`. The roots multiply to
/// `μ²`, so `x` comes from the larger root
/// ```text
/// x = μ² / (μ + μ²y/(2λ) + (μ/(2λ))·√(4μλy + μ²y²))
/// ```
/// which stays positive when `μ/λ` is large.
///
/// # Errors
/// Fails unless `mean > 0` and `shape > 0`.
pub fn inv_normal<R: RandomSource + ?Sized>(
    rng: &mut R,
    loc: f64,
    mean: f64,
    shape: f64,
) -> Result<f64> {
    check_inv_normal(loc, mean, shape)?;
    let nu = standard_normal(rng);
    let y = nu * nu;
    let mu2 = mean * mean;
    let half_ratio = mean / (2.0 * shape);
    let x_big = mean + half_ratio * mean * y
        + half_ratio * (4.0 * mean * shape * y + mu2 * y * y).sqrt();
    let x = mu2 / x_big;
    let z = rng.draw_f64();
    if z <= mean / (mean + x) {
        Ok(loc + x)
    } else {
        Ok(loc + mu2 / x)
    }
}

// ============================================================================
// Gamma / Beta
// ============================================================================

/// Gamma deviate: `loc + scale·G` with `G ~ Gamma(shape, 1)`.
///
/// # Algorithm
/// - `shape == 1`: exponential.
/// - `shape < 1`: Ahrens & Dieter (1974) algorithm GS.
/// - `shape > 1`: Cheng (1977) algorithm GB.
///
/// # Errors
/// Fails unless `scale > 0` and `shape > 0`.
///
/// # Examples
/// ```
/// use u_stochastic::distributions::gamma;
/// use u_stochastic::random::MersenneTwister;
///
/// let mut rng = MersenneTwister::with_seed(3);
/// let x = gamma(&mut rng, 1.0, 2.0, 3.5).unwrap();
/// assert!(x >= 1.0);
/// ```
pub fn gamma<R: RandomSource + ?Sized>(
    rng: &mut R,
    loc: f64,
    scale: f64,
    shape: f64,
) -> Result<f64> {
    check_gamma(loc, scale, shape)?;
    Ok(loc + scale * standard_gamma_unchecked(rng, shape))
}

/// Gamma deviate with location 0 and scale 1.
pub fn standard_gamma<R: RandomSource + ?Sized>(rng: &mut R, shape: f64) -> Result<f64> {
    gamma(rng, 0.0, 1.0, shape)
}

pub(crate) fn standard_gamma_unchecked<R: RandomSource + ?Sized>(rng: &mut R, shape: f64) -> f64 {
    if shape == 1.0 {
        -open_unit(rng).ln()
    } else if shape < 1.0 {
        gamma_ahrens_dieter(rng, shape)
    } else {
        gamma_cheng(rng, shape)
    }
}

/// GS rejection for `0 < a < 1`, mixing a power envelope on `[0, 1]` with
/// an exponential tail beyond 1.
fn gamma_ahrens_dieter<R: RandomSource + ?Sized>(rng: &mut R, a: f64) -> f64 {
    let b = (E + a) / E;
    loop {
        let p = b * rng.draw_f64();
        let u = rng.draw_f64();
        if p <= 1.0 {
            let x = p.powf(a.recip());
            if u <= (-x).exp() {
                return x;
            }
        } else {
            let x = -((b - p) / a).ln();
            if u <= x.powf(a - 1.0) {
                return x;
            }
        }
    }
}

/// GB ratio-of-uniforms rejection for `a > 1`.
fn gamma_cheng<R: RandomSource + ?Sized>(rng: &mut R, a: f64) -> f64 {
    const EPS: f64 = 1e-7;
    const T: f64 = 4.5;
    let inv_a = (2.0 * a - 1.0).sqrt().recip();
    let b = a - 4.0_f64.ln();
    let q = a + inv_a.recip();
    let d = 1.0 + T.ln();
    loop {
        let u1 = rng.draw_f64();
        if !(EPS..1.0 - EPS).contains(&u1) {
            continue;
        }
        let u2 = 1.0 - rng.draw_f64();
        let v = inv_a * (u1 / (1.0 - u1)).ln();
        let y = a * v.exp();
        let z = u1 * u1 * u2;
        let w = b + q * v - y;
        if w + d - T * z >= 0.0 || w >= z.ln() {
            return y;
        }
    }
}

/// Beta(v, w) deviate scaled onto `[min, max]`.
///
/// When `v < w` the shapes are swapped and the result reflected,
/// `max − (max − min)·Beta(w, v)`; otherwise two standard gamma draws give
/// `min + (max − min)·y₁/(y₁ + y₂)`.
///
/// # Errors
/// Fails unless `v > 0`, `w > 0` and `min < max`.
pub fn beta<R: RandomSource + ?Sized>(
    rng: &mut R,
    v: f64,
    w: f64,
    min: f64,
    max: f64,
) -> Result<f64> {
    check_beta(v, w, min, max)?;
    let span = max - min;
    if v < w {
        Ok(max - span * unit_beta(rng, w, v))
    } else {
        Ok(min + span * unit_beta(rng, v, w))
    }
}

/// Beta(v, w) deviate on `[0, 1]`.
pub fn standard_beta<R: RandomSource + ?Sized>(rng: &mut R, v: f64, w: f64) -> Result<f64> {
    beta(rng, v, w, 0.0, 1.0)
}

fn unit_beta<R: RandomSource + ?Sized>(rng: &mut R, v: f64, w: f64) -> f64 {
    loop {
        let y1 = standard_gamma_unchecked(rng, v);
        let y2 = standard_gamma_unchecked(rng, w);
        // both draws can underflow to zero for tiny shapes
        let total = y1 + y2;
        if total > 0.0 {
            return y1 / total;
        }
    }
}

// ============================================================================
// Weibull / Triangular
// ============================================================================

/// Weibull deviate by inverse CDF: `loc + scale·(−ln(1 − u))^(1/shape)`.
///
/// # Errors
/// Fails unless `scale > 0` and `shape > 0`.
pub fn weibull<R: RandomSource + ?Sized>(
    rng: &mut R,
    loc: f64,
    scale: f64,
    shape: f64,
) -> Result<f64> {
    check_weibull(loc, scale, shape)?;
    let u = rng.draw_f64();
    Ok(loc + scale * (-(1.0 - u).ln()).powf(shape.recip()))
}

/// Triangular deviate by inverse CDF.
///
/// ```text
/// F⁻¹(p) = min + √((max−min)(mode−min)·p)        if p < (mode−min)/(max−min)
///        = max − √((max−min)(max−mode)·(1−p))    otherwise
/// ```
///
/// # Errors
/// Fails unless `min < max` and `min ≤ mode ≤ max`.
pub fn triangular<R: RandomSource + ?Sized>(
    rng: &mut R,
    mode: f64,
    min: f64,
    max: f64,
) -> Result<f64> {
    check_triangular(mode, min, max)?;
    let p = rng.draw_f64();
    let range = max - min;
    let fc = (mode - min) / range; // CDF at the mode
    if p < fc {
        Ok(min + (range * (mode - min) * p).sqrt())
    } else {
        Ok(max - (range * (max - mode) * (1.0 - p)).sqrt())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::MersenneTwister;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    const DRAWS: usize = 100_000;

    fn mean_of(n: usize, mut draw: impl FnMut() -> f64) -> f64 {
        (0..n).map(|_| draw()).sum::<f64>() / n as f64
    }

    // --- Uniform ---

    #[test]
    fn test_uniform_range_and_mean() {
        let mut rng = MersenneTwister::with_seed(1);
        let m = mean_of(DRAWS, || {
            let x = uniform(&mut rng, -2.0, 6.0).unwrap();
            assert!((-2.0..6.0).contains(&x));
            x
        });
        assert_abs_diff_eq!(m, 2.0, epsilon = 0.05);
    }

    #[test]
    fn test_uniform_invalid() {
        let mut rng = MersenneTwister::with_seed(1);
        assert!(uniform(&mut rng, 1.0, 1.0).is_err());
        assert!(uniform(&mut rng, 2.0, 1.0).is_err());
        assert!(uniform(&mut rng, f64::NAN, 1.0).is_err());
    }

    #[test]
    fn test_invalid_parameters_consume_no_entropy() {
        let mut rng = MersenneTwister::with_seed(5);
        let mut probe = rng.clone();
        assert!(normal(&mut rng, 0.0, -1.0).is_err());
        assert_eq!(rng.draw_u32(), probe.draw_u32());
    }

    // --- Exponential ---

    #[test]
    fn test_exponential_mean_and_support() {
        let mut rng = MersenneTwister::with_seed(2);
        let m = mean_of(DRAWS, || {
            let x = exponential_with_scale(&mut rng, 2.0).unwrap();
            assert!(x >= 0.0 && x.is_finite());
            x
        });
        assert_relative_eq!(m, 2.0, max_relative = 0.03);
    }

    #[test]
    fn test_exponential_location_shift() {
        let mut rng = MersenneTwister::with_seed(2);
        for _ in 0..1000 {
            assert!(exponential(&mut rng, 10.0, 0.5).unwrap() >= 10.0);
        }
    }

    #[test]
    fn test_exponential_invalid() {
        let mut rng = MersenneTwister::with_seed(2);
        assert!(matches!(
            exponential(&mut rng, 0.0, 0.0),
            Err(Error::InvalidParameters {
                kind: DistributionKind::Exponential,
                ..
            })
        ));
        assert!(exponential(&mut rng, 0.0, -1.0).is_err());
    }

    // --- Normal ---

    #[test]
    fn test_normal_moments() {
        let mut rng = MersenneTwister::with_seed(3);
        let xs: Vec<f64> = (0..DRAWS).map(|_| normal(&mut rng, 5.0, 2.0).unwrap()).collect();
        let m = xs.iter().sum::<f64>() / xs.len() as f64;
        let var = xs.iter().map(|x| (x - m) * (x - m)).sum::<f64>() / (xs.len() - 1) as f64;
        assert_abs_diff_eq!(m, 5.0, epsilon = 0.05);
        assert_relative_eq!(var.sqrt(), 2.0, max_relative = 0.03);
    }

    #[test]
    fn test_normal_invalid() {
        let mut rng = MersenneTwister::with_seed(3);
        assert!(normal(&mut rng, 0.0, 0.0).is_err());
        assert!(normal(&mut rng, 0.0, -1.0).is_err());
    }

    // --- LogNormal ---

    #[test]
    fn test_log_normal_mean_matches_parameter() {
        let mut rng = MersenneTwister::with_seed(4);
        let m = mean_of(DRAWS, || {
            let x = log_normal(&mut rng, 0.0, 2.0, 1.0).unwrap();
            assert!(x > 0.0);
            x
        });
        assert_relative_eq!(m, 2.0, max_relative = 0.03);
    }

    #[test]
    fn test_log_normal_shifted_above_loc() {
        let mut rng = MersenneTwister::with_seed(4);
        for _ in 0..1000 {
            assert!(log_normal(&mut rng, -3.0, 1.0, 0.5).unwrap() > -3.0);
        }
    }

    #[test]
    fn test_log_normal_invalid() {
        let mut rng = MersenneTwister::with_seed(4);
        assert!(log_normal(&mut rng, 0.0, 0.0, 1.0).is_err());
        assert!(log_normal(&mut rng, 0.0, 1.0, 0.0).is_err());
    }

    // --- Gamma ---

    #[test]
    fn test_gamma_mean_all_regimes() {
        let mut rng = MersenneTwister::with_seed(5);
        for &shape in &[0.3, 0.5, 1.0, 2.0, 3.5, 9.0] {
            let scale = 2.0;
            let m = mean_of(DRAWS, || {
                let x = gamma(&mut rng, 0.0, scale, shape).unwrap();
                assert!(x >= 0.0 && x.is_finite());
                x
            });
            assert_relative_eq!(m, shape * scale, max_relative = 0.04);
        }
    }

    #[test]
    fn test_gamma_variance_shape_gt_one() {
        let mut rng = MersenneTwister::with_seed(6);
        let xs: Vec<f64> = (0..DRAWS)
            .map(|_| standard_gamma(&mut rng, 4.0).unwrap())
            .collect();
        let m = xs.iter().sum::<f64>() / xs.len() as f64;
        let var = xs.iter().map(|x| (x - m) * (x - m)).sum::<f64>() / (xs.len() - 1) as f64;
        assert_relative_eq!(var, 4.0, max_relative = 0.05);
    }

    #[test]
    fn test_gamma_invalid() {
        let mut rng = MersenneTwister::with_seed(5);
        assert!(gamma(&mut rng, 0.0, 0.0, 1.0).is_err());
        assert!(gamma(&mut rng, 0.0, 1.0, 0.0).is_err());
        assert!(gamma(&mut rng, 0.0, 1.0, -2.0).is_err());
    }

    // --- Beta ---

    #[test]
    fn test_beta_mean_both_orientations() {
        let mut rng = MersenneTwister::with_seed(7);
        for &(v, w) in &[(2.0, 5.0), (5.0, 2.0), (0.5, 0.5), (3.0, 3.0)] {
            let m = mean_of(DRAWS, || {
                let x = standard_beta(&mut rng, v, w).unwrap();
                assert!((0.0..=1.0).contains(&x));
                x
            });
            assert_abs_diff_eq!(m, v / (v + w), epsilon = 0.01);
        }
    }

    #[test]
    fn test_beta_scaled_bounds() {
        let mut rng = MersenneTwister::with_seed(7);
        for _ in 0..5000 {
            let x = beta(&mut rng, 1.5, 4.0, 10.0, 20.0).unwrap();
            assert!((10.0..=20.0).contains(&x));
        }
    }

    #[test]
    fn test_beta_invalid() {
        let mut rng = MersenneTwister::with_seed(7);
        assert!(beta(&mut rng, 0.0, 1.0, 0.0, 1.0).is_err());
        assert!(beta(&mut rng, 1.0, -1.0, 0.0, 1.0).is_err());
        assert!(beta(&mut rng, 1.0, 1.0, 1.0, 1.0).is_err());
    }

    // --- InvNormal ---

    #[test]
    fn test_inv_normal_mean() {
        let mut rng = MersenneTwister::with_seed(8);
        let m = mean_of(DRAWS, || {
            let x = inv_normal(&mut rng, 0.0, 1.5, 3.0).unwrap();
            assert!(x > 0.0);
            x
        });
        assert_relative_eq!(m, 1.5, max_relative = 0.03);
    }

    #[test]
    fn test_inv_normal_tiny_shape_stays_positive() {
        let mut rng = MersenneTwister::with_seed(18);
        for shape in [1e-6, 1e-9, 1e-12] {
            for _ in 0..20_000 {
                let x = inv_normal(&mut rng, 0.0, 1.0, shape).unwrap();
                assert!(x.is_finite() && x > 0.0, "shape={shape}, x={x}");
            }
        }
    }

    #[test]
    fn test_inv_normal_invalid() {
        let mut rng = MersenneTwister::with_seed(8);
        assert!(inv_normal(&mut rng, 0.0, 0.0, 1.0).is_err());
        assert!(inv_normal(&mut rng, 0.0, 1.0, 0.0).is_err());
    }

    // --- Weibull ---

    #[test]
    fn test_weibull_shape_one_is_exponential() {
        let mut rng = MersenneTwister::with_seed(9);
        let m = mean_of(DRAWS, || weibull(&mut rng, 0.0, 3.0, 1.0).unwrap());
        assert_relative_eq!(m, 3.0, max_relative = 0.03);
    }

    #[test]
    fn test_weibull_shape_two_mean() {
        // mean = scale·Γ(1.5) = scale·√π/2
        let mut rng = MersenneTwister::with_seed(9);
        let m = mean_of(DRAWS, || weibull(&mut rng, 1.0, 2.0, 2.0).unwrap());
        let expected = 1.0 + 2.0 * std::f64::consts::PI.sqrt() / 2.0;
        assert_relative_eq!(m, expected, max_relative = 0.02);
    }

    #[test]
    fn test_weibull_invalid() {
        let mut rng = MersenneTwister::with_seed(9);
        assert!(weibull(&mut rng, 0.0, 0.0, 1.0).is_err());
        assert!(weibull(&mut rng, 0.0, 1.0, 0.0).is_err());
    }

    // --- Triangular ---

    #[test]
    fn test_triangular_mean_and_bounds() {
        let mut rng = MersenneTwister::with_seed(10);
        let m = mean_of(DRAWS, || {
            let x = triangular(&mut rng, 3.0, 0.0, 10.0).unwrap();
            assert!((0.0..=10.0).contains(&x));
            x
        });
        assert_abs_diff_eq!(m, 13.0 / 3.0, epsilon = 0.05);
    }

    #[test]
    fn test_triangular_mode_at_bounds() {
        let mut rng = MersenneTwister::with_seed(10);
        for _ in 0..1000 {
            let lo = triangular(&mut rng, 0.0, 0.0, 1.0).unwrap();
            let hi = triangular(&mut rng, 1.0, 0.0, 1.0).unwrap();
            assert!((0.0..=1.0).contains(&lo));
            assert!((0.0..=1.0).contains(&hi));
        }
    }

    #[test]
    fn test_triangular_invalid() {
        let mut rng = MersenneTwister::with_seed(10);
        assert!(triangular(&mut rng, -1.0, 0.0, 10.0).is_err()); // mode < min
        assert!(triangular(&mut rng, 11.0, 0.0, 10.0).is_err()); // mode > max
        assert!(triangular(&mut rng, 5.0, 5.0, 5.0).is_err()); // min == max
    }
}
