//! Descriptive statistics over `f64` samples.
//!
//! Linear passes (count, sum, extrema, means) and central moments live
//! here; statistics that need a sorted sample are in [`order`], and the
//! aggregate record is in [`summary`].
//!
//! # Algorithms
//!
//! - **Sum / Mean**: Neumaier compensated summation.
//! - **Moments**: two-pass. The mean is computed first, then the second,
//!   third and fourth central sums in a single sweep.
//!   Reference: Joanes & Gill (1998), "Comparing measures of sample
//!   skewness and kurtosis", *The Statistician* 47(1).
//!
//! NaN in the input propagates through the linear passes and moments.
//! Order statistics reject it instead.

pub mod order;
pub mod summary;

pub use order::{
    median, median_sorted, percentile, percentile_sorted, quartile, quartile_sorted,
    randomized_quicksort, trimmed_mean, trimmed_mean_sorted,
};
pub use summary::{descriptive, DescriptiveSummary};

use crate::config::{BiasMode, Z_95};
use crate::error::{require_len, Error, Result};

/// Number of observations.
pub fn count(data: &[f64]) -> usize {
    data.len()
}

/// Compensated sum; `0.0` for an empty sample.
///
/// # Examples
/// ```
/// use u_stochastic::stats::sum;
/// assert_eq!(sum(&[1e16, 1.0, -1e16]), 1.0);
/// ```
pub fn sum(data: &[f64]) -> f64 {
    kahan_sum(data)
}

/// Smallest observation.
///
/// # Errors
/// [`Error::InsufficientData`] for an empty sample.
pub fn min(data: &[f64]) -> Result<f64> {
    require_len(data, 1, "min")?;
    Ok(data.iter().copied().fold(f64::INFINITY, f64::min))
}

/// Largest observation.
///
/// # Errors
/// [`Error::InsufficientData`] for an empty sample.
pub fn max(data: &[f64]) -> Result<f64> {
    require_len(data, 1, "max")?;
    Ok(data.iter().copied().fold(f64::NEG_INFINITY, f64::max))
}

/// `max − min`.
pub fn range(data: &[f64]) -> Result<f64> {
    Ok(max(data)? - min(data)?)
}

/// Arithmetic mean using compensated summation.
///
/// # Errors
/// [`Error::InsufficientData`] for an empty sample.
///
/// # Examples
/// ```
/// use u_stochastic::stats::mean;
/// assert_eq!(mean(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap(), 3.0);
/// assert!(mean(&[]).is_err());
/// ```
pub fn mean(data: &[f64]) -> Result<f64> {
    require_len(data, 1, "mean")?;
    Ok(kahan_sum(data) / data.len() as f64)
}

/// `n / Σ 1/xᵢ`.
///
/// A zero observation drives the result to `0.0`; values are not
/// otherwise restricted.
pub fn harmonic_mean(data: &[f64]) -> Result<f64> {
    require_len(data, 1, "harmonic mean")?;
    let reciprocals: Vec<f64> = data.iter().map(|x| 1.0 / x).collect();
    Ok(data.len() as f64 / kahan_sum(&reciprocals))
}

/// `exp(mean(ln xᵢ))`.
///
/// Negative observations yield NaN, a zero observation yields `0.0`.
pub fn geometric_mean(data: &[f64]) -> Result<f64> {
    require_len(data, 1, "geometric mean")?;
    let logs: Vec<f64> = data.iter().map(|x| x.ln()).collect();
    Ok((kahan_sum(&logs) / data.len() as f64).exp())
}

/// Variance with the requested denominator.
///
/// Returns `0.0` when fewer than two observations are available rather
/// than failing.
///
/// # Examples
/// ```
/// use u_stochastic::config::BiasMode;
/// use u_stochastic::stats::variance;
///
/// let v = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
/// assert!((variance(&v, BiasMode::Unbiased) - 4.571428571428571).abs() < 1e-12);
/// assert!((variance(&v, BiasMode::Biased) - 4.0).abs() < 1e-12);
/// assert_eq!(variance(&[3.0], BiasMode::Unbiased), 0.0);
/// ```
pub fn variance(data: &[f64], bias: BiasMode) -> f64 {
    CentralMoments::from_sample(data).variance(bias)
}

/// Square root of [`variance`].
pub fn std_dev(data: &[f64], bias: BiasMode) -> f64 {
    variance(data, bias).sqrt()
}

/// `std_dev / √n`.
///
/// # Errors
/// [`Error::InsufficientData`] for an empty sample.
pub fn std_error(data: &[f64], bias: BiasMode) -> Result<f64> {
    require_len(data, 1, "standard error")?;
    Ok(std_dev(data, bias) / (data.len() as f64).sqrt())
}

/// 95% confidence half-width of the mean, `1.96 · std_error`.
pub fn confidence_95(data: &[f64], bias: BiasMode) -> Result<f64> {
    confidence_half_width(data, bias, Z_95)
}

/// `z · std_error` for an arbitrary normal quantile `z`.
///
/// # Errors
/// [`Error::InvalidArgument`] unless `z` is finite and positive;
/// [`Error::InsufficientData`] for an empty sample.
pub fn confidence_half_width(data: &[f64], bias: BiasMode, z: f64) -> Result<f64> {
    if !z.is_finite() || z <= 0.0 {
        return Err(Error::invalid_argument(
            "z",
            format!("must be finite and > 0, got {z}"),
        ));
    }
    Ok(z * std_error(data, bias)?)
}

/// Sample skewness.
///
/// # Formula
/// ```text
/// g₁ = m₃ / m₂^{3/2}                      (Biased)
/// G₁ = g₁ · √(n(n−1)) / (n−2)             (Unbiased)
/// ```
/// where `m₂`, `m₃` are the biased central moments. Constant samples give
/// NaN.
///
/// # Errors
/// [`Error::InsufficientData`] when `n < 3`.
///
/// # Examples
/// ```
/// use u_stochastic::config::BiasMode;
/// use u_stochastic::stats::skewness;
///
/// let sym = [1.0, 2.0, 3.0, 4.0, 5.0];
/// assert!(skewness(&sym, BiasMode::Unbiased).unwrap().abs() < 1e-14);
/// assert!(skewness(&[1.0, 2.0], BiasMode::Unbiased).is_err());
/// ```
pub fn skewness(data: &[f64], bias: BiasMode) -> Result<f64> {
    require_len(data, 3, "skewness")?;
    Ok(CentralMoments::from_sample(data).skewness(bias))
}

/// Sample excess kurtosis.
///
/// # Formula
/// ```text
/// g₂ = m₄ / m₂² − 3                                   (Biased)
/// G₂ = ((n+1)·g₂ + 6) · (n−1) / ((n−2)(n−3))          (Unbiased)
/// ```
/// The unbiased form matches Excel `KURT()`. Constant samples give NaN.
///
/// # Errors
/// [`Error::InsufficientData`] when `n < 4`.
pub fn kurtosis(data: &[f64], bias: BiasMode) -> Result<f64> {
    require_len(data, 4, "kurtosis")?;
    Ok(CentralMoments::from_sample(data).kurtosis(bias))
}

// ---------------------------------------------------------------------------
// Central moments
// ---------------------------------------------------------------------------

/// Biased central moments of one sample, computed in two passes.
///
/// Callers check the sample size; the estimators here assume it is
/// large enough for the statistic asked for.
#[derive(Debug, Clone, Copy)]
pub(crate) struct CentralMoments {
    n: f64,
    m2: f64,
    m3: f64,
    m4: f64,
}

impl CentralMoments {
    pub(crate) fn from_sample(data: &[f64]) -> Self {
        let n = data.len() as f64;
        if data.is_empty() {
            return Self {
                n,
                m2: 0.0,
                m3: 0.0,
                m4: 0.0,
            };
        }
        let m = kahan_sum(data) / n;
        let (mut s2, mut s3, mut s4) = (0.0, 0.0, 0.0);
        for &x in data {
            let d = x - m;
            let d2 = d * d;
            s2 += d2;
            s3 += d2 * d;
            s4 += d2 * d2;
        }
        Self {
            n,
            m2: s2 / n,
            m3: s3 / n,
            m4: s4 / n,
        }
    }

    pub(crate) fn variance(&self, bias: BiasMode) -> f64 {
        if self.n < 2.0 {
            return 0.0;
        }
        match bias {
            BiasMode::Biased => self.m2,
            BiasMode::Unbiased => self.m2 * self.n / (self.n - 1.0),
        }
    }

    pub(crate) fn skewness(&self, bias: BiasMode) -> f64 {
        let g1 = self.m3 / self.m2.powf(1.5);
        match bias {
            BiasMode::Biased => g1,
            BiasMode::Unbiased => {
                let n = self.n;
                g1 * (n * (n - 1.0)).sqrt() / (n - 2.0)
            }
        }
    }

    pub(crate) fn kurtosis(&self, bias: BiasMode) -> f64 {
        let g2 = self.m4 / (self.m2 * self.m2) - 3.0;
        match bias {
            BiasMode::Biased => g2,
            BiasMode::Unbiased => {
                let n = self.n;
                ((n + 1.0) * g2 + 6.0) * (n - 1.0) / ((n - 2.0) * (n - 3.0))
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Kahan compensated summation
// ---------------------------------------------------------------------------

/// Neumaier compensated summation for O(ε) error independent of `n`.
///
/// Improves on plain Kahan summation when the addend is larger in
/// magnitude than the running sum.
///
/// Reference: Neumaier (1974), "Rundungsfehleranalyse einiger Verfahren
/// zur Summation endlicher Summen", *ZAMM* 54(1).
pub fn kahan_sum(data: &[f64]) -> f64 {
    let mut total = 0.0_f64;
    let mut c = 0.0_f64;
    for &x in data {
        let t = total + x;
        if total.abs() >= x.abs() {
            c += (total - t) + x;
        } else {
            c += (x - t) + total;
        }
        total = t;
    }
    total + c
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
