//! Probability distribution samplers.
//!
//! A [`DistributionDescriptor`] names one of eleven kinds and carries four
//! numeric slots whose meaning depends on the kind. [`sample`] dispatches a
//! descriptor to the matching sampler; every sampler is also callable
//! directly with explicit parameters.
//!
//! # Supported Distributions
//!
//! | Kind | p0 | p1 | p2 | p3 | Constraints |
//! |---|---|---|---|---|---|
//! | `Average` | value | | | | none |
//! | `Beta` | v | w | min | max | v, w > 0, min < max |
//! | `Exponential` | loc | scale | | | scale > 0 |
//! | `Gamma` | loc | scale | shape | | scale, shape > 0 |
//! | `InvNormal` | loc | mean | shape | | mean, shape > 0 |
//! | `LogNormal` | loc | mean | var | | mean, var > 0 |
//! | `Normal` | mean | sd | | | sd > 0 |
//! | `Poisson` | mu | | | | mu > 0 |
//! | `Triangular` | mode | min | max | | min ≤ mode ≤ max, min < max |
//! | `Uniform` | min | max | | | min < max |
//! | `Weibull` | loc | scale | shape | | scale, shape > 0 |
//!
//! Unused slots are left at 0. The descriptor itself accepts any values;
//! validation happens when a deviate is drawn.

pub mod continuous;
pub mod discrete;
pub mod sphere;

use tracing::trace;

use crate::error::Result;
use crate::random::RandomSource;

pub use continuous::{
    beta, exponential, exponential_with_scale, gamma, inv_normal, log_normal, normal,
    standard_beta, standard_gamma, standard_normal, triangular, uniform, weibull,
};
pub use discrete::{bernoulli, poisson};
pub use sphere::{unit_hypersphere_point, unit_sphere_point};

/// Discriminant selecting a distribution family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DistributionKind {
    /// Degenerate: always the first parameter.
    Average,
    Beta,
    Exponential,
    Gamma,
    /// Inverse Gaussian (Wald).
    InvNormal,
    LogNormal,
    Normal,
    Poisson,
    Triangular,
    Uniform,
    Weibull,
}

impl DistributionKind {
    /// Every kind, in declaration order.
    pub const ALL: [DistributionKind; 11] = [
        DistributionKind::Average,
        DistributionKind::Beta,
        DistributionKind::Exponential,
        DistributionKind::Gamma,
        DistributionKind::InvNormal,
        DistributionKind::LogNormal,
        DistributionKind::Normal,
        DistributionKind::Poisson,
        DistributionKind::Triangular,
        DistributionKind::Uniform,
        DistributionKind::Weibull,
    ];

    /// Canonical name of the kind.
    pub fn name(&self) -> &'static str {
        match self {
            DistributionKind::Average => "Average",
            DistributionKind::Beta => "Beta",
            DistributionKind::Exponential => "Exponential",
            DistributionKind::Gamma => "Gamma",
            DistributionKind::InvNormal => "InvNormal",
            DistributionKind::LogNormal => "LogNormal",
            DistributionKind::Normal => "Normal",
            DistributionKind::Poisson => "Poisson",
            DistributionKind::Triangular => "Triangular",
            DistributionKind::Uniform => "Uniform",
            DistributionKind::Weibull => "Weibull",
        }
    }

    /// Whether drawing from this kind consumes entropy.
    pub fn is_random(&self) -> bool {
        !matches!(self, DistributionKind::Average)
    }
}

impl std::fmt::Display for DistributionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Immutable distribution descriptor: a kind plus four parameter slots.
///
/// # Examples
/// ```
/// use u_stochastic::distributions::{DistributionDescriptor, DistributionKind};
/// use u_stochastic::random::MersenneTwister;
///
/// let d = DistributionDescriptor::normal(10.0, 2.0);
/// assert_eq!(d.kind(), DistributionKind::Normal);
/// assert_eq!(d.params(), [10.0, 2.0, 0.0, 0.0]);
///
/// let mut rng = MersenneTwister::with_seed(42);
/// let draws = d.sample_n(&mut rng, 100).unwrap();
/// assert_eq!(draws.len(), 100);
///
/// // invalid combinations are representable but fail at draw time
/// let bad = DistributionDescriptor::normal(0.0, -1.0);
/// assert!(bad.sample(&mut rng).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DistributionDescriptor {
    kind: DistributionKind,
    params: [f64; 4],
}

impl DistributionDescriptor {
    /// Creates a descriptor from raw slots.
    pub fn new(kind: DistributionKind, params: [f64; 4]) -> Self {
        Self { kind, params }
    }

    pub fn average(value: f64) -> Self {
        Self::new(DistributionKind::Average, [value, 0.0, 0.0, 0.0])
    }

    pub fn beta(v: f64, w: f64, min: f64, max: f64) -> Self {
        Self::new(DistributionKind::Beta, [v, w, min, max])
    }

    pub fn exponential(loc: f64, scale: f64) -> Self {
        Self::new(DistributionKind::Exponential, [loc, scale, 0.0, 0.0])
    }

    pub fn gamma(loc: f64, scale: f64, shape: f64) -> Self {
        Self::new(DistributionKind::Gamma, [loc, scale, shape, 0.0])
    }

    pub fn inv_normal(loc: f64, mean: f64, shape: f64) -> Self {
        Self::new(DistributionKind::InvNormal, [loc, mean, shape, 0.0])
    }

    pub fn log_normal(loc: f64, mean: f64, var: f64) -> Self {
        Self::new(DistributionKind::LogNormal, [loc, mean, var, 0.0])
    }

    pub fn normal(mean: f64, sd: f64) -> Self {
        Self::new(DistributionKind::Normal, [mean, sd, 0.0, 0.0])
    }

    pub fn poisson(mu: f64) -> Self {
        Self::new(DistributionKind::Poisson, [mu, 0.0, 0.0, 0.0])
    }

    pub fn triangular(mode: f64, min: f64, max: f64) -> Self {
        Self::new(DistributionKind::Triangular, [mode, min, max, 0.0])
    }

    pub fn uniform(min: f64, max: f64) -> Self {
        Self::new(DistributionKind::Uniform, [min, max, 0.0, 0.0])
    }

    pub fn weibull(loc: f64, scale: f64, shape: f64) -> Self {
        Self::new(DistributionKind::Weibull, [loc, scale, shape, 0.0])
    }

    pub fn kind(&self) -> DistributionKind {
        self.kind
    }

    pub fn params(&self) -> [f64; 4] {
        self.params
    }

    /// Runs the checks the sampler would run, without drawing.
    pub fn validate(&self) -> Result<()> {
        let [p0, p1, p2, p3] = self.params;
        match self.kind {
            DistributionKind::Average => Ok(()),
            DistributionKind::Beta => continuous::check_beta(p0, p1, p2, p3),
            DistributionKind::Exponential => continuous::check_exponential(p0, p1),
            DistributionKind::Gamma => continuous::check_gamma(p0, p1, p2),
            DistributionKind::InvNormal => continuous::check_inv_normal(p0, p1, p2),
            DistributionKind::LogNormal => continuous::check_log_normal(p0, p1, p2),
            DistributionKind::Normal => continuous::check_normal(p0, p1),
            DistributionKind::Poisson => discrete::check_poisson(p0),
            DistributionKind::Triangular => continuous::check_triangular(p0, p1, p2),
            DistributionKind::Uniform => continuous::check_uniform(p0, p1),
            DistributionKind::Weibull => continuous::check_weibull(p0, p1, p2),
        }
    }

    /// Draws one deviate. See [`sample`].
    pub fn sample<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Result<f64> {
        sample(rng, self)
    }

    /// Draws `n` deviates into a new sample buffer.
    ///
    /// Parameters are validated once up front; an invalid descriptor
    /// consumes no entropy.
    pub fn sample_n<R: RandomSource + ?Sized>(&self, rng: &mut R, n: usize) -> Result<Vec<f64>> {
        let mut out = vec![0.0; n];
        self.fill(rng, &mut out)?;
        Ok(out)
    }

    /// Overwrites every element of `buffer` with a fresh deviate.
    pub fn fill<R: RandomSource + ?Sized>(&self, rng: &mut R, buffer: &mut [f64]) -> Result<()> {
        self.validate()?;
        for slot in buffer.iter_mut() {
            *slot = sample(rng, self)?;
        }
        Ok(())
    }
}

/// Draws one deviate from the distribution named by `descriptor`.
///
/// Poisson counts are returned as `f64`. `Average` returns its first
/// parameter without touching the engine.
///
/// # Errors
/// Returns the sampler's validation failure for out-of-domain parameters.
pub fn sample<R: RandomSource + ?Sized>(
    rng: &mut R,
    descriptor: &DistributionDescriptor,
) -> Result<f64> {
    let [p0, p1, p2, p3] = descriptor.params;
    trace!(kind = %descriptor.kind, "drawing deviate");
    match descriptor.kind {
        DistributionKind::Average => Ok(p0),
        DistributionKind::Beta => beta(rng, p0, p1, p2, p3),
        DistributionKind::Exponential => exponential(rng, p0, p1),
        DistributionKind::Gamma => gamma(rng, p0, p1, p2),
        DistributionKind::InvNormal => inv_normal(rng, p0, p1, p2),
        DistributionKind::LogNormal => log_normal(rng, p0, p1, p2),
        DistributionKind::Normal => normal(rng, p0, p1),
        DistributionKind::Poisson => poisson(rng, p0).map(|k| k as f64),
        DistributionKind::Triangular => triangular(rng, p0, p1, p2),
        DistributionKind::Uniform => uniform(rng, p0, p1),
        DistributionKind::Weibull => weibull(rng, p0, p1, p2),
    }
}

/// Uniform deviate on the open interval (0, 1); zero draws are discarded.
pub(crate) fn open_unit<R: RandomSource + ?Sized>(rng: &mut R) -> f64 {
    loop {
        let u = rng.draw_f64();
        if u > 0.0 {
            return u;
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
