//! Discrete samplers: Poisson counts and Bernoulli trials.

use super::continuous::standard_normal;
use super::DistributionKind;
use crate::error::{Error, Result};
use crate::random::RandomSource;

/// Above this mean the Poisson sampler switches to the normal approximation.
const POISSON_DIRECT_LIMIT: f64 = 20.0;

pub(crate) fn check_poisson(mu: f64) -> Result<()> {
    if !mu.is_finite() || mu <= 0.0 {
        return Err(Error::invalid_parameters(
            DistributionKind::Poisson,
            format!("mu must be finite and > 0, got {mu}"),
        ));
    }
    Ok(())
}

/// Poisson deviate with mean `mu`.
///
/// # Algorithm
/// - `mu ≤ 20`: multiply fresh uniforms into an accumulator until it drops
///   below `e^(−mu)`; the count of multiplications minus one is Poisson.
/// - `mu > 20`: normal approximation `max(0, ⌊0.5 + mu + √mu·Z⌋)`.
///
/// # Errors
/// Fails unless `mu > 0`.
///
/// # Examples
/// ```
/// use u_stochastic::distributions::poisson;
/// use u_stochastic::random::MersenneTwister;
///
/// let mut rng = MersenneTwister::with_seed(4);
/// let k = poisson(&mut rng, 3.0).unwrap();
/// assert!(k < 100);
/// assert!(poisson(&mut rng, 0.0).is_err());
/// ```
pub fn poisson<R: RandomSource + ?Sized>(rng: &mut R, mu: f64) -> Result<u64> {
    check_poisson(mu)?;
    if mu <= POISSON_DIRECT_LIMIT {
        let limit = (-mu).exp();
        let mut acc = 1.0;
        let mut count: u64 = 0;
        loop {
            count += 1;
            acc *= rng.draw_f64();
            if acc < limit {
                return Ok(count - 1);
            }
        }
    }
    let x = (0.5 + mu + mu.sqrt() * standard_normal(rng)).floor();
    Ok(x.max(0.0) as u64)
}

/// Bernoulli trial: succeeds iff one uniform deviate is `≤ p`.
///
/// # Errors
/// Returns [`Error::InvalidArgument`] unless `0 ≤ p ≤ 1`.
pub fn bernoulli<R: RandomSource + ?Sized>(rng: &mut R, p: f64) -> Result<bool> {
    if !(0.0..=1.0).contains(&p) {
        return Err(Error::invalid_argument(
            "p",
            format!("probability must lie in [0, 1], got {p}"),
        ));
    }
    Ok(rng.draw_f64() <= p)
}

// ============================================================================
// Tests
// ============================================================================
