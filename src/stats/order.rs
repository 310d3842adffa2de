//! Order statistics: sorting, median, quartiles, percentiles and the
//! trimmed mean.
//!
//! Every convenience function sorts its argument in place with
//! [`randomized_quicksort`] and then reads the answer off the sorted
//! sample. The `*_sorted` variants skip the sort and trust the caller.
//!
//! # Interpolation
//! Quartiles and percentiles use linear interpolation between the two
//! order statistics bracketing rank `p·(n−1)` (the R-7 rule).
//! Reference: Hyndman & Fan (1996), "Sample Quantiles in Statistical
//! Packages", *The American Statistician* 50(4).

use tracing::{debug, trace};

use super::{kahan_sum, mean};
use crate::error::{require_len, Error, Result};
use crate::random::RandomSource;

/// Returned by the median of a sample with fewer than two observations.
pub const MEDIAN_SENTINEL: f64 = 1.0;

/// Sorts `data` ascending in place using quicksort with a uniformly random
/// pivot drawn from `rng`.
///
/// Expected O(n log n) time on samples of distinct values. Values equal to
/// the pivot all land on the right, so samples with many duplicates degrade
/// towards O(n²). Recursion always descends into the smaller partition, so
/// stack depth stays O(log n) even for one repeated value.
///
/// # Errors
/// [`Error::InvalidArgument`] if `data` contains NaN; `data` is left
/// untouched in that case.
///
/// # Examples
/// ```
/// use u_stochastic::random::MersenneTwister;
/// use u_stochastic::stats::randomized_quicksort;
///
/// let mut rng = MersenneTwister::with_seed(1);
/// let mut v = [3.0, -1.0, 2.0, 2.0, 0.5];
/// randomized_quicksort(&mut v, &mut rng).unwrap();
/// assert_eq!(v, [-1.0, 0.5, 2.0, 2.0, 3.0]);
/// ```
pub fn randomized_quicksort<R: RandomSource + ?Sized>(data: &mut [f64], rng: &mut R) -> Result<()> {
    if let Some(idx) = data.iter().position(|x| x.is_nan()) {
        return Err(Error::invalid_argument(
            "data",
            format!("sample contains NaN at index {idx}"),
        ));
    }
    trace!(len = data.len(), "randomized quicksort");
    quicksort(data, rng);
    Ok(())
}

fn quicksort<R: RandomSource + ?Sized>(mut data: &mut [f64], rng: &mut R) {
    while data.len() > 1 {
        let p = partition(data, rng);
        let (left, right) = std::mem::take(&mut data).split_at_mut(p);
        let right = &mut right[1..];
        if left.len() < right.len() {
            quicksort(left, rng);
            data = right;
        } else {
            quicksort(right, rng);
            data = left;
        }
    }
}

/// Places a random pivot at its final index and returns that index.
///
/// Afterwards `data[..p] < pivot` and `data[p+1..] >= pivot`.
fn partition<R: RandomSource + ?Sized>(data: &mut [f64], rng: &mut R) -> usize {
    let len = data.len();
    let pick = ((rng.draw_f64() * len as f64) as usize).min(len - 1);
    data.swap(0, pick);
    let pivot = data[0];

    let mut i = 1;
    let mut j = len - 1;
    while i <= j {
        if data[i] < pivot {
            i += 1;
        } else if data[j] >= pivot {
            j -= 1;
        } else {
            data.swap(i, j);
            i += 1;
            j -= 1;
        }
    }
    data.swap(0, j);
    j
}

/// Linear interpolation at rank `fraction · (n − 1)`. `sorted` must be
/// non-empty and `fraction ∈ [0, 1]`.
fn interpolate(sorted: &[f64], fraction: f64) -> f64 {
    let n = sorted.len();
    let rank = fraction * (n - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = (lo + 1).min(n - 1);
    let g = rank - lo as f64;
    if g == 0.0 || lo == hi {
        sorted[lo]
    } else {
        sorted[lo] + g * (sorted[hi] - sorted[lo])
    }
}

// ---------------------------------------------------------------------------
// Median
// ---------------------------------------------------------------------------

/// Median of an already sorted sample.
///
/// Samples with fewer than two observations return [`MEDIAN_SENTINEL`]
/// (`1.0`), not the single value.
pub fn median_sorted(sorted: &[f64]) -> f64 {
    let n = sorted.len();
    if n < 2 {
        debug!(n, "median of fewer than two observations, returning sentinel");
        return MEDIAN_SENTINEL;
    }
    if n % 2 == 1 {
        sorted[n / 2]
    } else {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    }
}

/// Sorts `data` and returns its median.
///
/// # Examples
/// ```
/// use u_stochastic::random::MersenneTwister;
/// use u_stochastic::stats::median;
///
/// let mut rng = MersenneTwister::with_seed(2);
/// assert_eq!(median(&mut [4.0, 1.0, 3.0, 2.0], &mut rng).unwrap(), 2.5);
/// assert_eq!(median(&mut [3.0, 1.0, 2.0], &mut rng).unwrap(), 2.0);
/// assert_eq!(median(&mut [5.0], &mut rng).unwrap(), 1.0);
/// ```
pub fn median<R: RandomSource + ?Sized>(data: &mut [f64], rng: &mut R) -> Result<f64> {
    randomized_quicksort(data, rng)?;
    Ok(median_sorted(data))
}

// ---------------------------------------------------------------------------
// Quartiles and percentiles
// ---------------------------------------------------------------------------

/// Quartile `q` (0 through 4) of an already sorted sample.
///
/// `q = 0` is the minimum and `q = 4` the maximum; `q = 1, 2, 3`
/// interpolate at fractions 0.25, 0.5 and 0.75.
///
/// # Errors
/// [`Error::InvalidArgument`] when `q > 4`; [`Error::InsufficientData`]
/// for an empty sample.
pub fn quartile_sorted(sorted: &[f64], q: u8) -> Result<f64> {
    if q > 4 {
        return Err(Error::invalid_argument(
            "q",
            format!("quartile index must be 0..=4, got {q}"),
        ));
    }
    require_len(sorted, 1, "quartile")?;
    Ok(match q {
        0 => sorted[0],
        4 => sorted[sorted.len() - 1],
        _ => interpolate(sorted, f64::from(q) / 4.0),
    })
}

/// Sorts `data` and returns quartile `q`.
///
/// The quartile index is checked before the sample is touched.
pub fn quartile<R: RandomSource + ?Sized>(data: &mut [f64], q: u8, rng: &mut R) -> Result<f64> {
    if q > 4 {
        return quartile_sorted(data, q);
    }
    randomized_quicksort(data, rng)?;
    quartile_sorted(data, q)
}

fn check_percentile(p: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&p) {
        return Err(Error::invalid_argument(
            "p",
            format!("percentile must lie in [0, 1], got {p}"),
        ));
    }
    Ok(())
}

/// Percentile `p ∈ [0, 1]` of an already sorted sample.
///
/// # Errors
/// [`Error::InvalidArgument`] for `p` outside `[0, 1]`;
/// [`Error::InsufficientData`] for an empty sample.
pub fn percentile_sorted(sorted: &[f64], p: f64) -> Result<f64> {
    check_percentile(p)?;
    require_len(sorted, 1, "percentile")?;
    Ok(interpolate(sorted, p))
}

/// Sorts `data` and returns percentile `p`.
///
/// # Examples
/// ```
/// use u_stochastic::random::MersenneTwister;
/// use u_stochastic::stats::percentile;
///
/// let mut rng = MersenneTwister::with_seed(3);
/// let mut v = [4.0, 1.0, 3.0, 2.0];
/// assert_eq!(percentile(&mut v, 0.25, &mut rng).unwrap(), 1.75);
/// ```
pub fn percentile<R: RandomSource + ?Sized>(data: &mut [f64], p: f64, rng: &mut R) -> Result<f64> {
    check_percentile(p)?;
    randomized_quicksort(data, rng)?;
    percentile_sorted(data, p)
}

// ---------------------------------------------------------------------------
// Trimmed mean
// ---------------------------------------------------------------------------

fn check_trim_fraction(fraction: f64) -> Result<()> {
    if !(0.0..1.0).contains(&fraction) {
        return Err(Error::invalid_argument(
            "fraction",
            format!("trim fraction must lie in [0, 1), got {fraction}"),
        ));
    }
    Ok(())
}

/// Trimmed mean of an already sorted sample.
///
/// Drops `k = ⌊fraction · n / 2⌋` observations from each end and averages
/// the rest. With `k = 0` this is the plain mean; if trimming would consume
/// the whole sample the median is returned instead.
///
/// # Errors
/// [`Error::InvalidArgument`] unless `fraction ∈ [0, 1)`;
/// [`Error::InsufficientData`] for an empty sample.
pub fn trimmed_mean_sorted(sorted: &[f64], fraction: f64) -> Result<f64> {
    check_trim_fraction(fraction)?;
    require_len(sorted, 1, "trimmed mean")?;
    let n = sorted.len();
    let k = (fraction * n as f64 / 2.0).floor() as usize;
    if k == 0 {
        return mean(sorted);
    }
    if 2 * k >= n {
        return Ok(median_sorted(sorted));
    }
    let kept = &sorted[k..n - k];
    Ok(kahan_sum(kept) / kept.len() as f64)
}

/// Sorts `data` and returns its trimmed mean.
pub fn trimmed_mean<R: RandomSource + ?Sized>(
    data: &mut [f64],
    fraction: f64,
    rng: &mut R,
) -> Result<f64> {
    check_trim_fraction(fraction)?;
    randomized_quicksort(data, rng)?;
    trimmed_mean_sorted(data, fraction)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::MersenneTwister;
    use approx::assert_abs_diff_eq;

    fn rng() -> MersenneTwister {
        MersenneTwister::with_seed(2024)
    }

    fn is_sorted(v: &[f64]) -> bool {
        v.windows(2).all(|w| w[0] <= w[1])
    }

    // --- randomized_quicksort ---

    #[test]
    fn test_sort_random_input() {
        let mut r = rng();
        let mut v: Vec<f64> = (0..1000).map(|_| r.draw_f64() * 100.0 - 50.0).collect();
        let mut expected = v.clone();
        expected.sort_by(f64::total_cmp);
        randomized_quicksort(&mut v, &mut r).unwrap();
        assert_eq!(v, expected);
    }

    #[test]
    fn test_sort_presorted_and_reversed() {
        let mut r = rng();
        let mut asc: Vec<f64> = (0..500).map(f64::from).collect();
        randomized_quicksort(&mut asc, &mut r).unwrap();
        assert!(is_sorted(&asc));

        let mut desc: Vec<f64> = (0..500).rev().map(f64::from).collect();
        randomized_quicksort(&mut desc, &mut r).unwrap();
        assert_eq!(desc, asc);
    }

    #[test]
    fn test_sort_all_equal() {
        let mut r = rng();
        let mut v = vec![3.5; 4_000];
        randomized_quicksort(&mut v, &mut r).unwrap();
        assert!(v.iter().all(|&x| x == 3.5));
    }

    #[test]
    fn test_sort_trivial_lengths() {
        let mut r = rng();
        let mut empty: [f64; 0] = [];
        randomized_quicksort(&mut empty, &mut r).unwrap();
        let mut one = [7.0];
        randomized_quicksort(&mut one, &mut r).unwrap();
        assert_eq!(one, [7.0]);
        let mut two = [2.0, 1.0];
        randomized_quicksort(&mut two, &mut r).unwrap();
        assert_eq!(two, [1.0, 2.0]);
    }

    #[test]
    fn test_sort_handles_infinities() {
        let mut r = rng();
        let mut v = [f64::INFINITY, 0.0, f64::NEG_INFINITY, -1.0];
        randomized_quicksort(&mut v, &mut r).unwrap();
        assert_eq!(v, [f64::NEG_INFINITY, -1.0, 0.0, f64::INFINITY]);
    }

    #[test]
    fn test_sort_rejects_nan_without_mutating() {
        let mut r = rng();
        let mut v = [3.0, f64::NAN, 1.0];
        let err = randomized_quicksort(&mut v, &mut r).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { name: "data", .. }));
        assert_eq!(v[0], 3.0);
        assert_eq!(v[2], 1.0);
    }

    // --- median ---

    #[test]
    fn test_median_even_odd() {
        let mut r = rng();
        assert_eq!(median(&mut [1.0, 2.0, 3.0, 4.0], &mut r).unwrap(), 2.5);
        assert_eq!(median(&mut [3.0, 1.0, 2.0], &mut r).unwrap(), 2.0);
    }

    #[test]
    fn test_median_sentinel() {
        let mut r = rng();
        assert_eq!(median(&mut [5.0], &mut r).unwrap(), MEDIAN_SENTINEL);
        assert_eq!(median(&mut [], &mut r).unwrap(), MEDIAN_SENTINEL);
    }

    #[test]
    fn test_median_sorts_input() {
        let mut r = rng();
        let mut v = [9.0, 1.0, 5.0, 3.0, 7.0];
        median(&mut v, &mut r).unwrap();
        assert_eq!(v, [1.0, 3.0, 5.0, 7.0, 9.0]);
    }

    // --- quartiles and percentiles ---

    #[test]
    fn test_quartiles() {
        let sorted = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert_eq!(quartile_sorted(&sorted, 0).unwrap(), 1.0);
        assert_eq!(quartile_sorted(&sorted, 1).unwrap(), 2.0);
        assert_eq!(quartile_sorted(&sorted, 2).unwrap(), 3.0);
        assert_eq!(quartile_sorted(&sorted, 3).unwrap(), 4.0);
        assert_eq!(quartile_sorted(&sorted, 4).unwrap(), 5.0);
    }

    #[test]
    fn test_quartile_interpolates() {
        let mut r = rng();
        let mut v = [4.0, 2.0, 1.0, 3.0];
        // rank 0.75 → 1 + 0.75·(2 − 1)
        assert_abs_diff_eq!(quartile(&mut v, 1, &mut r).unwrap(), 1.75, epsilon = 1e-15);
        assert_abs_diff_eq!(quartile_sorted(&v, 3).unwrap(), 3.25, epsilon = 1e-15);
    }

    #[test]
    fn test_quartile_invalid_index_leaves_data() {
        let mut r = rng();
        let mut v = [3.0, 1.0, 2.0];
        assert!(matches!(
            quartile(&mut v, 5, &mut r),
            Err(Error::InvalidArgument { name: "q", .. })
        ));
        assert_eq!(v, [3.0, 1.0, 2.0]);
        assert!(quartile_sorted(&[], 2).is_err());
    }

    #[test]
    fn test_percentile() {
        let mut r = rng();
        let mut v = [5.0, 1.0, 4.0, 2.0, 3.0];
        assert_eq!(percentile(&mut v, 0.0, &mut r).unwrap(), 1.0);
        assert_eq!(percentile_sorted(&v, 1.0).unwrap(), 5.0);
        assert_eq!(percentile_sorted(&v, 0.5).unwrap(), 3.0);
        assert_eq!(percentile_sorted(&[42.0], 0.3).unwrap(), 42.0);
    }

    #[test]
    fn test_percentile_invalid() {
        let mut r = rng();
        assert!(percentile(&mut [1.0, 2.0], 1.1, &mut r).is_err());
        assert!(percentile(&mut [1.0, 2.0], -0.1, &mut r).is_err());
        assert!(percentile_sorted(&[1.0], f64::NAN).is_err());
        assert!(matches!(
            percentile(&mut [], 0.5, &mut r),
            Err(Error::InsufficientData { .. })
        ));
    }

    // --- trimmed mean ---

    #[test]
    fn test_trimmed_mean_small_sample_is_mean() {
        // k = ⌊0.05 · 10 / 2⌋ = 0
        let mut r = rng();
        let mut v: Vec<f64> = (1..=10).map(f64::from).collect();
        v.push(1000.0);
        let plain = mean(&v).unwrap();
        assert_eq!(trimmed_mean(&mut v, 0.05, &mut r).unwrap(), plain);
    }

    #[test]
    fn test_trimmed_mean_drops_tails() {
        // n = 100, k = ⌊0.05 · 100 / 2⌋ = 2
        let mut sorted: Vec<f64> = (1..=100).map(f64::from).collect();
        sorted[99] = 1e9;
        sorted[0] = -1e9;
        let t = trimmed_mean_sorted(&sorted, 0.05).unwrap();
        let expected = (3..=98).map(f64::from).sum::<f64>() / 96.0;
        assert_abs_diff_eq!(t, expected, epsilon = 1e-12);
    }

    #[test]
    fn test_trimmed_mean_heavy_trim_keeps_middle() {
        // n = 4, k = ⌊0.99 · 4 / 2⌋ = 1
        let sorted = [1.0, 2.0, 3.0, 10.0];
        assert_eq!(trimmed_mean_sorted(&sorted, 0.99).unwrap(), 2.5);
        let sorted = [1.0, 2.0, 3.0];
        // k = ⌊0.9 · 3 / 2⌋ = 1, keeps only the middle
        assert_eq!(trimmed_mean_sorted(&sorted, 0.9).unwrap(), 2.0);
    }

    #[test]
    fn test_trimmed_mean_invalid() {
        let mut r = rng();
        assert!(trimmed_mean(&mut [1.0, 2.0], 1.0, &mut r).is_err());
        assert!(trimmed_mean(&mut [1.0, 2.0], -0.1, &mut r).is_err());
        assert!(trimmed_mean_sorted(&[], 0.05).is_err());
    }
}
