//! The aggregate descriptive summary.

use tracing::debug;

use super::order::{median_sorted, quartile_sorted, randomized_quicksort, trimmed_mean_sorted};
use super::{kahan_sum, CentralMoments};
use crate::config::SummaryConfig;
use crate::error::{require_len, Result};
use crate::random::RandomSource;

/// Every summary statistic of one sample, in reporting order.
///
/// Skewness and kurtosis are NaN when the sample is too small for them
/// (fewer than three and four observations respectively).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DescriptiveSummary {
    pub count: usize,
    pub sum: f64,
    pub min: f64,
    pub max: f64,
    pub range: f64,
    pub mean: f64,
    pub harmonic_mean: f64,
    pub geometric_mean: f64,
    pub trimmed_mean: f64,
    pub median: f64,
    pub variance: f64,
    pub std_dev: f64,
    pub std_error: f64,
    /// `confidence_z · std_error`; the 95% half-width under the default
    /// configuration.
    pub confidence_half_width: f64,
    pub first_quartile: f64,
    pub third_quartile: f64,
    pub skewness: f64,
    pub kurtosis: f64,
}

impl DescriptiveSummary {
    /// Field labels in reporting order, matching [`values`](Self::values).
    pub const FIELDS: [&'static str; 18] = [
        "count",
        "sum",
        "min",
        "max",
        "range",
        "mean",
        "harmonic_mean",
        "geometric_mean",
        "trimmed_mean",
        "median",
        "variance",
        "std_dev",
        "std_error",
        "confidence_half_width",
        "first_quartile",
        "third_quartile",
        "skewness",
        "kurtosis",
    ];

    /// All fields as `f64`, in reporting order.
    pub fn values(&self) -> [f64; 18] {
        [
            self.count as f64,
            self.sum,
            self.min,
            self.max,
            self.range,
            self.mean,
            self.harmonic_mean,
            self.geometric_mean,
            self.trimmed_mean,
            self.median,
            self.variance,
            self.std_dev,
            self.std_error,
            self.confidence_half_width,
            self.first_quartile,
            self.third_quartile,
            self.skewness,
            self.kurtosis,
        ]
    }

    /// `(label, value)` pairs in reporting order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, f64)> {
        Self::FIELDS.into_iter().zip(self.values())
    }
}

/// Computes every summary statistic of `data` in one call.
///
/// `data` is sorted in place. Sums and moments are taken before sorting,
/// so `sum` and `mean` agree bit-for-bit with [`super::sum`] and
/// [`super::mean`] on the caller's original order.
///
/// # Errors
/// - [`Error::InvalidArgument`](crate::Error::InvalidArgument) if `config`
///   is invalid or `data` contains NaN.
/// - [`Error::InsufficientData`](crate::Error::InsufficientData) for an
///   empty sample.
///
/// # Examples
/// ```
/// use u_stochastic::config::SummaryConfig;
/// use u_stochastic::random::MersenneTwister;
/// use u_stochastic::stats::descriptive;
///
/// let mut rng = MersenneTwister::with_seed(1);
/// let mut data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
/// let s = descriptive(&mut data, &mut rng, &SummaryConfig::default()).unwrap();
/// assert_eq!(s.count, 8);
/// assert_eq!(s.mean, 5.0);
/// assert_eq!(s.median, 4.5);
/// assert!((s.variance - 4.571428571428571).abs() < 1e-12);
/// ```
pub fn descriptive<R: RandomSource + ?Sized>(
    data: &mut [f64],
    rng: &mut R,
    config: &SummaryConfig,
) -> Result<DescriptiveSummary> {
    config.validate()?;
    require_len(data, 1, "descriptive summary")?;
    debug!(n = data.len(), bias = ?config.bias, "computing descriptive summary");

    let n = data.len();
    let nf = n as f64;
    let sum = kahan_sum(data);
    let reciprocal_sum: f64 = {
        let r: Vec<f64> = data.iter().map(|x| 1.0 / x).collect();
        kahan_sum(&r)
    };
    let log_sum: f64 = {
        let l: Vec<f64> = data.iter().map(|x| x.ln()).collect();
        kahan_sum(&l)
    };
    let moments = CentralMoments::from_sample(data);

    randomized_quicksort(data, rng)?;
    let min = data[0];
    let max = data[n - 1];

    let variance = moments.variance(config.bias);
    let std_dev = variance.sqrt();
    let std_error = std_dev / nf.sqrt();

    Ok(DescriptiveSummary {
        count: n,
        sum,
        min,
        max,
        range: max - min,
        mean: sum / nf,
        harmonic_mean: nf / reciprocal_sum,
        geometric_mean: (log_sum / nf).exp(),
        trimmed_mean: trimmed_mean_sorted(data, config.trim_fraction)?,
        median: median_sorted(data),
        variance,
        std_dev,
        std_error,
        confidence_half_width: config.confidence_z * std_error,
        first_quartile: quartile_sorted(data, 1)?,
        third_quartile: quartile_sorted(data, 3)?,
        skewness: if n >= 3 {
            moments.skewness(config.bias)
        } else {
            f64::NAN
        },
        kurtosis: if n >= 4 {
            moments.kurtosis(config.bias)
        } else {
            f64::NAN
        },
    })
}
