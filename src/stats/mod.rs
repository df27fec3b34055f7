//! Statistical distributions: continuous and discrete.
//!
//! Each distribution implements [`Univariate`] plus either
//! [`ContinuousDistribution`] or [`DiscreteDistribution`], giving every type
//! the same vocabulary: support bounds, density or mass, CDF, and the
//! descriptive moments. Moments that are undefined for the current
//! parameters fail with [`StatsError::Unsupported`] instead of returning a
//! misleading number.
//!
//! Every distribution module also exposes stateless free functions
//! (`pdf`/`pmf`, `cdf`, `inverse_cdf`) taking raw parameters, which validate
//! them exactly like the constructor does.
//!
//! # Continuous distributions
//!
//! | Distribution | Parameters | Support |
//! |---|---|---|
//! | [`Normal`] | mean μ, std dev σ | (−∞, ∞) |
//! | [`Uniform`] | lower a, upper b | [a, b] |
//! | [`Exponential`] | rate λ | [0, ∞) |
//! | [`ChiSquared`] | degrees of freedom k | [0, ∞) |
//! | [`StudentT`] | location μ, scale s, degrees of freedom ν | (−∞, ∞) |
//! | [`FisherSnedecor`] | degrees of freedom d1, d2 | [0, ∞) |
//!
//! # Discrete distributions
//!
//! | Distribution | Parameters | Support |
//! |---|---|---|
//! | [`Binomial`] | probability p, trials n | {0, …, n} |
//! | [`Poisson`] | rate λ | {0, 1, 2, …} |
//!
//! # Example
//!
//! ```
//! use univar::stats::{Normal, ContinuousDistribution, Univariate};
//!
//! let n = Normal::new(0.0_f64, 1.0).unwrap();
//! assert_eq!(n.cdf(0.0), 0.5);
//! assert_eq!(n.mean().unwrap(), 0.0);
//! ```

pub mod normal;
pub mod uniform;
pub mod exponential;
pub mod chi_squared;
pub mod student_t;
pub mod fisher_snedecor;
pub mod binomial;
pub mod poisson;

#[cfg(test)]
mod tests;

pub use normal::Normal;
pub use uniform::Uniform;
pub use exponential::Exponential;
pub use chi_squared::ChiSquared;
pub use student_t::StudentT;
pub use fisher_snedecor::FisherSnedecor;
pub use binomial::Binomial;
pub use poisson::Poisson;

use crate::FloatScalar;
use crate::special::SpecialError;

/// Errors from distribution construction and evaluation.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum StatsError {
    /// The parameter set fails the distribution's validity predicate.
    #[error("invalid parametrization for the {distribution} distribution")]
    InvalidParameter {
        /// Name of the distribution.
        distribution: &'static str,
    },
    /// An evaluation point lies outside the function's domain
    /// (e.g. a probability outside [0, 1]).
    #[error("argument `{argument}` outside its domain")]
    Domain {
        /// Name of the offending argument.
        argument: &'static str,
    },
    /// A derived quantity is mathematically undefined for these parameters.
    #[error("{quantity} is undefined: {reason}")]
    Unsupported {
        /// The quantity requested (e.g. "variance").
        quantity: &'static str,
        /// The parameter condition that makes it undefined.
        reason: &'static str,
    },
    /// A special function rejected its input.
    #[error(transparent)]
    Special(#[from] SpecialError),
}

/// Moments and CDF shared by every univariate distribution.
pub trait Univariate<T: FloatScalar> {
    /// Expected value E\[X\].
    fn mean(&self) -> Result<T, StatsError>;
    /// Variance Var(X).
    fn variance(&self) -> Result<T, StatsError>;
    /// Standard deviation √Var(X).
    fn std_dev(&self) -> Result<T, StatsError> {
        Ok(self.variance()?.sqrt())
    }
    /// Skewness E\[((X − μ)/σ)³\].
    fn skewness(&self) -> Result<T, StatsError>;
    /// Differential (continuous) or Shannon (discrete) entropy, in nats.
    fn entropy(&self) -> Result<T, StatsError>;
    /// Median.
    fn median(&self) -> Result<T, StatsError>;
    /// Cumulative distribution function P(X ≤ x).
    ///
    /// Non-decreasing; 0 at or below the support minimum and 1 at or above
    /// the support maximum.
    fn cdf(&self, x: T) -> T;
}

/// Trait for continuous probability distributions.
pub trait ContinuousDistribution<T: FloatScalar>: Univariate<T> {
    /// Smallest point of the support (may be −∞).
    fn min(&self) -> T;
    /// Largest point of the support (may be +∞).
    fn max(&self) -> T;
    /// Probability density function; 0 outside the support.
    fn pdf(&self, x: T) -> T;
    /// Natural log of the probability density function; −∞ outside the support.
    fn ln_pdf(&self, x: T) -> T;
    /// Quantile function (inverse CDF). Returns x such that P(X ≤ x) = p.
    ///
    /// Fails with [`StatsError::Domain`] for p outside [0, 1]; p = 0 and
    /// p = 1 map to [`min`](Self::min) and [`max`](Self::max).
    fn inverse_cdf(&self, p: T) -> Result<T, StatsError>;
}

/// Trait for discrete probability distributions on the integers.
pub trait DiscreteDistribution<T: FloatScalar>: Univariate<T> {
    /// Smallest point of the support.
    fn min(&self) -> i64;
    /// Largest point of the support (`i64::MAX` for unbounded support).
    fn max(&self) -> i64;
    /// Probability mass function P(X = k); 0 outside the support.
    fn pmf(&self, k: i64) -> T;
    /// Natural log of the probability mass function; −∞ outside the support.
    fn ln_pmf(&self, k: i64) -> T;
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

/// Discrete CDFs sum the mass function up to this many terms and switch to
/// the closed incomplete gamma / beta form beyond it.
pub(crate) const MAX_SUMMATION_TERMS: i64 = 100_000;

/// Reject probabilities outside [0, 1] (and NaN).
pub(crate) fn check_probability<T: FloatScalar>(p: T) -> Result<(), StatsError> {
    if p >= T::zero() && p <= T::one() {
        Ok(())
    } else {
        Err(StatsError::Domain { argument: "p" })
    }
}

/// Sum `pmf(0..=upper)` for a distribution whose mass is unimodal around
/// `mode`, clamping the total to 1.
///
/// Stops early once past the mode and a term has underflowed to exactly
/// zero: every later term is zero as well, so the result is the same as
/// the full sum.
pub(crate) fn clamped_pmf_sum<T: FloatScalar>(pmf: impl Fn(i64) -> T, upper: i64, mode: T) -> T {
    let one = T::one();
    let mut sum = T::zero();
    for k in 0..=upper {
        let term = pmf(k);
        if term == T::zero() && T::from(k).map_or(true, |kf| kf > mode) {
            break;
        }
        sum = sum + term;
    }
    if sum > one { one } else { sum }
}

/// ⌊x⌋ as an `i64`, saturating at the `i64` range. `None` for NaN.
pub(crate) fn floor_index<T: FloatScalar>(x: T) -> Option<i64> {
    if x.is_nan() {
        return None;
    }
    let f = x.floor();
    Some(num_traits::cast::<T, i64>(f).unwrap_or(if f > T::zero() { i64::MAX } else { i64::MIN }))
}
