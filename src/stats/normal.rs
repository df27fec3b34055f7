//! Normal (Gaussian) distribution.

use crate::FloatScalar;
use crate::special::{erfc, erfc_inv};
use crate::traits::lit;
use super::{ContinuousDistribution, StatsError, Univariate, check_probability};

/// ½·ln(2πe), the entropy of the standard normal.
const HALF_LN_2PI_E: f64 = 1.4189385332046727;

/// Normal (Gaussian) distribution N(μ, σ²).
///
/// # Example
///
/// ```
/// use univar::stats::{Normal, ContinuousDistribution, Univariate};
///
/// let n = Normal::new(0.0_f64, 1.0).unwrap();
/// assert_eq!(n.cdf(0.0), 0.5);
/// assert!((n.pdf(0.0) - 0.3989422804014327).abs() < 1e-15);
/// assert!((n.inverse_cdf(0.975).unwrap() - 1.959963984540054).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Normal<T> {
    mu: T,
    sigma: T,
}

impl<T: FloatScalar> Normal<T> {
    /// Create a normal distribution with mean `mu` and standard deviation `sigma`.
    ///
    /// Requires finite `mu` and finite `sigma > 0`.
    pub fn new(mu: T, sigma: T) -> Result<Self, StatsError> {
        if !Self::is_valid_parameter_set(mu, sigma) {
            return Err(StatsError::InvalidParameter { distribution: "normal" });
        }
        Ok(Self { mu, sigma })
    }

    /// The standard normal N(0, 1).
    pub fn standard() -> Self {
        Self { mu: T::zero(), sigma: T::one() }
    }

    /// Whether `(mu, sigma)` parametrizes a normal distribution.
    pub fn is_valid_parameter_set(mu: T, sigma: T) -> bool {
        mu.is_finite() && sigma > T::zero() && sigma.is_finite()
    }

    /// Mean μ.
    pub fn mu(&self) -> T {
        self.mu
    }

    /// Standard deviation σ.
    pub fn sigma(&self) -> T {
        self.sigma
    }

    /// Precision 1/σ².
    pub fn precision(&self) -> T {
        T::one() / (self.sigma * self.sigma)
    }
}

impl<T: FloatScalar> Univariate<T> for Normal<T> {
    fn mean(&self) -> Result<T, StatsError> {
        Ok(self.mu)
    }

    fn variance(&self) -> Result<T, StatsError> {
        Ok(self.sigma * self.sigma)
    }

    fn std_dev(&self) -> Result<T, StatsError> {
        Ok(self.sigma)
    }

    fn skewness(&self) -> Result<T, StatsError> {
        Ok(T::zero())
    }

    fn entropy(&self) -> Result<T, StatsError> {
        Ok(self.sigma.ln() + lit(HALF_LN_2PI_E))
    }

    fn median(&self) -> Result<T, StatsError> {
        Ok(self.mu)
    }

    fn cdf(&self, x: T) -> T {
        let half = lit::<T>(0.5);
        let sqrt2 = lit::<T>(core::f64::consts::SQRT_2);
        half * erfc((self.mu - x) / (self.sigma * sqrt2))
    }
}

impl<T: FloatScalar> ContinuousDistribution<T> for Normal<T> {
    fn min(&self) -> T {
        T::neg_infinity()
    }

    fn max(&self) -> T {
        T::infinity()
    }

    fn pdf(&self, x: T) -> T {
        let two = lit::<T>(2.0);
        let pi = lit::<T>(core::f64::consts::PI);
        let z = (x - self.mu) / self.sigma;
        (-(z * z) / two).exp() / (self.sigma * (two * pi).sqrt())
    }

    fn ln_pdf(&self, x: T) -> T {
        let two = lit::<T>(2.0);
        let pi = lit::<T>(core::f64::consts::PI);
        let z = (x - self.mu) / self.sigma;
        -self.sigma.ln() - (two * pi).ln() / two - z * z / two
    }

    fn inverse_cdf(&self, p: T) -> Result<T, StatsError> {
        check_probability(p)?;
        if p == T::zero() {
            return Ok(T::neg_infinity());
        }
        if p == T::one() {
            return Ok(T::infinity());
        }
        let sqrt2 = lit::<T>(core::f64::consts::SQRT_2);
        let two = lit::<T>(2.0);
        Ok(self.mu - self.sigma * sqrt2 * erfc_inv(two * p)?)
    }
}

/// Density of N(`mu`, `sigma`²) at `x`.
pub fn pdf<T: FloatScalar>(mu: T, sigma: T, x: T) -> Result<T, StatsError> {
    Ok(Normal::new(mu, sigma)?.pdf(x))
}

/// Log-density of N(`mu`, `sigma`²) at `x`.
pub fn ln_pdf<T: FloatScalar>(mu: T, sigma: T, x: T) -> Result<T, StatsError> {
    Ok(Normal::new(mu, sigma)?.ln_pdf(x))
}

/// CDF of N(`mu`, `sigma`²) at `x`.
pub fn cdf<T: FloatScalar>(mu: T, sigma: T, x: T) -> Result<T, StatsError> {
    Ok(Normal::new(mu, sigma)?.cdf(x))
}

/// Quantile of N(`mu`, `sigma`²) at probability `p`.
pub fn inverse_cdf<T: FloatScalar>(mu: T, sigma: T, p: T) -> Result<T, StatsError> {
    Normal::new(mu, sigma)?.inverse_cdf(p)
}
