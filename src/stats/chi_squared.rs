use crate::FloatScalar;
use crate::special::{digamma, gamma_inc_inv, gamma_inc_pair, ln_gamma_pos};
use crate::traits::lit;
use super::{ContinuousDistribution, StatsError, Univariate, check_probability};

/// Chi-squared distribution with k degrees of freedom.
///
/// f(x) = x^{k/2−1} e^{−x/2} / (2^{k/2} Γ(k/2)) for x ≥ 0.
/// The CDF is P(k/2, x/2) and the quantile inverts it exactly.
///
/// # Example
///
/// ```
/// use univar::stats::{ChiSquared, ContinuousDistribution, Univariate};
///
/// let c = ChiSquared::new(2.0_f64).unwrap();
/// // k = 2 is Exponential(1/2)
/// assert!((c.cdf(2.0) - (1.0 - (-1.0_f64).exp())).abs() < 1e-14);
/// assert_eq!(c.mean().unwrap(), 2.0);
///
/// let q = c.inverse_cdf(0.95).unwrap();
/// assert!((c.cdf(q) - 0.95).abs() < 1e-13);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChiSquared<T> {
    k: T,
}

impl<T: FloatScalar> ChiSquared<T> {
    /// Create a chi-squared distribution. Requires finite `k > 0`.
    pub fn new(k: T) -> Result<Self, StatsError> {
        if !Self::is_valid_parameter_set(k) {
            return Err(StatsError::InvalidParameter { distribution: "chi-squared" });
        }
        Ok(Self { k })
    }

    /// `true` for finite `k > 0`.
    pub fn is_valid_parameter_set(k: T) -> bool {
        k > T::zero() && k.is_finite()
    }

    /// Degrees of freedom k.
    pub fn dof(&self) -> T {
        self.k
    }

    fn half_k(&self) -> T {
        self.k * lit(0.5)
    }
}

impl<T: FloatScalar> Univariate<T> for ChiSquared<T> {
    fn mean(&self) -> Result<T, StatsError> {
        Ok(self.k)
    }

    fn variance(&self) -> Result<T, StatsError> {
        Ok(self.k + self.k)
    }

    fn skewness(&self) -> Result<T, StatsError> {
        Ok((lit::<T>(8.0) / self.k).sqrt())
    }

    /// k/2 + ln(2Γ(k/2)) + (1 − k/2) ψ(k/2).
    fn entropy(&self) -> Result<T, StatsError> {
        let h = self.half_k();
        let two = lit::<T>(2.0);
        Ok(h + two.ln() + ln_gamma_pos(h) + (T::one() - h) * digamma(h)?)
    }

    fn median(&self) -> Result<T, StatsError> {
        self.inverse_cdf(lit(0.5))
    }

    fn cdf(&self, x: T) -> T {
        if !(x > T::zero()) {
            return T::zero();
        }
        gamma_inc_pair(self.half_k(), x * lit(0.5)).0
    }
}

impl<T: FloatScalar> ContinuousDistribution<T> for ChiSquared<T> {
    fn min(&self) -> T {
        T::zero()
    }

    fn max(&self) -> T {
        T::infinity()
    }

    fn pdf(&self, x: T) -> T {
        if x < T::zero() {
            return T::zero();
        }
        if x == T::zero() {
            let two = lit::<T>(2.0);
            return if self.k < two {
                T::infinity()
            } else if self.k == two {
                lit(0.5)
            } else {
                T::zero()
            };
        }
        self.ln_pdf(x).exp()
    }

    fn ln_pdf(&self, x: T) -> T {
        if x < T::zero() {
            return T::neg_infinity();
        }
        if x == T::zero() {
            return self.pdf(x).ln();
        }
        let h = self.half_k();
        let two = lit::<T>(2.0);
        (h - T::one()) * x.ln() - x / two - h * two.ln() - ln_gamma_pos(h)
    }

    fn inverse_cdf(&self, p: T) -> Result<T, StatsError> {
        check_probability(p)?;
        let x = gamma_inc_inv(self.half_k(), p)?;
        Ok(x + x)
    }
}

/// Density of ChiSquared(`k`) at `x`.
pub fn pdf<T: FloatScalar>(k: T, x: T) -> Result<T, StatsError> {
    Ok(ChiSquared::new(k)?.pdf(x))
}

/// Log-density of ChiSquared(`k`) at `x`.
pub fn ln_pdf<T: FloatScalar>(k: T, x: T) -> Result<T, StatsError> {
    Ok(ChiSquared::new(k)?.ln_pdf(x))
}

/// CDF of ChiSquared(`k`) at `x`.
pub fn cdf<T: FloatScalar>(k: T, x: T) -> Result<T, StatsError> {
    Ok(ChiSquared::new(k)?.cdf(x))
}

/// Quantile of ChiSquared(`k`) at probability `p`.
pub fn inverse_cdf<T: FloatScalar>(k: T, p: T) -> Result<T, StatsError> {
    ChiSquared::new(k)?.inverse_cdf(p)
}
