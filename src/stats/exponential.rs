use crate::FloatScalar;
use crate::traits::lit;
use super::{ContinuousDistribution, StatsError, Univariate, check_probability};

/// Exponential distribution with rate λ.
///
/// f(x) = λ e^{−λx} for x ≥ 0.
///
/// # Example
///
/// ```
/// use univar::stats::{Exponential, ContinuousDistribution, Univariate};
///
/// let e = Exponential::new(2.0_f64).unwrap();
/// assert_eq!(e.pdf(0.0), 2.0);
/// assert!((e.cdf(1.0) - (1.0 - (-2.0_f64).exp())).abs() < 1e-15);
/// assert_eq!(e.mean().unwrap(), 0.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Exponential<T> {
    rate: T,
}

impl<T: FloatScalar> Exponential<T> {
    /// Create an exponential distribution. Requires finite `rate > 0`.
    pub fn new(rate: T) -> Result<Self, StatsError> {
        if !Self::is_valid_parameter_set(rate) {
            return Err(StatsError::InvalidParameter { distribution: "exponential" });
        }
        Ok(Self { rate })
    }

    /// Whether `rate` is finite and positive.
    pub fn is_valid_parameter_set(rate: T) -> bool {
        rate > T::zero() && rate.is_finite()
    }

    /// Rate λ.
    pub fn rate(&self) -> T {
        self.rate
    }
}

impl<T: FloatScalar> Univariate<T> for Exponential<T> {
    fn mean(&self) -> Result<T, StatsError> {
        Ok(self.rate.recip())
    }

    fn variance(&self) -> Result<T, StatsError> {
        Ok((self.rate * self.rate).recip())
    }

    fn std_dev(&self) -> Result<T, StatsError> {
        Ok(self.rate.recip())
    }

    fn skewness(&self) -> Result<T, StatsError> {
        Ok(lit(2.0))
    }

    fn entropy(&self) -> Result<T, StatsError> {
        Ok(T::one() - self.rate.ln())
    }

    fn median(&self) -> Result<T, StatsError> {
        Ok(lit::<T>(core::f64::consts::LN_2) / self.rate)
    }

    fn cdf(&self, x: T) -> T {
        if x <= T::zero() {
            return T::zero();
        }
        // 1 − e^{−λx} without cancellation for small λx
        -(-self.rate * x).exp_m1()
    }
}

impl<T: FloatScalar> ContinuousDistribution<T> for Exponential<T> {
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
        self.rate * (-self.rate * x).exp()
    }

    fn ln_pdf(&self, x: T) -> T {
        if x < T::zero() {
            return T::neg_infinity();
        }
        self.rate.ln() - self.rate * x
    }

    fn inverse_cdf(&self, p: T) -> Result<T, StatsError> {
        check_probability(p)?;
        if p == T::one() {
            return Ok(T::infinity());
        }
        Ok(-(-p).ln_1p() / self.rate)
    }
}

/// Density of Exponential(`rate`) at `x`.
pub fn pdf<T: FloatScalar>(rate: T, x: T) -> Result<T, StatsError> {
    Ok(Exponential::new(rate)?.pdf(x))
}

/// Log-density of Exponential(`rate`) at `x`.
pub fn ln_pdf<T: FloatScalar>(rate: T, x: T) -> Result<T, StatsError> {
    Ok(Exponential::new(rate)?.ln_pdf(x))
}

/// CDF of Exponential(`rate`) at `x`.
pub fn cdf<T: FloatScalar>(rate: T, x: T) -> Result<T, StatsError> {
    Ok(Exponential::new(rate)?.cdf(x))
}

/// Quantile of Exponential(`rate`) at probability `p`.
pub fn inverse_cdf<T: FloatScalar>(rate: T, p: T) -> Result<T, StatsError> {
    Exponential::new(rate)?.inverse_cdf(p)
}
