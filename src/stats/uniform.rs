use crate::FloatScalar;
use crate::traits::lit;
use super::{ContinuousDistribution, StatsError, Univariate, check_probability};

/// Continuous uniform distribution on [a, b].
///
/// # Example
///
/// ```
/// use univar::stats::{Uniform, ContinuousDistribution, Univariate};
///
/// let u = Uniform::new(2.0_f64, 6.0).unwrap();
/// assert_eq!(u.pdf(3.0), 0.25);
/// assert_eq!(u.cdf(3.0), 0.25);
/// assert_eq!(u.mean().unwrap(), 4.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Uniform<T> {
    a: T,
    b: T,
}

impl<T: FloatScalar> Uniform<T> {
    /// Create a uniform distribution on [`a`, `b`]. Requires finite a < b.
    pub fn new(a: T, b: T) -> Result<Self, StatsError> {
        if !Self::is_valid_parameter_set(a, b) {
            return Err(StatsError::InvalidParameter { distribution: "uniform" });
        }
        Ok(Self { a, b })
    }

    /// Whether `a` and `b` are finite with `a < b`.
    pub fn is_valid_parameter_set(a: T, b: T) -> bool {
        a.is_finite() && b.is_finite() && a < b
    }

    /// Lower bound.
    pub fn lower(&self) -> T {
        self.a
    }

    /// Upper bound.
    pub fn upper(&self) -> T {
        self.b
    }
}

impl<T: FloatScalar> Univariate<T> for Uniform<T> {
    fn mean(&self) -> Result<T, StatsError> {
        Ok((self.a + self.b) * lit(0.5))
    }

    fn variance(&self) -> Result<T, StatsError> {
        let w = self.b - self.a;
        Ok(w * w / lit(12.0))
    }

    fn skewness(&self) -> Result<T, StatsError> {
        Ok(T::zero())
    }

    fn entropy(&self) -> Result<T, StatsError> {
        Ok((self.b - self.a).ln())
    }

    fn median(&self) -> Result<T, StatsError> {
        self.mean()
    }

    fn cdf(&self, x: T) -> T {
        if x <= self.a {
            T::zero()
        } else if x >= self.b {
            T::one()
        } else {
            (x - self.a) / (self.b - self.a)
        }
    }
}

impl<T: FloatScalar> ContinuousDistribution<T> for Uniform<T> {
    fn min(&self) -> T {
        self.a
    }

    fn max(&self) -> T {
        self.b
    }

    fn pdf(&self, x: T) -> T {
        if x >= self.a && x <= self.b {
            T::one() / (self.b - self.a)
        } else {
            T::zero()
        }
    }

    fn ln_pdf(&self, x: T) -> T {
        if x >= self.a && x <= self.b {
            -(self.b - self.a).ln()
        } else {
            T::neg_infinity()
        }
    }

    fn inverse_cdf(&self, p: T) -> Result<T, StatsError> {
        check_probability(p)?;
        if p == T::one() {
            return Ok(self.b);
        }
        Ok(self.a + p * (self.b - self.a))
    }
}

/// Density of Uniform(`a`, `b`) at `x`.
pub fn pdf<T: FloatScalar>(a: T, b: T, x: T) -> Result<T, StatsError> {
    Ok(Uniform::new(a, b)?.pdf(x))
}

/// Log-density of Uniform(`a`, `b`) at `x`.
pub fn ln_pdf<T: FloatScalar>(a: T, b: T, x: T) -> Result<T, StatsError> {
    Ok(Uniform::new(a, b)?.ln_pdf(x))
}

/// CDF of Uniform(`a`, `b`) at `x`.
pub fn cdf<T: FloatScalar>(a: T, b: T, x: T) -> Result<T, StatsError> {
    Ok(Uniform::new(a, b)?.cdf(x))
}

/// Quantile of Uniform(`a`, `b`) at probability `p`.
pub fn inverse_cdf<T: FloatScalar>(a: T, b: T, p: T) -> Result<T, StatsError> {
    Uniform::new(a, b)?.inverse_cdf(p)
}
