use crate::FloatScalar;
use crate::special::{betainc_inv, betainc_unchecked, ln_beta_pos};
use crate::traits::lit;
use super::{ContinuousDistribution, StatsError, Univariate, check_probability};

/// Fisher–Snedecor (F) distribution with d1 and d2 degrees of freedom.
///
/// F(x) = I_{d1·x/(d1·x + d2)}(d1/2, d2/2).
///
/// # Example
///
/// ```
/// use univar::stats::{FisherSnedecor, ContinuousDistribution, Univariate};
///
/// let f = FisherSnedecor::new(3.0_f64, 5.0).unwrap();
/// assert!((f.mean().unwrap() - 5.0 / 3.0).abs() < 1e-15);
/// assert!(f.entropy().is_err());
///
/// let q = f.inverse_cdf(0.9).unwrap();
/// assert!((f.cdf(q) - 0.9).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FisherSnedecor<T> {
    d1: T,
    d2: T,
}

impl<T: FloatScalar> FisherSnedecor<T> {
    /// Create an F distribution. Requires finite `d1 > 0` and `d2 > 0`.
    pub fn new(d1: T, d2: T) -> Result<Self, StatsError> {
        if !Self::is_valid_parameter_set(d1, d2) {
            return Err(StatsError::InvalidParameter { distribution: "fisher-snedecor" });
        }
        Ok(Self { d1, d2 })
    }

    /// Whether both degrees of freedom are finite and positive.
    pub fn is_valid_parameter_set(d1: T, d2: T) -> bool {
        d1 > T::zero() && d1.is_finite() && d2 > T::zero() && d2.is_finite()
    }

    /// Numerator degrees of freedom d1.
    pub fn d1(&self) -> T {
        self.d1
    }

    /// Denominator degrees of freedom d2.
    pub fn d2(&self) -> T {
        self.d2
    }
}

impl<T: FloatScalar> Univariate<T> for FisherSnedecor<T> {
    fn mean(&self) -> Result<T, StatsError> {
        let two = lit::<T>(2.0);
        if self.d2 > two {
            Ok(self.d2 / (self.d2 - two))
        } else {
            Err(StatsError::Unsupported { quantity: "mean", reason: "requires d2 > 2" })
        }
    }

    fn variance(&self) -> Result<T, StatsError> {
        let two = lit::<T>(2.0);
        let four = lit::<T>(4.0);
        if !(self.d2 > four) {
            return Err(StatsError::Unsupported { quantity: "variance", reason: "requires d2 > 4" });
        }
        let (d1, d2) = (self.d1, self.d2);
        Ok(two * d2 * d2 * (d1 + d2 - two) / (d1 * (d2 - two) * (d2 - two) * (d2 - four)))
    }

    fn skewness(&self) -> Result<T, StatsError> {
        let two = lit::<T>(2.0);
        let six = lit::<T>(6.0);
        if !(self.d2 > six) {
            return Err(StatsError::Unsupported { quantity: "skewness", reason: "requires d2 > 6" });
        }
        let (d1, d2) = (self.d1, self.d2);
        Ok((two * d1 + d2 - two) * (lit::<T>(8.0) * (d2 - lit(4.0))).sqrt()
            / ((d2 - six) * (d1 * (d1 + d2 - two)).sqrt()))
    }

    fn entropy(&self) -> Result<T, StatsError> {
        Err(StatsError::Unsupported { quantity: "entropy", reason: "not provided for this distribution" })
    }

    fn median(&self) -> Result<T, StatsError> {
        self.inverse_cdf(lit(0.5))
    }

    fn cdf(&self, x: T) -> T {
        let half = lit::<T>(0.5);
        if !(x > T::zero()) {
            return T::zero();
        }
        if x.is_infinite() {
            return T::one();
        }
        let d1x = self.d1 * x;
        let denom = d1x + self.d2;
        if d1x <= self.d2 {
            betainc_unchecked(self.d1 * half, self.d2 * half, d1x / denom)
        } else {
            // Complementary form keeps the argument away from 1.
            T::one() - betainc_unchecked(self.d2 * half, self.d1 * half, self.d2 / denom)
        }
    }
}

impl<T: FloatScalar> ContinuousDistribution<T> for FisherSnedecor<T> {
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
            return if self.d1 < two {
                T::infinity()
            } else if self.d1 == two {
                T::one()
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
        let half = lit::<T>(0.5);
        let (d1, d2) = (self.d1, self.d2);
        let a = d1 * half;
        let b = d2 * half;
        a * d1.ln() + b * d2.ln() + (a - T::one()) * x.ln() - (a + b) * (d1 * x + d2).ln()
            - ln_beta_pos(a, b)
    }

    fn inverse_cdf(&self, p: T) -> Result<T, StatsError> {
        check_probability(p)?;
        if p == T::one() {
            return Ok(T::infinity());
        }
        let one = T::one();
        let half = lit::<T>(0.5);
        let (a, b) = (self.d1 * half, self.d2 * half);
        if p <= half {
            let u = betainc_inv(a, b, p)?;
            return Ok(self.d2 * u / (self.d1 * (one - u)));
        }
        // Upper half: solve for 1 − u so large quantiles stay accurate.
        let v = betainc_inv(b, a, one - p)?;
        if v <= T::zero() {
            return Ok(T::infinity());
        }
        Ok(self.d2 * (one - v) / (self.d1 * v))
    }
}

/// Density of FisherSnedecor(`d1`, `d2`) at `x`.
pub fn pdf<T: FloatScalar>(d1: T, d2: T, x: T) -> Result<T, StatsError> {
    Ok(FisherSnedecor::new(d1, d2)?.pdf(x))
}

/// Log-density of FisherSnedecor(`d1`, `d2`) at `x`.
pub fn ln_pdf<T: FloatScalar>(d1: T, d2: T, x: T) -> Result<T, StatsError> {
    Ok(FisherSnedecor::new(d1, d2)?.ln_pdf(x))
}

/// CDF of FisherSnedecor(`d1`, `d2`) at `x`.
pub fn cdf<T: FloatScalar>(d1: T, d2: T, x: T) -> Result<T, StatsError> {
    Ok(FisherSnedecor::new(d1, d2)?.cdf(x))
}

/// Quantile of FisherSnedecor(`d1`, `d2`) at probability `p`.
pub fn inverse_cdf<T: FloatScalar>(d1: T, d2: T, p: T) -> Result<T, StatsError> {
    FisherSnedecor::new(d1, d2)?.inverse_cdf(p)
}
