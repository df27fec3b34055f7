use crate::FloatScalar;
use crate::special::{factorial, gamma_inc_pair, ln_factorial};
use crate::traits::{count, lit};
use super::{DiscreteDistribution, MAX_SUMMATION_TERMS, StatsError, Univariate, clamped_pmf_sum, floor_index};

/// Below this rate the entropy is summed term by term; above it the
/// asymptotic expansion in 1/λ is used.
const ENTROPY_SERIES_LIMIT: f64 = 10.0;

/// Poisson distribution with rate λ.
///
/// P(X = k) = λᵏ e^{−λ} / k! for k = 0, 1, 2, …
///
/// # Example
///
/// ```
/// use univar::stats::{Poisson, DiscreteDistribution, Univariate};
///
/// let p = Poisson::new(3.0_f64).unwrap();
/// assert!((p.pmf(0) - (-3.0_f64).exp()).abs() < 1e-15);
/// assert!((p.cdf(1.0) - 4.0 * (-3.0_f64).exp()).abs() < 1e-15);
/// assert_eq!(p.median().unwrap(), 3.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Poisson<T> {
    lambda: T,
}

impl<T: FloatScalar> Poisson<T> {
    /// Create a Poisson distribution. Requires finite `lambda > 0`.
    pub fn new(lambda: T) -> Result<Self, StatsError> {
        if !Self::is_valid_parameter_set(lambda) {
            return Err(StatsError::InvalidParameter { distribution: "poisson" });
        }
        Ok(Self { lambda })
    }

    /// `true` for finite `lambda > 0`.
    pub fn is_valid_parameter_set(lambda: T) -> bool {
        lambda > T::zero() && lambda.is_finite()
    }

    /// Rate λ.
    pub fn lambda(&self) -> T {
        self.lambda
    }
}

impl<T: FloatScalar> Univariate<T> for Poisson<T> {
    fn mean(&self) -> Result<T, StatsError> {
        Ok(self.lambda)
    }

    fn variance(&self) -> Result<T, StatsError> {
        Ok(self.lambda)
    }

    fn skewness(&self) -> Result<T, StatsError> {
        Ok(self.lambda.sqrt().recip())
    }

    fn entropy(&self) -> Result<T, StatsError> {
        let l = self.lambda;
        if l < lit(ENTROPY_SERIES_LIMIT) {
            let mut h = T::zero();
            for k in 0..=MAX_SUMMATION_TERMS {
                let pk = self.pmf(k);
                if pk == T::zero() {
                    if count::<T>(k as u64) > l {
                        break;
                    }
                    continue;
                }
                h = h - pk * pk.ln();
            }
            return Ok(h);
        }
        // ½ln(2πeλ) − 1/(12λ) − 1/(24λ²) − 19/(360λ³)
        let two_pi_e = lit::<T>(core::f64::consts::TAU * core::f64::consts::E);
        let l2 = l * l;
        Ok(lit::<T>(0.5) * (two_pi_e * l).ln()
            - (lit::<T>(12.0) * l).recip()
            - (lit::<T>(24.0) * l2).recip()
            - lit::<T>(19.0) / (lit::<T>(360.0) * l2 * l))
    }

    /// ⌊λ + 1/3 − 0.02/λ⌋, clamped to the support for small λ.
    fn median(&self) -> Result<T, StatsError> {
        let l = self.lambda;
        Ok((l + lit(1.0 / 3.0) - lit::<T>(0.02) / l).floor().max(T::zero()))
    }

    fn cdf(&self, x: T) -> T {
        if x.is_infinite() && x > T::zero() {
            return T::one();
        }
        let k = match floor_index(x) {
            Some(k) => k,
            None => return T::nan(),
        };
        if k < 0 {
            return T::zero();
        }
        if k <= MAX_SUMMATION_TERMS {
            return clamped_pmf_sum(|i| self.pmf(i), k, self.lambda);
        }
        // P(X ≤ k) = Q(k + 1, λ)
        gamma_inc_pair(count::<T>(k as u64) + T::one(), self.lambda).1
    }
}

impl<T: FloatScalar> DiscreteDistribution<T> for Poisson<T> {
    fn min(&self) -> i64 {
        0
    }

    fn max(&self) -> i64 {
        i64::MAX
    }

    fn pmf(&self, k: i64) -> T {
        if k < 0 {
            return T::zero();
        }
        if let Ok(f) = factorial(k) {
            // The direct product needs e^(−λ) normal and λ^k finite.
            let decay = (-self.lambda).exp();
            let power = self.lambda.powf(count(k as u64));
            if decay >= T::min_positive_value() && power.is_finite() {
                return decay * power / count(f);
            }
        }
        self.ln_pmf(k).exp()
    }

    fn ln_pmf(&self, k: i64) -> T {
        if k < 0 {
            return T::neg_infinity();
        }
        let ku = k as u64;
        count::<T>(ku) * self.lambda.ln() - self.lambda - ln_factorial::<T>(ku)
    }
}

/// P(X = `k`) for Poisson(`lambda`).
pub fn pmf<T: FloatScalar>(lambda: T, k: i64) -> Result<T, StatsError> {
    Ok(Poisson::new(lambda)?.pmf(k))
}

/// ln P(X = `k`) for Poisson(`lambda`).
pub fn ln_pmf<T: FloatScalar>(lambda: T, k: i64) -> Result<T, StatsError> {
    Ok(Poisson::new(lambda)?.ln_pmf(k))
}

/// P(X ≤ `x`) for Poisson(`lambda`).
pub fn cdf<T: FloatScalar>(lambda: T, x: T) -> Result<T, StatsError> {
    Ok(Poisson::new(lambda)?.cdf(x))
}
