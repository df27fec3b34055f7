use crate::FloatScalar;
use crate::special::{betainc_unchecked, binomial_coefficient, ln_binomial_coefficient};
use crate::traits::{count, lit};
use super::{DiscreteDistribution, MAX_SUMMATION_TERMS, StatsError, Univariate, clamped_pmf_sum, floor_index};

/// Binomial distribution: number of successes in n independent trials,
/// each with success probability p.
///
/// P(X = k) = C(n, k) pᵏ (1−p)ⁿ⁻ᵏ for k = 0, 1, …, n.
///
/// # Example
///
/// ```
/// use univar::stats::{Binomial, DiscreteDistribution, Univariate};
///
/// let b = Binomial::new(0.2_f64, 10).unwrap();
/// assert!((b.pmf(2) - 0.301989888).abs() < 1e-12);
/// assert_eq!(b.cdf(10.0), 1.0);
/// assert!((b.mean().unwrap() - 2.0).abs() < 1e-15);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Binomial<T> {
    p: T,
    n: i64,
}

impl<T: FloatScalar> Binomial<T> {
    /// Create a binomial distribution with success probability `p` and
    /// `n` trials. Requires 0 ≤ p ≤ 1 and n ≥ 0.
    pub fn new(p: T, n: i64) -> Result<Self, StatsError> {
        if !Self::is_valid_parameter_set(p, n) {
            return Err(StatsError::InvalidParameter { distribution: "binomial" });
        }
        Ok(Self { p, n })
    }

    /// Whether `(p, n)` is a valid binomial parametrization.
    pub fn is_valid_parameter_set(p: T, n: i64) -> bool {
        p >= T::zero() && p <= T::one() && n >= 0
    }

    /// Success probability p.
    pub fn p(&self) -> T {
        self.p
    }

    /// Number of trials n.
    pub fn n(&self) -> i64 {
        self.n
    }

    fn trials(&self) -> T {
        count(self.n as u64)
    }

    /// Mass at `k` when 0 < p < 1 and 0 ≤ k ≤ n.
    fn interior_pmf(&self, k: i64) -> T {
        let q = T::one() - self.p;
        match binomial_coefficient(self.n, k) {
            Ok(c) => {
                count::<T>(c) * self.p.powf(count(k as u64)) * q.powf(count((self.n - k) as u64))
            }
            Err(_) => self.interior_ln_pmf(k).exp(),
        }
    }

    fn interior_ln_pmf(&self, k: i64) -> T {
        let (n, k) = (self.n as u64, k as u64);
        ln_binomial_coefficient::<T>(n, k) + count::<T>(k) * self.p.ln()
            + count::<T>(n - k) * (-self.p).ln_1p()
    }
}

impl<T: FloatScalar> Univariate<T> for Binomial<T> {
    fn mean(&self) -> Result<T, StatsError> {
        Ok(self.p * self.trials())
    }

    fn variance(&self) -> Result<T, StatsError> {
        Ok(self.p * (T::one() - self.p) * self.trials())
    }

    fn skewness(&self) -> Result<T, StatsError> {
        let npq = self.variance()?;
        if npq == T::zero() {
            return Err(StatsError::Unsupported {
                quantity: "skewness",
                reason: "requires n·p·(1 − p) > 0",
            });
        }
        Ok((T::one() - lit::<T>(2.0) * self.p) / npq.sqrt())
    }

    /// −Σ pmf(k)·ln pmf(k); 0 for a degenerate distribution.
    fn entropy(&self) -> Result<T, StatsError> {
        if self.p == T::zero() || self.p == T::one() {
            return Ok(T::zero());
        }
        // Walk outward from the mode; terms beyond an exact underflow are zero.
        let mode = floor_index(self.trials() * self.p).unwrap_or(0).clamp(0, self.n);
        let mut h = T::zero();
        for k in (0..=mode).rev() {
            let pk = self.interior_pmf(k);
            if pk == T::zero() {
                break;
            }
            h = h - pk * pk.ln();
        }
        for k in mode + 1..=self.n {
            let pk = self.interior_pmf(k);
            if pk == T::zero() {
                break;
            }
            h = h - pk * pk.ln();
        }
        Ok(h)
    }

    fn median(&self) -> Result<T, StatsError> {
        Ok((self.p * self.trials()).floor())
    }

    fn cdf(&self, x: T) -> T {
        let k = match floor_index(x) {
            Some(k) => k,
            None => return T::nan(),
        };
        if k < 0 {
            return T::zero();
        }
        if k >= self.n {
            return T::one();
        }
        if k <= MAX_SUMMATION_TERMS {
            return clamped_pmf_sum(|i| self.pmf(i), k, self.p * self.trials());
        }
        // P(X ≤ k) = I_{1−p}(n − k, k + 1)
        let nk = count::<T>((self.n - k) as u64);
        betainc_unchecked(nk, count::<T>(k as u64) + T::one(), T::one() - self.p)
    }
}

impl<T: FloatScalar> DiscreteDistribution<T> for Binomial<T> {
    fn min(&self) -> i64 {
        0
    }

    fn max(&self) -> i64 {
        self.n
    }

    fn pmf(&self, k: i64) -> T {
        if k < 0 || k > self.n {
            return T::zero();
        }
        if self.p == T::zero() {
            return if k == 0 { T::one() } else { T::zero() };
        }
        if self.p == T::one() {
            return if k == self.n { T::one() } else { T::zero() };
        }
        self.interior_pmf(k)
    }

    fn ln_pmf(&self, k: i64) -> T {
        if k < 0 || k > self.n {
            return T::neg_infinity();
        }
        if self.p == T::zero() || self.p == T::one() {
            return self.pmf(k).ln();
        }
        self.interior_ln_pmf(k)
    }
}

/// P(X = `k`) for Binomial(`p`, `n`).
pub fn pmf<T: FloatScalar>(p: T, n: i64, k: i64) -> Result<T, StatsError> {
    Ok(Binomial::new(p, n)?.pmf(k))
}

/// ln P(X = `k`) for Binomial(`p`, `n`).
pub fn ln_pmf<T: FloatScalar>(p: T, n: i64, k: i64) -> Result<T, StatsError> {
    Ok(Binomial::new(p, n)?.ln_pmf(k))
}

/// P(X ≤ `x`) for Binomial(`p`, `n`).
pub fn cdf<T: FloatScalar>(p: T, n: i64, x: T) -> Result<T, StatsError> {
    Ok(Binomial::new(p, n)?.cdf(x))
}
