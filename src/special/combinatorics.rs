//! Factorials and binomial coefficients, exact and in log space.

use crate::FloatScalar;
use crate::traits::count;
use super::SpecialError;
use super::gamma_fn::ln_gamma_pos;

/// Largest n for which n! fits in a `u64`.
const MAX_EXACT_FACTORIAL: i64 = 20;

/// Factorial n! as an exact integer.
///
/// Fails with [`SpecialError::Domain`] for negative `n` and with
/// [`SpecialError::Overflow`] once n! exceeds `u64` (n > 20); use
/// [`ln_factorial`] for larger arguments.
///
/// # Example
///
/// ```
/// use univar::special::factorial;
///
/// assert_eq!(factorial(0).unwrap(), 1);
/// assert_eq!(factorial(10).unwrap(), 3_628_800);
/// assert!(factorial(-1).is_err());
/// ```
pub fn factorial(n: i64) -> Result<u64, SpecialError> {
    if n < 0 {
        return Err(SpecialError::domain("factorial", "n"));
    }
    if n > MAX_EXACT_FACTORIAL {
        return Err(SpecialError::Overflow { function: "factorial" });
    }
    Ok((1..=n as u64).product())
}

/// Binomial coefficient C(n, k), the number of k-subsets of an n-set.
///
/// Returns 0 when `k > n` or `k < 0`. Computed incrementally as
/// r ← r·(n−d+1)/d for d = 1..=min(k, n−k); every intermediate value is
/// itself a binomial coefficient, so the division is exact. Fails with
/// [`SpecialError::Domain`] for negative `n` and [`SpecialError::Overflow`]
/// when the result does not fit in `u64`; use [`ln_binomial_coefficient`]
/// for large `n`.
///
/// # Example
///
/// ```
/// use univar::special::binomial_coefficient;
///
/// assert_eq!(binomial_coefficient(10, 2).unwrap(), 45);
/// assert_eq!(binomial_coefficient(5, 7).unwrap(), 0);
/// ```
pub fn binomial_coefficient(n: i64, k: i64) -> Result<u64, SpecialError> {
    if n < 0 {
        return Err(SpecialError::domain("binomial_coefficient", "n"));
    }
    if k < 0 || k > n {
        return Ok(0);
    }
    let n = n as u128;
    let k = (k as u128).min(n - k as u128);

    let mut r: u128 = 1;
    for d in 1..=k {
        // r = C(n, d-1) ≤ C(n, k) < 2^64 and n < 2^63, so the product fits in u128.
        r = r * (n - d + 1) / d;
        if r > u64::MAX as u128 {
            return Err(SpecialError::Overflow { function: "binomial_coefficient" });
        }
    }
    Ok(r as u64)
}

/// Natural logarithm of n!, computed as ln Γ(n+1).
///
/// Exact integer product for n ≤ 20, log-gamma beyond.
pub fn ln_factorial<T: FloatScalar>(n: u64) -> T {
    if n <= MAX_EXACT_FACTORIAL as u64 {
        let exact: u64 = (1..=n).product();
        return count::<T>(exact).ln();
    }
    ln_gamma_pos(count::<T>(n) + T::one())
}

/// Natural logarithm of C(n, k) via log-gamma differences.
///
/// Returns −∞ (log of zero) when `k > n`.
///
/// # Example
///
/// ```
/// use univar::special::ln_binomial_coefficient;
///
/// // C(10, 2) = 45
/// let v: f64 = ln_binomial_coefficient(10, 2);
/// assert!((v - 45.0_f64.ln()).abs() < 1e-12);
/// ```
pub fn ln_binomial_coefficient<T: FloatScalar>(n: u64, k: u64) -> T {
    if k > n {
        return T::neg_infinity();
    }
    ln_factorial::<T>(n) - ln_factorial::<T>(k) - ln_factorial::<T>(n - k)
}
