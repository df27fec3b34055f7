//! Beta function and log-beta via lgamma.

use crate::FloatScalar;
use super::SpecialError;
use super::gamma_fn::ln_gamma_pos;

/// Beta function B(a, b) = Γ(a)·Γ(b) / Γ(a+b), for a, b > 0.
///
/// Computed as `exp(lbeta(a, b))` to avoid overflow for large arguments.
///
/// # Example
///
/// ```
/// use univar::special::beta;
///
/// // B(1, 1) = 1
/// assert!((beta(1.0_f64, 1.0).unwrap() - 1.0).abs() < 1e-14);
///
/// // B(2, 3) = 1/12
/// assert!((beta(2.0_f64, 3.0).unwrap() - 1.0 / 12.0).abs() < 1e-14);
/// ```
pub fn beta<T: FloatScalar>(a: T, b: T) -> Result<T, SpecialError> {
    Ok(lbeta(a, b)?.exp())
}

/// Natural logarithm of the beta function, ln B(a, b), for a, b > 0.
///
/// Computed as `lgamma(a) + lgamma(b) − lgamma(a+b)`.
///
/// # Example
///
/// ```
/// use univar::special::lbeta;
///
/// // ln B(1, 1) = 0
/// assert!(lbeta(1.0_f64, 1.0).unwrap().abs() < 1e-14);
/// assert!(lbeta(-1.0_f64, 1.0).is_err());
/// ```
pub fn lbeta<T: FloatScalar>(a: T, b: T) -> Result<T, SpecialError> {
    if !(a > T::zero()) {
        return Err(SpecialError::domain("lbeta", "a"));
    }
    if !(b > T::zero()) {
        return Err(SpecialError::domain("lbeta", "b"));
    }
    Ok(ln_beta_pos(a, b))
}

/// ln B(a, b) for arguments already known to be positive.
pub(crate) fn ln_beta_pos<T: FloatScalar>(a: T, b: T) -> T {
    ln_gamma_pos(a) + ln_gamma_pos(b) - ln_gamma_pos(a + b)
}
