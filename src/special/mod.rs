//! Special mathematical functions.
//!
//! Provides the combinatorial primitives, gamma, digamma, beta, regularized
//! incomplete gamma and beta (with inverses), and error functions that the
//! distributions in [`crate::stats`] are built on. All functions are generic
//! over [`FloatScalar`] (f32/f64), no-std compatible, and stack-only.
//!
//! Every series, continued fraction and root-find is capped at a fixed
//! iteration count. A loop that reaches its cap returns the best estimate
//! so far and emits a `debug` record through the `log` facade.
//!
//! # Functions
//!
//! | Function | Description |
//! |----------|-------------|
//! | [`factorial`] | Exact n! for 0 ≤ n ≤ 20 |
//! | [`binomial_coefficient`] | Exact C(n, k) while it fits in `u64` |
//! | [`ln_factorial`] | ln n! via ln Γ(n+1) |
//! | [`ln_binomial_coefficient`] | ln C(n, k) via log-gamma differences |
//! | [`gamma`] | Gamma function Γ(x) |
//! | [`lgamma`] | Log-gamma ln Γ(x) |
//! | [`digamma`] | Digamma ψ(x) = d/dx ln Γ(x) |
//! | [`beta`] | Beta function B(a,b) = Γ(a)Γ(b)/Γ(a+b) |
//! | [`lbeta`] | Log-beta ln B(a,b) |
//! | [`gamma_inc`] | Regularized lower incomplete gamma P(a,x) |
//! | [`gamma_inc_upper`] | Regularized upper incomplete gamma Q(a,x) = 1−P(a,x) |
//! | [`gamma_inc_inv`] | Inverse of P(a,·) |
//! | [`betainc`] | Regularized incomplete beta I_x(a,b) |
//! | [`betainc_inv`] | Inverse of I_·(a,b) |
//! | [`erf`] | Error function |
//! | [`erfc`] | Complementary error function 1−erf(x) |
//! | [`erfc_inv`] | Inverse complementary error function |
//! | [`erf_inv`] | Inverse error function |
//! | [`erf_approx`] | Abramowitz & Stegun 7.1.26 erf, error < 1.5e-7 |
//!
//! # Example
//!
//! ```
//! use univar::special::{gamma, lgamma, betainc, erf, erfc};
//!
//! // Γ(5) = 4! = 24
//! assert!((gamma(5.0_f64).unwrap() - 24.0).abs() < 1e-12);
//!
//! // ln Γ(1) = 0
//! assert!(lgamma(1.0_f64).unwrap().abs() < 1e-14);
//!
//! // I_x(a,b) = 1 − I_{1−x}(b,a)
//! let lhs = betainc(2.0_f64, 3.0, 0.3).unwrap();
//! let rhs = 1.0 - betainc(3.0_f64, 2.0, 0.7).unwrap();
//! assert!((lhs - rhs).abs() < 1e-14);
//!
//! // erf(x) + erfc(x) = 1
//! assert!((erf(0.7_f64) + erfc(0.7_f64) - 1.0).abs() < 1e-15);
//! ```

use crate::FloatScalar;
use crate::traits::lit;

mod combinatorics;
mod gamma_fn;
mod digamma_fn;
mod beta_fn;
mod incgamma;
mod betainc;
mod erf_fn;
pub mod root;


pub use combinatorics::{binomial_coefficient, factorial, ln_binomial_coefficient, ln_factorial};
pub use gamma_fn::{gamma, lgamma};
pub use digamma_fn::digamma;
pub use beta_fn::{beta, lbeta};
pub use incgamma::{gamma_inc, gamma_inc_inv, gamma_inc_inv_with, gamma_inc_upper};
pub use betainc::{betainc, betainc_inv, betainc_inv_with};
pub use erf_fn::{erf, erf_approx, erf_inv, erfc, erfc_inv};
pub use root::RootSettings;

pub(crate) use gamma_fn::ln_gamma_pos;
pub(crate) use incgamma::gamma_inc_pair;
pub(crate) use beta_fn::ln_beta_pos;
pub(crate) use betainc::betainc_unchecked;

/// Errors from special function evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SpecialError {
    /// An argument lies outside the function's mathematical domain.
    #[error("{function}: argument `{argument}` outside function domain")]
    Domain {
        /// Name of the function that rejected the input.
        function: &'static str,
        /// Name of the offending argument.
        argument: &'static str,
    },
    /// The exact integer result does not fit in `u64`.
    #[error("{function}: result exceeds the u64 range")]
    Overflow {
        /// Name of the function whose result overflowed.
        function: &'static str,
    },
}

impl SpecialError {
    pub(crate) const fn domain(function: &'static str, argument: &'static str) -> Self {
        Self::Domain { function, argument }
    }
}

/// Floor used by the modified Lentz algorithm in place of an exact zero.
#[inline]
pub(crate) fn lentz_tiny<T: FloatScalar>() -> T {
    T::min_positive_value() / T::epsilon()
}

// ---------------------------------------------------------------------------
// Lanczos approximation constants (g = 7, n = 9)
// Coefficients from Paul Godfrey / Boost / CPython.
// ---------------------------------------------------------------------------

/// Lanczos parameter g.
pub(crate) const LANCZOS_G: f64 = 7.0;

/// Lanczos series coefficients (n = 9).
pub(crate) const LANCZOS_COEFFS: [f64; 9] = [
    0.99999999999980993,
    676.5203681218851,
    -1259.1392167224028,
    771.32342877765313,
    -176.61502916214059,
    12.507343278686905,
    -0.13857109526572012,
    9.9843695780195716e-6,
    1.5056327351493116e-7,
];

/// Evaluate the Lanczos series Ag(z) = c0 + c1/(z+1) + c2/(z+2) + ...
#[inline]
pub(crate) fn lanczos_sum<T: FloatScalar>(z: T) -> T {
    let mut sum = lit::<T>(LANCZOS_COEFFS[0]);
    for (i, &c) in LANCZOS_COEFFS[1..].iter().enumerate() {
        let denom = z + lit::<T>((i + 1) as f64);
        sum = sum + lit::<T>(c) / denom;
    }
    sum
}
