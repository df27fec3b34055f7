//! Bounded root finding for inverting monotone special functions.
//!
//! The inverses in this crate ([`gamma_inc_inv`](super::gamma_inc_inv),
//! [`betainc_inv`](super::betainc_inv) and the quantile functions built on
//! them) all solve `f(x) = target` for a non-decreasing `f` whose
//! derivative is known in closed form. [`newton_bisect`] keeps a bracket
//! around the root, takes a Newton step whenever it lands inside the
//! bracket and bisects otherwise, so it cannot diverge.

use crate::FloatScalar;
use crate::traits::lit;

/// Settings for the bounded root finders.
#[derive(Debug, Clone, Copy)]
pub struct RootSettings<T> {
    /// Convergence tolerance on the bracket width, relative to `|x|`.
    pub x_tol: T,
    /// Convergence tolerance on the residual `|f(x) - target|`, relative to `|target|`.
    pub f_tol: T,
    /// Maximum number of iterations.
    pub max_iter: usize,
}

impl Default for RootSettings<f64> {
    fn default() -> Self {
        Self {
            x_tol: 1e-15,
            f_tol: 1e-15,
            max_iter: 200,
        }
    }
}

impl Default for RootSettings<f32> {
    fn default() -> Self {
        Self {
            x_tol: 1e-7,
            f_tol: 1e-7,
            max_iter: 100,
        }
    }
}

impl<T: FloatScalar> RootSettings<T> {
    /// Settings scaled to the precision of `T`, for generic callers.
    pub fn for_precision() -> Self {
        let eps = T::epsilon();
        let four = lit::<T>(4.0);
        Self {
            x_tol: four * eps,
            f_tol: four * eps,
            max_iter: 200,
        }
    }
}

/// Solve `f(x) = target` for non-decreasing `f` on the bracket `[lo, hi]`.
///
/// `df` is the derivative of `f`. The start point `x0` is clamped into the
/// bracket. Returns the best estimate after `settings.max_iter` iterations
/// if neither tolerance is met.
pub fn newton_bisect<T: FloatScalar>(
    f: impl Fn(T) -> T,
    df: impl Fn(T) -> T,
    target: T,
    x0: T,
    mut lo: T,
    mut hi: T,
    settings: &RootSettings<T>,
) -> T {
    let two = lit::<T>(2.0);
    let mut x = x0.max(lo).min(hi);

    for _ in 0..settings.max_iter {
        let r = f(x) - target;
        if r.abs() <= settings.f_tol * target.abs().max(T::min_positive_value()) {
            return x;
        }
        if r < T::zero() {
            lo = x;
        } else {
            hi = x;
        }
        if hi - lo <= settings.x_tol * x.abs().max(T::min_positive_value()) {
            return (lo + hi) / two;
        }

        let slope = df(x);
        let newton = if slope > T::zero() && slope.is_finite() {
            x - r / slope
        } else {
            T::nan()
        };
        if newton > lo && newton < hi {
            // Newton steps below the tolerance mean evaluation noise dominates.
            if (newton - x).abs() <= settings.x_tol * x.abs() {
                return newton;
            }
            x = newton;
        } else {
            x = (lo + hi) / two;
        }
    }

    log::debug!(
        "newton_bisect: iteration cap {} reached, returning x = {:?}",
        settings.max_iter,
        x
    );
    x
}

/// Grow `hi` by doubling until `f(hi) >= target`, starting from `start`.
///
/// Stops after a fixed number of doublings (enough to span the f64 range)
/// and returns the last candidate.
pub(crate) fn expand_upper<T: FloatScalar>(f: impl Fn(T) -> T, target: T, start: T) -> T {
    const MAX_DOUBLINGS: usize = 1100;

    let two = lit::<T>(2.0);
    let mut hi = start.max(T::one());
    for _ in 0..MAX_DOUBLINGS {
        if f(hi) >= target || hi.is_infinite() {
            return hi;
        }
        hi = hi * two;
    }
    log::debug!("expand_upper: doubling cap reached at hi = {:?}", hi);
    hi
}
