use core::fmt::Debug;
use num_traits::Float;

/// Trait for the real floating-point types every routine is generic over.
///
/// Blanket-implemented for all types satisfying the bounds, which in
/// practice means `f32` and `f64`.
pub trait FloatScalar: Float + Debug + Send + Sync + 'static {}

impl<T: Float + Debug + Send + Sync + 'static> FloatScalar for T {}

/// Convert an `f64` constant into `T`.
///
/// Every `FloatScalar` can represent (a rounding of) any `f64`, so the
/// NaN fallback is never taken for `f32`/`f64`.
#[inline]
pub(crate) fn lit<T: FloatScalar>(v: f64) -> T {
    T::from(v).unwrap_or_else(T::nan)
}

/// Convert an integer count into `T`.
#[inline]
pub(crate) fn count<T: FloatScalar>(n: u64) -> T {
    T::from(n).unwrap_or_else(T::infinity)
}
