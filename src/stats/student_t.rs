use crate::FloatScalar;
use crate::special::{betainc_inv, betainc_unchecked, digamma, erfc, erfc_inv, ln_beta_pos, ln_gamma_pos};
use crate::traits::lit;
use super::{ContinuousDistribution, StatsError, Univariate, check_probability};

/// Above this many degrees of freedom the density is evaluated as a normal.
const NORMAL_LIMIT_DOF: f64 = 1e8;

/// ½·ln(2πe)
const HALF_LN_2PI_E: f64 = 1.4189385332046727;

/// Location-scale Student's t distribution with ν degrees of freedom.
///
/// With z = (x − μ)/s,
/// f(x) = Γ((ν+1)/2) / (Γ(ν/2) √(νπ) s) · (1 + z²/ν)^{−(ν+1)/2}.
///
/// ν = +∞ is accepted and behaves as N(μ, s²).
///
/// # Example
///
/// ```
/// use univar::stats::{StudentT, ContinuousDistribution, Univariate};
///
/// let t = StudentT::new(0.0_f64, 1.0, 5.0).unwrap();
/// assert_eq!(t.cdf(0.0), 0.5);
/// assert!((t.cdf(2.015048373333024) - 0.95).abs() < 1e-12);
/// assert!((t.variance().unwrap() - 5.0 / 3.0).abs() < 1e-15);
///
/// // ν = 1 is Cauchy: no mean
/// assert!(StudentT::new(0.0_f64, 1.0, 1.0).unwrap().mean().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StudentT<T> {
    location: T,
    scale: T,
    dof: T,
}

impl<T: FloatScalar> StudentT<T> {
    /// Create a Student's t distribution.
    ///
    /// Requires finite `location`, finite `scale > 0` and `dof > 0`
    /// (`dof` may be +∞).
    pub fn new(location: T, scale: T, dof: T) -> Result<Self, StatsError> {
        if !Self::is_valid_parameter_set(location, scale, dof) {
            return Err(StatsError::InvalidParameter { distribution: "student-t" });
        }
        Ok(Self { location, scale, dof })
    }

    /// The standard t distribution with one degree of freedom.
    pub fn standard() -> Self {
        Self { location: T::zero(), scale: T::one(), dof: T::one() }
    }

    /// Whether `(location, scale, dof)` parametrizes a Student t distribution.
    /// An infinite `dof` is accepted.
    pub fn is_valid_parameter_set(location: T, scale: T, dof: T) -> bool {
        location.is_finite() && scale > T::zero() && scale.is_finite() && dof > T::zero()
    }

    /// Location μ.
    pub fn location(&self) -> T {
        self.location
    }

    /// Scale s.
    pub fn scale(&self) -> T {
        self.scale
    }

    /// Degrees of freedom ν.
    pub fn dof(&self) -> T {
        self.dof
    }

    fn standardize(&self, x: T) -> T {
        (x - self.location) / self.scale
    }
}

impl<T: FloatScalar> Univariate<T> for StudentT<T> {
    fn mean(&self) -> Result<T, StatsError> {
        if self.dof > T::one() {
            Ok(self.location)
        } else {
            Err(StatsError::Unsupported { quantity: "mean", reason: "requires dof > 1" })
        }
    }

    fn variance(&self) -> Result<T, StatsError> {
        let one = T::one();
        let two = lit::<T>(2.0);
        let s2 = self.scale * self.scale;
        if self.dof.is_infinite() {
            Ok(s2)
        } else if self.dof > two {
            Ok(self.dof * s2 / (self.dof - two))
        } else if self.dof > one {
            Ok(T::infinity())
        } else {
            Err(StatsError::Unsupported { quantity: "variance", reason: "requires dof > 1" })
        }
    }

    fn skewness(&self) -> Result<T, StatsError> {
        if self.dof > lit(3.0) {
            Ok(T::zero())
        } else {
            Err(StatsError::Unsupported { quantity: "skewness", reason: "requires dof > 3" })
        }
    }

    /// (ν+1)/2 · (ψ((ν+1)/2) − ψ(ν/2)) + ln(√ν · B(ν/2, 1/2)) + ln s.
    fn entropy(&self) -> Result<T, StatsError> {
        if self.dof.is_infinite() {
            return Ok(self.scale.ln() + lit(HALF_LN_2PI_E));
        }
        let half = lit::<T>(0.5);
        let n = self.dof;
        let a = (n + T::one()) * half;
        let b = n * half;
        Ok(a * (digamma(a)? - digamma(b)?) + half * n.ln() + ln_beta_pos(b, half) + self.scale.ln())
    }

    fn median(&self) -> Result<T, StatsError> {
        Ok(self.location)
    }

    fn cdf(&self, x: T) -> T {
        let half = lit::<T>(0.5);
        let z = self.standardize(x);
        if self.dof.is_infinite() {
            return half * erfc(-z / lit(core::f64::consts::SQRT_2));
        }
        let h = self.dof / (self.dof + z * z);
        let tail = half * betainc_unchecked(self.dof * half, half, h);
        if z <= T::zero() { tail } else { T::one() - tail }
    }
}

impl<T: FloatScalar> ContinuousDistribution<T> for StudentT<T> {
    fn min(&self) -> T {
        T::neg_infinity()
    }

    fn max(&self) -> T {
        T::infinity()
    }

    fn pdf(&self, x: T) -> T {
        self.ln_pdf(x).exp()
    }

    fn ln_pdf(&self, x: T) -> T {
        let half = lit::<T>(0.5);
        let z = self.standardize(x);
        if self.dof >= lit(NORMAL_LIMIT_DOF) {
            let two_pi = lit::<T>(core::f64::consts::TAU);
            return -half * z * z - half * two_pi.ln() - self.scale.ln();
        }
        let n = self.dof;
        let a = (n + T::one()) * half;
        let pi = lit::<T>(core::f64::consts::PI);
        ln_gamma_pos(a) - ln_gamma_pos(n * half) - half * (n * pi).ln() - self.scale.ln()
            - a * (z * z / n).ln_1p()
    }

    fn inverse_cdf(&self, p: T) -> Result<T, StatsError> {
        check_probability(p)?;
        let half = lit::<T>(0.5);
        if p == T::zero() {
            return Ok(T::neg_infinity());
        }
        if p == T::one() {
            return Ok(T::infinity());
        }
        if p == half {
            return Ok(self.location);
        }
        if self.dof.is_infinite() {
            let z = -lit::<T>(core::f64::consts::SQRT_2) * erfc_inv(p + p)?;
            return Ok(self.location + self.scale * z);
        }

        // I_h(ν/2, 1/2) = 2·min(p, 1 − p) with h = ν/(ν + z²). Near the
        // centre solve for 1 − h directly so z keeps its relative precision.
        let one = T::one();
        let tail = if p < half { p } else { one - p };
        let two_tail = tail + tail;
        let t = if two_tail < half {
            let h = betainc_inv(self.dof * half, half, two_tail)?;
            (self.dof * (one - h) / h).sqrt()
        } else {
            let w = betainc_inv(half, self.dof * half, one - two_tail)?;
            (self.dof * w / (one - w)).sqrt()
        };
        let z = if p < half { -t } else { t };
        Ok(self.location + self.scale * z)
    }
}

/// Density of StudentT(`location`, `scale`, `dof`) at `x`.
pub fn pdf<T: FloatScalar>(location: T, scale: T, dof: T, x: T) -> Result<T, StatsError> {
    Ok(StudentT::new(location, scale, dof)?.pdf(x))
}

/// Log-density of StudentT(`location`, `scale`, `dof`) at `x`.
pub fn ln_pdf<T: FloatScalar>(location: T, scale: T, dof: T, x: T) -> Result<T, StatsError> {
    Ok(StudentT::new(location, scale, dof)?.ln_pdf(x))
}

/// CDF of StudentT(`location`, `scale`, `dof`) at `x`.
pub fn cdf<T: FloatScalar>(location: T, scale: T, dof: T, x: T) -> Result<T, StatsError> {
    Ok(StudentT::new(location, scale, dof)?.cdf(x))
}

/// Quantile of StudentT(`location`, `scale`, `dof`) at probability `p`.
pub fn inverse_cdf<T: FloatScalar>(location: T, scale: T, dof: T, p: T) -> Result<T, StatsError> {
    StudentT::new(location, scale, dof)?.inverse_cdf(p)
}
