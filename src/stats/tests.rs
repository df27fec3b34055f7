use super::*;

fn approx_eq(a: f64, b: f64, tol: f64) {
    assert!(
        (a - b).abs() < tol,
        "approx_eq failed: {a} vs {b}, diff = {}, tol = {tol}",
        (a - b).abs()
    );
}

fn unsupported<T: core::fmt::Debug>(r: Result<T, StatsError>) -> bool {
    matches!(r, Err(StatsError::Unsupported { .. }))
}

fn invalid<T: core::fmt::Debug>(r: Result<T, StatsError>) -> bool {
    matches!(r, Err(StatsError::InvalidParameter { .. }))
}

// ======================== Normal ========================

#[test]
fn normal_pdf_standard() {
    let n = Normal::new(0.0_f64, 1.0).unwrap();
    approx_eq(n.pdf(0.0), 0.3989422804014327, 1e-15);
    approx_eq(n.pdf(1.0), 0.24197072451914337, 1e-15);
}

#[test]
fn normal_cdf_standard() {
    let n = Normal::standard();
    assert_eq!(n.cdf(0.0_f64), 0.5);
    approx_eq(n.cdf(1.0), 0.8413447460685429, 1e-14);
    approx_eq(n.cdf(-1.0), 0.15865525393145705, 1e-14);
    // far tail keeps relative precision
    let lo = n.cdf(-10.0);
    assert!((lo - 7.619853024160527e-24).abs() < 1e-36);
}

#[test]
fn normal_inverse_cdf() {
    let n = Normal::new(0.0_f64, 1.0).unwrap();
    assert_eq!(n.inverse_cdf(0.5).unwrap(), 0.0);
    approx_eq(n.inverse_cdf(0.975).unwrap(), 1.959963984540054, 1e-13);
    approx_eq(n.inverse_cdf(0.025).unwrap(), -1.959963984540054, 1e-13);
    assert_eq!(n.inverse_cdf(0.0).unwrap(), f64::NEG_INFINITY);
    assert_eq!(n.inverse_cdf(1.0).unwrap(), f64::INFINITY);
}

#[test]
fn normal_inverse_cdf_roundtrip() {
    let n = Normal::new(-2.0_f64, 3.5).unwrap();
    for &p in &[1e-12, 1e-6, 0.01, 0.2, 0.5, 0.7, 0.99, 1.0 - 1e-9] {
        let x = n.inverse_cdf(p).unwrap();
        approx_eq(n.cdf(x), p, 1e-13 * p.max(1e-3));
    }
}

#[test]
fn normal_inverse_cdf_domain() {
    let n = Normal::<f64>::standard();
    assert_eq!(n.inverse_cdf(1.5), Err(StatsError::Domain { argument: "p" }));
    assert!(n.inverse_cdf(-0.1).is_err());
    assert!(n.inverse_cdf(f64::NAN).is_err());
}

#[test]
fn normal_moments() {
    let n = Normal::new(3.0_f64, 2.0).unwrap();
    assert_eq!(n.mean().unwrap(), 3.0);
    assert_eq!(n.variance().unwrap(), 4.0);
    assert_eq!(n.std_dev().unwrap(), 2.0);
    assert_eq!(n.skewness().unwrap(), 0.0);
    assert_eq!(n.median().unwrap(), 3.0);
    approx_eq(n.entropy().unwrap(), 2.0_f64.ln() + 1.4189385332046727, 1e-15);
}

#[test]
fn normal_ln_pdf() {
    let n = Normal::new(0.0_f64, 1.0).unwrap();
    approx_eq(n.ln_pdf(0.0), n.pdf(0.0).ln(), 1e-14);
    approx_eq(n.ln_pdf(3.0), n.pdf(3.0).ln(), 1e-13);
    // no underflow in log space
    approx_eq(n.ln_pdf(50.0), -1250.0 - 0.5 * (2.0 * core::f64::consts::PI).ln(), 1e-10);
}

#[test]
fn normal_invalid() {
    assert!(invalid(Normal::new(0.0_f64, 0.0)));
    assert!(invalid(Normal::new(0.0_f64, -1.0)));
    assert!(invalid(Normal::new(f64::NAN, 1.0)));
    assert!(invalid(Normal::new(f64::INFINITY, 1.0)));
    assert!(normal::pdf(0.0_f64, -1.0, 0.0).is_err());
}

#[test]
fn normal_free_functions() {
    approx_eq(normal::pdf(1.0_f64, 2.0, 1.0).unwrap(), 0.19947114020071635, 1e-15);
    assert_eq!(normal::cdf(1.0_f64, 2.0, 1.0).unwrap(), 0.5);
    approx_eq(normal::inverse_cdf(1.0_f64, 2.0, 0.975).unwrap(), 1.0 + 2.0 * 1.959963984540054, 1e-12);
}

#[test]
fn normal_f32() {
    let n = Normal::new(0.0_f32, 1.0).unwrap();
    assert!((n.cdf(0.0) - 0.5).abs() < 1e-6);
    assert!((n.cdf(1.0) - 0.841_344_7).abs() < 1e-5);
    assert!((n.inverse_cdf(0.975).unwrap() - 1.959_964).abs() < 1e-4);
}

// ======================== Uniform ========================

#[test]
fn uniform_pdf_cdf() {
    let u = Uniform::new(2.0_f64, 6.0).unwrap();
    assert_eq!(u.pdf(4.0), 0.25);
    assert_eq!(u.pdf(1.0), 0.0);
    assert_eq!(u.pdf(7.0), 0.0);
    assert_eq!(u.cdf(1.0), 0.0);
    assert_eq!(u.cdf(3.0), 0.25);
    assert_eq!(u.cdf(8.0), 1.0);
    assert_eq!(u.ln_pdf(7.0), f64::NEG_INFINITY);
}

#[test]
fn uniform_inverse_cdf() {
    let u = Uniform::new(-1.0_f64, 3.0).unwrap();
    assert_eq!(u.inverse_cdf(0.0).unwrap(), -1.0);
    assert_eq!(u.inverse_cdf(0.5).unwrap(), 1.0);
    assert_eq!(u.inverse_cdf(1.0).unwrap(), 3.0);
}

#[test]
fn uniform_moments() {
    let u = Uniform::new(0.0_f64, 12.0).unwrap();
    assert_eq!(u.mean().unwrap(), 6.0);
    assert_eq!(u.variance().unwrap(), 12.0);
    assert_eq!(u.median().unwrap(), 6.0);
    approx_eq(u.entropy().unwrap(), 12.0_f64.ln(), 1e-15);
}

#[test]
fn uniform_invalid() {
    assert!(invalid(Uniform::new(1.0_f64, 1.0)));
    assert!(invalid(Uniform::new(2.0_f64, 1.0)));
    assert!(invalid(Uniform::new(0.0_f64, f64::INFINITY)));
}

// ======================== Exponential ========================

#[test]
fn exponential_pdf_cdf() {
    let e = Exponential::new(5.0_f64).unwrap();
    assert_eq!(e.cdf(0.0), 0.0);
    assert_eq!(e.cdf(-1.0), 0.0);
    assert_eq!(e.pdf(-1.0), 0.0);
    assert_eq!(e.pdf(0.0), 5.0);
    approx_eq(e.pdf(0.2), 5.0 * (-1.0_f64).exp(), 1e-15);
    approx_eq(e.cdf(0.2), 1.0 - (-1.0_f64).exp(), 1e-15);
    assert_eq!(e.cdf(1e3), 1.0);
}

#[test]
fn exponential_inverse_cdf() {
    let e = Exponential::new(2.0_f64).unwrap();
    approx_eq(e.inverse_cdf(0.5).unwrap(), core::f64::consts::LN_2 / 2.0, 1e-15);
    assert_eq!(e.inverse_cdf(0.0).unwrap(), 0.0);
    assert_eq!(e.inverse_cdf(1.0).unwrap(), f64::INFINITY);
    let x = e.inverse_cdf(1e-10).unwrap();
    approx_eq(e.cdf(x) / 1e-10, 1.0, 1e-12);
}

#[test]
fn exponential_moments() {
    let e = Exponential::new(4.0_f64).unwrap();
    assert_eq!(e.mean().unwrap(), 0.25);
    assert_eq!(e.variance().unwrap(), 0.0625);
    assert_eq!(e.skewness().unwrap(), 2.0);
    approx_eq(e.entropy().unwrap(), 1.0 - 4.0_f64.ln(), 1e-15);
    approx_eq(e.median().unwrap(), core::f64::consts::LN_2 / 4.0, 1e-16);
}

#[test]
fn exponential_invalid() {
    assert!(invalid(Exponential::new(0.0_f64)));
    assert!(invalid(Exponential::new(-1.0_f64)));
    assert!(invalid(Exponential::new(f64::NAN)));
}

// ======================== ChiSquared ========================

#[test]
fn chi_squared_cdf() {
    // k = 2 is Exponential(1/2)
    let c = ChiSquared::new(2.0_f64).unwrap();
    approx_eq(c.cdf(3.0), 1.0 - (-1.5_f64).exp(), 1e-14);
    assert_eq!(c.cdf(0.0), 0.0);
    assert_eq!(c.cdf(-2.0), 0.0);
    assert_eq!(c.cdf(f64::INFINITY), 1.0);
    // χ²(1) at 3.841458820694124 is 0.95
    let c1 = ChiSquared::new(1.0_f64).unwrap();
    approx_eq(c1.cdf(3.841458820694124), 0.95, 1e-12);
}

#[test]
fn chi_squared_pdf_at_zero() {
    assert_eq!(ChiSquared::new(1.0_f64).unwrap().pdf(0.0), f64::INFINITY);
    assert_eq!(ChiSquared::new(2.0_f64).unwrap().pdf(0.0), 0.5);
    assert_eq!(ChiSquared::new(3.0_f64).unwrap().pdf(0.0), 0.0);
    assert_eq!(ChiSquared::new(3.0_f64).unwrap().ln_pdf(0.0), f64::NEG_INFINITY);
}

#[test]
fn chi_squared_pdf() {
    let c = ChiSquared::new(4.0_f64).unwrap();
    // x e^{-x/2} / 4
    approx_eq(c.pdf(2.0), 0.5 * (-1.0_f64).exp(), 1e-15);
    approx_eq(c.ln_pdf(2.0), c.pdf(2.0).ln(), 1e-14);
}

#[test]
fn chi_squared_inverse_cdf_is_true_inverse() {
    for &k in &[0.5_f64, 1.0, 3.0, 10.0, 150.0] {
        let c = ChiSquared::new(k).unwrap();
        for &p in &[1e-8, 0.05, 0.5, 0.95, 0.999] {
            let x = c.inverse_cdf(p).unwrap();
            approx_eq(c.cdf(x), p, 1e-12);
        }
    }
    let c = ChiSquared::new(1.0_f64).unwrap();
    approx_eq(c.inverse_cdf(0.95).unwrap(), 3.841458820694124, 1e-11);
}

#[test]
fn chi_squared_moments() {
    let c = ChiSquared::new(8.0_f64).unwrap();
    assert_eq!(c.mean().unwrap(), 8.0);
    assert_eq!(c.variance().unwrap(), 16.0);
    assert_eq!(c.skewness().unwrap(), 1.0);
    // k = 2: entropy of Exponential(1/2) is 1 + ln 2
    let c2 = ChiSquared::new(2.0_f64).unwrap();
    approx_eq(c2.entropy().unwrap(), 1.0 + 2.0_f64.ln(), 1e-14);
    // median of χ²(2) is 2 ln 2
    approx_eq(c2.median().unwrap(), 2.0 * core::f64::consts::LN_2, 1e-13);
}

#[test]
fn chi_squared_invalid() {
    assert!(invalid(ChiSquared::new(0.0_f64)));
    assert!(invalid(ChiSquared::new(-3.0_f64)));
    assert!(chi_squared::cdf(0.0_f64, 1.0).is_err());
}

// ======================== StudentT ========================

#[test]
fn student_t_cdf() {
    let t = StudentT::new(0.0_f64, 1.0, 5.0).unwrap();
    assert_eq!(t.cdf(0.0), 0.5);
    approx_eq(t.cdf(2.015048373333024), 0.95, 1e-12);
    approx_eq(t.cdf(-2.015048373333024), 0.05, 1e-12);
    assert_eq!(t.cdf(f64::INFINITY), 1.0);
    assert_eq!(t.cdf(f64::NEG_INFINITY), 0.0);
    // ν = 1 is Cauchy: F(x) = 1/2 + atan(x)/π
    let c = StudentT::<f64>::standard();
    approx_eq(c.cdf(1.0), 0.75, 1e-14);
}

#[test]
fn student_t_pdf_symmetric() {
    let t = StudentT::new(1.0_f64, 2.0, 3.0).unwrap();
    for &d in &[0.3, 1.0, 4.0] {
        approx_eq(t.pdf(1.0 + d), t.pdf(1.0 - d), 1e-15);
    }
    // Cauchy density at 0 is 1/π
    approx_eq(StudentT::<f64>::standard().pdf(0.0), core::f64::consts::FRAC_1_PI, 1e-15);
}

#[test]
fn student_t_inverse_cdf_roundtrip() {
    for &dof in &[0.7_f64, 1.0, 2.5, 10.0, 1e4] {
        let t = StudentT::new(-1.0, 0.5, dof).unwrap();
        for &p in &[1e-6, 0.025, 0.3, 0.5, 0.8, 0.999] {
            let x = t.inverse_cdf(p).unwrap();
            approx_eq(t.cdf(x), p, 1e-11);
        }
    }
    let t = StudentT::new(0.0_f64, 1.0, 5.0).unwrap();
    approx_eq(t.inverse_cdf(0.95).unwrap(), 2.015048373333024, 1e-10);
}

#[test]
fn student_t_infinite_dof_is_normal() {
    let t = StudentT::new(0.0_f64, 1.0, f64::INFINITY).unwrap();
    let n = Normal::<f64>::standard();
    for &x in &[-2.0, 0.0, 0.5, 3.0] {
        approx_eq(t.cdf(x), n.cdf(x), 1e-15);
        approx_eq(t.pdf(x), n.pdf(x), 1e-15);
    }
    approx_eq(t.inverse_cdf(0.975).unwrap(), 1.959963984540054, 1e-13);
    approx_eq(t.entropy().unwrap(), n.entropy().unwrap(), 1e-15);
    assert_eq!(t.variance().unwrap(), 1.0);
}

#[test]
fn student_t_large_dof_approaches_normal() {
    let t = StudentT::new(0.0_f64, 1.0, 1e6).unwrap();
    let n = Normal::<f64>::standard();
    approx_eq(t.cdf(1.5), n.cdf(1.5), 1e-6);
}

#[test]
fn student_t_moments() {
    let t = StudentT::new(2.0_f64, 3.0, 4.0).unwrap();
    assert_eq!(t.mean().unwrap(), 2.0);
    approx_eq(t.variance().unwrap(), 4.0 * 9.0 / 2.0, 1e-14);
    assert_eq!(t.skewness().unwrap(), 0.0);
    assert_eq!(t.median().unwrap(), 2.0);

    let heavy = StudentT::new(0.0_f64, 1.0, 1.5).unwrap();
    assert!(heavy.mean().is_ok());
    assert_eq!(heavy.variance().unwrap(), f64::INFINITY);
    assert!(unsupported(heavy.skewness()));

    let cauchy = StudentT::<f64>::standard();
    assert!(unsupported(cauchy.mean()));
    assert!(unsupported(cauchy.variance()));
}

#[test]
fn student_t_entropy() {
    // Cauchy entropy is ln(4π); the scale adds ln s
    let c = StudentT::new(0.0_f64, 2.0, 1.0).unwrap();
    approx_eq(c.entropy().unwrap(), (4.0 * core::f64::consts::PI).ln() + 2.0_f64.ln(), 1e-13);
}

#[test]
fn student_t_invalid() {
    assert!(invalid(StudentT::new(0.0_f64, 1.0, 0.0)));
    assert!(invalid(StudentT::new(0.0_f64, 0.0, 3.0)));
    assert!(invalid(StudentT::new(f64::NAN, 1.0, 3.0)));
}

// ======================== FisherSnedecor ========================

#[test]
fn fisher_snedecor_cdf() {
    // d1 = d2 = 2: F(x) = x / (1 + x)
    let f = FisherSnedecor::new(2.0_f64, 2.0).unwrap();
    for &x in &[0.1, 1.0, 3.0, 40.0] {
        approx_eq(f.cdf(x), x / (1.0 + x), 1e-14);
    }
    assert_eq!(f.cdf(0.0), 0.0);
    assert_eq!(f.cdf(f64::INFINITY), 1.0);
    // F(5, 10) at its 95th percentile
    let f = FisherSnedecor::new(5.0_f64, 10.0).unwrap();
    approx_eq(f.cdf(3.325834530413011), 0.95, 1e-12);
}

#[test]
fn fisher_snedecor_pdf() {
    // d1 = d2 = 2: f(x) = 1 / (1 + x)²
    let f = FisherSnedecor::new(2.0_f64, 2.0).unwrap();
    assert_eq!(f.pdf(0.0), 1.0);
    approx_eq(f.pdf(1.0), 0.25, 1e-15);
    assert_eq!(f.pdf(-1.0), 0.0);
    assert_eq!(FisherSnedecor::new(1.0_f64, 3.0).unwrap().pdf(0.0), f64::INFINITY);
    assert_eq!(FisherSnedecor::new(4.0_f64, 3.0).unwrap().pdf(0.0), 0.0);
}

#[test]
fn fisher_snedecor_inverse_cdf_roundtrip() {
    let f = FisherSnedecor::new(5.0_f64, 10.0).unwrap();
    approx_eq(f.inverse_cdf(0.95).unwrap(), 3.325834530413011, 1e-10);
    for &(d1, d2) in &[(1.0_f64, 1.0_f64), (3.0, 5.0), (0.5, 20.0), (40.0, 60.0)] {
        let f = FisherSnedecor::new(d1, d2).unwrap();
        for &p in &[1e-6, 0.1, 0.5, 0.9, 0.999] {
            let x = f.inverse_cdf(p).unwrap();
            approx_eq(f.cdf(x), p, 1e-11);
        }
    }
}

#[test]
fn fisher_snedecor_moments() {
    let f = FisherSnedecor::new(3.0_f64, 5.0).unwrap();
    approx_eq(f.mean().unwrap(), 5.0 / 3.0, 1e-15);
    // 2·25·6 / (3·9·1)
    approx_eq(f.variance().unwrap(), 300.0 / 27.0, 1e-13);
    assert!(unsupported(f.skewness()));
    assert!(unsupported(f.entropy()));

    let f = FisherSnedecor::new(3.0_f64, 4.0).unwrap();
    assert!(f.mean().is_ok());
    assert!(unsupported(f.variance()));
    assert!(unsupported(FisherSnedecor::new(3.0_f64, 2.0).unwrap().mean()));

    let f = FisherSnedecor::new(2.0_f64, 2.0).unwrap();
    approx_eq(f.median().unwrap(), 1.0, 1e-12);
}

#[test]
fn fisher_snedecor_invalid() {
    assert!(invalid(FisherSnedecor::new(0.0_f64, 1.0)));
    assert!(invalid(FisherSnedecor::new(1.0_f64, -1.0)));
}

// ======================== Binomial ========================

#[test]
fn binomial_pmf() {
    let b = Binomial::new(0.2_f64, 10).unwrap();
    approx_eq(b.pmf(2), 0.301989888, 1e-12);
    approx_eq(b.pmf(0), 0.8_f64.powi(10), 1e-15);
    assert_eq!(b.pmf(-1), 0.0);
    assert_eq!(b.pmf(11), 0.0);
    approx_eq(b.ln_pmf(2), 0.301989888_f64.ln(), 1e-12);
}

#[test]
fn binomial_cdf() {
    let b = Binomial::new(0.2_f64, 10).unwrap();
    assert_eq!(b.cdf(10.0), 1.0);
    assert_eq!(b.cdf(25.0), 1.0);
    assert_eq!(b.cdf(-0.5), 0.0);
    approx_eq(b.cdf(2.7), b.pmf(0) + b.pmf(1) + b.pmf(2), 1e-15);
}

#[test]
fn binomial_pmf_sums_to_one() {
    for &(p, n) in &[(0.2_f64, 10_i64), (0.5, 1), (0.93, 57), (0.01, 400), (0.5, 2000)] {
        let b = Binomial::new(p, n).unwrap();
        let total: f64 = (0..=n).map(|k| b.pmf(k)).sum();
        approx_eq(total, 1.0, 1e-9);
    }
}

#[test]
fn binomial_degenerate() {
    let b = Binomial::new(0.0_f64, 6).unwrap();
    assert_eq!(b.pmf(0), 1.0);
    assert_eq!(b.pmf(1), 0.0);
    assert_eq!(b.cdf(0.0), 1.0);
    assert_eq!(b.entropy().unwrap(), 0.0);
    assert!(unsupported(b.skewness()));

    let b = Binomial::new(1.0_f64, 6).unwrap();
    assert_eq!(b.pmf(6), 1.0);
    assert_eq!(b.cdf(5.0), 0.0);
    assert_eq!(b.ln_pmf(3), f64::NEG_INFINITY);

    let b = Binomial::new(0.3_f64, 0).unwrap();
    assert_eq!(b.pmf(0), 1.0);
    assert_eq!(b.cdf(0.0), 1.0);
}

#[test]
fn binomial_large_n_uses_log_space() {
    // C(1000, 500) overflows u64; the mass is still finite and correct
    let b = Binomial::new(0.5_f64, 1000).unwrap();
    approx_eq(b.pmf(500), 0.0252250181783608, 1e-14);
    approx_eq(b.cdf(500.0), 0.5 + 0.5 * b.pmf(500), 1e-12);
}

#[test]
fn binomial_moments() {
    let b = Binomial::new(0.25_f64, 12).unwrap();
    assert_eq!(b.mean().unwrap(), 3.0);
    assert_eq!(b.variance().unwrap(), 2.25);
    approx_eq(b.skewness().unwrap(), 0.5 / 1.5, 1e-15);
    assert_eq!(b.median().unwrap(), 3.0);
    let direct: f64 = (0..=12).map(|k| {
        let p = b.pmf(k);
        -p * p.ln()
    }).sum();
    approx_eq(b.entropy().unwrap(), direct, 1e-14);
}

#[test]
fn binomial_invalid() {
    assert!(invalid(Binomial::new(-0.1_f64, 5)));
    assert!(invalid(Binomial::new(1.1_f64, 5)));
    assert!(invalid(Binomial::new(0.5_f64, -1)));
    assert!(invalid(Binomial::new(f64::NAN, 5)));
    assert!(binomial::pmf(2.0_f64, 3, 1).is_err());
}

// ======================== Poisson ========================

#[test]
fn poisson_pmf() {
    let p = Poisson::new(2.0_f64).unwrap();
    approx_eq(p.pmf(0), (-2.0_f64).exp(), 1e-15);
    approx_eq(p.pmf(3), 8.0 / 6.0 * (-2.0_f64).exp(), 1e-15);
    assert_eq!(p.pmf(-1), 0.0);
    assert_eq!(p.ln_pmf(-1), f64::NEG_INFINITY);
    // exact and log-space branches agree at the boundary
    let p = Poisson::new(20.0_f64).unwrap();
    approx_eq(p.pmf(21) / p.ln_pmf(21).exp(), 1.0, 1e-12);
    approx_eq(p.pmf(20) / p.ln_pmf(20).exp(), 1.0, 1e-12);
}

#[test]
fn poisson_cdf() {
    let p = Poisson::new(4.0_f64).unwrap();
    assert_eq!(p.cdf(-1.0), 0.0);
    approx_eq(p.cdf(0.0), (-4.0_f64).exp(), 1e-15);
    approx_eq(p.cdf(2.5), 13.0 * (-4.0_f64).exp(), 1e-15);
    assert_eq!(p.cdf(200.0), 1.0);
    assert_eq!(p.cdf(f64::INFINITY), 1.0);
    // summation matches the closed form Q(k + 1, λ)
    for k in 0..30 {
        let q = crate::special::gamma_inc_upper(k as f64 + 1.0, 4.0).unwrap();
        approx_eq(p.cdf(k as f64), q, 1e-13);
    }
}

#[test]
fn poisson_pmf_large_rate() {
    // e^(−λ) underflows and λ^k overflows: the log-space path must take over
    let p = Poisson::new(1e16_f64).unwrap();
    assert_eq!(p.pmf(20), 0.0);
    assert_eq!(p.cdf(20.0), 0.0);
    assert_eq!(p.cdf(1e3), 0.0);
    assert!(p.ln_pmf(20).is_finite());

    // e^(−800) underflows but pmf(20) ≈ 1.7e-308 does not
    let p = Poisson::new(800.0_f64).unwrap();
    let m = p.pmf(20);
    assert!(m > 0.0);
    approx_eq(m / p.ln_pmf(20).exp(), 1.0, 1e-12);
    let c = p.cdf(800.0);
    assert!(c > 0.5 && c < 0.51);

    let p = Poisson::new(200.0_f32).unwrap();
    assert!(!p.pmf(20).is_nan());
    assert!(!p.cdf(200.0).is_nan());
}

#[test]
fn poisson_median_small_rate() {
    for &l in &[1e-6_f64, 0.01, 0.05] {
        let p = Poisson::new(l).unwrap();
        assert_eq!(p.median().unwrap(), 0.0);
        assert!(p.cdf(0.0) >= 0.5);
    }
    assert_eq!(Poisson::new(0.5_f64).unwrap().median().unwrap(), 0.0);
}

#[test]
fn poisson_cdf_far_beyond_summation() {
    let p = Poisson::new(3e5_f64).unwrap();
    let mid = p.cdf(3e5);
    assert!(mid > 0.49 && mid < 0.51);
    assert_eq!(p.cdf(1e7), 1.0);
}

#[test]
fn poisson_moments() {
    let p = Poisson::new(9.0_f64).unwrap();
    assert_eq!(p.mean().unwrap(), 9.0);
    assert_eq!(p.variance().unwrap(), 9.0);
    approx_eq(p.skewness().unwrap(), 1.0 / 3.0, 1e-15);
    assert_eq!(p.median().unwrap(), 9.0);
}

#[test]
fn poisson_entropy() {
    // summed below the switch
    let p = Poisson::new(1.0_f64).unwrap();
    approx_eq(p.entropy().unwrap(), 1.3048422422562515, 1e-13);
    // asymptotic above it, close to the direct sum
    let p = Poisson::new(25.0_f64).unwrap();
    let direct: f64 = (0..200).map(|k| {
        let q = p.pmf(k);
        if q > 0.0 { -q * q.ln() } else { 0.0 }
    }).sum();
    approx_eq(p.entropy().unwrap(), direct, 1e-5);
}

#[test]
fn poisson_invalid() {
    assert!(invalid(Poisson::new(0.0_f64)));
    assert!(invalid(Poisson::new(-2.0_f64)));
    assert!(invalid(Poisson::new(f64::INFINITY)));
    assert!(poisson::cdf(0.0_f64, 1.0).is_err());
}

// ======================== Cross-distribution ========================

fn check_continuous<D: ContinuousDistribution<f64>>(d: &D, xs: &[f64]) {
    let mut prev = 0.0;
    for &x in xs {
        let c = d.cdf(x);
        assert!((0.0..=1.0).contains(&c), "cdf({x}) = {c}");
        assert!(c >= prev, "cdf not monotone at {x}");
        prev = c;
        assert!(d.pdf(x) >= 0.0);
    }
    assert_eq!(d.inverse_cdf(0.0).unwrap(), d.min());
    assert_eq!(d.inverse_cdf(1.0).unwrap(), d.max());
}

#[test]
fn continuous_contracts() {
    let xs: Vec<f64> = (-40..=80).map(|i| i as f64 * 0.25).collect();
    check_continuous(&Normal::new(1.0, 2.0).unwrap(), &xs);
    check_continuous(&Uniform::new(-1.0, 4.0).unwrap(), &xs);
    check_continuous(&Exponential::new(0.7).unwrap(), &xs);
    check_continuous(&ChiSquared::new(3.0).unwrap(), &xs);
    check_continuous(&StudentT::new(0.5, 1.5, 2.0).unwrap(), &xs);
    check_continuous(&FisherSnedecor::new(3.0, 7.0).unwrap(), &xs);
}

#[test]
fn discrete_cdf_steps_by_pmf() {
    let b = Binomial::new(0.35_f64, 25).unwrap();
    let p = Poisson::new(6.5_f64).unwrap();
    for k in 1..25 {
        let x = k as f64;
        approx_eq(b.cdf(x) - b.cdf(x - 1.0), b.pmf(k), 1e-14);
        approx_eq(p.cdf(x) - p.cdf(x - 1.0), p.pmf(k), 1e-14);
    }
    assert_eq!(DiscreteDistribution::<f64>::max(&p), i64::MAX);
    assert_eq!(DiscreteDistribution::<f64>::min(&b), 0);
}

#[test]
fn special_errors_surface_as_stats_errors() {
    let e: StatsError = crate::special::SpecialError::domain("erfc_inv", "p").into();
    assert!(matches!(e, StatsError::Special(_)));
}
