//! # univar
//!
//! Univariate probability distributions built on a pure-Rust special-function
//! engine, no-std compatible. All routines are generic over `f32`/`f64`, pure,
//! and stack-only.
//!
//! ## Quick start
//!
//! ```
//! use univar::stats::{Binomial, Normal, ContinuousDistribution, DiscreteDistribution, Univariate};
//!
//! let b = Binomial::new(0.2_f64, 10).unwrap();
//! assert!((b.pmf(2) - 0.301989888).abs() < 1e-9);
//! assert_eq!(b.cdf(10.0), 1.0);
//!
//! let n = Normal::new(0.0_f64, 1.0).unwrap();
//! let x = n.inverse_cdf(0.975).unwrap();
//! assert!((n.cdf(x) - 0.975).abs() < 1e-12);
//! ```
//!
//! ## Modules
//!
//! - [`special`]: Special functions: factorial and binomial coefficients,
//!   gamma / log-gamma, digamma, beta, regularized incomplete gamma and beta
//!   (with inverses), error function, complementary error function and its
//!   inverse. Out-of-domain arguments fail with [`special::SpecialError`].
//!
//! - [`stats`]: Distributions: [`stats::Binomial`], [`stats::Poisson`],
//!   [`stats::Uniform`], [`stats::Exponential`], [`stats::Normal`],
//!   [`stats::ChiSquared`], [`stats::StudentT`], [`stats::FisherSnedecor`].
//!   Capabilities are expressed by the [`stats::Univariate`],
//!   [`stats::ContinuousDistribution`] and [`stats::DiscreteDistribution`]
//!   traits.
//!
//! - [`traits`]: [`FloatScalar`], the element trait every routine is
//!   generic over.
//!
//! ## Cargo features
//!
//! | Feature   | Default  | Description |
//! |-----------|----------|-------------|
//! | `std`     | yes      | Hardware FPU via system libm, `std::error::Error` impls |
//!
//! `num-traits` always builds with `libm`, so `no_std` targets get pure-Rust
//! float routines without an extra feature.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod special;
pub mod stats;
pub mod traits;

pub use traits::FloatScalar;
