//! # Traits
//!
//! $$
//! \text{Trait contracts: }\mathcal{A}:\text{parameters}\times\Omega\to\text{sample paths}
//! $$
//!
use std::fmt;
use std::fmt::Debug;
use std::fmt::Display;

use rand::Rng;
use rand_distr::Distribution;

use crate::error::Result;

/// A real-to-real coefficient of an SDE, such as the drift `a(x)`, the
/// diffusion `b(x)` or its derivative `b'(x)`.
pub enum Fn1D<T: FloatExt> {
  Native(fn(T) -> T),
  Boxed(Box<dyn Fn(T) -> T + Send + Sync>),
}

impl<T: FloatExt> Fn1D<T> {
  /// Wraps any thread-safe closure.
  pub fn new<F>(f: F) -> Self
  where
    F: Fn(T) -> T + Send + Sync + 'static,
  {
    Fn1D::Boxed(Box::new(f))
  }

  /// The function `x -> c`.
  pub fn constant(c: T) -> Self {
    Fn1D::new(move |_| c)
  }

  pub fn call(&self, x: T) -> T {
    match self {
      Fn1D::Native(f) => f(x),
      Fn1D::Boxed(f) => f(x),
    }
  }
}

impl<T, F> From<F> for Fn1D<T>
where
  T: FloatExt,
  F: Fn(T) -> T + Send + Sync + 'static,
{
  fn from(f: F) -> Self {
    Fn1D::new(f)
  }
}

impl<T: FloatExt> Debug for Fn1D<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Fn1D::Native(ptr) => write!(f, "Fn1D::Native({:p})", *ptr as *const ()),
      Fn1D::Boxed(_) => f.write_str("Fn1D::Boxed(..)"),
    }
  }
}

/// Floating point types the processes can be sampled in.
///
/// The associated samplers let generic code hold ready-built distributions,
/// so sampling needs no fallible step. The constructors only reject what
/// `rand_distr` rejects (a non-finite standard deviation, a non-positive
/// Poisson rate); domain checks such as `xi >= 0` belong to the callers.
pub trait FloatExt: num_traits::Float + Debug + Display + Send + Sync + 'static {
  type Normal: Distribution<Self> + Copy + Debug + Send + Sync;
  type Poisson: Distribution<Self> + Clone + Debug + Send + Sync;

  fn from_u64_(n: u64) -> Self;

  /// Normal(mean, std_dev).
  fn normal(mean: Self, std_dev: Self) -> Result<Self::Normal>;

  /// Poisson(lambda); `lambda` must be strictly positive.
  fn poisson(lambda: Self) -> Result<Self::Poisson>;
}

pub trait ProcessExt<T: FloatExt>: Send + Sync {
  type Output: Send;

  /// Samples with the thread-local generator.
  fn sample(&self) -> Self::Output {
    self.sample_using(&mut rand::thread_rng())
  }

  /// Samples with a caller-supplied generator; a seeded generator makes the
  /// output reproducible.
  fn sample_using<R: Rng + ?Sized>(&self, rng: &mut R) -> Self::Output;
}

#[cfg(test)]
mod tests {
  use super::*;

  fn square(x: f64) -> f64 {
    x * x
  }

  #[test]
  fn native_and_boxed_evaluate_pointwise() {
    let native = Fn1D::Native(square as fn(f64) -> f64);
    let shift = 3.0;
    let boxed = Fn1D::new(move |x: f64| x + shift);

    assert_eq!(native.call(4.0), 16.0);
    assert_eq!(boxed.call(4.0), 7.0);
  }

  #[test]
  fn constant_ignores_argument() {
    let one = Fn1D::constant(1.0_f32);

    assert_eq!(one.call(-5.0), 1.0);
    assert_eq!(one.call(1e6), 1.0);
  }

  #[test]
  fn closures_convert_with_into() {
    let drift: Fn1D<f64> = (|x: f64| -2.0 * x).into();

    assert_eq!(drift.call(0.5), -1.0);
    assert_eq!(format!("{drift:?}"), "Fn1D::Boxed(..)");
  }

  #[test]
  fn float_ext_rejects_bad_sampler_parameters() {
    assert!(f64::normal(0.0, f64::NAN).is_err());
    assert!(f64::normal(0.0, f64::INFINITY).is_err());
    assert!(f64::poisson(0.0).is_err());
    assert!(f32::poisson(0.5).is_ok());
  }
}
