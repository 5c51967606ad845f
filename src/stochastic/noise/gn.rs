use ndarray::Array1;
use ndarray_rand::RandomExt;
use rand::Rng;
use rand_distr::Distribution;

use crate::error::JumpDiffusionError;
use crate::error::Result;
use crate::traits::FloatExt;
use crate::traits::ProcessExt;

/// Gaussian noise: `n` independent Wiener increments `N(0, √dt)`.
#[derive(Copy, Clone, Debug)]
pub struct Gn<T: FloatExt> {
  pub n: usize,
  dt: T,
  distr: T::Normal,
}

impl<T: FloatExt> Gn<T> {
  pub fn new(n: usize, dt: T) -> Result<Self> {
    if !(dt > T::zero()) || !dt.is_finite() {
      return Err(JumpDiffusionError::invalid(
        "dt",
        format!("time step must be positive and finite, got {dt}"),
      ));
    }

    Ok(Gn {
      n,
      dt,
      distr: T::normal(T::zero(), dt.sqrt())?,
    })
  }

  pub fn dt(&self) -> T {
    self.dt
  }

  /// One increment, drawn from the same law as the sequence.
  pub fn sample_one<R: Rng + ?Sized>(&self, rng: &mut R) -> T {
    self.distr.sample(rng)
  }
}

impl<T: FloatExt> ProcessExt<T> for Gn<T> {
  type Output = Array1<T>;

  fn sample_using<R: Rng + ?Sized>(&self, rng: &mut R) -> Self::Output {
    Array1::random_using(self.n, self.distr, rng)
  }
}
