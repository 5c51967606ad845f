use ndarray::Array1;
use rand::Rng;
use rand_distr::Distribution;

use crate::error::JumpDiffusionError;
use crate::error::Result;
use crate::traits::FloatExt;
use crate::traits::ProcessExt;

/// Jump counts of a Poisson process with intensity `lambda`, observed on
/// `n` consecutive intervals of length `dt`. Each count is an independent
/// `Poisson(lambda * dt)` draw.
#[derive(Clone, Debug)]
pub struct Poisson<T: FloatExt> {
  pub lambda: T,
  pub n: usize,
  dt: T,
  distr: Option<T::Poisson>,
}

impl<T: FloatExt> Poisson<T> {
  pub fn new(lambda: T, n: usize, dt: T) -> Result<Self> {
    if !(lambda >= T::zero()) || !lambda.is_finite() {
      return Err(JumpDiffusionError::invalid(
        "lambda",
        format!("jump rate must be finite and non-negative, got {lambda}"),
      ));
    }
    if !(dt > T::zero()) || !dt.is_finite() {
      return Err(JumpDiffusionError::invalid(
        "dt",
        format!("time step must be positive and finite, got {dt}"),
      ));
    }

    let rate = lambda * dt;
    // Poisson(0) is the point mass at zero.
    let distr = if rate > T::zero() {
      Some(T::poisson(rate)?)
    } else {
      None
    };

    Ok(Poisson {
      lambda,
      n,
      dt,
      distr,
    })
  }

  pub fn dt(&self) -> T {
    self.dt
  }

  /// Expected number of jumps per interval.
  pub fn rate(&self) -> T {
    self.lambda * self.dt
  }
}

impl<T: FloatExt> ProcessExt<T> for Poisson<T> {
  type Output = Array1<u64>;

  fn sample_using<R: Rng + ?Sized>(&self, rng: &mut R) -> Self::Output {
    match &self.distr {
      Some(distr) => (0..self.n)
        .map(|_| distr.sample(rng).to_u64().unwrap_or(u64::MAX))
        .collect(),
      None => Array1::zeros(self.n),
    }
  }
}
