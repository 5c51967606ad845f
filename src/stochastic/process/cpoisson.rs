use ndarray::Array1;
use rand::Rng;
use rand_distr::Distribution;

use super::poisson::Poisson;
use crate::error::JumpDiffusionError;
use crate::error::Result;
use crate::traits::FloatExt;
use crate::traits::ProcessExt;

/// Discretised compound Poisson term `xi dJ`.
///
/// On every interval with `k > 0` arrivals the increment is `k * Y`, where
/// `Y ~ N(0, √xi)` is a single fresh draw, so `xi` is the variance of the
/// jump amplitude.
#[derive(Clone, Debug)]
pub struct CompoundPoisson<T: FloatExt> {
  pub xi: T,
  pub poisson: Poisson<T>,
  amplitude: T::Normal,
}

impl<T: FloatExt> CompoundPoisson<T> {
  pub fn new(xi: T, poisson: Poisson<T>) -> Result<Self> {
    if !(xi >= T::zero()) || !xi.is_finite() {
      return Err(JumpDiffusionError::invalid(
        "xi",
        format!("jump amplitude variance must be finite and non-negative, got {xi}"),
      ));
    }

    Ok(CompoundPoisson {
      xi,
      poisson,
      amplitude: T::normal(T::zero(), xi.sqrt())?,
    })
  }

  /// Increment of the jump term over one interval with `count` arrivals.
  /// Consumes one amplitude draw only when `count > 0`.
  pub fn jump_using<R: Rng + ?Sized>(&self, count: u64, rng: &mut R) -> T {
    if count == 0 {
      return T::zero();
    }

    T::from_u64_(count) * self.amplitude.sample(rng)
  }
}

impl<T: FloatExt> ProcessExt<T> for CompoundPoisson<T> {
  /// `(counts, jumps)`: the per-interval arrival counts and the matching
  /// increments of the jump term.
  type Output = (Array1<u64>, Array1<T>);

  fn sample_using<R: Rng + ?Sized>(&self, rng: &mut R) -> Self::Output {
    let counts = self.poisson.sample_using(rng);
    let mut jumps = Array1::<T>::zeros(counts.len());
    // the path starts at its initial condition, so interval 0 never jumps
    for i in 1..counts.len() {
      jumps[i] = self.jump_using(counts[i], rng);
    }

    (counts, jumps)
  }
}
