//! # Jump-Diffusion
//!
//! $$
//! dX_t=a(X_t)dt+b(X_t)dW_t+\xi dJ_t,\qquad J_t\sim\text{compound Poisson}(\lambda)
//! $$
//!
use ndarray::Array1;
use rand::Rng;
use tracing::debug;
use tracing::trace;

use crate::error::JumpDiffusionError;
use crate::error::Result;
use crate::stochastic::noise::gn::Gn;
use crate::stochastic::process::cpoisson::CompoundPoisson;
use crate::stochastic::process::poisson::Poisson;
use crate::stochastic::sde::euler_step;
use crate::stochastic::sde::milstein_correction;
use crate::stochastic::sde::milstein_step;
use crate::stochastic::sde::SdeMethod;
use crate::traits::FloatExt;
use crate::traits::Fn1D;
use crate::traits::ProcessExt;

enum Scheme<T: FloatExt> {
  Euler,
  Milstein { diffusion_prime: Fn1D<T> },
}

/// A scalar jump-diffusion sampled on the grid `0, dt, 2dt, ...` up to
/// `floor(t / dt)` points.
///
/// The jump term adds `k * Y` on every interval with `k` Poisson(`lambda * dt`)
/// arrivals, `Y ~ N(0, √xi)`. All parameters are checked by [`JumpDiffusion::new`];
/// a constructed process always samples successfully.
///
/// Random draws are taken in a fixed order: the initial value (only when
/// `x0` is `None`), all `n` Wiener increments, all `n` jump counts, then
/// one amplitude per interval that has jumps. The first increment and the
/// first count are drawn but never used, since index 0 holds the initial
/// condition.
pub struct JumpDiffusion<T: FloatExt> {
  t: T,
  x0: Option<T>,
  drift: Fn1D<T>,
  diffusion: Fn1D<T>,
  scheme: Scheme<T>,
  gn: Gn<T>,
  cpoisson: CompoundPoisson<T>,
}

impl<T: FloatExt> JumpDiffusion<T> {
  /// # Arguments
  /// * `t` - Total time, `> 0`.
  /// * `dt` - Time step, `> 0` and not larger than `t`.
  /// * `drift` - `a(x)`.
  /// * `diffusion` - `b(x)`.
  /// * `xi` - Variance of the jump amplitude, `>= 0`.
  /// * `lambda` - Jump rate, `>= 0`.
  /// * `x0` - Initial value; drawn from `N(0, √dt)` when `None`.
  /// * `method` - Euler-Maruyama or Milstein.
  /// * `diffusion_prime` - `b'(x)`, required by Milstein and ignored by Euler.
  pub fn new(
    t: T,
    dt: T,
    drift: Fn1D<T>,
    diffusion: Fn1D<T>,
    xi: T,
    lambda: T,
    x0: Option<T>,
    method: SdeMethod,
    diffusion_prime: Option<Fn1D<T>>,
  ) -> Result<Self> {
    if !(t > T::zero()) || !t.is_finite() {
      return Err(JumpDiffusionError::invalid(
        "t",
        format!("total time must be positive and finite, got {t}"),
      ));
    }
    if !(dt > T::zero()) || !dt.is_finite() {
      return Err(JumpDiffusionError::invalid(
        "dt",
        format!("time step must be positive and finite, got {dt}"),
      ));
    }

    let n = match (t / dt).floor().to_usize() {
      Some(n) if n >= 1 => n,
      Some(_) => {
        return Err(JumpDiffusionError::invalid(
          "dt",
          format!("time step {dt} exceeds total time {t}"),
        ))
      }
      None => {
        return Err(JumpDiffusionError::invalid(
          "dt",
          format!("{t} / {dt} steps do not fit in memory"),
        ))
      }
    };

    if let Some(x0) = x0 {
      if !x0.is_finite() {
        return Err(JumpDiffusionError::invalid(
          "init",
          format!("initial value must be finite, got {x0}"),
        ));
      }
    }

    let scheme = match (method, diffusion_prime) {
      (SdeMethod::Euler, diffusion_prime) => {
        if diffusion_prime.is_some() {
          debug!("diffusion derivative is not used by the Euler scheme");
        }
        Scheme::Euler
      }
      (SdeMethod::Milstein, Some(diffusion_prime)) => Scheme::Milstein { diffusion_prime },
      (SdeMethod::Milstein, None) => {
        return Err(JumpDiffusionError::invalid(
          "b_prime",
          "the Milstein scheme needs the derivative of the diffusion",
        ))
      }
    };

    let gn = Gn::new(n, dt)?;
    let cpoisson = CompoundPoisson::new(xi, Poisson::new(lambda, n, dt)?)?;

    debug!(n, %dt, %xi, %lambda, scheme = %method, "configured jump-diffusion");

    Ok(Self {
      t,
      x0,
      drift,
      diffusion,
      scheme,
      gn,
      cpoisson,
    })
  }

  /// Number of points in a path, `floor(t / dt)`.
  pub fn n(&self) -> usize {
    self.gn.n
  }

  pub fn t(&self) -> T {
    self.t
  }

  pub fn dt(&self) -> T {
    self.gn.dt()
  }

  pub fn xi(&self) -> T {
    self.cpoisson.xi
  }

  pub fn lambda(&self) -> T {
    self.cpoisson.poisson.lambda
  }

  pub fn x0(&self) -> Option<T> {
    self.x0
  }

  pub fn method(&self) -> SdeMethod {
    match self.scheme {
      Scheme::Euler => SdeMethod::Euler,
      Scheme::Milstein { .. } => SdeMethod::Milstein,
    }
  }
}

impl<T: FloatExt> ProcessExt<T> for JumpDiffusion<T> {
  type Output = Array1<T>;

  fn sample_using<R: Rng + ?Sized>(&self, rng: &mut R) -> Self::Output {
    let n = self.n();
    let dt = self.dt();

    let mut x = Array1::<T>::zeros(n);
    x[0] = match self.x0 {
      Some(x0) => x0,
      None => self.gn.sample_one(rng),
    };

    let dw = self.gn.sample_using(rng);
    let (counts, jumps) = self.cpoisson.sample_using(rng);

    match &self.scheme {
      Scheme::Euler => {
        for i in 1..n {
          x[i] = euler_step(x[i - 1], dt, &self.drift, &self.diffusion, dw[i]) + jumps[i];
        }
      }
      Scheme::Milstein { diffusion_prime } => {
        let correction = milstein_correction(&dw, dt);
        for i in 1..n {
          x[i] = milstein_step(
            x[i - 1],
            dt,
            &self.drift,
            &self.diffusion,
            diffusion_prime,
            dw[i],
            correction[i],
          ) + jumps[i];
        }
      }
    }

    trace!(n, jumps = counts.sum(), "sampled jump-diffusion path");

    x
  }
}

/// Samples one path of `dX = a(X)dt + b(X)dW + xi dJ`.
///
/// Shorthand for [`JumpDiffusion::new`] followed by
/// [`ProcessExt::sample_using`]; fails before drawing anything when the
/// parameters are invalid.
pub fn simulate<T: FloatExt, R: Rng + ?Sized>(
  t: T,
  dt: T,
  drift: Fn1D<T>,
  diffusion: Fn1D<T>,
  xi: T,
  lambda: T,
  x0: Option<T>,
  method: SdeMethod,
  diffusion_prime: Option<Fn1D<T>>,
  rng: &mut R,
) -> Result<Array1<T>> {
  let process = JumpDiffusion::new(t, dt, drift, diffusion, xi, lambda, x0, method, diffusion_prime)?;

  Ok(process.sample_using(rng))
}
