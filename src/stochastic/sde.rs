//! # SDE schemes
//!
//! $$
//! X_{i}=X_{i-1}+a(X_{i-1})\Delta t+b(X_{i-1})\Delta W_i
//! +\tfrac12\,b(X_{i-1})\,b'(X_{i-1})\left(\Delta W_i^2-\Delta t\right)
//! $$
//!
//! The last term is present only in the Milstein scheme.
//!
use std::fmt;
use std::str::FromStr;

use ndarray::Array1;

use crate::error::JumpDiffusionError;
use crate::traits::FloatExt;
use crate::traits::Fn1D;

/// Discretisation scheme of a scalar SDE.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SdeMethod {
  /// Euler-Maruyama, strong order 1/2.
  #[default]
  Euler,
  /// Milstein, strong order 1. Needs the derivative of the diffusion.
  Milstein,
}

impl SdeMethod {
  pub fn as_str(&self) -> &'static str {
    match self {
      SdeMethod::Euler => "Euler",
      SdeMethod::Milstein => "Milstein",
    }
  }
}

impl fmt::Display for SdeMethod {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for SdeMethod {
  type Err = JumpDiffusionError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "Euler" => Ok(SdeMethod::Euler),
      "Milstein" => Ok(SdeMethod::Milstein),
      other => Err(JumpDiffusionError::invalid(
        "scheme",
        format!("expected \"Euler\" or \"Milstein\", got {other:?}"),
      )),
    }
  }
}

/// One Euler-Maruyama step from `x` with Wiener increment `dw`.
#[inline]
pub fn euler_step<T: FloatExt>(x: T, dt: T, drift: &Fn1D<T>, diffusion: &Fn1D<T>, dw: T) -> T {
  x + drift.call(x) * dt + diffusion.call(x) * dw
}

/// One Milstein step from `x`. `correction` is `(dw^2 - dt) / 2`, see
/// [`milstein_correction`].
#[inline]
pub fn milstein_step<T: FloatExt>(
  x: T,
  dt: T,
  drift: &Fn1D<T>,
  diffusion: &Fn1D<T>,
  diffusion_prime: &Fn1D<T>,
  dw: T,
  correction: T,
) -> T {
  let b = diffusion.call(x);
  x + drift.call(x) * dt + b * dw + b * diffusion_prime.call(x) * correction
}

/// The Milstein correction `(dw_i^2 - dt) / 2` for every increment.
pub fn milstein_correction<T: FloatExt>(dw: &Array1<T>, dt: T) -> Array1<T> {
  let two = T::one() + T::one();
  dw.mapv(|w| (w * w - dt) / two)
}
