//! # jump-diffusion
//!
//! $$
//! dX_t=a(X_t)\,dt+b(X_t)\,dW_t+\xi\,dJ_t
//! $$
//!
//! Sample paths of scalar jump-diffusion processes with the Euler-Maruyama
//! or the Milstein scheme. The Wiener increments are shared by both schemes
//! and the compound Poisson jump term is superposed on every step.
//!
//! ```rust
//! use jump_diffusion::{simulate, Fn1D, SdeMethod};
//! use rand::SeedableRng;
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(42);
//! let path = simulate(
//!   1.0, 0.01,
//!   Fn1D::new(|x: f64| -2.0 * x), Fn1D::constant(1.0),
//!   0.0, 0.0, Some(0.0), SdeMethod::Euler, None,
//!   &mut rng,
//! )?;
//! assert_eq!(path.len(), 100);
//! # Ok::<(), jump_diffusion::JumpDiffusionError>(())
//! ```

#[macro_use]
mod macros;

pub mod error;
pub mod stochastic;
pub mod traits;

pub use error::JumpDiffusionError;
pub use stochastic::jump::jump_diffusion::simulate;
pub use stochastic::jump::jump_diffusion::JumpDiffusion;
pub use stochastic::sde::SdeMethod;
pub use traits::FloatExt;
pub use traits::Fn1D;
pub use traits::ProcessExt;
