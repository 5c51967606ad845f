//! # Stochastic Process Simulation Modules
//!
//! `stochastic` simulates scalar jump-diffusion processes
//!
//! $$
//! dX_t = a(X_t)\,dt + b(X_t)\,dW_t + \xi\,dJ_t
//! $$
//!
//! on a fixed time grid.
//!
//! ## Modules
//!
//! | Module      | Description                                                                   |
//! |-------------|-------------------------------------------------------------------------------|
//! | [`noise`]   | Gaussian (Wiener) increments.                                                 |
//! | [`process`] | Poisson jump counts and the compound Poisson jump term.                       |
//! | [`sde`]     | Euler-Maruyama and Milstein one-step updates.                                 |
//! | [`jump`]    | The jump-diffusion path simulator.                                            |
//!
//! ## Example Usage
//!
//! ```rust
//! use jump_diffusion::stochastic::jump::jump_diffusion::JumpDiffusion;
//! use jump_diffusion::stochastic::sde::SdeMethod;
//! use jump_diffusion::traits::{Fn1D, ProcessExt};
//!
//! let ou = JumpDiffusion::new(
//!   1.0, 0.01,
//!   Fn1D::new(|x: f64| -2.0 * x), Fn1D::constant(1.0),
//!   0.5, 3.0, Some(0.0), SdeMethod::Euler, None,
//! ).unwrap();
//! let path = ou.sample();
//! ```

pub mod jump;
pub mod noise;
pub mod process;
pub mod sde;

pub use crate::traits::FloatExt;
pub use crate::traits::ProcessExt;

/// Default number of time steps
pub const N: usize = 1000;
/// Default initial value
pub const X0: f64 = 0.5;
/// Default time step
pub const DT: f64 = 0.01;

impl_float_ext!(f32, f64);
