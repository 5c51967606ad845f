//! # Noise
//!
//! $$
//! \Delta W_i\sim\mathcal N(0,\sqrt{\Delta t})
//! $$
//!
pub mod gn;
