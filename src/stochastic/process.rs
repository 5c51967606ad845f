//! # Process
//!
//! $$
//! J_t=\sum_{k\le N_t}Y_k,\quad N_t\sim\mathrm{Poisson}(\lambda t)
//! $$
//!
pub mod cpoisson;
pub mod poisson;
