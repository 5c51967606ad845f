//! # Jump
//!
//! $$
//! dX_t=a(X_t)dt+b(X_t)dW_t+\xi dJ_t
//! $$
//!
pub mod jump_diffusion;
