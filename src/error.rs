//! # Errors
//!
//! $$
//! \text{inputs}\notin\mathcal{D}\;\Rightarrow\;\text{Err before any draw}
//! $$
//!
use thiserror::Error;

/// Errors raised while configuring a jump-diffusion process.
///
/// Every check runs when the process is built, so sampling a configured
/// process never fails and never returns a partial path.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum JumpDiffusionError {
  /// A parameter is outside its domain (non-positive horizon, missing
  /// Milstein derivative, negative jump rate, ...).
  #[error("invalid argument `{name}`: {reason}")]
  InvalidArgument { name: &'static str, reason: String },

  /// A sampler rejected its parameters.
  #[error("distribution error: {0}")]
  Distribution(String),
}

impl JumpDiffusionError {
  pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
    let err = Self::InvalidArgument {
      name,
      reason: reason.into(),
    };
    tracing::warn!(%err, "rejected jump-diffusion parameters");
    err
  }

  /// `true` for [`JumpDiffusionError::InvalidArgument`].
  pub fn is_invalid_argument(&self) -> bool {
    matches!(self, Self::InvalidArgument { .. })
  }
}

pub type Result<T> = std::result::Result<T, JumpDiffusionError>;
