//! # Macros
//!
//! $$
//! \text{macro expansion} : (\text{float type}) \mapsto (\text{impl blocks})
//! $$
//!
macro_rules! impl_float_ext {
  ($($ty:ty),* $(,)?) => {
    $(
      impl crate::traits::FloatExt for $ty {
        type Normal = rand_distr::Normal<$ty>;
        type Poisson = rand_distr::Poisson<$ty>;

        fn from_u64_(n: u64) -> Self {
          n as $ty
        }

        fn normal(mean: Self, std_dev: Self) -> crate::error::Result<Self::Normal> {
          rand_distr::Normal::new(mean, std_dev)
            .map_err(|err| crate::error::JumpDiffusionError::Distribution(err.to_string()))
        }

        fn poisson(lambda: Self) -> crate::error::Result<Self::Poisson> {
          rand_distr::Poisson::new(lambda)
            .map_err(|err| crate::error::JumpDiffusionError::Distribution(err.to_string()))
        }
      }
    )*
  };
}
