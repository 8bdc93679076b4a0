//! # seasonal-fourier
//!
//! Fourier-term seasonal regressors for time series forecasting.
//!
//! Models a seasonal period `m` with `K` sine/cosine harmonic pairs and
//! produces a regressor matrix for the observed series or for a forecast
//! horizon that continues where the series ended. Output is compatible with
//! R's `forecast::fourier`.

pub mod core;
pub mod error;
pub mod transform;

pub use crate::core::FeatureMatrix;
pub use error::{FourierError, Result};
pub use transform::{FourierFeaturizer, FourierState};

pub mod prelude {
    pub use crate::core::FeatureMatrix;
    pub use crate::error::{FourierError, Result};
    pub use crate::transform::{fit, transform, FourierFeaturizer, FourierState};
}
