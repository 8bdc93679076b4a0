//! Deterministic feature transforms for time series.
//!
//! Provides Fourier-term seasonal regressors that can be passed to a
//! forecasting model as an exogenous block.
//!
//! # Example
//!
//! ```
//! use seasonal_fourier::transform::{column_names, fit, transform};
//!
//! // Monthly data, two years observed
//! let state = fit(24, 12, 2).unwrap();
//!
//! // In-sample regressors, one row per observation
//! let xreg = transform(&state, None).unwrap();
//! assert_eq!(xreg.nrows(), 24);
//!
//! // Regressors for the next 6 months
//! let future = transform(&state, Some(6)).unwrap();
//! let named = future.into_regressors(&column_names(&state)).unwrap();
//! assert_eq!(named["S1-12"].len(), 6);
//! ```

pub mod fourier;

pub use fourier::{
    column_names, default_order, fit, fit_series, fourier_row, transform, transform_with_exog,
    update_and_transform, FourierFeaturizer, FourierState,
};
