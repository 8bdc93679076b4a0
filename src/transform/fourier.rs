//! Fourier-term seasonal regressors.
//!
//! Generates sine/cosine harmonics of a seasonal period for use as exogenous
//! regressors, matching the layout of R's `forecast::fourier`:
//!
//! ```text
//! [S1, C1, S2, C2, ..., SK, CK]    Sk = sin(2πk·t/m), Ck = cos(2πk·t/m)
//! ```
//!
//! where `t` is the 1-based absolute time index. Fitting only records how many
//! observations were seen, so a forecast-horizon transform continues the
//! harmonic phase from the end of the fitted series.

use crate::core::FeatureMatrix;
use crate::error::{FourierError, Result};
use std::f64::consts::TAU;
use tracing::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Fitted state of a Fourier featurizer.
///
/// Immutable once created; holds the seasonal period `m`, the harmonic order
/// `K` and the number of observations seen at fit time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "RawFourierState")
)]
pub struct FourierState {
    period: usize,
    order: usize,
    offset: usize,
}

/// Unvalidated persisted form of [`FourierState`].
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawFourierState {
    period: usize,
    order: usize,
    offset: usize,
}

#[cfg(feature = "serde")]
impl TryFrom<RawFourierState> for FourierState {
    type Error = FourierError;

    fn try_from(raw: RawFourierState) -> Result<Self> {
        fit(raw.offset, raw.period, raw.order)
    }
}

impl FourierState {
    /// Seasonal period (m).
    pub fn period(&self) -> usize {
        self.period
    }

    /// Number of harmonic pairs (K).
    pub fn order(&self) -> usize {
        self.order
    }

    /// Number of observations seen so far.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Width of every generated matrix (2K).
    pub fn n_features(&self) -> usize {
        2 * self.order
    }

    /// State after `n_new` further observations have been seen.
    ///
    /// # Errors
    /// `InvalidParameter` if the new offset does not fit in `usize`.
    pub fn advance(&self, n_new: usize) -> Result<Self> {
        let offset = self.offset.checked_add(n_new).ok_or_else(time_overflow)?;
        Ok(Self { offset, ..*self })
    }
}

/// Largest harmonic order allowed for a period: `floor((m - 1) / 2)`.
///
/// Returns 0 for periods below 3, which admit no valid order.
pub fn default_order(period: usize) -> usize {
    period.saturating_sub(1) / 2
}

fn time_overflow() -> FourierError {
    FourierError::InvalidParameter("time index overflows usize".to_string())
}

fn validate(period: usize, order: usize) -> Result<()> {
    if period < 2 {
        return Err(FourierError::InvalidParameter(format!(
            "seasonal period m must be at least 2, got {period}"
        )));
    }
    if order == 0 {
        return Err(FourierError::InvalidParameter(
            "harmonic order k must be at least 1".to_string(),
        ));
    }
    // k < m / 2 without rounding m / 2 down
    if 2 * order >= period {
        return Err(FourierError::InvalidParameter(format!(
            "harmonic order k must be less than m / 2, got k = {order} with m = {period}"
        )));
    }
    Ok(())
}

/// Fit on a series of `n_obs` observations.
///
/// # Arguments
/// * `n_obs` - Number of observations in the fitted series
/// * `period` - Seasonal period (m)
/// * `order` - Number of sine/cosine pairs (K), must satisfy `1 <= K < m/2`
pub fn fit(n_obs: usize, period: usize, order: usize) -> Result<FourierState> {
    validate(period, order)?;

    debug!(period, order, offset = n_obs, "fitted fourier featurizer");

    Ok(FourierState {
        period,
        order,
        offset: n_obs,
    })
}

/// Fit on a series. Only its length is used.
pub fn fit_series(series: &[f64], period: usize, order: usize) -> Result<FourierState> {
    fit(series.len(), period, order)
}

/// Write the harmonics at absolute time `t` into `out` (length 2K).
fn fill_row(out: &mut [f64], period: usize, t: usize) {
    let m = period as u128;
    for (j, pair) in out.chunks_exact_mut(2).enumerate() {
        let k = (j + 1) as u128;
        // Reduce k·t modulo m before scaling so whole cycles are exact.
        let phase = ((k * t as u128) % m) as f64;
        let angle = TAU * phase / period as f64;
        pair[0] = angle.sin();
        pair[1] = angle.cos();
    }
}

fn harmonics(state: &FourierState, first_t: usize, rows: usize) -> FeatureMatrix {
    let mut matrix = FeatureMatrix::zeros(rows, state.n_features());
    for i in 0..rows {
        fill_row(matrix.row_mut(i), state.period, first_t + i);
    }
    matrix
}

/// Harmonics at a single absolute time index `t` (1-based).
pub fn fourier_row(period: usize, order: usize, t: usize) -> Result<Vec<f64>> {
    validate(period, order)?;
    let mut row = vec![0.0; 2 * order];
    fill_row(&mut row, period, t);
    Ok(row)
}

/// Generate the Fourier regressor matrix.
///
/// With `n_periods == None`, returns one row per fitted observation
/// (`t = 1..=offset`). With `Some(p)`, returns `p` rows continuing after the
/// fitted series (`t = offset+1..=offset+p`).
///
/// # Errors
/// `InvalidParameter` if `n_periods == Some(0)` or the last time index would
/// overflow `usize`.
pub fn transform(state: &FourierState, n_periods: Option<usize>) -> Result<FeatureMatrix> {
    let (first_t, rows) = match n_periods {
        None => (1, state.offset),
        Some(0) => {
            return Err(FourierError::InvalidParameter(
                "n_periods must be a positive integer".to_string(),
            ))
        }
        Some(p) => {
            // offset + p bounds every index in the horizon
            state.offset.checked_add(p).ok_or_else(time_overflow)?;
            (state.offset + 1, p)
        }
    };

    debug!(
        period = state.period,
        order = state.order,
        first_t,
        rows,
        "generating fourier terms"
    );

    Ok(harmonics(state, first_t, rows))
}

/// Generate Fourier terms and append them to an existing exogenous block.
///
/// The Fourier columns are placed to the right of `exog`. When `exog` is
/// `None` this is equivalent to [`transform`].
///
/// # Errors
/// `DimensionMismatch` if `exog` does not have one row per generated row.
pub fn transform_with_exog(
    state: &FourierState,
    exog: Option<&FeatureMatrix>,
    n_periods: Option<usize>,
) -> Result<FeatureMatrix> {
    let terms = transform(state, n_periods)?;
    match exog {
        Some(x) if x.nrows() != terms.nrows() => Err(FourierError::DimensionMismatch {
            expected: terms.nrows(),
            got: x.nrows(),
        }),
        Some(x) => x.hstack(&terms),
        None => Ok(terms),
    }
}

/// Record `n_new` new observations and return their Fourier rows.
///
/// Returns the advanced state together with the rows for
/// `t = offset+1..=offset+n_new`.
pub fn update_and_transform(
    state: &FourierState,
    n_new: usize,
) -> Result<(FourierState, FeatureMatrix)> {
    if n_new == 0 {
        return Err(FourierError::InvalidParameter(
            "update requires at least one new observation".to_string(),
        ));
    }
    let next = state.advance(n_new)?;
    let terms = transform(state, Some(n_new))?;
    Ok((next, terms))
}

/// Column labels in R's `fourier` convention: `S1-5, C1-5, S2-5, C2-5, ...`.
pub fn column_names(state: &FourierState) -> Vec<String> {
    (1..=state.order)
        .flat_map(|k| {
            [
                format!("S{k}-{}", state.period),
                format!("C{k}-{}", state.period),
            ]
        })
        .collect()
}

/// Builder-style configuration for Fourier regressors.
///
/// # Example
///
/// ```
/// use seasonal_fourier::transform::{transform, FourierFeaturizer};
///
/// let y = vec![0.0; 24];
/// let state = FourierFeaturizer::new(12).with_order(3).fit(&y).unwrap();
///
/// let in_sample = transform(&state, None).unwrap();
/// assert_eq!(in_sample.nrows(), 24);
/// assert_eq!(in_sample.ncols(), 6);
///
/// let future = transform(&state, Some(6)).unwrap();
/// assert_eq!(future.nrows(), 6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FourierFeaturizer {
    period: usize,
    order: Option<usize>,
}

impl FourierFeaturizer {
    /// Create a featurizer for the given seasonal period.
    pub fn new(period: usize) -> Self {
        Self {
            period,
            order: None,
        }
    }

    /// Set the number of harmonic pairs.
    pub fn with_order(mut self, order: usize) -> Self {
        self.order = Some(order);
        self
    }

    /// Seasonal period (m).
    pub fn period(&self) -> usize {
        self.period
    }

    /// Harmonic order to be used: the configured one or [`default_order`].
    pub fn order(&self) -> usize {
        self.order.unwrap_or_else(|| default_order(self.period))
    }

    /// Fit on a series.
    pub fn fit(&self, series: &[f64]) -> Result<FourierState> {
        self.fit_len(series.len())
    }

    /// Fit on a series of `n_obs` observations.
    pub fn fit_len(&self, n_obs: usize) -> Result<FourierState> {
        fit(n_obs, self.period, self.order())
    }
}
