//! Dense row-major matrix holding generated regressor columns.

use crate::error::{FourierError, Result};
use std::collections::HashMap;

/// A dense, row-major block of exogenous regressors.
///
/// Each row corresponds to one time step and every row has the same width.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeatureMatrix {
    /// Row-major storage: data[row * ncols + col]
    data: Vec<f64>,
    nrows: usize,
    ncols: usize,
}

impl FeatureMatrix {
    /// Create an all-zero matrix with the given shape.
    pub fn zeros(nrows: usize, ncols: usize) -> Self {
        Self {
            data: vec![0.0; nrows * ncols],
            nrows,
            ncols,
        }
    }

    /// Create a matrix from row-major data.
    pub fn from_row_major(data: Vec<f64>, nrows: usize, ncols: usize) -> Result<Self> {
        if data.len() != nrows * ncols {
            return Err(FourierError::DimensionMismatch {
                expected: nrows * ncols,
                got: data.len(),
            });
        }
        Ok(Self { data, nrows, ncols })
    }

    /// Create a matrix from a list of equally sized rows.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self> {
        let ncols = rows.first().map(|r| r.len()).unwrap_or(0);
        let mut data = Vec::with_capacity(rows.len() * ncols);
        for row in rows {
            if row.len() != ncols {
                return Err(FourierError::DimensionMismatch {
                    expected: ncols,
                    got: row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Self {
            data,
            nrows: rows.len(),
            ncols,
        })
    }

    /// Number of rows (time steps).
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Number of columns (regressors).
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// Check if the matrix has no rows.
    pub fn is_empty(&self) -> bool {
        self.nrows == 0
    }

    /// Get a single value.
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row < self.nrows && col < self.ncols {
            Some(self.data[row * self.ncols + col])
        } else {
            None
        }
    }

    /// Get a row as a slice.
    pub fn row(&self, index: usize) -> Option<&[f64]> {
        if index < self.nrows {
            let start = index * self.ncols;
            Some(&self.data[start..start + self.ncols])
        } else {
            None
        }
    }

    pub(crate) fn row_mut(&mut self, index: usize) -> &mut [f64] {
        let start = index * self.ncols;
        &mut self.data[start..start + self.ncols]
    }

    /// Iterate over rows in time order.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> + '_ {
        // chunks_exact panics on a zero chunk size; a zero-width matrix has no data
        self.data.chunks_exact(self.ncols.max(1))
    }

    /// Copy out a single column.
    pub fn column(&self, col: usize) -> Result<Vec<f64>> {
        if col >= self.ncols {
            return Err(FourierError::IndexOutOfBounds {
                index: col,
                size: self.ncols,
            });
        }
        Ok(self.rows().map(|r| r[col]).collect())
    }

    /// Row-major view of the underlying data.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Copy into nested row vectors.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.rows().map(|r| r.to_vec()).collect()
    }

    /// Concatenate two blocks column-wise, `self` on the left.
    pub fn hstack(&self, right: &FeatureMatrix) -> Result<FeatureMatrix> {
        if self.nrows != right.nrows {
            return Err(FourierError::DimensionMismatch {
                expected: right.nrows,
                got: self.nrows,
            });
        }

        let ncols = self.ncols + right.ncols;
        let mut out = FeatureMatrix::zeros(self.nrows, ncols);
        for i in 0..self.nrows {
            let row = out.row_mut(i);
            row[..self.ncols].copy_from_slice(&self.data[i * self.ncols..(i + 1) * self.ncols]);
            row[self.ncols..]
                .copy_from_slice(&right.data[i * right.ncols..(i + 1) * right.ncols]);
        }
        Ok(out)
    }

    /// Convert into named column vectors, the layout forecasting models take
    /// for future regressors.
    pub fn into_regressors(self, names: &[String]) -> Result<HashMap<String, Vec<f64>>> {
        if names.len() != self.ncols {
            return Err(FourierError::DimensionMismatch {
                expected: self.ncols,
                got: names.len(),
            });
        }

        let mut columns = vec![Vec::with_capacity(self.nrows); self.ncols];
        for row in self.rows() {
            for (col, &v) in columns.iter_mut().zip(row) {
                col.push(v);
            }
        }

        Ok(names.iter().cloned().zip(columns).collect())
    }
}
