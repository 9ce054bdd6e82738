//! Feature standardization
//!
//! `StandardScaler` captures per-column mean and population standard
//! deviation at fit time and replays `(x - mean) / scale` afterwards.

use crate::core::{FeatureTable, FittedTransform, Result, SvcError, TransformStage};
use crate::utils::validation;

/// Unfitted standardizer
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardScaler;

impl StandardScaler {
    pub fn new() -> Self {
        Self
    }

    /// Compute column statistics from the training features
    pub fn fit(&self, x: &FeatureTable) -> Result<FittedScaler> {
        if x.is_empty() {
            return Err(SvcError::EmptyDataset);
        }
        let n_features = x.n_features();
        validation::check_has_features(n_features)?;
        validation::check_matrix(x.rows(), n_features)?;

        let n = x.n_rows() as f64;
        let mut mean = vec![0.0; n_features];
        for row in x.rows() {
            for (m, v) in mean.iter_mut().zip(row) {
                *m += v;
            }
        }
        mean.iter_mut().for_each(|m| *m /= n);

        let mut var = vec![0.0; n_features];
        for row in x.rows() {
            for ((s, v), m) in var.iter_mut().zip(row).zip(&mean) {
                *s += (v - m) * (v - m);
            }
        }

        // Constant columns are centered but not rescaled
        let scale = var
            .into_iter()
            .map(|s| {
                let std = (s / n).sqrt();
                if std > 0.0 {
                    std
                } else {
                    1.0
                }
            })
            .collect();

        Ok(FittedScaler { mean, scale })
    }
}

impl TransformStage for StandardScaler {
    fn fit(&self, x: &FeatureTable) -> Result<Box<dyn FittedTransform>> {
        Ok(Box::new(StandardScaler::fit(self, x)?))
    }
}

/// Standardizer with captured statistics
#[derive(Debug, Clone, PartialEq)]
pub struct FittedScaler {
    mean: Vec<f64>,
    scale: Vec<f64>,
}

impl FittedScaler {
    pub fn mean(&self) -> &[f64] {
        &self.mean
    }

    /// Population standard deviation per column, 1.0 for constant columns
    pub fn scale(&self) -> &[f64] {
        &self.scale
    }

    pub fn transform_rows(&self, rows: &[Vec<f64>]) -> Result<Vec<Vec<f64>>> {
        validation::check_matrix(rows, self.mean.len())?;
        Ok(rows
            .iter()
            .map(|row| {
                row.iter()
                    .zip(self.mean.iter().zip(&self.scale))
                    .map(|(v, (m, s))| (v - m) / s)
                    .collect()
            })
            .collect())
    }
}

impl FittedTransform for FittedScaler {
    fn transform(&self, x: &FeatureTable) -> Result<FeatureTable> {
        if x.n_features() != self.mean.len() {
            return Err(SvcError::DimensionMismatch {
                expected: self.mean.len(),
                actual: x.n_features(),
            });
        }
        Ok(x.with_rows(self.transform_rows(x.rows())?))
    }

    fn n_features(&self) -> usize {
        self.mean.len()
    }
}
