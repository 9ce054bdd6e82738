//! Utility functions for input validation and label bookkeeping

/// Shape and value checks shared by the estimators
pub mod validation {
    use crate::core::{Result, SvcError};

    /// Every row has `n_features` values and every value is finite
    pub fn check_matrix(rows: &[Vec<f64>], n_features: usize) -> Result<()> {
        for (r, row) in rows.iter().enumerate() {
            if row.len() != n_features {
                return Err(SvcError::DimensionMismatch {
                    expected: n_features,
                    actual: row.len(),
                });
            }
            if let Some(c) = row.iter().position(|v| !v.is_finite()) {
                return Err(SvcError::NonFiniteValue { row: r, column: c });
            }
        }
        Ok(())
    }

    /// Training input: non-empty, at least one feature, aligned with the
    /// targets, finite
    pub fn check_training_set<T>(rows: &[Vec<f64>], targets: &[T]) -> Result<()> {
        if rows.is_empty() {
            return Err(SvcError::EmptyDataset);
        }
        check_has_features(rows[0].len())?;
        if rows.len() != targets.len() {
            return Err(SvcError::RowCountMismatch {
                features: rows.len(),
                targets: targets.len(),
            });
        }
        check_matrix(rows, rows[0].len())
    }

    /// At least one feature column
    pub fn check_has_features(n_features: usize) -> Result<()> {
        if n_features == 0 {
            return Err(SvcError::InvalidParameter(
                "feature table has no columns".to_string(),
            ));
        }
        Ok(())
    }

    /// At least two distinct classes
    pub fn check_class_count(n_classes: usize) -> Result<()> {
        if n_classes < 2 {
            return Err(SvcError::InsufficientClasses(n_classes));
        }
        Ok(())
    }

}

/// Label statistics
pub mod stats {
    use std::collections::BTreeMap;

    /// Distinct labels in lexicographic order
    pub fn unique_labels<S: AsRef<str>>(labels: &[S]) -> Vec<String> {
        class_counts(labels).into_keys().collect()
    }

    /// Number of rows per label, keyed in lexicographic order
    pub fn class_counts<S: AsRef<str>>(labels: &[S]) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for label in labels {
            *counts.entry(label.as_ref().to_string()).or_insert(0) += 1;
        }
        counts
    }

    /// Fraction of positions where both slices agree
    pub fn accuracy<S: AsRef<str>, T: AsRef<str>>(predicted: &[S], actual: &[T]) -> f64 {
        if actual.is_empty() {
            return 0.0;
        }
        let correct = predicted
            .iter()
            .zip(actual)
            .filter(|(p, a)| p.as_ref() == a.as_ref())
            .count();
        correct as f64 / actual.len() as f64
    }

}
