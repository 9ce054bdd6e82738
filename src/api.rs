//! Classifier adapter for a hosting ML platform
//!
//! The platform constructs the adapter from three hyperparameters, calls
//! `fit` once with a feature table and a target column, then calls
//! `predict` on any number of batches.
//!
//! # Quick Start
//!
//! ```rust
//! use rsvc::api::ClassifierAdapter;
//! use rsvc::core::{FeatureTable, TargetColumn};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let x = FeatureTable::from_rows(vec![
//!     vec![0.0, 0.1], vec![0.2, 0.0], vec![0.1, 0.3],
//!     vec![4.0, 4.1], vec![4.2, 3.9], vec![3.8, 4.0],
//! ])?;
//! let y = TargetColumn::from_labels(["a", "a", "a", "b", "b", "b"]);
//!
//! let mut adapter = ClassifierAdapter::from_platform_args(0.0, "rbf", "true")?;
//! adapter.fit(&x, &y)?;
//!
//! let table = adapter.predict(&x)?;
//! assert_eq!(table.columns(), vec!["Pa", "Pb", "Prediction"]);
//! # Ok(())
//! # }
//! ```

use crate::core::{FeatureTable, PredictionTable, Result, SvcError, TargetColumn};
use crate::hyperparams::Hyperparameters;
use crate::multiclass::SvcParams;
use crate::pipeline::{FittedPipeline, Pipeline};
use crate::preprocessing::StandardScaler;
use crate::utils::{stats, validation};
use log::info;

/// Standardize-then-SVC classifier behind a construct/fit/predict contract
#[derive(Debug)]
pub struct ClassifierAdapter {
    hyperparameters: Hyperparameters,
    fitted: Option<FittedPipeline>,
}

impl ClassifierAdapter {
    pub fn new(hyperparameters: Hyperparameters) -> Self {
        Self {
            hyperparameters,
            fitted: None,
        }
    }

    /// Construct from the platform's raw arguments
    ///
    /// See [`Hyperparameters::from_platform_args`] for the parsing rules.
    pub fn from_platform_args(log_penalty: f64, kernel: &str, shrinking: &str) -> Result<Self> {
        Ok(Self::new(Hyperparameters::from_platform_args(
            log_penalty,
            kernel,
            shrinking,
        )?))
    }

    pub fn hyperparameters(&self) -> &Hyperparameters {
        &self.hyperparameters
    }

    pub fn is_fitted(&self) -> bool {
        self.fitted.is_some()
    }

    /// Class labels discovered at fit, in probability column order
    pub fn classes(&self) -> Option<&[String]> {
        self.fitted.as_ref().map(FittedPipeline::classes)
    }

    /// Distinct training rows kept as support vectors
    pub fn n_support_vectors(&self) -> Option<usize> {
        self.fitted.as_ref().map(FittedPipeline::n_support_vectors)
    }

    /// The estimator configuration a fit will use
    pub fn svc_params(&self) -> SvcParams {
        SvcParams::new()
            .with_c(self.hyperparameters.penalty())
            .with_kernel(self.hyperparameters.kernel())
            .with_shrinking(self.hyperparameters.shrinking())
            .with_probability(true)
    }

    fn pipeline(&self) -> Pipeline {
        Pipeline::new(self.svc_params()).with_transform(StandardScaler::new())
    }

    /// Fit a fresh standardizer and classifier
    ///
    /// Previous fitted state is replaced only when every stage succeeds.
    pub fn fit(&mut self, x: &FeatureTable, y: &TargetColumn) -> Result<()> {
        validation::check_training_set(x.rows(), y.values())?;
        let classes = stats::unique_labels(y.values());
        validation::check_class_count(classes.len())?;

        let fitted = self.pipeline().fit(x, y.values())?;

        info!(
            "Fitted {} kernel with C = {} (shrinking: {}) on {} rows, {} features, {} classes; {} support vectors",
            self.hyperparameters.kernel(),
            self.hyperparameters.penalty(),
            self.hyperparameters.shrinking(),
            x.n_rows(),
            x.n_features(),
            classes.len(),
            fitted.n_support_vectors()
        );

        self.fitted = Some(fitted);
        Ok(())
    }

    /// Per-class probabilities plus the voted class for every row
    pub fn predict(&self, x: &FeatureTable) -> Result<PredictionTable> {
        let fitted = self.fitted.as_ref().ok_or(SvcError::NotFitted)?;
        let classes = fitted.classes().to_vec();

        if let Some(expected) = fitted.n_features() {
            if x.n_features() != expected {
                return Err(SvcError::DimensionMismatch {
                    expected,
                    actual: x.n_features(),
                });
            }
        }

        if x.is_empty() {
            return Ok(PredictionTable::new(classes, Vec::new(), Vec::new()));
        }

        let (predictions, probabilities) = fitted.predict_with_proba(x)?;
        Ok(PredictionTable::new(classes, probabilities, predictions))
    }

    /// Fraction of rows whose voted class matches the target
    pub fn score(&self, x: &FeatureTable, y: &TargetColumn) -> Result<f64> {
        if x.n_rows() != y.len() {
            return Err(SvcError::RowCountMismatch {
                features: x.n_rows(),
                targets: y.len(),
            });
        }
        let table = self.predict(x)?;
        Ok(stats::accuracy(table.predictions(), y.values()))
    }
}
