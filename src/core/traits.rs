//! Core traits: binary decision models and the pipeline stage seams

use crate::core::{FeatureTable, Result};
use std::fmt::Debug;

/// Trained binary SVM
pub trait SvmModel: Send + Sync {
    /// Signed distance-like score; positive means the +1 class
    fn decision_value(&self, x: &[f64]) -> f64;

    /// Scores for a batch of rows
    fn decision_values(&self, rows: &[Vec<f64>]) -> Vec<f64> {
        rows.iter().map(|x| self.decision_value(x)).collect()
    }

    /// Get the number of support vectors
    fn n_support_vectors(&self) -> usize;

    /// Get the intercept ρ
    fn rho(&self) -> f64;
}

/// Unfitted preprocessing stage of a pipeline
pub trait TransformStage: Send + Sync {
    /// Capture statistics from the training features
    fn fit(&self, x: &FeatureTable) -> Result<Box<dyn FittedTransform>>;
}

/// Preprocessing stage with captured statistics, replayed at predict time
pub trait FittedTransform: Send + Sync + Debug {
    fn transform(&self, x: &FeatureTable) -> Result<FeatureTable>;

    /// Number of input columns the stage was fitted on
    fn n_features(&self) -> usize;
}

/// Unfitted final estimator of a pipeline
pub trait ClassifierStage: Send + Sync {
    fn fit(&self, x: &FeatureTable, y: &[String]) -> Result<Box<dyn FittedClassifier>>;
}

/// Final estimator after training
pub trait FittedClassifier: Send + Sync + Debug {
    /// Class labels in the order used by [`FittedClassifier::predict_proba`]
    fn classes(&self) -> &[String];

    /// Discrete label per row
    fn predict(&self, x: &FeatureTable) -> Result<Vec<String>>;

    /// One probability per class per row
    fn predict_proba(&self, x: &FeatureTable) -> Result<Vec<Vec<f64>>>;

    fn n_support_vectors(&self) -> usize;
}
