//! Ordered-stage estimator pipeline
//!
//! A [`Pipeline`] is a list of unfitted transform stages followed by one
//! classifier stage. Fitting runs the stages in order, each on the output of
//! the previous one, and yields a [`FittedPipeline`] that replays the same
//! transforms before every prediction.

use crate::core::{
    ClassifierStage, FeatureTable, FittedClassifier, FittedTransform, Result, SvcError,
    TransformStage,
};
use log::debug;

/// Unfitted pipeline
pub struct Pipeline {
    transforms: Vec<Box<dyn TransformStage>>,
    classifier: Box<dyn ClassifierStage>,
}

impl Pipeline {
    /// Pipeline with no transforms in front of `classifier`
    pub fn new<C: ClassifierStage + 'static>(classifier: C) -> Self {
        Self {
            transforms: Vec::new(),
            classifier: Box::new(classifier),
        }
    }

    /// Append a transform; transforms run in the order they were added
    pub fn with_transform<T: TransformStage + 'static>(mut self, stage: T) -> Self {
        self.transforms.push(Box::new(stage));
        self
    }

    pub fn n_transforms(&self) -> usize {
        self.transforms.len()
    }

    pub fn fit(&self, x: &FeatureTable, y: &[String]) -> Result<FittedPipeline> {
        if x.n_rows() != y.len() {
            return Err(SvcError::RowCountMismatch {
                features: x.n_rows(),
                targets: y.len(),
            });
        }

        let mut fitted_transforms = Vec::with_capacity(self.transforms.len());
        let mut current = x.clone();
        for (i, stage) in self.transforms.iter().enumerate() {
            let fitted = stage.fit(&current)?;
            current = fitted.transform(&current)?;
            debug!("Fitted transform stage {} on {} rows", i, current.n_rows());
            fitted_transforms.push(fitted);
        }

        let classifier = self.classifier.fit(&current, y)?;

        Ok(FittedPipeline {
            transforms: fitted_transforms,
            classifier,
        })
    }
}

/// Pipeline whose stages have all been fitted
#[derive(Debug)]
pub struct FittedPipeline {
    transforms: Vec<Box<dyn FittedTransform>>,
    classifier: Box<dyn FittedClassifier>,
}

impl FittedPipeline {
    /// Apply every fitted transform in order
    pub fn transform(&self, x: &FeatureTable) -> Result<FeatureTable> {
        let mut current = x.clone();
        for stage in &self.transforms {
            current = stage.transform(&current)?;
        }
        Ok(current)
    }

    pub fn predict(&self, x: &FeatureTable) -> Result<Vec<String>> {
        self.classifier.predict(&self.transform(x)?)
    }

    pub fn predict_proba(&self, x: &FeatureTable) -> Result<Vec<Vec<f64>>> {
        self.classifier.predict_proba(&self.transform(x)?)
    }

    /// Discrete predictions and probabilities from one pass through the transforms
    pub fn predict_with_proba(&self, x: &FeatureTable) -> Result<(Vec<String>, Vec<Vec<f64>>)> {
        let z = self.transform(x)?;
        Ok((self.classifier.predict(&z)?, self.classifier.predict_proba(&z)?))
    }

    pub fn classes(&self) -> &[String] {
        self.classifier.classes()
    }

    /// Input width expected by the first stage
    pub fn n_features(&self) -> Option<usize> {
        self.transforms.first().map(|t| t.n_features())
    }

    pub fn n_support_vectors(&self) -> usize {
        self.classifier.n_support_vectors()
    }
}
