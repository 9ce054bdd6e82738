//! Binary SVM training
//!
//! Integrates a kernel with the SMO solver and turns the dual solution into
//! a model that keeps only the support vectors.

use crate::core::{OptimizationResult, OptimizerConfig, Result, SvmModel};
use crate::kernel::Kernel;
use crate::solver::SMOSolver;
use std::sync::Arc;

/// High-level SVM optimizer that integrates kernel functions and solving algorithms
pub struct SVMOptimizer<K: Kernel + ?Sized> {
    kernel: Arc<K>,
    config: OptimizerConfig,
}

impl<K: Kernel + ?Sized> SVMOptimizer<K> {
    /// Create a new SVM optimizer with the given kernel and configuration
    pub fn new(kernel: Arc<K>, config: OptimizerConfig) -> Self {
        Self { kernel, config }
    }

    /// Create a new SVM optimizer with default configuration
    pub fn with_kernel(kernel: Arc<K>) -> Self {
        Self::new(kernel, OptimizerConfig::default())
    }

    /// Train a binary SVM on dense rows with labels in {+1, -1}
    pub fn train(&self, rows: &[Vec<f64>], labels: &[f64]) -> Result<TrainedSVM<K>> {
        let solver = SMOSolver::new(Arc::clone(&self.kernel), self.config.clone());
        let result = solver.solve(rows, labels)?;
        Ok(TrainedSVM::new(Arc::clone(&self.kernel), rows, labels, &result))
    }

    /// Get the optimizer configuration
    pub fn config(&self) -> &OptimizerConfig {
        &self.config
    }

    /// Get the kernel
    pub fn kernel(&self) -> &K {
        &self.kernel
    }
}

/// A trained binary SVM: decision(x) = Σ αᵢ yᵢ K(svᵢ, x) − ρ
#[derive(Debug)]
pub struct TrainedSVM<K: Kernel + ?Sized> {
    kernel: Arc<K>,
    support_vectors: Vec<Vec<f64>>,
    /// αᵢ yᵢ for each support vector
    dual_coef: Vec<f64>,
    rho: f64,
    support_indices: Vec<usize>,
    iterations: usize,
}

impl<K: Kernel + ?Sized> TrainedSVM<K> {
    pub(crate) fn new(
        kernel: Arc<K>,
        rows: &[Vec<f64>],
        labels: &[f64],
        result: &OptimizationResult,
    ) -> Self {
        let support_vectors = result
            .support_vectors
            .iter()
            .map(|&i| rows[i].clone())
            .collect();
        let dual_coef = result
            .support_vectors
            .iter()
            .map(|&i| result.alpha[i] * labels[i])
            .collect();

        Self {
            kernel,
            support_vectors,
            dual_coef,
            rho: result.rho,
            support_indices: result.support_vectors.clone(),
            iterations: result.iterations,
        }
    }

    /// Get the decision function value for a row
    pub fn decision_function(&self, x: &[f64]) -> f64 {
        self.support_vectors
            .iter()
            .zip(&self.dual_coef)
            .map(|(sv, coef)| coef * self.kernel.compute(sv, x))
            .sum::<f64>()
            - self.rho
    }

    /// Get the support vectors
    pub fn support_vectors(&self) -> &[Vec<f64>] {
        &self.support_vectors
    }

    /// αᵢ yᵢ for each support vector
    pub fn dual_coef(&self) -> &[f64] {
        &self.dual_coef
    }

    /// Get the indices of support vectors in the training rows
    pub fn support_vector_indices(&self) -> &[usize] {
        &self.support_indices
    }

    /// Solver iterations used in training
    pub fn iterations(&self) -> usize {
        self.iterations
    }
}

impl<K: Kernel + ?Sized> SvmModel for TrainedSVM<K> {
    fn decision_value(&self, x: &[f64]) -> f64 {
        self.decision_function(x)
    }

    fn n_support_vectors(&self) -> usize {
        self.support_vectors.len()
    }

    fn rho(&self) -> f64 {
        self.rho
    }
}
