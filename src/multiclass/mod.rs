//! One-vs-one support vector classification
//!
//! A k-class problem trains k(k−1)/2 binary machines, one per class pair
//! (i, j) with i < j and class i mapped to +1. Discrete predictions come
//! from pairwise voting. With probability enabled every pair also carries a
//! Platt sigmoid, and the pairwise probabilities are coupled into one
//! distribution per row.

use crate::core::{
    ClassifierStage, FeatureTable, FittedClassifier, OptimizerConfig, Result, SvcError, SvmModel,
};
use crate::kernel::{Gamma, Kernel, KernelKind};
use crate::optimizer::{SVMOptimizer, TrainedSVM};
use crate::probability::{fit_binary_probability, multiclass_probability, pairwise_probability, PlattScaling};
use crate::utils::{stats, validation};
use log::debug;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

/// Unfitted C-SVC with builder-style configuration
#[derive(Debug, Clone, PartialEq)]
pub struct SvcParams {
    c: f64,
    kernel: KernelKind,
    gamma: Gamma,
    degree: u32,
    coef0: f64,
    shrinking: bool,
    probability: bool,
    epsilon: f64,
    cache_size: usize,
    max_iterations: usize,
    seed: u64,
}

impl Default for SvcParams {
    fn default() -> Self {
        let solver = OptimizerConfig::default();
        Self {
            c: solver.c,
            kernel: KernelKind::Rbf,
            gamma: Gamma::Scale,
            degree: 3,
            coef0: 0.0,
            shrinking: solver.shrinking,
            probability: false,
            epsilon: solver.epsilon,
            cache_size: solver.cache_size,
            max_iterations: solver.max_iterations,
            seed: 0,
        }
    }
}

impl SvcParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set regularization parameter C
    pub fn with_c(mut self, c: f64) -> Self {
        self.c = c;
        self
    }

    pub fn with_kernel(mut self, kernel: KernelKind) -> Self {
        self.kernel = kernel;
        self
    }

    pub fn with_gamma(mut self, gamma: Gamma) -> Self {
        self.gamma = gamma;
        self
    }

    /// Polynomial degree, ignored by other kernels
    pub fn with_degree(mut self, degree: u32) -> Self {
        self.degree = degree;
        self
    }

    pub fn with_coef0(mut self, coef0: f64) -> Self {
        self.coef0 = coef0;
        self
    }

    /// Enable or disable the shrinking heuristic
    pub fn with_shrinking(mut self, shrinking: bool) -> Self {
        self.shrinking = shrinking;
        self
    }

    /// Calibrate pairwise probabilities at fit time
    pub fn with_probability(mut self, probability: bool) -> Self {
        self.probability = probability;
        self
    }

    /// Set convergence tolerance
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Set kernel cache size in bytes
    pub fn with_cache_size(mut self, cache_size: usize) -> Self {
        self.cache_size = cache_size;
        self
    }

    /// Set maximum number of solver iterations per binary machine
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Seed for the fold shuffle used by probability calibration
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn c(&self) -> f64 {
        self.c
    }

    pub fn kernel(&self) -> KernelKind {
        self.kernel
    }

    pub fn gamma(&self) -> Gamma {
        self.gamma
    }

    pub fn shrinking(&self) -> bool {
        self.shrinking
    }

    pub fn probability(&self) -> bool {
        self.probability
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.c > 0.0 && self.c.is_finite()) {
            return Err(SvcError::InvalidParameter(format!(
                "C must be positive and finite, got: {}",
                self.c
            )));
        }
        if !(self.epsilon > 0.0) {
            return Err(SvcError::InvalidParameter(format!(
                "epsilon must be positive, got: {}",
                self.epsilon
            )));
        }
        if self.kernel == KernelKind::Poly && self.degree == 0 {
            return Err(SvcError::InvalidParameter(
                "polynomial degree must be at least 1".to_string(),
            ));
        }
        if let Gamma::Value(g) = self.gamma {
            if !(g > 0.0 && g.is_finite()) {
                return Err(SvcError::InvalidParameter(format!(
                    "gamma must be positive and finite, got: {g}"
                )));
            }
        }
        Ok(())
    }

    fn optimizer_config(&self) -> OptimizerConfig {
        OptimizerConfig {
            c: self.c,
            epsilon: self.epsilon,
            max_iterations: self.max_iterations,
            cache_size: self.cache_size,
            shrinking: self.shrinking,
            ..OptimizerConfig::default()
        }
    }

    /// Train one machine per class pair on dense rows with string labels
    pub fn fit<S: AsRef<str>>(&self, rows: &[Vec<f64>], labels: &[S]) -> Result<FittedSvc> {
        self.validate()?;
        validation::check_training_set(rows, labels)?;

        let classes = stats::unique_labels(labels);
        validation::check_class_count(classes.len())?;

        let class_index = class_indices(&classes, labels)?;

        let gamma = self.gamma.resolve(rows);
        let kernel = self.kernel.build(gamma, self.degree, self.coef0)?;
        let config = self.optimizer_config();
        let optimizer = SVMOptimizer::new(Arc::clone(&kernel), config.clone());

        let k = classes.len();
        let mut machines = Vec::with_capacity(k * (k - 1) / 2);
        let mut support = BTreeSet::new();

        for i in 0..k {
            for j in (i + 1)..k {
                let members: Vec<usize> = (0..rows.len())
                    .filter(|&r| class_index[r] == i || class_index[r] == j)
                    .collect();
                let pair_rows: Vec<Vec<f64>> = members.iter().map(|&r| rows[r].clone()).collect();
                let pair_labels: Vec<f64> = members
                    .iter()
                    .map(|&r| if class_index[r] == i { 1.0 } else { -1.0 })
                    .collect();

                let machine = optimizer.train(&pair_rows, &pair_labels)?;
                support.extend(machine.support_vector_indices().iter().map(|&s| members[s]));

                let platt = if self.probability {
                    Some(fit_binary_probability(
                        &kernel,
                        &config,
                        &pair_rows,
                        &pair_labels,
                        self.seed,
                    )?)
                } else {
                    None
                };

                debug!(
                    "Pair ({}, {}): {} rows, {} support vectors, {} iterations",
                    classes[i],
                    classes[j],
                    members.len(),
                    machine.n_support_vectors(),
                    machine.iterations()
                );

                machines.push(PairMachine {
                    positive: i,
                    negative: j,
                    machine,
                    platt,
                });
            }
        }

        Ok(FittedSvc {
            classes,
            n_features: rows[0].len(),
            gamma,
            machines,
            n_support_vectors: support.len(),
        })
    }
}

/// Position of every label in `classes`
fn class_indices<S: AsRef<str>>(classes: &[String], labels: &[S]) -> Result<Vec<usize>> {
    let index: BTreeMap<&str, usize> = classes
        .iter()
        .enumerate()
        .map(|(i, c)| (c.as_str(), i))
        .collect();
    labels
        .iter()
        .map(|l| {
            index.get(l.as_ref()).copied().ok_or_else(|| {
                SvcError::InvalidParameter(format!("label '{}' is not a known class", l.as_ref()))
            })
        })
        .collect()
}

impl ClassifierStage for SvcParams {
    fn fit(&self, x: &FeatureTable, y: &[String]) -> Result<Box<dyn FittedClassifier>> {
        Ok(Box::new(SvcParams::fit(self, x.rows(), y)?))
    }
}

#[derive(Debug)]
struct PairMachine {
    positive: usize,
    negative: usize,
    machine: TrainedSVM<dyn Kernel>,
    platt: Option<PlattScaling>,
}

/// Trained one-vs-one classifier
#[derive(Debug)]
pub struct FittedSvc {
    classes: Vec<String>,
    n_features: usize,
    gamma: f64,
    machines: Vec<PairMachine>,
    n_support_vectors: usize,
}

impl FittedSvc {
    /// Class labels in lexicographic order
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn n_features(&self) -> usize {
        self.n_features
    }

    /// Kernel coefficient after resolving `Gamma::Scale` / `Gamma::Auto`
    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    /// Number of binary machines, k(k−1)/2
    pub fn n_machines(&self) -> usize {
        self.machines.len()
    }

    /// Distinct training rows that are a support vector of at least one machine
    pub fn n_support_vectors(&self) -> usize {
        self.n_support_vectors
    }

    pub fn has_probability(&self) -> bool {
        self.machines.iter().all(|m| m.platt.is_some())
    }

    /// Pairwise decision values, ordered (0,1), (0,2), …, (1,2), …
    pub fn decision_function(&self, rows: &[Vec<f64>]) -> Result<Vec<Vec<f64>>> {
        validation::check_matrix(rows, self.n_features)?;
        Ok(rows.iter().map(|x| self.pair_decisions(x)).collect())
    }

    /// Class with the most pairwise wins; ties go to the lower class index
    pub fn predict(&self, rows: &[Vec<f64>]) -> Result<Vec<String>> {
        validation::check_matrix(rows, self.n_features)?;
        Ok(rows
            .iter()
            .map(|x| self.classes[self.vote(&self.pair_decisions(x))].clone())
            .collect())
    }

    /// Probability of each class per row, columns in class order
    pub fn predict_proba(&self, rows: &[Vec<f64>]) -> Result<Vec<Vec<f64>>> {
        if !self.has_probability() {
            return Err(SvcError::ProbabilityNotEnabled);
        }
        validation::check_matrix(rows, self.n_features)?;
        Ok(rows
            .iter()
            .map(|x| self.couple(&self.pair_decisions(x)))
            .collect())
    }

    fn pair_decisions(&self, x: &[f64]) -> Vec<f64> {
        self.machines
            .iter()
            .map(|m| m.machine.decision_function(x))
            .collect()
    }

    fn vote(&self, decisions: &[f64]) -> usize {
        let mut votes = vec![0usize; self.classes.len()];
        for (m, &d) in self.machines.iter().zip(decisions) {
            if d > 0.0 {
                votes[m.positive] += 1;
            } else {
                votes[m.negative] += 1;
            }
        }

        let mut best = 0;
        for (class, &count) in votes.iter().enumerate() {
            if count > votes[best] {
                best = class;
            }
        }
        best
    }

    fn couple(&self, decisions: &[f64]) -> Vec<f64> {
        let k = self.classes.len();
        let mut r = vec![vec![0.0; k]; k];
        for (m, &d) in self.machines.iter().zip(decisions) {
            if let Some(platt) = &m.platt {
                let p = pairwise_probability(platt, d);
                r[m.positive][m.negative] = p;
                r[m.negative][m.positive] = 1.0 - p;
            }
        }
        multiclass_probability(&r)
    }
}

impl FittedClassifier for FittedSvc {
    fn classes(&self) -> &[String] {
        &self.classes
    }

    fn predict(&self, x: &FeatureTable) -> Result<Vec<String>> {
        FittedSvc::predict(self, x.rows())
    }

    fn predict_proba(&self, x: &FeatureTable) -> Result<Vec<Vec<f64>>> {
        FittedSvc::predict_proba(self, x.rows())
    }

    fn n_support_vectors(&self) -> usize {
        self.n_support_vectors
    }
}
