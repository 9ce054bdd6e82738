//! Sequential Minimal Optimization (SMO) solver implementation
//!
//! Solves the C-SVC dual
//!
//! ```text
//! min ½ αᵀQα − eᵀα   s.t.  yᵀα = 0,  0 ≤ αᵢ ≤ C,   Qᵢⱼ = yᵢ yⱼ K(xᵢ, xⱼ)
//! ```
//!
//! by repeatedly optimizing the maximal violating pair, picking the second
//! index with second-order information (Fan, Chen & Lin, 2005).

use crate::cache::KernelCache;
use crate::core::{OptimizationResult, OptimizerConfig, Result, SvcError};
use crate::kernel::Kernel;
use crate::solver::shrinking::{AlphaStatus, ShrinkingStrategy};
use log::{debug, warn};
use std::sync::Arc;

/// Floor for non-positive curvature along the working-set direction
const TAU: f64 = 1e-12;

/// SMO solver for SVM optimization
pub struct SMOSolver<K: Kernel + ?Sized> {
    kernel: Arc<K>,
    config: OptimizerConfig,
}

impl<K: Kernel + ?Sized> SMOSolver<K> {
    /// Create a new SMO solver with the given kernel and configuration
    pub fn new(kernel: Arc<K>, config: OptimizerConfig) -> Self {
        Self { kernel, config }
    }

    pub fn config(&self) -> &OptimizerConfig {
        &self.config
    }

    /// Solve the SVM optimization problem
    ///
    /// `labels` must be +1 or -1 and both classes must be present.
    pub fn solve(&self, rows: &[Vec<f64>], labels: &[f64]) -> Result<OptimizationResult> {
        if rows.is_empty() {
            return Err(SvcError::EmptyDataset);
        }
        if rows.len() != labels.len() {
            return Err(SvcError::RowCountMismatch {
                features: rows.len(),
                targets: labels.len(),
            });
        }
        if let Some(&bad) = labels.iter().find(|&&l| l != 1.0 && l != -1.0) {
            return Err(SvcError::InvalidLabel(bad));
        }
        if !labels.contains(&1.0) || !labels.contains(&-1.0) {
            return Err(SvcError::OptimizationError(
                "training labels must contain both +1 and -1".to_string(),
            ));
        }
        if !(self.config.c > 0.0 && self.config.c.is_finite()) {
            return Err(SvcError::InvalidParameter(format!(
                "C must be positive and finite, got: {}",
                self.config.c
            )));
        }
        if !(self.config.epsilon > 0.0) {
            return Err(SvcError::InvalidParameter(format!(
                "epsilon must be positive, got: {}",
                self.config.epsilon
            )));
        }

        let n = rows.len();
        let mut state = SolverState::new(&*self.kernel, rows, labels, &self.config);
        let mut shrinking = ShrinkingStrategy::new(n, self.config.shrinking_interval);
        let mut iterations = 0;

        while iterations < self.config.max_iterations {
            if self.config.shrinking && shrinking.tick() {
                state.shrink(&mut shrinking);
            }

            let (i, j) = match state.select_working_set() {
                Some(pair) => pair,
                None if state.active.len() < n => {
                    // Optimal on the shrunk problem; verify on the full one
                    state.reconstruct_gradient();
                    match state.select_working_set() {
                        Some(pair) => {
                            shrinking.schedule_soon();
                            pair
                        }
                        None => break,
                    }
                }
                None => break,
            };

            iterations += 1;
            state.update_pair(i, j);
        }

        if iterations >= self.config.max_iterations {
            warn!(
                "SMO reached the iteration limit ({}) before converging",
                self.config.max_iterations
            );
            state.reconstruct_gradient();
        }

        let rho = state.calculate_rho();
        let objective_value = state.dual_objective();
        let support_vectors: Vec<usize> = state
            .alpha
            .iter()
            .enumerate()
            .filter_map(|(i, &a)| if a > 0.0 { Some(i) } else { None })
            .collect();

        let stats = state.cache.stats();
        debug!(
            "SMO finished: {} iterations, {} support vectors, rho={:.6}, cache hits={} misses={}",
            iterations,
            support_vectors.len(),
            rho,
            stats.hits,
            stats.misses
        );

        Ok(OptimizationResult {
            alpha: state.alpha,
            rho,
            support_vectors,
            iterations,
            objective_value,
        })
    }
}

/// Mutable state of one optimization run
struct SolverState<'a, K: Kernel + ?Sized> {
    kernel: &'a K,
    rows: &'a [Vec<f64>],
    y: &'a [f64],
    c: f64,
    epsilon: f64,
    alpha: Vec<f64>,
    /// ∇f(α) = Qα − e
    grad: Vec<f64>,
    status: Vec<AlphaStatus>,
    /// K(xᵢ, xᵢ)
    diag: Vec<f64>,
    /// Indices still taking part in the optimization
    active: Vec<usize>,
    cache: KernelCache,
}

impl<'a, K: Kernel + ?Sized> SolverState<'a, K> {
    fn new(kernel: &'a K, rows: &'a [Vec<f64>], y: &'a [f64], config: &OptimizerConfig) -> Self {
        let n = rows.len();
        Self {
            kernel,
            rows,
            y,
            c: config.c,
            epsilon: config.epsilon,
            alpha: vec![0.0; n],
            grad: vec![-1.0; n],
            status: vec![AlphaStatus::LowerBound; n],
            diag: rows.iter().map(|r| kernel.compute(r, r)).collect(),
            active: (0..n).collect(),
            cache: KernelCache::with_memory_limit(config.cache_size, n),
        }
    }

    /// Row i of the kernel matrix, served from the LRU cache
    fn kernel_row(&mut self, i: usize) -> Arc<[f64]> {
        let (rows, kernel) = (self.rows, self.kernel);
        self.cache.get_or_compute(i, || {
            rows.iter().map(|r| kernel.compute(&rows[i], r)).collect()
        })
    }

    fn is_upper(&self, i: usize) -> bool {
        self.status[i] == AlphaStatus::UpperBound
    }

    fn is_lower(&self, i: usize) -> bool {
        self.status[i] == AlphaStatus::LowerBound
    }

    /// Maximal violating pair with second-order selection of j
    ///
    /// Returns `None` when the active problem is optimal within `epsilon`.
    fn select_working_set(&mut self) -> Option<(usize, usize)> {
        let mut gmax = f64::NEG_INFINITY;
        let mut gmax_idx = None;

        for &t in &self.active {
            if self.y[t] > 0.0 {
                if !self.is_upper(t) && -self.grad[t] >= gmax {
                    gmax = -self.grad[t];
                    gmax_idx = Some(t);
                }
            } else if !self.is_lower(t) && self.grad[t] >= gmax {
                gmax = self.grad[t];
                gmax_idx = Some(t);
            }
        }

        let i = gmax_idx?;
        let k_i = self.kernel_row(i);

        let mut gmax2 = f64::NEG_INFINITY;
        let mut gmin_idx = None;
        let mut obj_diff_min = f64::INFINITY;

        for &j in &self.active {
            let y_j = self.y[j];
            let grad_diff = if y_j > 0.0 {
                if self.is_lower(j) {
                    continue;
                }
                gmax2 = gmax2.max(self.grad[j]);
                gmax + self.grad[j]
            } else {
                if self.is_upper(j) {
                    continue;
                }
                gmax2 = gmax2.max(-self.grad[j]);
                gmax - self.grad[j]
            };

            if grad_diff > 0.0 {
                // Curvature along the pair direction is label independent
                let quad_coef = self.diag[i] + self.diag[j] - 2.0 * k_i[j];
                let quad_coef = if quad_coef > 0.0 { quad_coef } else { TAU };
                let obj_diff = -(grad_diff * grad_diff) / quad_coef;
                if obj_diff <= obj_diff_min {
                    gmin_idx = Some(j);
                    obj_diff_min = obj_diff;
                }
            }
        }

        if gmax + gmax2 < self.epsilon {
            return None;
        }
        gmin_idx.map(|j| (i, j))
    }

    /// Analytic two-variable update clipped to the box, then gradient update
    fn update_pair(&mut self, i: usize, j: usize) {
        let k_i = self.kernel_row(i);
        let k_j = self.kernel_row(j);
        let (y_i, y_j) = (self.y[i], self.y[j]);
        let c = self.c;
        let q_ij = y_i * y_j * k_i[j];

        let (old_ai, old_aj) = (self.alpha[i], self.alpha[j]);
        let (mut ai, mut aj) = (old_ai, old_aj);

        if y_i != y_j {
            let mut quad_coef = self.diag[i] + self.diag[j] + 2.0 * q_ij;
            if quad_coef <= 0.0 {
                quad_coef = TAU;
            }
            let delta = (-self.grad[i] - self.grad[j]) / quad_coef;
            let diff = ai - aj;
            ai += delta;
            aj += delta;

            if diff > 0.0 {
                if aj < 0.0 {
                    aj = 0.0;
                    ai = diff;
                }
            } else if ai < 0.0 {
                ai = 0.0;
                aj = -diff;
            }
            if diff > 0.0 {
                if ai > c {
                    ai = c;
                    aj = c - diff;
                }
            } else if aj > c {
                aj = c;
                ai = c + diff;
            }
        } else {
            let mut quad_coef = self.diag[i] + self.diag[j] - 2.0 * q_ij;
            if quad_coef <= 0.0 {
                quad_coef = TAU;
            }
            let delta = (self.grad[i] - self.grad[j]) / quad_coef;
            let sum = ai + aj;
            ai -= delta;
            aj += delta;

            if sum > c {
                if ai > c {
                    ai = c;
                    aj = sum - c;
                }
            } else if aj < 0.0 {
                aj = 0.0;
                ai = sum;
            }
            if sum > c {
                if aj > c {
                    aj = c;
                    ai = sum - c;
                }
            } else if ai < 0.0 {
                ai = 0.0;
                aj = sum;
            }
        }

        self.alpha[i] = ai;
        self.alpha[j] = aj;
        self.status[i] = AlphaStatus::of(ai, c);
        self.status[j] = AlphaStatus::of(aj, c);

        let delta_i = (ai - old_ai) * y_i;
        let delta_j = (aj - old_aj) * y_j;
        for &k in &self.active {
            self.grad[k] += self.y[k] * (k_i[k] * delta_i + k_j[k] * delta_j);
        }
    }

    /// Drop bounded variables that cannot re-enter the working set
    fn shrink(&mut self, strategy: &mut ShrinkingStrategy) {
        let mut gmax1 = f64::NEG_INFINITY;
        let mut gmax2 = f64::NEG_INFINITY;

        for &t in &self.active {
            let g = self.grad[t];
            if self.y[t] > 0.0 {
                if !self.is_upper(t) {
                    gmax1 = gmax1.max(-g);
                }
                if !self.is_lower(t) {
                    gmax2 = gmax2.max(g);
                }
            } else {
                if !self.is_upper(t) {
                    gmax2 = gmax2.max(-g);
                }
                if !self.is_lower(t) {
                    gmax1 = gmax1.max(g);
                }
            }
        }

        if strategy.should_unshrink(gmax1, gmax2, self.epsilon) {
            self.reconstruct_gradient();
        }

        let before = self.active.len();
        let (status, y, grad) = (&self.status, self.y, &self.grad);
        self.active.retain(|&t| {
            !ShrinkingStrategy::is_shrinkable(status[t], y[t], grad[t], gmax1, gmax2)
        });
        if self.active.len() < before {
            debug!(
                "shrinking: {} of {} variables active",
                self.active.len(),
                self.rows.len()
            );
        }
    }

    /// Recompute the gradient of inactive variables and reactivate them all
    fn reconstruct_gradient(&mut self) {
        let n = self.rows.len();
        if self.active.len() == n {
            return;
        }

        let mut is_active = vec![false; n];
        for &t in &self.active {
            is_active[t] = true;
        }
        let inactive: Vec<usize> = (0..n).filter(|&k| !is_active[k]).collect();

        for &k in &inactive {
            self.grad[k] = -1.0;
        }
        for m in 0..n {
            if self.alpha[m] <= 0.0 {
                continue;
            }
            let k_m = self.kernel_row(m);
            let coef = self.alpha[m] * self.y[m];
            for &k in &inactive {
                self.grad[k] += coef * self.y[k] * k_m[k];
            }
        }

        self.active = (0..n).collect();
    }

    /// ρ from free support vectors, or the midpoint of the feasible range
    fn calculate_rho(&self) -> f64 {
        let mut upper = f64::INFINITY;
        let mut lower = f64::NEG_INFINITY;
        let mut sum_free = 0.0;
        let mut n_free = 0usize;

        for i in 0..self.alpha.len() {
            let y_grad = self.y[i] * self.grad[i];
            match self.status[i] {
                AlphaStatus::UpperBound => {
                    if self.y[i] < 0.0 {
                        upper = upper.min(y_grad);
                    } else {
                        lower = lower.max(y_grad);
                    }
                }
                AlphaStatus::LowerBound => {
                    if self.y[i] > 0.0 {
                        upper = upper.min(y_grad);
                    } else {
                        lower = lower.max(y_grad);
                    }
                }
                AlphaStatus::Free => {
                    n_free += 1;
                    sum_free += y_grad;
                }
            }
        }

        if n_free > 0 {
            sum_free / n_free as f64
        } else if upper.is_finite() && lower.is_finite() {
            (upper + lower) / 2.0
        } else if upper.is_finite() {
            upper
        } else if lower.is_finite() {
            lower
        } else {
            0.0
        }
    }

    /// eᵀα − ½αᵀQα, using ∇f = Qα − e
    fn dual_objective(&self) -> f64 {
        -0.5 * self
            .alpha
            .iter()
            .zip(&self.grad)
            .map(|(a, g)| a * (g - 1.0))
            .sum::<f64>()
    }
}
