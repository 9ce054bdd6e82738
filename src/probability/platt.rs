//! Platt scaling with a Newton method and backtracking line search

use crate::core::{Result, SvcError};
use log::warn;

/// Newton iteration controls for [`PlattScaling::fit_with`]
#[derive(Debug, Clone)]
pub struct PlattParams {
    pub max_iterations: usize,
    pub min_step: f64,
    /// Added to the Hessian diagonal so it stays positive definite
    pub sigma: f64,
    /// Gradient tolerance
    pub epsilon: f64,
}

impl Default for PlattParams {
    fn default() -> Self {
        Self {
            max_iterations: 100,
            min_step: 1e-10,
            sigma: 1e-12,
            epsilon: 1e-5,
        }
    }
}

/// Sigmoid P(y = +1 | f) = 1 / (1 + exp(A·f + B)) over decision values f
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlattScaling {
    a: f64,
    b: f64,
}

impl PlattScaling {
    pub fn new(a: f64, b: f64) -> Self {
        Self { a, b }
    }

    pub fn a(&self) -> f64 {
        self.a
    }

    pub fn b(&self) -> f64 {
        self.b
    }

    /// Fit the sigmoid to decision values and their ±1 labels
    pub fn fit(decision_values: &[f64], labels: &[f64]) -> Result<Self> {
        Self::fit_with(decision_values, labels, &PlattParams::default())
    }

    pub fn fit_with(decision_values: &[f64], labels: &[f64], params: &PlattParams) -> Result<Self> {
        if decision_values.is_empty() {
            return Err(SvcError::EmptyDataset);
        }
        if decision_values.len() != labels.len() {
            return Err(SvcError::RowCountMismatch {
                features: decision_values.len(),
                targets: labels.len(),
            });
        }

        let n_pos = labels.iter().filter(|&&y| y > 0.0).count() as f64;
        let n_neg = labels.len() as f64 - n_pos;

        // Regularized targets keep the fit away from 0/1
        let hi_target = (n_pos + 1.0) / (n_pos + 2.0);
        let lo_target = 1.0 / (n_neg + 2.0);
        let targets: Vec<f64> = labels
            .iter()
            .map(|&y| if y > 0.0 { hi_target } else { lo_target })
            .collect();

        let mut a = 0.0;
        let mut b = ((n_neg + 1.0) / (n_pos + 1.0)).ln();
        let mut fval = objective(decision_values, &targets, a, b);

        let mut iter = 0;
        while iter < params.max_iterations {
            let mut h11 = params.sigma;
            let mut h22 = params.sigma;
            let mut h21 = 0.0;
            let mut g1 = 0.0;
            let mut g2 = 0.0;

            for (&f, &t) in decision_values.iter().zip(&targets) {
                let f_apb = f * a + b;
                let (p, q) = if f_apb >= 0.0 {
                    let e = (-f_apb).exp();
                    (e / (1.0 + e), 1.0 / (1.0 + e))
                } else {
                    let e = f_apb.exp();
                    (1.0 / (1.0 + e), e / (1.0 + e))
                };
                let d2 = p * q;
                h11 += f * f * d2;
                h22 += d2;
                h21 += f * d2;
                let d1 = t - p;
                g1 += f * d1;
                g2 += d1;
            }

            if g1.abs() < params.epsilon && g2.abs() < params.epsilon {
                break;
            }

            let det = h11 * h22 - h21 * h21;
            let da = -(h22 * g1 - h21 * g2) / det;
            let db = -(-h21 * g1 + h11 * g2) / det;
            let gd = g1 * da + g2 * db;

            let mut step = 1.0;
            while step >= params.min_step {
                let new_a = a + step * da;
                let new_b = b + step * db;
                let new_f = objective(decision_values, &targets, new_a, new_b);
                if new_f < fval + 1e-4 * step * gd {
                    a = new_a;
                    b = new_b;
                    fval = new_f;
                    break;
                }
                step /= 2.0;
            }

            if step < params.min_step {
                warn!("Platt scaling line search failed after {} iterations", iter);
                break;
            }
            iter += 1;
        }

        if iter >= params.max_iterations {
            warn!("Platt scaling reached the iteration limit ({})", params.max_iterations);
        }

        Ok(Self { a, b })
    }

    /// Probability of the +1 class for a decision value
    pub fn predict(&self, decision_value: f64) -> f64 {
        let f_apb = decision_value * self.a + self.b;
        if f_apb >= 0.0 {
            let e = (-f_apb).exp();
            e / (1.0 + e)
        } else {
            1.0 / (1.0 + f_apb.exp())
        }
    }
}

/// Negative log-likelihood, evaluated without overflow on either sign of A·f + B
fn objective(decision_values: &[f64], targets: &[f64], a: f64, b: f64) -> f64 {
    decision_values
        .iter()
        .zip(targets)
        .map(|(&f, &t)| {
            let f_apb = f * a + b;
            if f_apb >= 0.0 {
                t * f_apb + (1.0 + (-f_apb).exp()).ln()
            } else {
                (t - 1.0) * f_apb + (1.0 + f_apb.exp()).ln()
            }
        })
        .sum()
}
