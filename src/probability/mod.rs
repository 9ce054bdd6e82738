//! Probability estimates for SVM decision values
//!
//! Each binary machine gets a Platt sigmoid fitted on decision values that
//! were produced out-of-fold, so the sigmoid is not calibrated against
//! scores the machine has already seen. Pairwise probabilities are then
//! coupled into one distribution per row.

pub mod coupling;
pub mod platt;

pub use self::coupling::multiclass_probability;
pub use self::platt::{PlattParams, PlattScaling};

use crate::core::{OptimizerConfig, Result, SvmModel};
use crate::kernel::Kernel;
use crate::optimizer::SVMOptimizer;
use log::debug;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::sync::Arc;

/// Folds used to produce out-of-fold decision values
pub const DEFAULT_FOLDS: usize = 5;

/// Pairwise probabilities are clamped into [MIN_PROBABILITY, 1 − MIN_PROBABILITY]
pub const MIN_PROBABILITY: f64 = 1e-7;

/// Decision values for every sample from a machine that never trained on it
///
/// Samples are shuffled with a generator seeded by `seed`, then split into
/// `n_folds` contiguous folds. When a fold's training part holds a single
/// class, its samples get +1 or −1 instead of a trained score.
pub fn cross_validated_decision_values<K: Kernel + ?Sized>(
    kernel: &Arc<K>,
    config: &OptimizerConfig,
    rows: &[Vec<f64>],
    labels: &[f64],
    n_folds: usize,
    seed: u64,
) -> Result<Vec<f64>> {
    let n = rows.len();
    let n_folds = n_folds.clamp(1, n.max(1));

    let mut perm: Vec<usize> = (0..n).collect();
    let mut rng = SmallRng::seed_from_u64(seed);
    perm.shuffle(&mut rng);

    let optimizer = SVMOptimizer::new(Arc::clone(kernel), config.clone());
    let mut decision = vec![0.0; n];

    for fold in 0..n_folds {
        let begin = fold * n / n_folds;
        let end = (fold + 1) * n / n_folds;
        if begin == end {
            continue;
        }

        let train_idx: Vec<usize> = perm[..begin].iter().chain(&perm[end..]).copied().collect();
        let n_pos = train_idx.iter().filter(|&&i| labels[i] > 0.0).count();
        let n_neg = train_idx.len() - n_pos;

        let held_out = &perm[begin..end];
        if n_pos == 0 || n_neg == 0 {
            let fill = match (n_pos, n_neg) {
                (0, 0) => 0.0,
                (_, 0) => 1.0,
                _ => -1.0,
            };
            for &i in held_out {
                decision[i] = fill;
            }
            continue;
        }

        let train_rows: Vec<Vec<f64>> = train_idx.iter().map(|&i| rows[i].clone()).collect();
        let train_labels: Vec<f64> = train_idx.iter().map(|&i| labels[i]).collect();
        let model = optimizer.train(&train_rows, &train_labels)?;
        for &i in held_out {
            decision[i] = model.decision_value(&rows[i]);
        }
        debug!(
            "Fold {}/{}: {} training rows, {} support vectors",
            fold + 1,
            n_folds,
            train_idx.len(),
            model.n_support_vectors()
        );
    }

    Ok(decision)
}

/// Fit a Platt sigmoid for one binary problem from out-of-fold scores
pub fn fit_binary_probability<K: Kernel + ?Sized>(
    kernel: &Arc<K>,
    config: &OptimizerConfig,
    rows: &[Vec<f64>],
    labels: &[f64],
    seed: u64,
) -> Result<PlattScaling> {
    let decision = cross_validated_decision_values(kernel, config, rows, labels, DEFAULT_FOLDS, seed)?;
    PlattScaling::fit(&decision, labels)
}

/// Calibrated probability that a pair's first class wins, clamped away from 0 and 1
pub fn pairwise_probability(platt: &PlattScaling, decision_value: f64) -> f64 {
    platt
        .predict(decision_value)
        .clamp(MIN_PROBABILITY, 1.0 - MIN_PROBABILITY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::LinearKernel;

    fn blobs() -> (Vec<Vec<f64>>, Vec<f64>) {
        let mut rows = Vec::new();
        let mut labels = Vec::new();
        for i in 0..10 {
            let offset = i as f64 * 0.1;
            rows.push(vec![2.0 + offset, 1.0 - offset]);
            labels.push(1.0);
            rows.push(vec![-2.0 - offset, -1.0 + offset]);
            labels.push(-1.0);
        }
        (rows, labels)
    }

    #[test]
    fn test_cross_validated_scores_follow_labels() {
        let (rows, labels) = blobs();
        let kernel = Arc::new(LinearKernel::new());
        let dec = cross_validated_decision_values(
            &kernel,
            &OptimizerConfig::default(),
            &rows,
            &labels,
            DEFAULT_FOLDS,
            0,
        )
        .unwrap();

        assert_eq!(dec.len(), rows.len());
        for (d, y) in dec.iter().zip(&labels) {
            assert!(d * y > 0.0);
        }
    }

    #[test]
    fn test_same_seed_same_scores() {
        let (rows, labels) = blobs();
        let kernel = Arc::new(LinearKernel::new());
        let config = OptimizerConfig::default();

        let first = cross_validated_decision_values(&kernel, &config, &rows, &labels, 5, 7).unwrap();
        let second = cross_validated_decision_values(&kernel, &config, &rows, &labels, 5, 7).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_single_class_training_fold_gets_fixed_score() {
        // One negative sample: the fold holding it trains on positives only
        let rows = vec![vec![1.0], vec![1.1], vec![1.2], vec![1.3], vec![-1.0]];
        let labels = vec![1.0, 1.0, 1.0, 1.0, -1.0];
        let kernel = Arc::new(LinearKernel::new());

        let dec = cross_validated_decision_values(
            &kernel,
            &OptimizerConfig::default(),
            &rows,
            &labels,
            5,
            0,
        )
        .unwrap();
        assert_eq!(dec[4], 1.0);
    }

    #[test]
    fn test_binary_probability_is_calibrated_in_direction() {
        let (rows, labels) = blobs();
        let kernel = Arc::new(LinearKernel::new());
        let platt = fit_binary_probability(&kernel, &OptimizerConfig::default(), &rows, &labels, 0)
            .unwrap();

        assert!(pairwise_probability(&platt, 3.0) > 0.5);
        assert!(pairwise_probability(&platt, -3.0) < 0.5);
    }

    #[test]
    fn test_pairwise_probability_is_clamped() {
        let platt = PlattScaling::new(-100.0, 0.0);
        assert_eq!(pairwise_probability(&platt, 100.0), 1.0 - MIN_PROBABILITY);
        assert_eq!(pairwise_probability(&platt, -100.0), MIN_PROBABILITY);
    }
}
