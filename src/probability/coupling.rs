//! Pairwise coupling of one-vs-one probabilities into a class distribution

use log::warn;

/// Combine pairwise estimates `r[i][j] ≈ P(class i | class i or j)` into
/// per-class probabilities.
///
/// Two classes use `r[0][1]` and `r[1][0]` directly. More classes solve
/// the second method of Wu, Lin and Weng (2004) by coordinate descent.
/// The result always sums to one.
pub fn multiclass_probability(r: &[Vec<f64>]) -> Vec<f64> {
    let k = r.len();
    match k {
        0 => return Vec::new(),
        1 => return vec![1.0],
        2 => return normalize(vec![r[0][1], r[1][0]]),
        _ => {}
    }

    let max_iter = 100.max(k);
    let eps = 0.005 / k as f64;

    let mut q = vec![vec![0.0; k]; k];
    for t in 0..k {
        for j in 0..k {
            if j == t {
                continue;
            }
            q[t][t] += r[j][t] * r[j][t];
            q[t][j] = -r[j][t] * r[t][j];
        }
    }

    let mut p = vec![1.0 / k as f64; k];
    let mut qp = vec![0.0; k];
    let mut pqp = 0.0;
    for t in 0..k {
        qp[t] = (0..k).map(|j| q[t][j] * p[j]).sum();
        pqp += p[t] * qp[t];
    }

    let mut iter = 0;
    while iter < max_iter {
        let max_error = qp
            .iter()
            .map(|&v| (v - pqp).abs())
            .fold(0.0_f64, f64::max);
        if max_error < eps {
            break;
        }

        for t in 0..k {
            let diff = (-qp[t] + pqp) / q[t][t];
            p[t] += diff;
            pqp = (pqp + diff * (diff * q[t][t] + 2.0 * qp[t])) / (1.0 + diff) / (1.0 + diff);
            for j in 0..k {
                qp[j] = (qp[j] + diff * q[t][j]) / (1.0 + diff);
                p[j] /= 1.0 + diff;
            }
        }
        iter += 1;
    }

    if iter >= max_iter {
        warn!("Pairwise coupling reached the iteration limit ({})", max_iter);
    }

    normalize(p)
}

fn normalize(mut p: Vec<f64>) -> Vec<f64> {
    let total: f64 = p.iter().sum();
    if total > 0.0 {
        p.iter_mut().for_each(|v| *v /= total);
    }
    p
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn pairwise(k: usize, f: impl Fn(usize, usize) -> f64) -> Vec<Vec<f64>> {
        let mut r = vec![vec![0.0; k]; k];
        for i in 0..k {
            for j in (i + 1)..k {
                r[i][j] = f(i, j);
                r[j][i] = 1.0 - r[i][j];
            }
        }
        r
    }

    #[test]
    fn test_two_classes_use_pairwise_directly() {
        let r = pairwise(2, |_, _| 0.8);
        let p = multiclass_probability(&r);
        assert_relative_eq!(p[0], 0.8, epsilon = 1e-12);
        assert_relative_eq!(p[1], 0.2, epsilon = 1e-12);
    }

    #[test]
    fn test_uniform_pairwise_gives_uniform_distribution() {
        let r = pairwise(4, |_, _| 0.5);
        let p = multiclass_probability(&r);
        for v in &p {
            assert_relative_eq!(*v, 0.25, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_dominant_class_wins() {
        // Class 1 beats everyone
        let r = pairwise(3, |i, j| match (i, j) {
            (0, 1) => 0.1,
            (1, 2) => 0.9,
            _ => 0.5,
        });
        let p = multiclass_probability(&r);

        assert_relative_eq!(p.iter().sum::<f64>(), 1.0, epsilon = 1e-9);
        assert!(p[1] > p[0]);
        assert!(p[1] > p[2]);
    }

    #[test]
    fn test_consistent_pairwise_is_recovered() {
        // r[i][j] = p_i / (p_i + p_j) for a known p
        let truth = [0.5, 0.3, 0.2];
        let r = pairwise(3, |i, j| truth[i] / (truth[i] + truth[j]));
        let p = multiclass_probability(&r);
        for (est, expected) in p.iter().zip(truth) {
            assert_relative_eq!(*est, expected, epsilon = 1e-2);
        }
    }

    #[test]
    fn test_single_class() {
        assert_eq!(multiclass_probability(&[vec![0.0]]), vec![1.0]);
    }
}
