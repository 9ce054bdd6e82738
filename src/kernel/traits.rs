//! Kernel trait definition

use std::fmt::Debug;

/// Kernel function trait
///
/// A kernel function K(x, y) must satisfy Mercer's condition to be valid for SVM.
/// Inputs are dense feature rows of equal length.
pub trait Kernel: Send + Sync + Debug {
    /// Compute kernel value K(x, y)
    fn compute(&self, x: &[f64], y: &[f64]) -> f64;

    /// Short name used in logs
    fn name(&self) -> &'static str;
}
