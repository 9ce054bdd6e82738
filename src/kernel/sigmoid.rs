//! Sigmoid (Tanh) Kernel Implementation
//!
//! The Sigmoid kernel is defined as:
//! K(x, y) = tanh(γ * <x, y> + r)
//!
//! Values are bounded in [-1, 1]. The kernel is not positive semi-definite
//! for every (γ, r), so the solver must tolerate non-convex pairs.

use crate::kernel::linear::dot_product;
use crate::kernel::traits::Kernel;

/// Sigmoid (Hyperbolic Tangent) kernel
#[derive(Debug, Clone)]
pub struct SigmoidKernel {
    /// Scaling parameter for the dot product (must be positive)
    pub gamma: f64,
    /// Bias/offset parameter (can be positive, negative, or zero)
    pub coef0: f64,
}

impl SigmoidKernel {
    /// Creates a new Sigmoid kernel with specified parameters
    ///
    /// # Panics
    /// Panics if gamma is not positive
    ///
    /// # Examples
    /// ```
    /// use rsvc::kernel::SigmoidKernel;
    ///
    /// let kernel = SigmoidKernel::new(0.1, -1.0);
    /// assert_eq!(kernel.gamma, 0.1);
    /// assert_eq!(kernel.coef0, -1.0);
    /// ```
    pub fn new(gamma: f64, coef0: f64) -> Self {
        if gamma <= 0.0 {
            panic!("Gamma must be positive, got: {}", gamma);
        }
        Self { gamma, coef0 }
    }
}

impl Kernel for SigmoidKernel {
    fn compute(&self, x: &[f64], y: &[f64]) -> f64 {
        (self.gamma * dot_product(x, y) + self.coef0).tanh()
    }

    fn name(&self) -> &'static str {
        "sigmoid"
    }
}
