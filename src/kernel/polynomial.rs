//! Polynomial Kernel Implementation
//!
//! The polynomial kernel is defined as:
//! K(x, y) = (γ * <x, y> + r)^d
//!
//! Where:
//! - γ (gamma): scaling factor for the dot product
//! - r (coef0): independent term in the polynomial
//! - d (degree): degree of the polynomial

use crate::kernel::linear::dot_product;
use crate::kernel::traits::Kernel;

/// Polynomial kernel with configurable degree, gamma, and coefficient
#[derive(Debug, Clone)]
pub struct PolynomialKernel {
    /// Scaling factor for the dot product
    pub gamma: f64,
    /// Independent term in the polynomial
    pub coef0: f64,
    /// Degree of the polynomial
    pub degree: u32,
}

impl PolynomialKernel {
    /// Creates a new polynomial kernel with the specified parameters
    ///
    /// # Panics
    /// Panics if `degree` is zero or `gamma` is not positive
    ///
    /// # Examples
    /// ```
    /// use rsvc::kernel::{Kernel, PolynomialKernel};
    ///
    /// // Quadratic kernel: (x·y + 1)²
    /// let quad = PolynomialKernel::new(2, 1.0, 1.0);
    /// assert_eq!(quad.compute(&[1.0], &[2.0]), 9.0);
    /// ```
    pub fn new(degree: u32, gamma: f64, coef0: f64) -> Self {
        assert!(degree > 0, "Polynomial degree must be positive");
        assert!(gamma > 0.0, "Gamma must be positive");

        Self {
            gamma,
            coef0,
            degree,
        }
    }
}

impl Kernel for PolynomialKernel {
    fn compute(&self, x: &[f64], y: &[f64]) -> f64 {
        // Odd degrees keep the sign of the base
        (self.gamma * dot_product(x, y) + self.coef0).powi(self.degree as i32)
    }

    fn name(&self) -> &'static str {
        "poly"
    }
}
