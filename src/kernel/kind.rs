//! Runtime kernel selection

use crate::core::{Result, SvcError};
use crate::kernel::{Kernel, LinearKernel, PolynomialKernel, RBFKernel, SigmoidKernel};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Kernel family chosen by the hosting platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KernelKind {
    Linear,
    Poly,
    Rbf,
    Sigmoid,
}

impl KernelKind {
    pub const ALL: [KernelKind; 4] = [
        KernelKind::Linear,
        KernelKind::Poly,
        KernelKind::Rbf,
        KernelKind::Sigmoid,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            KernelKind::Linear => "linear",
            KernelKind::Poly => "poly",
            KernelKind::Rbf => "rbf",
            KernelKind::Sigmoid => "sigmoid",
        }
    }

    /// Whether `gamma` takes part in the kernel formula
    pub fn uses_gamma(&self) -> bool {
        !matches!(self, KernelKind::Linear)
    }

    /// Instantiate the kernel
    ///
    /// `gamma`, `degree` and `coef0` are ignored where the kernel has no such term.
    pub fn build(&self, gamma: f64, degree: u32, coef0: f64) -> Result<Arc<dyn Kernel>> {
        if self.uses_gamma() && !(gamma > 0.0 && gamma.is_finite()) {
            return Err(SvcError::InvalidParameter(format!(
                "gamma must be positive and finite, got: {gamma}"
            )));
        }
        let kernel: Arc<dyn Kernel> = match self {
            KernelKind::Linear => Arc::new(LinearKernel::new()),
            KernelKind::Poly => {
                if degree == 0 {
                    return Err(SvcError::InvalidParameter(
                        "polynomial degree must be at least 1".to_string(),
                    ));
                }
                Arc::new(PolynomialKernel::new(degree, gamma, coef0))
            }
            KernelKind::Rbf => Arc::new(RBFKernel::new(gamma)),
            KernelKind::Sigmoid => Arc::new(SigmoidKernel::new(gamma, coef0)),
        };
        Ok(kernel)
    }
}

impl fmt::Display for KernelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for KernelKind {
    type Err = SvcError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "linear" => Ok(KernelKind::Linear),
            "poly" => Ok(KernelKind::Poly),
            "rbf" => Ok(KernelKind::Rbf),
            "sigmoid" => Ok(KernelKind::Sigmoid),
            other => Err(SvcError::InvalidKernel(other.to_string())),
        }
    }
}

/// Kernel coefficient for rbf, poly and sigmoid
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Gamma {
    /// 1 / (n_features * var(X)), var over every entry of the training matrix
    #[default]
    Scale,
    /// 1 / n_features
    Auto,
    /// Fixed positive value
    Value(f64),
}

impl Gamma {
    /// Resolve to a number using the (transformed) training rows
    pub fn resolve(&self, rows: &[Vec<f64>]) -> f64 {
        let n_features = rows.first().map(Vec::len).unwrap_or(0).max(1) as f64;
        match *self {
            Gamma::Value(g) => g,
            Gamma::Auto => 1.0 / n_features,
            Gamma::Scale => {
                let count = rows.iter().map(Vec::len).sum::<usize>();
                if count == 0 {
                    return 1.0 / n_features;
                }
                let mean = rows.iter().flatten().sum::<f64>() / count as f64;
                let var = rows
                    .iter()
                    .flatten()
                    .map(|v| (v - mean) * (v - mean))
                    .sum::<f64>()
                    / count as f64;
                if var > 0.0 {
                    1.0 / (n_features * var)
                } else {
                    1.0
                }
            }
        }
    }
}
