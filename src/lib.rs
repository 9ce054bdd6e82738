//! Standardized, probability-calibrated support vector classification
//!
//! The crate exposes [`ClassifierAdapter`], a construct/fit/predict wrapper
//! around a standardizer followed by a one-vs-one C-SVC with Platt-scaled
//! probabilities. The binary solver is SMO with second-order working-set
//! selection and the shrinking heuristic, as in Fan, Chen and Lin (2005).

pub mod api;
pub mod cache;
pub mod core;
pub mod hyperparams;
pub mod kernel;
pub mod multiclass;
pub mod optimizer;
pub mod pipeline;
pub mod preprocessing;
pub mod probability;
pub mod solver;
pub mod utils;

// Re-export main types for convenience
pub use crate::api::ClassifierAdapter;
pub use crate::cache::{CacheStats, KernelCache};
pub use crate::core::error::{Result, SvcError};
pub use crate::core::traits::*;
pub use crate::core::types::*;
pub use crate::hyperparams::{Hyperparameters, RawHyperparameters};
pub use crate::kernel::{Gamma, Kernel, KernelKind};
pub use crate::multiclass::{FittedSvc, SvcParams};
pub use crate::optimizer::{SVMOptimizer, TrainedSVM};
pub use crate::pipeline::{FittedPipeline, Pipeline};
pub use crate::preprocessing::{FittedScaler, StandardScaler};

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
