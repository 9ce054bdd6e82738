//! Binary SVM solver
//!
//! Sequential Minimal Optimization with second-order working-set selection
//! and the shrinking heuristic.

pub mod shrinking;
pub mod smo;

pub use self::shrinking::*;
pub use self::smo::*;
