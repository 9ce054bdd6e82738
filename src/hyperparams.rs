//! Adapter hyperparameters
//!
//! The hosting platform passes three values: the penalty in log space, a
//! kernel name and a shrinking flag as a string. They can also come as a
//! JSON document:
//!
//! ```json
//! {"log_C": 0.0, "kernel": "rbf", "shrinking": "true"}
//! ```

use crate::core::Result;
use crate::kernel::KernelKind;
use log::warn;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Immutable hyperparameter tuple of the classifier adapter
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hyperparameters {
    log_penalty: f64,
    kernel: KernelKind,
    shrinking: bool,
}

impl Hyperparameters {
    pub fn new(log_penalty: f64, kernel: KernelKind, shrinking: bool) -> Self {
        Self {
            log_penalty,
            kernel,
            shrinking,
        }
    }

    /// Parse the platform's string arguments
    ///
    /// `kernel` must name a known kernel. `shrinking` is enabled only by the
    /// exact string `"true"`.
    pub fn from_platform_args(log_penalty: f64, kernel: &str, shrinking: &str) -> Result<Self> {
        Ok(Self::new(log_penalty, kernel.parse()?, parse_shrinking(shrinking)))
    }

    pub fn log_penalty(&self) -> f64 {
        self.log_penalty
    }

    /// Penalty C = exp(log_penalty)
    pub fn penalty(&self) -> f64 {
        self.log_penalty.exp()
    }

    pub fn kernel(&self) -> KernelKind {
        self.kernel
    }

    pub fn shrinking(&self) -> bool {
        self.shrinking
    }
}

/// `"true"` enables shrinking; every other string disables it
pub fn parse_shrinking(value: &str) -> bool {
    match value {
        "true" => true,
        "false" => false,
        other => {
            warn!(
                "Shrinking flag '{}' is not \"true\" or \"false\"; shrinking disabled",
                other
            );
            false
        }
    }
}

/// Hyperparameter document as the platform writes it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawHyperparameters {
    #[serde(rename = "log_C")]
    pub log_penalty: f64,
    pub kernel: String,
    pub shrinking: String,
}

impl RawHyperparameters {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Apply the platform parsing rules
    pub fn parse(&self) -> Result<Hyperparameters> {
        Hyperparameters::from_platform_args(self.log_penalty, &self.kernel, &self.shrinking)
    }
}

impl TryFrom<RawHyperparameters> for Hyperparameters {
    type Error = crate::core::SvcError;

    fn try_from(raw: RawHyperparameters) -> Result<Self> {
        raw.parse()
    }
}
