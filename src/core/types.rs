//! Core type definitions: feature/target/prediction tables and solver settings

use crate::core::{Result, SvcError};
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

/// Name of the discrete prediction column in a [`PredictionTable`]
pub const PREDICTION_COLUMN: &str = "Prediction";

/// Prefix of every probability column in a [`PredictionTable`]
pub const PROBABILITY_PREFIX: &str = "P";

/// Numeric feature table: named columns, row-major samples
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureTable {
    columns: Vec<String>,
    rows: Vec<Vec<f64>>,
}

impl FeatureTable {
    /// Create a table from column names and rows
    ///
    /// Every row must carry exactly one value per column.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<f64>>) -> Result<Self> {
        for (i, row) in rows.iter().enumerate() {
            if row.len() != columns.len() {
                return Err(SvcError::RaggedRow {
                    row: i,
                    expected: columns.len(),
                    actual: row.len(),
                });
            }
        }
        Ok(Self { columns, rows })
    }

    /// Create a table with generated column names `x0, x1, ...`
    ///
    /// The width is taken from the first row.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let width = rows.first().map(Vec::len).unwrap_or(0);
        let columns = (0..width).map(|i| format!("x{i}")).collect();
        Self::new(columns, rows)
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    /// Get a single row
    ///
    /// # Panics
    /// Panics if `i >= n_rows()`
    pub fn row(&self, i: usize) -> &[f64] {
        &self.rows[i]
    }

    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn n_features(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// First `n` rows (or all rows if there are fewer)
    pub fn head(&self, n: usize) -> FeatureTable {
        Self {
            columns: self.columns.clone(),
            rows: self.rows.iter().take(n).cloned().collect(),
        }
    }

    /// Replace the rows, keeping the column names
    pub(crate) fn with_rows(&self, rows: Vec<Vec<f64>>) -> FeatureTable {
        Self {
            columns: self.columns.clone(),
            rows,
        }
    }
}

/// Single categorical target column aligned by row with a [`FeatureTable`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetColumn {
    name: String,
    values: Vec<String>,
}

impl TargetColumn {
    pub fn new(name: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    /// Build a column named `target` from any label iterator
    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new("target", labels.into_iter().map(Into::into).collect())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Flattened label sequence
    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Borrowed view of one prediction row
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PredictionRow<'a> {
    /// Class probabilities, in class order
    pub probabilities: &'a [f64],
    /// Label chosen by the classifier's vote
    pub prediction: &'a str,
}

/// Predict output: one probability column per class plus the discrete prediction
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionTable {
    classes: Vec<String>,
    probabilities: Vec<Vec<f64>>,
    predictions: Vec<String>,
}

impl PredictionTable {
    pub(crate) fn new(
        classes: Vec<String>,
        probabilities: Vec<Vec<f64>>,
        predictions: Vec<String>,
    ) -> Self {
        debug_assert_eq!(probabilities.len(), predictions.len());
        Self {
            classes,
            probabilities,
            predictions,
        }
    }

    /// Column names: `P<class>` for every class, then `Prediction`
    pub fn columns(&self) -> Vec<String> {
        self.classes
            .iter()
            .map(|c| probability_column_name(c))
            .chain(std::iter::once(PREDICTION_COLUMN.to_string()))
            .collect()
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn n_rows(&self) -> usize {
        self.predictions.len()
    }

    pub fn n_columns(&self) -> usize {
        self.classes.len() + 1
    }

    pub fn is_empty(&self) -> bool {
        self.predictions.is_empty()
    }

    pub fn probabilities(&self) -> &[Vec<f64>] {
        &self.probabilities
    }

    /// The discrete `Prediction` column
    pub fn predictions(&self) -> &[String] {
        &self.predictions
    }

    /// Values of one probability column, looked up by its name (e.g. `PSetosa`)
    pub fn probability_column(&self, name: &str) -> Option<Vec<f64>> {
        let idx = self
            .classes
            .iter()
            .position(|c| probability_column_name(c) == name)?;
        Some(self.probabilities.iter().map(|row| row[idx]).collect())
    }

    pub fn row(&self, i: usize) -> Option<PredictionRow<'_>> {
        Some(PredictionRow {
            probabilities: self.probabilities.get(i)?,
            prediction: self.predictions.get(i)?,
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = PredictionRow<'_>> {
        self.probabilities
            .iter()
            .zip(self.predictions.iter())
            .map(|(p, l)| PredictionRow {
                probabilities: p,
                prediction: l,
            })
    }
}

fn probability_column_name(class: &str) -> String {
    format!("{PROBABILITY_PREFIX}{class}")
}

struct RowRecord<'a> {
    classes: &'a [String],
    row: PredictionRow<'a>,
}

impl Serialize for RowRecord<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.classes.len() + 1))?;
        for (class, p) in self.classes.iter().zip(self.row.probabilities) {
            map.serialize_entry(&probability_column_name(class), p)?;
        }
        map.serialize_entry(PREDICTION_COLUMN, self.row.prediction)?;
        map.end()
    }
}

/// Serialized as an array of row objects whose keys follow column order
impl Serialize for PredictionTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.n_rows()))?;
        for row in self.iter() {
            seq.serialize_element(&RowRecord {
                classes: &self.classes,
                row,
            })?;
        }
        seq.end()
    }
}

/// Result of the binary dual optimization
#[derive(Debug, Clone)]
pub struct OptimizationResult {
    /// Lagrange multipliers (alpha values)
    pub alpha: Vec<f64>,
    /// Intercept: decision(x) = Σ αᵢ yᵢ K(xᵢ, x) − ρ
    pub rho: f64,
    /// Indices of support vectors (where alpha > 0)
    pub support_vectors: Vec<usize>,
    /// Number of iterations performed
    pub iterations: usize,
    /// Final dual objective value Σα − ½αᵀQα
    pub objective_value: f64,
}

/// Configuration for the binary solver
#[derive(Debug, Clone)]
pub struct OptimizerConfig {
    /// Regularization parameter (upper bound for alpha)
    pub c: f64,
    /// Stopping tolerance on the maximal violating pair
    pub epsilon: f64,
    /// Maximum number of iterations
    pub max_iterations: usize,
    /// Kernel cache size in bytes
    pub cache_size: usize,
    /// Enable shrinking heuristic
    pub shrinking: bool,
    /// Upper bound on iterations between shrinking passes
    pub shrinking_interval: usize,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            c: 1.0,
            epsilon: 0.001,
            max_iterations: 10_000_000,
            cache_size: 200 * 1024 * 1024,
            shrinking: true,
            shrinking_interval: 1000,
        }
    }
}
