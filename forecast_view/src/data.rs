//! Observed needs and the per-parameter prediction sets handed in by the
//! forecasting stage.

use crate::error::{Result, ViewError};
use serde::{Deserialize, Serialize};

/// Check that every value of a series is finite
fn ensure_finite(series: &str, values: &[f64]) -> Result<()> {
    match values.iter().position(|v| !v.is_finite()) {
        Some(index) => Err(ViewError::NonFiniteValue {
            series: series.to_string(),
            index,
            value: values[index],
        }),
        None => Ok(()),
    }
}

/// Observed need per period. Element `i` belongs to period `i + 1`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct NeedSeries {
    values: Vec<f64>,
}

impl NeedSeries {
    /// Create a need series, rejecting NaN and infinite values
    pub fn new(values: Vec<f64>) -> Result<Self> {
        ensure_finite("needs", &values)?;
        Ok(Self { values })
    }

    /// Get the observed values
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Get the value observed in a 1-indexed period
    pub fn get(&self, period: usize) -> Option<f64> {
        period
            .checked_sub(1)
            .and_then(|i| self.values.get(i))
            .copied()
    }

    /// Iterate over `(period, value)` pairs, starting at period 1
    pub fn periods(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.values.iter().enumerate().map(|(i, &v)| (i + 1, v))
    }

    /// Get the number of periods
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if no period has been observed
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl TryFrom<Vec<f64>> for NeedSeries {
    type Error = ViewError;

    fn try_from(values: Vec<f64>) -> Result<Self> {
        Self::new(values)
    }
}

impl From<NeedSeries> for Vec<f64> {
    fn from(series: NeedSeries) -> Self {
        series.values
    }
}

/// Predicted values for one prediction parameter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionEntry {
    /// Prediction parameter `n`
    pub key: i32,
    /// Predicted values in period order
    pub values: Vec<f64>,
}

/// Predictions keyed by parameter `n`.
///
/// Keys are unique and keep the order in which they were inserted; that
/// order drives export column order and the order of selection controls.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<PredictionEntry>", into = "Vec<PredictionEntry>")]
pub struct PredictionSet {
    entries: Vec<PredictionEntry>,
}

impl PredictionSet {
    /// Create an empty prediction set
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a prediction set from `(key, values)` pairs, keeping their order
    ///
    /// # Examples
    ///
    /// ```
    /// use forecast_view::PredictionSet;
    ///
    /// let set = PredictionSet::from_pairs(vec![(5, vec![1.0]), (2, vec![2.0, 3.0])]).unwrap();
    /// assert_eq!(set.keys().collect::<Vec<_>>(), vec![5, 2]);
    /// assert_eq!(set.get(2), Some(&[2.0, 3.0][..]));
    /// ```
    pub fn from_pairs<I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (i32, Vec<f64>)>,
    {
        let mut set = Self::new();
        for (key, values) in pairs {
            set.insert(key, values)?;
        }
        Ok(set)
    }

    /// Append the predictions for a new key
    pub fn insert(&mut self, key: i32, values: Vec<f64>) -> Result<()> {
        if self.contains_key(key) {
            return Err(ViewError::DuplicateKey(key));
        }
        ensure_finite(&format!("predictions for n = {}", key), &values)?;

        self.entries.push(PredictionEntry { key, values });
        Ok(())
    }

    /// Look up the predictions for a key
    pub fn get(&self, key: i32) -> Option<&[f64]> {
        self.entries
            .iter()
            .find(|e| e.key == key)
            .map(|e| e.values.as_slice())
    }

    /// Check if a key is present
    pub fn contains_key(&self, key: i32) -> bool {
        self.entries.iter().any(|e| e.key == key)
    }

    /// Iterate over keys in insertion order
    pub fn keys(&self) -> impl Iterator<Item = i32> + '_ {
        self.entries.iter().map(|e| e.key)
    }

    /// Iterate over `(key, values)` in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (i32, &[f64])> + '_ {
        self.entries.iter().map(|e| (e.key, e.values.as_slice()))
    }

    /// Get the number of keys
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the set holds no keys
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl TryFrom<Vec<PredictionEntry>> for PredictionSet {
    type Error = ViewError;

    fn try_from(entries: Vec<PredictionEntry>) -> Result<Self> {
        Self::from_pairs(entries.into_iter().map(|e| (e.key, e.values)))
    }
}

impl From<PredictionSet> for Vec<PredictionEntry> {
    fn from(set: PredictionSet) -> Self {
        set.entries
    }
}
