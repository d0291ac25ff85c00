//! Rectangular export layout of needs and predictions
//!
//! Unlike [`crate::align`], the table applies no period offset: every
//! prediction column is filled from row 1 downwards in sequence order.

use crate::config::ViewConfig;
use crate::data::{NeedSeries, PredictionSet};
use crate::error::Result;
use log::{debug, warn};
use polars::prelude::*;

/// One period of the export table
#[derive(Debug, Clone, PartialEq)]
pub struct ExportRow {
    /// 1-indexed period
    pub period: usize,
    /// Observed need of the period
    pub need: f64,
    /// One cell per prediction column; `None` is an empty cell
    pub predictions: Vec<Option<f64>>,
}

/// Headers plus one row per observed period
#[derive(Debug, Clone, PartialEq)]
pub struct ExportTable {
    sheet_name: String,
    headers: Vec<String>,
    rows: Vec<ExportRow>,
}

impl ExportTable {
    /// Name of the worksheet this table is written to
    pub fn sheet_name(&self) -> &str {
        &self.sheet_name
    }

    /// Column headers: period, need, then one per prediction key
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Rows in period order
    pub fn rows(&self) -> &[ExportRow] {
        &self.rows
    }

    /// Number of rows, always the length of the need series
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns including the period and need columns
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Look up a prediction cell by 1-indexed row and header
    pub fn prediction_cell(&self, period: usize, header: &str) -> Option<f64> {
        let column = self.headers.iter().skip(2).position(|h| h == header)?;
        let row = self.rows.get(period.checked_sub(1)?)?;
        row.predictions.get(column).copied().flatten()
    }

    /// Convert to a polars DataFrame; empty cells become nulls
    pub fn to_dataframe(&self) -> Result<DataFrame> {
        let mut columns = Vec::with_capacity(self.headers.len());

        let periods: Vec<u64> = self.rows.iter().map(|r| r.period as u64).collect();
        columns.push(Series::new(&self.headers[0], periods));

        let needs: Vec<f64> = self.rows.iter().map(|r| r.need).collect();
        columns.push(Series::new(&self.headers[1], needs));

        for (column, header) in self.headers.iter().skip(2).enumerate() {
            let cells: Vec<Option<f64>> =
                self.rows.iter().map(|r| r.predictions[column]).collect();
            columns.push(Series::new(header, cells));
        }

        Ok(DataFrame::new(columns)?)
    }
}

/// Lay out needs and every prediction key as an export table.
///
/// Prediction columns follow the insertion order of `predictions`. A column
/// shorter than the need series leaves its trailing cells empty; values past
/// the last need period have no row and are dropped.
///
/// # Examples
///
/// ```
/// use forecast_view::{build_table, NeedSeries, PredictionSet, ViewConfig};
///
/// let needs = NeedSeries::new(vec![10.0, 20.0, 30.0, 40.0]).unwrap();
/// let predictions = PredictionSet::from_pairs(vec![(2, vec![25.0, 35.0])]).unwrap();
/// let table = build_table(&needs, &predictions, &ViewConfig::default());
///
/// assert_eq!(table.headers(), &["Periods", "Needs", "n = 2"]);
/// assert_eq!(table.prediction_cell(2, "n = 2"), Some(35.0));
/// assert_eq!(table.prediction_cell(3, "n = 2"), None);
/// ```
pub fn build_table(
    needs: &NeedSeries,
    predictions: &PredictionSet,
    config: &ViewConfig,
) -> ExportTable {
    let mut headers = Vec::with_capacity(predictions.len() + 2);
    headers.push(config.period_header.clone());
    headers.push(config.need_header.clone());
    headers.extend(predictions.keys().map(|k| config.prediction_header(k)));

    for (key, values) in predictions.iter() {
        if values.len() > needs.len() {
            warn!(
                "n = {} has {} predictions but only {} periods; dropping {} trailing values from the table",
                key,
                values.len(),
                needs.len(),
                values.len() - needs.len()
            );
        }
    }

    let rows: Vec<ExportRow> = needs
        .periods()
        .map(|(period, need)| ExportRow {
            period,
            need,
            predictions: predictions
                .iter()
                .map(|(_, values)| values.get(period - 1).copied())
                .collect(),
        })
        .collect();

    debug!(
        "built export table '{}': {} rows x {} columns",
        config.sheet_name,
        rows.len(),
        headers.len()
    );

    ExportTable {
        sheet_name: config.sheet_name.clone(),
        headers,
        rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_longer_prediction_is_truncated() {
        let needs = NeedSeries::new(vec![1.0, 2.0]).unwrap();
        let predictions = PredictionSet::from_pairs(vec![(1, vec![7.0, 8.0, 9.0])]).unwrap();
        let table = build_table(&needs, &predictions, &ViewConfig::default());

        assert_eq!(table.row_count(), 2);
        assert_eq!(table.rows()[1].predictions, vec![Some(8.0)]);
    }

    #[test]
    fn test_prediction_cell_out_of_range() {
        let needs = NeedSeries::new(vec![1.0]).unwrap();
        let table = build_table(&needs, &PredictionSet::new(), &ViewConfig::default());

        assert_eq!(table.prediction_cell(0, "n = 1"), None);
        assert_eq!(table.prediction_cell(1, "Needs"), None);
        assert_eq!(table.sheet_name(), "LR_Data");
    }
}
