//! Placement of prediction series on the period timeline of the observed needs
//!
//! A prediction of length `L` drawn against `N` observed periods is shifted by
//! `|L - N|` periods, so a shorter prediction ends near the end of the history
//! instead of starting at period 1. Predictions longer than the history run
//! past period `N`; the display surface has to widen its axis for them (see
//! [`ChartSpec::x_upper_bound`]).

use crate::config::ViewConfig;
use crate::data::{NeedSeries, PredictionSet};
use crate::error::{Result, ViewError};
use log::debug;
use serde::{Deserialize, Serialize};

/// A value positioned on the shared, 1-indexed period timeline
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AlignedPoint {
    pub period: usize,
    pub value: f64,
}

impl AlignedPoint {
    pub fn new(period: usize, value: f64) -> Self {
        Self { period, value }
    }
}

/// Period shift applied to a prediction of `prediction_len` values
pub fn alignment_offset(need_len: usize, prediction_len: usize) -> usize {
    prediction_len.abs_diff(need_len)
}

/// Last period covered by an aligned prediction, or 0 when it is empty
pub fn last_period(need_len: usize, prediction_len: usize) -> usize {
    if prediction_len == 0 {
        return 0;
    }
    alignment_offset(need_len, prediction_len) + prediction_len
}

/// Align one prediction sequence against `need_len` observed periods.
///
/// The points are produced lazily; element `i` lands on period
/// `|L - N| + i + 1`.
///
/// # Examples
///
/// ```
/// use forecast_view::align::{align, AlignedPoint};
///
/// let points: Vec<AlignedPoint> = align(4, &[25.0, 35.0]).collect();
/// assert_eq!(points, vec![AlignedPoint::new(3, 25.0), AlignedPoint::new(4, 35.0)]);
/// ```
pub fn align(
    need_len: usize,
    predictions: &[f64],
) -> impl ExactSizeIterator<Item = AlignedPoint> + '_ {
    let offset = alignment_offset(need_len, predictions.len());
    predictions
        .iter()
        .enumerate()
        .map(move |(i, &value)| AlignedPoint::new(offset + i + 1, value))
}

/// A named series of points, rendered as one chart layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesLayer {
    pub name: String,
    pub points: Vec<AlignedPoint>,
}

impl SeriesLayer {
    /// Highest period in the layer, or 0 for an empty layer
    pub fn max_period(&self) -> usize {
        self.points.iter().map(|p| p.period).max().unwrap_or(0)
    }

    /// Serialize the layer for an out-of-process display surface
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Layer of the observed needs, one point per period
pub fn need_layer(needs: &NeedSeries, config: &ViewConfig) -> SeriesLayer {
    SeriesLayer {
        name: config.need_series_name.clone(),
        points: needs
            .periods()
            .map(|(period, value)| AlignedPoint::new(period, value))
            .collect(),
    }
}

/// Aligned layer for the predictions of a single key
pub fn prediction_layer(
    needs: &NeedSeries,
    predictions: &PredictionSet,
    key: i32,
    config: &ViewConfig,
) -> Result<SeriesLayer> {
    let values = predictions.get(key).ok_or(ViewError::UnknownKey(key))?;
    let points: Vec<AlignedPoint> = align(needs.len(), values).collect();

    debug!(
        "aligned n = {}: {} points, offset {}",
        key,
        points.len(),
        alignment_offset(needs.len(), values.len())
    );

    Ok(SeriesLayer {
        name: config.prediction_series_name(key),
        points,
    })
}

/// Title, axis labels and period-axis extent of the chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub title: String,
    pub x_axis_label: String,
    pub y_axis_label: String,
    /// Largest period drawn by the need layer or any visible prediction layer
    pub x_upper_bound: usize,
}

impl ChartSpec {
    /// Describe the chart for the observed needs plus the given visible keys
    pub fn new<I>(
        config: &ViewConfig,
        needs: &NeedSeries,
        predictions: &PredictionSet,
        visible: I,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = i32>,
    {
        let mut x_upper_bound = needs.len();
        for key in visible {
            let values = predictions.get(key).ok_or(ViewError::UnknownKey(key))?;
            x_upper_bound = x_upper_bound.max(last_period(needs.len(), values.len()));
        }

        Ok(Self {
            title: config.chart_title.clone(),
            x_axis_label: config.x_axis_label.clone(),
            y_axis_label: config.y_axis_label.clone(),
            x_upper_bound,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_is_symmetric() {
        assert_eq!(alignment_offset(4, 2), 2);
        assert_eq!(alignment_offset(2, 4), 2);
        assert_eq!(alignment_offset(3, 3), 0);
    }

    #[test]
    fn test_empty_prediction() {
        assert_eq!(align(5, &[]).len(), 0);
        assert_eq!(last_period(5, 0), 0);
    }

    #[test]
    fn test_equal_length_matches_need_periods() {
        let periods: Vec<usize> = align(3, &[1.0, 2.0, 3.0]).map(|p| p.period).collect();
        assert_eq!(periods, vec![1, 2, 3]);
    }

    #[test]
    fn test_longer_prediction_runs_past_history() {
        let points: Vec<AlignedPoint> = align(2, &[1.0, 2.0, 3.0]).collect();
        assert_eq!(points.first().map(|p| p.period), Some(2));
        assert_eq!(points.last().map(|p| p.period), Some(4));
        assert_eq!(last_period(2, 3), 4);
    }

    #[test]
    fn test_layer_json() {
        let layer = SeriesLayer {
            name: "Predictions for n = 2".to_string(),
            points: vec![AlignedPoint::new(3, 25.0)],
        };
        let json = layer.to_json().unwrap();
        assert!(json.contains("\"period\":3"));
        assert_eq!(layer.max_period(), 3);
    }
}
