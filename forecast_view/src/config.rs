//! Labels and header texts used when presenting and exporting forecasts

use crate::error::{Result, ViewError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Presentation settings shared by the chart layers and the export table.
///
/// Every field has a default, so a JSON override only needs the fields it
/// changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Name of the exported worksheet
    pub sheet_name: String,
    /// Header of the period column
    pub period_header: String,
    /// Header of the observed need column
    pub need_header: String,
    /// Prefix placed before the key in prediction column headers
    pub prediction_header_prefix: String,
    /// Layer name of the observed need series
    pub need_series_name: String,
    /// Prefix placed before the key in prediction layer names
    pub prediction_series_prefix: String,
    /// Chart title
    pub chart_title: String,
    /// Label of the period axis
    pub x_axis_label: String,
    /// Label of the value axis
    pub y_axis_label: String,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            sheet_name: "LR_Data".to_string(),
            period_header: "Periods".to_string(),
            need_header: "Needs".to_string(),
            prediction_header_prefix: "n = ".to_string(),
            need_series_name: "Actual Need".to_string(),
            prediction_series_prefix: "Predictions for n = ".to_string(),
            chart_title: "Visualization of actual need and predictions".to_string(),
            x_axis_label: "Period".to_string(),
            y_axis_label: "Pieces".to_string(),
        }
    }
}

impl ViewConfig {
    /// Parse a configuration from JSON, filling missing fields with defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from a JSON file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Check that column headers are non-empty and cannot collide
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("sheet_name", &self.sheet_name),
            ("period_header", &self.period_header),
            ("need_header", &self.need_header),
            ("prediction_header_prefix", &self.prediction_header_prefix),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(ViewError::ConfigError(format!(
                    "{} must not be empty",
                    field
                )));
            }
        }

        if self.period_header == self.need_header {
            return Err(ViewError::ConfigError(format!(
                "period_header and need_header are both '{}'",
                self.period_header
            )));
        }

        for (field, value) in [
            ("period_header", &self.period_header),
            ("need_header", &self.need_header),
        ] {
            if self.is_prediction_header(value) {
                return Err(ViewError::ConfigError(format!(
                    "{} '{}' collides with the prediction column headers",
                    field, value
                )));
            }
        }

        Ok(())
    }

    /// Check whether `header` has the shape of a prediction column header
    fn is_prediction_header(&self, header: &str) -> bool {
        header
            .strip_prefix(self.prediction_header_prefix.as_str())
            .map_or(false, |rest| rest.parse::<i32>().is_ok())
    }

    /// Header of the export column for a prediction key
    pub fn prediction_header(&self, key: i32) -> String {
        format!("{}{}", self.prediction_header_prefix, key)
    }

    /// Display name of the chart layer for a prediction key
    pub fn prediction_series_name(&self, key: i32) -> String {
        format!("{}{}", self.prediction_series_prefix, key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_names() {
        let config = ViewConfig::default();
        assert_eq!(config.prediction_header(2), "n = 2");
        assert_eq!(config.prediction_series_name(-3), "Predictions for n = -3");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_override() {
        let config = ViewConfig::from_json_str(r#"{"sheet_name": "Forecast"}"#).unwrap();
        assert_eq!(config.sheet_name, "Forecast");
        assert_eq!(config.need_header, "Needs");
    }

    #[test]
    fn test_rejects_empty_header() {
        let err = ViewConfig::from_json_str(r#"{"need_header": " "}"#).unwrap_err();
        assert!(matches!(err, ViewError::ConfigError(_)));
    }

    #[test]
    fn test_rejects_colliding_headers() {
        let err = ViewConfig::from_json_str(r#"{"need_header": "Periods"}"#).unwrap_err();
        assert!(err.to_string().contains("Periods"));
    }

    #[test]
    fn test_rejects_header_shaped_like_prediction_column() {
        let err = ViewConfig::from_json_str(r#"{"need_header": "n = 2"}"#).unwrap_err();
        assert!(err.to_string().contains("need_header"));

        let err = ViewConfig::from_json_str(
            r#"{"period_header": "P-7", "prediction_header_prefix": "P"}"#,
        )
        .unwrap_err();
        assert!(matches!(err, ViewError::ConfigError(_)));

        // A shared prefix alone is not a collision
        let config = ViewConfig::from_json_str(
            r#"{"need_header": "Need", "prediction_header_prefix": "N"}"#,
        )
        .unwrap();
        assert_eq!(config.prediction_header(4), "N4");
    }

    #[test]
    fn test_malformed_json() {
        let err = ViewConfig::from_json_str("{not json").unwrap_err();
        assert!(matches!(err, ViewError::SerializationError(_)));
    }
}
