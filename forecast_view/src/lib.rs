//! # Forecast View
//!
//! Lines up forecast series against observed needs for display and export.
//!
//! ## Features
//!
//! - Validated need series and insertion-ordered prediction sets
//! - Alignment of each prediction onto the period timeline of the needs
//! - Export tables with one column per prediction parameter, written as CSV
//!   or converted to a polars `DataFrame`
//! - A show/hide controller that keeps at most one chart layer per parameter
//!
//! ## Quick Start
//!
//! ```rust
//! use forecast_view::{build_table, export::write_csv, NeedSeries, PredictionSet, ViewConfig};
//!
//! let needs = NeedSeries::new(vec![10.0, 20.0, 30.0, 40.0])?;
//! let predictions = PredictionSet::from_pairs(vec![(2, vec![25.0, 35.0])])?;
//! let config = ViewConfig::default();
//!
//! // Points for the chart: the two predictions land on periods 3 and 4
//! let layer = forecast_view::align::prediction_layer(&needs, &predictions, 2, &config)?;
//! assert_eq!(layer.points[0].period, 3);
//!
//! // Table for the spreadsheet: predictions start at row 1
//! let table = build_table(&needs, &predictions, &config);
//! let mut csv = Vec::new();
//! write_csv(&table, &mut csv)?;
//! assert!(String::from_utf8(csv).unwrap().starts_with("Periods,Needs,n = 2\n1,10,25\n"));
//! # Ok::<(), forecast_view::ViewError>(())
//! ```

pub mod align;
pub mod config;
pub mod data;
pub mod error;
pub mod export;
pub mod table;
pub mod toggle;

// Re-export commonly used types
pub use crate::align::{align, AlignedPoint, ChartSpec, SeriesLayer};
pub use crate::config::ViewConfig;
pub use crate::data::{NeedSeries, PredictionSet};
pub use crate::error::{Result, ViewError};
pub use crate::export::{export_csv, ExportReport};
pub use crate::table::{build_table, ExportRow, ExportTable};
pub use crate::toggle::{DisplaySurface, SeriesToggleController, Transition};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
