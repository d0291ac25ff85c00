//! # LR View
//!
//! Workspace facade for the forecast presentation crates.
//!
//! ## Example
//!
//! ```
//! use lr_view_workspace::{align, NeedSeries};
//!
//! let needs = NeedSeries::new(vec![5.0, 6.0]).unwrap();
//! let points: Vec<_> = align(needs.len(), &[7.0]).collect();
//! assert_eq!(points[0].period, 2);
//! ```

pub use forecast_view::*;
