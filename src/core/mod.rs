//! Aggregates the “business logic” layer.

pub mod color;
pub mod config;
pub mod constants;
pub mod data;
pub mod error;
pub mod histogram;

// re-export frequently-used items for convenience
pub use color::{AnsiCode, ColorError, colorize};
pub use config::{Config, ConfigBuilder};
pub use constants::{
    BAR_WIDTH, DEFAULT_BINS, DEFAULT_COLUMN, DEFAULT_DELIMITER, DEFAULT_HIGH, DEFAULT_LOW,
    DEFAULT_TITLE, PERCENTILE_COUNT,
};
pub use data::{Column, ColumnSpec};
pub use error::{ConfigError, HistoError, HistogramError};
pub use histogram::{Histogram, Slot};
