//! A collection of constants.

/// Title used when none is given on the command line
pub const DEFAULT_TITLE: &str = "Title";

/// Number of equal-width bins
pub const DEFAULT_BINS: usize = 10;
/// Inclusive lower edge of the binned range
pub const DEFAULT_LOW: f64 = 0.5;
/// Exclusive upper edge of the binned range
pub const DEFAULT_HIGH: f64 = 10.5;

/// Every bar is this many cells wide
pub const BAR_WIDTH: usize = 40;
/// Filled bar cell
pub const BAR_GLYPH: char = '█';

/// 10th, 20th, ... 100th
pub const PERCENTILE_COUNT: usize = 10;
/// Percentiles are printed with two decimals.
///
/// 3.14159 becomes 3.14
pub const PERCENTILE_PRECISION: usize = 2;
/// Bin labels are printed in scientific notation with one decimal.
///
/// 1.0 becomes 1.0e+00
pub const LABEL_PRECISION: usize = 1;

/// Zero-based column holding the values (the second field)
pub const DEFAULT_COLUMN: usize = 1;
pub const DEFAULT_DELIMITER: u8 = b',';
