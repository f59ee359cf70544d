//! Centralised error types used across the crate.

use std::{error::Error, fmt, io};

use crate::core::{color::ColorError, data::ParseCsvError};

/// Faults raised by the histogram engine itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HistogramError {
    InvalidBinCount(usize),
    InvalidRange { low: f64, high: f64 },
    /// Percentiles were requested before any value was filled.
    InsufficientSamples,
}

impl fmt::Display for HistogramError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HistogramError::InvalidBinCount(n) => {
                write!(f, "bin count must be positive, got {n}")
            }
            HistogramError::InvalidRange { low, high } => {
                write!(f, "low edge {low} must be finite and < high edge {high}")
            }
            HistogramError::InsufficientSamples => {
                f.write_str("percentiles need at least one sample")
            }
        }
    }
}
impl Error for HistogramError {}

/// Precise configuration faults.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    Histogram(HistogramError),
    InvalidBarWidth(usize),
    InvalidDelimiter(char),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Histogram(e) => write!(f, "{e}"),
            ConfigError::InvalidBarWidth(w) => write!(f, "bar width must be positive, got {w}"),
            ConfigError::InvalidDelimiter(c) => {
                write!(f, "delimiter must be a single ASCII character, got {c:?}")
            }
        }
    }
}
impl Error for ConfigError {}

impl From<HistogramError> for ConfigError {
    fn from(e: HistogramError) -> Self {
        Self::Histogram(e)
    }
}

/// Top-level error type bubbled up by public APIs.
#[derive(Debug)]
pub enum HistoError {
    Io(io::Error),
    Csv(ParseCsvError),
    Color(ColorError),
    Config(ConfigError),
    Histogram(HistogramError),
}

impl fmt::Display for HistoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HistoError::Io(e) => write!(f, "{e}"),
            HistoError::Csv(e) => write!(f, "{e}"),
            HistoError::Color(e) => write!(f, "{e}"),
            HistoError::Config(e) => write!(f, "{e}"),
            HistoError::Histogram(e) => write!(f, "{e}"),
        }
    }
}
impl Error for HistoError {}

// automatic conversions
impl From<io::Error> for HistoError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
impl From<ParseCsvError> for HistoError {
    fn from(e: ParseCsvError) -> Self {
        Self::Csv(e)
    }
}
impl From<ColorError> for HistoError {
    fn from(e: ColorError) -> Self {
        Self::Color(e)
    }
}
impl From<ConfigError> for HistoError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}
impl From<HistogramError> for HistoError {
    fn from(e: HistogramError) -> Self {
        Self::Histogram(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_values() {
        let e = HistoError::from(ConfigError::from(HistogramError::InvalidRange {
            low: 2.0,
            high: 1.0,
        }));
        assert_eq!(e.to_string(), "low edge 2 must be finite and < high edge 1");
        assert_eq!(
            HistogramError::InvalidBinCount(0).to_string(),
            "bin count must be positive, got 0"
        );
    }
}
