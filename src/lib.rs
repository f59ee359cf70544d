//! Public-facing crate root – re-exports + one-shot helper.

pub mod cli;
pub mod core;
pub mod render;

pub use crate::core::{
    color::{AnsiCode, ColorError, colorize},
    config::{Config, ConfigBuilder},
    data::{Column, ColumnSpec, ParseCsvError, read_column, read_column_from_path},
    error::{ConfigError, HistoError, HistogramError},
    histogram::{Histogram, Slot},
};

pub use render::{Renderer, sci_label};

/// Fill a histogram built from `cfg` with `values` and print it to stdout.
/// Returns the histogram for further inspection.
///
/// # Errors
/// Invalid geometry in `cfg` or a failed write to stdout.
pub fn plot_values(values: &[f64], cfg: &Config) -> Result<Histogram, HistoError> {
    let mut hist = Histogram::from_config(cfg)?;
    hist.fill(values.iter().copied());
    Renderer::new(cfg).render_stdout(&mut hist)?;
    Ok(hist)
}
