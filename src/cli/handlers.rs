use std::time::Instant;

use tracing::debug;

use crate::{
    core::{
        color::AnsiCode,
        config::Config,
        data::{ColumnSpec, read_column_from_path},
        error::{ConfigError, HistoError},
        histogram::Histogram,
    },
    render::Renderer,
};

use super::parse::Cli;

/// Delimiters are matched byte-wise, so only ASCII is accepted.
pub(crate) fn delimiter_byte(c: char) -> Result<u8, ConfigError> {
    u8::try_from(c)
        .ok()
        .filter(u8::is_ascii)
        .ok_or(ConfigError::InvalidDelimiter(c))
}

pub(crate) fn config_from_args(a: &Cli) -> Result<Config, HistoError> {
    let mut b = Config::builder()
        .title(a.title.clone())
        .bins(a.bins)
        .range(a.low..a.high);
    b = if a.no_color {
        b.no_color()
    } else {
        b.color(AnsiCode::from_name(&a.color)?)
    };
    Ok(b.build()?)
}

pub fn histogram(a: &Cli) -> Result<(), HistoError> {
    // reject bad flags before touching the file
    let cfg = config_from_args(a)?;
    let spec = ColumnSpec {
        index: a.column,
        delimiter: delimiter_byte(a.delimiter)?,
    };

    let t_ingest = Instant::now();
    let column = read_column_from_path(&a.file, spec)?;
    debug!(
        file = %a.file,
        rows = column.rows,
        skipped = column.skipped,
        values = column.values.len(),
        elapsed = ?t_ingest.elapsed(),
        "ingest complete"
    );

    let mut hist = Histogram::from_config(&cfg)?;
    hist.fill(column.values);
    debug!(
        bins = hist.bin_count(),
        bin_width = hist.bin_width(),
        entries = hist.total_entries(),
        underflow = hist.underflow(),
        overflow = hist.overflow(),
        "histogram filled"
    );

    Renderer::new(&cfg).render_stdout(&mut hist)
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;
    use crate::core::error::HistogramError;

    fn args(extra: &[&str]) -> Cli {
        let mut argv = vec!["histo", "data.csv"];
        argv.extend_from_slice(extra);
        Cli::parse_from(argv)
    }

    #[test]
    fn ascii_delimiters_only() {
        assert_eq!(delimiter_byte('\t'), Ok(b'\t'));
        assert_eq!(
            delimiter_byte('é'),
            Err(ConfigError::InvalidDelimiter('é'))
        );
    }

    #[test]
    fn flags_reach_the_config() {
        let cfg = config_from_args(&args(&["--no-color", "-t", "Sizes", "-n", "3"])).unwrap();
        assert_eq!(cfg.title, "Sizes");
        assert_eq!(cfg.bins, 3);
        assert_eq!(cfg.color, None);
    }

    #[test]
    fn bad_flags_are_reported() {
        assert!(matches!(
            config_from_args(&args(&["--color", "nope"])),
            Err(HistoError::Color(_))
        ));
        assert!(matches!(
            config_from_args(&args(&["--low", "3", "--high", "1"])),
            Err(HistoError::Config(ConfigError::Histogram(
                HistogramError::InvalidRange { .. }
            )))
        ));
    }

    #[test]
    fn missing_file_is_fatal() {
        let mut a = args(&[]);
        a.file = "/no/such/file.csv".into();
        assert!(matches!(histogram(&a), Err(HistoError::Csv(_))));
    }
}
