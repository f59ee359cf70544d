use clap::Parser;

use crate::core::constants::{
    DEFAULT_BINS, DEFAULT_COLUMN, DEFAULT_DELIMITER, DEFAULT_HIGH, DEFAULT_LOW, DEFAULT_TITLE,
};

/// Top-level CLI structure.
#[derive(Parser, Debug)]
#[command(
    name = "histo",
    about = "Terminal histogram of one numeric column of a delimited text file"
)]
pub struct Cli {
    /// Data file (use `-` for stdin)
    #[arg(value_name = "DATA_FILE")]
    pub file: String,

    /// Histogram title
    #[arg(short, long, default_value = DEFAULT_TITLE)]
    pub title: String,

    /// Number of equal-width bins
    #[arg(short = 'n', long, default_value_t = DEFAULT_BINS)]
    pub bins: usize,

    /// Inclusive lower edge of the binned range
    #[arg(long, default_value_t = DEFAULT_LOW, allow_negative_numbers = true)]
    pub low: f64,
    /// Exclusive upper edge of the binned range
    #[arg(long, default_value_t = DEFAULT_HIGH, allow_negative_numbers = true)]
    pub high: f64,

    /// Zero-based column holding the values
    #[arg(short, long, default_value_t = DEFAULT_COLUMN)]
    pub column: usize,

    /// Field delimiter (single ASCII character)
    #[arg(short, long, default_value_t = char::from(DEFAULT_DELIMITER))]
    pub delimiter: char,

    /// Bar color (name or `#RRGGBB`)
    #[arg(long, default_value = "red")]
    pub color: String,

    /// Print bars without escape sequences
    #[arg(long)]
    pub no_color: bool,

    /// Emit debug diagnostics on stderr
    #[arg(long)]
    pub debug: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_reproduce_reference_invocation() {
        let cli = Cli::try_parse_from(["histo", "data.csv"]).unwrap();
        assert_eq!(cli.file, "data.csv");
        assert_eq!(cli.title, "Title");
        assert_eq!(cli.bins, 10);
        assert_eq!((cli.low, cli.high), (0.5, 10.5));
        assert_eq!(cli.column, 1);
        assert_eq!(cli.delimiter, ',');
        assert!(!cli.no_color && !cli.debug);
    }

    #[test]
    fn negative_edges_and_overrides() {
        let cli = Cli::try_parse_from([
            "histo", "-", "--low", "-5", "--high", "-1", "-n", "8", "-d", ";", "-c", "0",
        ])
        .unwrap();
        assert_eq!(cli.file, "-");
        assert_eq!((cli.low, cli.high), (-5.0, -1.0));
        assert_eq!(cli.bins, 8);
        assert_eq!(cli.delimiter, ';');
        assert_eq!(cli.column, 0);
    }

    #[test]
    fn data_file_is_required() {
        assert!(Cli::try_parse_from(["histo"]).is_err());
        assert!(Cli::try_parse_from(["histo", "a.csv", "b.csv"]).is_err());
    }
}
