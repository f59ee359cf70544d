mod handlers;
pub mod logging;
pub mod parse;

use clap::Parser;
pub use parse::Cli;

use crate::core::error::HistoError;

/// Parse argv, set up logging and draw the histogram.
///
/// Argument errors are handled by clap: usage on stderr, exit status 2.
///
/// # Errors
/// Bad option values, unreadable or malformed input, failed writes.
pub fn run() -> Result<(), HistoError> {
    let cli = Cli::parse();
    logging::init_logging(cli.debug);
    handlers::histogram(&cli)
}
