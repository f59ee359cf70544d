use std::process::ExitCode;

fn main() -> ExitCode {
    match term_histogram::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
