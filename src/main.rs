//! quadrant-pi CLI entry point
//!
//! Monte Carlo estimation of pi and circle quadrant area

use quadrant_pi::cli;

fn main() {
    let result = cli::run();
    if let Err(e) = &result {
        eprint!("{}", cli::error_message(e));
    }
    std::process::exit(cli::exit_code(&result));
}
