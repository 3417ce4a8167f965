//! Command-line interface
//!
//! `quadrant-pi R N` validates its two positional arguments, seeds the
//! pseudo-random source from the clock, runs one simulation and prints the
//! report.

use crate::config::defaults::{APP_NAME, DEFAULT_LOG_FILTER, EXIT_FAILURE, EXIT_SUCCESS};
use crate::config::SimulationConfig;
use crate::error::{Error, Result};
use crate::format::{available_formats, get_formatter};
use crate::report::Report;
use crate::rng::pseudo::PseudoSource;
use crate::rng::RandomSource;
use crate::sim::simulate;
use clap::error::ErrorKind;
use clap::Parser;
use std::ffi::OsString;
use std::path::Path;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Monte Carlo estimation of pi and circle quadrant area
#[derive(Parser, Debug)]
#[command(name = "quadrant-pi")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Radius of the circle (floating point number)
    #[arg(
        value_name = "R",
        allow_negative_numbers = true,
        required_unless_present = "list_formats"
    )]
    pub radius: Option<String>,

    /// Number of iterations (integer)
    #[arg(
        value_name = "N",
        allow_negative_numbers = true,
        required_unless_present = "list_formats"
    )]
    pub iterations: Option<String>,

    /// Output format
    #[arg(long, short = 'f')]
    pub format: Option<String>,

    /// List available formats
    #[arg(short = 'F', long = "list-formats")]
    pub list_formats: bool,
}

/// Run the CLI against the process arguments and print the report
pub fn run() -> Result<()> {
    init_logging();

    let output = execute(std::env::args_os())?;
    println!("{}", output.trim_end());

    Ok(())
}

/// Parse `args` (program name first), run the simulation and render the report
///
/// Help and version requests render their text as a successful result. Any
/// other argument error becomes `Error::Usage`.
pub fn execute<I, T>(args: I) -> Result<String>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    let program = program_name(&args);

    let cli = match Cli::try_parse_from(&args) {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            return Ok(e.to_string());
        }
        Err(e) => {
            debug!(kind = ?e.kind(), "argument parsing failed");
            return Err(Error::Usage(usage(&program)));
        }
    };

    if cli.list_formats {
        return Ok(list_formats());
    }

    let (radius, iterations) = match (cli.radius.as_deref(), cli.iterations.as_deref()) {
        (Some(radius), Some(iterations)) => (radius, iterations),
        _ => return Err(Error::Usage(usage(&program))),
    };

    let config = SimulationConfig::from_args(radius, iterations, cli.format.as_deref())?;
    let formatter = get_formatter(&config.format)
        .ok_or_else(|| Error::UnknownFormat(config.format.clone()))?;

    let mut source = PseudoSource::from_time();
    info!(
        seed = source.seed(),
        source = source.name(),
        output_format = formatter.name(),
        "running simulation"
    );

    let result = simulate(config.radius, config.iterations, &mut source);
    formatter.format(&Report::new(&result))
}

/// Process exit status for a finished run
pub fn exit_code<T>(result: &Result<T>) -> i32 {
    match result {
        Ok(_) => EXIT_SUCCESS,
        Err(_) => EXIT_FAILURE,
    }
}

/// Text to print on stderr for a failed run
///
/// Usage and input validation messages are printed bare; everything else
/// gets an `Error: ` prefix.
pub fn error_message(err: &Error) -> String {
    match err {
        Error::Usage(usage) => usage.clone(),
        Error::InvalidRadius
        | Error::NonFiniteRadius
        | Error::RadiusTooLarge
        | Error::InvalidIterations
        | Error::Parse { .. } => format!("{}\n", err),
        _ => format!("Error: {}\n", err),
    }
}

/// Usage syntax for the given program name
pub fn usage(program: &str) -> String {
    format!(
        "Syntax: {} R N.\n\n\
         R is a floating point number representing the radius.\n\
         N is an integer representing the number of iterations.\n",
        program
    )
}

/// Initialize logging to stderr, filtered by RUST_LOG
fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

fn program_name(args: &[OsString]) -> String {
    args.first()
        .and_then(|arg| Path::new(arg).file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| APP_NAME.to_string())
}

fn list_formats() -> String {
    let mut output = String::from("Available output formats:\n");
    for format in available_formats() {
        output.push_str(&format!("  {:6} - {}\n", format.name, format.description));
    }
    output
}
