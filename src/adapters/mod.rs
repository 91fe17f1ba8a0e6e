#[cfg(feature = "cli")]
pub mod cli;
pub mod teos10;

#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
pub fn run() -> Result<(), crate::error::AppError> {
    use crate::adapters::cli::{Args, parse_inputs};
    use crate::calculator::compute_summary;

    let args = Args::parse();

    let level = if args.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let request = parse_inputs(&args)?;
    tracing::debug!(properties = ?request.properties, "parsed request");

    let out = compute_summary(&request.inputs, &request.assumptions, &request.properties)?;

    crate::adapters::cli::print_output(&out, &args)?;

    Ok(())
}
