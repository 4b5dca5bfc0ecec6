//! TypeSleuth — identify files by their magic bytes.
//!
//! Thin binary entry point. All logic lives in the `typesleuth-core`
//! and `typesleuth-cli` crates.

use std::process::ExitCode;

fn main() -> anyhow::Result<ExitCode> {
    let args = typesleuth_cli::Args::parse_env();

    // Initialise structured logging. Logs go to stderr so stdout carries
    // only the report.
    tracing_subscriber::fmt()
        .with_max_level(args.log_level())
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("TypeSleuth {} starting", env!("CARGO_PKG_VERSION"));

    typesleuth_cli::run(args)
}
