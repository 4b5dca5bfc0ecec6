/// Command-line arguments.
use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;
use tracing::Level;
use typesleuth_core::report::ReportFormat;

#[derive(Parser, Debug)]
#[command(name = "typesleuth")]
#[command(author, version, about = "Determine file types in a directory by their magic bytes", long_about = None)]
pub struct Args {
    /// Directory path to scan
    #[arg(value_name = "PATH", required_unless_present = "list_signatures")]
    pub path: Option<PathBuf>,

    /// Report format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Worker threads for directory reading and probing [default: CPU count]
    #[arg(short = 'j', long, value_parser = clap::value_parser!(u16).range(1..))]
    pub threads: Option<u16>,

    /// JSON signature file replacing the built-in table
    #[arg(long, value_name = "FILE")]
    pub signatures: Option<PathBuf>,

    /// Do not open .docx/.xlsx/.pptx archives to annotate them
    #[arg(long)]
    pub no_container_check: bool,

    /// Never colour the text report
    #[arg(long)]
    pub no_color: bool,

    /// Print the active signature table and exit
    #[arg(long)]
    pub list_signatures: bool,

    /// Increase log verbosity on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Parse from the process arguments, exiting with usage on error.
    pub fn parse_env() -> Self {
        Self::parse()
    }

    /// Maximum log level implied by `-v` flags. Warnings are always shown.
    pub fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }

    pub fn threads(&self) -> usize {
        self.threads
            .map(usize::from)
            .unwrap_or_else(num_cpus::get)
    }
}

/// Report format as spelled on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Csv,
}

impl From<OutputFormat> for ReportFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => ReportFormat::Text,
            OutputFormat::Json => ReportFormat::Json,
            OutputFormat::Csv => ReportFormat::Csv,
        }
    }
}
