/// Application flow: load the signature table, run the scan on a background
/// thread, drain its progress channel, and print the report.
use crate::args::Args;
use anyhow::{bail, Context, Result};
use std::io::{self, BufWriter, IsTerminal};
use std::path::Path;
use std::process::ExitCode;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::{debug, info, warn};
use typesleuth_core::report::{self, ReportFormat};
use typesleuth_core::scanner::progress::ScanProgress;
use typesleuth_core::scanner::{self, ScanHandle, ScanOptions};
use typesleuth_core::{ScanError, SignatureTable};

/// Exit status after Ctrl+C, following the shell's 128 + SIGINT convention.
pub const EXIT_INTERRUPTED: u8 = 130;

/// Run the CLI with already-parsed arguments.
pub fn run(args: Args) -> Result<ExitCode> {
    let table = match &args.signatures {
        Some(path) => SignatureTable::load_json(path)
            .with_context(|| format!("Failed to load signatures from {}", path.display()))?,
        None => SignatureTable::builtin(),
    };

    let format = ReportFormat::from(args.format);
    let stdout = io::stdout();
    let color = !args.no_color && stdout.is_terminal();
    let mut out = BufWriter::new(stdout.lock());

    if args.list_signatures {
        report::write_signatures(&mut out, &table, format)
            .context("Failed to write signature list")?;
        return Ok(ExitCode::SUCCESS);
    }

    let root = args.path.clone().context("PATH is required")?;
    validate_root(&root)?;

    let options = ScanOptions {
        threads: args.threads(),
        inspect_containers: !args.no_container_check,
    };

    let handle = scanner::start_scan(root, Arc::new(table), options)?;
    let cancel_flag = handle.cancel_flag();
    ctrlc::set_handler(move || cancel_flag.store(true, Ordering::Relaxed))
        .context("Failed to set Ctrl+C handler")?;

    process_scan_messages(&handle);

    match handle.join() {
        Ok(result) => {
            report::write_report(&mut out, &result, format, color)
                .context("Failed to write report")?;
            Ok(ExitCode::SUCCESS)
        }
        Err(ScanError::Cancelled) => {
            warn!("Scan interrupted, no report written");
            Ok(ExitCode::from(EXIT_INTERRUPTED))
        }
        Err(err) => Err(err.into()),
    }
}

/// The scan root must exist and be a directory.
fn validate_root(root: &Path) -> Result<()> {
    let meta = std::fs::metadata(root)
        .with_context(|| format!("Cannot access {}", root.display()))?;
    if !meta.is_dir() {
        bail!("{} is not a directory", root.display());
    }
    Ok(())
}

/// Log progress until the scan thread closes the channel.
fn process_scan_messages(handle: &ScanHandle) {
    for msg in handle.progress_rx.iter() {
        match msg {
            ScanProgress::Discovered { candidates } => {
                info!("Found {candidates} candidate files, probing...");
            }
            ScanProgress::Error { path, message } => {
                debug!("Skipped {path}: {message}");
            }
            ScanProgress::Complete { duration, stats } => {
                info!(
                    "Classified {} of {} candidates in {duration:?}",
                    stats.classified, stats.candidates
                );
            }
            ScanProgress::Cancelled => {
                info!("Scan cancelled");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn validate_root_accepts_directories_only() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("file.txt");
        std::fs::write(&file, b"x").unwrap();

        assert!(validate_root(tmp.path()).is_ok());
        let err = validate_root(&file).unwrap_err();
        assert!(err.to_string().contains("is not a directory"));
        assert!(validate_root(&tmp.path().join("missing")).is_err());
    }
}
