/// Per-file probing: read a bounded prefix and classify it.
///
/// Runs on the rayon pool, one call per candidate. Every failure here is
/// local to the file: it is reported back as [`Probe::Skipped`] and the scan
/// carries on.
use crate::container;
use crate::signature::{SignatureTable, PREFIX_LEN};
use std::fs::{self, File};
use std::io::{self, Read};
use std::path::Path;

/// Outcome of probing a single candidate.
#[derive(Debug)]
pub enum Probe<'t> {
    /// Matched a signature. `container` is only set for office extensions.
    Classified {
        label: &'t str,
        container: Option<container::ContainerKind>,
    },
    /// Read successfully but matched nothing.
    Unclassified,
    /// Could not be read; excluded from results.
    Skipped(io::Error),
}

/// Read at most [`PREFIX_LEN`] bytes from the start of `path`.
///
/// Only regular files (after resolving symlinks) are opened. Directories,
/// FIFOs, sockets and devices are rejected up front so a probe can never
/// block waiting for a writer.
pub fn read_prefix(path: &Path) -> io::Result<Vec<u8>> {
    let meta = fs::metadata(path)?;
    if !meta.is_file() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "not a regular file",
        ));
    }

    let mut buf = Vec::with_capacity(PREFIX_LEN);
    File::open(path)?
        .take(PREFIX_LEN as u64)
        .read_to_end(&mut buf)?;
    Ok(buf)
}

/// Probe one candidate: read its prefix, classify it, and annotate office
/// extensions when `inspect_containers` is set.
pub fn probe_file<'t>(path: &Path, table: &'t SignatureTable, inspect_containers: bool) -> Probe<'t> {
    let prefix = match read_prefix(path) {
        Ok(p) => p,
        Err(err) => return Probe::Skipped(err),
    };

    match table.classify(&prefix) {
        Some(label) => {
            let container = if inspect_containers && container::has_office_extension(path) {
                container::inspect(path, &prefix)
            } else {
                None
            };
            Probe::Classified { label, container }
        }
        None => Probe::Unclassified,
    }
}
