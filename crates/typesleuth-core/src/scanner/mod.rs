/// Scanner module: walks a directory tree and groups files by signature.
///
/// A scan runs in three phases:
/// 1. **Walk:** [`walk::CandidateWalk`] produces leaf candidates in a stable,
///    name-sorted depth-first order. This phase is sequential from the
///    consumer's point of view, which pins down the candidate order.
/// 2. **Probe:** candidates are classified on a fixed-size rayon pool. The
///    signature table is shared read-only; workers hold no other state.
/// 3. **Aggregate:** outcomes are zipped back with their candidates and
///    appended to buckets in candidate order, never completion order.
///
/// [`scan`] runs all of this on the calling thread; [`start_scan`] runs it
/// on a background thread and hands back a [`ScanHandle`].
pub mod probe;
pub mod progress;
pub mod walk;

use crate::error::ScanError;
use crate::model::{ScanEntry, ScanResult};
use crate::signature::SignatureTable;
use probe::Probe;
use progress::ScanProgress;
use walk::CandidateWalk;

use crossbeam_channel::{Receiver, Sender};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Instant;
use tracing::{debug, info};

/// Maximum number of progress messages that may queue up in the channel.
///
/// Only per-error messages scale with the tree; a frontend that stops
/// draining stalls the scanner rather than growing the heap.
pub const PROGRESS_CHANNEL_CAPACITY: usize = 4_096;

/// Tunables for a scan.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Worker threads for directory reading and probing. Clamped to ≥ 1.
    pub threads: usize,
    /// Open `.docx`/`.xlsx`/`.pptx` archives to annotate them.
    pub inspect_containers: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            threads: num_cpus::get(),
            inspect_containers: true,
        }
    }
}

/// Handle to a scan running on a background thread.
pub struct ScanHandle {
    /// Receiver for progress updates from the scan thread. Disconnects once
    /// the scan has finished.
    pub progress_rx: Receiver<ScanProgress>,
    /// Flag to request cancellation.
    cancel_flag: Arc<AtomicBool>,
    /// Join handle for the scan thread.
    thread: thread::JoinHandle<Result<ScanResult, ScanError>>,
}

impl ScanHandle {
    /// Request the scan to stop as soon as possible.
    pub fn cancel(&self) {
        self.cancel_flag.store(true, Ordering::Relaxed);
    }

    /// Check whether cancellation has been requested.
    pub fn is_cancelled(&self) -> bool {
        self.cancel_flag.load(Ordering::Relaxed)
    }

    /// The shared cancel flag, for wiring into signal handlers.
    pub fn cancel_flag(&self) -> Arc<AtomicBool> {
        self.cancel_flag.clone()
    }

    /// Wait for the scan thread and return its result.
    ///
    /// Frontends should drain `progress_rx` first; the scan thread blocks
    /// once the channel is full.
    pub fn join(self) -> Result<ScanResult, ScanError> {
        drop(self.progress_rx);
        self.thread.join().map_err(|_| ScanError::Panicked)?
    }
}

/// Start a new scan on a background thread.
///
/// Returns a `ScanHandle` for receiving progress, requesting cancellation
/// and collecting the result.
pub fn start_scan(
    root_path: PathBuf,
    table: Arc<SignatureTable>,
    options: ScanOptions,
) -> Result<ScanHandle, ScanError> {
    let (progress_tx, progress_rx) =
        crossbeam_channel::bounded::<ScanProgress>(PROGRESS_CHANNEL_CAPACITY);
    let cancel_flag = Arc::new(AtomicBool::new(false));
    let cancel_clone = cancel_flag.clone();

    let thread = thread::Builder::new()
        .name("typesleuth-scanner".into())
        .spawn(move || {
            run_scan(
                &root_path,
                &table,
                &options,
                &cancel_clone,
                Some(&progress_tx),
            )
        })
        .map_err(ScanError::Spawn)?;

    Ok(ScanHandle {
        progress_rx,
        cancel_flag,
        thread,
    })
}

/// Scan `root_path` on the calling thread.
///
/// The root is assumed to be an existing directory; validating it is the
/// caller's job. Unreadable files and directories are skipped and counted
/// in [`ScanResult::stats`].
pub fn scan(
    root_path: &Path,
    table: &SignatureTable,
    options: &ScanOptions,
) -> Result<ScanResult, ScanError> {
    let never = AtomicBool::new(false);
    run_scan(root_path, table, options, &never, None)
}

fn run_scan(
    root_path: &Path,
    table: &SignatureTable,
    options: &ScanOptions,
    cancel_flag: &AtomicBool,
    progress_tx: Option<&Sender<ScanProgress>>,
) -> Result<ScanResult, ScanError> {
    let start = Instant::now();
    let threads = options.threads.max(1);
    let send = |msg: ScanProgress| {
        if let Some(tx) = progress_tx {
            let _ = tx.send(msg);
        }
    };
    let cancelled = || -> Result<ScanResult, ScanError> {
        send(ScanProgress::Cancelled);
        info!("Scan of {} cancelled", root_path.display());
        Err(ScanError::Cancelled)
    };

    info!(
        "Starting scan of {} with {threads} threads",
        root_path.display()
    );

    let mut result = ScanResult::new(root_path.to_path_buf());

    // Phase 1: walk.
    let mut candidates: Vec<PathBuf> = Vec::new();
    for item in CandidateWalk::new(root_path).threads(threads).iter() {
        if cancel_flag.load(Ordering::Relaxed) {
            return cancelled();
        }
        match item {
            Ok(path) => candidates.push(path),
            Err(err) => {
                result.stats.unreadable_dirs += 1;
                debug!("Skipping directory: {err}");
                send(ScanProgress::Error {
                    path: err.path.to_string_lossy().into_owned(),
                    message: err.message,
                });
            }
        }
    }
    result.stats.candidates = candidates.len() as u64;
    send(ScanProgress::Discovered {
        candidates: result.stats.candidates,
    });
    debug!(
        "Walk complete: {} candidates in {:?}",
        candidates.len(),
        start.elapsed()
    );

    // Phase 2: probe. `collect` on an indexed parallel iterator keeps the
    // input order regardless of which worker finishes first.
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .thread_name(|i| format!("typesleuth-probe-{i}"))
        .build()?;
    let probes: Vec<Option<Probe<'_>>> = pool.install(|| {
        candidates
            .par_iter()
            .map(|path| {
                if cancel_flag.load(Ordering::Relaxed) {
                    return None;
                }
                Some(probe::probe_file(path, table, options.inspect_containers))
            })
            .collect()
    });
    if cancel_flag.load(Ordering::Relaxed) {
        return cancelled();
    }

    // Phase 3: aggregate in candidate order.
    for (path, outcome) in candidates.into_iter().zip(probes) {
        match outcome {
            Some(Probe::Classified { label, container }) => {
                result.stats.classified += 1;
                result.push(label, ScanEntry { path, container });
            }
            Some(Probe::Unclassified) => result.stats.unclassified += 1,
            Some(Probe::Skipped(err)) => {
                result.stats.skipped_files += 1;
                debug!("Skipping {}: {err}", path.display());
                send(ScanProgress::Error {
                    path: path.to_string_lossy().into_owned(),
                    message: err.to_string(),
                });
            }
            // Only produced after cancellation, which returned above.
            None => {}
        }
    }

    let duration = start.elapsed();
    result.stats.duration = duration;
    info!(
        "Scan complete: {} classified, {} unclassified, {} skipped, {} unreadable dirs in {duration:?}",
        result.stats.classified,
        result.stats.unclassified,
        result.stats.skipped_files,
        result.stats.unreadable_dirs
    );

    send(ScanProgress::Complete {
        duration,
        stats: result.stats.clone(),
    });
    Ok(result)
}
