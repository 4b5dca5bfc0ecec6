/// Scan progress reporting: lightweight messages sent from the scan
/// thread to the frontend via a crossbeam channel.
use crate::model::ScanStats;
use std::time::Duration;

/// Progress updates sent from the scan thread.
///
/// The result itself is returned by `ScanHandle::join`; these messages carry
/// only counters and non-fatal errors.
#[derive(Debug)]
pub enum ScanProgress {
    /// The tree walk finished and probing is about to start.
    Discovered { candidates: u64 },
    /// A non-fatal error (unreadable file or directory listing).
    Error { path: String, message: String },
    /// Scanning completed successfully.
    Complete { duration: Duration, stats: ScanStats },
    /// Scan was cancelled.
    Cancelled,
}
