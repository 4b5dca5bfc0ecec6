/// Data model for scan results.
///
/// Re-exports the insertion-ordered result buckets and scan statistics.
pub mod scan_result;

pub use scan_result::{Bucket, ScanEntry, ScanResult, ScanStats};
