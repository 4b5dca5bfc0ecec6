/// TypeSleuth Core: signature matching, tree scanning, and reporting.
///
/// This crate contains all business logic with zero terminal or CLI
/// dependencies, so it can back any frontend.
///
/// # Modules
///
/// - [`signature`]: Ordered magic-byte table and first-match classifier.
/// - [`scanner`]: Deterministic tree walk plus parallel prefix probing.
/// - [`container`]: Office/zip sub-type annotation for OOXML extensions.
/// - [`model`]: Insertion-ordered scan results.
/// - [`report`]: Text, JSON and CSV rendering of results and signature tables.
pub mod container;
pub mod error;
pub mod model;
pub mod report;
pub mod scanner;
pub mod signature;

pub use error::{ReportError, ScanError, SignatureError, WalkError};
pub use model::{Bucket, ScanEntry, ScanResult, ScanStats};
pub use signature::{Signature, SignatureTable};
