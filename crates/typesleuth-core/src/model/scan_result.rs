/// Scan results: classified paths grouped by label.
///
/// Buckets keep the order in which their label was first seen, and each
/// bucket keeps its files in discovery order. Both orders are observable in
/// every report format, so nothing here ever sorts.
use crate::container::ContainerKind;
use chrono::{DateTime, Local};
use compact_str::CompactString;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// A single classified file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanEntry {
    pub path: PathBuf,
    /// Office/zip sub-type, only set for `.docx`/`.xlsx`/`.pptx` files whose
    /// archive could be inspected.
    pub container: Option<ContainerKind>,
}

impl ScanEntry {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            container: None,
        }
    }
}

/// All files that classified under one label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bucket {
    pub label: CompactString,
    pub entries: Vec<ScanEntry>,
}

impl Bucket {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.entries.iter().map(|e| e.path.as_path())
    }
}

/// Counters collected while scanning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanStats {
    /// Leaf paths produced by the tree walk.
    pub candidates: u64,
    /// Candidates that matched a signature.
    pub classified: u64,
    /// Candidates that were read but matched nothing.
    pub unclassified: u64,
    /// Candidates that could not be read (missing, permission denied, not a
    /// regular file).
    pub skipped_files: u64,
    /// Directories whose listing failed; their subtrees are absent.
    pub unreadable_dirs: u64,
    pub duration: Duration,
}

/// Outcome of one scan.
#[derive(Debug, Clone)]
pub struct ScanResult {
    pub root: PathBuf,
    pub stats: ScanStats,
    pub scanned_at: DateTime<Local>,
    buckets: Vec<Bucket>,
    /// Label → position in `buckets`.
    index: HashMap<CompactString, usize>,
}

impl ScanResult {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            stats: ScanStats::default(),
            scanned_at: Local::now(),
            buckets: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Append `entry` to the bucket for `label`, creating the bucket at the
    /// end of the list on first use.
    pub fn push(&mut self, label: &str, entry: ScanEntry) {
        let pos = match self.index.get(label) {
            Some(&pos) => pos,
            None => {
                let pos = self.buckets.len();
                let label = CompactString::new(label);
                self.buckets.push(Bucket {
                    label: label.clone(),
                    entries: Vec::new(),
                });
                self.index.insert(label, pos);
                pos
            }
        };
        self.buckets[pos].entries.push(entry);
    }

    pub fn get(&self, label: &str) -> Option<&Bucket> {
        self.index.get(label).map(|&pos| &self.buckets[pos])
    }

    /// Buckets in first-seen order.
    pub fn buckets(&self) -> &[Bucket] {
        &self.buckets
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.buckets.iter().map(|b| b.label.as_str())
    }

    /// Number of buckets.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Number of classified files across all buckets.
    pub fn total_files(&self) -> usize {
        self.buckets.iter().map(Bucket::len).sum()
    }
}
