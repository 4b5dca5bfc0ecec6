/// Candidate discovery: a lazy, restartable walk over the scan root.
///
/// Policy, applied to every entry below the root:
/// - a directory whose name does not start with `.` is descended into and
///   is not itself a candidate;
/// - everything else (regular files, hidden files, hidden directories,
///   symlinks of any kind, special files) is yielded as a leaf candidate.
///
/// Symlinks are never followed, so a symlinked directory is a leaf. Entries
/// are sorted by file name at every level, so two walks over an unchanged
/// tree yield the same sequence.
///
/// Built on `jwalk`: hidden directories are pruned in the `process_read_dir`
/// hook by clearing `read_children_path`, which stops jwalk from reading them
/// while still yielding the entry itself.
use crate::error::WalkError;
use std::path::{Path, PathBuf};

type Walker = jwalk::WalkDirGeneric<((), ())>;

/// Description of a walk. Call [`CandidateWalk::iter`] to run it; every call
/// starts a fresh traversal.
#[derive(Debug, Clone)]
pub struct CandidateWalk {
    root: PathBuf,
    threads: usize,
}

impl CandidateWalk {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            threads: 1,
        }
    }

    /// Number of threads jwalk may use to read directories ahead of the
    /// consumer. Output order does not depend on this.
    pub fn threads(mut self, threads: usize) -> Self {
        self.threads = threads.max(1);
        self
    }

    /// Start a new traversal.
    pub fn iter(&self) -> Candidates {
        let parallelism = if self.threads > 1 {
            jwalk::Parallelism::RayonNewPool(self.threads)
        } else {
            jwalk::Parallelism::Serial
        };

        let walker: Walker = jwalk::WalkDirGeneric::new(&self.root)
            .skip_hidden(false)
            .follow_links(false)
            .sort(true)
            .parallelism(parallelism)
            .process_read_dir(|_depth, _path, _state, children| {
                // jwalk also passes the root through here (depth 0); a root
                // named like `.config` must still be read.
                for child in children.iter_mut().flatten() {
                    if child.depth > 0
                        && child.file_type.is_dir()
                        && is_hidden(&child.file_name)
                    {
                        child.read_children_path = None;
                    }
                }
            });

        Candidates {
            root: self.root.clone(),
            inner: walker.into_iter(),
        }
    }
}

impl<'a> IntoIterator for &'a CandidateWalk {
    type Item = Result<PathBuf, WalkError>;
    type IntoIter = Candidates;

    fn into_iter(self) -> Candidates {
        self.iter()
    }
}

/// Iterator over candidate paths. Unreadable directories surface as
/// `Err(WalkError)` and the walk continues with their siblings.
pub struct Candidates {
    root: PathBuf,
    inner: jwalk::DirEntryIter<((), ())>,
}

impl Iterator for Candidates {
    type Item = Result<PathBuf, WalkError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let mut entry = match self.inner.next()? {
                Ok(e) => e,
                Err(err) => {
                    let path = err
                        .path()
                        .map(Path::to_path_buf)
                        .unwrap_or_else(|| self.root.clone());
                    return Some(Err(WalkError {
                        path,
                        message: err.to_string(),
                    }));
                }
            };

            // jwalk reports a failed listing on the directory's own entry.
            if let Some(err) = entry.read_children_error.take() {
                return Some(Err(WalkError {
                    path: entry.path(),
                    message: err.to_string(),
                }));
            }

            // The root is the starting point, never a candidate.
            if entry.depth == 0 {
                continue;
            }

            if entry.file_type.is_dir() && !is_hidden(&entry.file_name) {
                continue;
            }

            return Some(Ok(entry.path()));
        }
    }
}

/// Hidden entries are those whose name starts with a dot.
pub fn is_hidden(name: &std::ffi::OsStr) -> bool {
    name.as_encoded_bytes().first() == Some(&b'.')
}
