/// Signature classifier: ordered magic-byte table with first-match lookup.
///
/// The table is built once at startup (built-in or loaded from a JSON file)
/// and never mutated afterwards. It is shared read-only by every probe worker.
mod builtin;
pub mod loader;

pub use loader::{format_magic, SignatureFile, SignatureRecord};

use crate::error::SignatureError;
use compact_str::CompactString;
use tracing::warn;

/// Number of leading bytes read from each file for classification.
///
/// Signatures longer than this can never match.
pub const PREFIX_LEN: usize = 20;

/// A single file-type label and the leading bytes that identify it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    pub label: CompactString,
    pub magic: Vec<u8>,
}

impl Signature {
    pub fn new(label: impl Into<CompactString>, magic: impl Into<Vec<u8>>) -> Self {
        Self {
            label: label.into(),
            magic: magic.into(),
        }
    }

    /// `true` if `bytes` starts with this signature's magic, byte for byte.
    #[inline]
    pub fn matches(&self, bytes: &[u8]) -> bool {
        bytes.starts_with(&self.magic)
    }
}

/// Ordered, immutable collection of signatures.
///
/// Labels are not required to be unique and several entries share a prefix;
/// declaration order decides which label wins.
#[derive(Debug, Clone)]
pub struct SignatureTable {
    signatures: Vec<Signature>,
}

impl SignatureTable {
    /// The built-in table, in its fixed declaration order.
    pub fn builtin() -> Self {
        let signatures = builtin::BUILTIN_SIGNATURES
            .iter()
            .map(|&(label, magic)| Signature::new(label, magic))
            .collect();
        Self { signatures }
    }

    /// Build a table from caller-supplied signatures, keeping their order.
    ///
    /// Rejects an empty table, empty labels and empty magic sequences (an
    /// empty magic would match every file and shadow everything after it).
    pub fn from_signatures(signatures: Vec<Signature>) -> Result<Self, SignatureError> {
        if signatures.is_empty() {
            return Err(SignatureError::EmptyTable);
        }
        for (index, sig) in signatures.iter().enumerate() {
            if sig.label.is_empty() {
                return Err(SignatureError::EmptyLabel { index });
            }
            if sig.magic.is_empty() {
                return Err(SignatureError::EmptyMagic {
                    label: sig.label.to_string(),
                });
            }
            if sig.magic.len() > PREFIX_LEN {
                warn!(
                    "Signature {:?} is {} bytes long and can never match a {PREFIX_LEN}-byte prefix",
                    sig.label,
                    sig.magic.len()
                );
            }
        }
        Ok(Self { signatures })
    }

    /// Return the label of the first signature that prefixes `bytes`.
    ///
    /// Buffers shorter than a signature simply fail to match it. An empty
    /// buffer never matches.
    pub fn classify(&self, bytes: &[u8]) -> Option<&str> {
        self.signatures
            .iter()
            .find(|sig| sig.matches(bytes))
            .map(|sig| sig.label.as_str())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Signature> {
        self.signatures.iter()
    }

    pub fn len(&self) -> usize {
        self.signatures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.signatures.is_empty()
    }
}

impl Default for SignatureTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl<'a> IntoIterator for &'a SignatureTable {
    type Item = &'a Signature;
    type IntoIter = std::slice::Iter<'a, Signature>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
