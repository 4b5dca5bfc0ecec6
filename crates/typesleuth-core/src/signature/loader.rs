/// JSON signature files: replace the built-in table at startup.
///
/// ```json
/// {
///   "signatures": [
///     { "label": "PNG", "magic": "89 50 4E 47" },
///     { "label": "PDF", "magic": "25504446" }
///   ]
/// }
/// ```
///
/// Magic bytes are hex, case-insensitive, with any whitespace ignored.
use super::{Signature, SignatureTable};
use crate::error::SignatureError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// On-disk representation of a signature table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignatureFile {
    pub signatures: Vec<SignatureRecord>,
}

/// One entry of a [`SignatureFile`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignatureRecord {
    pub label: String,
    pub magic: String,
}

impl SignatureTable {
    /// Load and validate a table from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self, SignatureError> {
        let text = std::fs::read_to_string(path).map_err(|source| SignatureError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let table = Self::from_json_str(&text)?;
        info!(
            "Loaded {} signatures from {}",
            table.len(),
            path.display()
        );
        Ok(table)
    }

    /// Parse and validate a table from JSON text.
    pub fn from_json_str(text: &str) -> Result<Self, SignatureError> {
        let file: SignatureFile = serde_json::from_str(text)?;
        let signatures = file
            .signatures
            .into_iter()
            .map(|record| {
                let magic = decode_magic(&record.magic).map_err(|source| {
                    SignatureError::InvalidHex {
                        label: record.label.clone(),
                        source,
                    }
                })?;
                Ok(Signature::new(record.label, magic))
            })
            .collect::<Result<Vec<_>, SignatureError>>()?;
        Self::from_signatures(signatures)
    }

    /// Convert back into the on-disk representation, preserving order.
    pub fn to_records(&self) -> SignatureFile {
        SignatureFile {
            signatures: self
                .iter()
                .map(|sig| SignatureRecord {
                    label: sig.label.to_string(),
                    magic: format_magic(&sig.magic),
                })
                .collect(),
        }
    }
}

fn decode_magic(text: &str) -> Result<Vec<u8>, hex::FromHexError> {
    let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    hex::decode(compact)
}

/// Render magic bytes as space-separated upper-case hex pairs.
pub fn format_magic(magic: &[u8]) -> String {
    let mut out = String::with_capacity(magic.len() * 3);
    for (i, byte) in magic.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(&hex::encode_upper([*byte]));
    }
    out
}
