/// Office/zip sub-type annotation.
///
/// OOXML documents (`.docx`, `.xlsx`, `.pptx`) are zip archives, so the
/// magic-byte classifier alone cannot tell a real Office document from a
/// renamed zip file. For files with those extensions the archive directory
/// is opened and checked for the `[Content_Types].xml` manifest every OOXML
/// package carries.
///
/// This is a reporting annotation only: it never changes the bucket a file
/// is grouped under.
use std::fmt;
use std::fs::File;
use std::io::{self, BufReader, Read, Seek, SeekFrom};
use std::path::Path;
use tracing::debug;

/// Extensions that trigger archive inspection. Matched case-sensitively.
pub const OFFICE_EXTENSIONS: [&str; 3] = [".docx", ".xlsx", ".pptx"];

/// Manifest entry present in every OOXML package.
pub const CONTENT_TYPES_ENTRY: &str = "[Content_Types].xml";

/// Zip local file header.
pub const ZIP_LOCAL_HEADER: [u8; 4] = [0x50, 0x4B, 0x03, 0x04];

/// What an office-extension file turned out to contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerKind {
    /// A zip archive carrying `[Content_Types].xml`.
    OfficeDocument,
    /// Any other zip archive.
    Zip,
}

impl ContainerKind {
    /// Human-readable label for display.
    pub fn label(self) -> &'static str {
        match self {
            Self::OfficeDocument => "MS Office file",
            Self::Zip => "Zip file",
        }
    }
}

impl fmt::Display for ContainerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// `true` if the path ends in one of [`OFFICE_EXTENSIONS`].
pub fn has_office_extension(path: &Path) -> bool {
    let name = path.as_os_str().to_string_lossy();
    OFFICE_EXTENSIONS.iter().any(|ext| name.ends_with(ext))
}

/// Determine the container kind of an office-extension file.
///
/// `prefix` is the leading bytes already read by the scanner. Returns `None`
/// when the file does not start with a zip local header, or when the archive
/// directory cannot be read (corrupt, truncated, Zip64, or a signature false
/// positive).
pub fn inspect(path: &Path, prefix: &[u8]) -> Option<ContainerKind> {
    if !prefix.starts_with(&ZIP_LOCAL_HEADER) {
        return None;
    }

    let mut file = match File::open(path) {
        Ok(f) => f,
        Err(err) => {
            debug!("Cannot reopen {} for archive inspection: {err}", path.display());
            return None;
        }
    };

    match central_directory_contains(&mut file, CONTENT_TYPES_ENTRY.as_bytes()) {
        Ok(true) => Some(ContainerKind::OfficeDocument),
        Ok(false) => Some(ContainerKind::Zip),
        Err(err) => {
            debug!("{} is not a readable zip archive: {err}", path.display());
            None
        }
    }
}

// ── Zip central directory ────────────────────────────────────────────────────
//
// Only entry names are needed, so nothing is decompressed: locate the
// end-of-central-directory record in the file tail, then stream the
// fixed-size central directory headers and compare names byte for byte.

const SIG_EOCD: u32 = 0x0605_4b50;
const SIG_CDFH: u32 = 0x0201_4b50;

/// End-of-central-directory fixed length.
const EOCD_LEN: usize = 22;
/// The EOCD may be followed by a comment of up to 64 KiB.
const EOCD_SEARCH_MAX: u64 = EOCD_LEN as u64 + 0xFFFF;
/// Central directory file header fixed length.
const CDFH_LEN: usize = 46;

fn central_directory_contains(file: &mut File, wanted: &[u8]) -> io::Result<bool> {
    let file_len = file.metadata()?.len();
    if file_len < EOCD_LEN as u64 {
        return Err(malformed("too short for an end-of-central-directory record"));
    }

    let win_len = file_len.min(EOCD_SEARCH_MAX);
    file.seek(SeekFrom::Start(file_len - win_len))?;
    let mut win = vec![0u8; win_len as usize];
    file.read_exact(&mut win)?;

    let eocd_at = rfind_eocd(&win).ok_or_else(|| malformed("no end-of-central-directory record"))?;
    let eocd = &win[eocd_at..eocd_at + EOCD_LEN];
    let disk_no = le_u16(&eocd[4..6]);
    let cd_disk = le_u16(&eocd[6..8]);
    let entries = le_u16(&eocd[10..12]);
    let cd_size = le_u32(&eocd[12..16]);
    let cd_off = le_u32(&eocd[16..20]);

    if disk_no != 0 || cd_disk != 0 {
        return Err(malformed("multi-disk archives are not supported"));
    }
    if entries == 0xFFFF || cd_size == 0xFFFF_FFFF || cd_off == 0xFFFF_FFFF {
        return Err(malformed("Zip64 archives are not supported"));
    }
    let cd_end = u64::from(cd_off) + u64::from(cd_size);
    if cd_end > file_len {
        return Err(malformed("central directory lies outside the file"));
    }

    file.seek(SeekFrom::Start(u64::from(cd_off)))?;
    let mut cd = BufReader::new(file.take(u64::from(cd_size)));
    let mut hdr = [0u8; CDFH_LEN];
    let mut name = Vec::new();

    for _ in 0..entries {
        cd.read_exact(&mut hdr)?;
        if le_u32(&hdr[0..4]) != SIG_CDFH {
            return Err(malformed("bad central directory header signature"));
        }
        let name_len = usize::from(le_u16(&hdr[28..30]));
        let extra_len = u64::from(le_u16(&hdr[30..32]));
        let comment_len = u64::from(le_u16(&hdr[32..34]));

        name.resize(name_len, 0);
        cd.read_exact(&mut name)?;
        if name == wanted {
            return Ok(true);
        }

        let skip = extra_len + comment_len;
        if io::copy(&mut cd.by_ref().take(skip), &mut io::sink())? != skip {
            return Err(malformed("truncated central directory"));
        }
    }

    Ok(false)
}

/// Offset of the last complete EOCD record in `win`.
fn rfind_eocd(win: &[u8]) -> Option<usize> {
    let last = win.len().checked_sub(EOCD_LEN)?;
    (0..=last).rev().find(|&i| le_u32(&win[i..i + 4]) == SIG_EOCD)
}

fn malformed(msg: &str) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, msg.to_string())
}

fn le_u16(b: &[u8]) -> u16 {
    u16::from_le_bytes([b[0], b[1]])
}

fn le_u32(b: &[u8]) -> u32 {
    u32::from_le_bytes([b[0], b[1], b[2], b[3]])
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_zip(path: &Path, entries: &[&str]) {
        std::fs::write(path, stored_zip(entries)).unwrap();
    }

    /// Minimal stored (uncompressed) zip with one `<x/>` payload per entry.
    fn stored_zip(entries: &[&str]) -> Vec<u8> {
        let payload = b"<x/>";
        let mut out = Vec::new();
        let mut cd = Vec::new();

        for name in entries {
            let offset = out.len() as u32;
            let name_len = name.len() as u16;

            // Local file header: version 20, flags 0x0006, stored.
            out.extend_from_slice(&ZIP_LOCAL_HEADER);
            out.extend_from_slice(&[0x14, 0x00, 0x06, 0x00, 0x00, 0x00]);
            out.extend_from_slice(&[0; 8]); // time, date, crc32 (unchecked)
            out.extend_from_slice(&(payload.len() as u32).to_le_bytes());
            out.extend_from_slice(&(payload.len() as u32).to_le_bytes());
            out.extend_from_slice(&name_len.to_le_bytes());
            out.extend_from_slice(&0u16.to_le_bytes());
            out.extend_from_slice(name.as_bytes());
            out.extend_from_slice(payload);

            cd.extend_from_slice(&SIG_CDFH.to_le_bytes());
            cd.extend_from_slice(&[0x14, 0x00, 0x14, 0x00, 0x06, 0x00, 0x00, 0x00]);
            cd.extend_from_slice(&[0; 8]);
            cd.extend_from_slice(&(payload.len() as u32).to_le_bytes());
            cd.extend_from_slice(&(payload.len() as u32).to_le_bytes());
            cd.extend_from_slice(&name_len.to_le_bytes());
            cd.extend_from_slice(&[0; 12]); // extra, comment, disk, attributes
            cd.extend_from_slice(&offset.to_le_bytes());
            cd.extend_from_slice(name.as_bytes());
        }

        let cd_off = out.len() as u32;
        out.extend_from_slice(&cd);
        out.extend_from_slice(&SIG_EOCD.to_le_bytes());
        out.extend_from_slice(&[0; 4]);
        out.extend_from_slice(&(entries.len() as u16).to_le_bytes());
        out.extend_from_slice(&(entries.len() as u16).to_le_bytes());
        out.extend_from_slice(&(cd.len() as u32).to_le_bytes());
        out.extend_from_slice(&cd_off.to_le_bytes());
        out.extend_from_slice(&0u16.to_le_bytes());
        out
    }

    fn prefix_of(path: &Path) -> Vec<u8> {
        let mut bytes = std::fs::read(path).unwrap();
        bytes.truncate(20);
        bytes
    }

    #[test]
    fn office_extensions_are_case_sensitive() {
        assert!(has_office_extension(Path::new("/tmp/report.docx")));
        assert!(has_office_extension(Path::new("/tmp/sheet.xlsx")));
        assert!(has_office_extension(Path::new("/tmp/deck.pptx")));
        assert!(!has_office_extension(Path::new("/tmp/REPORT.DOCX")));
        assert!(!has_office_extension(Path::new("/tmp/report.doc")));
        assert!(!has_office_extension(Path::new("/tmp/archive.zip")));
    }

    #[test]
    fn zip_with_manifest_is_office() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("report.docx");
        write_zip(&path, &["[Content_Types].xml", "word/document.xml"]);

        let kind = inspect(&path, &prefix_of(&path));
        assert_eq!(kind, Some(ContainerKind::OfficeDocument));
        assert_eq!(kind.unwrap().to_string(), "MS Office file");
    }

    #[test]
    fn manifest_found_after_other_entries() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("deck.pptx");
        write_zip(&path, &["ppt/slides/slide1.xml", "docProps/app.xml", "[Content_Types].xml"]);

        assert_eq!(
            inspect(&path, &prefix_of(&path)),
            Some(ContainerKind::OfficeDocument)
        );
    }

    #[test]
    fn zip_without_manifest_is_plain_zip() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("renamed.xlsx");
        write_zip(&path, &["data.csv"]);

        assert_eq!(inspect(&path, &prefix_of(&path)), Some(ContainerKind::Zip));
    }

    #[test]
    fn non_zip_bytes_are_not_inspected() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("fake.docx");
        std::fs::write(&path, b"just some text, not an archive").unwrap();

        assert_eq!(inspect(&path, &prefix_of(&path)), None);
    }

    /// A zip local header followed by garbage must not panic or propagate.
    #[test]
    fn corrupt_archive_yields_none() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("broken.pptx");
        let mut bytes = ZIP_LOCAL_HEADER.to_vec();
        bytes.extend_from_slice(&[0xAB; 64]);
        std::fs::write(&path, &bytes).unwrap();

        assert_eq!(inspect(&path, &prefix_of(&path)), None);
    }
}
