/// Plain-text report.
///
/// ```text
///
/// PNG: 2 files
/// =========================
///   - photos/a.png
///   - photos/b.png
/// ```
///
/// Office-extension files whose archive was inspected get the container
/// kind appended in parentheses, optionally in green.
use crate::model::{ScanEntry, ScanResult};
use crate::signature::{format_magic, SignatureTable};
use std::io::{self, Write};

/// Width of the `=` rule under each section header.
pub const SECTION_RULE_WIDTH: usize = 25;

const GREEN: &str = "\u{1b}[32m";
const RESET: &str = "\u{1b}[0m";

/// Write one section: a blank separator line, the title, a rule, then
/// whatever `body` writes.
pub fn write_section<W, F>(out: &mut W, title: &str, body: F) -> io::Result<()>
where
    W: Write,
    F: FnOnce(&mut W) -> io::Result<()>,
{
    writeln!(out)?;
    writeln!(out, "{title}")?;
    writeln!(out, "{}", "=".repeat(SECTION_RULE_WIDTH))?;
    body(out)
}

/// Write every bucket as a section. An empty result writes nothing.
pub fn write_text<W: Write>(out: &mut W, result: &ScanResult, color: bool) -> io::Result<()> {
    for bucket in result.buckets() {
        let title = format!("{}: {} files", bucket.label, bucket.len());
        write_section(out, &title, |out| {
            for entry in &bucket.entries {
                write_entry(out, entry, color)?;
            }
            Ok(())
        })?;
    }
    Ok(())
}

fn write_entry<W: Write>(out: &mut W, entry: &ScanEntry, color: bool) -> io::Result<()> {
    let path = entry.path.display();
    match entry.container {
        Some(kind) if color => writeln!(out, "  - {path} ({GREEN}{kind}{RESET})"),
        Some(kind) => writeln!(out, "  - {path} ({kind})"),
        None => writeln!(out, "  - {path}"),
    }
}

/// Two columns: label padded to the longest label, then spaced hex magic.
pub(crate) fn write_signature_list<W: Write>(out: &mut W, table: &SignatureTable) -> io::Result<()> {
    let width = table.iter().map(|s| s.label.len()).max().unwrap_or(0);
    for sig in table {
        writeln!(out, "{:<width$}  {}", sig.label.as_str(), format_magic(&sig.magic))?;
    }
    Ok(())
}
