/// Report rendering: turns a [`ScanResult`] or a [`SignatureTable`] into
/// text, JSON or CSV on any `io::Write`.
///
/// Every format preserves bucket order and per-bucket file order exactly as
/// the scan produced them.
pub mod structured;
pub mod text;

pub use text::{write_section, write_text, SECTION_RULE_WIDTH};

use crate::error::ReportError;
use crate::model::ScanResult;
use crate::signature::SignatureTable;
use std::io::Write;

/// Output format selectable by frontends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    /// Human-readable sections, one per label.
    #[default]
    Text,
    Json,
    Csv,
}

/// Write `result` in `format`. `color` only affects [`ReportFormat::Text`].
pub fn write_report<W: Write>(
    out: &mut W,
    result: &ScanResult,
    format: ReportFormat,
    color: bool,
) -> Result<(), ReportError> {
    match format {
        ReportFormat::Text => text::write_text(out, result, color)?,
        ReportFormat::Json => structured::write_json(out, result)?,
        ReportFormat::Csv => structured::write_csv(out, result)?,
    }
    out.flush()?;
    Ok(())
}

/// Write the signature table in `format`.
///
/// The JSON form is a valid signature file and can be fed back through
/// `SignatureTable::load_json`.
pub fn write_signatures<W: Write>(
    out: &mut W,
    table: &SignatureTable,
    format: ReportFormat,
) -> Result<(), ReportError> {
    match format {
        ReportFormat::Text => text::write_signature_list(out, table)?,
        ReportFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &table.to_records())?;
            writeln!(out)?;
        }
        ReportFormat::Csv => structured::write_signature_csv(out, table)?,
    }
    out.flush()?;
    Ok(())
}
