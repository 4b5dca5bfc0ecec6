/// Machine-readable reports: JSON and CSV.
///
/// Paths are rendered lossily as UTF-8 so that a single odd filename cannot
/// abort an otherwise complete report.
use crate::error::ReportError;
use crate::model::{ScanResult, ScanStats};
use crate::signature::{format_magic, SignatureTable};
use chrono::{DateTime, Local};
use serde::Serialize;
use std::borrow::Cow;
use std::io::Write;

#[derive(Serialize)]
struct JsonReport<'a> {
    root: Cow<'a, str>,
    scanned_at: DateTime<Local>,
    stats: JsonStats,
    buckets: Vec<JsonBucket<'a>>,
}

#[derive(Serialize)]
struct JsonStats {
    candidates: u64,
    classified: u64,
    unclassified: u64,
    skipped_files: u64,
    unreadable_dirs: u64,
    duration_ms: u128,
}

impl From<&ScanStats> for JsonStats {
    fn from(stats: &ScanStats) -> Self {
        Self {
            candidates: stats.candidates,
            classified: stats.classified,
            unclassified: stats.unclassified,
            skipped_files: stats.skipped_files,
            unreadable_dirs: stats.unreadable_dirs,
            duration_ms: stats.duration.as_millis(),
        }
    }
}

#[derive(Serialize)]
struct JsonBucket<'a> {
    label: &'a str,
    count: usize,
    files: Vec<FileRow<'a>>,
}

#[derive(Serialize)]
struct FileRow<'a> {
    path: Cow<'a, str>,
    container: Option<&'static str>,
}

#[derive(Serialize)]
struct CsvRow<'a> {
    label: &'a str,
    path: Cow<'a, str>,
    container: Option<&'static str>,
}

/// Pretty-printed JSON document with stats and ordered buckets.
pub fn write_json<W: Write>(out: &mut W, result: &ScanResult) -> Result<(), ReportError> {
    let report = JsonReport {
        root: result.root.to_string_lossy(),
        scanned_at: result.scanned_at,
        stats: JsonStats::from(&result.stats),
        buckets: result
            .buckets()
            .iter()
            .map(|bucket| JsonBucket {
                label: bucket.label.as_str(),
                count: bucket.len(),
                files: bucket
                    .entries
                    .iter()
                    .map(|entry| FileRow {
                        path: entry.path.to_string_lossy(),
                        container: entry.container.map(|k| k.label()),
                    })
                    .collect(),
            })
            .collect(),
    };
    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)?;
    Ok(())
}

/// `label,path,container` rows in bucket order. `container` is empty when
/// no annotation applies.
pub fn write_csv<W: Write>(out: &mut W, result: &ScanResult) -> Result<(), ReportError> {
    // Header written by hand so an empty result still gets one.
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(out);
    writer.write_record(["label", "path", "container"])?;
    for bucket in result.buckets() {
        for entry in &bucket.entries {
            writer.serialize(CsvRow {
                label: bucket.label.as_str(),
                path: entry.path.to_string_lossy(),
                container: entry.container.map(|k| k.label()),
            })?;
        }
    }
    writer.flush()?;
    Ok(())
}

#[derive(Serialize)]
struct SignatureRow<'a> {
    label: &'a str,
    magic: String,
}

/// `label,magic` rows in table order.
pub(crate) fn write_signature_csv<W: Write>(
    out: &mut W,
    table: &SignatureTable,
) -> Result<(), ReportError> {
    let mut writer = csv::Writer::from_writer(out);
    for sig in table {
        writer.serialize(SignatureRow {
            label: sig.label.as_str(),
            magic: format_magic(&sig.magic),
        })?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::container::ContainerKind;
    use crate::model::ScanEntry;
    use std::path::PathBuf;

    fn sample() -> ScanResult {
        let mut result = ScanResult::new(PathBuf::from("root"));
        result.push("ZIP", ScanEntry::new(PathBuf::from("root/a.zip")));
        result.push(
            "ZIP",
            ScanEntry {
                path: PathBuf::from("root/b.xlsx"),
                container: Some(ContainerKind::Zip),
            },
        );
        result.push("GIF", ScanEntry::new(PathBuf::from("root/c.gif")));
        result.stats.candidates = 4;
        result.stats.classified = 3;
        result.stats.unclassified = 1;
        result
    }

    #[test]
    fn json_keeps_bucket_order_and_annotations() {
        let mut buf = Vec::new();
        write_json(&mut buf, &sample()).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();

        assert_eq!(value["root"], "root");
        assert_eq!(value["stats"]["classified"], 3);
        let buckets = value["buckets"].as_array().unwrap();
        assert_eq!(buckets.len(), 2);
        assert_eq!(buckets[0]["label"], "ZIP");
        assert_eq!(buckets[0]["count"], 2);
        assert_eq!(buckets[0]["files"][0]["container"], serde_json::Value::Null);
        assert_eq!(buckets[0]["files"][1]["container"], "Zip file");
        assert_eq!(buckets[1]["label"], "GIF");
        assert_eq!(buckets[1]["files"][0]["path"], "root/c.gif");
    }

    #[test]
    fn csv_has_one_row_per_file() {
        let mut buf = Vec::new();
        write_csv(&mut buf, &sample()).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "label,path,container\n\
             ZIP,root/a.zip,\n\
             ZIP,root/b.xlsx,Zip file\n\
             GIF,root/c.gif,\n"
        );
    }

    #[test]
    fn csv_of_empty_result_is_header_only() {
        let mut buf = Vec::new();
        write_csv(&mut buf, &ScanResult::new(PathBuf::from("root"))).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "label,path,container\n");
    }

    #[test]
    fn signature_csv_lists_table_in_order() {
        let table = SignatureTable::builtin();
        let mut buf = Vec::new();
        write_signature_csv(&mut buf, &table).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("label,magic"));
        assert_eq!(lines.next(), Some("MS Word,D0 CF 11 E0 A1 B1 1A E1"));
        assert_eq!(text.lines().count(), table.len() + 1);
    }
}
