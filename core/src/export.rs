//! Finalization and file output.
//!
//! RULE: Only export.rs writes dataset files.

use crate::{
    complaint::{ComplaintRecord, COLUMNS, METRIC_COLUMNS},
    error::SynthResult,
};
use std::{
    borrow::Cow,
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

pub const DELIMITER: char = ',';

/// Sort by opened timestamp ascending. The sort is stable, so records
/// opened in the same minute keep generation order, and the resulting
/// position is the row number.
pub fn finalize(records: &mut [ComplaintRecord]) {
    records.sort_by_key(|r| r.opened);
}

/// Write header + one row per record. Returns the number of data rows.
pub fn write_records<W: Write>(
    out: W,
    records: &[ComplaintRecord],
    with_metrics: bool,
) -> SynthResult<usize> {
    let mut out = BufWriter::new(out);

    let mut header: Vec<&str> = COLUMNS.to_vec();
    if with_metrics {
        header.extend_from_slice(&METRIC_COLUMNS);
    }
    write_row(&mut out, header.iter().copied())?;

    for record in records {
        let fields = record.fields(with_metrics);
        write_row(&mut out, fields.iter().map(String::as_str))?;
    }
    out.flush()?;
    Ok(records.len())
}

/// Sort `records`, then write them to `path`. Returns the row count.
pub fn finalize_and_write(
    records: &mut [ComplaintRecord],
    path: impl AsRef<Path>,
    with_metrics: bool,
) -> SynthResult<usize> {
    finalize(records);
    write_file(records, path, with_metrics)
}

/// Write already-finalized records to `path`. Returns the row count.
pub fn write_file(
    records: &[ComplaintRecord],
    path: impl AsRef<Path>,
    with_metrics: bool,
) -> SynthResult<usize> {
    let path = path.as_ref();
    let file = File::create(path)?;
    let rows = write_records(file, records, with_metrics)?;
    log::info!("wrote {rows} rows to {}", path.display());
    Ok(rows)
}

fn write_row<'a, W: Write>(
    out: &mut W,
    fields: impl Iterator<Item = &'a str>,
) -> std::io::Result<()> {
    for (i, field) in fields.enumerate() {
        if i > 0 {
            write!(out, "{DELIMITER}")?;
        }
        out.write_all(quote(field).as_bytes())?;
    }
    out.write_all(b"\n")
}

/// Quote a field if it contains the delimiter, a quote or a line break.
fn quote(field: &str) -> Cow<'_, str> {
    if field.contains([DELIMITER, '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}
