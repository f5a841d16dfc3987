//! Citation log reader.
//!
//! The log is comma separated with a header line. Fields are split on every
//! comma: quotes carry no special meaning, so a quoted location containing a
//! comma spills into the next column just as it does in the upstream export.
//! Bytes that are not valid UTF-8 are replaced with U+FFFD rather than
//! failing the row.

use anyhow::{Context, Result};
use csv::ReaderBuilder;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

use crate::parser::RawRecord;

/// Opens `path` and reads every data row from it.
#[tracing::instrument(skip_all, fields(path = %path.display()))]
pub fn load_records(path: &Path) -> Result<Vec<RawRecord>> {
    let file = File::open(path)
        .with_context(|| format!("failed to open citation log '{}'", path.display()))?;

    read_records(file).with_context(|| format!("failed to read citation log '{}'", path.display()))
}

/// Reads all data rows, discarding the header line and blank lines.
pub fn read_records<R: Read>(reader: R) -> Result<Vec<RawRecord>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .quoting(false)
        .from_reader(reader);

    let mut records = Vec::new();

    for result in rdr.byte_records() {
        let row = result?;
        let line = row.position().map_or(0, |p| p.line());
        let fields: Vec<String> = row
            .iter()
            .map(|field| String::from_utf8_lossy(field).into_owned())
            .collect();

        if fields.len() == 1 && fields[0].trim().is_empty() {
            debug!(line, "Skipping blank line");
            continue;
        }

        records.push(RawRecord::new(line, fields));
    }

    debug!(rows = records.len(), "Citation rows read");
    Ok(records)
}
