//! CSV output
//!
//! The header is always written, so an empty run still produces a valid
//! file. Output goes to a temporary file next to the target that is renamed
//! into place once complete.

use super::ReportRow;
use crate::error::Result;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Column names, in output order
pub const CSV_HEADER: [&str; 5] = ["namespace", "lb_name", "route", "waf_name", "waf_mode"];

/// Write the header and `rows` to `out`
pub fn write_csv<W: Write>(out: W, rows: &[ReportRow]) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(CSV_HEADER)?;
    for row in rows {
        writer.write_record(row.as_record())?;
    }
    writer.flush()?;
    Ok(())
}

/// Write the report to `path`, replacing any existing file
pub fn write_report(path: &Path, rows: &[ReportRow]) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir)?;
    write_csv(tmp.as_file_mut(), rows)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;

    log::debug!("Wrote {} row(s) to {}", rows.len(), path.display());
    Ok(())
}
