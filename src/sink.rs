use std::fs::{File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use chrono::Local;
use tracing::debug;

use crate::error::ExtractError;
use crate::parser::Record;

const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Write `records` to `<dir>/<base_name>_<timestamp>.csv` and return the path.
///
/// The header row is always written, followed by one row per record in order.
pub fn write_records_to_csv(
    records: &[Record],
    dir: &Path,
    base_name: &str,
) -> Result<PathBuf, ExtractError> {
    let stamp = Local::now().format(TIMESTAMP_FORMAT).to_string();
    let (path, file) = create_unique(dir, base_name, &stamp)?;

    let mut writer = csv::WriterBuilder::new().has_headers(false).from_writer(file);
    writer.write_record(Record::HEADERS)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;

    debug!(path = %path.display(), rows = records.len(), "wrote csv");
    Ok(path)
}

/// Claim a fresh file name. Runs landing in the same second get `_1`, `_2`, ...
fn create_unique(dir: &Path, base_name: &str, stamp: &str) -> Result<(PathBuf, File), ExtractError> {
    let mut attempt = 0u32;
    loop {
        let name = if attempt == 0 {
            format!("{base_name}_{stamp}.csv")
        } else {
            format!("{base_name}_{stamp}_{attempt}.csv")
        };
        let path = dir.join(name);
        match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(file) => return Ok((path, file)),
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => attempt += 1,
            Err(e) => return Err(e.into()),
        }
    }
}
