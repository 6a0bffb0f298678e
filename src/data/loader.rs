use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver};
use std::thread;

use anyhow::{Context, Result};
use csv::{ByteRecord, StringRecord};

use super::model::Dataset;

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load a HomeC-style CSV: one header row of column names, then one record
/// per sample. Every cell is kept as text; invalid UTF-8 is decoded lossily
/// so a stray byte only spoils its own cell.
pub fn load_csv(path: &Path) -> Result<Dataset> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("opening CSV {}", path.display()))?;

    let headers: Vec<String> = reader
        .byte_headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| String::from_utf8_lossy(h).trim().to_string())
        .collect();

    let mut rows = Vec::new();
    for (row_no, result) in reader.byte_records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;
        rows.push(lossy_record(&record));
    }

    Ok(Dataset::new(headers, rows))
}

fn lossy_record(record: &ByteRecord) -> StringRecord {
    record
        .iter()
        .map(String::from_utf8_lossy)
        .collect()
}

/// Load `path` on a worker thread. The receiver yields exactly one result.
pub fn spawn_load(path: PathBuf) -> Receiver<Result<Dataset>> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let result = load_csv(&path);
        if let Ok(ds) = &result {
            log::info!(
                "Loaded {} rows with {} columns from {}",
                ds.len(),
                ds.headers.len(),
                path.display()
            );
        }
        // The UI may have gone away; nothing to do then.
        let _ = tx.send(result);
    });
    rx
}
