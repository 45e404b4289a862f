// 💾 Writer - Table → cleaned CSV on disk

use crate::error::{CleanError, Result};
use crate::table::Table;
use csv::WriterBuilder;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Write the table with its canonical headers, creating the parent directory
pub fn write_csv(table: &Table, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| CleanError::io(parent, e))?;
    }

    let file = File::create(path).map_err(|e| CleanError::io(path, e))?;
    write_to(table, file, path)?;

    info!(path = %path.display(), rows = table.len(), "wrote cleaned table");
    Ok(())
}

/// Serialize into any writer. `label` is only used in error messages.
pub fn write_to<W: Write>(table: &Table, writer: W, label: &Path) -> Result<()> {
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(writer);

    writer
        .write_record(table.headers())
        .map_err(|e| CleanError::from_csv(label, e))?;

    for row in table.rows() {
        writer
            .write_record(row.values())
            .map_err(|e| CleanError::from_csv(label, e))?;
    }

    writer.flush().map_err(|e| CleanError::io(label, e))
}

// ============================================================================
// TESTS
// ============================================================================
