// 📂 Loader - Raw CSV → Table

use crate::error::{CleanError, Result};
use crate::table::{Record, Table};
use csv::ReaderBuilder;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// Load a CSV file with a header row into a Table
pub fn load_csv(path: &Path) -> Result<Table> {
    let file = File::open(path).map_err(|e| CleanError::io(path, e))?;
    let table = load_from_reader(file, path)?;

    info!(
        path = %path.display(),
        rows = table.len(),
        columns = table.headers().len(),
        "loaded raw table"
    );
    Ok(table)
}

/// Load from any reader. `label` is only used in error messages.
pub fn load_from_reader<R: Read>(reader: R, label: &Path) -> Result<Table> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_reader(reader);

    let headers = reader
        .headers()
        .map_err(|e| CleanError::from_csv(label, e))?
        .clone();

    if headers.is_empty() {
        return Err(CleanError::format(label, "no header row"));
    }

    let mut table = Table::new(headers.iter().map(str::to_string).collect());

    for (line_num, result) in reader.records().enumerate() {
        let record = result.map_err(|e| CleanError::from_csv(label, e))?;
        debug!(line = line_num + 2, fields = record.len(), "read row");
        table.push_row(record.iter().collect::<Record>());
    }

    Ok(table)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn load_str(text: &str) -> Result<Table> {
        load_from_reader(text.as_bytes(), Path::new("test.csv"))
    }

    #[test]
    fn test_load_headers_and_rows() {
        let table = load_str("ProdName , CATEGORY ,price\nDesk,Office,100\n\" Pen Set \",office,5\n")
            .unwrap();

        assert_eq!(table.headers(), &["ProdName ", " CATEGORY ", "price"]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.rows()[1].get(0), Some(" Pen Set "));
    }

    #[test]
    fn test_header_only_is_empty_table() {
        let table = load_str("a,b\n").unwrap();
        assert!(table.is_empty());
        assert_eq!(table.headers().len(), 2);
    }

    #[test]
    fn test_ragged_row_is_format_error() {
        let err = load_str("a,b\n1,2\n3\n").unwrap_err();
        assert!(matches!(err, CleanError::Format { .. }));
    }

    #[test]
    fn test_empty_input_is_format_error() {
        let err = load_str("").unwrap_err();
        assert!(matches!(err, CleanError::Format { .. }));
    }

    #[test]
    fn test_invalid_utf8_is_format_error() {
        let bytes: &[u8] = b"a,b\n\xff\xfe,1\n";
        let err = load_from_reader(bytes, Path::new("bad.csv")).unwrap_err();
        assert!(matches!(err, CleanError::Format { .. }));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_csv(Path::new("/definitely/not/here.csv")).unwrap_err();
        assert!(matches!(err, CleanError::Io { .. }));
    }
}
