// 🔁 Cleaning Pipeline - load → headers → values → dates → dedupe → write
// Each stage mutates the same Table in place and runs exactly once.

use crate::cleaner::{ColumnStats, ValueCleaner};
use crate::dates::DateConverter;
use crate::deduplication::DeduplicationEngine;
use crate::error::Result;
use crate::loader::load_csv;
use crate::schema::{ColumnRename, SchemaNormalizer};
use crate::table::Table;
use crate::writer::write_csv;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::info;

// ============================================================================
// PIPELINE REPORT
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PipelineReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<PathBuf>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,

    pub rows_loaded: usize,
    pub renamed_columns: Vec<ColumnRename>,
    pub columns: BTreeMap<String, ColumnStats>,
    pub invalid_dates_dropped: usize,
    pub duplicates_removed: usize,
    pub rows_written: usize,
}

impl PipelineReport {
    /// Rows removed by any stage
    pub fn rows_dropped(&self) -> usize {
        self.rows_loaded - self.rows_written
    }

    pub fn summary(&self) -> String {
        let filled: usize = self.columns.values().map(|s| s.filled).sum();
        let dropped_values: usize = self.columns.values().map(|s| s.dropped).sum();

        format!(
            "Rows: {} in, {} out | Renamed: {} columns | Filled: {} | Dropped: {} invalid values, {} invalid dates, {} duplicates",
            self.rows_loaded,
            self.rows_written,
            self.renamed_columns.len(),
            filled,
            dropped_values,
            self.invalid_dates_dropped,
            self.duplicates_removed
        )
    }
}

// ============================================================================
// PIPELINE
// ============================================================================

pub struct CleaningPipeline {
    normalizer: SchemaNormalizer,
    cleaner: ValueCleaner,
    dates: DateConverter,
    dedup: DeduplicationEngine,
}

impl CleaningPipeline {
    /// Pipeline with the fixed sales cleaning rules
    pub fn new() -> Self {
        CleaningPipeline {
            normalizer: SchemaNormalizer::new(),
            cleaner: ValueCleaner::new(),
            dates: DateConverter::new(),
            dedup: DeduplicationEngine::new(),
        }
    }

    /// Run the in-memory stages on a loaded table
    pub fn clean_table(&self, table: &mut Table) -> PipelineReport {
        let rows_loaded = table.len();

        let renamed_columns = self.normalizer.normalize(table);
        let mut columns = self.cleaner.clean(table);
        let invalid_dates_dropped = self.dates.convert(table);
        let duplicates_removed = self.dedup.dedupe(table);

        // Later stages may drop rows that were filled; count survivors only
        for (column, filled) in self.cleaner.fill_counts(table) {
            if let Some(stats) = columns.get_mut(&column) {
                stats.filled = filled;
            }
        }

        PipelineReport {
            input: None,
            output: None,
            rows_loaded,
            renamed_columns,
            columns,
            invalid_dates_dropped,
            duplicates_removed,
            rows_written: table.len(),
        }
    }

    /// Full run: read `input`, clean, write `output`. Returns the cleaned
    /// table alongside the report.
    pub fn run(&self, input: &Path, output: &Path) -> Result<(Table, PipelineReport)> {
        let mut table = load_csv(input)?;
        let mut report = self.clean_table(&mut table);
        write_csv(&table, output)?;

        report.input = Some(input.to_path_buf());
        report.output = Some(output.to_path_buf());

        info!(
            rows_loaded = report.rows_loaded,
            rows_written = report.rows_written,
            "cleaning complete"
        );
        Ok((table, report))
    }
}

impl Default for CleaningPipeline {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================
