// 🔍 Deduplication Engine - Drop repeated rows, keep the first occurrence
// Two strategies: full-row equality or equality on a key of columns

use crate::table::{Record, Table};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::HashSet;
use tracing::{debug, info};

/// Separates values inside a fingerprint so ("ab","c") != ("a","bc")
const FIELD_SEPARATOR: &[u8] = b"\x1f";

// ============================================================================
// DEDUP KEY
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DedupKey {
    /// Every column must match
    FullRow,

    /// Only the named columns must match; absent columns compare as empty
    Columns(Vec<String>),
}

// ============================================================================
// DEDUPLICATION ENGINE
// ============================================================================

pub struct DeduplicationEngine {
    pub key: DedupKey,
}

impl DeduplicationEngine {
    /// Engine comparing whole rows
    pub fn new() -> Self {
        DeduplicationEngine {
            key: DedupKey::FullRow,
        }
    }

    /// Engine comparing only the given columns
    pub fn on_columns<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        DeduplicationEngine {
            key: DedupKey::Columns(columns.into_iter().map(Into::into).collect()),
        }
    }

    /// SHA-256 over the key values of a row
    pub fn fingerprint(record: &Record, indices: &[Option<usize>]) -> String {
        let mut hasher = Sha256::new();
        for index in indices {
            let value = index.and_then(|i| record.get(i)).unwrap_or("");
            hasher.update(value.as_bytes());
            hasher.update(FIELD_SEPARATOR);
        }
        format!("{:x}", hasher.finalize())
    }

    fn key_indices(&self, table: &Table) -> Vec<Option<usize>> {
        match &self.key {
            DedupKey::FullRow => (0..table.headers().len()).map(Some).collect(),
            DedupKey::Columns(columns) => columns
                .iter()
                .map(|column| table.column_index(column))
                .collect(),
        }
    }

    /// Remove later duplicates in place. Returns how many rows were removed.
    pub fn dedupe(&self, table: &mut Table) -> usize {
        let indices = self.key_indices(table);
        let mut seen = HashSet::new();

        let removed = table.retain_rows(|row| {
            let first = seen.insert(Self::fingerprint(row, &indices));
            if !first {
                debug!(row = ?row.values(), "dropping duplicate row");
            }
            first
        });

        info!(key = ?self.key, removed, "deduplicated rows");
        removed
    }
}

impl Default for DeduplicationEngine {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================
