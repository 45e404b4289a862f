// 📋 Table - In-memory tabular data shared by every pipeline stage
// Values stay as strings from load to write; stages rewrite them in place.

use prettytable::{format, Cell, Row, Table as TextTable};
use std::collections::BTreeSet;

/// Null markers treated as missing, compared case-insensitively after trimming
pub const NULL_MARKERS: &[&str] = &["na", "n/a", "nan", "null", "none"];

/// True when a raw value carries no data
pub fn is_missing(value: &str) -> bool {
    let trimmed = value.trim();
    trimmed.is_empty()
        || NULL_MARKERS
            .iter()
            .any(|marker| trimmed.eq_ignore_ascii_case(marker))
}

// ============================================================================
// RECORD
// ============================================================================

/// One row, positionally aligned with the table headers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    values: Vec<String>,

    /// Column indices whose value is a policy fill, not source data
    filled: BTreeSet<usize>,
}

impl Record {
    pub fn new(values: Vec<String>) -> Self {
        Record {
            values,
            filled: BTreeSet::new(),
        }
    }

    /// Replace a value with a policy sentinel and remember that it was filled
    pub fn fill(&mut self, index: usize, sentinel: String) {
        if index < self.values.len() {
            self.values[index] = sentinel;
            self.filled.insert(index);
        }
    }

    pub fn is_filled(&self, index: usize) -> bool {
        self.filled.contains(&index)
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.values.get(index).map(String::as_str)
    }

    pub fn set(&mut self, index: usize, value: String) {
        if let Some(slot) = self.values.get_mut(index) {
            *slot = value;
        }
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }
}

impl<S: Into<String>> FromIterator<S> for Record {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Record::new(iter.into_iter().map(Into::into).collect())
    }
}

// ============================================================================
// TABLE
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Record>,
}

impl Table {
    pub fn new(headers: Vec<String>) -> Self {
        Table {
            headers,
            rows: Vec::new(),
        }
    }

    /// Build a table from string literals (handy in tests)
    pub fn from_rows(headers: &[&str], rows: &[&[&str]]) -> Self {
        let mut table = Table::new(headers.iter().map(|h| h.to_string()).collect());
        for row in rows {
            table.push_row(row.iter().copied().collect());
        }
        table
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Record] {
        &self.rows
    }

    pub fn rows_mut(&mut self) -> &mut [Record] {
        &mut self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Rename the header at `index`. Returns the previous name.
    pub fn rename_column(&mut self, index: usize, name: String) -> Option<String> {
        self.headers
            .get_mut(index)
            .map(|slot| std::mem::replace(slot, name))
    }

    /// Append a row, padding or truncating it to the header width
    pub fn push_row(&mut self, mut record: Record) {
        record.values.resize(self.headers.len(), String::new());
        self.rows.push(record);
    }

    /// Keep only rows for which `keep` returns true, preserving order.
    /// Returns how many rows were removed.
    pub fn retain_rows<F>(&mut self, mut keep: F) -> usize
    where
        F: FnMut(&Record) -> bool,
    {
        let before = self.rows.len();
        self.rows.retain(|row| keep(row));
        before - self.rows.len()
    }

    /// Column values by name, in row order
    pub fn column(&self, name: &str) -> Option<Vec<&str>> {
        let index = self.column_index(name)?;
        Some(self.rows.iter().map(|r| r.get(index).unwrap_or("")).collect())
    }

    /// Text rendering of the header and first `n` rows
    pub fn preview(&self, n: usize) -> String {
        let mut grid = TextTable::new();
        grid.set_format(*format::consts::FORMAT_CLEAN);
        grid.set_titles(Row::new(self.headers.iter().map(|h| Cell::new(h)).collect()));

        for row in self.rows.iter().take(n) {
            grid.add_row(Row::new(row.values().iter().map(|v| Cell::new(v)).collect()));
        }

        let mut text = grid.to_string();
        if self.rows.len() > n {
            text.push_str(&format!("... {} more rows\n", self.rows.len() - n));
        }
        text
    }
}

// ============================================================================
// TESTS
// ============================================================================
