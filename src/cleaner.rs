// 🧹 Value Cleaner - Text normalization + per-column missing-value policy
// Rules as data: one ColumnRule per canonical column, applied only when present

use crate::schema::{CATEGORY, PRICE, PRODUCT_NAME, QTY, SALES};
use crate::table::{is_missing, Table};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, info};

// ============================================================================
// POLICIES
// ============================================================================

/// What happens to a row whose value is missing or invalid
#[derive(Debug, Clone, PartialEq)]
pub enum MissingPolicy {
    /// Remove the whole row
    DropRow,

    /// Replace the value with a sentinel
    Fill(String),
}

/// How a column's values are normalized
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// Free text: trim, collapse whitespace, lowercase
    Text,

    /// Text plus quote stripping and family merging
    Category,

    /// Finite number strictly greater than zero
    PositiveNumber,

    /// Finite number, zero allowed
    NonNegativeNumber,
}

#[derive(Debug, Clone)]
pub struct ColumnRule {
    pub column: String,
    pub kind: ColumnKind,
    pub on_missing: MissingPolicy,
}

impl ColumnRule {
    fn new(column: &str, kind: ColumnKind, on_missing: MissingPolicy) -> Self {
        ColumnRule {
            column: column.to_string(),
            kind,
            on_missing,
        }
    }

    /// Normalized value, or None when missing/invalid
    pub fn clean_value(&self, raw: &str) -> Option<String> {
        if is_missing(raw) {
            return None;
        }

        match self.kind {
            ColumnKind::Text => Some(normalize_text(raw)),
            ColumnKind::Category => {
                let text = normalize_text(raw.trim().trim_matches('"'));
                if is_missing(&text) {
                    None
                } else {
                    Some(merge_category(&text))
                }
            }
            ColumnKind::PositiveNumber => parse_number(raw)
                .filter(|(value, _)| *value > 0.0)
                .map(|(_, text)| text),
            ColumnKind::NonNegativeNumber => parse_number(raw)
                .filter(|(value, _)| *value >= 0.0)
                .map(|(_, text)| text),
        }
    }
}

/// Counts of policy decisions for one column
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnStats {
    pub filled: usize,
    pub dropped: usize,
}

// ============================================================================
// NORMALIZATION HELPERS
// ============================================================================

/// Category families: a value containing the key collapses to the family name
const CATEGORY_FAMILIES: &[(&str, &str)] = &[
    ("office", "office"),
    ("electronic", "electronics"),
    ("kitchen", "kitchen"),
    ("fitness", "fitness"),
];

/// Trim, collapse whitespace runs to one space, lowercase
pub fn normalize_text(raw: &str) -> String {
    raw.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// "office furniture" → "office", unknown categories unchanged
pub fn merge_category(normalized: &str) -> String {
    CATEGORY_FAMILIES
        .iter()
        .find(|(key, _)| normalized.contains(key))
        .map(|(_, family)| family.to_string())
        .unwrap_or_else(|| normalized.to_string())
}

/// Numeric value plus its canonical text. Integer input keeps every digit;
/// anything else goes through f64, so fractional values beyond 2^53 round.
fn parse_number(raw: &str) -> Option<(f64, String)> {
    let text = raw.trim();
    if let Ok(int) = text.parse::<i128>() {
        return Some((int as f64, int.to_string()));
    }

    let value: f64 = text.parse().ok()?;
    if value.is_finite() {
        Some((value, format_number(value)))
    } else {
        None
    }
}

/// Integral values without a fraction ("10"), others in shortest form ("19.99")
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

// ============================================================================
// VALUE CLEANER
// ============================================================================

pub struct ValueCleaner {
    rules: Vec<ColumnRule>,
}

impl ValueCleaner {
    /// Cleaner with the fixed sales rules
    pub fn new() -> Self {
        ValueCleaner {
            rules: vec![
                ColumnRule::new(
                    PRODUCT_NAME,
                    ColumnKind::Text,
                    MissingPolicy::Fill("unknown".to_string()),
                ),
                ColumnRule::new(
                    CATEGORY,
                    ColumnKind::Category,
                    MissingPolicy::Fill("uncategorized".to_string()),
                ),
                ColumnRule::new(PRICE, ColumnKind::PositiveNumber, MissingPolicy::DropRow),
                ColumnRule::new(QTY, ColumnKind::PositiveNumber, MissingPolicy::DropRow),
                ColumnRule::new(SALES, ColumnKind::NonNegativeNumber, MissingPolicy::DropRow),
            ],
        }
    }

    fn active_rules<'a>(&'a self, table: &Table) -> Vec<(&'a ColumnRule, usize)> {
        self.rules
            .iter()
            .filter_map(|rule| match table.column_index(&rule.column) {
                Some(index) => Some((rule, index)),
                None => {
                    debug!(column = %rule.column, "column absent, rule skipped");
                    None
                }
            })
            .collect()
    }

    /// Filled values per column among the rows still in the table
    pub fn fill_counts(&self, table: &Table) -> BTreeMap<String, usize> {
        self.active_rules(table)
            .into_iter()
            .map(|(rule, index)| {
                let filled = table.rows().iter().filter(|r| r.is_filled(index)).count();
                (rule.column.clone(), filled)
            })
            .collect()
    }

    /// Clean every present column in place. A row is judged on all its
    /// columns first: any DropRow failure removes it before anything is
    /// filled. Drops are charged to the first failing column.
    pub fn clean(&self, table: &mut Table) -> BTreeMap<String, ColumnStats> {
        let active = self.active_rules(table);
        let mut stats: BTreeMap<String, ColumnStats> = active
            .iter()
            .map(|(rule, _)| (rule.column.clone(), ColumnStats::default()))
            .collect();

        let mut keep = Vec::with_capacity(table.len());

        for row in table.rows_mut() {
            let outcomes: Vec<Option<String>> = active
                .iter()
                .map(|(rule, index)| rule.clean_value(row.get(*index).unwrap_or("")))
                .collect();

            let failed = active
                .iter()
                .zip(&outcomes)
                .find(|((rule, _), outcome)| {
                    outcome.is_none() && rule.on_missing == MissingPolicy::DropRow
                });

            if let Some(((rule, index), _)) = failed {
                debug!(column = %rule.column, value = row.get(*index).unwrap_or(""), "dropping row");
                if let Some(column_stats) = stats.get_mut(&rule.column) {
                    column_stats.dropped += 1;
                }
                keep.push(false);
                continue;
            }

            for ((rule, index), outcome) in active.iter().zip(outcomes) {
                match (outcome, &rule.on_missing) {
                    (Some(value), _) => row.set(*index, value),
                    (None, MissingPolicy::Fill(sentinel)) => row.fill(*index, sentinel.clone()),
                    (None, MissingPolicy::DropRow) => {}
                }
            }
            keep.push(true);
        }

        let mut decisions = keep.into_iter();
        table.retain_rows(|_| decisions.next().unwrap_or(true));

        for (column, filled) in self.fill_counts(table) {
            if let Some(column_stats) = stats.get_mut(&column) {
                column_stats.filled = filled;
            }
        }

        for (column, column_stats) in &stats {
            info!(
                column = %column,
                filled = column_stats.filled,
                dropped = column_stats.dropped,
                "cleaned column"
            );
        }

        stats
    }
}

impl Default for ValueCleaner {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================
