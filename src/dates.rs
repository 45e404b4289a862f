// 📅 Date Converter - Many input formats → one ISO-8601 calendar date
// Formats are tried in priority order; the first in-range parse wins.

use crate::schema::DATE;
use crate::table::{is_missing, Table};
use chrono::{Datelike, NaiveDate, NaiveDateTime};
use std::ops::RangeInclusive;
use tracing::{debug, info};

pub const CANONICAL_FORMAT: &str = "%Y-%m-%d";

/// Accepted input layouts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateFormat {
    /// Calendar date only
    Date(&'static str),

    /// Date and time; the time part is discarded
    DateTime(&'static str),
}

impl DateFormat {
    fn parse(&self, text: &str) -> Option<NaiveDate> {
        match self {
            DateFormat::Date(fmt) => NaiveDate::parse_from_str(text, fmt).ok(),
            DateFormat::DateTime(fmt) => NaiveDateTime::parse_from_str(text, fmt)
                .ok()
                .map(|dt| dt.date()),
        }
    }
}

const ACCEPTED_FORMATS: &[DateFormat] = &[
    DateFormat::Date("%Y-%m-%d"),
    DateFormat::DateTime("%Y-%m-%dT%H:%M:%S"),
    DateFormat::DateTime("%Y-%m-%d %H:%M:%S"),
    DateFormat::Date("%Y/%m/%d"),
    DateFormat::Date("%m/%d/%Y"),
    DateFormat::Date("%m/%d/%y"),
    DateFormat::Date("%m-%d-%Y"),
    DateFormat::Date("%d.%m.%Y"),
    DateFormat::Date("%B %d, %Y"),
    DateFormat::Date("%d %B %Y"),
];

pub struct DateConverter {
    column: String,
    formats: Vec<DateFormat>,
    valid_years: RangeInclusive<i32>,
}

impl DateConverter {
    /// Converter for the canonical `date` column
    pub fn new() -> Self {
        DateConverter {
            column: DATE.to_string(),
            formats: ACCEPTED_FORMATS.to_vec(),
            valid_years: 1900..=2100,
        }
    }

    /// Parse a raw value; None when missing, unparseable, or out of range
    pub fn parse(&self, raw: &str) -> Option<NaiveDate> {
        if is_missing(raw) {
            return None;
        }

        let text = raw.trim();
        self.formats
            .iter()
            .filter_map(|format| format.parse(text))
            .find(|date| self.valid_years.contains(&date.year()))
    }

    /// Rewrite the date column in canonical form, dropping rows that fail to
    /// parse. Returns the number of dropped rows.
    pub fn convert(&self, table: &mut Table) -> usize {
        let Some(index) = table.column_index(&self.column) else {
            debug!(column = %self.column, "no date column, conversion skipped");
            return 0;
        };

        let dropped = table.retain_rows(|row| {
            let raw = row.get(index).unwrap_or("");
            let parsed = self.parse(raw).is_some();
            if !parsed {
                debug!(value = raw, "dropping row with invalid date");
            }
            parsed
        });

        for row in table.rows_mut() {
            let raw = row.get(index).unwrap_or("").to_string();
            if let Some(date) = self.parse(&raw) {
                row.set(index, date.format(CANONICAL_FORMAT).to_string());
            }
        }

        info!(column = %self.column, dropped, "converted dates");
        dropped
    }
}

impl Default for DateConverter {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================
