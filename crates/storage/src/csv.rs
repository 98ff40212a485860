//! Parser for the `hand,color` reference table.
//!
//! The first line is a header. Malformed rows are logged and skipped; a table
//! with no valid rows at all is an error.

use std::collections::HashSet;

use range_core::model::{Color, HandColorEntry, HandNotation};
use thiserror::Error;

use crate::repository::StorageError;

/// Why a single row was rejected.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RowError {
    #[error("expected `hand,color`")]
    MissingColumn,

    #[error(transparent)]
    Invalid(#[from] range_core::Error),
}

/// Parse one data row. Columns past the second are ignored.
///
/// # Errors
///
/// Returns `RowError` if the row lacks a color column or either value is invalid.
pub fn parse_row(line: &str) -> Result<HandColorEntry, RowError> {
    let mut fields = line.split(',');
    let hand = fields.next().map(str::trim).unwrap_or_default();
    let color = fields.next().map(str::trim).ok_or(RowError::MissingColumn)?;

    HandNotation::parse(hand).map_err(range_core::Error::from)?;
    let color: Color = color.parse().map_err(range_core::Error::from)?;

    Ok(HandColorEntry::new(hand, color))
}

/// Parse a whole table.
///
/// Duplicate hands keep their first occurrence.
///
/// # Errors
///
/// Returns `StorageError::EmptyResponse` for blank input and
/// `StorageError::NoValidRows` when every data row was rejected.
pub fn parse_catalog(text: &str) -> Result<Vec<HandColorEntry>, StorageError> {
    let text = text.trim_start_matches('\u{feff}').trim();
    if text.is_empty() {
        return Err(StorageError::EmptyResponse);
    }

    let mut entries = Vec::new();
    let mut seen = HashSet::new();
    let mut skipped = 0_usize;

    // line 1 is the header
    for (idx, line) in text.lines().enumerate().skip(1) {
        let line_no = idx + 1;
        if line.trim().is_empty() {
            continue;
        }
        match parse_row(line) {
            Ok(entry) => {
                let key = HandNotation::parse(&entry.hand)
                    .map(|h| h.to_string())
                    .unwrap_or_else(|_| entry.hand.clone());
                if seen.insert(key) {
                    entries.push(entry);
                } else {
                    tracing::warn!(line = line_no, hand = %entry.hand, "duplicate hand in catalog, keeping first");
                    skipped += 1;
                }
            }
            Err(error) => {
                tracing::warn!(line = line_no, %error, "skipping malformed catalog row");
                skipped += 1;
            }
        }
    }

    if entries.is_empty() {
        return Err(StorageError::NoValidRows { skipped });
    }
    Ok(entries)
}
