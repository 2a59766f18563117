//! # Row Codec
//!
//! Every entity lives in a sheet as a fixed-width row of string cells. This
//! module holds the conventions shared by all of them and the [`Record`] trait
//! each entity implements to map its row to a typed struct and back.
//!
//! ## Cell Conventions
//!
//! | Kind | Stored as | Decoding |
//! |------|-----------|----------|
//! | text | the string itself | missing cell → `""` |
//! | boolean | `"true"` / `"false"` | anything but `"true"` → `false` |
//! | timestamp | `YYYY-MM-DD HH:MM:SS` (UTC) | kept verbatim as a string |
//!
//! Timestamps are kept as strings on the records: whatever the sheet holds is
//! what the caller gets back, so rows written by hand in the spreadsheet still
//! round-trip untouched.
//!
//! ## Partial Updates
//!
//! Updates never re-encode a row from a struct. A [`RowPatch`] names only the
//! cells that change and is merged into the raw row read from the sheet, so
//! every other cell is written back exactly as it was read.

use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

/// One physical row, in column order.
pub type Row = Vec<String>;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Read a cell, treating missing cells as blank.
pub fn cell(row: &[String], index: usize) -> String {
    row.get(index).cloned().unwrap_or_default()
}

pub fn decode_bool(raw: &str) -> bool {
    raw == "true"
}

pub fn encode_bool(value: bool) -> String {
    if value { "true" } else { "false" }.to_string()
}

pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

pub fn now_timestamp() -> String {
    format_timestamp(Utc::now())
}

/// The trimmed identifier cell of a row. Blanked rows yield `""`.
pub fn row_id(row: &[String]) -> &str {
    row.first().map(|id| id.trim()).unwrap_or("")
}

pub fn is_blank(row: &[String]) -> bool {
    row_id(row).is_empty()
}

/// Convert a column letter (`A`..=`Z`) to its zero-based index.
pub fn column_index(letter: char) -> usize {
    (letter.to_ascii_uppercase() as u8).saturating_sub(b'A') as usize
}

/// A typed entity stored as one row of a sheet.
///
/// The identifier is always the first column.
pub trait Record: Clone + Send + Sync + 'static {
    /// Human name used in errors ("Item not found: ITM-0003").
    const ENTITY: &'static str;
    const SHEET: &'static str;
    const LAST_COLUMN: char;
    const PREFIX: &'static str;
    /// Column stamped with the current time on every update, if the entity has one.
    const UPDATED_AT: Option<usize> = None;
    /// Column holding the `active` flag, if the entity has one.
    const ACTIVE: Option<usize> = None;

    type Patch: Send + Sync;

    fn id(&self) -> &str;
    fn decode(row: &[String]) -> Self;
    fn encode(&self) -> Row;
    fn patch_cells(patch: &Self::Patch) -> RowPatch;

    fn width() -> usize {
        column_index(Self::LAST_COLUMN) + 1
    }

    /// True only when the raw `active` cell reads exactly `"false"`. Rows with
    /// a blank or hand-typed flag still count as live for listings.
    fn is_deactivated(row: &[String]) -> bool {
        Self::ACTIVE.is_some_and(|column| cell(row, column) == "false")
    }
}

/// A sparse set of cell writes merged into an existing row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowPatch {
    cells: BTreeMap<usize, String>,
}

impl RowPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, column: usize, value: impl Into<String>) -> Self {
        self.cells.insert(column, value.into());
        self
    }

    pub fn set_opt(self, column: usize, value: Option<&str>) -> Self {
        match value {
            Some(value) => self.set(column, value),
            None => self,
        }
    }

    pub fn set_bool(self, column: usize, value: Option<bool>) -> Self {
        match value {
            Some(value) => self.set(column, encode_bool(value)),
            None => self,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Write the patched cells into `row`, growing it with blanks only as far
    /// as the right-most patched column.
    pub fn apply(&self, row: &mut Row) {
        for (&column, value) in &self.cells {
            if row.len() <= column {
                row.resize(column + 1, String::new());
            }
            row[column] = value.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn row(cells: &[&str]) -> Row {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn bool_decoding_is_strict() {
        assert!(decode_bool("true"));
        assert!(!decode_bool("false"));
        assert!(!decode_bool("TRUE"));
        assert!(!decode_bool(""));
        assert!(!decode_bool("yes"));
    }

    #[test]
    fn timestamps_have_second_precision() {
        let at = Utc
            .with_ymd_and_hms(2024, 3, 9, 14, 5, 7)
            .unwrap()
            .checked_add_signed(chrono::Duration::milliseconds(789))
            .unwrap();
        assert_eq!(format_timestamp(at), "2024-03-09 14:05:07");
    }

    #[test]
    fn missing_cells_are_blank() {
        let r = row(&["CAT-0001"]);
        assert_eq!(cell(&r, 0), "CAT-0001");
        assert_eq!(cell(&r, 4), "");
    }

    #[test]
    fn blank_rows_have_no_id() {
        assert!(is_blank(&[]));
        assert!(is_blank(&row(&["", "", ""])));
        assert!(is_blank(&row(&["   "])));
        assert!(!is_blank(&row(&[" ITM-0002 "])));
        assert_eq!(row_id(&row(&[" ITM-0002 "])), "ITM-0002");
    }

    #[test]
    fn column_letters_map_to_indexes() {
        assert_eq!(column_index('A'), 0);
        assert_eq!(column_index('h'), 7);
        assert_eq!(column_index('L'), 11);
    }

    #[test]
    fn patch_only_touches_named_cells() {
        let mut r = row(&["CAT-0001", "Old", "2024-01-01 00:00:00", "x", "weird"]);
        RowPatch::new().set(1, "New").apply(&mut r);
        assert_eq!(
            r,
            row(&["CAT-0001", "New", "2024-01-01 00:00:00", "x", "weird"])
        );
    }

    #[test]
    fn patch_grows_short_rows() {
        let mut r = row(&["UOM-0001", "kg"]);
        RowPatch::new().set_bool(3, Some(false)).apply(&mut r);
        assert_eq!(r, row(&["UOM-0001", "kg", "", "false"]));
    }

    #[test]
    fn optional_setters_skip_none() {
        let patch = RowPatch::new()
            .set_opt(1, None)
            .set_bool(2, None)
            .set_opt(3, Some("x"));
        assert_eq!(patch.len(), 1);
    }
}
