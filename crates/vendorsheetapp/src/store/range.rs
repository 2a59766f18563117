use crate::codec::{column_index, Record};
use crate::error::{Result, VendorSheetError};
use std::fmt;
use std::str::FromStr;

/// A whole-column span of one sheet in A1 notation, e.g. `Items!A:H`.
///
/// Only single-letter columns are supported; no sheet in the workbook is wider
/// than `Z`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SheetRange {
    sheet: String,
    first: char,
    last: char,
}

impl SheetRange {
    pub fn new(sheet: impl Into<String>, first: char, last: char) -> Self {
        Self {
            sheet: sheet.into(),
            first: first.to_ascii_uppercase(),
            last: last.to_ascii_uppercase(),
        }
    }

    /// Every column of a record's sheet.
    pub fn of<R: Record>() -> Self {
        Self::new(R::SHEET, 'A', R::LAST_COLUMN)
    }

    /// Just the identifier column of a record's sheet.
    pub fn id_column<R: Record>() -> Self {
        Self::new(R::SHEET, 'A', 'A')
    }

    pub fn sheet(&self) -> &str {
        &self.sheet
    }

    pub fn first_column(&self) -> usize {
        column_index(self.first)
    }

    pub fn last_column(&self) -> usize {
        column_index(self.last)
    }

    pub fn width(&self) -> usize {
        self.last_column() - self.first_column() + 1
    }

    pub fn a1(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for SheetRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}!{}:{}", self.sheet, self.first, self.last)
    }
}

impl FromStr for SheetRange {
    type Err = VendorSheetError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || VendorSheetError::InvalidInput(format!("Invalid range: {}", s));

        let (sheet, columns) = s.rsplit_once('!').ok_or_else(invalid)?;
        let (first, last) = columns.split_once(':').ok_or_else(invalid)?;
        let letter = |part: &str| {
            let mut chars = part.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) if c.is_ascii_alphabetic() => Some(c),
                _ => None,
            }
        };
        let (first, last) = match (letter(first), letter(last)) {
            (Some(first), Some(last)) => (first, last),
            _ => return Err(invalid()),
        };
        if sheet.is_empty() || first.to_ascii_uppercase() > last.to_ascii_uppercase() {
            return Err(invalid());
        }
        Ok(Self::new(sheet, first, last))
    }
}
