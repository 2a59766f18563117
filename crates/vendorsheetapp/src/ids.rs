//! # Identifier Allocation
//!
//! Records carry human-readable identifiers of the form `PREFIX-0042`. There is
//! no sequence stored anywhere: the next number is derived by scanning the
//! identifier column of the sheet and taking the highest suffix seen plus one.
//!
//! Blanked rows have an empty identifier cell and simply don't match. The scan
//! takes the maximum rather than counting rows, so gaps left below the maximum
//! are never refilled. Blanking the row that holds the highest identifier does
//! free that number: the next create hands it out again.
//!
//! The scan-then-append sequence is not atomic. Two writers creating records
//! at the same time can both observe the same maximum and collide; the store
//! assumes a single writer per sheet.

/// Suffix width for [`format_id`]. Longer numbers are never truncated.
pub const ID_PAD: usize = 4;

pub fn format_id(prefix: &str, number: u64) -> String {
    format!("{}-{:0width$}", prefix, number, width = ID_PAD)
}

/// Parse the numeric suffix of `raw` if it carries `prefix`.
pub fn parse_id(raw: &str, prefix: &str) -> Option<u64> {
    let suffix = raw.trim().strip_prefix(prefix)?.strip_prefix('-')?;
    if suffix.is_empty() || !suffix.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    suffix.parse().ok()
}

/// Next free number for `prefix`, given every row of the identifier column.
pub fn next_id_from_rows<R: AsRef<[String]>>(rows: &[R], prefix: &str) -> u64 {
    let max = rows
        .iter()
        .filter_map(|row| row.as_ref().first())
        .filter_map(|id| parse_id(id, prefix))
        .max()
        .unwrap_or(0);
    max + 1
}

/// Hands out consecutive identifiers starting from one scan of the sheet.
#[derive(Debug, Clone)]
pub struct IdAllocator {
    prefix: &'static str,
    next: u64,
}

impl IdAllocator {
    pub fn from_rows<R: AsRef<[String]>>(rows: &[R], prefix: &'static str) -> Self {
        Self {
            prefix,
            next: next_id_from_rows(rows, prefix),
        }
    }

    pub fn peek(&self) -> u64 {
        self.next
    }

    pub fn allocate(&mut self) -> String {
        let id = format_id(self.prefix, self.next);
        self.next += 1;
        id
    }
}
