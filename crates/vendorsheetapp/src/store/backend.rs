use super::clearer::RowRun;
use super::range::SheetRange;
use crate::codec::Row;
use crate::error::Result;
use std::future::Future;

/// Abstract interface for the remote tabular store.
///
/// This trait handles the "how" of talking to the spreadsheet (HTTP vs memory),
/// while [`SheetStore`](super::SheetStore) handles the "what" (records, ids,
/// updates and deletes).
///
/// Nothing here is transactional. Two overlapping `overwrite` calls silently
/// clobber each other and the last one wins; there is no version check.
/// Callers that need more must swap in a different backend, not work around
/// this one.
///
/// Futures are `Send` so the row clearer can dispatch them on a task set.
pub trait SheetBackend: Send + Sync + 'static {
    /// Every row of the range, top to bottom. Rows come back ragged: trailing
    /// blank cells are dropped, blanked rows in the middle come back empty and
    /// trailing blank rows are omitted entirely.
    fn read(&self, range: &SheetRange) -> impl Future<Output = Result<Vec<Row>>> + Send;

    /// Append rows after the last populated row of the range. The store picks
    /// the row numbers.
    fn append(&self, range: &SheetRange, rows: Vec<Row>) -> impl Future<Output = Result<()>> + Send;

    /// Write `rows` over the range starting at row 1. Each row replaces every
    /// cell of its line within the range.
    fn overwrite(
        &self,
        range: &SheetRange,
        rows: Vec<Row>,
    ) -> impl Future<Output = Result<()>> + Send;

    /// Blank every cell of the given 1-based inclusive row runs, in one
    /// request. Rows are not removed and nothing shifts.
    fn clear_runs(&self, sheet: &str, runs: Vec<RowRun>) -> impl Future<Output = Result<()>> + Send;
}
