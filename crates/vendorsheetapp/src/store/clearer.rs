//! # Row Clearer
//!
//! Deleting a record blanks its row in place. Rows are never removed, because
//! row numbers are the only handle other code holds on a record and removing
//! one would shift everything below it.
//!
//! Blanking many rows is done in as few requests as possible:
//!
//! 1. Sort and de-duplicate the row numbers.
//! 2. Coalesce them into maximal runs of consecutive rows.
//! 3. Split the runs into chunks of at most `chunk_size` runs. Each chunk is
//!    one batched clear request.
//! 4. Dispatch chunks with at most `parallel_limit` requests in flight.
//! 5. Wait for every chunk. The first failure is returned.
//!
//! A failure does not roll anything back: chunks that finished before it stay
//! cleared. Chunks still queued when the failure surfaces are dropped.

use super::backend::SheetBackend;
use crate::error::{Result, VendorSheetError};
use serde::Serialize;
use std::sync::Arc;
use tokio::task::JoinSet;

pub const DEFAULT_CHUNK_SIZE: usize = 50;
pub const DEFAULT_PARALLEL_LIMIT: usize = 5;

/// An inclusive span of 1-based row numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct RowRun {
    pub start: u32,
    pub end: u32,
}

impl RowRun {
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    pub fn single(row: u32) -> Self {
        Self::new(row, row)
    }

    pub fn row_count(&self) -> usize {
        (self.end - self.start + 1) as usize
    }

    pub fn contains(&self, row: u32) -> bool {
        self.start <= row && row <= self.end
    }
}

/// Collapse row numbers into sorted, maximal runs of consecutive rows.
pub fn coalesce_runs(rows: &[u32]) -> Vec<RowRun> {
    let mut sorted = rows.to_vec();
    sorted.sort_unstable();
    sorted.dedup();

    let mut runs: Vec<RowRun> = Vec::new();
    for row in sorted {
        match runs.last_mut() {
            Some(run) if run.end + 1 == row => run.end = row,
            _ => runs.push(RowRun::single(row)),
        }
    }
    runs
}

pub fn chunk_runs(runs: &[RowRun], chunk_size: usize) -> Vec<Vec<RowRun>> {
    runs.chunks(chunk_size.max(1)).map(|c| c.to_vec()).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClearOptions {
    pub chunk_size: usize,
    pub parallel_limit: usize,
}

impl Default for ClearOptions {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            parallel_limit: DEFAULT_PARALLEL_LIMIT,
        }
    }
}

/// What a clear did, for logging and for callers that report counts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ClearReport {
    pub rows: usize,
    pub runs: usize,
    pub chunks: usize,
}

pub struct RowClearer<B: SheetBackend> {
    backend: Arc<B>,
    options: ClearOptions,
}

impl<B: SheetBackend> RowClearer<B> {
    pub fn new(backend: Arc<B>, options: ClearOptions) -> Self {
        Self { backend, options }
    }

    pub fn options(&self) -> ClearOptions {
        self.options
    }

    pub async fn clear(&self, sheet: &str, rows: &[u32]) -> Result<ClearReport> {
        if rows.is_empty() {
            return Err(VendorSheetError::InvalidInput(
                "rows to clear must not be empty".to_string(),
            ));
        }
        if rows.contains(&0) {
            return Err(VendorSheetError::InvalidInput(
                "row numbers are 1-based".to_string(),
            ));
        }

        let runs = coalesce_runs(rows);
        let chunks = chunk_runs(&runs, self.options.chunk_size);
        let report = ClearReport {
            rows: runs.iter().map(RowRun::row_count).sum(),
            runs: runs.len(),
            chunks: chunks.len(),
        };
        tracing::info!(
            sheet,
            rows = report.rows,
            runs = report.runs,
            chunks = report.chunks,
            "clearing rows"
        );

        let limit = self.options.parallel_limit.max(1);
        let mut tasks: JoinSet<Result<()>> = JoinSet::new();
        for chunk in chunks {
            let backend = Arc::clone(&self.backend);
            let sheet = sheet.to_string();
            tasks.spawn(async move { backend.clear_runs(&sheet, chunk).await });

            if tasks.len() >= limit {
                join_next_chunk(&mut tasks).await?;
            }
        }
        while !tasks.is_empty() {
            join_next_chunk(&mut tasks).await?;
        }

        Ok(report)
    }
}

async fn join_next_chunk(tasks: &mut JoinSet<Result<()>>) -> Result<()> {
    let Some(joined) = tasks.join_next().await else {
        return Ok(());
    };
    joined.map_err(|err| VendorSheetError::Upstream(format!("clear task failed: {err}")))?
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::mem_backend::MemBackend;
    use std::time::Duration;

    fn runs(pairs: &[(u32, u32)]) -> Vec<RowRun> {
        pairs.iter().map(|&(s, e)| RowRun::new(s, e)).collect()
    }

    fn clearer(
        backend: &Arc<MemBackend>,
        chunk_size: usize,
        parallel_limit: usize,
    ) -> RowClearer<MemBackend> {
        RowClearer::new(
            Arc::clone(backend),
            ClearOptions {
                chunk_size,
                parallel_limit,
            },
        )
    }

    fn seeded(rows: u32) -> Arc<MemBackend> {
        let backend = MemBackend::new();
        let mut data = vec![vec!["id".to_string(), "name".to_string()]];
        for n in 2..=rows {
            data.push(vec![format!("ITM-{n:04}"), format!("row {n}")]);
        }
        backend.seed("Items", data);
        Arc::new(backend)
    }

    #[test]
    fn coalesces_contiguous_rows() {
        assert_eq!(
            coalesce_runs(&[5, 6, 7, 10, 12, 13]),
            runs(&[(5, 7), (10, 10), (12, 13)])
        );
    }

    #[test]
    fn coalesce_sorts_and_dedups() {
        assert_eq!(
            coalesce_runs(&[13, 5, 7, 6, 6, 12, 10, 5]),
            runs(&[(5, 7), (10, 10), (12, 13)])
        );
    }

    #[test]
    fn single_row_is_its_own_run() {
        assert_eq!(coalesce_runs(&[42]), runs(&[(42, 42)]));
    }

    #[test]
    fn runs_partition_input_and_are_maximal() {
        let input = [3, 4, 9, 2, 20, 21, 22, 30, 8, 11];
        let result = coalesce_runs(&input);

        let mut covered: Vec<u32> = result.iter().flat_map(|r| r.start..=r.end).collect();
        let mut expected = input.to_vec();
        expected.sort_unstable();
        covered.sort_unstable();
        assert_eq!(covered, expected);

        for pair in result.windows(2) {
            assert!(pair[0].end + 1 < pair[1].start, "{:?} could merge", pair);
        }
    }

    #[test]
    fn chunks_bound_runs_per_request() {
        let r = runs(&[(1, 1), (3, 3), (5, 5), (7, 7), (9, 9)]);
        let chunks = chunk_runs(&r, 2);
        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[2], runs(&[(9, 9)]));
        assert_eq!(chunk_runs(&r, 0).len(), 5);
    }

    #[tokio::test]
    async fn rejects_empty_input_without_calling_backend() {
        let backend = seeded(5);
        let err = clearer(&backend, 50, 5).clear("Items", &[]).await.unwrap_err();
        assert!(matches!(err, VendorSheetError::InvalidInput(_)));
        assert!(backend.clear_batches().is_empty());
    }

    #[tokio::test]
    async fn rejects_row_zero() {
        let backend = seeded(5);
        let err = clearer(&backend, 50, 5).clear("Items", &[0, 2]).await.unwrap_err();
        assert!(matches!(err, VendorSheetError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn dispatches_one_request_per_chunk() {
        let backend = seeded(12);
        let report = clearer(&backend, 2, 5)
            .clear("Items", &[2, 4, 6, 8, 10])
            .await
            .unwrap();

        assert_eq!(report, ClearReport { rows: 5, runs: 5, chunks: 3 });
        let mut batches = backend.clear_batches();
        batches.sort_by_key(|b| b[0].start);
        assert_eq!(batches.len(), 3);
        assert_eq!(batches[0], runs(&[(2, 2), (4, 4)]));
        assert_eq!(batches[2], runs(&[(10, 10)]));
    }

    #[tokio::test]
    async fn blanks_rows_without_shifting() {
        let backend = seeded(8);
        clearer(&backend, 50, 5).clear("Items", &[3, 4, 6]).await.unwrap();

        let rows = backend.rows("Items");
        assert_eq!(rows.len(), 8);
        assert!(rows[2].iter().all(String::is_empty));
        assert!(rows[3].iter().all(String::is_empty));
        assert!(rows[5].iter().all(String::is_empty));
        assert_eq!(rows[4][0], "ITM-0005");
        assert_eq!(rows[7][0], "ITM-0008");
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn never_exceeds_parallel_limit() {
        let backend = seeded(60);
        backend.set_clear_delay(Some(Duration::from_millis(20)));
        let rows: Vec<u32> = (2..=60).step_by(2).collect();

        let report = clearer(&backend, 1, 3).clear("Items", &rows).await.unwrap();

        assert_eq!(report.chunks, rows.len());
        assert_eq!(backend.clear_batches().len(), rows.len());
        assert!(backend.max_in_flight_clears() <= 3);
        assert!(backend.max_in_flight_clears() >= 2);
    }

    #[tokio::test]
    async fn first_failure_is_returned() {
        let backend = seeded(20);
        backend.fail_clears_touching(Some(9));

        let err = clearer(&backend, 1, 2)
            .clear("Items", &[3, 5, 7, 9, 11])
            .await
            .unwrap_err();

        assert!(err.is_upstream());
        // Rows in chunks that finished first stay cleared.
        assert!(backend.rows("Items")[2].iter().all(String::is_empty));
        assert_eq!(backend.rows("Items")[8][0], "ITM-0009");
    }
}
